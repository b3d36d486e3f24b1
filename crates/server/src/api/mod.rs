use axum::{Router, routing::any};

use crate::utils::AppState;

mod quiz;
pub use quiz::quiz;

pub const QUIZ_PATH: &str = "/api/quiz";

/// The quiz route answers every method the same way.
pub fn app() -> Router<AppState> {
  Router::new().route(QUIZ_PATH, any(quiz))
}
