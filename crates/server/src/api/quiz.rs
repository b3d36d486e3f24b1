use axum::{
  extract::State,
  http::{HeaderValue, header},
  response::{IntoResponse, Response},
};
use finquiz_shared::AppError;

use crate::utils::AppState;

/// Serve the full question set as a JSON array.
///
/// Method, query and body are ignored; every request gets the same bytes.
#[axum::debug_handler]
pub async fn quiz(State(state): State<AppState>) -> Result<Response, AppError> {
  let body = serde_json::to_vec(state.questions.as_ref())?;

  tracing::debug!(count = state.questions.len(), "serving quiz");

  Ok(
    (
      [
        (
          header::CONTENT_TYPE,
          HeaderValue::from_static("application/json"),
        ),
        (header::ACCESS_CONTROL_ALLOW_ORIGIN, state.allowed_origin),
      ],
      body,
    )
      .into_response(),
  )
}
