use std::sync::Arc;

use anyhow::Context;
use axum::http::HeaderValue;
use finquiz_core::QuestionSet;

#[derive(Clone, Debug)]
pub struct AppState {
  pub questions: Arc<QuestionSet>,
  pub allowed_origin: HeaderValue,
}

impl AppState {
  /// Fails when `allowed_origin` cannot be sent as a header value.
  pub fn new(questions: QuestionSet, allowed_origin: &str) -> anyhow::Result<Self> {
    let allowed_origin = HeaderValue::from_str(allowed_origin)
      .with_context(|| format!("invalid allowed origin {allowed_origin:?}"))?;

    Ok(Self {
      questions: Arc::new(questions),
      allowed_origin,
    })
  }
}
