use std::future::Future;

use anyhow::Context;
use axum::Router;
use finquiz_core::QuestionSet;
use finquiz_shared::{AppEnv, AppError};
use tokio::net::TcpListener;

use crate::{
  api,
  utils::{AppState, shutdown_signal},
};

/// Bind `app_env.listen_addr` and serve the quiz until Ctrl+C or SIGTERM.
///
/// A bind failure is returned as an error.
pub async fn server(app_env: &AppEnv, questions: QuestionSet) -> Result<(), AppError> {
  let app_state = AppState::new(questions, &app_env.allowed_origin)?;

  let listener = TcpListener::bind(app_env.listen_addr)
    .await
    .with_context(|| format!("failed to bind {}", app_env.listen_addr))?;

  serve(listener, app_state, shutdown_signal()).await
}

/// Serve on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(
  listener: TcpListener,
  app_state: AppState,
  shutdown: F,
) -> Result<(), AppError>
where
  F: Future<Output = ()> + Send + 'static,
{
  let app = Router::new().merge(api::app()).with_state(app_state);

  let addr = listener.local_addr()?;
  tracing::info!("server started at http://{addr}");

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown)
    .await?;

  tracing::info!("server stopped");

  Ok(())
}
