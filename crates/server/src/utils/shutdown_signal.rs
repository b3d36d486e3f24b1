use std::future;

use tokio::signal;

/// Resolves on Ctrl+C or, on unix, SIGTERM.
///
/// A handler that fails to install is logged and never fires; the other one still does.
pub async fn shutdown_signal() {
  let ctrl_c = async {
    if let Err(err) = signal::ctrl_c().await {
      tracing::warn!(%err, "failed to install Ctrl+C handler");
      future::pending::<()>().await;
    }
  };

  #[cfg(unix)]
  let terminate = async {
    match signal::unix::signal(signal::unix::SignalKind::terminate()) {
      Ok(mut sigterm) => {
        sigterm.recv().await;
      }
      Err(err) => {
        tracing::warn!(%err, "failed to install SIGTERM handler");
        future::pending::<()>().await;
      }
    }
  };

  #[cfg(not(unix))]
  let terminate = future::pending::<()>();

  tokio::select! {
    () = ctrl_c => {},
    () = terminate => {},
  }

  tracing::info!("shutdown signal received");
}
