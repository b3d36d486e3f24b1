use finquiz_core::QuestionSet;
use finquiz_server::server;
use finquiz_shared::{AppEnv, AppError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), AppError> {
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!(
          "{}=debug,finquiz_core=debug,finquiz_server=debug",
          env!("CARGO_CRATE_NAME")
        )
        .into()
      }),
    )
    .with(tracing_subscriber::fmt::layer())
    .with(tracing_error::ErrorLayer::default())
    .init();
  dotenvy::dotenv().ok();

  if let Err(err) = run().await {
    tracing::error!("{err}");
    return Err(err);
  }

  Ok(())
}

async fn run() -> Result<(), AppError> {
  let app_env = AppEnv::from_env()?;

  tracing::info!(
    listen_addr = %app_env.listen_addr,
    allowed_origin = %app_env.allowed_origin,
    questions_path = ?app_env.questions_path,
    "starting {} {}",
    env!("CARGO_PKG_NAME"),
    env!("CARGO_PKG_VERSION")
  );

  let questions = QuestionSet::load(app_env.questions_path.as_deref())?;

  server(&app_env, questions).await
}
