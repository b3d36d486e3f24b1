use std::{env, net::SocketAddr, path::PathBuf};

use anyhow::Context;

const LISTEN_ADDR: &str = "QUIZ_LISTEN_ADDR";
const ALLOWED_ORIGIN: &str = "QUIZ_ALLOWED_ORIGIN";
const QUESTIONS_PATH: &str = "QUIZ_QUESTIONS_PATH";

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8081";
const DEFAULT_ALLOWED_ORIGIN: &str = "*";

/// Process configuration, read once at startup and passed down explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppEnv {
  /// Address the HTTP listener binds to
  pub listen_addr: SocketAddr,
  /// Value sent in `Access-Control-Allow-Origin`
  pub allowed_origin: String,
  /// JSON question file; `None` means the embedded set
  pub questions_path: Option<PathBuf>,
}

impl AppEnv {
  /// Read configuration from the process environment.
  pub fn from_env() -> anyhow::Result<Self> {
    Self::from_lookup(|key| env::var(key).ok())
  }

  /// Read configuration through `lookup`. Empty values count as unset.
  pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    let raw_addr = var(LISTEN_ADDR).unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_owned());
    let listen_addr = raw_addr
      .trim()
      .parse::<SocketAddr>()
      .with_context(|| {
        format!("{LISTEN_ADDR}={raw_addr:?} is not a socket address like {DEFAULT_LISTEN_ADDR}")
      })?;

    Ok(Self {
      listen_addr,
      allowed_origin: var(ALLOWED_ORIGIN).unwrap_or_else(|| DEFAULT_ALLOWED_ORIGIN.to_owned()),
      questions_path: var(QUESTIONS_PATH).map(PathBuf::from),
    })
  }
}

impl Default for AppEnv {
  fn default() -> Self {
    Self {
      listen_addr: SocketAddr::from(([127, 0, 0, 1], 8081)),
      allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_owned(),
      questions_path: None,
    }
  }
}
