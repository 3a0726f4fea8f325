//! Shared configuration and session plumbing for the catalog migration tool.

mod app_config;
mod config;
mod session;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use session::{SessionCredentials, SessionProvider, StaticSessionProvider};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
