use thiserror::Error;

use crate::product_actor::ProductError;
use crate::user_actor::UserError;

/// Startup, shutdown and top-level wiring failures.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Invalid value for {key}: {value:?}")]
    Config { key: &'static str, value: String },
    #[error("Actor task failed: {0}")]
    ActorTask(#[from] tokio::task::JoinError),
    #[error(transparent)]
    User(#[from] UserError),
    #[error(transparent)]
    Product(#[from] ProductError),
}
