use thiserror::Error;

use crate::actor_framework::FrameworkError;
use super::policy::EMAIL_TAKEN;
use crate::app_system::{ErrorChannel, ReportableError};

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    #[error("User not found: {0}")]
    NotFound(String),
    /// Structurally malformed input; never reported through an envelope
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Email is already registered: {0}")]
    DuplicateEmail(String),
    #[error("User validation error: {0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError<UserError>> for UserError {
    fn from(error: FrameworkError<UserError>) -> Self {
        match error {
            FrameworkError::NotFound(id) => UserError::NotFound(id),
            // Ids are generated; the only key callers can collide on is the email
            FrameworkError::DuplicateKey(email) => UserError::DuplicateEmail(email),
            FrameworkError::Rejected(inner) => inner,
            other => UserError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl ReportableError for UserError {
    fn channel(&self) -> ErrorChannel {
        match self {
            UserError::ValidationError(reason) => ErrorChannel::Validation(vec![reason.clone()]),
            UserError::DuplicateEmail(_) => {
                ErrorChannel::Validation(vec![EMAIL_TAKEN.to_string()])
            }
            UserError::NotFound(_) => ErrorChannel::Message("User not found".to_string()),
            UserError::InvalidArgument(reason) => ErrorChannel::Message(reason.clone()),
            UserError::ActorCommunicationError(_) => ErrorChannel::Message(self.to_string()),
        }
    }
}
