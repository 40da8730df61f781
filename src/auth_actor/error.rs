use thiserror::Error;

use crate::actor_framework::FrameworkError;
use crate::app_system::{ErrorChannel, ReportableError};

pub const ACCOUNT_LOCKED: &str = "Account is locked";

/// Errors that can occur during authentication.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AuthError {
    /// Wrong credentials on an identity that is still active
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Account is locked: {0}")]
    AccountLocked(String),
    #[error("Operation not supported on login identities: {0}")]
    Unsupported(&'static str),
    #[error("Credential store error: {0}")]
    CredentialStore(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError<AuthError>> for AuthError {
    fn from(error: FrameworkError<AuthError>) -> Self {
        match error {
            FrameworkError::Rejected(inner) => inner,
            other => AuthError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl ReportableError for AuthError {
    fn channel(&self) -> ErrorChannel {
        match self {
            // Failures below the lockout threshold carry no reason.
            AuthError::InvalidCredentials => ErrorChannel::Unreported,
            AuthError::AccountLocked(_) => ErrorChannel::Message(ACCOUNT_LOCKED.to_string()),
            AuthError::Unsupported(_)
            | AuthError::CredentialStore(_)
            | AuthError::ActorCommunicationError(_) => {
                ErrorChannel::Message(self.to_string())
            }
        }
    }
}
