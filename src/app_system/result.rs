//! Success/failure envelope handed back to callers.
//!
//! Two failure channels exist: `errors` carries input-validation reasons,
//! `error_message` carries a single operational failure (lookup or state).

use crate::domain::Session;

/// Where a domain error is reported inside a [`ServiceResult`].
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorChannel {
    Validation(Vec<String>),
    Message(String),
    /// Plain failure with no reason attached
    Unreported,
}

/// Implemented by every domain error that can end up in an envelope.
pub trait ReportableError {
    fn channel(&self) -> ErrorChannel;
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub errors: Vec<String>,
    pub error_message: Option<String>,
}

pub type LoginResult = ServiceResult<Session>;

impl<T> ServiceResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            errors: Vec::new(),
            error_message: None,
        }
    }

    pub fn invalid<I, S>(errors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            success: false,
            data: None,
            errors: errors.into_iter().map(Into::into).collect(),
            error_message: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            errors: Vec::new(),
            error_message: Some(message.into()),
        }
    }

    pub fn unreported() -> Self {
        Self {
            success: false,
            data: None,
            errors: Vec::new(),
            error_message: None,
        }
    }

    pub fn from_error<E: ReportableError>(error: E) -> Self {
        match error.channel() {
            ErrorChannel::Validation(errors) => Self::invalid(errors),
            ErrorChannel::Message(message) => Self::failed(message),
            ErrorChannel::Unreported => Self::unreported(),
        }
    }

    pub fn from_result<E: ReportableError>(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(error) => Self::from_error(error),
        }
    }
}
