use thiserror::Error;

use crate::actor_framework::FrameworkError;
use crate::app_system::{ErrorChannel, ReportableError};

pub const EMPTY_PRODUCT_NAME: &str = "Product name cannot be empty";
pub const NEGATIVE_PRICE: &str = "Price cannot be negative";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(String),
    /// Structurally malformed input; never reported through an envelope
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Product validation error: {0}")]
    ValidationError(String),
    #[error("Operation not supported on products: {0}")]
    Unsupported(&'static str),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError<ProductError>> for ProductError {
    fn from(error: FrameworkError<ProductError>) -> Self {
        match error {
            FrameworkError::NotFound(id) => ProductError::NotFound(id),
            FrameworkError::Rejected(inner) => inner,
            other => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl ReportableError for ProductError {
    fn channel(&self) -> ErrorChannel {
        match self {
            ProductError::ValidationError(reason) => ErrorChannel::Validation(vec![reason.clone()]),
            ProductError::NotFound(_) => ErrorChannel::Message("Product not found".to_string()),
            ProductError::InvalidArgument(reason) => ErrorChannel::Message(reason.clone()),
            ProductError::Unsupported(_) | ProductError::ActorCommunicationError(_) => {
                ErrorChannel::Message(self.to_string())
            }
        }
    }
}
