use thiserror::Error;

use crate::actor_framework::FrameworkError;
use crate::app_system::{ErrorChannel, ReportableError};
use crate::domain::OrderStatus;

pub const EMPTY_ORDER: &str = "Order must contain at least one item";
pub const NON_POSITIVE_QUANTITY: &str = "Item quantity must be greater than zero";
pub const NEGATIVE_ITEM_PRICE: &str = "Item price cannot be negative";
pub const TOTAL_MISMATCH: &str = "Order total does not match its items";
pub const NOT_PENDING: &str = "New orders must start in Pending";

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(String),
    #[error("Order already exists: {0}")]
    DuplicateKey(String),
    #[error("Invalid status transition: {from} -> {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },
    #[error("Order validation error: {0}")]
    ValidationError(String),
    #[error("Operation not supported on orders: {0}")]
    Unsupported(&'static str),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError<OrderError>> for OrderError {
    fn from(error: FrameworkError<OrderError>) -> Self {
        match error {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            FrameworkError::DuplicateKey(id) => OrderError::DuplicateKey(id),
            FrameworkError::Rejected(inner) => inner,
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl ReportableError for OrderError {
    fn channel(&self) -> ErrorChannel {
        match self {
            OrderError::ValidationError(reason) => ErrorChannel::Validation(vec![reason.clone()]),
            OrderError::NotFound(_) => ErrorChannel::Message("Order not found".to_string()),
            OrderError::InvalidTransition { .. } => {
                ErrorChannel::Message("Invalid status transition".to_string())
            }
            OrderError::DuplicateKey(_) => {
                ErrorChannel::Message("Order already exists".to_string())
            }
            OrderError::Unsupported(_) | OrderError::ActorCommunicationError(_) => {
                ErrorChannel::Message(self.to_string())
            }
        }
    }
}
