use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use super::actions::{OrderAction, OrderActionResult};
use super::error::{
    OrderError, EMPTY_ORDER, NEGATIVE_ITEM_PRICE, NON_POSITIVE_QUANTITY, NOT_PENDING,
    TOTAL_MISMATCH,
};
use crate::actor_framework::Entity;
use crate::domain::{CreateOrderRequest, Order, OrderItem, OrderStatus};

/// Fresh order identifier.
pub fn next_order_id() -> String {
    Uuid::new_v4().to_string()
}

fn validate_items(items: &[OrderItem]) -> Result<(), OrderError> {
    if items.is_empty() {
        return Err(OrderError::ValidationError(EMPTY_ORDER.to_string()));
    }
    if items.iter().any(|item| item.quantity <= 0) {
        return Err(OrderError::ValidationError(NON_POSITIVE_QUANTITY.to_string()));
    }
    if items.iter().any(|item| item.price < Decimal::ZERO) {
        return Err(OrderError::ValidationError(NEGATIVE_ITEM_PRICE.to_string()));
    }
    Ok(())
}

impl Entity for Order {
    type Id = String;
    type CreateParams = CreateOrderRequest;
    type Patch = (); // Orders only change through status transitions
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Error = OrderError;

    fn id(&self) -> &String {
        &self.id
    }

    /// Creates a new Pending order from a creation request.
    ///
    /// # Errors
    /// Returns a validation error for an empty item list, a non-positive
    /// quantity or a negative unit price.
    fn from_create_params(id: String, params: CreateOrderRequest) -> Result<Self, OrderError> {
        validate_items(&params.items)?;
        Ok(Order::new(id, params.user_id, params.items))
    }

    /// Admission check shared by created and registered orders: the order
    /// must be Pending, its items valid and its total derived from them.
    fn on_create(&mut self) -> Result<(), OrderError> {
        if self.status != OrderStatus::Pending {
            warn!(order_id = %self.id, status = %self.status, "Rejected non-pending order");
            return Err(OrderError::ValidationError(NOT_PENDING.to_string()));
        }
        validate_items(&self.items)?;
        if self.total_amount != Order::total_of(&self.items) {
            return Err(OrderError::ValidationError(TOTAL_MISMATCH.to_string()));
        }
        Ok(())
    }

    fn on_update(&mut self, _patch: ()) -> Result<(), OrderError> {
        Err(OrderError::Unsupported("field updates; use a status transition"))
    }

    /// Applies a status transition if the transition table allows it.
    fn handle_action(&mut self, action: OrderAction) -> Result<OrderActionResult, OrderError> {
        match action {
            OrderAction::TransitionTo(target) => {
                let current = self.status;
                if !current.can_transition_to(target) {
                    warn!(
                        order_id = %self.id,
                        from = %current,
                        to = %target,
                        "Rejected status transition"
                    );
                    return Err(OrderError::InvalidTransition { from: current, to: target });
                }
                self.status = target;
                info!(order_id = %self.id, from = %current, to = %target, "Order status changed");
                Ok(OrderActionResult::TransitionTo { from: current, to: target })
            }
        }
    }
}
