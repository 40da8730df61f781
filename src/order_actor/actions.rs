use crate::domain::OrderStatus;

/// Custom actions for Order entities.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Moves the order to the given status.
    ///
    /// # Errors
    /// Fails with `InvalidTransition` unless (current, target) is a legal edge.
    TransitionTo(OrderStatus),
}

/// Results from OrderActions - variants match 1:1 with OrderAction
#[derive(Debug, Clone, PartialEq)]
pub enum OrderActionResult {
    TransitionTo { from: OrderStatus, to: OrderStatus },
}
