use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Lifecycle status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    /// Defined but not reachable through any transition.
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    /// Every legal (current, target) edge. Any pair not listed is illegal.
    const TRANSITIONS: [(OrderStatus, OrderStatus); 3] = [
        (OrderStatus::Pending, OrderStatus::Processing),
        (OrderStatus::Processing, OrderStatus::Shipped),
        (OrderStatus::Shipped, OrderStatus::Delivered),
    ];

    pub fn can_transition_to(self, target: OrderStatus) -> bool {
        Self::TRANSITIONS.contains(&(self, target))
    }

    /// True when no edge leaves this status.
    pub fn is_terminal(self) -> bool {
        !Self::TRANSITIONS.iter().any(|(from, _)| *from == self)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        };
        f.write_str(name)
    }
}

/// One line of an order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub product_id: String,
    pub quantity: i32,
    pub price: Decimal,
}

impl OrderItem {
    pub fn new(product_id: impl Into<String>, quantity: i32, price: Decimal) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
            price,
        }
    }

    pub fn line_total(&self) -> Decimal {
        Decimal::from(self.quantity) * self.price
    }
}

/// Represents a customer order.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: String,
    pub user_id: String,
    pub items: Vec<OrderItem>,
    pub total_amount: Decimal,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a new order.
#[derive(Debug, Clone)]
pub struct CreateOrderRequest {
    pub user_id: String,
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Builds a Pending order stamped with the current time and its derived total.
    pub fn new(id: impl Into<String>, user_id: impl Into<String>, items: Vec<OrderItem>) -> Self {
        let total_amount = Self::total_of(&items);
        Self {
            id: id.into(),
            user_id: user_id.into(),
            items,
            total_amount,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        }
    }

    /// Test fixture for an order already sitting in `status`.
    #[cfg(test)]
    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }

    pub fn total_of(items: &[OrderItem]) -> Decimal {
        items.iter().map(OrderItem::line_total).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_only_chain_edges_are_legal() {
        for from in OrderStatus::ALL {
            for to in OrderStatus::ALL {
                let expected = matches!(
                    (from, to),
                    (OrderStatus::Pending, OrderStatus::Processing)
                        | (OrderStatus::Processing, OrderStatus::Shipped)
                        | (OrderStatus::Shipped, OrderStatus::Delivered)
                );
                assert_eq!(from.can_transition_to(to), expected, "{from} -> {to}");
            }
        }
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(OrderStatus::Delivered.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
        assert!(!OrderStatus::Pending.is_terminal());
        assert!(!OrderStatus::Shipped.is_terminal());
    }

    #[test]
    fn test_nothing_enters_cancelled() {
        let entries = OrderStatus::ALL
            .iter()
            .filter(|from| from.can_transition_to(OrderStatus::Cancelled))
            .count();
        assert_eq!(entries, 0);
    }

    #[test]
    fn test_new_order_total_and_status() {
        let order = Order::new(
            "order_1",
            "user_1",
            vec![OrderItem::new("p1", 2, dec!(50.00)), OrderItem::new("p2", 1, dec!(25.00))],
        );
        assert_eq!(order.total_amount, dec!(125.00));
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.items.len(), 2);
    }
}
