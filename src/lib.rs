//! Shop backend services on a tokio actor registry: users, the product
//! catalog, orders with their status engine, and login lockout.

pub mod actor_framework;
pub mod app_system;
pub mod auth_actor;
pub mod clients;
pub mod domain;
pub mod order_actor;
pub mod product_actor;
pub mod user_actor;

#[cfg(test)]
mod mock_framework;
