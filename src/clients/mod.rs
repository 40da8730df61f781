//! Typed handles over the resource actors. Each client translates framework
//! errors into its domain error and, for request-level operations, into a
//! `ServiceResult` envelope.

#[macro_use]
mod macros;

pub mod auth_client;
pub mod order_client;
pub mod product_client;
pub mod user_client;

pub use auth_client::AuthClient;
pub use order_client::OrderClient;
pub use product_client::ProductClient;
pub use user_client::UserClient;
