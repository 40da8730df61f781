//! System orchestration, startup, and shutdown logic.

pub mod config;
pub mod error;
pub mod result;
pub mod shop_system;
pub mod telemetry;

pub use config::*;
pub use error::*;
pub use result::*;
pub use shop_system::*;
pub use telemetry::*;
