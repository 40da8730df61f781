//! Order registry: creation validation and the status transition engine.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
