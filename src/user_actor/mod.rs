//! User registry: registration, profile edits and password policy.

mod actions;
pub mod entity;
pub mod error;
pub mod policy;

pub use actions::*;
pub use error::*;
pub use policy::*;
