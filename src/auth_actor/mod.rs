//! Login lockout engine and the credential store seam it consults.

mod actions;
pub mod credentials;
pub mod entity;
pub mod error;

pub use actions::*;
pub use credentials::*;
pub use error::*;
