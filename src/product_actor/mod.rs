//! Product catalog: creation rules and the search filters.

pub mod entity;
pub mod error;
pub mod search;

pub use error::*;
pub use search::*;
