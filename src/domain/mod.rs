pub mod identity;
pub mod order;
pub mod product;
pub mod user;

pub use identity::*;
pub use order::*;
pub use product::*;
pub use user::*;
