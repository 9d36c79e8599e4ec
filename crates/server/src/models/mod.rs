//! Domain types for the Keystash server.

pub mod order;
pub mod product;
pub mod session;
pub mod user;

pub use order::{Order, RecentOrder};
pub use product::{Product, ProductKey, ProductWithKeys, ProductWithStock};
pub use session::{CurrentUser, session_keys};
pub use user::User;
