//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod account;
mod session;
mod user;

pub use account::{Account, AccountId, AccountType};
pub use session::SessionUser;
pub use user::{UserId, UserRole};
