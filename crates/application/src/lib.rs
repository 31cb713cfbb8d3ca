//! Application services and ports.

#![forbid(unsafe_code)]

mod account_service;

pub use account_service::{AccountLookup, AccountRepository, AccountService};
