//! idm-cli library
//!
//! Exports the HTTP client and the demo seeder for use in tests.

pub(crate) mod client;
pub(crate) mod seed;


pub use client::{ACCOUNT_HEADER, CliClientResult, Client, ClientError};
pub use seed::{DEFAULT_SEED_COUNT, seed_accounts};
