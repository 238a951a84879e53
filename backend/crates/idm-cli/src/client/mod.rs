pub(crate) mod client;
pub(crate) mod error;

pub use client::{ACCOUNT_HEADER, Client};
pub use error::{ClientError, Result as CliClientResult};
