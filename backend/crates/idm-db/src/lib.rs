pub mod error;
pub mod sqlite_identity_store;


pub use error::{DbError, Result};
pub use sqlite_identity_store::SqliteIdentityStore;
