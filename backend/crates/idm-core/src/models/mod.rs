pub mod identity;
pub mod identity_update;
pub mod new_identity;
pub mod owner;
