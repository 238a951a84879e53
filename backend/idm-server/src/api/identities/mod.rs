pub mod delete_response;
#[allow(clippy::module_inception)]
pub mod identities;
pub mod identity_dto;
pub mod identity_list_response;
pub mod identity_response;
pub mod register_identity_request;
pub mod update_identity_request;
pub mod user_list_response;
