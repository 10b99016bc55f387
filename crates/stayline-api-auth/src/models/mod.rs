//! Request and response DTOs for the authentication endpoints.

pub mod requests;
pub mod responses;

pub use requests::{SigninRequest, SignupRequest};
pub use responses::{CheckResponse, MessageResponse};
