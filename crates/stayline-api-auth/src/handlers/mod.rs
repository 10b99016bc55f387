//! Authentication endpoint handlers.

pub mod check;
pub mod refresh;
pub mod signin;
pub mod signout;
pub mod signup;

pub use check::check_handler;
pub use refresh::refresh_handler;
pub use signin::signin_handler;
pub use signout::signout_handler;
pub use signup::signup_handler;

use crate::error::ApiAuthError;
use validator::Validate;

/// Run validator-derive checks, flattening field errors into one message.
pub(crate) fn validate_request<T: Validate>(request: &T) -> Result<(), ApiAuthError> {
    request.validate().map_err(|e| {
        let errors: Vec<String> = e
            .field_errors()
            .values()
            .flat_map(|errors| {
                errors
                    .iter()
                    .filter_map(|e| e.message.as_ref().map(std::string::ToString::to_string))
            })
            .collect();
        ApiAuthError::Validation(errors.join(", "))
    })
}
