//! Structured error model for service responses

pub mod classify;
pub mod codec;
pub mod kind;
pub mod response;

pub use classify::{
    get_num_errors, is_business_error, is_error_code, is_fatal_business_error, is_not_found_error,
    to_user_friendly_message,
};
pub use codec::{errors_from_string, DecodeError};
pub use kind::ErrorKind;
pub use response::{ApiError, ApiErrors};
