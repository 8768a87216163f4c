//! Client-side data model and error handling for a remote entity management
//! API: entity metadata with typed and schema-unknown views, plus the
//! structured error records the service returns and their delimited string
//! encoding.

pub mod errors;
pub mod models;

pub use errors::{
    errors_from_string, get_num_errors, is_business_error, is_error_code,
    is_fatal_business_error, is_not_found_error, to_user_friendly_message, ApiError, ApiErrors,
    DecodeError, ErrorKind,
};
pub use models::{BaseEntity, Entity, EntityMeta, EntityType, RawEntity, UnorderedStrings};
