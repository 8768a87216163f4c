use anyhow::Error;

use super::kind::ErrorKind;
use super::response::{ApiError, ApiErrors};

/// Codes the service uses for "the referenced record does not exist".
const NOT_FOUND_CODES: &[i32] = &[2000, 6004, 2238];

/// Number of error records carried by a failure; warnings are excluded.
///
/// A failure that did not come from the service at all (transport, protocol)
/// counts as one opaque error.
pub fn get_num_errors(err: Option<&Error>) -> usize {
    let Some(err) = err else {
        return 0;
    };

    if let Some(errs) = err.downcast_ref::<ApiErrors>() {
        return errs.errors().len();
    }

    if let Some(e) = err.downcast_ref::<ApiError>() {
        if e.is_error() {
            return 1;
        }
        return 0;
    }

    1
}

/// Message text suitable for end users. Codes, kinds and request uuids are
/// never included; foreign failures fall back to their display rendering.
pub fn to_user_friendly_message(err: &Error) -> String {
    if let Some(errs) = err.downcast_ref::<ApiErrors>() {
        return errs
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join(", ");
    }

    if let Some(e) = err.downcast_ref::<ApiError>() {
        return e.message.clone();
    }

    err.to_string()
}

/// True when any contained record carries one of the known not-found codes.
pub fn is_not_found_error(err: &Error) -> bool {
    any_record(err, |e| NOT_FOUND_CODES.contains(&e.code))
}

/// True when the service understood the request and rejected it, as opposed
/// to a failure below the business layer (network, protocol), which this
/// model never wraps.
pub fn is_business_error(err: &Error) -> bool {
    any_record(err, |_| true)
}

/// True when any contained record is fatal.
pub fn is_fatal_business_error(err: &Error) -> bool {
    any_record(err, |e| e.kind == ErrorKind::Fatal)
}

/// True when any contained record's code equals `code`.
pub fn is_error_code(err: &Error, code: i32) -> bool {
    any_record(err, |e| e.code == code)
}

fn any_record(err: &Error, pred: impl Fn(&ApiError) -> bool) -> bool {
    if let Some(errs) = err.downcast_ref::<ApiErrors>() {
        return errs.iter().any(pred);
    }

    if let Some(e) = err.downcast_ref::<ApiError>() {
        return pred(e);
    }

    false
}
