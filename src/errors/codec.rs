use std::num::ParseIntError;

use thiserror::Error;
use tracing::{debug, warn};

use super::kind::ErrorKind;
use super::response::{ApiError, ApiErrors};

const SEPARATOR: &str = "; ";
const CODE_MARKER: &str = "code:";
const MESSAGE_MARKER: &str = "message:";

/// Failure while decoding the delimited error string format.
#[derive(Debug, Error)]
#[error("invalid error code {code_text:?} in encoded error string")]
pub struct DecodeError {
    code_text: String,
    #[source]
    source: ParseIntError,
}

impl DecodeError {
    /// The text that failed to parse as a numeric code.
    pub fn code_text(&self) -> &str {
        &self.code_text
    }
}

/// Decodes the delimited form produced by [`ApiErrors`]'s `Display`:
/// `type: {KIND} code: {CODE} message: {MESSAGE}[; ...]*; request uuid: {UUID}`.
///
/// The recovered request uuid is attached to every record. An empty input
/// decodes to an empty list. The first unparseable code aborts the whole
/// decode; no partial list is returned.
///
/// This is a correct inverse of the rendered form only for well-formed
/// input; messages containing the standalone words `code:` or `message:` do
/// not round-trip.
pub fn errors_from_string(encoded: &str) -> Result<ApiErrors, DecodeError> {
    let segments: Vec<&str> = encoded.split(SEPARATOR).collect();

    // Cut-set trim, kept for compatibility with strings already persisted in
    // logs and headers: any leading character of "request uuid: " is
    // stripped, not the literal prefix. A uuid that itself starts with one
    // of those characters loses it.
    let uuid = segments[segments.len() - 1].trim_start_matches(|c| "request uuid: ".contains(c));

    let mut errors = Vec::new();
    for segment in &segments[..segments.len() - 1] {
        let error = error_from_segment(segment)?.with_request_uuid(uuid);
        errors.push(error);
    }

    debug!("Decoded {} error records from encoded string", errors.len());
    Ok(ApiErrors::new(errors))
}

/// Decodes one `type: {KIND} code: {CODE} message: {MESSAGE}` segment.
fn error_from_segment(segment: &str) -> Result<ApiError, DecodeError> {
    // Same cut-set trim as the uuid segment, here over "type: ".
    let remaining = segment.trim_start_matches(|c| "type: ".contains(c));
    let (kind, remaining) = split_at_word(remaining, CODE_MARKER);
    let (code_text, message) = split_at_word(&remaining, MESSAGE_MARKER);

    let code: i32 = code_text.parse().map_err(|source| {
        warn!(
            "Unparseable error code {:?} in segment {:?}",
            code_text, segment
        );
        DecodeError {
            code_text: code_text.clone(),
            source,
        }
    })?;

    Ok(ApiError::new(ErrorKind::from(kind), code, message))
}

/// Splits on single spaces and collects the words before and after the first
/// occurrence of `word`. Every occurrence of `word` itself is dropped, which
/// is what loses marker words appearing inside a message.
fn split_at_word(text: &str, word: &str) -> (String, String) {
    let mut found = false;
    let mut before = String::new();
    let mut after = String::new();

    for token in text.split(' ') {
        if token == word {
            found = true;
        } else if found {
            if !after.is_empty() {
                after.push(' ');
            }
            after.push_str(token);
        } else {
            if !before.is_empty() {
                before.push(' ');
            }
            before.push_str(token);
        }
    }

    (before, after)
}
