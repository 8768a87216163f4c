use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity tag carried on every error record.
///
/// The service is free to introduce new tags, so unknown strings are kept
/// verbatim rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ErrorKind {
    Fatal,
    NonFatal,
    Warning,
    Other(String),
}

impl ErrorKind {
    /// True for kinds that count toward error totals; warnings are excluded.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Fatal | Self::NonFatal)
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, Self::Warning)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Fatal => "FATAL_ERROR",
            Self::NonFatal => "NON_FATAL_ERROR",
            Self::Warning => "WARNING",
            Self::Other(tag) => tag,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for ErrorKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "FATAL_ERROR" => Self::Fatal,
            "NON_FATAL_ERROR" => Self::NonFatal,
            "WARNING" => Self::Warning,
            _ => Self::Other(tag),
        }
    }
}

impl From<&str> for ErrorKind {
    fn from(tag: &str) -> Self {
        Self::from(tag.to_string())
    }
}

impl From<ErrorKind> for String {
    fn from(kind: ErrorKind) -> Self {
        kind.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_kinds_round_trip() {
        for tag in ["FATAL_ERROR", "NON_FATAL_ERROR", "WARNING"] {
            assert_eq!(ErrorKind::from(tag).to_string(), tag);
        }
        assert_eq!(ErrorKind::from("FATAL_ERROR"), ErrorKind::Fatal);
        assert_eq!(ErrorKind::from("NON_FATAL_ERROR"), ErrorKind::NonFatal);
        assert_eq!(ErrorKind::from("WARNING"), ErrorKind::Warning);
    }

    #[test]
    fn test_unknown_kind_is_kept_verbatim() {
        let kind = ErrorKind::from("DEPRECATION_NOTICE");
        assert_eq!(kind, ErrorKind::Other("DEPRECATION_NOTICE".to_string()));
        assert_eq!(kind.to_string(), "DEPRECATION_NOTICE");
        assert!(!kind.is_error());
        assert!(!kind.is_warning());
    }

    #[test]
    fn test_is_error_excludes_warnings() {
        assert!(ErrorKind::Fatal.is_error());
        assert!(ErrorKind::NonFatal.is_error());
        assert!(!ErrorKind::Warning.is_error());
        assert!(ErrorKind::Warning.is_warning());
    }

    #[test]
    fn test_serde_uses_wire_literals() {
        let json = serde_json::to_string(&ErrorKind::NonFatal).unwrap();
        assert_eq!(json, "\"NON_FATAL_ERROR\"");
        let kind: ErrorKind = serde_json::from_str("\"WARNING\"").unwrap();
        assert_eq!(kind, ErrorKind::Warning);
    }
}
