//! ARR-prefixed error types with structured error codes.

#![allow(missing_docs)]

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Shared `Result` alias for the project.
pub type Result<T> = std::result::Result<T, ArrError>;

/// Top-level error type for the array console.
#[derive(Debug, Error)]
pub enum ArrError {
    #[error("[ARR-1001] invalid configuration: {details}")]
    InvalidConfig { details: String },

    #[error("[ARR-1002] missing configuration file: {path}")]
    MissingConfig { path: PathBuf },

    #[error("[ARR-1003] configuration parse failure in {context}: {details}")]
    ConfigParse {
        context: &'static str,
        details: String,
    },

    #[error("[ARR-2001] index {index} out of bounds for array of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("[ARR-3002] IO failure at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ArrError {
    /// Stable machine-parseable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidConfig { .. } => "ARR-1001",
            Self::MissingConfig { .. } => "ARR-1002",
            Self::ConfigParse { .. } => "ARR-1003",
            Self::IndexOutOfBounds { .. } => "ARR-2001",
            Self::Io { .. } => "ARR-3002",
        }
    }

    /// Whether the error signals a logic fault rather than bad input or environment.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::IndexOutOfBounds { .. })
    }

    /// Convenience constructor for IO errors with a known path.
    #[must_use]
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

impl From<toml::de::Error> for ArrError {
    fn from(value: toml::de::Error) -> Self {
        Self::ConfigParse {
            context: "toml",
            details: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_variants() -> Vec<ArrError> {
        vec![
            ArrError::InvalidConfig {
                details: String::new(),
            },
            ArrError::MissingConfig {
                path: PathBuf::new(),
            },
            ArrError::ConfigParse {
                context: "",
                details: String::new(),
            },
            ArrError::IndexOutOfBounds { index: 0, len: 0 },
            ArrError::Io {
                path: PathBuf::new(),
                source: std::io::Error::other("test"),
            },
        ]
    }

    #[test]
    fn error_codes_are_unique() {
        let codes: Vec<&str> = all_variants().iter().map(ArrError::code).collect();
        let unique: std::collections::HashSet<&&str> = codes.iter().collect();
        assert_eq!(
            codes.len(),
            unique.len(),
            "error codes must be unique: {codes:?}"
        );
    }

    #[test]
    fn error_codes_have_arr_prefix() {
        for err in &all_variants() {
            assert!(
                err.code().starts_with("ARR-"),
                "code {} must start with ARR-",
                err.code()
            );
        }
    }

    #[test]
    fn error_display_includes_code() {
        let err = ArrError::IndexOutOfBounds { index: 7, len: 3 };
        let msg = err.to_string();
        assert!(msg.contains("ARR-2001"), "display should contain code: {msg}");
        assert!(msg.contains("index 7"), "display should contain index: {msg}");
        assert!(msg.contains("length 3"), "display should contain len: {msg}");
    }

    #[test]
    fn only_index_errors_are_internal() {
        for err in all_variants() {
            assert_eq!(
                err.is_internal(),
                matches!(err, ArrError::IndexOutOfBounds { .. }),
                "unexpected internal classification for {}",
                err.code()
            );
        }
    }

    #[test]
    fn io_convenience_constructor() {
        let err = ArrError::io(
            "/tmp/test.toml",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(err.code(), "ARR-3002");
        assert!(err.to_string().contains("/tmp/test.toml"));
    }

    #[test]
    fn from_toml_error() {
        let toml_err = toml::from_str::<toml::Value>("= invalid").unwrap_err();
        let err: ArrError = toml_err.into();
        assert_eq!(err.code(), "ARR-1003");
    }
}
