use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Unable to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown preference: {0}")]
    UnknownPreference(String),

    #[error("Preference '{name}' expects {expected}")]
    InvalidPreferenceValue { name: String, expected: &'static str },
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_read_error_display() {
        let err = AppError::Read {
            path: PathBuf::from("/tmp/missing.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        };
        assert_eq!(err.to_string(), "Unable to read /tmp/missing.txt: file not found");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_error_display() {
        let err = AppError::UnknownPreference("line-numbers".to_string());
        assert_eq!(err.to_string(), "Unknown preference: line-numbers");

        let err = AppError::InvalidPreferenceValue {
            name: "font-size".to_string(),
            expected: "a size",
        };
        assert_eq!(err.to_string(), "Preference 'font-size' expects a size");
    }
}
