//! Error taxonomy for dataset requests.
//!
//! Malformed rows are not errors; they are counted in
//! [`ParseReport`](crate::parser::ParseReport). Everything here is fatal to a
//! single request and nothing else.

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Failure of one dataset request.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The backing CSV file does not exist.
    #[error("source file not found: {}", path.display())]
    SourceMissing { path: PathBuf },

    /// The file exists but has no data rows after the header.
    #[error("source file is empty: {}", path.display())]
    SourceEmpty { path: PathBuf },

    /// The file exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The request itself is unusable (e.g. a blank country filter).
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Anything that went wrong while aggregating or serializing.
    #[error("internal aggregation error: {0}")]
    Internal(String),
}

/// JSON body a transport layer can return for a failed request.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl DatasetError {
    /// Stable machine-readable code for this condition.
    pub fn code(&self) -> &'static str {
        match self {
            DatasetError::SourceMissing { .. } => "source_missing",
            DatasetError::SourceEmpty { .. } => "source_empty",
            DatasetError::Io { .. } => "io_error",
            DatasetError::InvalidRequest(_) => "invalid_request",
            DatasetError::Internal(_) => "internal_error",
        }
    }

    /// HTTP status a transport layer should surface.
    pub fn status_code(&self) -> u16 {
        match self {
            DatasetError::SourceMissing { .. } => 404,
            DatasetError::SourceEmpty { .. } => 400,
            DatasetError::InvalidRequest(_) => 400,
            DatasetError::Io { .. } | DatasetError::Internal(_) => 500,
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.code().to_string(),
            message: self.to_string(),
        }
    }
}

impl From<serde_json::Error> for DatasetError {
    fn from(e: serde_json::Error) -> Self {
        DatasetError::Internal(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_distinct() {
        let missing = DatasetError::SourceMissing {
            path: PathBuf::from("a.csv"),
        };
        let empty = DatasetError::SourceEmpty {
            path: PathBuf::from("a.csv"),
        };
        let internal = DatasetError::Internal("boom".to_string());

        assert_eq!(missing.code(), "source_missing");
        assert_eq!(empty.code(), "source_empty");
        assert_eq!(internal.code(), "internal_error");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            DatasetError::SourceMissing {
                path: PathBuf::from("x")
            }
            .status_code(),
            404
        );
        assert_eq!(
            DatasetError::SourceEmpty {
                path: PathBuf::from("x")
            }
            .status_code(),
            400
        );
        assert_eq!(DatasetError::InvalidRequest(String::new()).status_code(), 400);
        assert_eq!(DatasetError::Internal(String::new()).status_code(), 500);
    }

    #[test]
    fn test_error_response_body() {
        let err = DatasetError::SourceMissing {
            path: PathBuf::from("data/medals.csv"),
        };
        let body = err.to_response();
        assert_eq!(body.error, "source_missing");
        assert!(body.message.contains("data/medals.csv"));
    }
}
