//! Error types for batch transformation.

use std::fmt;

/// Error type for batch transformation operations.
///
/// Every error aborts processing of the current batch; there is no partial
/// output and no internal retry.
#[derive(Debug)]
pub enum TransformError {
    /// A column's declared representation is structurally inconsistent
    /// (length mismatch, non-monotonic row boundaries, bad sparse row ids).
    Shape { column: String, detail: String },
    /// A non-empty textual value could not be parsed as a number.
    Parse {
        column: String,
        row: usize,
        value: String,
    },
    /// Invalid configuration value (e.g., a default that cannot be
    /// represented in the requested dtype).
    InvalidParameter(String),
    /// Serialization or deserialization error.
    SerializationError(String),
    /// I/O error during file operations.
    IoError(String),
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformError::Shape { column, detail } => {
                write!(f, "Shape error in column '{}': {}", column, detail)
            }
            TransformError::Parse { column, row, value } => {
                write!(
                    f,
                    "Parse error in column '{}' at row {}: cannot parse '{}' as a number",
                    column, row, value
                )
            }
            TransformError::InvalidParameter(msg) => {
                write!(f, "Invalid parameter: {}", msg)
            }
            TransformError::SerializationError(msg) => {
                write!(f, "Serialization error: {}", msg)
            }
            TransformError::IoError(msg) => {
                write!(f, "I/O error: {}", msg)
            }
        }
    }
}

impl std::error::Error for TransformError {}

impl From<std::io::Error> for TransformError {
    fn from(err: std::io::Error) -> Self {
        TransformError::IoError(err.to_string())
    }
}

impl From<bincode::Error> for TransformError {
    fn from(err: bincode::Error) -> Self {
        TransformError::SerializationError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_shape() {
        let err = TransformError::Shape {
            column: "amount".to_string(),
            detail: "row_splits not monotonic".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Shape error"));
        assert!(msg.contains("amount"));
    }

    #[test]
    fn test_error_display_parse() {
        let err = TransformError::Parse {
            column: "amount".to_string(),
            row: 3,
            value: "garbage".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("row 3"));
        assert!(msg.contains("garbage"));
    }

    #[test]
    fn test_error_display_invalid_parameter() {
        let err = TransformError::InvalidParameter("bad default".to_string());
        assert!(err.to_string().contains("Invalid parameter"));
    }

    #[test]
    fn test_error_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let err: TransformError = io_err.into();
        assert!(matches!(err, TransformError::IoError(_)));
    }

    #[test]
    fn test_error_is_std_error() {
        let err = TransformError::InvalidParameter("test".to_string());
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_error_from_bincode_error() {
        let bad_bytes: &[u8] = &[0xff, 0xff, 0xff, 0xff];
        let bincode_result: Result<String, bincode::Error> = bincode::deserialize(bad_bytes);
        if let Err(e) = bincode_result {
            let err: TransformError = e.into();
            assert!(matches!(err, TransformError::SerializationError(_)));
        }
    }
}
