use std::fmt;

/// Unified error type for the fallible edges of the crate: snapshot
/// decoding, config loading and logger startup.
#[derive(Debug)]
pub enum AppError {
    Decode(serde_json::Error),
    Io(std::io::Error),
    Logger(flexi_logger::FlexiLoggerError),
    Other(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Decode(e) => write!(f, "Decode error: {}", e),
            AppError::Io(e) => write!(f, "IO error: {}", e),
            AppError::Logger(e) => write!(f, "Logger error: {}", e),
            AppError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Decode(e) => Some(e),
            AppError::Io(e) => Some(e),
            AppError::Logger(e) => Some(e),
            AppError::Other(_) => None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Decode(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}

impl From<flexi_logger::FlexiLoggerError> for AppError {
    fn from(e: flexi_logger::FlexiLoggerError) -> Self {
        AppError::Logger(e)
    }
}

impl From<String> for AppError {
    fn from(s: String) -> Self {
        AppError::Other(s)
    }
}

// UI command layers return Result<T, String>; convert via Display.
impl From<AppError> for String {
    fn from(e: AppError) -> Self {
        e.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_display() {
        let err: AppError = serde_json::from_str::<Vec<u8>>("not json")
            .unwrap_err()
            .into();
        assert!(err.to_string().starts_with("Decode error:"));
    }

    #[test]
    fn test_into_string() {
        let msg: String = AppError::Other("label catalog missing".to_string()).into();
        assert_eq!(msg, "label catalog missing");
    }

    #[test]
    fn test_io_source() {
        use std::error::Error;
        let err = AppError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "IO error: gone");
    }
}
