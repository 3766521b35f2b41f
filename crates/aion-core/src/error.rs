//! Error types for the AION Labs site

use thiserror::Error;

/// Main error type for site setup operations.
///
/// Rendering never fails visibly; these errors only come out of startup
/// (reading the config file, installing the log subscriber).
#[derive(Error, Debug)]
pub enum SiteError {
    /// Config file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid JSON for `SiteConfig`
    #[error("Config parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Config parsed but holds values the site cannot use
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Global tracing subscriber could not be installed
    #[error("Logging error: {0}")]
    Logging(String),
}

/// Result type alias using SiteError
pub type SiteResult<T> = Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SiteError::InvalidConfig("counter_steps must be positive".to_string());
        assert_eq!(
            format!("{}", err),
            "Invalid config: counter_steps must be positive"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let site_err: SiteError = io_err.into();
        assert!(matches!(site_err, SiteError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let site_err: SiteError = json_err.into();
        assert!(matches!(site_err, SiteError::Json(_)));
    }
}
