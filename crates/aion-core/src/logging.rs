//! Console logging setup.
//!
//! Installs a `tracing-subscriber` registry with an `EnvFilter` and a fmt
//! layer. The filter comes from, in order: the explicit builder filter,
//! `RUST_LOG`, then the builder default (`info`).
//!
//! ```ignore
//! use aion_core::logging::LoggingBuilder;
//!
//! LoggingBuilder::new()
//!     .with_filter("aion_labs=debug,aion_core=info")
//!     .init()?;
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::error::{SiteError, SiteResult};

/// Default filter when neither the builder nor `RUST_LOG` provide one.
pub const DEFAULT_FILTER: &str = "info";

/// Builder for the global tracing subscriber.
#[derive(Debug, Clone)]
pub struct LoggingBuilder {
    env_filter: Option<String>,
    with_target: bool,
    ansi: bool,
}

impl Default for LoggingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggingBuilder {
    /// Create a new logging builder.
    pub fn new() -> Self {
        Self {
            env_filter: None,
            with_target: true,
            ansi: true,
        }
    }

    /// Set the environment filter (e.g., "aion_labs=info,aion_core=debug").
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Hide the module path on each line.
    pub fn without_target(mut self) -> Self {
        self.with_target = false;
        self
    }

    /// Disable ANSI colours (for piping to files).
    pub fn no_ansi(mut self) -> Self {
        self.ansi = false;
        self
    }

    /// Resolve the filter this builder would install.
    pub fn filter(&self) -> SiteResult<EnvFilter> {
        match &self.env_filter {
            Some(directives) => {
                EnvFilter::try_new(directives).map_err(|e| SiteError::Logging(e.to_string()))
            }
            None => Ok(EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
        }
    }

    /// Install the subscriber globally.
    pub fn init(self) -> SiteResult<()> {
        let filter = self.filter()?;
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(self.with_target)
            .with_ansi(self.ansi);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| SiteError::Logging(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_is_parsed() {
        let builder = LoggingBuilder::new().with_filter("aion_core=debug");
        assert!(builder.filter().is_ok());
    }

    #[test]
    fn malformed_filter_is_rejected() {
        let builder = LoggingBuilder::new().with_filter("aion_core=loud");
        assert!(matches!(builder.filter(), Err(SiteError::Logging(_))));
    }
}
