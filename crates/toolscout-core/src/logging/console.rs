//! Console logger implementation

use super::traits::Logger;

/// A logger that writes to the process console
///
/// Info goes to stdout; debug, warnings, and errors go to stderr. Each
/// line carries a prefix so interleaved host output stays attributable.
#[derive(Debug, Clone)]
pub struct ConsoleLogger {
    prefix: String,
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleLogger {
    /// Create a console logger with the crate's default prefix
    pub fn new() -> Self {
        Self {
            prefix: "[ToolScout]".to_string(),
        }
    }

    /// Create a console logger with a custom prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Logger for ConsoleLogger {
    fn debug(&self, message: &str) {
        eprintln!("{} DEBUG: {}", self.prefix, message);
    }

    fn info(&self, message: &str) {
        println!("{} INFO: {}", self.prefix, message);
    }

    fn warn(&self, message: &str) {
        eprintln!("{} WARN: {}", self.prefix, message);
    }

    fn error(&self, message: &str) {
        eprintln!("{} ERROR: {}", self.prefix, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_and_custom_prefixes() {
        assert_eq!(ConsoleLogger::new().prefix, "[ToolScout]");
        assert_eq!(ConsoleLogger::default().prefix, "[ToolScout]");
        assert_eq!(ConsoleLogger::with_prefix("[Shell]").prefix, "[Shell]");
    }

    #[test]
    fn test_all_levels_write_without_panicking() {
        let logger = ConsoleLogger::with_prefix("[Test]");
        logger.debug("debug line");
        logger.info("info line");
        logger.warn("warn line");
        logger.error("error line");
    }
}
