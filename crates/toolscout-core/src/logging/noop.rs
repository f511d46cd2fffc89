//! No-op logger implementation

use super::traits::Logger;

/// A logger that discards every message
///
/// The default choice for tests and for callers that wire their own
/// sink later.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl NoOpLogger {
    /// Create a new no-op logger
    pub fn new() -> Self {
        Self
    }
}

impl Logger for NoOpLogger {
    fn debug(&self, _message: &str) {}
    fn info(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_level_is_silently_discarded() {
        let logger = NoOpLogger::new();
        logger.debug("dropped");
        logger.info("dropped");
        logger.warn("dropped");
        logger.error("dropped");
    }
}
