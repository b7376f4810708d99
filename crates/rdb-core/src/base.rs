//! Connector base shared by every dialect.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, info};

use crate::config::Config;
use crate::error::{RdbError, Result};

/// Holds the connection settings and the open/closed state of a connector.
///
/// Connection handling itself lives with the caller; the base only tracks
/// whether [`Base::close`] has been called.
#[derive(Debug)]
pub struct Base {
    config: Config,
    closed: AtomicBool,
}

impl Base {
    /// Creates an open base.
    #[must_use]
    pub fn new(config: Config) -> Self {
        debug!(driver = %config.driver, database = %config.database, "connector base created");
        Self {
            config,
            closed: AtomicBool::new(false),
        }
    }

    /// Returns the connection settings.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Returns true once [`Base::close`] has been called.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// Fails if the base has been closed.
    ///
    /// # Errors
    ///
    /// Returns [`RdbError::Closed`] after [`Base::close`].
    pub fn ensure_open(&self) -> Result<()> {
        if self.is_closed() {
            return Err(RdbError::Closed(self.config.database.clone()));
        }
        Ok(())
    }

    /// Marks the base closed. Repeated calls are no-ops.
    pub fn close(&self) {
        if !self.closed.swap(true, Ordering::AcqRel) {
            info!(database = %self.config.database, "connector closed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_close() {
        let base = Base::new(Config::new("pgsql", "app"));
        assert!(!base.is_closed());
        assert!(base.ensure_open().is_ok());

        base.close();
        base.close();
        assert!(base.is_closed());
        assert!(matches!(base.ensure_open(), Err(RdbError::Closed(db)) if db == "app"));
    }
}
