//! Connection settings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{RdbError, Result};

fn default_host() -> String {
    String::from("127.0.0.1")
}

/// Settings used to build a dialect-bound connector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Driver name, e.g. `pgsql`.
    pub driver: String,
    /// Server host.
    #[serde(default = "default_host")]
    pub host: String,
    /// Server port. Zero selects the driver's default.
    #[serde(default)]
    pub port: u16,
    /// Login user.
    #[serde(default)]
    pub user: String,
    /// Login password.
    #[serde(default)]
    pub pass: String,
    /// Database name.
    #[serde(default)]
    pub database: String,
    /// Driver-specific options, passed through untouched.
    #[serde(default)]
    pub options: BTreeMap<String, String>,
}

impl Config {
    /// Creates a config for `driver` and `database` with default host and port.
    #[must_use]
    pub fn new(driver: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            driver: driver.into(),
            host: default_host(),
            port: 0,
            user: String::new(),
            pass: String::new(),
            database: database.into(),
            options: BTreeMap::new(),
        }
    }

    /// Parses a config from JSON, filling defaults for absent fields.
    ///
    /// # Errors
    ///
    /// Returns [`RdbError::Serialization`] if the document is malformed.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the config to JSON.
    ///
    /// # Errors
    ///
    /// Returns [`RdbError::Serialization`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Returns `port`, or `default` when it is unset.
    #[must_use]
    pub const fn port_or(&self, default: u16) -> u16 {
        if self.port == 0 {
            default
        } else {
            self.port
        }
    }

    /// Checks that the driver is one of `drivers` and a database is named.
    ///
    /// Driver names are compared case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`RdbError::UnsupportedDriver`] or [`RdbError::MissingConfig`].
    pub fn validate(&self, drivers: &[&'static str]) -> Result<()> {
        let driver = self.driver.to_ascii_lowercase();
        if !drivers.iter().any(|d| *d == driver) {
            return Err(RdbError::UnsupportedDriver {
                driver: self.driver.clone(),
                expected: drivers.to_vec(),
            });
        }
        if self.database.is_empty() {
            return Err(RdbError::MissingConfig("database"));
        }
        Ok(())
    }
}
