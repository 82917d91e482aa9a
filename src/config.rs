//! Environment-based configuration.
//!
//! The service takes exactly one setting: the TCP port to listen on, read
//! from the `PORT` environment variable. A `.env` file is honored because
//! the binary calls `dotenv().ok()` before resolving the environment.

use std::env;

use crate::error::Error;

/// Port used when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 50051;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
}

impl Config {
    /// Resolves configuration from the process environment.
    ///
    /// An unset or empty `PORT` falls back to [`DEFAULT_PORT`]; a value that
    /// does not parse as a port number is a fatal startup error.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_port_var(env::var("PORT").ok())
    }

    // Env-free so the parse rule is testable without mutating process state.
    fn from_port_var(port: Option<String>) -> Result<Self, Error> {
        let port = match port.filter(|value| !value.is_empty()) {
            Some(value) => value
                .parse()
                .map_err(|source| Error::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };
        Ok(Self { port })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_port_defaults() {
        let config = Config::from_port_var(None).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn empty_port_defaults() {
        // The original Node server treats PORT="" as unset (`|| '50051'`).
        let config = Config::from_port_var(Some(String::new())).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn explicit_port_is_used() {
        let config = Config::from_port_var(Some("4321".to_string())).unwrap();
        assert_eq!(config.port, 4321);
    }

    #[test]
    fn non_numeric_port_is_rejected() {
        let err = Config::from_port_var(Some("fifty".to_string())).unwrap_err();
        assert!(matches!(err, Error::InvalidPort { ref value, .. } if value == "fifty"));
    }

    #[test]
    fn out_of_range_port_is_rejected() {
        let err = Config::from_port_var(Some("70000".to_string())).unwrap_err();
        assert!(matches!(err, Error::InvalidPort { .. }));
    }
}
