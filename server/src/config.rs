//! Server configuration read from the environment.
//!
//! | Variable         | Default     | Meaning                                   |
//! |------------------|-------------|-------------------------------------------|
//! | `HOST`           | `127.0.0.1` | Address to bind                           |
//! | `PORT`           | `3000`      | Port to bind                              |
//! | `TODO_ID_POLICY` | `assign`    | `assign` or `caller`, see [`IdPolicy`]    |
//!
//! `RUST_LOG` is read by the tracing subscriber in `main`, not here.

use std::str::FromStr;

use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;

/// Who decides the id of a newly created item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IdPolicy {
    /// Use the caller's id if present and non-nil, otherwise generate one.
    #[default]
    AssignWhenAbsent,
    /// The caller must supply a non-nil id.
    CallerSupplied,
}

impl FromStr for IdPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "assign" => Ok(IdPolicy::AssignWhenAbsent),
            "caller" => Ok(IdPolicy::CallerSupplied),
            other => Err(ConfigError::UnknownIdPolicy(other.to_string())),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT '{0}'")]
    InvalidPort(String),

    #[error("unknown TODO_ID_POLICY '{0}' (expected 'assign' or 'caller')")]
    UnknownIdPolicy(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub id_policy: IdPolicy,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            id_policy: IdPolicy::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unset and empty values fall back to
    /// defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let id_policy = match get("TODO_ID_POLICY") {
            Some(raw) => raw.parse()?,
            None => IdPolicy::default(),
        };

        Ok(Self {
            host,
            port,
            id_policy,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg, ServerConfig::default());
        assert_eq!(cfg.addr(), "127.0.0.1:3000");
        assert_eq!(cfg.id_policy, IdPolicy::AssignWhenAbsent);
    }

    #[test]
    fn reads_all_variables() {
        let cfg = config(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "8080"),
            ("TODO_ID_POLICY", "Caller"),
        ])
        .unwrap();
        assert_eq!(cfg.addr(), "0.0.0.0:8080");
        assert_eq!(cfg.id_policy, IdPolicy::CallerSupplied);
    }

    #[test]
    fn empty_values_fall_back_to_defaults() {
        let cfg = config(&[("PORT", " "), ("TODO_ID_POLICY", "")]).unwrap();
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.id_policy, IdPolicy::AssignWhenAbsent);
    }

    #[test]
    fn rejects_bad_port() {
        let err = config(&[("PORT", "http")]).unwrap_err();
        assert_eq!(err, ConfigError::InvalidPort("http".to_string()));
    }

    #[test]
    fn rejects_unknown_policy() {
        let err = config(&[("TODO_ID_POLICY", "random")]).unwrap_err();
        assert_eq!(err, ConfigError::UnknownIdPolicy("random".to_string()));
    }
}
