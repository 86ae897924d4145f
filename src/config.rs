use std::str::FromStr;

use crate::constructor::{
    ConstructorLimits, DEFAULT_MAX_DISHES, DEFAULT_MAX_GROUPS, DEFAULT_MAX_STEPS,
};
use crate::error::{DishError, Result};

pub const DEFAULT_DATABASE_URL: &str = "sqlite:./data/dishes.db";
pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";
pub const DEFAULT_HTTP_PORT: u16 = 8080;

/// Server settings, read from the environment.
///
/// | Variable             | Default                   |
/// |----------------------|---------------------------|
/// | `DATABASE_URL`       | `sqlite:./data/dishes.db` |
/// | `HTTP_HOST`          | `0.0.0.0`                 |
/// | `HTTP_PORT`          | `8080`                    |
/// | `MAX_GROUPS`         | `12`                      |
/// | `MAX_DISHES`         | `100000`                  |
/// | `MAX_STEPS`          | `5000000`                 |
/// | `EMPTY_GROUP_POLICY` | `allow`                   |
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub limits: ConstructorLimits,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            host: DEFAULT_HTTP_HOST.to_string(),
            port: DEFAULT_HTTP_PORT,
            limits: ConstructorLimits::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup (the process environment in production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            host: lookup("HTTP_HOST").unwrap_or_else(|| DEFAULT_HTTP_HOST.to_string()),
            port: parse_var(&lookup, "HTTP_PORT", DEFAULT_HTTP_PORT)?,
            limits: ConstructorLimits {
                max_groups: parse_var(&lookup, "MAX_GROUPS", DEFAULT_MAX_GROUPS)?,
                max_dishes: parse_var(&lookup, "MAX_DISHES", DEFAULT_MAX_DISHES)?,
                max_steps: parse_var(&lookup, "MAX_STEPS", DEFAULT_MAX_STEPS)?,
                empty_group: parse_var(&lookup, "EMPTY_GROUP_POLICY", Default::default())?,
            },
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| DishError::Config(format!("invalid value for {key}: {raw:?}"))),
    }
}
