use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{DishError, Result};

/// Log output format, chosen with `LOG_FORMAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    Json,
    Compact,
    #[default]
    Pretty,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter directives, `RUST_LOG` syntax.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::default(),
        }
    }
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let format = match lookup("LOG_FORMAT").as_deref() {
            Some("json") => LogFormat::Json,
            Some("compact") => LogFormat::Compact,
            _ => LogFormat::Pretty,
        };

        Self {
            level: lookup("RUST_LOG").unwrap_or_else(|| "info".into()),
            format,
        }
    }

    /// Install the global tracing subscriber.
    pub fn init(&self) -> Result<()> {
        let filter = EnvFilter::try_new(&self.level).unwrap_or_else(|_| EnvFilter::new("info"));
        let registry = tracing_subscriber::registry().with(filter);

        let installed = match self.format {
            LogFormat::Json => registry.with(fmt::layer().json()).try_init(),
            LogFormat::Compact => registry.with(fmt::layer().compact()).try_init(),
            LogFormat::Pretty => registry.with(fmt::layer()).try_init(),
        };

        installed.map_err(|e| DishError::Config(format!("failed to initialize logging: {e}")))
    }
}
