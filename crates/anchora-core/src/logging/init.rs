use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "anchora_core=trace"). When absent, `RUST_LOG` is consulted, then
/// `default_level`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub default_level: log::LevelFilter,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: log::LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    pub fn with_default_level(mut self, level: log::LevelFilter) -> Self {
        self.default_level = level;
        self
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Idempotent; later calls are ignored. If the host already installed
/// another `log` backend, that one is kept.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match config.env_filter {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => match std::env::var("RUST_LOG") {
                Ok(filter) => {
                    builder.parse_filters(&filter);
                }
                Err(_) => {
                    builder.filter_level(config.default_level);
                }
            },
        }

        builder.write_style(config.write_style);

        match builder.try_init() {
            Ok(()) => log::debug!("logging initialized"),
            Err(err) => log::debug!("keeping existing logger: {err}"),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        let config = LoggingConfig::default().with_default_level(log::LevelFilter::Warn);
        init_logging(config.clone());
        init_logging(config);
        log::warn!("still alive after double init");
    }

    #[test]
    fn builder_helpers() {
        let config = LoggingConfig::default()
            .with_filter("anchora_core=trace")
            .with_default_level(log::LevelFilter::Off);
        assert_eq!(config.env_filter.as_deref(), Some("anchora_core=trace"));
        assert_eq!(config.default_level, log::LevelFilter::Off);
    }
}
