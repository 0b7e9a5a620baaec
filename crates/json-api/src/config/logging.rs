//! Logging settings

use clap::{Args, ValueEnum};

/// Noisy dependencies kept at `warn` unless `RUST_LOG` says otherwise.
const QUIET_TARGETS: &str = "h2=warn,hyper=warn,salvo_core=warn";

/// Log line layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// One human-readable line per event, with file and line.
    Compact,

    /// One JSON object per event, with the active span list.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Level for packcalc itself (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

impl LoggingConfig {
    /// Filter directives used when `RUST_LOG` cannot be parsed as a filter.
    #[must_use]
    pub fn filter_directives(&self) -> String {
        format!("{},{QUIET_TARGETS}", self.log_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directives_quieten_http_stack() {
        let config = LoggingConfig {
            log_level: "debug".to_string(),
            log_format: LogFormat::Compact,
        };

        assert_eq!(
            config.filter_directives(),
            "debug,h2=warn,hyper=warn,salvo_core=warn",
            "level first, then quiet targets"
        );
    }
}
