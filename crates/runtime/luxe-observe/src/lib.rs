//! # Luxe Observe
//!
//! One place to install the global `tracing` subscriber.
//!
//! Filter precedence: `RUST_LOG`, then `logging.filter` from config
//! (`LUXE_LOG` already folded in), then `info`.

use luxe_config::LoggingConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Result type for luxe-observe operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid log filter '{directives}': {reason}")]
    Filter { directives: String, reason: String },

    #[error("Failed to install subscriber: {0}")]
    Init(String),
}

/// Filter used when neither the environment nor config yields a valid one
pub const FALLBACK_FILTER: &str = "info";

/// Build the filter from `RUST_LOG` when set, otherwise from `configured`.
pub fn env_filter(configured: &str) -> Result<EnvFilter> {
    resolve_filter(std::env::var("RUST_LOG").ok().as_deref(), configured)
}

fn resolve_filter(from_env: Option<&str>, configured: &str) -> Result<EnvFilter> {
    if let Some(directives) = from_env.filter(|d| !d.trim().is_empty()) {
        return parse(directives);
    }
    if configured.trim().is_empty() {
        return parse(FALLBACK_FILTER);
    }
    parse(configured)
}

fn parse(directives: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directives).map_err(|e| Error::Filter {
        directives: directives.to_string(),
        reason: e.to_string(),
    })
}

/// Install the global subscriber on stderr: pretty text, or JSON lines when
/// `config.json` is set. Fails if a subscriber is already installed.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let filter = env_filter(&config.filter)?;
    let registry = tracing_subscriber::registry().with(filter);

    let installed = if config.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_current_span(false).with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init()
    };

    installed.map_err(|e| Error::Init(e.to_string()))?;
    tracing::debug!(filter = %config.filter, json = config.json, "Logging initialised");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_wins_over_config() {
        let filter = resolve_filter(Some("warn"), "debug").unwrap();
        assert_eq!(filter.to_string(), "warn");
    }

    #[test]
    fn test_config_used_without_env() {
        let filter = resolve_filter(None, "info,tower_http=debug").unwrap();
        let rendered = filter.to_string();
        assert!(rendered.contains("tower_http=debug"));
    }

    #[test]
    fn test_blank_falls_back() {
        let filter = resolve_filter(Some("  "), "").unwrap();
        assert_eq!(filter.to_string(), FALLBACK_FILTER);
    }

    #[test]
    fn test_bad_directive_reported() {
        let err = resolve_filter(None, "luxe=notalevel").unwrap_err();
        assert!(matches!(err, Error::Filter { .. }));
    }

    #[test]
    fn test_second_init_fails_cleanly() {
        let config = LoggingConfig::default();
        let _ = init(&config);
        assert!(matches!(init(&config), Err(Error::Init(_)) | Err(Error::Filter { .. })));
    }
}
