//! Configuration validation.
//!
//! Turns parsed command-line flags into a [`MonitorConfig`]. The only fatal
//! condition is a missing bot URL; a malformed URL surfaces at run time as a
//! failed check or push, so the gauge keeps being reported.

use thiserror::Error;

use crate::config::cli::Cli;
use crate::config::schema::{MonitorConfig, DEFAULT_REQUEST_TIMEOUT, JOB_NAME};

/// A configuration error detected at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Bot URL must be provided")]
    MissingBotUrl,
}

/// Validate flags and build the immutable monitor configuration.
pub fn validate(cli: Cli) -> Result<MonitorConfig, ConfigError> {
    if cli.bot_url.trim().is_empty() {
        return Err(ConfigError::MissingBotUrl);
    }

    Ok(MonitorConfig {
        push_url: normalize_push_url(&cli.push_url),
        bot_url: cli.bot_url,
        interval: cli.interval,
        job_name: JOB_NAME.to_string(),
        request_timeout: DEFAULT_REQUEST_TIMEOUT,
    })
}

/// Prefix `http://` when the Pushgateway address carries no scheme.
pub fn normalize_push_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::DEFAULT_PUSH_URL;
    use std::time::Duration;

    fn cli(bot_url: &str, push_url: &str, interval: Duration) -> Cli {
        Cli {
            bot_url: bot_url.to_string(),
            push_url: push_url.to_string(),
            interval,
        }
    }

    #[test]
    fn test_missing_bot_url_is_fatal() {
        let err = validate(cli("", DEFAULT_PUSH_URL, Duration::from_secs(60))).unwrap_err();
        assert!(matches!(err, ConfigError::MissingBotUrl));
        assert_eq!(err.to_string(), "Bot URL must be provided");

        let err = validate(cli("   ", DEFAULT_PUSH_URL, Duration::from_secs(60))).unwrap_err();
        assert!(matches!(err, ConfigError::MissingBotUrl));
    }

    #[test]
    fn test_malformed_urls_are_accepted() {
        let config = validate(cli(
            "api.telegram.org/botX/getMe",
            "gate way:9091",
            Duration::from_secs(60),
        ))
        .unwrap();
        assert_eq!(config.bot_url, "api.telegram.org/botX/getMe");
        assert_eq!(config.push_url, "http://gate way:9091");
    }

    #[test]
    fn test_push_url_without_scheme() {
        let config = validate(cli("http://bot/getMe", "gateway:9091", Duration::from_secs(5))).unwrap();
        assert_eq!(config.push_url, "http://gateway:9091");
        assert_eq!(config.interval, Duration::from_secs(5));
        assert_eq!(config.job_name, "oula");
    }

    #[test]
    fn test_zero_interval_accepted() {
        let config = validate(cli("http://bot/getMe", DEFAULT_PUSH_URL, Duration::ZERO)).unwrap();
        assert_eq!(config.interval, Duration::ZERO);
    }

    #[test]
    fn test_valid_defaults() {
        let config = validate(cli("http://bot/getMe", DEFAULT_PUSH_URL, Duration::from_secs(60))).unwrap();
        assert_eq!(config, MonitorConfig::new("http://bot/getMe"));
    }
}
