//! Command-line interface.
//!
//! Flags are accepted with one dash (`-bot-url`) as well as two
//! (`--bot-url`); [`normalize_args`] rewrites the single-dash spelling before
//! clap sees it.

use std::time::Duration;

use clap::Parser;

use crate::config::duration::parse_duration;
use crate::config::schema::{DEFAULT_INTERVAL_ARG, DEFAULT_PUSH_URL};

/// Long flags that may be spelled with a single dash.
const LONG_FLAGS: &[&str] = &["bot-url", "push-url", "interval", "help", "version"];

#[derive(Debug, Clone, Parser)]
#[command(name = "bot-status-monitor")]
#[command(version)]
#[command(about = "Polls a bot status endpoint and pushes its health to a Prometheus Pushgateway", long_about = None)]
pub struct Cli {
    /// Telegram Bot API URL
    #[arg(long = "bot-url", default_value = "")]
    pub bot_url: String,

    /// Pushgateway URL
    #[arg(long = "push-url", default_value = DEFAULT_PUSH_URL)]
    pub push_url: String,

    /// Interval between checks
    #[arg(
        long,
        default_value = DEFAULT_INTERVAL_ARG,
        value_parser = parse_duration,
        allow_hyphen_values = true
    )]
    pub interval: Duration,
}

impl Cli {
    /// Parse the process arguments, accepting single-dash long flags.
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_args(std::env::args()))
    }
}

/// Rewrite `-flag` and `-flag=value` into their double-dash forms.
///
/// Only known long flags are touched, and nothing after a bare `--`.
pub fn normalize_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut passthrough = false;
    args.into_iter()
        .enumerate()
        .map(|(i, arg)| {
            if i == 0 || passthrough {
                return arg;
            }
            if arg == "--" {
                passthrough = true;
                return arg;
            }
            match arg.strip_prefix('-') {
                Some(rest) if !rest.starts_with('-') => {
                    let name = rest.split('=').next().unwrap_or(rest);
                    if LONG_FLAGS.contains(&name) {
                        format!("-{arg}")
                    } else {
                        arg
                    }
                }
                _ => arg,
            }
        })
        .collect()
}
