// File: cli.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::config::{
    ScanConfiguration, DEFAULT_BAD_HOST_NAME, DEFAULT_MIN_SCORE, DEFAULT_SCHEME,
    DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, DEFAULT_WORKERS,
};
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = env!("CARGO_PKG_NAME"),
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS"),
    about = env!("CARGO_PKG_DESCRIPTION"),
)]
pub struct Cli {
    #[arg(
        short = 't',
        long = "target",
        help = "Comma-separated list of targets to scan"
    )]
    pub target: Option<String>,

    #[arg(
        short = 'i',
        long = "target-file",
        help = "File containing one target per line ('-' reads stdin)"
    )]
    pub target_file: Option<PathBuf>,

    #[arg(short = 'u', long = "user-agent", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    #[arg(
        short = 'H',
        long = "host-name",
        default_value = DEFAULT_BAD_HOST_NAME,
        help = "Fake host name used to verify host header injection"
    )]
    pub host_name: String,

    #[arg(long = "scheme", default_value = DEFAULT_SCHEME, help = "Default URL scheme")]
    pub scheme: String,

    #[arg(
        long = "timeout",
        default_value_t = DEFAULT_TIMEOUT_SECS,
        help = "HTTP request timeout in seconds, 0 for none"
    )]
    pub timeout: u64,

    #[arg(
        long = "delay",
        default_value_t = 0,
        help = "Delay between submitted targets in milliseconds"
    )]
    pub delay: u64,

    #[arg(
        short = 'w',
        long = "workers",
        visible_alias = "threads",
        default_value_t = DEFAULT_WORKERS
    )]
    pub workers: usize,

    #[arg(
        long = "score",
        default_value_t = DEFAULT_MIN_SCORE,
        help = "Percentage of response lines that have to be identical"
    )]
    pub score: f64,

    #[arg(short = 'r', long = "redirects", help = "Follow all redirects")]
    pub redirects: bool,

    #[arg(long = "no-color", help = "Disable colored output")]
    pub no_color: bool,

    #[arg(long = "log-level", default_value = "warn")]
    pub log_level: String,

    #[arg(short = 'v', long = "verbose", help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(
        short = 's',
        long = "suppress-stats",
        help = "Suppress progress bar and scan summary"
    )]
    pub suppress_stats: bool,
}

impl Cli {
    pub fn scan_configuration(&self) -> ScanConfiguration {
        let mut config = ScanConfiguration::new();
        config.set_default_scheme(&self.scheme);
        config.set_user_agent(&self.user_agent);
        config.set_bad_host_name(&self.host_name);
        config.set_timeout(Duration::from_secs(self.timeout));
        config.set_delay(Duration::from_millis(self.delay));
        config.set_workers(self.workers);
        config.set_min_score(self.score);
        config.set_follow_redirects(self.redirects);
        config
    }

    pub fn level_filter(&self) -> LevelFilter {
        if self.verbose {
            return LevelFilter::Debug;
        }
        self.log_level.parse().unwrap_or(LevelFilter::Warn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["hhprobe"]);
        let config = cli.scan_configuration();

        assert_eq!(config, ScanConfiguration::new());
        assert!(cli.target.is_none());
        assert!(cli.target_file.is_none());
        assert_eq!(cli.level_filter(), LevelFilter::Warn);
    }

    #[test]
    fn test_flags_map_to_configuration() {
        let cli = Cli::parse_from([
            "hhprobe",
            "--target",
            "a.test,b.test",
            "--host-name",
            "evil.example",
            "--scheme",
            "http",
            "--timeout",
            "3",
            "--delay",
            "250",
            "--threads",
            "4",
            "--score",
            "75.5",
            "--redirects",
        ]);
        let config = cli.scan_configuration();

        assert_eq!(cli.target.as_deref(), Some("a.test,b.test"));
        assert_eq!(config.bad_host_name(), "evil.example");
        assert_eq!(config.default_scheme(), "http");
        assert_eq!(config.timeout(), Duration::from_secs(3));
        assert_eq!(config.delay(), Duration::from_millis(250));
        assert_eq!(config.workers(), 4);
        assert_eq!(config.min_score(), 75.5);
        assert!(config.follow_redirects());
    }

    #[test]
    fn test_log_level() {
        let cli = Cli::parse_from(["hhprobe", "--log-level", "info"]);
        assert_eq!(cli.level_filter(), LevelFilter::Info);

        let cli = Cli::parse_from(["hhprobe", "--log-level", "info", "-v"]);
        assert_eq!(cli.level_filter(), LevelFilter::Debug);

        let cli = Cli::parse_from(["hhprobe", "--log-level", "loud"]);
        assert_eq!(cli.level_filter(), LevelFilter::Warn);
    }
}
