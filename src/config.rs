// File: config.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::errors::{ScanError, ScanResult};
use std::time::Duration;

pub const DEFAULT_SCHEME: &str = "https";
pub const DEFAULT_BAD_HOST_NAME: &str = "somethingbadthatdoesntexist-hopefully.com";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/105.0.0.0 Safari/537.36";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_WORKERS: usize = 10;
pub const DEFAULT_MIN_SCORE: f64 = 90.0;

/// Settings for one scan. Built once from the command line, validated, and then
/// shared read-only between all workers.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanConfiguration {
    default_scheme: String,
    user_agent: String,
    bad_host_name: String,
    timeout: Duration,
    delay: Duration,
    workers: usize,
    min_score: f64,
    follow_redirects: bool,
}

impl Default for ScanConfiguration {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanConfiguration {
    pub fn new() -> Self {
        Self {
            default_scheme: DEFAULT_SCHEME.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            bad_host_name: DEFAULT_BAD_HOST_NAME.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            delay: Duration::ZERO,
            workers: DEFAULT_WORKERS,
            min_score: DEFAULT_MIN_SCORE,
            follow_redirects: false,
        }
    }

    pub fn validate(&self) -> ScanResult<()> {
        if self.workers == 0 {
            return Err(ScanError::Configuration(
                "worker count must be at least 1".to_string(),
            ));
        }
        if !(0.0..=100.0).contains(&self.min_score) {
            return Err(ScanError::Configuration(format!(
                "minimum score {} is outside 0..=100",
                self.min_score
            )));
        }
        if self.default_scheme.trim().is_empty() {
            return Err(ScanError::Configuration(
                "default scheme must not be empty".to_string(),
            ));
        }
        if self.bad_host_name.trim().is_empty() {
            return Err(ScanError::Configuration(
                "bad host name must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn set_default_scheme(&mut self, default_scheme: &str) {
        self.default_scheme = default_scheme
            .trim()
            .trim_end_matches("://")
            .to_ascii_lowercase();
    }

    pub fn default_scheme(&self) -> &str {
        &self.default_scheme
    }

    pub fn set_user_agent(&mut self, user_agent: &str) {
        self.user_agent = user_agent.to_string();
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn set_bad_host_name(&mut self, bad_host_name: &str) {
        self.bad_host_name = bad_host_name.trim().to_string();
    }

    pub fn bad_host_name(&self) -> &str {
        &self.bad_host_name
    }

    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn set_workers(&mut self, workers: usize) {
        self.workers = workers;
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    pub fn set_min_score(&mut self, min_score: f64) {
        self.min_score = min_score;
    }

    pub fn min_score(&self) -> f64 {
        self.min_score
    }

    pub fn set_follow_redirects(&mut self, follow_redirects: bool) {
        self.follow_redirects = follow_redirects;
    }

    pub fn follow_redirects(&self) -> bool {
        self.follow_redirects
    }
}
