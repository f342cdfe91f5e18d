// File: getstate.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::classify::Outcome;
use chrono::{DateTime, Local};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counters shared by the submitter and all workers of one scan.
#[derive(Debug)]
pub struct ScanState {
    started_at: DateTime<Local>,
    submitted: AtomicUsize,
    skipped: AtomicUsize,
    injection_success: AtomicUsize,
    injection_info: AtomicUsize,
    no_injection_info: AtomicUsize,
    failed: AtomicUsize,
    dropped: AtomicUsize,
}

impl Default for ScanState {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanState {
    pub fn new() -> ScanState {
        ScanState {
            started_at: Local::now(),
            submitted: AtomicUsize::new(0),
            skipped: AtomicUsize::new(0),
            injection_success: AtomicUsize::new(0),
            injection_info: AtomicUsize::new(0),
            no_injection_info: AtomicUsize::new(0),
            failed: AtomicUsize::new(0),
            dropped: AtomicUsize::new(0),
        }
    }

    pub fn add_submitted(&self) {
        self.submitted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_skipped(&self) {
        self.skipped.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record(&self, outcome: Outcome) {
        let counter = match outcome {
            Outcome::InjectionSuccess => &self.injection_success,
            Outcome::InjectionInfo => &self.injection_info,
            Outcome::NoInjectionInfo => &self.no_injection_info,
            Outcome::Failed => &self.failed,
            Outcome::Dropped => &self.dropped,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Snapshot taken once every worker has finished.
    pub fn finish(&self) -> ScanSummary {
        ScanSummary {
            started_at: self.started_at,
            ended_at: Local::now(),
            submitted: self.submitted.load(Ordering::Relaxed),
            skipped: self.skipped.load(Ordering::Relaxed),
            injection_success: self.injection_success.load(Ordering::Relaxed),
            injection_info: self.injection_info.load(Ordering::Relaxed),
            no_injection_info: self.no_injection_info.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
            dropped: self.dropped.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanSummary {
    pub started_at: DateTime<Local>,
    pub ended_at: DateTime<Local>,
    pub submitted: usize,
    pub skipped: usize,
    pub injection_success: usize,
    pub injection_info: usize,
    pub no_injection_info: usize,
    pub failed: usize,
    pub dropped: usize,
}

impl ScanSummary {
    pub fn elapsed_ms(&self) -> i64 {
        (self.ended_at - self.started_at).num_milliseconds()
    }

    /// Targets that produced either an outcome or an error report.
    pub fn completed(&self) -> usize {
        self.injection_success
            + self.injection_info
            + self.no_injection_info
            + self.failed
            + self.dropped
    }

    pub fn injections(&self) -> usize {
        self.injection_success + self.injection_info
    }

    pub fn line(&self) -> String {
        format!(
            "{} targets. Started at {} / Ended at {}. {} ms. Injections: {}. No injection: {}. Failed: {}. Errors: {}. Skipped: {}.",
            self.submitted,
            self.started_at.format("%Y-%m-%d %H:%M:%S"),
            self.ended_at.format("%Y-%m-%d %H:%M:%S"),
            self.elapsed_ms(),
            self.injections(),
            self.no_injection_info,
            self.failed,
            self.dropped,
            self.skipped
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_empty() {
        let summary = ScanState::new().finish();
        assert_eq!(summary.submitted, 0);
        assert_eq!(summary.completed(), 0);
        assert!(summary.elapsed_ms() >= 0);
    }

    #[test]
    fn test_record_outcomes() {
        let state = ScanState::new();
        state.add_submitted();
        state.add_submitted();
        state.add_submitted();
        state.add_skipped();
        state.record(Outcome::InjectionSuccess);
        state.record(Outcome::NoInjectionInfo);
        state.record(Outcome::Dropped);

        let summary = state.finish();
        assert_eq!(summary.submitted, 3);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.injection_success, 1);
        assert_eq!(summary.no_injection_info, 1);
        assert_eq!(summary.dropped, 1);
        assert_eq!(summary.completed(), 3);
        assert_eq!(summary.injections(), 1);
    }

    #[test]
    fn test_summary_line() {
        let state = ScanState::new();
        state.add_submitted();
        state.record(Outcome::InjectionInfo);
        let line = state.finish().line();
        assert!(line.starts_with("1 targets."));
        assert!(line.contains("Injections: 1."));
    }
}
