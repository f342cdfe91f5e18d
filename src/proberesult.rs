// File: proberesult.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use url::Url;

/// Status and size of one buffered response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseShape {
    pub status: u16,
    pub length: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProbeResult {
    target: String,
    baseline: ResponseShape,
    probe: ResponseShape,
    score: f64,
    redirect_location: Option<Url>,
    redirect_injected: bool,
}

impl ProbeResult {
    pub fn new_with_all(
        target: String,
        baseline: ResponseShape,
        probe: ResponseShape,
        score: f64,
        redirect_location: Option<Url>,
        redirect_injected: bool,
    ) -> Self {
        ProbeResult {
            target,
            baseline,
            probe,
            score: score.clamp(0.0, 100.0),
            redirect_location,
            redirect_injected,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn baseline_status(&self) -> u16 {
        self.baseline.status
    }

    pub fn baseline_length(&self) -> usize {
        self.baseline.length
    }

    pub fn probe_status(&self) -> u16 {
        self.probe.status
    }

    pub fn probe_length(&self) -> usize {
        self.probe.length
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn redirect_location(&self) -> Option<&Url> {
        self.redirect_location.as_ref()
    }

    /// Set when the probe response redirected to the bad host name.
    pub fn redirect_injected(&self) -> bool {
        self.redirect_injected
    }

    pub fn summary(&self) -> String {
        format!(
            "{} [{}] [{}] [{}] [{}] [{:.2}]",
            self.target,
            self.baseline.status,
            self.baseline.length,
            self.probe.status,
            self.probe.length,
            self.score
        )
    }
}
