// File: classify.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::proberesult::ProbeResult;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    InjectionSuccess,
    InjectionInfo,
    NoInjectionInfo,
    Failed,
    Dropped,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Outcome::InjectionSuccess => "success",
            Outcome::InjectionInfo | Outcome::NoInjectionInfo => "info",
            Outcome::Failed => "failed",
            Outcome::Dropped => "dropped",
        };
        write!(f, "{}", label)
    }
}

const OK: u16 = 200;

/// Maps a probe result to an outcome. `None` means the prober gave up on the
/// target and has already reported why.
pub fn classify(result: Option<&ProbeResult>, min_score: f64) -> Outcome {
    let Some(result) = result else {
        return Outcome::Dropped;
    };

    if result.redirect_injected() {
        return Outcome::InjectionSuccess;
    }

    let similar = result.score() >= min_score;
    let baseline_ok = result.baseline_status() == OK;
    match (similar, baseline_ok) {
        (true, true) => Outcome::InjectionSuccess,
        (true, false) => Outcome::InjectionInfo,
        (false, true) => Outcome::NoInjectionInfo,
        (false, false) => Outcome::Failed,
    }
}
