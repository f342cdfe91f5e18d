// File: report.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::classify::Outcome;
use crate::errors::ScanError;
use crate::proberesult::ProbeResult;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

/// Receives exactly one call per target: an outcome or an error.
pub trait Reporter: Sync {
    fn report(&self, outcome: Outcome, result: &ProbeResult);
    fn report_error(&self, error: &ScanError);
}

/// Plain-text report line for an outcome. `Dropped` has none because its error
/// was already reported.
pub fn render(outcome: Outcome, result: &ProbeResult) -> Option<String> {
    let summary = result.summary();
    let line = match outcome {
        Outcome::InjectionSuccess if result.redirect_injected() => {
            format!("[success] {} [redirect]", summary)
        }
        Outcome::InjectionSuccess => format!("[success] {} [injection]", summary),
        Outcome::InjectionInfo => format!("[info] {} [injection]", summary),
        Outcome::NoInjectionInfo => format!("[info] {} [none]", summary),
        Outcome::Failed => format!("[failed] {} []", summary),
        Outcome::Dropped => return None,
    };
    Some(line)
}

pub fn render_error(error: &ScanError) -> String {
    format!("[error] {}", error)
}

pub struct ConsoleReporter {
    progress: ProgressBar,
}

impl ConsoleReporter {
    pub fn new(total: u64, show_progress: bool) -> Self {
        let progress = if show_progress && total > 0 {
            let pb = ProgressBar::new(total);
            if let Ok(style) = ProgressStyle::with_template(
                "[{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} ({eta})",
            ) {
                pb.set_style(style.progress_chars("█▉▊▋▌▍▎▏  "));
            }
            pb
        } else {
            ProgressBar::hidden()
        };
        ConsoleReporter { progress }
    }

    pub fn finish(&self) {
        self.progress.finish_and_clear();
    }

    fn emit(&self, line: ColoredString) {
        self.progress.suspend(|| println!("{}", line));
        self.progress.inc(1);
    }
}

impl Reporter for ConsoleReporter {
    fn report(&self, outcome: Outcome, result: &ProbeResult) {
        let Some(line) = render(outcome, result) else {
            return;
        };
        let colored = match outcome {
            Outcome::InjectionSuccess => line.green(),
            Outcome::InjectionInfo => line.cyan(),
            Outcome::NoInjectionInfo => line.yellow(),
            Outcome::Failed => line.magenta(),
            Outcome::Dropped => return,
        };
        self.emit(colored);
    }

    fn report_error(&self, error: &ScanError) {
        self.emit(render_error(error).red());
    }
}
