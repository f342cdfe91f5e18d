// File: scheduler.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::classify::{classify, Outcome};
use crate::config::ScanConfiguration;
use crate::getstate::{ScanState, ScanSummary};
use crate::prober::Probe;
use crate::report::Reporter;
use crate::target::{normalize, NormalizedTarget};
use crossbeam_channel::{Receiver, Sender};
use log::{debug, info, warn};
use std::thread;

/// Fixed pool of worker threads fed by a throttled submitter.
///
/// The queue is a rendezvous channel, so the submitter blocks until a worker
/// takes the job and at most one job is ever waiting. `work` returns only after
/// every worker has drained the queue and exited.
pub struct Scheduler<'a, P, R> {
    config: &'a ScanConfiguration,
    prober: &'a P,
    reporter: &'a R,
}

impl<'a, P: Probe, R: Reporter> Scheduler<'a, P, R> {
    pub fn new(config: &'a ScanConfiguration, prober: &'a P, reporter: &'a R) -> Self {
        Scheduler {
            config,
            prober,
            reporter,
        }
    }

    pub fn work(&self, targets: &[String]) -> ScanSummary {
        let state = ScanState::new();
        if targets.is_empty() {
            return state.finish();
        }

        let workers = self.config.workers().max(1);
        info!(
            "Scanning {} targets with {} workers, delay {:?}",
            targets.len(),
            workers,
            self.config.delay()
        );

        let (jobs, queue) = crossbeam_channel::bounded::<NormalizedTarget>(0);

        thread::scope(|scope| {
            for id in 0..workers {
                let queue = queue.clone();
                let state = &state;
                scope.spawn(move || self.run_worker(id, queue, state));
            }
            drop(queue);

            self.submit(targets, jobs, &state);
        });

        let summary = state.finish();
        info!("{}", summary.line());
        summary
    }

    fn submit(&self, targets: &[String], jobs: Sender<NormalizedTarget>, state: &ScanState) {
        let delay = self.config.delay();
        let last = targets.len() - 1;

        for (i, raw) in targets.iter().enumerate() {
            match normalize(raw, self.config.default_scheme()) {
                Ok(target) => {
                    if jobs.send(target).is_err() {
                        warn!("All workers have exited, {} targets not submitted", last - i + 1);
                        break;
                    }
                    state.add_submitted();
                    if i < last && !delay.is_zero() {
                        thread::sleep(delay);
                    }
                }
                Err(e) => {
                    warn!("Skipping target: {}", e);
                    state.add_skipped();
                    self.reporter.report_error(&e);
                }
            }
        }
        // Dropping `jobs` closes the queue.
    }

    fn run_worker(&self, id: usize, queue: Receiver<NormalizedTarget>, state: &ScanState) {
        debug!("Worker {} started", id);
        for target in queue.iter() {
            match self.prober.probe(&target) {
                Ok(result) => {
                    let outcome = classify(Some(&result), self.config.min_score());
                    state.record(outcome);
                    self.reporter.report(outcome, &result);
                }
                Err(e) => {
                    warn!("Dropping {}: {}", target, e);
                    state.record(Outcome::Dropped);
                    self.reporter.report_error(&e);
                }
            }
        }
        debug!("Worker {} finished", id);
    }
}
