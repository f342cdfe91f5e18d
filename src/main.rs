// File: main.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use clap::Parser;
use colored::*;
use hhprobe::cli::Cli;
use hhprobe::errors::ScanResult;
use hhprobe::prober::Prober;
use hhprobe::report::ConsoleReporter;
use hhprobe::scheduler::Scheduler;
use hhprobe::target::collect_targets;
use log::info;
use simple_logger::SimpleLogger;
use std::sync::Arc;

fn run(cli: &Cli) -> ScanResult<()> {
    let config = cli.scan_configuration();
    config.validate()?;
    let config = Arc::new(config);

    let targets = collect_targets(cli.target.as_deref(), cli.target_file.as_deref())?;
    if targets.is_empty() {
        info!("No targets given, nothing to do");
        return Ok(());
    }

    let prober = Prober::new(Arc::clone(&config))?;
    let reporter = ConsoleReporter::new(targets.len() as u64, !cli.suppress_stats);

    let summary = Scheduler::new(&config, &prober, &reporter).work(&targets);
    reporter.finish();

    if !cli.suppress_stats {
        println!();
        println!("{}", summary.line());
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = SimpleLogger::new().with_level(cli.level_filter()).init() {
        eprintln!("Failed to initialize logger: {}", e);
    }

    if let Err(e) = run(&cli) {
        println!("{}", format!("[error] {}", e).red());
        std::process::exit(1);
    }
}
