// File: target.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::errors::{ScanError, ScanResult};
use log::debug;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use url::Url;

/// A parsed target URI that is guaranteed to carry a scheme and a host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedTarget {
    url: Url,
}

impl NormalizedTarget {
    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn scheme(&self) -> &str {
        self.url.scheme()
    }

    pub fn host(&self) -> &str {
        // Checked non-empty in `normalize`.
        self.url.host_str().unwrap_or_default()
    }

    /// Value of the legitimate `Host` header: the host, plus the port when the
    /// target names one explicitly.
    pub fn host_header(&self) -> String {
        match self.url.port() {
            Some(port) => format!("{}:{}", self.host(), port),
            None => self.host().to_string(),
        }
    }
}

impl fmt::Display for NormalizedTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.url)
    }
}

fn has_scheme(raw: &str) -> bool {
    match raw.split_once("://") {
        Some((scheme, _)) => {
            let mut chars = scheme.chars();
            chars.next().is_some_and(|c| c.is_ascii_alphabetic())
                && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}

/// Turns a raw target line into a `NormalizedTarget`, prepending `default_scheme`
/// when the input has none.
pub fn normalize(raw: &str, default_scheme: &str) -> ScanResult<NormalizedTarget> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ScanError::Parse {
            target: raw.to_string(),
            reason: "empty target".to_string(),
        });
    }

    let candidate = if has_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("{}://{}", default_scheme, trimmed)
    };

    let url = Url::parse(&candidate).map_err(|e| ScanError::Parse {
        target: raw.to_string(),
        reason: e.to_string(),
    })?;

    if url.host_str().map_or(true, str::is_empty) {
        return Err(ScanError::Parse {
            target: raw.to_string(),
            reason: "missing host".to_string(),
        });
    }

    debug!("Normalized target {:?} to {}", raw, url);
    Ok(NormalizedTarget { url })
}

fn push_lines<R: BufRead>(reader: R, targets: &mut Vec<String>) -> io::Result<()> {
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() && !trimmed.starts_with('#') {
            targets.push(trimmed.to_string());
        }
    }
    Ok(())
}

/// Collects raw targets from a target file (`-` for stdin) followed by a
/// comma-separated list. Blank entries and `#` comments are dropped.
pub fn collect_targets(
    target_list: Option<&str>,
    target_file: Option<&Path>,
) -> ScanResult<Vec<String>> {
    let mut targets = Vec::new();

    if let Some(path) = target_file {
        if path == Path::new("-") {
            let stdin = io::stdin();
            push_lines(stdin.lock(), &mut targets)?;
        } else {
            let file = File::open(path)?;
            push_lines(BufReader::new(file), &mut targets)?;
        }
    }

    if let Some(list) = target_list {
        targets.extend(
            list.split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string),
        );
    }

    Ok(targets)
}
