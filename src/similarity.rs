// File: similarity.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use std::collections::HashMap;

/// Splits a body into lines the way `str::lines` does, but on raw bytes: `\n`
/// terminated, a trailing `\r` dropped, no final empty line, nothing for `b""`.
fn lines(body: &[u8]) -> impl Iterator<Item = &[u8]> {
    let count = if body.is_empty() { 0 } else { usize::MAX };
    body.strip_suffix(b"\n")
        .unwrap_or(body)
        .split(|&b| b == b'\n')
        .take(count)
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
}

/// Percentage of baseline lines that survive unchanged in the probe body.
///
/// Lines are compared byte for byte, so bodies that are not valid UTF-8 never
/// match by accident. Every probe line can satisfy at most one baseline line, so
/// repeated lines are matched only as often as they occur in the probe. The
/// denominator is always the baseline line count. A baseline without lines scores
/// 100 against an empty probe and 0 against anything else.
pub fn score(baseline: impl AsRef<[u8]>, probe: impl AsRef<[u8]>) -> f64 {
    let mut remaining: HashMap<&[u8], usize> = HashMap::new();
    for line in lines(probe.as_ref()) {
        *remaining.entry(line).or_insert(0) += 1;
    }

    let mut total = 0usize;
    let mut matches = 0usize;
    for line in lines(baseline.as_ref()) {
        total += 1;
        if let Some(count) = remaining.get_mut(line) {
            if *count > 0 {
                *count -= 1;
                matches += 1;
            }
        }
    }

    if total == 0 {
        return if remaining.is_empty() { 100.0 } else { 0.0 };
    }

    (matches as f64 / total as f64 * 100.0).clamp(0.0, 100.0)
}
