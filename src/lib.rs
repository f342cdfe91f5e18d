// File: lib.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

#![allow(clippy::uninlined_format_args)]
#![allow(clippy::new_without_default)]
#![allow(clippy::bool_assert_comparison)]

pub mod classify;
pub mod cli;
pub mod config;
pub mod errors;
pub mod getstate;
pub mod prober;
pub mod proberesult;
pub mod report;
pub mod scheduler;
pub mod similarity;
pub mod target;
