// File: common/mod.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

#![allow(dead_code)]

use hhprobe::classify::Outcome;
use hhprobe::config::ScanConfiguration;
use hhprobe::errors::ScanError;
use hhprobe::prober::Resolver;
use hhprobe::proberesult::ProbeResult;
use hhprobe::report::Reporter;
use std::collections::HashMap;
use std::io;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Mutex;
use wiremock::{MockServer, ResponseTemplate};

pub const BAD_HOST: &str = "evil.example";
pub const APP_HOST: &str = "app.test";
pub const TEST_AGENT: &str = "hhprobe-tests/1.0";

/// Resolves a fixed set of names; anything else has no address.
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    hosts: HashMap<String, Vec<IpAddr>>,
}

impl StaticResolver {
    pub fn loopback(names: &[&str]) -> Self {
        let hosts = names
            .iter()
            .map(|name| (name.to_string(), vec![IpAddr::V4(Ipv4Addr::LOCALHOST)]))
            .collect();
        Self { hosts }
    }
}

impl Resolver for StaticResolver {
    fn resolve(&self, host: &str) -> io::Result<Vec<IpAddr>> {
        Ok(self.hosts.get(host).cloned().unwrap_or_default())
    }
}

#[derive(Default)]
pub struct CollectingReporter {
    pub outcomes: Mutex<Vec<(Outcome, ProbeResult)>>,
    pub errors: Mutex<Vec<String>>,
}

impl CollectingReporter {
    pub fn outcome_for(&self, fragment: &str) -> Option<(Outcome, ProbeResult)> {
        self.outcomes
            .lock()
            .unwrap()
            .iter()
            .find(|(_, result)| result.target().contains(fragment))
            .cloned()
    }
}

impl Reporter for CollectingReporter {
    fn report(&self, outcome: Outcome, result: &ProbeResult) {
        self.outcomes.lock().unwrap().push((outcome, result.clone()));
    }

    fn report_error(&self, error: &ScanError) {
        self.errors.lock().unwrap().push(error.to_string());
    }
}

pub fn test_config() -> ScanConfiguration {
    let mut config = ScanConfiguration::new();
    config.set_bad_host_name(BAD_HOST);
    config.set_default_scheme("http");
    config.set_user_agent(TEST_AGENT);
    config.set_timeout(std::time::Duration::from_secs(5));
    config
}

/// `http://app.test:<port><path>`, which `StaticResolver::loopback` pins to the
/// mock server.
pub fn app_url(server: &MockServer, path: &str) -> String {
    format!("http://{}:{}{}", APP_HOST, server.address().port(), path)
}

pub fn sample_page() -> String {
    r#"<!DOCTYPE html>
<html>
<head>
    <title>Shop</title>
</head>
<body>
    <h1>Welcome back</h1>
    <a href="/account">Account</a>
    <a href="/basket">Basket</a>
</body>
</html>"#
        .to_string()
}

pub fn html_response(status: u16, body: &str) -> ResponseTemplate {
    ResponseTemplate::new(status)
        .set_body_string(body)
        .append_header("content-type", "text/html")
}

pub fn redirect_response(location: &str) -> ResponseTemplate {
    ResponseTemplate::new(302).append_header("location", location)
}
