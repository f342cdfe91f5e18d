// File: prober.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::config::ScanConfiguration;
use crate::errors::{ScanError, ScanResult};
use crate::proberesult::{ProbeResult, ResponseShape};
use crate::similarity;
use crate::target::NormalizedTarget;
use log::debug;
use reqwest::blocking::Client;
use reqwest::header::{HOST, LOCATION, USER_AGENT};
use reqwest::redirect::Policy;
use reqwest::StatusCode;
use std::io;
use std::net::IpAddr;
use std::sync::Arc;
use url::{Host, Url};

/// Host name lookup. Only the first returned address is ever used.
pub trait Resolver: Send + Sync {
    fn resolve(&self, host: &str) -> io::Result<Vec<IpAddr>>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

impl Resolver for SystemResolver {
    fn resolve(&self, host: &str) -> io::Result<Vec<IpAddr>> {
        dns_lookup::lookup_host(host)
            .map(|addresses| addresses.into_iter().collect())
            .map_err(io::Error::from)
    }
}

/// Anything that can turn a target into a `ProbeResult`. The scheduler only
/// depends on this.
pub trait Probe: Sync {
    fn probe(&self, target: &NormalizedTarget) -> ScanResult<ProbeResult>;
}

/// Hop limit when following redirects, the same as reqwest's default policy.
pub const MAX_REDIRECTS: usize = 10;

struct Fetched {
    shape: ResponseShape,
    body: Vec<u8>,
    final_url: Url,
    location: Option<String>,
}

fn is_followed_redirect(status: StatusCode) -> bool {
    matches!(status.as_u16(), 301 | 302 | 303 | 307 | 308)
}

/// Sends the baseline and the bad-host request for a target to the same
/// resolved address and compares the answers.
#[derive(Debug, Clone)]
pub struct Prober<R = SystemResolver> {
    config: Arc<ScanConfiguration>,
    client: Client,
    resolver: R,
}

impl Prober<SystemResolver> {
    pub fn new(config: Arc<ScanConfiguration>) -> ScanResult<Self> {
        Self::with_resolver(config, SystemResolver)
    }
}

impl<R: Resolver> Prober<R> {
    /// A zero timeout leaves requests unbounded. Redirects are never followed by
    /// the client itself; `fetch` does it so the `Host` override can be dropped
    /// on absolute hops.
    pub fn with_resolver(config: Arc<ScanConfiguration>, resolver: R) -> ScanResult<Self> {
        // The blocking builder defaults to 30s, so "unbounded" must be explicit.
        let timeout = Some(config.timeout()).filter(|timeout| !timeout.is_zero());

        let client = Client::builder()
            .danger_accept_invalid_certs(true)
            .timeout(timeout)
            .redirect(Policy::none())
            .build()
            .map_err(|e| ScanError::Configuration(format!("unable to build HTTP client: {}", e)))?;

        Ok(Prober {
            config,
            client,
            resolver,
        })
    }

    fn resolve(&self, target: &NormalizedTarget) -> ScanResult<IpAddr> {
        let address = match target.url().host() {
            Some(Host::Ipv4(ip)) => Some(IpAddr::V4(ip)),
            Some(Host::Ipv6(ip)) => Some(IpAddr::V6(ip)),
            Some(Host::Domain(domain)) => match self.resolver.resolve(domain) {
                Ok(addresses) => addresses.into_iter().next(),
                Err(e) => {
                    debug!("Lookup of {} failed: {}", domain, e);
                    None
                }
            },
            None => None,
        };

        address.ok_or_else(|| ScanError::Resolution {
            host: target.host().to_string(),
        })
    }

    fn pin(target: &NormalizedTarget, ip: IpAddr) -> ScanResult<Url> {
        let mut pinned = target.url().clone();
        pinned.set_ip_host(ip).map_err(|_| ScanError::Parse {
            target: target.to_string(),
            reason: "host cannot be replaced by an address".to_string(),
        })?;
        Ok(pinned)
    }

    fn fetch(&self, target: &NormalizedTarget, url: &Url, host: &str) -> ScanResult<Fetched> {
        let request_error = |source| ScanError::Request {
            url: target.to_string(),
            source,
        };

        let mut current = url.clone();
        // Kept across relative redirects only; an absolute Location names its
        // own host.
        let mut host_override = Some(host.to_string());
        let mut hops = 0;

        loop {
            let mut request = self
                .client
                .get(current.clone())
                .header(USER_AGENT, self.config.user_agent());
            if let Some(host) = &host_override {
                request = request.header(HOST, host.as_str());
            }
            let response = request.send().map_err(request_error)?;

            let status = response.status();
            let location = response
                .headers()
                .get(LOCATION)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string);

            if self.config.follow_redirects() && is_followed_redirect(status) {
                let next = location
                    .as_deref()
                    .and_then(|location| current.join(location).ok().map(|next| (location, next)));
                if let Some((location, next)) = next {
                    if hops == MAX_REDIRECTS {
                        return Err(ScanError::Redirect {
                            url: target.to_string(),
                            hops,
                        });
                    }
                    if Url::parse(location).is_ok() {
                        host_override = None;
                    }
                    hops += 1;
                    debug!("{} -> {} redirects to {}", current, status.as_u16(), next);
                    current = next;
                    continue;
                }
            }

            let body = response.bytes().map_err(request_error)?.to_vec();
            debug!(
                "GET {} (Host: {}) -> {} [{} bytes]",
                current,
                host_override.as_deref().unwrap_or("<from url>"),
                status.as_u16(),
                body.len()
            );

            return Ok(Fetched {
                shape: ResponseShape {
                    status: status.as_u16(),
                    length: body.len(),
                },
                body,
                final_url: current,
                location,
            });
        }
    }
}

/// True when `location` names `bad_host` (including an explicit port, if any).
pub fn redirects_to(location: &Url, bad_host: &str) -> bool {
    let Some(host) = location.host_str() else {
        return false;
    };
    let authority = match location.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    };
    authority.eq_ignore_ascii_case(bad_host)
}

impl<R: Resolver> Probe for Prober<R> {
    fn probe(&self, target: &NormalizedTarget) -> ScanResult<ProbeResult> {
        let ip = self.resolve(target)?;
        debug!("Resolved {} to {}", target.host(), ip);

        let pinned = Self::pin(target, ip)?;
        let baseline = self.fetch(target, &pinned, &target.host_header())?;
        let probe = self.fetch(target, &pinned, self.config.bad_host_name())?;

        let score = similarity::score(&baseline.body, &probe.body);

        let redirect_location = probe
            .location
            .as_deref()
            .and_then(|location| probe.final_url.join(location).ok());
        let redirect_injected = redirect_location
            .as_ref()
            .is_some_and(|location| redirects_to(location, self.config.bad_host_name()));

        Ok(ProbeResult::new_with_all(
            target.to_string(),
            baseline.shape,
            probe.shape,
            score,
            redirect_location,
            redirect_injected,
        ))
    }
}
