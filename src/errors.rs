// File: errors.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use std::fmt;

#[derive(Debug)]
pub enum ScanError {
    Parse { target: String, reason: String },
    Resolution { host: String },
    Request { url: String, source: reqwest::Error },
    Redirect { url: String, hops: usize },
    Configuration(String),
    Io(std::io::Error),
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse { target, reason } => {
                write!(f, "unable to parse target {:?}: {}", target, reason)
            }
            Self::Resolution { host } => write!(f, "host unreachable {}", host),
            Self::Request { url, source } => write!(f, "request to {} failed: {}", url, source),
            Self::Redirect { url, hops } => {
                write!(f, "request to {} stopped after {} redirects", url, hops)
            }
            Self::Configuration(msg) => write!(f, "Configuration error: {}", msg),
            Self::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for ScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse { .. } => None,
            Self::Resolution { .. } => None,
            Self::Request { source, .. } => Some(source),
            Self::Redirect { .. } => None,
            Self::Configuration(_) => None,
            Self::Io(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ScanError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error)
    }
}

pub type ScanResult<T> = Result<T, ScanError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display_messages() {
        let resolution = ScanError::Resolution {
            host: "nowhere.invalid".to_string(),
        };
        assert_eq!(resolution.to_string(), "host unreachable nowhere.invalid");

        let redirect = ScanError::Redirect {
            url: "http://loop.test/".to_string(),
            hops: 10,
        };
        assert_eq!(
            redirect.to_string(),
            "request to http://loop.test/ stopped after 10 redirects"
        );

        let config = ScanError::Configuration("worker count must be at least 1".to_string());
        assert!(config.to_string().starts_with("Configuration error"));
    }

    #[test]
    fn test_io_conversion_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "targets.txt");
        let err: ScanError = io.into();
        assert!(matches!(err, ScanError::Io(_)));
        assert!(err.source().is_some());
    }
}
