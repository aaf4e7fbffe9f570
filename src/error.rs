// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

/// SDK error codes reported for throttled requests
const THROTTLING_CODES: &[&str] = &[
    "Throttling",
    "ThrottlingException",
    "TooManyRequestsException",
    "RequestLimitExceeded",
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiscoveryError {
    #[error("eks: failed to load AWS configuration: {0}")]
    Config(String),

    #[error("eks: failed to build client: {0}")]
    Client(String),

    #[error("eks: {operation} failed: {}: {message}", .code.as_deref().unwrap_or("unknown"))]
    Api {
        operation: &'static str,
        code: Option<String>,
        message: String,
    },

    #[error("eks: {operation} cancelled")]
    Cancelled { operation: &'static str },
}

impl DiscoveryError {
    pub fn api(
        operation: &'static str,
        code: Option<impl Into<String>>,
        message: impl Into<String>,
    ) -> Self {
        DiscoveryError::Api {
            operation,
            code: code.map(Into::into),
            message: message.into(),
        }
    }

    /// The service error code, when the failure came back from the API
    pub fn code(&self) -> Option<&str> {
        match self {
            DiscoveryError::Api { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    pub fn is_throttling(&self) -> bool {
        self.code().is_some_and(|c| THROTTLING_CODES.contains(&c))
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, DiscoveryError::Cancelled { .. })
    }
}

pub type Result<T> = std::result::Result<T, DiscoveryError>;
