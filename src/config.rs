// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{env as vars, MAX_PAGE_SIZE};
use anyhow::{bail, Context, Result};
use std::env;
use std::str::FromStr;
use url::Url;

/// How the harness writes the registry to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            other => bail!("unsupported output format '{}', expected json or yaml", other),
        }
    }
}

/// Discovery configuration loaded from environment variables
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Region to enumerate; the SDK provider chain decides when unset
    pub region: Option<String>,
    /// Named profile from the shared AWS config files
    pub profile: Option<String>,
    /// Override for the EKS endpoint (e.g. a local emulator)
    pub endpoint_url: Option<Url>,
    /// `maxResults` sent with every list request
    pub page_size: Option<i32>,
    pub output_format: OutputFormat,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let region = var(vars::REGION).or_else(|| var(vars::DEFAULT_REGION));
        let profile = var(vars::PROFILE);

        let endpoint_url = var(vars::ENDPOINT_URL)
            .map(|raw| {
                Url::parse(&raw).with_context(|| format!("{} is not a valid URL: {}", vars::ENDPOINT_URL, raw))
            })
            .transpose()?;

        let page_size = var(vars::PAGE_SIZE)
            .map(|raw| -> Result<i32> {
                let size: i32 = raw
                    .parse()
                    .with_context(|| format!("{} must be an integer, got '{}'", vars::PAGE_SIZE, raw))?;
                if !(1..=MAX_PAGE_SIZE).contains(&size) {
                    bail!("{} must be between 1 and {}, got {}", vars::PAGE_SIZE, MAX_PAGE_SIZE, size);
                }
                Ok(size)
            })
            .transpose()?;

        let output_format = var(vars::OUTPUT_FORMAT)
            .map(|raw| raw.parse::<OutputFormat>())
            .transpose()
            .with_context(|| format!("invalid {}", vars::OUTPUT_FORMAT))?
            .unwrap_or_default();

        Ok(Config {
            region,
            profile,
            endpoint_url,
            page_size,
            output_format,
        })
    }
}
