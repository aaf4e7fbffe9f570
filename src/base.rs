// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Configuration hand-off and the descriptor registry shared by generators

use crate::config::Config;
use crate::eks::client::{EksApi, EksClient};
use crate::error::{DiscoveryError, Result};
use crate::types::ResourceDescriptor;
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_eks::error::DisplayErrorContext;
use aws_types::region::Region;
use aws_types::SdkConfig;
use tracing::{debug, instrument};

/// Supplies an authenticated SDK configuration and the client built from it
#[async_trait]
pub trait ConfigProvider: Send + Sync {
    type Client: EksApi;

    async fn generate_config(&self) -> Result<SdkConfig>;

    fn client_from_config(&self, config: &SdkConfig) -> Result<Self::Client>;
}

/// Resolves configuration through the standard AWS provider chain
#[derive(Debug, Clone)]
pub struct AwsConfigProvider {
    config: Config,
}

impl AwsConfigProvider {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ConfigProvider for AwsConfigProvider {
    type Client = EksClient;

    #[instrument(skip(self), fields(region = ?self.config.region, profile = ?self.config.profile))]
    async fn generate_config(&self) -> Result<SdkConfig> {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &self.config.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(profile) = &self.config.profile {
            loader = loader.profile_name(profile);
        }
        if let Some(endpoint) = &self.config.endpoint_url {
            loader = loader.endpoint_url(endpoint.as_str());
        }

        let sdk_config = loader.load().await;

        let Some(region) = sdk_config.region() else {
            return Err(DiscoveryError::Config(
                "no region resolved; set AWS_REGION or a profile region".to_string(),
            ));
        };
        let Some(credentials) = sdk_config.credentials_provider() else {
            return Err(DiscoveryError::Config(
                "no credentials provider resolved".to_string(),
            ));
        };
        credentials.provide_credentials().await.map_err(|e| {
            DiscoveryError::Config(format!(
                "failed to resolve credentials: {}",
                DisplayErrorContext(&e)
            ))
        })?;

        debug!("Resolved AWS configuration for region {}", region);
        Ok(sdk_config)
    }

    fn client_from_config(&self, config: &SdkConfig) -> Result<EksClient> {
        Ok(EksClient::from_conf(config)?.with_page_size(self.config.page_size))
    }
}

/// Holds the config provider and the append-only descriptor registry
pub struct ServiceBase<P> {
    provider: P,
    resources: Vec<ResourceDescriptor>,
}

impl<P: ConfigProvider> ServiceBase<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            resources: Vec::new(),
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub async fn generate_config(&self) -> Result<SdkConfig> {
        self.provider.generate_config().await
    }

    /// Descriptors discovered so far, in discovery order
    pub fn resources(&self) -> &[ResourceDescriptor] {
        &self.resources
    }

    pub fn into_resources(self) -> Vec<ResourceDescriptor> {
        self.resources
    }

    pub(crate) fn push(&mut self, descriptor: ResourceDescriptor) {
        self.resources.push(descriptor);
    }
}
