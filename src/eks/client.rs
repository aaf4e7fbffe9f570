// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Page-level access to the EKS list operations

use crate::constants::operations::{LIST_CLUSTERS, LIST_NODEGROUPS};
use crate::error::{DiscoveryError, Result};
use async_trait::async_trait;
use aws_sdk_eks::error::{DisplayErrorContext, ProvideErrorMetadata};
use aws_types::SdkConfig;
use tracing::{debug, instrument};

/// One page of names returned by a list operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub items: Vec<String>,
    pub next_token: Option<String>,
}

impl Page {
    pub fn new(items: Vec<String>, next_token: Option<String>) -> Self {
        Self { items, next_token }
    }
}

/// The two EKS list operations discovery depends on
#[async_trait]
pub trait EksApi: Send + Sync {
    async fn list_clusters(&self, next_token: Option<String>) -> Result<Page>;

    async fn list_node_groups(&self, cluster_name: &str, next_token: Option<String>) -> Result<Page>;
}

/// `EksApi` backed by the AWS SDK
#[derive(Clone, Debug)]
pub struct EksClient {
    inner: aws_sdk_eks::Client,
    page_size: Option<i32>,
}

impl EksClient {
    /// Build a client from a loaded SDK configuration
    pub fn from_conf(config: &SdkConfig) -> Result<Self> {
        if config.region().is_none() {
            return Err(DiscoveryError::Client(
                "no region configured for the EKS client".to_string(),
            ));
        }
        if config.behavior_version().is_none() {
            return Err(DiscoveryError::Client(
                "SDK configuration has no behavior version".to_string(),
            ));
        }

        let conf = aws_sdk_eks::config::Builder::from(config).build();
        Ok(Self {
            inner: aws_sdk_eks::Client::from_conf(conf),
            page_size: None,
        })
    }

    /// Ask for at most `page_size` names per page
    pub fn with_page_size(mut self, page_size: Option<i32>) -> Self {
        self.page_size = page_size;
        self
    }
}

fn api_error<E>(operation: &'static str, err: E) -> DiscoveryError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
{
    let code = err.code().map(str::to_string);
    let message = err
        .message()
        .map(str::to_string)
        .unwrap_or_else(|| DisplayErrorContext(&err).to_string());
    DiscoveryError::api(operation, code, message)
}

#[async_trait]
impl EksApi for EksClient {
    #[instrument(skip(self))]
    async fn list_clusters(&self, next_token: Option<String>) -> Result<Page> {
        let output = self
            .inner
            .list_clusters()
            .set_next_token(next_token)
            .set_max_results(self.page_size)
            .send()
            .await
            .map_err(|e| api_error(LIST_CLUSTERS, e))?;

        let page = Page::new(output.clusters.unwrap_or_default(), output.next_token);
        debug!("{} returned {} clusters", LIST_CLUSTERS, page.items.len());
        Ok(page)
    }

    #[instrument(skip(self))]
    async fn list_node_groups(&self, cluster_name: &str, next_token: Option<String>) -> Result<Page> {
        let output = self
            .inner
            .list_nodegroups()
            .cluster_name(cluster_name)
            .set_next_token(next_token)
            .set_max_results(self.page_size)
            .send()
            .await
            .map_err(|e| api_error(LIST_NODEGROUPS, e))?;

        let page = Page::new(output.nodegroups.unwrap_or_default(), output.next_token);
        debug!("{} returned {} node groups", LIST_NODEGROUPS, page.items.len());
        Ok(page)
    }
}
