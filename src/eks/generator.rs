// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Two-phase enumeration of EKS clusters and their managed node groups

use crate::base::{ConfigProvider, ServiceBase};
use crate::eks::pagination::Paginator;
use crate::error::Result;
use crate::types::ResourceDescriptor;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, Span};

/// Fills the registry with one descriptor per cluster and per node group.
///
/// Each cluster descriptor is followed by its node groups before the next cluster's appear.
/// On failure the descriptors appended so far stay in the registry.
pub struct EksGenerator<P> {
    base: ServiceBase<P>,
    cancel: CancellationToken,
}

impl<P: ConfigProvider> EksGenerator<P> {
    pub fn new(provider: P) -> Self {
        Self {
            base: ServiceBase::new(provider),
            cancel: CancellationToken::new(),
        }
    }

    /// Abort enumeration at the next page fetch once `cancel` fires
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn resources(&self) -> &[ResourceDescriptor] {
        self.base.resources()
    }

    pub fn into_resources(self) -> Vec<ResourceDescriptor> {
        self.base.into_resources()
    }

    #[instrument(skip(self), fields(region = tracing::field::Empty))]
    pub async fn init_resources(&mut self) -> Result<()> {
        let config = self.base.generate_config().await?;
        if let Some(region) = config.region() {
            Span::current().record("region", tracing::field::display(region));
        }
        let client = self.base.provider().client_from_config(&config)?;

        let clusters = self.load_clusters(&client).await?;
        for cluster in &clusters {
            self.load_node_groups(&client, cluster).await?;
        }

        info!(
            "Discovered {} clusters, {} resources in total",
            clusters.len(),
            self.base.resources().len()
        );
        Ok(())
    }

    async fn load_clusters(&mut self, client: &P::Client) -> Result<Vec<String>> {
        let mut clusters = Vec::new();
        let mut pages = Paginator::clusters(client);

        while pages.has_more_pages() {
            for cluster_name in pages.next_page(&self.cancel).await? {
                self.base.push(ResourceDescriptor::cluster(&cluster_name));
                clusters.push(cluster_name);
            }
        }

        Ok(clusters)
    }

    #[instrument(skip(self, client))]
    async fn load_node_groups(&mut self, client: &P::Client, cluster_name: &str) -> Result<()> {
        let mut pages = Paginator::node_groups(client, cluster_name);
        let mut count = 0;

        while pages.has_more_pages() {
            for node_group in pages.next_page(&self.cancel).await? {
                self.base
                    .push(ResourceDescriptor::node_group(cluster_name, &node_group));
                count += 1;
            }
        }

        debug!("Found {} node groups", count);
        Ok(())
    }
}
