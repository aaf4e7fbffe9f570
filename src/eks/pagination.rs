// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Token-driven pagination over the EKS list operations

use crate::constants::operations::{LIST_CLUSTERS, LIST_NODEGROUPS};
use crate::eks::client::{EksApi, Page};
use crate::error::{DiscoveryError, Result};
use tokio::select;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Which listing a paginator walks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing<'a> {
    Clusters,
    NodeGroups { cluster_name: &'a str },
}

impl Listing<'_> {
    pub fn operation(&self) -> &'static str {
        match self {
            Listing::Clusters => LIST_CLUSTERS,
            Listing::NodeGroups { .. } => LIST_NODEGROUPS,
        }
    }
}

/// Walks a listing page by page.
///
/// Stops once the service hands back no token, an empty token, or the token it was just given.
pub struct Paginator<'a, A: EksApi + ?Sized> {
    api: &'a A,
    listing: Listing<'a>,
    next_token: Option<String>,
    first_page: bool,
}

impl<'a, A: EksApi + ?Sized> Paginator<'a, A> {
    pub fn new(api: &'a A, listing: Listing<'a>) -> Self {
        Self {
            api,
            listing,
            next_token: None,
            first_page: true,
        }
    }

    pub fn clusters(api: &'a A) -> Self {
        Self::new(api, Listing::Clusters)
    }

    pub fn node_groups(api: &'a A, cluster_name: &'a str) -> Self {
        Self::new(api, Listing::NodeGroups { cluster_name })
    }

    pub fn has_more_pages(&self) -> bool {
        self.first_page || self.next_token.is_some()
    }

    /// Fetch the next page, or fail with `Cancelled` once `cancel` fires
    pub async fn next_page(&mut self, cancel: &CancellationToken) -> Result<Vec<String>> {
        let operation = self.listing.operation();
        if cancel.is_cancelled() {
            return Err(DiscoveryError::Cancelled { operation });
        }

        // Advanced only after a successful fetch
        let sent_token = self.next_token.clone();
        let page = select! {
            biased;
            _ = cancel.cancelled() => return Err(DiscoveryError::Cancelled { operation }),
            page = self.fetch(sent_token.clone()) => page?,
        };
        self.first_page = false;

        let Page { items, next_token } = page;
        self.next_token = match next_token {
            Some(token) if token.is_empty() => None,
            Some(token) if sent_token.as_deref() == Some(token.as_str()) => {
                warn!("{} returned the token it was sent, stopping pagination", operation);
                None
            }
            other => other,
        };

        debug!(
            "{} page with {} items, more pages: {}",
            operation,
            items.len(),
            self.next_token.is_some()
        );
        Ok(items)
    }

    async fn fetch(&self, token: Option<String>) -> Result<Page> {
        match self.listing {
            Listing::Clusters => self.api.list_clusters(token).await,
            Listing::NodeGroups { cluster_name } => self.api.list_node_groups(cluster_name, token).await,
        }
    }
}
