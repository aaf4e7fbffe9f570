// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for scripting EKS API responses.

use crate::base::ConfigProvider;
use crate::constants::operations::{LIST_CLUSTERS, LIST_NODEGROUPS};
use crate::eks::client::{EksApi, Page};
use crate::error::{DiscoveryError, Result};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_types::region::Region;
use aws_types::SdkConfig;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use tokio_util::sync::CancellationToken;

/// A request received by the fake, in arrival order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    ListClusters {
        next_token: Option<String>,
    },
    ListNodeGroups {
        cluster_name: String,
        next_token: Option<String>,
    },
}

impl ApiCall {
    pub fn list_clusters(next_token: Option<&str>) -> Self {
        ApiCall::ListClusters {
            next_token: next_token.map(str::to_string),
        }
    }

    pub fn list_node_groups(cluster_name: &str, next_token: Option<&str>) -> Self {
        ApiCall::ListNodeGroups {
            cluster_name: cluster_name.to_string(),
            next_token: next_token.map(str::to_string),
        }
    }
}

#[derive(Default)]
struct State {
    clusters: VecDeque<Result<Page>>,
    node_groups: HashMap<String, VecDeque<Result<Page>>>,
    calls: Vec<ApiCall>,
    cancel_after: Option<(usize, CancellationToken)>,
    stall_clusters: bool,
}

/// A scripted EKS API that replays pages in order and records every call.
///
/// Once a script runs dry the fake answers with an empty final page.
#[derive(Clone, Default)]
pub struct FakeEks {
    state: Arc<Mutex<State>>,
}

fn scripted_pages(pages: Vec<Vec<&str>>) -> VecDeque<Result<Page>> {
    let count = pages.len();
    pages
        .into_iter()
        .enumerate()
        .map(|(i, names)| {
            let next_token = (i + 1 < count).then(|| format!("token-{}", i + 1));
            Ok(Page::new(names.into_iter().map(str::to_string).collect(), next_token))
        })
        .collect()
}

fn injected(operation: &'static str, code: &str) -> Result<Page> {
    Err(DiscoveryError::api(operation, Some(code), "injected failure"))
}

impl FakeEks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script cluster pages; tokens are `token-1`, `token-2`, ...
    pub fn with_clusters(self, pages: Vec<Vec<&str>>) -> Self {
        self.state.lock().unwrap().clusters.extend(scripted_pages(pages));
        self
    }

    pub fn with_raw_cluster_pages(self, pages: Vec<Page>) -> Self {
        self.state
            .lock()
            .unwrap()
            .clusters
            .extend(pages.into_iter().map(Ok));
        self
    }

    /// Script node group pages for one cluster
    pub fn with_node_groups(self, cluster_name: &str, pages: Vec<Vec<&str>>) -> Self {
        self.state
            .lock()
            .unwrap()
            .node_groups
            .entry(cluster_name.to_string())
            .or_default()
            .extend(scripted_pages(pages));
        self
    }

    /// Make the next unanswered cluster page fail with `code`
    pub fn failing_clusters(self, code: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .clusters
            .push_back(injected(LIST_CLUSTERS, code));
        self
    }

    /// Make the next unanswered node group page of `cluster_name` fail with `code`
    pub fn failing_node_groups(self, cluster_name: &str, code: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .node_groups
            .entry(cluster_name.to_string())
            .or_default()
            .push_back(injected(LIST_NODEGROUPS, code));
        self
    }

    /// Cancel `token` right after the `calls`-th request has been answered
    pub fn cancel_after(self, calls: usize, token: CancellationToken) -> Self {
        self.state.lock().unwrap().cancel_after = Some((calls, token));
        self
    }

    /// Never answer cluster pages
    pub fn stalling_clusters(self) -> Self {
        self.state.lock().unwrap().stall_clusters = true;
        self
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.state.lock().unwrap().calls.clone()
    }

    fn record(&self, call: ApiCall) {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
    }

    fn answered(&self) {
        let state = self.state.lock().unwrap();
        if let Some((after, token)) = &state.cancel_after {
            if state.calls.len() >= *after {
                token.cancel();
            }
        }
    }
}

#[async_trait]
impl EksApi for FakeEks {
    async fn list_clusters(&self, next_token: Option<String>) -> Result<Page> {
        self.record(ApiCall::ListClusters { next_token });
        let stall = self.state.lock().unwrap().stall_clusters;
        if stall {
            std::future::pending::<()>().await;
        }
        let page = self
            .state
            .lock()
            .unwrap()
            .clusters
            .pop_front()
            .unwrap_or_else(|| Ok(Page::default()));
        self.answered();
        page
    }

    async fn list_node_groups(&self, cluster_name: &str, next_token: Option<String>) -> Result<Page> {
        self.record(ApiCall::ListNodeGroups {
            cluster_name: cluster_name.to_string(),
            next_token,
        });
        let page = self
            .state
            .lock()
            .unwrap()
            .node_groups
            .get_mut(cluster_name)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| Ok(Page::default()));
        self.answered();
        page
    }
}

/// A config provider handing out a `FakeEks`, or a scripted failure
#[derive(Clone, Default)]
pub struct FakeProvider {
    pub api: FakeEks,
    pub config_error: Option<DiscoveryError>,
    pub client_error: Option<DiscoveryError>,
}

impl FakeProvider {
    pub fn new(api: FakeEks) -> Self {
        Self {
            api,
            ..Default::default()
        }
    }
}

#[async_trait]
impl ConfigProvider for FakeProvider {
    type Client = FakeEks;

    async fn generate_config(&self) -> Result<SdkConfig> {
        if let Some(err) = &self.config_error {
            return Err(err.clone());
        }
        Ok(SdkConfig::builder()
            .region(Region::from_static("us-east-1"))
            .behavior_version(BehaviorVersion::latest())
            .build())
    }

    fn client_from_config(&self, _config: &SdkConfig) -> Result<FakeEks> {
        match &self.client_error {
            Some(err) => Err(err.clone()),
            None => Ok(self.api.clone()),
        }
    }
}
