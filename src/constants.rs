// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Short provider tag embedded in every descriptor
pub const PROVIDER: &str = "aws";

/// Attribute prefixes the downstream emitter keeps even when empty
pub const ALLOW_EMPTY_VALUES: &[&str] = &["tags."];

/// Separator between cluster and node group names in composite IDs
pub const ID_SEPARATOR: char = ':';

/// Resource type tags emitted in descriptors
pub mod resource_types {
    pub const CLUSTER: &str = "managed_kubernetes_cluster";
    pub const NODE_GROUP: &str = "managed_kubernetes_node_group";
}

/// EKS API operation names, used in errors and spans
pub mod operations {
    pub const LIST_CLUSTERS: &str = "ListClusters";
    pub const LIST_NODEGROUPS: &str = "ListNodegroups";
}

/// Environment variables read by `Config::from_env`
pub mod env {
    pub const REGION: &str = "AWS_REGION";
    pub const DEFAULT_REGION: &str = "AWS_DEFAULT_REGION";
    pub const PROFILE: &str = "AWS_PROFILE";
    pub const ENDPOINT_URL: &str = "EKS_ENDPOINT_URL";
    pub const PAGE_SIZE: &str = "EKS_PAGE_SIZE";
    pub const OUTPUT_FORMAT: &str = "OUTPUT_FORMAT";
}

/// Upper bound accepted by the EKS list operations for `maxResults`
pub const MAX_PAGE_SIZE: i32 = 100;
