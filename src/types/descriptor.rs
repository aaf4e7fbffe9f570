// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{resource_types, ALLOW_EMPTY_VALUES, ID_SEPARATOR, PROVIDER};
use serde::Serialize;
use std::fmt;

/// Kind of object a descriptor stands for
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceType {
    #[serde(rename = "managed_kubernetes_cluster")]
    Cluster,
    #[serde(rename = "managed_kubernetes_node_group")]
    NodeGroup,
}

impl ResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Cluster => resource_types::CLUSTER,
            ResourceType::NodeGroup => resource_types::NODE_GROUP,
        }
    }

    /// Terraform resource the downstream emitter maps this type to
    pub fn terraform_type(&self) -> &'static str {
        match self {
            ResourceType::Cluster => "aws_eks_cluster",
            ResourceType::NodeGroup => "aws_eks_node_group",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized record handed to the downstream emitter
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ResourceDescriptor {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub provider: String,
    pub allow_empty_values: Vec<String>,
}

impl ResourceDescriptor {
    fn new(id: String, name: String, resource_type: ResourceType) -> Self {
        Self {
            id,
            name,
            resource_type,
            provider: PROVIDER.to_string(),
            allow_empty_values: ALLOW_EMPTY_VALUES.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Descriptor for a cluster; the ID is the cluster name itself
    pub fn cluster(name: &str) -> Self {
        Self::new(name.to_string(), name.to_string(), ResourceType::Cluster)
    }

    /// Descriptor for a node group, identified as `<cluster>:<group>`.
    ///
    /// Names are inserted verbatim, so a colon inside either name ends up in the ID unescaped.
    pub fn node_group(cluster: &str, group: &str) -> Self {
        Self::new(
            format!("{}{}{}", cluster, ID_SEPARATOR, group),
            group.to_string(),
            ResourceType::NodeGroup,
        )
    }

    /// Cluster a node group belongs to, read back from its ID
    pub fn parent_cluster(&self) -> Option<&str> {
        match self.resource_type {
            ResourceType::Cluster => None,
            ResourceType::NodeGroup => self.id.split_once(ID_SEPARATOR).map(|(c, _)| c),
        }
    }
}
