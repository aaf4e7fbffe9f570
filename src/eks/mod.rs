// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! EKS client, pagination, and the cluster/node group generator.

pub mod client;
pub mod generator;
pub mod pagination;

pub use client::{EksApi, EksClient, Page};
pub use generator::EksGenerator;
pub use pagination::{Listing, Paginator};
