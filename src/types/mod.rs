// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Descriptor types handed to the downstream emitter.

pub mod descriptor;

pub use descriptor::{ResourceDescriptor, ResourceType};
