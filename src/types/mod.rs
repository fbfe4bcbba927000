// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Wire models for the cluster-scoped resources we watch.

pub mod namespace;

pub use namespace::{cluster_id_from_project, Namespace, NamespaceHandle};
