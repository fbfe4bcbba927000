// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Rancher cluster API access and namespace convergence waits.

pub mod client;
pub mod namespace;

pub use client::{FetchError, HttpNamespaceClient, NamespaceClient};
pub use namespace::{await_activation, await_removal, await_settled, converge};
