// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace lifecycle waits.
//!
//! Each mutating call against the API leaves the namespace transitioning;
//! these helpers block until the backend confirms the transition finished.

use crate::constants::states;
use crate::error::Result;
use crate::poll::{wait, Observation, PollConfig};
use crate::rancher::client::{FetchError, NamespaceClient};
use crate::types::NamespaceHandle;
use tracing::instrument;

/// Wait for a freshly created namespace to become usable.
#[instrument(skip(client))]
pub async fn await_activation<C>(client: &C, handle: &NamespaceHandle) -> Result<Observation>
where
    C: NamespaceClient + ?Sized,
{
    let config = PollConfig::new([states::ACTIVATING], [states::ACTIVE])?;
    converge(client, handle, config).await
}

/// Wait for an updated namespace to settle back into the active state.
///
/// A namespace that is already active succeeds on the first probe; the
/// pending set guards only against a transient non-active window.
#[instrument(skip(client))]
pub async fn await_settled<C>(client: &C, handle: &NamespaceHandle) -> Result<Observation>
where
    C: NamespaceClient + ?Sized,
{
    let config = PollConfig::new([states::ACTIVE], [states::ACTIVE])?;
    converge(client, handle, config).await
}

/// Wait for a deleted namespace to disappear. A namespace the backend no
/// longer knows counts as removed.
#[instrument(skip(client))]
pub async fn await_removal<C>(client: &C, handle: &NamespaceHandle) -> Result<Observation>
where
    C: NamespaceClient + ?Sized,
{
    let config = PollConfig::new([states::REMOVING], [states::REMOVED])?;
    converge(client, handle, config).await
}

/// Run one wait loop over `client` with a caller-built classification.
pub async fn converge<C>(
    client: &C,
    handle: &NamespaceHandle,
    config: PollConfig,
) -> Result<Observation>
where
    C: NamespaceClient + ?Sized,
{
    let resource = handle.to_string();
    wait(&resource, &config, || async move {
        match client.namespace_by_id(&handle.namespace_id).await {
            Ok(ns) => Ok(ns.observation()),
            Err(FetchError::NotFound) => Ok(Observation::Absent),
            Err(e) => Err(e),
        }
    })
    .await
}
