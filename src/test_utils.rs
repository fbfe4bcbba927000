// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for scripting cluster API responses.

use crate::rancher::client::{FetchError, NamespaceClient};
use crate::types::Namespace;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// One scripted reply from the cluster API.
#[derive(Debug, Clone)]
pub enum Scripted {
    /// Namespace present in the given lifecycle state
    State(&'static str),
    /// Namespace present and stamped for removal
    MarkedRemoved,
    /// The cluster does not know the namespace
    NotFound,
    /// A hard API failure with status and message
    Fail(u16, &'static str),
}

/// A `NamespaceClient` that replays a fixed script of responses.
/// Once the script runs out, the last entry repeats.
pub struct ScriptedClient {
    script: Mutex<VecDeque<Scripted>>,
    calls: AtomicUsize,
}

impl ScriptedClient {
    pub fn new(script: impl IntoIterator<Item = Scripted>) -> Self {
        let script: VecDeque<Scripted> = script.into_iter().collect();
        assert!(!script.is_empty(), "script must not be empty");
        Self {
            script: Mutex::new(script),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of fetches made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn next(&self) -> Scripted {
        let mut script = self.script.lock().unwrap();
        if script.len() > 1 {
            script.pop_front().unwrap()
        } else {
            script.front().unwrap().clone()
        }
    }
}

#[async_trait]
impl NamespaceClient for ScriptedClient {
    async fn namespace_by_id(&self, id: &str) -> Result<Namespace, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.next() {
            Scripted::State(state) => Ok(sample_namespace(id, state)),
            Scripted::MarkedRemoved => Ok(Namespace {
                removed: Some("2026-01-01T00:00:00Z".to_string()),
                ..sample_namespace(id, "removing")
            }),
            Scripted::NotFound => Err(FetchError::NotFound),
            Scripted::Fail(status, message) => Err(FetchError::Api {
                status,
                message: message.to_string(),
            }),
        }
    }
}

/// Build a namespace in the given lifecycle state.
pub fn sample_namespace(id: &str, state: &str) -> Namespace {
    Namespace {
        id: id.to_string(),
        name: id.to_string(),
        project_id: "c-abc:p-def".to_string(),
        state: state.to_string(),
        ..Default::default()
    }
}
