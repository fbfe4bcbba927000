// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::error::{Result, VigilError};
use crate::poll::Observation;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A namespace as the Rancher v3 cluster API represents it.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Namespace {
    pub id: String,
    pub name: String,
    pub project_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    /// Lifecycle state label reported by the backend
    pub state: String,
    /// Removal timestamp, stamped by the backend once deletion starts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub removed: Option<String>,
}

impl Namespace {
    /// This namespace as one probe observation.
    pub fn observation(&self) -> Observation {
        Observation::Present {
            state: self.state.clone(),
            removed: self.removed.is_some(),
        }
    }
}

/// Locates one namespace: the cluster that owns it plus its id there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceHandle {
    pub cluster_id: String,
    pub namespace_id: String,
}

impl NamespaceHandle {
    pub fn new(cluster_id: impl Into<String>, namespace_id: impl Into<String>) -> Self {
        Self {
            cluster_id: cluster_id.into(),
            namespace_id: namespace_id.into(),
        }
    }

    /// Derive the handle from the project a namespace belongs to.
    pub fn from_project(project_id: &str, namespace_id: impl Into<String>) -> Result<Self> {
        Ok(Self::new(cluster_id_from_project(project_id)?, namespace_id))
    }
}

impl fmt::Display for NamespaceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.cluster_id, self.namespace_id)
    }
}

/// Extract the cluster id from a project id of the form "<cluster>:<project>".
pub fn cluster_id_from_project(project_id: &str) -> Result<&str> {
    match project_id.split_once(':') {
        Some((cluster, project)) if !cluster.is_empty() && !project.is_empty() => Ok(cluster),
        _ => Err(VigilError::InvalidProjectId(project_id.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_namespace(state: &str, removed: Option<&str>) -> Namespace {
        Namespace {
            id: "ns-test".to_string(),
            name: "test".to_string(),
            project_id: "c-abc:p-def".to_string(),
            state: state.to_string(),
            removed: removed.map(|r| r.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_observation_reports_state() {
        let ns = make_namespace("activating", None);
        assert_eq!(
            ns.observation(),
            Observation::Present {
                state: "activating".to_string(),
                removed: false,
            }
        );
    }

    #[test]
    fn test_observation_carries_removal_marker() {
        let ns = make_namespace("removing", Some("2026-01-01T00:00:00Z"));
        assert_eq!(
            ns.observation(),
            Observation::Present {
                state: "removing".to_string(),
                removed: true,
            }
        );
        assert_eq!(ns.observation().state_label(), "removed");
    }

    #[test]
    fn test_deserializes_api_body() {
        let body = r#"{
            "id": "ns-test",
            "name": "test",
            "projectId": "c-abc:p-def",
            "description": "managed namespace",
            "labels": {"team": "platform"},
            "state": "active",
            "created": "2026-01-01T00:00:00Z",
            "transitioning": "no"
        }"#;

        let ns: Namespace = serde_json::from_str(body).unwrap();
        assert_eq!(ns.id, "ns-test");
        assert_eq!(ns.project_id, "c-abc:p-def");
        assert_eq!(ns.description.as_deref(), Some("managed namespace"));
        assert_eq!(ns.labels.get("team").map(String::as_str), Some("platform"));
        assert_eq!(ns.state, "active");
        assert!(ns.removed.is_none());
    }

    #[test]
    fn test_handle_display() {
        let handle = NamespaceHandle::new("c-abc", "ns-test");
        assert_eq!(handle.to_string(), "c-abc/ns-test");
    }

    #[test]
    fn test_handle_from_project() {
        let handle = NamespaceHandle::from_project("c-abc:p-def", "ns-test").unwrap();
        assert_eq!(handle.cluster_id, "c-abc");
        assert_eq!(handle.namespace_id, "ns-test");
    }

    #[test]
    fn test_cluster_id_from_project() {
        assert_eq!(cluster_id_from_project("c-abc:p-def").unwrap(), "c-abc");
    }

    #[test]
    fn test_cluster_id_from_project_rejects_malformed_ids() {
        for bad in ["c-abc", "c-abc:", ":p-def", ""] {
            assert!(matches!(
                cluster_id_from_project(bad),
                Err(VigilError::InvalidProjectId(_))
            ));
        }
    }
}
