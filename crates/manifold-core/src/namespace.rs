//! Shorthand namespace manifest

use serde::{Deserialize, Serialize};

use crate::labels::LabelSet;

/// Closed set of namespace finalizers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinalizerName {
    Kubernetes,
}

/// Closed set of namespace lifecycle phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamespacePhase {
    Active,
    Terminating,
}

/// Shorthand form of a Namespace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamespaceManifest {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub version: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub cluster: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub namespace: String,
    #[serde(skip_serializing_if = "LabelSet::is_empty")]
    pub labels: LabelSet,
    #[serde(skip_serializing_if = "LabelSet::is_empty")]
    pub annotations: LabelSet,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub finalizers: Vec<FinalizerName>,
    /// Absent when the wire object reports no phase.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<NamespacePhase>,
}
