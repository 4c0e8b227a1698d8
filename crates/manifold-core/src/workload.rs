//! Shorthand deployment manifest
//!
//! The intermediate form of a Deployment: identity, label/annotation maps,
//! the reconciled selector, an opaque pod template payload, rollout strategy
//! and tuning knobs, and status. Conversion to and from the concrete wire
//! schemas lives in `manifold-convert`; this module is pure data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use crate::labels::LabelSet;
use crate::selector::Selector;

/// An integer or a percentage-style string, as Kubernetes intstr fields
/// (`maxUnavailable: 1` vs `maxUnavailable: "25%"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IntOrString {
    Int(i32),
    String(String),
}

/// Rollout strategy. Absent means the wire default (rolling update with no
/// tuning) and is not stored in the shorthand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Recreate,
    RollingUpdate {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_unavailable: Option<IntOrString>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_surge: Option<IntOrString>,
    },
}

/// Metadata carried on the pod template.
///
/// `labels` doubles as the template-label override: `None` means the
/// template's labels are recoverable from the selector (collapsed), while
/// `Some` - even of an empty map - is an explicitly recorded label set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateMetadata {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<LabelSet>,
    #[serde(skip_serializing_if = "LabelSet::is_empty")]
    pub annotations: LabelSet,
}

/// Tri-state condition status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionStatus {
    True,
    False,
    #[default]
    Unknown,
}

/// Closed set of deployment condition types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeploymentConditionType {
    Available,
    Progressing,
    ReplicaFailure,
}

/// One entry of a deployment's condition sequence. Order is preserved
/// verbatim across conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeploymentCondition {
    #[serde(rename = "type")]
    pub condition_type: DeploymentConditionType,
    pub status: ConditionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_transition_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub reason: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
}

/// Replica counters reported by the controller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplicaCounts {
    pub total: i32,
    pub updated: i32,
    pub ready: i32,
    pub available: i32,
    pub unavailable: i32,
}

/// Observed deployment status.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeploymentStatus {
    pub observed_generation: i64,
    pub replicas: ReplicaCounts,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<DeploymentCondition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collision_count: Option<i32>,
}

impl DeploymentStatus {
    pub fn is_empty(&self) -> bool {
        *self == DeploymentStatus::default()
    }
}

/// Shorthand form of a Deployment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeploymentManifest {
    /// Declared wire schema version; selects the concrete output layout.
    /// Empty defaults to the family baseline (`v1`).
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

    #[serde(skip_serializing_if = "Option::is_none")]
    pub replicas: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<Selector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<TemplateMetadata>,
    /// Opaque pod payload; not decomposed at this layer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pod: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<Strategy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_ready_seconds: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision_history_limit: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress_deadline_seconds: Option<i32>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub paused: bool,

    #[serde(skip_serializing_if = "DeploymentStatus::is_empty")]
    pub status: DeploymentStatus,
}
