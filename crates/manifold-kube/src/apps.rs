//! apps group: Deployment wire schemas
//!
//! Three concrete schema versions are supported. Their strategy, condition
//! and status shapes are byte-identical on the wire and shared here; the
//! spec layouts differ (v1beta1 still carries the deprecated `rollbackTo`),
//! and each version keeps its own `Deployment` type so the closed
//! [`KubeObject`](crate::object::KubeObject) union can distinguish them.

use chrono::{DateTime, Utc};
use manifold_core::IntOrString;
use serde::{Deserialize, Serialize};

use crate::meta::{LabelSelector, ObjectMeta, PodTemplateSpec};

fn is_zero_i32(n: &i32) -> bool {
    *n == 0
}

fn is_zero_i64(n: &i64) -> bool {
    *n == 0
}

fn is_false(b: &bool) -> bool {
    !*b
}

/// Rolling-update tuning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RollingUpdateDeployment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_unavailable: Option<IntOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_surge: Option<IntOrString>,
}

/// Deployment strategy. The type discriminator stays a raw wire string;
/// the enum table in manifold-convert owns its interpretation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeploymentStrategy {
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub strategy_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rolling_update: Option<RollingUpdateDeployment>,
}

impl DeploymentStrategy {
    fn is_default(&self) -> bool {
        *self == DeploymentStrategy::default()
    }
}

/// Rollback target, v1beta1 only. Deprecated upstream; decoded for wire
/// fidelity but never carried into the shorthand.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RollbackConfig {
    #[serde(skip_serializing_if = "is_zero_i64")]
    pub revision: i64,
}

/// One wire condition entry. Type and status stay raw strings; the enum
/// tables map them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeploymentCondition {
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub condition_type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_update_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_transition_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub reason: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message: String,
}

/// Deployment status, identical across the supported versions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeploymentStatus {
    #[serde(skip_serializing_if = "is_zero_i64")]
    pub observed_generation: i64,
    #[serde(skip_serializing_if = "is_zero_i32")]
    pub replicas: i32,
    #[serde(skip_serializing_if = "is_zero_i32")]
    pub updated_replicas: i32,
    #[serde(skip_serializing_if = "is_zero_i32")]
    pub ready_replicas: i32,
    #[serde(skip_serializing_if = "is_zero_i32")]
    pub available_replicas: i32,
    #[serde(skip_serializing_if = "is_zero_i32")]
    pub unavailable_replicas: i32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<DeploymentCondition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collision_count: Option<i32>,
}

impl DeploymentStatus {
    fn is_default(&self) -> bool {
        *self == DeploymentStatus::default()
    }
}

/// Spec layout shared by apps/v1 and apps/v1beta2.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeploymentSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replicas: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<LabelSelector>,
    pub template: PodTemplateSpec,
    #[serde(skip_serializing_if = "DeploymentStrategy::is_default")]
    pub strategy: DeploymentStrategy,
    #[serde(skip_serializing_if = "is_zero_i32")]
    pub min_ready_seconds: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision_history_limit: Option<i32>,
    #[serde(skip_serializing_if = "is_false")]
    pub paused: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress_deadline_seconds: Option<i32>,
}

/// apps/v1
pub mod v1 {
    use serde::{Deserialize, Serialize};

    use super::{DeploymentSpec, DeploymentStatus, ObjectMeta};

    /// Version token of this schema.
    pub const VERSION: &str = "v1";

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase", default)]
    pub struct Deployment {
        #[serde(skip_serializing_if = "String::is_empty")]
        pub api_version: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        pub kind: String,
        pub metadata: ObjectMeta,
        pub spec: DeploymentSpec,
        #[serde(skip_serializing_if = "DeploymentStatus::is_default")]
        pub status: DeploymentStatus,
    }
}

/// apps/v1beta1
pub mod v1beta1 {
    use serde::{Deserialize, Serialize};

    use super::{
        DeploymentStatus, DeploymentStrategy, LabelSelector, ObjectMeta, PodTemplateSpec,
        RollbackConfig, is_false, is_zero_i32,
    };

    /// Version token of this schema.
    pub const VERSION: &str = "v1beta1";

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase", default)]
    pub struct DeploymentSpec {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub replicas: Option<i32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub selector: Option<LabelSelector>,
        pub template: PodTemplateSpec,
        #[serde(skip_serializing_if = "DeploymentStrategy::is_default")]
        pub strategy: DeploymentStrategy,
        #[serde(skip_serializing_if = "is_zero_i32")]
        pub min_ready_seconds: i32,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub revision_history_limit: Option<i32>,
        #[serde(skip_serializing_if = "is_false")]
        pub paused: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub progress_deadline_seconds: Option<i32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub rollback_to: Option<RollbackConfig>,
    }

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase", default)]
    pub struct Deployment {
        #[serde(skip_serializing_if = "String::is_empty")]
        pub api_version: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        pub kind: String,
        pub metadata: ObjectMeta,
        pub spec: DeploymentSpec,
        #[serde(skip_serializing_if = "DeploymentStatus::is_default")]
        pub status: DeploymentStatus,
    }
}

/// apps/v1beta2 - the canonical ("generic") version all outbound deployment
/// conversions are routed through.
pub mod v1beta2 {
    use serde::{Deserialize, Serialize};

    use super::{DeploymentSpec, DeploymentStatus, ObjectMeta};

    /// Version token of this schema.
    pub const VERSION: &str = "v1beta2";

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase", default)]
    pub struct Deployment {
        #[serde(skip_serializing_if = "String::is_empty")]
        pub api_version: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        pub kind: String,
        pub metadata: ObjectMeta,
        pub spec: DeploymentSpec,
        #[serde(skip_serializing_if = "DeploymentStatus::is_default")]
        pub status: DeploymentStatus,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case_wire_fields() {
        let dep = v1beta2::Deployment {
            api_version: "v1beta2".into(),
            kind: "Deployment".into(),
            spec: DeploymentSpec {
                min_ready_seconds: 5,
                ..Default::default()
            },
            ..Default::default()
        };
        let yaml = serde_yaml::to_string(&dep).unwrap();
        assert!(yaml.contains("apiVersion: v1beta2"), "got: {yaml}");
        assert!(yaml.contains("minReadySeconds: 5"), "got: {yaml}");
    }

    #[test]
    fn v1beta1_decodes_rollback_to() {
        let yaml = "apiVersion: v1beta1\nkind: Deployment\nspec:\n  rollbackTo:\n    revision: 3\n";
        let dep: v1beta1::Deployment = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(dep.spec.rollback_to.unwrap().revision, 3);
    }

    #[test]
    fn defaulted_sections_are_omitted() {
        let dep = v1::Deployment::default();
        let yaml = serde_yaml::to_string(&dep).unwrap();
        assert!(!yaml.contains("status"), "got: {yaml}");
        assert!(!yaml.contains("strategy"), "got: {yaml}");
    }
}
