//! Manifold Core - shorthand manifest types
//!
//! This crate defines the compact intermediate ("shorthand") representation
//! that Manifold converts Kubernetes wire manifests into and back out of.
//! The types here are plain serde-derived data: the textual shorthand
//! parser/emitter and the conversion engine both consume them through their
//! serde surface, so nothing in this crate performs I/O or conversion.

pub mod labels;
pub mod manifest;
pub mod namespace;
pub mod secret;
pub mod selector;
pub mod workload;

pub use labels::{LabelSet, labels_match};
pub use manifest::Manifest;
pub use namespace::{FinalizerName, NamespaceManifest, NamespacePhase};
pub use secret::{SecretManifest, SecretType};
pub use selector::Selector;
pub use workload::{
    ConditionStatus, DeploymentCondition, DeploymentConditionType, DeploymentManifest,
    DeploymentStatus, IntOrString, ReplicaCounts, Strategy, TemplateMetadata,
};
