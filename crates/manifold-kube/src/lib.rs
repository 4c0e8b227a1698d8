//! Manifold Kube - versioned Kubernetes wire schemas
//!
//! This crate models the concrete, versioned wire layouts the transducer
//! accepts and produces:
//! - **Meta types**: ObjectMeta, LabelSelector, pod template envelope
//! - **apps**: Deployment in v1, v1beta1 and v1beta2
//! - **core**: Namespace and Secret in v1
//! - **KubeObject**: the closed union over all supported (kind, version)
//!   pairs - version dispatch pattern-matches on its variants instead of
//!   inspecting dynamic types
//! - **WireCodec**: the marshal/unmarshal boundary, with a serde_yaml
//!   default implementation; swappable in tests

pub mod apps;
pub mod codec;
pub mod core;
pub mod error;
pub mod meta;
pub mod object;

pub use codec::{WireCodec, YamlCodec};
pub use error::CodecError;
pub use meta::{LabelSelector, LabelSelectorRequirement, ObjectMeta, PodTemplateSpec, SelectorOperator};
pub use object::{KubeObject, normalize_version};
