//! The closed union of supported wire objects
//!
//! Version dispatch works by pattern-matching on [`KubeObject`] variants:
//! the variant is the concrete schema identity, and the `apiVersion` string
//! the object declares about itself is validated against it separately.

use crate::{apps, core};

/// Any concrete, versioned object the transducer understands.
#[derive(Debug, Clone, PartialEq)]
pub enum KubeObject {
    DeploymentV1(apps::v1::Deployment),
    DeploymentV1Beta1(apps::v1beta1::Deployment),
    DeploymentV1Beta2(apps::v1beta2::Deployment),
    NamespaceV1(core::v1::Namespace),
    SecretV1(core::v1::Secret),
}

impl KubeObject {
    /// Wire kind of this object.
    pub fn kind(&self) -> &'static str {
        match self {
            KubeObject::DeploymentV1(_)
            | KubeObject::DeploymentV1Beta1(_)
            | KubeObject::DeploymentV1Beta2(_) => "Deployment",
            KubeObject::NamespaceV1(_) => "Namespace",
            KubeObject::SecretV1(_) => "Secret",
        }
    }

    /// The version token implied by the concrete variant, independent of
    /// what the object declares about itself.
    pub fn schema_version(&self) -> &'static str {
        match self {
            KubeObject::DeploymentV1(_) => apps::v1::VERSION,
            KubeObject::DeploymentV1Beta1(_) => apps::v1beta1::VERSION,
            KubeObject::DeploymentV1Beta2(_) => apps::v1beta2::VERSION,
            KubeObject::NamespaceV1(_) | KubeObject::SecretV1(_) => core::v1::VERSION,
        }
    }

    /// The object's self-declared `apiVersion` string, unnormalized.
    pub fn declared_version(&self) -> &str {
        match self {
            KubeObject::DeploymentV1(d) => &d.api_version,
            KubeObject::DeploymentV1Beta1(d) => &d.api_version,
            KubeObject::DeploymentV1Beta2(d) => &d.api_version,
            KubeObject::NamespaceV1(ns) => &ns.api_version,
            KubeObject::SecretV1(s) => &s.api_version,
        }
    }

    /// Human-readable concrete type identity for error messages,
    /// e.g. `apps/v1beta2 Deployment`.
    pub fn type_name(&self) -> &'static str {
        match self {
            KubeObject::DeploymentV1(_) => "apps/v1 Deployment",
            KubeObject::DeploymentV1Beta1(_) => "apps/v1beta1 Deployment",
            KubeObject::DeploymentV1Beta2(_) => "apps/v1beta2 Deployment",
            KubeObject::NamespaceV1(_) => "core/v1 Namespace",
            KubeObject::SecretV1(_) => "core/v1 Secret",
        }
    }
}

/// Normalize an apiVersion token: case-insensitive, and group-qualified
/// forms reduce to their version suffix (`apps/v1` == `v1`).
pub fn normalize_version(api_version: &str) -> String {
    let version = match api_version.rsplit_once('/') {
        Some((_, suffix)) => suffix,
        None => api_version,
    };
    version.to_ascii_lowercase()
}
