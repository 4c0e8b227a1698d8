//! Namespace conversions
//!
//! Namespaces exist in a single schema version, so the outbound path builds
//! the concrete v1 object directly instead of routing through the codec.

use manifold_core::{FinalizerName, NamespaceManifest, NamespacePhase};
use manifold_kube::{KubeObject, ObjectMeta, core};

use crate::dispatch::{ensure_declared_version, resolve_target_version};
use crate::error::{ConvertError, Result, ResultExt};

/// Schema versions a namespace manifest may declare.
pub const SUPPORTED_VERSIONS: &[&str] = &["v1"];

/// Convert a concrete wire namespace into the shorthand form.
pub fn from_kube(obj: &KubeObject) -> Result<NamespaceManifest> {
    ensure_declared_version(obj)?;
    let KubeObject::NamespaceV1(ns) = obj else {
        return Err(ConvertError::UnknownVersion {
            observed: obj.type_name().to_string(),
        });
    };

    let mut finalizers = Vec::with_capacity(ns.spec.finalizers.len());
    for (i, name) in ns.spec.finalizers.iter().enumerate() {
        let name =
            finalizer_from_kube(name).with_context(|| format!("namespace finalizers[{i}]"))?;
        finalizers.push(name);
    }

    Ok(NamespaceManifest {
        version: core::v1::VERSION.to_string(),
        cluster: ns.metadata.cluster_name.clone(),
        name: ns.metadata.name.clone(),
        namespace: ns.metadata.namespace.clone(),
        labels: ns.metadata.labels.clone(),
        annotations: ns.metadata.annotations.clone(),
        finalizers,
        phase: phase_from_kube(&ns.status.phase).context("namespace status")?,
    })
}

/// Convert a shorthand namespace into the concrete v1 wire object.
pub fn to_kube(manifest: &NamespaceManifest) -> Result<KubeObject> {
    let version = resolve_target_version(&manifest.version, SUPPORTED_VERSIONS, "namespace")?;

    Ok(KubeObject::NamespaceV1(core::v1::Namespace {
        api_version: version,
        kind: "Namespace".into(),
        metadata: ObjectMeta {
            name: manifest.name.clone(),
            namespace: manifest.namespace.clone(),
            cluster_name: manifest.cluster.clone(),
            labels: manifest.labels.clone(),
            annotations: manifest.annotations.clone(),
        },
        spec: core::v1::NamespaceSpec {
            finalizers: manifest
                .finalizers
                .iter()
                .map(|f| finalizer_to_kube(*f).to_string())
                .collect(),
        },
        status: core::v1::NamespaceStatus {
            phase: phase_to_kube(manifest.phase).to_string(),
        },
    }))
}

fn finalizer_from_kube(value: &str) -> Result<FinalizerName> {
    match value {
        "kubernetes" => Ok(FinalizerName::Kubernetes),
        other => Err(ConvertError::UnrecognizedEnumValue {
            field: "namespace finalizer",
            value: other.to_string(),
        }),
    }
}

fn finalizer_to_kube(value: FinalizerName) -> &'static str {
    match value {
        FinalizerName::Kubernetes => "kubernetes",
    }
}

fn phase_from_kube(value: &str) -> Result<Option<NamespacePhase>> {
    match value {
        "" => Ok(None),
        "Active" => Ok(Some(NamespacePhase::Active)),
        "Terminating" => Ok(Some(NamespacePhase::Terminating)),
        other => Err(ConvertError::UnrecognizedEnumValue {
            field: "namespace phase",
            value: other.to_string(),
        }),
    }
}

fn phase_to_kube(value: Option<NamespacePhase>) -> &'static str {
    match value {
        None => "",
        Some(NamespacePhase::Active) => "Active",
        Some(NamespacePhase::Terminating) => "Terminating",
    }
}
