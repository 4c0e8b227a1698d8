//! Version dispatch and the canonical-object respecialization step
//!
//! Conversion is routed by the concrete [`KubeObject`] variant, never by
//! reflecting on the declared `apiVersion` string. The declared string is
//! checked against the variant's schema identity up front, so a v1beta2
//! object claiming to be `apps/v1` fails fast instead of converting under
//! the wrong rules.

use manifold_core::Manifest;
use manifold_kube::{CodecError, KubeObject, WireCodec, normalize_version};
use tracing::debug;

use crate::error::{ConvertError, Result};
use crate::expressions::ExpressionCompiler;
use crate::{deployment, namespace, secret};

/// Convert a concrete wire object into its shorthand form.
pub fn from_kube(obj: &KubeObject, compiler: &dyn ExpressionCompiler) -> Result<Manifest> {
    match obj {
        KubeObject::DeploymentV1(_)
        | KubeObject::DeploymentV1Beta1(_)
        | KubeObject::DeploymentV1Beta2(_) => {
            Ok(Manifest::Deployment(deployment::from_kube(obj, compiler)?))
        }
        KubeObject::NamespaceV1(_) => Ok(Manifest::Namespace(namespace::from_kube(obj)?)),
        KubeObject::SecretV1(_) => Ok(Manifest::Secret(secret::from_kube(obj)?)),
    }
}

/// Convert a shorthand manifest into the concrete wire object selected by
/// its declared version.
pub fn to_kube(
    manifest: &Manifest,
    compiler: &dyn ExpressionCompiler,
    codec: &dyn WireCodec,
) -> Result<KubeObject> {
    match manifest {
        Manifest::Deployment(d) => deployment::to_kube(d, compiler, codec),
        Manifest::Namespace(ns) => namespace::to_kube(ns),
        Manifest::Secret(s) => secret::to_kube(s),
    }
}

/// Assert that the object's self-declared `apiVersion` agrees with its
/// concrete schema. Objects without a declared version pass; the codec
/// already resolved their identity.
pub fn ensure_declared_version(obj: &KubeObject) -> Result<()> {
    let declared = obj.declared_version();
    if declared.is_empty() {
        return Ok(());
    }
    if normalize_version(declared) != obj.schema_version() {
        return Err(ConvertError::VersionMismatch {
            observed: obj.type_name().to_string(),
            declared: declared.to_string(),
        });
    }
    Ok(())
}

/// Resolve a manifest's declared output version against the versions its
/// kind supports. Empty defaults to the family baseline `v1`.
pub fn resolve_target_version(
    declared: &str,
    supported: &[&str],
    kind: &str,
) -> Result<String> {
    let version = normalize_version(declared);
    let version = if version.is_empty() {
        "v1".to_string()
    } else {
        version
    };
    if !supported.contains(&version.as_str()) {
        return Err(ConvertError::UnknownVersion {
            observed: format!("{kind} {version}"),
        });
    }
    Ok(version)
}

/// Marshal the canonical object and immediately re-deserialize it, letting
/// the codec's kind/apiVersion sniffing select the target version's own
/// concrete type. The final bytes are therefore exactly what that version's
/// decoder accepts.
pub fn respecialize(canonical: &KubeObject, codec: &dyn WireCodec) -> Result<KubeObject> {
    let bytes = codec.marshal(canonical).map_err(|e| ConvertError::Serialization {
        kind: canonical.kind(),
        size: 0,
        message: e.to_string(),
    })?;

    debug!(
        kind = canonical.kind(),
        version = canonical.declared_version(),
        size = bytes.len(),
        "respecializing canonical object"
    );

    codec
        .unmarshal(&bytes, Some(canonical.declared_version()))
        .map_err(|e| match e {
            CodecError::UnknownObject { kind, api_version } => ConvertError::UnknownVersion {
                observed: format!("{kind} {api_version}"),
            },
            other => ConvertError::Serialization {
                kind: canonical.kind(),
                size: bytes.len(),
                message: other.to_string(),
            },
        })
}
