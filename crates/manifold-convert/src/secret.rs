//! Secret conversions
//!
//! Payload entries stay base64-encoded strings throughout; neither
//! direction decodes them, and no error path ever quotes them.

use manifold_core::{SecretManifest, SecretType};
use manifold_kube::{KubeObject, ObjectMeta, core};

use crate::dispatch::{ensure_declared_version, resolve_target_version};
use crate::error::{ConvertError, Result};

/// Schema versions a secret manifest may declare.
pub const SUPPORTED_VERSIONS: &[&str] = &["v1"];

/// Convert a concrete wire secret into the shorthand form.
pub fn from_kube(obj: &KubeObject) -> Result<SecretManifest> {
    ensure_declared_version(obj)?;
    let KubeObject::SecretV1(secret) = obj else {
        return Err(ConvertError::UnknownVersion {
            observed: obj.type_name().to_string(),
        });
    };

    Ok(SecretManifest {
        version: core::v1::VERSION.to_string(),
        cluster: secret.metadata.cluster_name.clone(),
        name: secret.metadata.name.clone(),
        namespace: secret.metadata.namespace.clone(),
        labels: secret.metadata.labels.clone(),
        annotations: secret.metadata.annotations.clone(),
        data: secret.data.clone(),
        string_data: secret.string_data.clone(),
        secret_type: secret_type_from_kube(&secret.secret_type)?,
    })
}

/// Convert a shorthand secret into the concrete v1 wire object.
pub fn to_kube(manifest: &SecretManifest) -> Result<KubeObject> {
    let version = resolve_target_version(&manifest.version, SUPPORTED_VERSIONS, "secret")?;

    Ok(KubeObject::SecretV1(core::v1::Secret {
        api_version: version,
        kind: "Secret".into(),
        metadata: ObjectMeta {
            name: manifest.name.clone(),
            namespace: manifest.namespace.clone(),
            cluster_name: manifest.cluster.clone(),
            labels: manifest.labels.clone(),
            annotations: manifest.annotations.clone(),
        },
        data: manifest.data.clone(),
        string_data: manifest.string_data.clone(),
        secret_type: secret_type_to_kube(manifest.secret_type).to_string(),
    }))
}

fn secret_type_from_kube(value: &str) -> Result<Option<SecretType>> {
    match value {
        "" => Ok(None),
        "Opaque" => Ok(Some(SecretType::Opaque)),
        "kubernetes.io/service-account-token" => Ok(Some(SecretType::ServiceAccountToken)),
        "kubernetes.io/dockercfg" => Ok(Some(SecretType::Dockercfg)),
        "kubernetes.io/dockerconfigjson" => Ok(Some(SecretType::Dockerconfigjson)),
        "kubernetes.io/basic-auth" => Ok(Some(SecretType::BasicAuth)),
        "kubernetes.io/ssh-auth" => Ok(Some(SecretType::SshAuth)),
        "kubernetes.io/tls" => Ok(Some(SecretType::Tls)),
        other => Err(ConvertError::UnrecognizedEnumValue {
            field: "secret type",
            value: other.to_string(),
        }),
    }
}

fn secret_type_to_kube(value: Option<SecretType>) -> &'static str {
    match value {
        None => "",
        Some(SecretType::Opaque) => "Opaque",
        Some(SecretType::ServiceAccountToken) => "kubernetes.io/service-account-token",
        Some(SecretType::Dockercfg) => "kubernetes.io/dockercfg",
        Some(SecretType::Dockerconfigjson) => "kubernetes.io/dockerconfigjson",
        Some(SecretType::BasicAuth) => "kubernetes.io/basic-auth",
        Some(SecretType::SshAuth) => "kubernetes.io/ssh-auth",
        Some(SecretType::Tls) => "kubernetes.io/tls",
    }
}

#[cfg(test)]
mod tests {
    use manifold_core::LabelSet;

    use super::*;

    const ALL_TYPES: &[SecretType] = &[
        SecretType::Opaque,
        SecretType::ServiceAccountToken,
        SecretType::Dockercfg,
        SecretType::Dockerconfigjson,
        SecretType::BasicAuth,
        SecretType::SshAuth,
        SecretType::Tls,
    ];

    fn wire_secret() -> core::v1::Secret {
        core::v1::Secret {
            api_version: "v1".into(),
            kind: "Secret".into(),
            metadata: ObjectMeta {
                name: "registry-creds".into(),
                namespace: "prod".into(),
                ..Default::default()
            },
            data: LabelSet::from([("password".to_string(), "aHVudGVyMg==".to_string())]),
            secret_type: "Opaque".into(),
            ..Default::default()
        }
    }

    #[test]
    fn converts_to_shorthand() {
        let manifest = from_kube(&KubeObject::SecretV1(wire_secret())).unwrap();
        assert_eq!(manifest.name, "registry-creds");
        assert_eq!(manifest.secret_type, Some(SecretType::Opaque));
        // Payload strings pass through verbatim.
        assert_eq!(manifest.data.get("password").unwrap(), "aHVudGVyMg==");
    }

    #[test]
    fn every_type_token_round_trips() {
        for &ty in ALL_TYPES {
            let token = secret_type_to_kube(Some(ty));
            assert_eq!(secret_type_from_kube(token).unwrap(), Some(ty));
        }
        assert_eq!(secret_type_from_kube("").unwrap(), None);
        assert_eq!(secret_type_to_kube(None), "");
    }

    #[test]
    fn unknown_type_echoes_the_raw_value() {
        let mut secret = wire_secret();
        secret.secret_type = "kubernetes.io/bootstrap-token".into();
        let err = from_kube(&KubeObject::SecretV1(secret)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "unrecognized secret type: kubernetes.io/bootstrap-token"
        );
    }

    #[test]
    fn declared_version_must_match() {
        let mut secret = wire_secret();
        secret.api_version = "v1beta1".into();
        let err = from_kube(&KubeObject::SecretV1(secret)).unwrap_err();
        assert!(matches!(err, ConvertError::VersionMismatch { .. }));
    }

    #[test]
    fn round_trips_through_wire_form() {
        let manifest = SecretManifest {
            version: "v1".into(),
            name: "registry-creds".into(),
            namespace: "prod".into(),
            data: LabelSet::from([("password".to_string(), "aHVudGVyMg==".to_string())]),
            string_data: LabelSet::from([("note".to_string(), "rotated".to_string())]),
            secret_type: Some(SecretType::Dockerconfigjson),
            ..Default::default()
        };
        let obj = to_kube(&manifest).unwrap();
        assert_eq!(from_kube(&obj).unwrap(), manifest);
    }
}
