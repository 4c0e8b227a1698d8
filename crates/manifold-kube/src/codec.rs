//! The generic (de)serializer boundary
//!
//! Outbound conversion canonicalizes into one generic schema, marshals it,
//! and re-deserializes under the declared target version so the final bytes
//! are exactly what that version's own decoder accepts. [`WireCodec`] is the
//! injection point for that round trip; [`YamlCodec`] is the default
//! implementation and tests may substitute an in-memory fake.

use serde_yaml::Value;

use crate::apps;
use crate::core;
use crate::error::{CodecError, Result};
use crate::object::{KubeObject, normalize_version};

/// Marshal/unmarshal boundary for versioned wire objects.
pub trait WireCodec {
    /// Serialize a concrete object to wire bytes.
    fn marshal(&self, obj: &KubeObject) -> Result<Vec<u8>>;

    /// Deserialize wire bytes into the concrete object selected by the
    /// document's `kind` and `apiVersion`. `version_hint` supplies the
    /// version when the document omits one; with neither, the family
    /// baseline `v1` applies.
    fn unmarshal(&self, bytes: &[u8], version_hint: Option<&str>) -> Result<KubeObject>;
}

/// Default YAML implementation of [`WireCodec`].
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlCodec;

impl WireCodec for YamlCodec {
    fn marshal(&self, obj: &KubeObject) -> Result<Vec<u8>> {
        let yaml = match obj {
            KubeObject::DeploymentV1(d) => serde_yaml::to_string(d)?,
            KubeObject::DeploymentV1Beta1(d) => serde_yaml::to_string(d)?,
            KubeObject::DeploymentV1Beta2(d) => serde_yaml::to_string(d)?,
            KubeObject::NamespaceV1(ns) => serde_yaml::to_string(ns)?,
            KubeObject::SecretV1(s) => serde_yaml::to_string(s)?,
        };
        Ok(yaml.into_bytes())
    }

    fn unmarshal(&self, bytes: &[u8], version_hint: Option<&str>) -> Result<KubeObject> {
        let value: Value = serde_yaml::from_slice(bytes)?;

        let kind = value
            .get("kind")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        if kind.is_empty() {
            return Err(CodecError::MissingKind);
        }

        let declared = value
            .get("apiVersion")
            .and_then(Value::as_str)
            .unwrap_or_default();
        let mut version = if declared.is_empty() {
            normalize_version(version_hint.unwrap_or_default())
        } else {
            normalize_version(declared)
        };
        if version.is_empty() {
            version = "v1".to_string();
        }

        let obj = match (kind.as_str(), version.as_str()) {
            ("Deployment", "v1") => {
                let mut d: apps::v1::Deployment = serde_yaml::from_value(value)?;
                if d.api_version.is_empty() {
                    d.api_version = version.clone();
                }
                KubeObject::DeploymentV1(d)
            }
            ("Deployment", "v1beta1") => {
                let mut d: apps::v1beta1::Deployment = serde_yaml::from_value(value)?;
                if d.api_version.is_empty() {
                    d.api_version = version.clone();
                }
                KubeObject::DeploymentV1Beta1(d)
            }
            ("Deployment", "v1beta2") => {
                let mut d: apps::v1beta2::Deployment = serde_yaml::from_value(value)?;
                if d.api_version.is_empty() {
                    d.api_version = version.clone();
                }
                KubeObject::DeploymentV1Beta2(d)
            }
            ("Namespace", "v1") => {
                let mut ns: core::v1::Namespace = serde_yaml::from_value(value)?;
                if ns.api_version.is_empty() {
                    ns.api_version = version.clone();
                }
                KubeObject::NamespaceV1(ns)
            }
            ("Secret", "v1") => {
                let mut s: core::v1::Secret = serde_yaml::from_value(value)?;
                if s.api_version.is_empty() {
                    s.api_version = version.clone();
                }
                KubeObject::SecretV1(s)
            }
            _ => {
                return Err(CodecError::UnknownObject {
                    kind: kind.clone(),
                    api_version: version.clone(),
                });
            }
        };

        Ok(obj)
    }
}
