//! Shorthand secret manifest
//!
//! Secret payloads stay at the wire level: `data` holds the base64 strings
//! exactly as they appear in the manifest. The converter never decodes
//! them, which also keeps payload bytes out of any error path.

use serde::{Deserialize, Serialize};

use crate::labels::LabelSet;

/// Closed set of secret types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SecretType {
    Opaque,
    ServiceAccountToken,
    Dockercfg,
    Dockerconfigjson,
    BasicAuth,
    SshAuth,
    Tls,
}

/// Shorthand form of a Secret.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecretManifest {
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

    /// Base64-encoded payload entries, passed through untouched.
    #[serde(skip_serializing_if = "LabelSet::is_empty")]
    pub data: LabelSet,
    #[serde(skip_serializing_if = "LabelSet::is_empty")]
    pub string_data: LabelSet,
    /// Absent when the wire object carries an empty type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub secret_type: Option<SecretType>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_type_tokens() {
        let tokens: Vec<String> = [
            SecretType::Opaque,
            SecretType::ServiceAccountToken,
            SecretType::Dockercfg,
            SecretType::Dockerconfigjson,
            SecretType::BasicAuth,
            SecretType::SshAuth,
            SecretType::Tls,
        ]
        .iter()
        .map(|t| serde_yaml::to_string(t).unwrap().trim().to_string())
        .collect();

        assert_eq!(
            tokens,
            vec![
                "opaque",
                "service-account-token",
                "dockercfg",
                "dockerconfigjson",
                "basic-auth",
                "ssh-auth",
                "tls",
            ]
        );
    }
}
