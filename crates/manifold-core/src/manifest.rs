//! Shorthand document union
//!
//! One shorthand document holds exactly one resource, keyed by its kind
//! (`deployment: {...}`, `namespace: {...}`, `secret: {...}`). External
//! tagging gives the parser/emitter that layout directly.

use serde::{Deserialize, Serialize};

use crate::namespace::NamespaceManifest;
use crate::secret::SecretManifest;
use crate::workload::DeploymentManifest;

/// A complete shorthand document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Manifest {
    Deployment(DeploymentManifest),
    Namespace(NamespaceManifest),
    Secret(SecretManifest),
}

impl Manifest {
    /// Shorthand kind key, e.g. `deployment`.
    pub fn kind(&self) -> &'static str {
        match self {
            Manifest::Deployment(_) => "deployment",
            Manifest::Namespace(_) => "namespace",
            Manifest::Secret(_) => "secret",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn externally_tagged_by_kind() {
        let doc = Manifest::Namespace(NamespaceManifest {
            name: "staging".into(),
            ..Default::default()
        });
        let yaml = serde_yaml::to_string(&doc).unwrap();
        assert!(yaml.starts_with("namespace:"), "got: {yaml}");
        assert_eq!(serde_yaml::from_str::<Manifest>(&yaml).unwrap(), doc);
        assert_eq!(doc.kind(), "namespace");
    }
}
