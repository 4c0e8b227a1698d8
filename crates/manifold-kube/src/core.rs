//! core group: Namespace and Secret wire schemas

/// core/v1
pub mod v1 {
    use manifold_core::LabelSet;
    use serde::{Deserialize, Serialize};

    use crate::meta::ObjectMeta;

    /// Version token of this schema.
    pub const VERSION: &str = "v1";

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct NamespaceSpec {
        /// Raw finalizer names; the enum table in manifold-convert owns
        /// their interpretation.
        #[serde(skip_serializing_if = "Vec::is_empty")]
        pub finalizers: Vec<String>,
    }

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct NamespaceStatus {
        #[serde(skip_serializing_if = "String::is_empty")]
        pub phase: String,
    }

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase", default)]
    pub struct Namespace {
        #[serde(skip_serializing_if = "String::is_empty")]
        pub api_version: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        pub kind: String,
        pub metadata: ObjectMeta,
        #[serde(skip_serializing_if = "NamespaceSpec::is_default")]
        pub spec: NamespaceSpec,
        #[serde(skip_serializing_if = "NamespaceStatus::is_default")]
        pub status: NamespaceStatus,
    }

    impl NamespaceSpec {
        fn is_default(&self) -> bool {
            self.finalizers.is_empty()
        }
    }

    impl NamespaceStatus {
        fn is_default(&self) -> bool {
            self.phase.is_empty()
        }
    }

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase", default)]
    pub struct Secret {
        #[serde(skip_serializing_if = "String::is_empty")]
        pub api_version: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        pub kind: String,
        pub metadata: ObjectMeta,
        /// Base64-encoded payload entries, never decoded here.
        #[serde(skip_serializing_if = "LabelSet::is_empty")]
        pub data: LabelSet,
        #[serde(skip_serializing_if = "LabelSet::is_empty")]
        pub string_data: LabelSet,
        /// Raw secret type string, mapped by the enum table.
        #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
        pub secret_type: String,
    }
}
