//! Error types for manifold-kube

use thiserror::Error;

/// Errors from the wire codec.
#[derive(Debug, Error)]
pub enum CodecError {
    /// YAML (de)serialization failure. serde_yaml reports positions, not
    /// payload content.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The document carries no `kind` field to dispatch on.
    #[error("manifest declares no kind")]
    MissingKind,

    /// The (kind, apiVersion) pair is not a supported schema.
    #[error("unsupported object: {kind} ({api_version})")]
    UnknownObject { kind: String, api_version: String },
}

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;
