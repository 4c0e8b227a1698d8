//! Manifold Convert - the bidirectional manifest transducer
//!
//! Converts concrete, versioned Kubernetes wire objects into the compact
//! shorthand form and back:
//! - **dispatch**: version routing over the closed
//!   [`KubeObject`](manifold_kube::KubeObject) union, declared-version
//!   validation, and the canonical-object respecialization step
//! - **deployment / namespace / secret**: per-kind field mappings and the
//!   closed enum tables
//! - **selector**: the selector / template-label reconciler shared by
//!   workload kinds
//! - **expressions**: the injected compiler boundary for match-expression
//!   selectors
//! - **error**: the conversion error taxonomy and breadcrumb contextualizer
//!
//! The two entry points are [`from_kube`] and [`to_kube`]; everything else
//! is exposed for callers that convert one kind directly.

pub mod deployment;
pub mod dispatch;
pub mod error;
pub mod expressions;
pub mod namespace;
pub mod secret;
pub mod selector;

pub use dispatch::{from_kube, resolve_target_version, to_kube};
pub use error::{ConvertError, Result, ResultExt};
pub use expressions::{ExpressionCompiler, ExpressionError};
pub use selector::{apply_template_labels_override, collapse_selector, expand_selector};

#[cfg(test)]
mod tests {
    use manifold_core::{Manifest, NamespaceManifest, SecretManifest};
    use manifold_kube::{KubeObject, YamlCodec, core};

    use super::*;
    use crate::expressions::testing::StubCompiler;

    #[test]
    fn dispatch_routes_by_manifest_kind() {
        let manifest = Manifest::Namespace(NamespaceManifest {
            name: "staging".into(),
            ..Default::default()
        });
        let obj = to_kube(&manifest, &StubCompiler, &YamlCodec).unwrap();
        assert!(matches!(obj, KubeObject::NamespaceV1(_)));
        assert_eq!(from_kube(&obj, &StubCompiler).unwrap(), {
            let Manifest::Namespace(mut ns) = manifest else {
                unreachable!()
            };
            ns.version = "v1".into();
            Manifest::Namespace(ns)
        });
    }

    #[test]
    fn dispatch_routes_by_object_variant() {
        let obj = KubeObject::SecretV1(core::v1::Secret {
            api_version: "v1".into(),
            kind: "Secret".into(),
            ..Default::default()
        });
        let manifest = from_kube(&obj, &StubCompiler).unwrap();
        assert!(matches!(manifest, Manifest::Secret(SecretManifest { .. })));
        assert_eq!(manifest.kind(), "secret");
    }
}
