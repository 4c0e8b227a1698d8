//! Selector / template-label reconciliation
//!
//! Every ReplicaSet-style controller carries both an immutable label
//! selector and a pod template whose labels must stay compatible with it.
//! The shorthand form avoids storing the same label set twice: when the
//! selector is a flat label match equal to the template's labels, one copy
//! suffices and the template side records nothing. This module is the
//! single authority for that collapse and its reversal, shared by every
//! resource kind with the selector/template shape.

use manifold_core::{LabelSet, Selector, TemplateMetadata, labels_match};
use manifold_kube::LabelSelector;

use crate::error::Result;
use crate::expressions::ExpressionCompiler;

/// Reconcile a wire selector with the template's labels into the shorthand
/// form: the selector plus an optional template-label override.
///
/// The override is `None` exactly when the template labels are recoverable
/// from the returned selector. A selector with match-expressions always
/// records the override, even an empty one - it can never be proven equal
/// to a flat label set, so no collapse is attempted.
pub fn collapse_selector(
    kube_selector: Option<&LabelSelector>,
    template_labels: Option<&LabelSet>,
    compiler: &dyn ExpressionCompiler,
) -> Result<(Selector, Option<LabelSet>)> {
    // An unspecified selector defaults to the template's labels.
    let Some(selector) = kube_selector else {
        let labels = template_labels.cloned().unwrap_or_default();
        return Ok((Selector::Explicit(labels), None));
    };

    if selector.match_expressions.is_empty() {
        if labels_match(&selector.match_labels, template_labels) {
            // Selector and template labels agree; store them once.
            return Ok((Selector::Explicit(selector.match_labels.clone()), None));
        }
        // They disagree, so both must be retained.
        return Ok((
            Selector::Explicit(selector.match_labels.clone()),
            Some(template_labels.cloned().unwrap_or_default()),
        ));
    }

    let text = compiler.compile(selector)?;
    Ok((
        Selector::Expression(text),
        Some(template_labels.cloned().unwrap_or_default()),
    ))
}

/// Reverse of [`collapse_selector`]: rebuild the wire selector and the
/// effective template labels from the shorthand form.
///
/// For an expression selector with no stored override the effective labels
/// are `None`; the caller must leave the template's own labels untouched in
/// that case, since nothing can be derived from the selector.
pub fn expand_selector(
    selector: Option<&Selector>,
    stored_labels: Option<&LabelSet>,
    compiler: &dyn ExpressionCompiler,
) -> Result<(Option<LabelSelector>, Option<LabelSet>)> {
    match selector {
        None => Ok((None, stored_labels.cloned())),
        Some(Selector::Expression(text)) => {
            let parsed = compiler.parse(text)?;
            Ok((Some(parsed), stored_labels.cloned()))
        }
        Some(Selector::Explicit(labels)) => Ok((
            Some(LabelSelector::from_labels(labels.clone())),
            stored_labels.cloned().or_else(|| Some(labels.clone())),
        )),
    }
}

/// Assign a label set into template metadata, creating or clearing as
/// needed. Used identically by both conversion directions, which is what
/// makes the collapse/expand round trip exact.
pub fn apply_template_labels_override(
    labels: Option<LabelSet>,
    meta: Option<TemplateMetadata>,
) -> Option<TemplateMetadata> {
    match (meta, labels) {
        (Some(mut meta), labels) => {
            meta.labels = labels;
            Some(meta)
        }
        (None, Some(labels)) => Some(TemplateMetadata {
            labels: Some(labels),
            ..Default::default()
        }),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use manifold_kube::{LabelSelectorRequirement, SelectorOperator};

    use super::*;
    use crate::error::ConvertError;
    use crate::expressions::testing::{FailingCompiler, StubCompiler};

    fn labels(pairs: &[(&str, &str)]) -> LabelSet {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn absent_selector_defaults_to_template_labels() {
        let template = labels(&[("app", "web")]);
        let (selector, stored) =
            collapse_selector(None, Some(&template), &StubCompiler).unwrap();
        assert_eq!(selector, Selector::Explicit(template.clone()));
        assert_eq!(stored, None);

        let (kube, effective) =
            expand_selector(Some(&selector), stored.as_ref(), &StubCompiler).unwrap();
        let kube = kube.unwrap();
        assert_eq!(kube.match_labels, template);
        assert!(kube.match_expressions.is_empty());
        assert_eq!(effective, Some(template));
    }

    #[test]
    fn matching_selector_collapses() {
        let shared = labels(&[("app", "web"), ("tier", "frontend")]);
        let kube_selector = LabelSelector::from_labels(shared.clone());

        let (selector, stored) =
            collapse_selector(Some(&kube_selector), Some(&shared), &StubCompiler).unwrap();
        assert_eq!(selector, Selector::Explicit(shared.clone()));
        assert_eq!(stored, None);

        let (kube, effective) =
            expand_selector(Some(&selector), stored.as_ref(), &StubCompiler).unwrap();
        assert_eq!(kube.unwrap(), kube_selector);
        assert_eq!(effective, Some(shared));
    }

    #[test]
    fn divergent_labels_record_an_override() {
        let selector_labels = labels(&[("a", "1")]);
        let template = labels(&[("a", "1"), ("b", "2")]);
        let kube_selector = LabelSelector::from_labels(selector_labels.clone());

        let (selector, stored) =
            collapse_selector(Some(&kube_selector), Some(&template), &StubCompiler).unwrap();
        assert_eq!(selector, Selector::Explicit(selector_labels.clone()));
        assert_eq!(stored, Some(template.clone()));

        let (kube, effective) =
            expand_selector(Some(&selector), stored.as_ref(), &StubCompiler).unwrap();
        assert_eq!(kube.unwrap().match_labels, selector_labels);
        assert_eq!(effective, Some(template));
    }

    #[test]
    fn expression_selector_round_trips_through_compiler() {
        let kube_selector = LabelSelector {
            match_labels: LabelSet::new(),
            match_expressions: vec![LabelSelectorRequirement {
                key: "env".into(),
                operator: SelectorOperator::In,
                values: vec!["prod".into()],
            }],
        };
        let template = labels(&[("env", "prod"), ("tier", "web")]);

        let (selector, stored) =
            collapse_selector(Some(&kube_selector), Some(&template), &StubCompiler).unwrap();
        assert!(matches!(selector, Selector::Expression(_)));
        assert_eq!(stored, Some(template.clone()));

        let (kube, effective) =
            expand_selector(Some(&selector), stored.as_ref(), &StubCompiler).unwrap();
        assert_eq!(kube.unwrap(), kube_selector);
        assert_eq!(effective, Some(template));
    }

    // A match-expression selector over a template with no labels at all
    // still records an (empty) override rather than omitting it.
    #[test]
    fn expression_selector_without_template_labels_records_override() {
        let kube_selector = LabelSelector {
            match_labels: LabelSet::new(),
            match_expressions: vec![LabelSelectorRequirement {
                key: "env".into(),
                operator: SelectorOperator::Exists,
                values: Vec::new(),
            }],
        };

        let (selector, stored) =
            collapse_selector(Some(&kube_selector), None, &StubCompiler).unwrap();
        assert!(matches!(selector, Selector::Expression(_)));
        assert_eq!(stored, Some(LabelSet::new()));
    }

    #[test]
    fn compiler_failure_propagates_unchanged() {
        let kube_selector = LabelSelector {
            match_labels: LabelSet::new(),
            match_expressions: vec![LabelSelectorRequirement {
                key: "env".into(),
                operator: SelectorOperator::Exists,
                values: Vec::new(),
            }],
        };
        let err = collapse_selector(Some(&kube_selector), None, &FailingCompiler).unwrap_err();
        assert!(matches!(err, ConvertError::Expression(_)));
        assert_eq!(err.to_string(), "compile refused");

        let expr = Selector::Expression("whatever".into());
        let err = expand_selector(Some(&expr), None, &FailingCompiler).unwrap_err();
        assert!(matches!(err, ConvertError::Expression(_)));
    }

    #[test]
    fn override_assignment_clears_and_creates() {
        let meta = TemplateMetadata {
            name: "tpl".into(),
            labels: Some(labels(&[("a", "1")])),
            ..Default::default()
        };
        // None clears stored labels while keeping the rest of the metadata.
        let cleared = apply_template_labels_override(None, Some(meta.clone())).unwrap();
        assert_eq!(cleared.labels, None);
        assert_eq!(cleared.name, "tpl");

        // Some creates metadata when there was none.
        let created =
            apply_template_labels_override(Some(labels(&[("b", "2")])), None).unwrap();
        assert_eq!(created.labels, Some(labels(&[("b", "2")])));

        assert_eq!(apply_template_labels_override(None, None), None);
    }
}
