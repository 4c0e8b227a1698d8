//! Expression compiler boundary
//!
//! Selectors containing match-expressions are stored in shorthand as one
//! opaque compiled string. Compiling and parsing that string is the job of
//! an external collaborator injected through [`ExpressionCompiler`]; the
//! transducer never interprets the text itself. The trait takes the whole
//! [`LabelSelector`] because a selector may carry flat label matches next to
//! its match-expressions, and both must survive the round trip.

use manifold_kube::LabelSelector;
use thiserror::Error;

/// Failure reported by the expression compiler. Passed through conversion
/// unreclassified.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ExpressionError {
    message: String,
}

impl ExpressionError {
    pub fn new(message: impl Into<String>) -> Self {
        ExpressionError {
            message: message.into(),
        }
    }
}

/// Compiles structured selectors to opaque expression text and back.
pub trait ExpressionCompiler {
    /// Render a selector with match-expressions as one expression string.
    fn compile(&self, selector: &LabelSelector) -> Result<String, ExpressionError>;

    /// Parse expression text back into a structured selector.
    fn parse(&self, text: &str) -> Result<LabelSelector, ExpressionError>;
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory compiler substitutes for tests.

    use manifold_core::LabelSet;
    use manifold_kube::{LabelSelectorRequirement, SelectorOperator};

    use super::*;

    /// A small but real selector grammar: clauses separated by `, `, each
    /// either `k=v`, `k in (a,b)`, `k notin (a,b)`, `k` (exists) or `!k`
    /// (does not exist). Deterministic because label maps are ordered and
    /// expression order is preserved.
    pub struct StubCompiler;

    impl ExpressionCompiler for StubCompiler {
        fn compile(&self, selector: &LabelSelector) -> Result<String, ExpressionError> {
            let mut clauses: Vec<String> = selector
                .match_labels
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect();
            for req in &selector.match_expressions {
                let clause = match req.operator {
                    SelectorOperator::In => format!("{} in ({})", req.key, req.values.join(",")),
                    SelectorOperator::NotIn => {
                        format!("{} notin ({})", req.key, req.values.join(","))
                    }
                    SelectorOperator::Exists => req.key.clone(),
                    SelectorOperator::DoesNotExist => format!("!{}", req.key),
                };
                clauses.push(clause);
            }
            Ok(clauses.join(", "))
        }

        fn parse(&self, text: &str) -> Result<LabelSelector, ExpressionError> {
            let mut match_labels = LabelSet::new();
            let mut match_expressions = Vec::new();

            for clause in text.split(", ").filter(|c| !c.is_empty()) {
                if let Some((key, rest)) = clause.split_once(" in (") {
                    match_expressions.push(requirement(key, SelectorOperator::In, rest)?);
                } else if let Some((key, rest)) = clause.split_once(" notin (") {
                    match_expressions.push(requirement(key, SelectorOperator::NotIn, rest)?);
                } else if let Some((key, value)) = clause.split_once('=') {
                    match_labels.insert(key.to_string(), value.to_string());
                } else if let Some(key) = clause.strip_prefix('!') {
                    match_expressions.push(LabelSelectorRequirement {
                        key: key.to_string(),
                        operator: SelectorOperator::DoesNotExist,
                        values: Vec::new(),
                    });
                } else {
                    match_expressions.push(LabelSelectorRequirement {
                        key: clause.to_string(),
                        operator: SelectorOperator::Exists,
                        values: Vec::new(),
                    });
                }
            }

            Ok(LabelSelector {
                match_labels,
                match_expressions,
            })
        }
    }

    fn requirement(
        key: &str,
        operator: SelectorOperator,
        rest: &str,
    ) -> Result<LabelSelectorRequirement, ExpressionError> {
        let values = rest
            .strip_suffix(')')
            .ok_or_else(|| ExpressionError::new(format!("unterminated value list for {key}")))?;
        Ok(LabelSelectorRequirement {
            key: key.to_string(),
            operator,
            values: values.split(',').map(str::to_string).collect(),
        })
    }

    /// A compiler that always fails, for propagation tests.
    pub struct FailingCompiler;

    impl ExpressionCompiler for FailingCompiler {
        fn compile(&self, _selector: &LabelSelector) -> Result<String, ExpressionError> {
            Err(ExpressionError::new("compile refused"))
        }

        fn parse(&self, _text: &str) -> Result<LabelSelector, ExpressionError> {
            Err(ExpressionError::new("parse refused"))
        }
    }

    #[test]
    fn stub_grammar_round_trips() {
        let selector = LabelSelector {
            match_labels: [("app".to_string(), "web".to_string())].into_iter().collect(),
            match_expressions: vec![
                LabelSelectorRequirement {
                    key: "env".into(),
                    operator: SelectorOperator::In,
                    values: vec!["prod".into(), "canary".into()],
                },
                LabelSelectorRequirement {
                    key: "legacy".into(),
                    operator: SelectorOperator::DoesNotExist,
                    values: Vec::new(),
                },
            ],
        };
        let text = StubCompiler.compile(&selector).unwrap();
        assert_eq!(text, "app=web, env in (prod,canary), !legacy");
        assert_eq!(StubCompiler.parse(&text).unwrap(), selector);
    }
}
