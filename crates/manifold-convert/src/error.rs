//! Error taxonomy and the structured contextualizer
//!
//! Leaf conversions report a minimal, specific error (kind plus the invalid
//! value). Callers that hold positional or structural context wrap it with
//! [`ResultExt::context`] without discarding the original kind, so the
//! top-level caller renders a breadcrumb path
//! (`deployment conditions[2]: unrecognized deployment condition type: Foo`)
//! while automated callers still match the innermost kind via
//! [`ConvertError::root_cause`].

use thiserror::Error;

use crate::expressions::ExpressionError;

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Errors that can occur while converting between wire and shorthand forms.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The concrete object is not a schema this converter supports.
    #[error("unknown schema version: {observed}")]
    UnknownVersion { observed: String },

    /// The object's self-declared apiVersion disagrees with its concrete
    /// schema.
    #[error("mismatched versions: {observed} object declares apiVersion '{declared}'")]
    VersionMismatch { observed: String, declared: String },

    /// A closed-enumeration field carried a value outside its table.
    #[error("unrecognized {field}: {value}")]
    UnrecognizedEnumValue { field: &'static str, value: String },

    /// A field the target schema cannot do without is absent.
    #[error("missing required field: {field}")]
    MissingRequiredField { field: &'static str },

    /// The canonical-object round trip through the wire codec failed.
    /// Carries the payload's kind and size, never its content.
    #[error("couldn't re-serialize generic {kind} ({size} bytes): {message}")]
    Serialization {
        kind: &'static str,
        size: usize,
        message: String,
    },

    /// Failure from the external expression compiler, passed through
    /// unreclassified.
    #[error(transparent)]
    Expression(#[from] ExpressionError),

    /// A wrapped error carrying one breadcrumb of location context.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<ConvertError>,
    },
}

impl ConvertError {
    /// Wrap this error with a location breadcrumb.
    pub fn contextualize(self, context: impl Into<String>) -> Self {
        ConvertError::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error, with all context wrappers peeled off.
    pub fn root_cause(&self) -> &ConvertError {
        let mut err = self;
        while let ConvertError::Context { source, .. } = err {
            err = source;
        }
        err
    }
}

/// Context-wrapping extension for conversion results.
pub trait ResultExt<T> {
    /// Wrap the error, if any, with a location breadcrumb.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Like [`ResultExt::context`], with lazily built context.
    fn with_context(self, f: impl FnOnce() -> String) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.contextualize(context))
    }

    fn with_context(self, f: impl FnOnce() -> String) -> Result<T> {
        self.map_err(|e| e.contextualize(f()))
    }
}
