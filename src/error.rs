use crate::literal::LiteralKind;

pub type Result<T> = std::result::Result<T, Error>;

/// Structural conversion failures. None of these are worth retrying: the
/// same input always fails the same way.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("unsupported literal kind: expected {expected}, found {found}")]
    UnsupportedLiteralKind {
        expected: &'static str,
        found: LiteralKind,
    },

    #[error("aggregate element {index}: {source}")]
    AggregateElementError {
        index: usize,
        #[source]
        source: Box<Error>,
    },

    #[error("unknown feature type: {0}")]
    UnknownFeatureType(String),

    #[error("unsupported feature identifier kind: {0}")]
    UnsupportedIdentifierKind(LiteralKind),

    #[error("aggregate element {index} is itself an aggregate")]
    InvalidAggregateNesting { index: usize },

    #[error("expression is not constant: {0}")]
    NonConstantExpression(String),

    #[error("JSON value has no literal form: {0}")]
    UnrepresentableJson(String),

    #[error("invalid JSON: {0}")]
    Json(String),

    #[error("non-finite number has no expression form: {0}")]
    NonFiniteNumber(f64),

    #[error("batch item {index} produced no result")]
    BatchItemLost { index: usize },
}

impl Error {
    pub fn unsupported(expected: &'static str, found: LiteralKind) -> Self {
        Self::UnsupportedLiteralKind { expected, found }
    }

    pub fn at_index(index: usize, cause: Error) -> Self {
        Self::AggregateElementError {
            index,
            source: Box::new(cause),
        }
    }

    /// Innermost error, looking through aggregate element wrappers.
    pub fn root_cause(&self) -> &Error {
        match self {
            Error::AggregateElementError { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e.to_string())
    }
}
