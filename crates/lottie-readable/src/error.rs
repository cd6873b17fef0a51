use lottie_schema::{SchemaError, SchemaId};
use thiserror::Error;

/// Errors raised while remapping a document.
///
/// None of these are recovered internally: each one points either at a gap in
/// a schema table or at a document the tables cannot describe.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RemapError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// A supplementary key has no entry in the schema's extra mapping.
    #[error("{schema}: no extra mapping for key `{key}`")]
    UnresolvedExtraKey { schema: SchemaId, key: String },

    #[error("{schema} group #{index}: {reason}")]
    MalformedGroup {
        schema: SchemaId,
        index: usize,
        reason: String,
    },

    #[error("expected {expected} for {context}")]
    UnexpectedShape {
        context: String,
        expected: &'static str,
    },
}

impl RemapError {
    pub(crate) fn malformed(schema: SchemaId, index: usize, reason: impl Into<String>) -> Self {
        RemapError::MalformedGroup {
            schema,
            index,
            reason: reason.into(),
        }
    }
}
