use crate::SchemaId;
use thiserror::Error;

/// Problems found while building or querying the schema registry.
///
/// Everything except [`SchemaError::UnknownSchema`] is detected once, when the
/// registry is built, and points at a defect in the tables rather than in a
/// document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("unknown schema `{0}`")]
    UnknownSchema(String),

    /// Two entries of one table share a readable name, so the table has no inverse.
    #[error("{table}: `{first}` and `{second}` both map to `{target}`")]
    AmbiguousInversion {
        table: String,
        target: String,
        first: String,
        second: String,
    },

    #[error("{table}: key `{key}` is declared more than once")]
    DuplicateKey { table: String, key: String },

    #[error("schema {0} is registered more than once")]
    DuplicateSchema(SchemaId),

    #[error("schema {schema} refers to unregistered schema {target}")]
    DanglingReference { schema: SchemaId, target: SchemaId },
}
