//! Key schemas for translating minified Lottie documents into readable ones.
//!
//! The registry holds every schema in both directions and is validated once
//! when it is built, so remapping code can treat lookups as infallible in
//! practice and never mutates a table.

pub mod blueprint;
mod error;
pub mod registry;
pub mod schema;
pub mod types;

pub use error::SchemaError;
pub use registry::SchemaRegistry;
pub use schema::{Blueprint, Direction, ExtraField, Field, FieldKind, Schema, SchemaId};
pub use types::{TypeCode, TypeEntry, TypeTable};
