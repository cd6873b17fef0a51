//! Schema-driven translation of minified Lottie documents into readable ones.
//!
//! ```text
//! {"nm": "Comp", "fr": 24, "op": 30, "layers": [{"ty": 4, "nm": "Shape", ...}]}
//!   -> {"name": "Comp", "frameRate": 24, "lastFrame": 30, "duration": "1:5",
//!       "layers": [{"type": "ShapeLayer", "name": "Shape", ...}]}
//! ```
//!
//! The walk is split the way the document nests:
//! - [`Remapper::convert`] handles the composition, its assets and layers;
//! - [`Remapper::remap_group`] handles content lists, hoisting each group's
//!   transform into a `Transform` slot and keying siblings by name;
//! - [`Remapper::remap_leaf`] transcribes single records and keyframe arrays,
//!   decoding type codes and hex-coding colors.
//!
//! Every step also runs in reverse with the inverted schemas, so a readable
//! document can be turned back into a minified one.

pub mod color;
mod document;
mod entry;
mod error;
mod group;
mod leaf;
pub mod node;
mod options;

pub use document::format_duration;
pub use entry::{convert_str, revert_str, EntryError};
pub use error::RemapError;
pub use lottie_schema::{Direction, SchemaId, SchemaRegistry};
pub use options::ConvertOptions;

use lottie_schema::Schema;
use serde_json::Value;

/// Key of the object collecting supplementary fields.
pub const EXTRA_KEY: &str = "extra";
/// Slot on a group's readable record holding its hoisted transform.
pub const TRANSFORM_SLOT: &str = "Transform";
/// Carries the raw code next to a `null` type that has no readable variant.
pub const UNDECODED_TYPE_KEY: &str = "typeCode";
/// Derived composition length, added in the readable form only.
pub const DURATION_KEY: &str = "duration";

/// Walks documents with one registry and one set of options.
#[derive(Debug, Clone, Copy)]
pub struct Remapper<'r> {
    registry: &'r SchemaRegistry,
    options: ConvertOptions,
}

impl<'r> Remapper<'r> {
    pub fn new(registry: &'r SchemaRegistry, options: ConvertOptions) -> Self {
        Self { registry, options }
    }

    pub fn options(&self) -> ConvertOptions {
        self.options
    }

    pub(crate) fn schema(&self, id: SchemaId) -> Result<&'r Schema, RemapError> {
        Ok(self.registry.lookup(id, self.options.direction)?)
    }

    pub(crate) fn is_forward(&self) -> bool {
        self.options.direction == Direction::Forward
    }
}

impl Remapper<'static> {
    /// Remapper backed by the built-in registry.
    pub fn with_builtin(options: ConvertOptions) -> Result<Self, RemapError> {
        Ok(Self::new(SchemaRegistry::global()?, options))
    }
}

/// Minified document to readable form.
pub fn convert(document: &Value, include_extra: bool) -> Result<Value, RemapError> {
    Remapper::with_builtin(ConvertOptions::forward(include_extra))?.convert(document)
}

/// Readable document back to minified form.
pub fn revert(document: &Value, include_extra: bool) -> Result<Value, RemapError> {
    Remapper::with_builtin(ConvertOptions::reverse(include_extra))?.convert(document)
}
