//! Text-in, text-out conversion.

use crate::{ConvertOptions, RemapError, Remapper};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EntryError {
    #[error("document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Remap(#[from] RemapError),
}

/// Parses `text` and remaps it with `options`.
pub fn convert_str(text: &str, options: ConvertOptions) -> Result<Value, EntryError> {
    let document: Value = serde_json::from_str(text)?;
    Ok(Remapper::with_builtin(options)?.convert(&document)?)
}

/// Parses a readable document and restores its minified form.
pub fn revert_str(text: &str, include_extra: bool) -> Result<Value, EntryError> {
    convert_str(text, ConvertOptions::reverse(include_extra))
}
