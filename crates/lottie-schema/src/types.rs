//! Layer and shape type codes.

use crate::schema::check_unique_targets;
use crate::{Direction, SchemaError};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashSet;

/// Raw code of the shape type that marks a group's transform.
pub const TRANSFORM_CODE: &str = "tr";

/// A type code as it appears in a minified document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum TypeCode {
    /// Layer kinds are small integers.
    Number(u64),
    /// Shape kinds are short tags.
    Tag(&'static str),
}

impl TypeCode {
    /// Whether `raw` denotes this code. Strings holding digits match numeric codes
    /// and integral floats match too, the way exporters sometimes write them.
    pub fn matches(self, raw: &Value) -> bool {
        match (self, raw) {
            (TypeCode::Number(n), Value::Number(raw)) => {
                raw.as_u64() == Some(n) || raw.as_f64() == Some(n as f64)
            }
            (TypeCode::Number(n), Value::String(s)) => s.trim().parse::<u64>().ok() == Some(n),
            (TypeCode::Tag(tag), Value::String(s)) => s == tag,
            _ => false,
        }
    }

    pub fn to_value(self) -> Value {
        match self {
            TypeCode::Number(n) => Value::from(n),
            TypeCode::Tag(tag) => Value::from(tag),
        }
    }
}

/// One row of the type table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TypeEntry {
    pub code: TypeCode,
    pub name: &'static str,
}

const fn layer(code: u64, name: &'static str) -> TypeEntry {
    TypeEntry {
        code: TypeCode::Number(code),
        name,
    }
}

const fn shape(tag: &'static str, name: &'static str) -> TypeEntry {
    TypeEntry {
        code: TypeCode::Tag(tag),
        name,
    }
}

pub const TYPE_CODES: &[TypeEntry] = &[
    layer(0, "PrecompLayer"),
    layer(1, "SolidLayer"),
    layer(2, "ImageLayer"),
    layer(3, "NullLayer"),
    layer(4, "ShapeLayer"),
    layer(5, "TextLayer"),
    layer(6, "AudioLayer"),
    layer(13, "CameraLayer"),
    layer(15, "DataLayer"),
    shape("gr", "Group"),
    shape("sh", "Shape"),
    shape("fl", "Fill"),
    shape("st", "Stroke"),
    shape(TRANSFORM_CODE, "Transform"),
    shape("rc", "Rectangle"),
    shape("el", "Ellipse"),
    shape("gf", "GradientFill"),
    shape("gs", "GradientStroke"),
    shape("tm", "TrimPaths"),
    shape("sr", "Polystar"),
    shape("rp", "Repeater"),
    shape("rd", "RoundCorners"),
    shape("mm", "MergePaths"),
    shape("zz", "ZigZag"),
    shape("pb", "PuckerBloat"),
    shape("tw", "Twist"),
    shape("op", "OffsetPath"),
];

/// Bidirectional lookup between type codes and readable variant names.
#[derive(Debug, Clone, Serialize)]
pub struct TypeTable {
    entries: Vec<TypeEntry>,
}

impl TypeTable {
    /// Builds a table, rejecting repeated codes and readable names shared by two codes.
    pub fn new(entries: &[TypeEntry]) -> Result<Self, SchemaError> {
        let mut codes = HashSet::new();
        for entry in entries {
            if !codes.insert(entry.code) {
                return Err(SchemaError::DuplicateKey {
                    table: "TYPES".into(),
                    key: entry.code.to_value().to_string(),
                });
            }
        }

        let rendered: Vec<(String, &str)> = entries
            .iter()
            .map(|e| (e.code.to_value().to_string(), e.name))
            .collect();
        check_unique_targets(
            "TYPES",
            rendered.iter().map(|(code, name)| (code.as_str(), *name)),
        )?;

        Ok(Self {
            entries: entries.to_vec(),
        })
    }

    pub fn entries(&self) -> &[TypeEntry] {
        &self.entries
    }

    /// Translates a code to its variant name (forward) or a name to its code
    /// (reverse). Unknown input yields `None`.
    pub fn decode(&self, raw: &Value, direction: Direction) -> Option<Value> {
        match direction {
            Direction::Forward => self
                .entries
                .iter()
                .find(|e| e.code.matches(raw))
                .map(|e| Value::from(e.name)),
            Direction::Reverse => {
                let name = raw.as_str()?;
                self.entries
                    .iter()
                    .find(|e| e.name == name)
                    .map(|e| e.code.to_value())
            }
        }
    }

    /// Whether `raw` is the transform shape code.
    pub fn is_transform(raw: &Value) -> bool {
        TypeCode::Tag(TRANSFORM_CODE).matches(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn table() -> TypeTable {
        TypeTable::new(TYPE_CODES).unwrap()
    }

    #[test]
    fn test_decode_layer_codes() {
        let types = table();
        assert_eq!(
            types.decode(&json!(4), Direction::Forward),
            Some(json!("ShapeLayer"))
        );
        assert_eq!(
            types.decode(&json!(0), Direction::Forward),
            Some(json!("PrecompLayer"))
        );
        assert_eq!(types.decode(&json!(99), Direction::Forward), None);
    }

    #[test]
    fn test_decode_is_loose_about_number_encoding() {
        let types = table();
        assert_eq!(
            types.decode(&json!("4"), Direction::Forward),
            Some(json!("ShapeLayer"))
        );
        assert_eq!(
            types.decode(&json!(4.0), Direction::Forward),
            Some(json!("ShapeLayer"))
        );
        assert_eq!(types.decode(&json!(4.5), Direction::Forward), None);
    }

    #[test]
    fn test_decode_shape_tags() {
        let types = table();
        assert_eq!(
            types.decode(&json!("gr"), Direction::Forward),
            Some(json!("Group"))
        );
        assert_eq!(
            types.decode(&json!("tr"), Direction::Forward),
            Some(json!("Transform"))
        );
        assert_eq!(types.decode(&json!("xx"), Direction::Forward), None);
        assert_eq!(types.decode(&json!(null), Direction::Forward), None);
    }

    #[test]
    fn test_reverse_restores_original_code_type() {
        let types = table();
        assert_eq!(types.decode(&json!("ShapeLayer"), Direction::Reverse), Some(json!(4)));
        assert_eq!(types.decode(&json!("Fill"), Direction::Reverse), Some(json!("fl")));
        assert_eq!(types.decode(&json!("Unknown"), Direction::Reverse), None);
        assert_eq!(types.decode(&json!(4), Direction::Reverse), None);
    }

    #[test]
    fn test_every_entry_round_trips() {
        let types = table();
        for entry in types.entries() {
            let name = types
                .decode(&entry.code.to_value(), Direction::Forward)
                .unwrap();
            assert_eq!(
                types.decode(&name, Direction::Reverse),
                Some(entry.code.to_value())
            );
        }
    }

    #[test]
    fn test_shared_name_is_rejected() {
        let entries = [layer(4, "ShapeLayer"), shape("sh", "ShapeLayer")];
        assert!(matches!(
            TypeTable::new(&entries),
            Err(SchemaError::AmbiguousInversion { .. })
        ));
    }

    #[test]
    fn test_repeated_code_is_rejected() {
        let entries = [shape("gr", "Group"), shape("gr", "Grouping")];
        assert!(matches!(
            TypeTable::new(&entries),
            Err(SchemaError::DuplicateKey { .. })
        ));
    }

    #[test]
    fn test_is_transform() {
        assert!(TypeTable::is_transform(&json!("tr")));
        assert!(!TypeTable::is_transform(&json!("gr")));
        assert!(!TypeTable::is_transform(&json!(4)));
    }
}
