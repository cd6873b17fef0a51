//! Shape of a node, decided once where the walk descends into it.

use lottie_schema::{Direction, Schema};
use serde_json::{Map, Value};

/// The shapes a document node can take.
///
/// Minified and readable trees share every shape except group lists: the
/// minified form stores sibling groups as an ordered list, the readable form as
/// an object keyed by group name.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    /// Ordered sibling groups (minified form).
    GroupList(&'a [Value]),
    /// Sibling groups keyed by name (readable form).
    GroupMap(&'a Map<String, Value>),
    /// A single record.
    Record(&'a Map<String, Value>),
    /// Timed value records.
    Keyframes(&'a [Value]),
    /// Scalars, numeric vectors and anything else copied as-is.
    Leaf(&'a Value),
}

impl<'a> Node<'a> {
    /// Classifies a node reached through a group-bearing field described by `schema`.
    pub fn at_group(value: &'a Value, schema: &Schema) -> Self {
        match value {
            Value::Array(items) if schema.direction() == Direction::Forward => Node::GroupList(items),
            Value::Object(map)
                if schema.direction() == Direction::Reverse && schema.children_field().is_some() =>
            {
                Node::GroupMap(map)
            }
            Value::Object(map) => Node::Record(map),
            other => Node::Leaf(other),
        }
    }

    /// Classifies a node reached through a value slot.
    pub fn at_value(value: &'a Value) -> Self {
        match value {
            Value::Array(items) if is_keyframe_sequence(items) => Node::Keyframes(items),
            Value::Object(map) => Node::Record(map),
            other => Node::Leaf(other),
        }
    }
}

/// A value array holds keyframes iff at least one element is a record rather
/// than a raw number.
pub fn is_keyframe_sequence(items: &[Value]) -> bool {
    items.iter().any(Value::is_object)
}

/// Color channels stored in `value`, if it is a numeric array of at least three.
pub(crate) fn color_channels(value: &Value) -> Option<Vec<f64>> {
    let items = value.as_array()?;
    if items.len() < 3 {
        return None;
    }
    items.iter().map(Value::as_f64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lottie_schema::{SchemaId, SchemaRegistry};
    use serde_json::json;

    #[test]
    fn test_keyframe_sequence_detection() {
        let keyframes = json!([{"t": 0, "s": [0]}, {"t": 10, "s": [1]}]);
        assert!(matches!(Node::at_value(&keyframes), Node::Keyframes(items) if items.len() == 2));

        let vector = json!([0, 0, 0]);
        assert!(matches!(Node::at_value(&vector), Node::Leaf(_)));

        let nested = json!([[0, 0], [1, 1]]);
        assert!(!is_keyframe_sequence(nested.as_array().unwrap()));

        let mixed = json!([0, {"t": 3}]);
        assert!(is_keyframe_sequence(mixed.as_array().unwrap()));

        assert!(!is_keyframe_sequence(&[]));
    }

    #[test]
    fn test_group_classification_depends_on_direction() {
        let registry = SchemaRegistry::global().unwrap();
        let forward = registry.lookup(SchemaId::Contents, Direction::Forward).unwrap();
        let reverse = registry.lookup(SchemaId::Contents, Direction::Reverse).unwrap();
        let transform = registry.lookup(SchemaId::Transform, Direction::Reverse).unwrap();

        let list = json!([{"nm": "a"}]);
        let map = json!({"a": {"name": "a"}});

        assert!(matches!(Node::at_group(&list, forward), Node::GroupList(_)));
        assert!(matches!(Node::at_group(&map, forward), Node::Record(_)));
        assert!(matches!(Node::at_group(&map, reverse), Node::GroupMap(_)));
        assert!(matches!(Node::at_group(&map, transform), Node::Record(_)));
        assert!(matches!(Node::at_group(&list, reverse), Node::Leaf(_)));
    }

    #[test]
    fn test_color_channels() {
        assert_eq!(color_channels(&json!([1, 0.5, 0, 1])), Some(vec![1.0, 0.5, 0.0, 1.0]));
        assert_eq!(color_channels(&json!([1, 0.5])), None);
        assert_eq!(color_channels(&json!([1, "x", 0])), None);
        assert_eq!(color_channels(&json!("#ffffff")), None);
    }
}
