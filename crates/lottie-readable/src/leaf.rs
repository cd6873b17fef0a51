//! Record-level transcription: key renaming, type codes, colors and the
//! `extra` bucket.

use crate::node::{color_channels, is_keyframe_sequence, Node};
use crate::{color, RemapError, Remapper, EXTRA_KEY, UNDECODED_TYPE_KEY};
use lottie_schema::blueprint::{END_VALUE, START_VALUE, VALUE};
use lottie_schema::{Direction, Field, FieldKind, Schema, SchemaId};
use serde_json::{Map, Value};
use tracing::{debug, trace, warn};

impl Remapper<'_> {
    /// Remaps a single record, or every record of a keyframe array, with the
    /// schema `id`. Anything else is returned unchanged.
    pub fn remap_leaf(&self, raw: &Value, id: SchemaId) -> Result<Value, RemapError> {
        let schema = self.schema(id)?;
        match Node::at_value(raw) {
            Node::Record(record) => self.remap_record(record, schema).map(Value::Object),
            Node::Keyframes(items) => items
                .iter()
                .map(|item| match item {
                    Value::Object(record) => self.remap_record(record, schema).map(Value::Object),
                    other => {
                        debug!(schema = %id, "keeping non-record entry of a keyframe array");
                        Ok(other.clone())
                    }
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array),
            _ => Ok(raw.clone()),
        }
    }

    /// Transcribes `record` key by key in input order.
    ///
    /// Children lists are left to the group walk. Keys outside the main table
    /// go to `extra` or are dropped, depending on the options.
    pub(crate) fn remap_record(
        &self,
        record: &Map<String, Value>,
        schema: &Schema,
    ) -> Result<Map<String, Value>, RemapError> {
        let mut out = Map::new();
        let mut extra = Map::new();

        for (key, value) in record {
            if let Some(field) = schema.field(key) {
                self.remap_field(field, value, record, &mut out)?;
            } else if self.is_forward() {
                self.relocate_extra(schema, key, value, &mut extra)?;
            } else if key == EXTRA_KEY {
                self.restore_extra(schema, value, &mut out)?;
            } else if key != UNDECODED_TYPE_KEY {
                trace!(schema = %schema.id(), key = key.as_str(), "dropping unmapped key");
            }
        }

        if self.is_forward() && self.options.include_extra {
            out.insert(EXTRA_KEY.to_string(), Value::Object(extra));
        }
        Ok(out)
    }

    fn remap_field(
        &self,
        field: &Field,
        value: &Value,
        record: &Map<String, Value>,
        out: &mut Map<String, Value>,
    ) -> Result<(), RemapError> {
        let remapped = match field.kind {
            FieldKind::Plain => value.clone(),
            FieldKind::TypeCode => {
                self.remap_type(field, value, record, out);
                return Ok(());
            }
            FieldKind::Nested(id) => self.remap_leaf(value, id)?,
            FieldKind::Color => self.remap_color(value)?,
            FieldKind::Keyframes(id) => match Node::at_value(value) {
                Node::Keyframes(_) => self.remap_leaf(value, id)?,
                _ => value.clone(),
            },
            // filled in by the group walk
            FieldKind::Children => return Ok(()),
            FieldKind::Group(id) => self.remap_group(value, id)?,
            FieldKind::Layers => self.remap_layers(value)?,
            FieldKind::Assets => self.remap_assets(value)?,
        };
        out.insert(field.target.to_string(), remapped);
        Ok(())
    }

    fn remap_type(
        &self,
        field: &Field,
        value: &Value,
        record: &Map<String, Value>,
        out: &mut Map<String, Value>,
    ) {
        let direction = self.options.direction;
        let decoded = match self.registry.types().decode(value, direction) {
            Some(decoded) => decoded,
            None if direction == Direction::Forward => {
                warn!(code = %value, "type code has no readable variant");
                out.insert(field.target.to_string(), Value::Null);
                out.insert(UNDECODED_TYPE_KEY.to_string(), value.clone());
                return;
            }
            None => match (value, record.get(UNDECODED_TYPE_KEY)) {
                (Value::Null, Some(raw)) => raw.clone(),
                _ => {
                    if !value.is_null() {
                        warn!(name = %value, "unknown type name, keeping it as the code");
                    }
                    value.clone()
                }
            },
        };
        out.insert(field.target.to_string(), decoded);
    }

    fn remap_color(&self, value: &Value) -> Result<Value, RemapError> {
        match self.options.direction {
            Direction::Forward => {
                let mut remapped = self.remap_leaf(value, SchemaId::Property)?;
                for_each_color_slot(&mut remapped, encode_slot);
                Ok(remapped)
            }
            Direction::Reverse => {
                let mut decoded = value.clone();
                for_each_color_slot(&mut decoded, decode_slot);
                self.remap_leaf(&decoded, SchemaId::Property)
            }
        }
    }

    fn relocate_extra(
        &self,
        schema: &Schema,
        key: &str,
        value: &Value,
        extra: &mut Map<String, Value>,
    ) -> Result<(), RemapError> {
        if !self.options.include_extra {
            trace!(schema = %schema.id(), key, "dropping supplementary key");
            return Ok(());
        }
        let target = schema
            .extra_target(key)
            .ok_or_else(|| unresolved(schema, key))?;
        extra.insert(target.to_string(), value.clone());
        Ok(())
    }

    fn restore_extra(
        &self,
        schema: &Schema,
        value: &Value,
        out: &mut Map<String, Value>,
    ) -> Result<(), RemapError> {
        if !self.options.include_extra {
            return Ok(());
        }
        let Value::Object(extra) = value else {
            warn!(schema = %schema.id(), "ignoring `extra` that is not a record");
            return Ok(());
        };
        for (key, value) in extra {
            let target = schema
                .extra_target(key)
                .ok_or_else(|| unresolved(schema, key))?;
            out.insert(target.to_string(), value.clone());
        }
        Ok(())
    }
}

fn unresolved(schema: &Schema, key: &str) -> RemapError {
    RemapError::UnresolvedExtraKey {
        schema: schema.id(),
        key: key.to_string(),
    }
}

/// Applies `f` to every slot of a readable color property that holds channels:
/// the property's value, or each keyframe's start and end value. A bare value
/// that is not a property record counts as the slot itself.
fn for_each_color_slot(property: &mut Value, f: fn(&mut Value)) {
    let slot = match property {
        Value::Object(record) => match record.get_mut(VALUE) {
            Some(slot) => slot,
            None => return,
        },
        other => other,
    };
    match slot {
        Value::Array(items) if is_keyframe_sequence(items) => {
            for keyframe in items.iter_mut().filter_map(Value::as_object_mut) {
                for key in [START_VALUE, END_VALUE] {
                    if let Some(value) = keyframe.get_mut(key) {
                        f(value);
                    }
                }
            }
        }
        other => f(other),
    }
}

fn encode_slot(value: &mut Value) {
    let Some(channels) = color_channels(value) else {
        return;
    };
    if let Ok(hex) = color::encode_hex(&channels, true) {
        *value = Value::String(hex);
    }
}

fn decode_slot(value: &mut Value) {
    let Value::String(hex) = value else {
        return;
    };
    match color::decode_hex(hex) {
        Ok(channels) => *value = Value::from(channels.to_vec()),
        Err(err) => warn!(%err, color = hex.as_str(), "keeping malformed color string"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConvertOptions;
    use lottie_schema::SchemaRegistry;
    use serde_json::json;

    fn remapper(options: ConvertOptions) -> Remapper<'static> {
        Remapper::new(SchemaRegistry::global().unwrap(), options)
    }

    #[test]
    fn test_keyframes_are_remapped_per_record() {
        let property = json!({"a": 1, "k": [{"t": 0, "s": [0], "h": 1}, {"t": 12, "s": [100]}]});
        let out = remapper(ConvertOptions::forward(false))
            .remap_leaf(&property, SchemaId::Property)
            .unwrap();
        assert_eq!(
            out,
            json!({"value": [{"startTime": 0, "startValue": [0], "hold": 1}, {"startTime": 12, "startValue": [100]}]})
        );
    }

    #[test]
    fn test_static_vector_is_kept() {
        let property = json!({"a": 0, "k": [0, 0, 0]});
        let out = remapper(ConvertOptions::forward(false))
            .remap_leaf(&property, SchemaId::Property)
            .unwrap();
        assert_eq!(out, json!({"value": [0, 0, 0]}));
    }

    #[test]
    fn test_extra_bucket_collects_unmapped_keys() {
        let property = json!({"a": 0, "k": 100, "ix": 11});
        let out = remapper(ConvertOptions::forward(true))
            .remap_leaf(&property, SchemaId::Property)
            .unwrap();
        assert_eq!(
            out,
            json!({"value": 100, "extra": {"animated": 0, "propertyIndex": 11}})
        );
    }

    #[test]
    fn test_unresolved_extra_key() {
        let property = json!({"k": 100, "zz": true});
        let err = remapper(ConvertOptions::forward(true))
            .remap_leaf(&property, SchemaId::Property)
            .unwrap_err();
        assert_eq!(
            err,
            RemapError::UnresolvedExtraKey {
                schema: SchemaId::Property,
                key: "zz".into()
            }
        );

        let out = remapper(ConvertOptions::forward(false))
            .remap_leaf(&property, SchemaId::Property)
            .unwrap();
        assert_eq!(out, json!({"value": 100}));
    }

    #[test]
    fn test_color_keyframes_are_hex_coded() {
        let mut property = json!({"value": [
            {"startTime": 0, "startValue": [1, 0, 0, 1], "endValue": [0, 0, 1, 1]},
            {"startTime": 10}
        ]});
        for_each_color_slot(&mut property, encode_slot);
        assert_eq!(
            property,
            json!({"value": [
                {"startTime": 0, "startValue": "#ff0000", "endValue": "#0000ff"},
                {"startTime": 10}
            ]})
        );

        for_each_color_slot(&mut property, decode_slot);
        assert_eq!(property["value"][0]["startValue"], json!([1.0, 0.0, 0.0]));
    }

    #[test]
    fn test_malformed_hex_is_kept() {
        let mut property = json!({"value": "#zzz"});
        for_each_color_slot(&mut property, decode_slot);
        assert_eq!(property, json!({"value": "#zzz"}));
    }

    #[test]
    fn test_reverse_restores_undecoded_type() {
        let registry = SchemaRegistry::global().unwrap();
        let schema = registry.lookup(SchemaId::Layer, Direction::Reverse).unwrap();
        let readable = json!({"type": null, "typeCode": 99, "name": "odd"});
        let out = remapper(ConvertOptions::reverse(false))
            .remap_record(readable.as_object().unwrap(), schema)
            .unwrap();
        assert_eq!(Value::Object(out), json!({"ty": 99, "nm": "odd"}));
    }
}
