//! Content lists: hoisting transforms and keying sibling groups by name.

use crate::node::Node;
use crate::{RemapError, Remapper, TRANSFORM_SLOT};
use lottie_schema::blueprint::{NAME_KEY, TYPE_KEY};
use lottie_schema::types::TRANSFORM_CODE;
use lottie_schema::{Field, Schema, SchemaId, TypeTable};
use serde_json::{Map, Value};
use tracing::warn;

impl Remapper<'_> {
    /// Remaps a group-bearing node with the schema `id`.
    ///
    /// In the forward direction a list of groups becomes an object keyed by
    /// each group's `nm`, and the transform group of every nested list is
    /// lifted into its parent's `Transform` slot. The reverse direction
    /// rebuilds the list and appends the transform back at its end.
    pub fn remap_group(&self, raw: &Value, id: SchemaId) -> Result<Value, RemapError> {
        let list = self.schema(id)?;
        let member = match list.child() {
            Some(child) => self.schema(child)?,
            None => list,
        };
        match Node::at_group(raw, list) {
            Node::GroupList(groups) => self
                .remap_group_list(groups.iter().enumerate(), list, member)
                .map(Value::Object),
            Node::GroupMap(groups) => self
                .restore_group_list(groups, list, member)
                .map(Value::Array),
            Node::Record(record) if self.is_forward() && member.children_field().is_some() => self
                .remap_group_record(record, list, member)
                .map(Value::Object),
            Node::Record(record) => self.remap_record(record, list).map(Value::Object),
            _ => Ok(raw.clone()),
        }
    }

    fn remap_group_list<'v>(
        &self,
        groups: impl Iterator<Item = (usize, &'v Value)>,
        list: &Schema,
        member: &Schema,
    ) -> Result<Map<String, Value>, RemapError> {
        let mut out = Map::new();
        for (index, group) in groups {
            let Value::Object(record) = group else {
                return Err(RemapError::malformed(list.id(), index, "group is not a record"));
            };
            let name = record
                .get(NAME_KEY)
                .and_then(Value::as_str)
                .ok_or_else(|| {
                    RemapError::malformed(list.id(), index, format!("missing `{NAME_KEY}`"))
                })?;

            let child = self.remap_group_record(record, list, member)?;
            if out.insert(name.to_string(), Value::Object(child)).is_some() {
                warn!(schema = %list.id(), name, "sibling groups share a name, keeping the last");
            }
        }
        Ok(out)
    }

    fn remap_group_record(
        &self,
        record: &Map<String, Value>,
        list: &Schema,
        member: &Schema,
    ) -> Result<Map<String, Value>, RemapError> {
        let mut child = self.remap_record(record, member)?;
        let Some(children) = member.children_field() else {
            return Ok(child);
        };

        match record.get(children.source) {
            Some(Value::Array(items)) => {
                let transform = find_transform(items, member.id())?;
                if let Some(at) = transform {
                    let hoisted = self.remap_group(&items[at], SchemaId::Transform)?;
                    child.insert(TRANSFORM_SLOT.to_string(), hoisted);
                }
                let rest = items
                    .iter()
                    .enumerate()
                    .filter(|(index, _)| Some(*index) != transform);
                let nested = self.remap_group_list(rest, list, member)?;
                child.insert(children.target.to_string(), Value::Object(nested));
            }
            Some(other) => {
                child.insert(children.target.to_string(), other.clone());
            }
            None => {}
        }
        Ok(child)
    }

    fn restore_group_list(
        &self,
        groups: &Map<String, Value>,
        list: &Schema,
        member: &Schema,
    ) -> Result<Vec<Value>, RemapError> {
        let mut out = Vec::with_capacity(groups.len());
        for (index, (name, group)) in groups.iter().enumerate() {
            let Value::Object(record) = group else {
                return Err(RemapError::malformed(list.id(), index, "group is not a record"));
            };
            let mut raw = self.remap_record(record, member)?;
            raw.entry(NAME_KEY)
                .or_insert_with(|| Value::from(name.as_str()));
            if let Some(children) = member.children_field() {
                self.restore_children(record, children, list, member, &mut raw)?;
            }
            out.push(Value::Object(raw));
        }
        Ok(out)
    }

    fn restore_children(
        &self,
        record: &Map<String, Value>,
        children: &Field,
        list: &Schema,
        member: &Schema,
        raw: &mut Map<String, Value>,
    ) -> Result<(), RemapError> {
        let mut items = match record.get(children.source) {
            Some(Value::Object(nested)) => self.restore_group_list(nested, list, member)?,
            Some(other) => {
                raw.insert(children.target.to_string(), other.clone());
                return Ok(());
            }
            None => Vec::new(),
        };

        if let Some(transform) = record.get(TRANSFORM_SLOT) {
            let mut restored = self.remap_group(transform, SchemaId::Transform)?;
            if let Value::Object(map) = &mut restored {
                map.entry(TYPE_KEY)
                    .or_insert_with(|| Value::from(TRANSFORM_CODE));
            }
            items.push(restored);
        }

        if !items.is_empty() || record.contains_key(children.source) {
            raw.insert(children.target.to_string(), Value::Array(items));
        }
        Ok(())
    }
}

/// Position of the transform group in a content list.
fn find_transform(items: &[Value], schema: SchemaId) -> Result<Option<usize>, RemapError> {
    let mut found = None;
    for (index, item) in items.iter().enumerate() {
        if !item.get(TYPE_KEY).is_some_and(TypeTable::is_transform) {
            continue;
        }
        if found.is_some() {
            return Err(RemapError::malformed(
                schema,
                index,
                "more than one transform in a content list",
            ));
        }
        found = Some(index);
    }
    Ok(found)
}
