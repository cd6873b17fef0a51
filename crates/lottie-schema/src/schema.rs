use crate::SchemaError;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

/// Stable identifier of a registered schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SchemaId {
    Comp,
    Asset,
    Layer,
    Contents,
    Transform,
    Effect,
    Property,
    Keyframe,
}

impl SchemaId {
    pub const ALL: [SchemaId; 8] = [
        SchemaId::Comp,
        SchemaId::Asset,
        SchemaId::Layer,
        SchemaId::Contents,
        SchemaId::Transform,
        SchemaId::Effect,
        SchemaId::Property,
        SchemaId::Keyframe,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SchemaId::Comp => "COMP",
            SchemaId::Asset => "ASSET",
            SchemaId::Layer => "LAYER",
            SchemaId::Contents => "CONTENTS",
            SchemaId::Transform => "TRANSFORM",
            SchemaId::Effect => "EFFECT",
            SchemaId::Property => "PROPERTY",
            SchemaId::Keyframe => "KEYFRAME",
        }
    }
}

impl fmt::Display for SchemaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SchemaId {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SchemaId::ALL
            .into_iter()
            .find(|id| id.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| SchemaError::UnknownSchema(s.to_string()))
    }
}

/// Which way a document is being translated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Minified keys to readable names.
    #[default]
    Forward,
    /// Readable names back to minified keys.
    Reverse,
}

impl Direction {
    pub fn flip(self) -> Self {
        match self {
            Direction::Forward => Direction::Reverse,
            Direction::Reverse => Direction::Forward,
        }
    }
}

/// How the value stored under a field is translated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "schema", rename_all = "camelCase")]
pub enum FieldKind {
    /// Copied verbatim.
    Plain,
    /// Layer or shape type code, decoded through the type table.
    TypeCode,
    /// Nested record remapped with the given schema.
    Nested(SchemaId),
    /// Animatable property holding color channels.
    Color,
    /// Property value slot; keyframe sequences are remapped record by record.
    Keyframes(SchemaId),
    /// Nested content list of a group, owned by the group remapper.
    Children,
    /// Delegated to the group remapper with the given schema.
    Group(SchemaId),
    /// List of layers.
    Layers,
    /// List of assets.
    Assets,
}

impl FieldKind {
    /// Schema this field descends into, if any.
    pub fn schema(self) -> Option<SchemaId> {
        match self {
            FieldKind::Nested(id) | FieldKind::Keyframes(id) | FieldKind::Group(id) => Some(id),
            FieldKind::Color => Some(SchemaId::Property),
            FieldKind::Layers => Some(SchemaId::Layer),
            FieldKind::Assets => Some(SchemaId::Asset),
            FieldKind::Plain | FieldKind::TypeCode | FieldKind::Children => None,
        }
    }
}

/// One entry of a schema's main mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Field {
    pub source: &'static str,
    pub target: &'static str,
    pub kind: FieldKind,
}

impl Field {
    pub const fn new(source: &'static str, target: &'static str, kind: FieldKind) -> Self {
        Self {
            source,
            target,
            kind,
        }
    }

    pub const fn plain(source: &'static str, target: &'static str) -> Self {
        Self::new(source, target, FieldKind::Plain)
    }

    fn inverted(self) -> Self {
        Self {
            source: self.target,
            target: self.source,
            kind: self.kind,
        }
    }
}

/// Entry of a schema's extra mapping. Extra values are carried verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExtraField {
    pub source: &'static str,
    pub target: &'static str,
}

impl ExtraField {
    pub const fn new(source: &'static str, target: &'static str) -> Self {
        Self { source, target }
    }

    fn inverted(self) -> Self {
        Self {
            source: self.target,
            target: self.source,
        }
    }
}

/// Static description of a schema, as written in the blueprint tables.
#[derive(Debug, Clone, Copy)]
pub struct Blueprint {
    pub id: SchemaId,
    /// Schema governing the members of a group list described by this schema.
    pub child: Option<SchemaId>,
    pub fields: &'static [Field],
    pub extra: &'static [ExtraField],
}

/// A validated key mapping for one direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schema {
    id: SchemaId,
    direction: Direction,
    #[serde(skip_serializing_if = "Option::is_none")]
    child: Option<SchemaId>,
    fields: Vec<Field>,
    extra: Vec<ExtraField>,
}

impl Schema {
    /// Builds the forward schema described by `blueprint`, rejecting repeated keys.
    pub fn from_blueprint(blueprint: &Blueprint) -> Result<Self, SchemaError> {
        let mut seen = HashSet::new();
        let keys = blueprint
            .fields
            .iter()
            .map(|f| f.source)
            .chain(blueprint.extra.iter().map(|e| e.source));
        for key in keys {
            if !seen.insert(key) {
                return Err(SchemaError::DuplicateKey {
                    table: blueprint.id.to_string(),
                    key: key.to_string(),
                });
            }
        }

        Ok(Self {
            id: blueprint.id,
            direction: Direction::Forward,
            child: blueprint.child,
            fields: blueprint.fields.to_vec(),
            extra: blueprint.extra.to_vec(),
        })
    }

    pub fn id(&self) -> SchemaId {
        self.id
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn child(&self) -> Option<SchemaId> {
        self.child
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn extra(&self) -> &[ExtraField] {
        &self.extra
    }

    /// Main-mapping entry whose source key is `key`.
    pub fn field(&self, key: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.source == key)
    }

    /// Target name for a supplementary key.
    pub fn extra_target(&self, key: &str) -> Option<&'static str> {
        self.extra.iter().find(|e| e.source == key).map(|e| e.target)
    }

    /// The field holding this schema's nested group list, if it describes groups.
    pub fn children_field(&self) -> Option<&Field> {
        self.fields.iter().find(|f| f.kind == FieldKind::Children)
    }

    /// Swaps source and target of every entry.
    pub fn invert(&self) -> Result<Self, SchemaError> {
        let table = format!("{} ({:?})", self.id, self.direction.flip());
        check_unique_targets(&table, self.fields.iter().map(|f| (f.source, f.target)))?;
        check_unique_targets(
            &format!("{table} extra"),
            self.extra.iter().map(|e| (e.source, e.target)),
        )?;

        Ok(Self {
            id: self.id,
            direction: self.direction.flip(),
            child: self.child,
            fields: self.fields.iter().map(|f| f.inverted()).collect(),
            extra: self.extra.iter().map(|e| e.inverted()).collect(),
        })
    }
}

/// Rejects mappings where two sources share one target.
pub(crate) fn check_unique_targets<'a>(
    table: &str,
    pairs: impl Iterator<Item = (&'a str, &'a str)>,
) -> Result<(), SchemaError> {
    let mut targets: HashMap<&str, &str> = HashMap::new();
    for (source, target) in pairs {
        if let Some(first) = targets.insert(target, source) {
            return Err(SchemaError::AmbiguousInversion {
                table: table.to_string(),
                target: target.to_string(),
                first: first.to_string(),
                second: source.to_string(),
            });
        }
    }
    Ok(())
}
