//! # Schema Registry
//!
//! Immutable table of every schema in both directions, plus the type table.
//! Built and validated once; remapping only ever reads from it.

use crate::blueprint::BLUEPRINTS;
use crate::schema::{Blueprint, Schema};
use crate::types::{TypeEntry, TypeTable, TYPE_CODES};
use crate::{Direction, SchemaError, SchemaId};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Global registry built from the default blueprints - lazily initialized.
static REGISTRY: OnceLock<Result<SchemaRegistry, SchemaError>> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    forward: HashMap<SchemaId, Schema>,
    reverse: HashMap<SchemaId, Schema>,
    types: TypeTable,
}

impl SchemaRegistry {
    /// Get the global registry instance.
    pub fn global() -> Result<&'static Self, SchemaError> {
        REGISTRY
            .get_or_init(|| Self::new(BLUEPRINTS, TYPE_CODES))
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Builds a registry, checking references and precomputing every inverse.
    pub fn new(blueprints: &[Blueprint], types: &[TypeEntry]) -> Result<Self, SchemaError> {
        let mut forward = HashMap::new();
        for blueprint in blueprints {
            let schema = Schema::from_blueprint(blueprint)?;
            if forward.insert(blueprint.id, schema).is_some() {
                return Err(SchemaError::DuplicateSchema(blueprint.id));
            }
        }

        for schema in forward.values() {
            let references = schema
                .fields()
                .iter()
                .filter_map(|f| f.kind.schema())
                .chain(schema.child());
            for target in references {
                if !forward.contains_key(&target) {
                    return Err(SchemaError::DanglingReference {
                        schema: schema.id(),
                        target,
                    });
                }
            }
        }

        let reverse = forward
            .iter()
            .map(|(id, schema)| Ok((*id, schema.invert()?)))
            .collect::<Result<HashMap<_, _>, SchemaError>>()?;

        Ok(Self {
            forward,
            reverse,
            types: TypeTable::new(types)?,
        })
    }

    pub fn lookup(&self, id: SchemaId, direction: Direction) -> Result<&Schema, SchemaError> {
        let table = match direction {
            Direction::Forward => &self.forward,
            Direction::Reverse => &self.reverse,
        };
        table
            .get(&id)
            .ok_or_else(|| SchemaError::UnknownSchema(id.to_string()))
    }

    pub fn lookup_named(&self, name: &str, direction: Direction) -> Result<&Schema, SchemaError> {
        self.lookup(name.parse()?, direction)
    }

    pub fn types(&self) -> &TypeTable {
        &self.types
    }

    /// Registered schemas for one direction, in declaration order of [`SchemaId::ALL`].
    pub fn schemas(&self, direction: Direction) -> impl Iterator<Item = &Schema> {
        SchemaId::ALL
            .into_iter()
            .filter_map(move |id| self.lookup(id, direction).ok())
    }
}
