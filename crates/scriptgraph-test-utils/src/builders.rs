//! Builders for entities and name tables.

use scriptgraph_catalog::Kind;
use scriptgraph_core::{Entity, ShortId};
use scriptgraph_names::NameTable;

/// Deterministic id for a test entity label.
pub fn entity_id(label: &str) -> ShortId {
    ShortId::from_name(label)
}

/// Parameterless entity whose selector names `kind` directly.
pub fn entity_of(kind: Kind) -> Entity {
    Entity::new(entity_id(kind.name()), kind.into())
}

pub fn proxy_entity(label: &str) -> Entity {
    Entity::proxy(entity_id(label))
}

/// Table from `(container, entity, name)` triples.
pub fn name_table(entries: &[(ShortId, ShortId, &str)]) -> NameTable {
    let mut table = NameTable::new();
    for (container_id, entity_id, name) in entries {
        table.insert(*container_id, *entity_id, *name);
    }
    table
}
