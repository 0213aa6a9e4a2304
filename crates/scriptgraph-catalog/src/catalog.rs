use std::collections::HashMap;

use scriptgraph_core::ShortId;
use tracing::debug;

use crate::error::CatalogError;
use crate::kind::Kind;
use crate::parents::BUNDLED_PARENTS;
use crate::schema::{bundled_schema, ParameterSpec};

/// Parent and schema lookup tables, indexed by [`Kind::ordinal`].
#[derive(Debug, Clone)]
pub struct Catalog {
    parents: Vec<Option<Kind>>,
    schemas: Vec<Vec<ParameterSpec>>,
    ids: HashMap<ShortId, Kind>,
}

impl Catalog {
    /// The catalog shipped with the engine data.
    pub fn bundled() -> Self {
        let catalog = Self::from_tables(
            BUNDLED_PARENTS.iter().copied(),
            Kind::ALL.iter().map(|k| (*k, bundled_schema(*k))),
        );
        debug!(kinds = Kind::COUNT, "Loaded bundled kind catalog");
        catalog
    }

    /// Build a catalog from caller-supplied tables. Kinds missing from
    /// `parents` are unmapped; kinds missing from `schemas` declare nothing.
    pub fn from_tables(
        parents: impl IntoIterator<Item = (Kind, Kind)>,
        schemas: impl IntoIterator<Item = (Kind, Vec<ParameterSpec>)>,
    ) -> Self {
        let mut parent_table = vec![None; Kind::COUNT];
        for (kind, parent) in parents {
            parent_table[kind.ordinal()] = Some(parent);
        }

        let mut schema_table = vec![Vec::new(); Kind::COUNT];
        for (kind, specs) in schemas {
            schema_table[kind.ordinal()] = specs;
        }

        let ids = Kind::ALL.iter().map(|k| (k.short_id(), *k)).collect();

        Self {
            parents: parent_table,
            schemas: schema_table,
            ids,
        }
    }

    pub fn parent(&self, kind: Kind) -> Result<Kind, CatalogError> {
        self.parents[kind.ordinal()].ok_or(CatalogError::UnmappedKind(kind))
    }

    pub fn schema(&self, kind: Kind) -> &[ParameterSpec] {
        &self.schemas[kind.ordinal()]
    }

    /// The built-in kind whose id is `id`, if any.
    pub fn kind_for_id(&self, id: ShortId) -> Option<Kind> {
        self.ids.get(&id).copied()
    }

    /// Chain from `kind` up to the root, `kind` first and the root once, last.
    pub fn ancestry(&self, kind: Kind) -> Result<Vec<Kind>, CatalogError> {
        let mut chain = vec![kind];
        let mut current = kind;
        while current != Kind::ROOT {
            if chain.len() > Kind::COUNT {
                return Err(CatalogError::CycleDetected {
                    start: kind,
                    steps: Kind::COUNT,
                });
            }
            current = self.parent(current)?;
            chain.push(current);
        }
        Ok(chain)
    }

    /// True if `ancestor` appears in the ancestry of `kind` (including itself).
    pub fn is_a(&self, kind: Kind, ancestor: Kind) -> Result<bool, CatalogError> {
        Ok(self.ancestry(kind)?.contains(&ancestor))
    }

    /// Startup self-check: every kind is mapped and reaches the root, and the
    /// root is its own parent.
    pub fn verify(&self) -> Result<(), CatalogError> {
        if self.parent(Kind::ROOT)? != Kind::ROOT {
            return Err(CatalogError::CycleDetected {
                start: Kind::ROOT,
                steps: 1,
            });
        }
        for kind in Kind::ALL {
            self.ancestry(*kind)?;
        }
        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::bundled()
    }
}
