use scriptgraph_catalog::{Catalog, CatalogError, Kind};
use scriptgraph_core::{CompositeRegistry, DataType, Entity, KindSelector, ParameterRole, TypedValue};
use tracing::{debug, warn};

/// Default value given to a composite variable of type `data_type`.
pub fn default_value_for(data_type: DataType) -> TypedValue {
    data_type.default_value()
}

/// Applies kind schemas to entities.
///
/// Borrowing the catalog and, optionally, the composite registry of the host
/// container the entities belong to.
#[derive(Clone, Copy)]
pub struct DefaultResolver<'a> {
    catalog: &'a Catalog,
    registry: Option<&'a dyn CompositeRegistry>,
}

impl<'a> DefaultResolver<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            registry: None,
        }
    }

    /// Registry consulted for entities that instance a composite.
    pub fn with_registry(mut self, registry: &'a dyn CompositeRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Kind whose schema chain applies to `entity`.
    pub fn resolve_kind_for(&self, entity: &Entity) -> Kind {
        match entity.kind {
            KindSelector::Function(id) => self.catalog.kind_for_id(id).unwrap_or(Kind::COMPOSITE_INTERFACE),
            KindSelector::Proxy => Kind::PROXY_INTERFACE,
        }
    }

    /// Kinds whose schemas apply to `kind`, root first.
    pub fn find_chain(&self, kind: Kind, include_inherited: bool) -> Result<Vec<Kind>, CatalogError> {
        let mut chain = if include_inherited {
            self.catalog.ancestry(kind)?
        } else {
            vec![kind]
        };
        chain.reverse();
        Ok(chain)
    }

    /// Append the default parameters of the entity's kind, and with
    /// `include_inherited` those of every ancestor, root first.
    ///
    /// Parameters are appended without checking for existing names: calling
    /// this twice on one entity duplicates every parameter.
    pub fn apply_defaults(&self, entity: &mut Entity, include_inherited: bool) -> Result<(), CatalogError> {
        let kind = self.resolve_kind_for(entity);
        let chain = self.find_chain(kind, include_inherited)?;
        let before = entity.parameters.len();

        for link in &chain {
            for spec in self.catalog.schema(*link) {
                entity.add_parameter(spec.name.clone(), spec.default_value.clone(), spec.role);
            }
        }

        if let KindSelector::Function(id) = entity.kind {
            if kind == Kind::COMPOSITE_INTERFACE && self.catalog.kind_for_id(id).is_none() {
                self.apply_composite_variables(entity);
            }
        }

        debug!(
            entity_id = %entity.id,
            kind = %kind,
            chain_len = chain.len(),
            appended = entity.parameters.len() - before,
            "Applied default parameters"
        );
        Ok(())
    }

    /// Apply defaults to each entity in turn, stopping at the first error.
    /// Returns the number of entities processed.
    pub fn apply_defaults_to_all<'e>(
        &self,
        entities: impl IntoIterator<Item = &'e mut Entity>,
        include_inherited: bool,
    ) -> Result<usize, CatalogError> {
        let mut count = 0;
        for entity in entities {
            self.apply_defaults(entity, include_inherited)?;
            count += 1;
        }
        Ok(count)
    }

    fn apply_composite_variables(&self, entity: &mut Entity) {
        let KindSelector::Function(composite_id) = entity.kind else {
            return;
        };

        let Some(registry) = self.registry else {
            warn!(entity_id = %entity.id, %composite_id, "No composite registry linked; skipping composite variables");
            return;
        };

        let Some(composite) = registry.find_composite(composite_id) else {
            warn!(entity_id = %entity.id, %composite_id, "Composite not found; skipping composite variables");
            return;
        };

        for variable in &composite.declared_variables {
            entity.add_parameter(
                variable.name.clone(),
                default_value_for(variable.data_type),
                ParameterRole::Parameter,
            );
        }
    }
}

impl std::fmt::Debug for DefaultResolver<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefaultResolver")
            .field("has_registry", &self.registry.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use scriptgraph_catalog::ParameterSpec;
    use scriptgraph_core::{Composite, ShortId};

    fn entity_of(kind: Kind) -> Entity {
        Entity::new(ShortId::from_bytes([0, 0, 0, 1]), kind.into())
    }

    #[test]
    fn test_resolve_kind_for_direct_kind() {
        let catalog = Catalog::bundled();
        let resolver = DefaultResolver::new(&catalog);
        assert_eq!(resolver.resolve_kind_for(&entity_of(Kind::Door)), Kind::Door);
    }

    #[test]
    fn test_resolve_kind_for_composite_and_proxy() {
        let catalog = Catalog::bundled();
        let resolver = DefaultResolver::new(&catalog);

        let composite = Entity::function(ShortId::from_bytes([0, 0, 0, 2]), ShortId::from_name("AYZ\\LIFT"));
        assert_eq!(resolver.resolve_kind_for(&composite), Kind::CompositeInterface);

        let proxy = Entity::proxy(ShortId::from_bytes([0, 0, 0, 3]));
        assert_eq!(resolver.resolve_kind_for(&proxy), Kind::ProxyInterface);
    }

    #[test]
    fn test_find_chain_is_root_first() {
        let catalog = Catalog::bundled();
        let resolver = DefaultResolver::new(&catalog);

        assert_eq!(
            resolver.find_chain(Kind::VariableBool, true).unwrap(),
            vec![
                Kind::EntityMethodInterface,
                Kind::EntityInterface,
                Kind::ScriptInterface,
                Kind::ScriptVariable,
                Kind::VariableBool,
            ]
        );
        assert_eq!(resolver.find_chain(Kind::VariableBool, false).unwrap(), vec![Kind::VariableBool]);
    }

    #[test]
    fn test_without_inheritance_only_own_schema() {
        let catalog = Catalog::bundled();
        let resolver = DefaultResolver::new(&catalog);
        let mut entity = entity_of(Kind::ScriptInterface);

        resolver.apply_defaults(&mut entity, false).unwrap();
        assert_eq!(entity.parameter_names(), vec!["delete_me", "name"]);
    }

    #[test]
    fn test_unmapped_kind_propagates() {
        let catalog = Catalog::from_tables(
            [(Kind::ROOT, Kind::ROOT)],
            [(Kind::Zone, vec![ParameterSpec::new("x", TypedValue::Bool(true), ParameterRole::Parameter)])],
        );
        let resolver = DefaultResolver::new(&catalog);

        let mut entity = entity_of(Kind::Zone);
        assert_eq!(
            resolver.apply_defaults(&mut entity, true),
            Err(CatalogError::UnmappedKind(Kind::Zone))
        );
        assert!(entity.parameters.is_empty());

        // Without inheritance no parent lookup happens.
        resolver.apply_defaults(&mut entity, false).unwrap();
        assert_eq!(entity.parameter_names(), vec!["x"]);
    }

    #[test]
    fn test_composite_without_registry_is_skipped() {
        let catalog = Catalog::bundled();
        let resolver = DefaultResolver::new(&catalog);
        let composite = Composite::new("AYZ\\LIFT").with_variable("floor", DataType::Integer);
        let mut entity = Entity::function(ShortId::from_bytes([0, 0, 0, 4]), composite.id);

        resolver.apply_defaults(&mut entity, false).unwrap();
        assert!(entity.parameter("floor").is_none());
        assert_eq!(entity.parameter_names(), vec!["is_template", "local_offset"]);
    }

    #[test]
    fn test_default_value_for() {
        assert_eq!(default_value_for(DataType::Float), TypedValue::Float(0.0));
        assert_eq!(default_value_for(DataType::Bool), TypedValue::Bool(false));
        assert_eq!(default_value_for(DataType::Link), TypedValue::Link);
    }
}
