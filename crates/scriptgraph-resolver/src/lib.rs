//! # Scriptgraph Resolver
//!
//! Materializes an entity's default parameters by walking the kind
//! hierarchy from the root down to the entity's own kind and appending each
//! kind's schema in turn. Entities that instance a composite also receive the
//! composite's declared variables.
//!
//! ```
//! use scriptgraph_catalog::{Catalog, Kind};
//! use scriptgraph_core::{Entity, ShortId};
//! use scriptgraph_resolver::DefaultResolver;
//!
//! let catalog = Catalog::bundled();
//! let resolver = DefaultResolver::new(&catalog);
//!
//! let mut door = Entity::new(ShortId::from_name("door_01"), Kind::Door.into());
//! resolver.apply_defaults(&mut door, true).unwrap();
//! assert!(door.parameter("started_opening").is_some());
//! assert!(door.parameter("delete_me").is_some());
//! ```

mod resolver;

pub use resolver::{default_value_for, DefaultResolver};
pub use scriptgraph_catalog::CatalogError;
