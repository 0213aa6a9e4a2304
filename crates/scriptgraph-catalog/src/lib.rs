//! # Scriptgraph Catalog
//!
//! The closed set of entity kinds, the single-inheritance parent table that
//! links each kind to the root, and the default parameters each kind declares.
//!
//! ```
//! use scriptgraph_catalog::{Catalog, Kind};
//!
//! let catalog = Catalog::bundled();
//! catalog.verify().expect("bundled catalog is total");
//!
//! let chain = catalog.ancestry(Kind::Door).unwrap();
//! assert_eq!(chain.first(), Some(&Kind::Door));
//! assert_eq!(chain.last(), Some(&Kind::ROOT));
//! ```

mod catalog;
mod error;
mod kind;
mod parents;
mod schema;

pub use catalog::Catalog;
pub use error::CatalogError;
pub use kind::Kind;
pub use schema::{bundled_schema, ParameterSpec};
