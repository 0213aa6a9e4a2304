//! # Scriptgraph
//!
//! Default-parameter resolution and display names for script graph entities.
//!
//! The member crates do the work; this crate wires them together behind a
//! [`Session`] and a single [`ScriptgraphConfig`].
//!
//! ```
//! use std::rc::Rc;
//! use scriptgraph::{Kind, ScriptgraphConfig, Session, SidecarStore};
//! use scriptgraph::core::{Entity, ShortId};
//!
//! let session = Session::new(&ScriptgraphConfig::default(), Rc::new(SidecarStore::new())).unwrap();
//! let mut door = Entity::new(ShortId::from_name("front_door"), Kind::Door.into());
//! session.apply_defaults(&mut door, true).unwrap();
//! assert!(door.parameter("started_opening").is_some());
//! ```

#![forbid(unsafe_code)]

mod config;
mod session;

pub use config::ScriptgraphConfig;
pub use session::Session;

pub use scriptgraph_catalog::{Catalog, CatalogError, Kind, ParameterSpec};
pub use scriptgraph_monitoring::{init_logging, LogExt, MonitoringConfig};
pub use scriptgraph_names::{
    AuxiliaryStore, NameOverlay, NameTable, NamesError, OverlayConfig, SidecarStore, CUSTOM_NAMES_TAG,
};
pub use scriptgraph_resolver::DefaultResolver;

/// Data model shared by every crate
pub use scriptgraph_core as core;
