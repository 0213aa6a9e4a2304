//! # Scriptgraph Names
//!
//! Human-readable names for script graph entities. A vanilla table shipped
//! with the game is read once and never changed; a custom table holds user
//! renames and travels with the host container through a side-channel table.
//!
//! ```
//! use std::rc::Rc;
//! use scriptgraph_core::ShortId;
//! use scriptgraph_names::{NameOverlay, NameTable, SidecarStore};
//!
//! let container = ShortId::from_name("AYZ\\SCRIPTS\\LIFT");
//! let entity = ShortId::from_bytes([0x01, 0x02, 0x03, 0x04]);
//!
//! let mut overlay = NameOverlay::new(NameTable::new(), Rc::new(SidecarStore::new()));
//! assert_eq!(overlay.get_name(container, entity), "01-02-03-04");
//!
//! overlay.set_name(container, entity, "lift_call_button");
//! assert_eq!(overlay.get_name(container, entity), "lift_call_button");
//! ```

mod config;
mod error;
mod overlay;
mod store;
mod table;

pub use config::OverlayConfig;
pub use error::{NamesError, NamesResult};
pub use overlay::NameOverlay;
pub use store::{AuxiliaryStore, SidecarStore, CUSTOM_NAMES_TAG};
pub use table::NameTable;
