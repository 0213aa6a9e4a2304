//!
//! Scriptgraph Core - shared data model for script graph tooling
//!
//! Identifiers, typed parameter values, entities, composites and the
//! contract of the host container that owns them. Every other crate in the
//! workspace builds on these types.

#![forbid(unsafe_code)]

/// Short identifiers
pub mod identifiers;

/// Typed parameter values
pub mod value;

/// Parameters and their roles
pub mod parameter;

/// Script graph entities
pub mod entity;

/// Composite sub-graphs
pub mod composite;

/// Host container contract
pub mod host;

/// Error types
pub mod error;

pub use composite::{Composite, CompositeRegistry, CompositeVariable};
pub use entity::{Entity, KindSelector};
pub use error::CoreError;
pub use host::{HostContainer, HostEvent, HostEvents, SubscriptionId};
pub use identifiers::ShortId;
pub use parameter::{Parameter, ParameterRole};
pub use value::{DataType, EnumValue, ResourceReference, ResourceType, Spline, Transform, TypedValue, Vector3};
