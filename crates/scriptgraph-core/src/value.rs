//! Typed parameter values supported by the script graph format.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::identifiers::ShortId;

/// A three component vector
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const ZERO: Vector3 = Vector3 { x: 0.0, y: 0.0, z: 0.0 };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Position plus euler rotation (degrees)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vector3,
    pub rotation: Vector3,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        position: Vector3::ZERO,
        rotation: Vector3::ZERO,
    };
}

/// An index into a named engine enum
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EnumValue {
    pub enum_type: String,
    pub index: i32,
}

impl EnumValue {
    pub fn new(enum_type: impl Into<String>, index: i32) -> Self {
        Self {
            enum_type: enum_type.into(),
            index,
        }
    }
}

/// Ordered control points of a spline
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Spline {
    pub points: Vec<Transform>,
    #[serde(default)]
    pub looped: bool,
}

/// Kind of engine resource a reference points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceType {
    RenderableInstance,
    CollisionMapping,
    DynamicPhysicsSystem,
    AnimatedModel,
    NavMeshBlockingPrimitive,
}

/// A reference to a resource owned by the level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceReference {
    pub resource_id: ShortId,
    pub resource_type: ResourceType,
}

/// Tag of a [`TypedValue`] without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    Bool,
    Integer,
    Float,
    String,
    Vector,
    Transform,
    Enum,
    Spline,
    Resource,
    Link,
}

impl DataType {
    /// Canonical default payload for this type.
    pub fn default_value(self) -> TypedValue {
        match self {
            DataType::Bool => TypedValue::Bool(false),
            DataType::Integer => TypedValue::Integer(0),
            DataType::Float => TypedValue::Float(0.0),
            DataType::String => TypedValue::String(String::new()),
            DataType::Vector => TypedValue::Vector(Vector3::ZERO),
            DataType::Transform => TypedValue::Transform(Transform::IDENTITY),
            DataType::Enum => TypedValue::Enum(EnumValue::default()),
            DataType::Spline => TypedValue::Spline(Spline::default()),
            DataType::Resource => TypedValue::Resource(Vec::new()),
            DataType::Link => TypedValue::Link,
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataType::Bool => "bool",
            DataType::Integer => "integer",
            DataType::Float => "float",
            DataType::String => "string",
            DataType::Vector => "vector",
            DataType::Transform => "transform",
            DataType::Enum => "enum",
            DataType::Spline => "spline",
            DataType::Resource => "resource",
            DataType::Link => "link",
        };
        f.write_str(name)
    }
}

/// A parameter value. `Link` carries no payload and marks a flow pin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum TypedValue {
    Bool(bool),
    Integer(i32),
    Float(f32),
    String(String),
    Vector(Vector3),
    Transform(Transform),
    Enum(EnumValue),
    Spline(Spline),
    Resource(Vec<ResourceReference>),
    Link,
}

impl TypedValue {
    pub fn data_type(&self) -> DataType {
        match self {
            TypedValue::Bool(_) => DataType::Bool,
            TypedValue::Integer(_) => DataType::Integer,
            TypedValue::Float(_) => DataType::Float,
            TypedValue::String(_) => DataType::String,
            TypedValue::Vector(_) => DataType::Vector,
            TypedValue::Transform(_) => DataType::Transform,
            TypedValue::Enum(_) => DataType::Enum,
            TypedValue::Spline(_) => DataType::Spline,
            TypedValue::Resource(_) => DataType::Resource,
            TypedValue::Link => DataType::Link,
        }
    }

    pub fn string(s: impl Into<String>) -> Self {
        TypedValue::String(s.into())
    }

    pub fn enumeration(enum_type: impl Into<String>, index: i32) -> Self {
        TypedValue::Enum(EnumValue::new(enum_type, index))
    }

    pub fn is_link(&self) -> bool {
        matches!(self, TypedValue::Link)
    }
}
