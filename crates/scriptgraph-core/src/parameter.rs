use serde::{Deserialize, Serialize};

use crate::identifiers::ShortId;
use crate::value::TypedValue;

/// How a parameter participates in the graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterRole {
    /// Plain configured value
    Parameter,
    /// Value read from a connected pin
    Input,
    /// Value written to a connected pin
    Output,
    State,
    /// Bookkeeping only, not exposed as a pin
    Internal,
    /// Fired event pin
    Target,
    /// Callable entry pin
    Method,
    Finished,
    Relay,
}

impl ParameterRole {
    /// True for roles that act as flow-link endpoints rather than values.
    pub fn is_link_endpoint(self) -> bool {
        matches!(
            self,
            ParameterRole::Target | ParameterRole::Method | ParameterRole::Finished | ParameterRole::Relay
        )
    }
}

/// A named value on an entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub value: TypedValue,
    pub role: ParameterRole,
}

impl Parameter {
    pub fn new(name: impl Into<String>, value: TypedValue, role: ParameterRole) -> Self {
        Self {
            name: name.into(),
            value,
            role,
        }
    }

    /// Id of the parameter name as stored in binary graphs.
    pub fn name_id(&self) -> ShortId {
        ShortId::from_name(&self.name)
    }
}
