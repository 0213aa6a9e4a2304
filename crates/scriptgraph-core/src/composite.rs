use serde::{Deserialize, Serialize};

use crate::identifiers::ShortId;
use crate::value::DataType;

/// A variable a composite exposes to entities that instance it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositeVariable {
    pub name: String,
    pub data_type: DataType,
}

/// A user-authored sub-graph referenced by id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Composite {
    pub id: ShortId,
    pub name: String,
    #[serde(default)]
    pub declared_variables: Vec<CompositeVariable>,
}

impl Composite {
    /// A composite whose id is derived from its name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: ShortId::from_name(&name),
            name,
            declared_variables: Vec::new(),
        }
    }

    pub fn with_variable(mut self, name: impl Into<String>, data_type: DataType) -> Self {
        self.declared_variables.push(CompositeVariable {
            name: name.into(),
            data_type,
        });
        self
    }
}

/// Lookup of composites by id
pub trait CompositeRegistry {
    fn find_composite(&self, id: ShortId) -> Option<&Composite>;
}

impl CompositeRegistry for [Composite] {
    fn find_composite(&self, id: ShortId) -> Option<&Composite> {
        self.iter().find(|c| c.id == id)
    }
}

impl CompositeRegistry for Vec<Composite> {
    fn find_composite(&self, id: ShortId) -> Option<&Composite> {
        self.as_slice().find_composite(id)
    }
}
