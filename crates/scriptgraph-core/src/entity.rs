use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::identifiers::ShortId;
use crate::parameter::{Parameter, ParameterRole};
use crate::value::TypedValue;

/// What an entity instantiates.
///
/// `Function` holds either the id of a built-in kind or the id of a
/// composite; which one is decided by the kind catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "selector", content = "id", rename_all = "snake_case")]
pub enum KindSelector {
    Function(ShortId),
    Proxy,
}

/// A node in a script graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: ShortId,
    pub kind: KindSelector,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
}

impl Entity {
    pub fn new(id: ShortId, kind: KindSelector) -> Self {
        Self {
            id,
            kind,
            parameters: Vec::new(),
        }
    }

    pub fn function(id: ShortId, function_id: ShortId) -> Self {
        Self::new(id, KindSelector::Function(function_id))
    }

    pub fn proxy(id: ShortId) -> Self {
        Self::new(id, KindSelector::Proxy)
    }

    /// Append a parameter. Existing parameters with the same name are kept.
    pub fn add_parameter(
        &mut self,
        name: impl Into<String>,
        value: TypedValue,
        role: ParameterRole,
    ) -> &mut Parameter {
        self.parameters.push(Parameter::new(name, value, role));
        let last = self.parameters.len() - 1;
        &mut self.parameters[last]
    }

    /// First parameter with the given name.
    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    pub fn parameters_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Parameter> + 'a {
        self.parameters.iter().filter(move |p| p.name == name)
    }

    pub fn parameter_names(&self) -> Vec<&str> {
        self.parameters.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn to_json(&self) -> Result<serde_json::Value, CoreError> {
        Ok(serde_json::to_value(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_add_parameter_appends_duplicates() {
        let mut entity = Entity::proxy(ShortId::from_bytes([9, 9, 9, 9]));
        entity.add_parameter("name", TypedValue::string("a"), ParameterRole::Parameter);
        entity.add_parameter("name", TypedValue::string("b"), ParameterRole::Parameter);

        assert_eq!(entity.parameters.len(), 2);
        assert_eq!(entity.parameters_named("name").count(), 2);
        assert_eq!(entity.parameter("name").unwrap().value, TypedValue::string("a"));
    }

    #[test]
    fn test_to_json() {
        let mut entity = Entity::function(ShortId::from_bytes([1, 0, 0, 0]), ShortId::from_bytes([2, 0, 0, 0]));
        entity.add_parameter("delete_me", TypedValue::Link, ParameterRole::Method);

        let json = entity.to_json().unwrap();
        assert_eq!(json["id"], "01-00-00-00");
        assert_eq!(json["kind"]["selector"], "function");
        assert_eq!(json["kind"]["id"], "02-00-00-00");
        assert_eq!(json["parameters"][0]["role"], "method");
    }
}
