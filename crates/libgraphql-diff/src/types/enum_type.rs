use crate::types::EnumValue;
use crate::types::NamedTypeNode;
use indexmap::IndexMap;
use inherent::inherent;

/// Represents an
/// [enum type](https://spec.graphql.org/October2021/#sec-Enums) node within
/// a type graph.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumType {
    pub(super) description: Option<String>,
    pub(super) name: String,
    pub(super) values: IndexMap<String, EnumValue>,
}
impl EnumType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            description: None,
            name: name.into(),
            values: IndexMap::new(),
        }
    }

    /// Look up one of this [`EnumType`]'s values by name.
    pub fn value(&self, value_name: &str) -> Option<&EnumValue> {
        self.values.get(value_name)
    }

    /// The names of every value defined on this [`EnumType`], in the order
    /// they were added.
    pub fn value_names(&self) -> Vec<&str> {
        self.values.keys()
            .map(|value_name| value_name.as_str())
            .collect()
    }

    /// A map from ValueName -> [`EnumValue`] for all values defined on this
    /// [`EnumType`].
    pub fn values(&self) -> &IndexMap<String, EnumValue> {
        &self.values
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds an [`EnumValue`], replacing any existing value with the same
    /// name.
    pub fn with_value(mut self, value: EnumValue) -> Self {
        self.values.insert(value.name().to_string(), value);
        self
    }
}

#[inherent]
impl NamedTypeNode for EnumType {
    /// The description of this [`EnumType`] as defined in the schema
    /// (e.g. in a """-string immediately before the type definition).
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
