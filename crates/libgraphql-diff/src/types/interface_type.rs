use crate::types::Field;
use crate::types::NamedTypeNode;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectOrInterfaceTypeTrait;
use indexmap::IndexMap;
use inherent::inherent;

/// Represents an
/// [interface type](https://spec.graphql.org/October2021/#sec-Interfaces)
/// node within a type graph.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InterfaceType(pub(super) ObjectOrInterfaceTypeData);
impl InterfaceType {
    pub fn new(name: impl Into<String>) -> Self {
        Self(ObjectOrInterfaceTypeData::new(name))
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.0.set_description(description);
        self
    }

    /// Adds a [`Field`] to this [`InterfaceType`], replacing any existing
    /// field with the same name.
    pub fn with_field(mut self, field: Field) -> Self {
        self.0.add_field(field);
        self
    }

    /// Interfaces may themselves implement other interfaces.
    pub fn with_interface(mut self, interface_name: impl Into<String>) -> Self {
        self.0.add_interface(interface_name);
        self
    }
}

#[inherent]
impl NamedTypeNode for InterfaceType {
    /// The description of this [`InterfaceType`] as defined in the schema
    /// (e.g. in a """-string immediately before the type definition).
    pub fn description(&self) -> Option<&str> {
        self.0.description()
    }

    /// The name of this [`InterfaceType`].
    pub fn name(&self) -> &str {
        self.0.name()
    }
}

#[inherent]
impl ObjectOrInterfaceTypeTrait for InterfaceType {
    pub fn field(&self, field_name: &str) -> Option<&Field> {
        self.0.field(field_name)
    }

    /// A map from FieldName -> [`Field`] for all fields defined on this
    /// [`InterfaceType`].
    ///
    /// Entries retain the order in which the fields were added.
    pub fn fields(&self) -> &IndexMap<String, Field> {
        self.0.fields()
    }

    pub fn implements_interface(&self, interface_name: &str) -> bool {
        self.0.implements_interface(interface_name)
    }

    pub fn interface_names(&self) -> Vec<&str> {
        self.0.interface_names()
    }
}
