use crate::types::Field;
use crate::types::NamedTypeNode;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectOrInterfaceTypeTrait;
use indexmap::IndexMap;
use inherent::inherent;

/// Represents an
/// [object type](https://spec.graphql.org/October2021/#sec-Objects) node
/// within a type graph.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectType(pub(super) ObjectOrInterfaceTypeData);
impl ObjectType {
    pub fn new(name: impl Into<String>) -> Self {
        Self(ObjectOrInterfaceTypeData::new(name))
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.0.set_description(description);
        self
    }

    /// Adds a [`Field`] to this [`ObjectType`], replacing any existing field
    /// with the same name.
    pub fn with_field(mut self, field: Field) -> Self {
        self.0.add_field(field);
        self
    }

    pub fn with_interface(mut self, interface_name: impl Into<String>) -> Self {
        self.0.add_interface(interface_name);
        self
    }
}

#[inherent]
impl NamedTypeNode for ObjectType {
    /// The description of this [`ObjectType`] as defined in the schema
    /// (e.g. in a """-string immediately before the type definition).
    pub fn description(&self) -> Option<&str> {
        self.0.description()
    }

    /// The name of this [`ObjectType`].
    pub fn name(&self) -> &str {
        self.0.name()
    }
}

#[inherent]
impl ObjectOrInterfaceTypeTrait for ObjectType {
    /// Look up a [`Field`] on this [`ObjectType`] by name.
    pub fn field(&self, field_name: &str) -> Option<&Field> {
        self.0.field(field_name)
    }

    /// A map from FieldName -> [`Field`] for all fields defined on this
    /// [`ObjectType`].
    ///
    /// Entries retain the order in which the fields were added.
    pub fn fields(&self) -> &IndexMap<String, Field> {
        self.0.fields()
    }

    pub fn implements_interface(&self, interface_name: &str) -> bool {
        self.0.implements_interface(interface_name)
    }

    /// The names of all interfaces implemented by this [`ObjectType`], in the
    /// order they were added.
    pub fn interface_names(&self) -> Vec<&str> {
        self.0.interface_names()
    }
}
