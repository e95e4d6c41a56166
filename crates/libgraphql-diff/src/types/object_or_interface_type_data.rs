use crate::types::Field;
use crate::types::NamedTypeNode;
use crate::types::ObjectOrInterfaceTypeTrait;
use indexmap::IndexMap;
use indexmap::IndexSet;
use inherent::inherent;

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub(super) struct ObjectOrInterfaceTypeData {
    pub(super) description: Option<String>,
    pub(super) fields: IndexMap<String, Field>,
    pub(super) interfaces: IndexSet<String>,
    pub(super) name: String,
}
impl ObjectOrInterfaceTypeData {
    pub(super) fn new(name: impl Into<String>) -> Self {
        Self {
            description: None,
            fields: IndexMap::new(),
            interfaces: IndexSet::new(),
            name: name.into(),
        }
    }

    pub(super) fn add_field(&mut self, field: Field) {
        self.fields.insert(field.name().to_string(), field);
    }

    pub(super) fn add_interface(&mut self, interface_name: impl Into<String>) {
        self.interfaces.insert(interface_name.into());
    }

    pub(super) fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }
}

#[inherent]
impl NamedTypeNode for ObjectOrInterfaceTypeData {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

#[inherent]
impl ObjectOrInterfaceTypeTrait for ObjectOrInterfaceTypeData {
    pub fn field(&self, field_name: &str) -> Option<&Field> {
        self.fields.get(field_name)
    }

    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.fields
    }

    pub fn implements_interface(&self, interface_name: &str) -> bool {
        self.interfaces.contains(interface_name)
    }

    pub fn interface_names(&self) -> Vec<&str> {
        self.interfaces
            .iter()
            .map(|iface_name| iface_name.as_str())
            .collect()
    }
}
