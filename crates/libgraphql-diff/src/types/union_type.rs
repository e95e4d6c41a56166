use crate::types::NamedTypeNode;
use indexmap::IndexSet;
use inherent::inherent;

/// Represents a
/// [union type](https://spec.graphql.org/October2021/#sec-Unions) node
/// within a type graph.
///
/// Members are stored by name so that a union may reference object types
/// which themselves (directly or indirectly) reference the union.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UnionType {
    pub(super) description: Option<String>,
    pub(super) members: IndexSet<String>,
    pub(super) name: String,
}
impl UnionType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            description: None,
            members: IndexSet::new(),
            name: name.into(),
        }
    }

    pub fn has_member(&self, type_name: &str) -> bool {
        self.members.contains(type_name)
    }

    /// An ordered list of the names of each type defined as a member of this
    /// union.
    ///
    /// The order matches the order in which members were added. Adding the
    /// same member twice has no effect.
    pub fn member_type_names(&self) -> Vec<&str> {
        self.members.iter()
            .map(|type_name| type_name.as_str())
            .collect()
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_member(mut self, type_name: impl Into<String>) -> Self {
        self.members.insert(type_name.into());
        self
    }
}

#[inherent]
impl NamedTypeNode for UnionType {
    /// The description of this [`UnionType`] as defined in the schema
    /// (e.g. in a """-string immediately before the type definition).
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The name of this [`UnionType`].
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
