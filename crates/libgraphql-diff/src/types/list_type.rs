use crate::types::GraphQLTypeNode;

/// A [list](https://spec.graphql.org/October2021/#sec-List) wrapper around
/// another [`GraphQLTypeNode`].
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ListType {
    pub(super) of_type: Box<GraphQLTypeNode>,
}
impl ListType {
    pub fn new(of_type: impl Into<GraphQLTypeNode>) -> Self {
        Self {
            of_type: Box::new(of_type.into()),
        }
    }

    /// The [`GraphQLTypeNode`] of each element in this list.
    pub fn of_type(&self) -> &GraphQLTypeNode {
        &self.of_type
    }
}
