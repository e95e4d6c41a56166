use crate::types::GraphQLTypeNode;

/// Similar to [`GraphQLTypeNode`] except without the corresponding type
/// metadata. Useful when representing a group or category of
/// [`GraphQLTypeNode`]s.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum GraphQLTypeNodeKind {
    Enum,
    Interface,
    List,
    NonNull,
    Object,
    Scalar,
    Union,
}
impl GraphQLTypeNodeKind {
    pub fn name(&self) -> &str {
        match self {
            Self::Enum => "Enum",
            Self::Interface => "Interface",
            Self::List => "List",
            Self::NonNull => "NonNull",
            Self::Object => "Object",
            Self::Scalar => "Scalar",
            Self::Union => "Union",
        }
    }

    /// Indicates if this kind wraps another [`GraphQLTypeNode`] rather than
    /// naming a type of its own.
    pub fn is_wrapper(&self) -> bool {
        matches!(self, Self::List | Self::NonNull)
    }
}
impl std::convert::From<&GraphQLTypeNode> for GraphQLTypeNodeKind {
    fn from(value: &GraphQLTypeNode) -> Self {
        match value {
            GraphQLTypeNode::Enum(_) => GraphQLTypeNodeKind::Enum,
            GraphQLTypeNode::Interface(_) => GraphQLTypeNodeKind::Interface,
            GraphQLTypeNode::List(_) => GraphQLTypeNodeKind::List,
            GraphQLTypeNode::NonNull(_) => GraphQLTypeNodeKind::NonNull,
            GraphQLTypeNode::Object(_) => GraphQLTypeNodeKind::Object,
            GraphQLTypeNode::Scalar(_) => GraphQLTypeNodeKind::Scalar,
            GraphQLTypeNode::Union(_) => GraphQLTypeNodeKind::Union,
        }
    }
}
impl std::fmt::Display for GraphQLTypeNodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
