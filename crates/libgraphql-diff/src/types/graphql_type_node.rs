use crate::types::EnumType;
use crate::types::GraphQLTypeNodeKind;
use crate::types::InterfaceType;
use crate::types::ListType;
use crate::types::NonNullType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;

/// A node within a GraphQL type graph.
///
/// This is the closed set of type shapes a
/// [`GraphQLTypeDiff`](crate::GraphQLTypeDiff) may point at. Named variants
/// carry the type's definition, while [`GraphQLTypeNode::List`] and
/// [`GraphQLTypeNode::NonNull`] wrap another node.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum GraphQLTypeNode {
    Enum(EnumType),
    Interface(InterfaceType),
    List(ListType),
    NonNull(NonNullType),
    Object(ObjectType),
    Scalar(ScalarType),
    Union(UnionType),
}
impl GraphQLTypeNode {
    pub fn as_enum(&self) -> Option<&EnumType> {
        if let Self::Enum(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_interface(&self) -> Option<&InterfaceType> {
        if let Self::Interface(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_list(&self) -> Option<&ListType> {
        if let Self::List(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_non_null(&self) -> Option<&NonNullType> {
        if let Self::NonNull(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        if let Self::Object(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_scalar(&self) -> Option<&ScalarType> {
        if let Self::Scalar(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_union(&self) -> Option<&UnionType> {
        if let Self::Union(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    /// The description of this type. Always [`None`] for wrapper types.
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Enum(t) => t.description(),
            Self::Interface(t) => t.description(),
            Self::List(_) | Self::NonNull(_) => None,
            Self::Object(t) => t.description(),
            Self::Scalar(t) => t.description(),
            Self::Union(t) => t.description(),
        }
    }

    /// Unwrap any [`ListType`]/[`NonNullType`] layers and return the named
    /// type at the center.
    pub fn innermost_named_type(&self) -> &GraphQLTypeNode {
        match self {
            Self::List(list_type) => list_type.of_type().innermost_named_type(),
            Self::NonNull(non_null_type) => non_null_type.of_type().innermost_named_type(),
            _ => self,
        }
    }

    pub fn is_wrapper(&self) -> bool {
        self.kind().is_wrapper()
    }

    pub fn kind(&self) -> GraphQLTypeNodeKind {
        self.into()
    }

    /// The name of this type. Always [`None`] for wrapper types.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Enum(t) => Some(t.name()),
            Self::Interface(t) => Some(t.name()),
            Self::List(_) | Self::NonNull(_) => None,
            Self::Object(t) => Some(t.name()),
            Self::Scalar(t) => Some(t.name()),
            Self::Union(t) => Some(t.name()),
        }
    }

    /// Renders this type the way it would be referenced in a schema document
    /// (e.g. `[User!]!`).
    pub fn to_graphql_string(&self) -> String {
        self.to_string()
    }
}
impl std::convert::From<EnumType> for GraphQLTypeNode {
    fn from(value: EnumType) -> Self {
        Self::Enum(value)
    }
}
impl std::convert::From<InterfaceType> for GraphQLTypeNode {
    fn from(value: InterfaceType) -> Self {
        Self::Interface(value)
    }
}
impl std::convert::From<ListType> for GraphQLTypeNode {
    fn from(value: ListType) -> Self {
        Self::List(value)
    }
}
impl std::convert::From<NonNullType> for GraphQLTypeNode {
    fn from(value: NonNullType) -> Self {
        Self::NonNull(value)
    }
}
impl std::convert::From<ObjectType> for GraphQLTypeNode {
    fn from(value: ObjectType) -> Self {
        Self::Object(value)
    }
}
impl std::convert::From<ScalarType> for GraphQLTypeNode {
    fn from(value: ScalarType) -> Self {
        Self::Scalar(value)
    }
}
impl std::convert::From<UnionType> for GraphQLTypeNode {
    fn from(value: UnionType) -> Self {
        Self::Union(value)
    }
}
impl std::fmt::Display for GraphQLTypeNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(list_type) => write!(f, "[{}]", list_type.of_type()),
            Self::NonNull(non_null_type) => write!(f, "{}!", non_null_type.of_type()),
            Self::Enum(t) => f.write_str(t.name()),
            Self::Interface(t) => f.write_str(t.name()),
            Self::Object(t) => f.write_str(t.name()),
            Self::Scalar(t) => f.write_str(t.name()),
            Self::Union(t) => f.write_str(t.name()),
        }
    }
}
