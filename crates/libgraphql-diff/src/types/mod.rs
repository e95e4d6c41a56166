mod enum_type;
mod enum_value;
mod field;
mod graphql_type_node;
mod graphql_type_node_kind;
mod interface_type;
mod list_type;
mod list_type_annotation;
mod named_type_annotation;
mod named_type_node;
mod non_null_type;
mod object_or_interface_type_data;
mod object_or_interface_type_trait;
mod object_type;
mod parameter;
mod scalar_type;
mod type_annotation;
mod type_node_error;
mod union_type;

pub use enum_type::EnumType;
pub use enum_value::EnumValue;
pub use field::Field;
pub use graphql_type_node::GraphQLTypeNode;
pub use graphql_type_node_kind::GraphQLTypeNodeKind;
pub use interface_type::InterfaceType;
pub use list_type::ListType;
pub use list_type_annotation::ListTypeAnnotation;
pub use named_type_annotation::NamedTypeAnnotation;
pub use named_type_node::NamedTypeNode;
pub use non_null_type::NonNullType;
use object_or_interface_type_data::ObjectOrInterfaceTypeData;
pub use object_or_interface_type_trait::ObjectOrInterfaceTypeTrait;
pub use object_type::ObjectType;
pub use parameter::Parameter;
pub use scalar_type::ScalarType;
pub use type_annotation::TypeAnnotation;
pub use type_node_error::TypeNodeError;
pub use union_type::UnionType;

#[cfg(test)]
mod tests;
