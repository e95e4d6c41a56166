use crate::types::Field;
use crate::types::GraphQLTypeNode;
use crate::types::ObjectType;
use crate::types::Parameter;
use crate::types::ScalarType;
use crate::types::TypeAnnotation;

/// A `User` object type with an `id: ID!` field and a `friends` field that
/// takes a `first: Int = 10` argument.
pub(super) fn user_type() -> GraphQLTypeNode {
    ObjectType::new("User")
        .with_description("A registered user.")
        .with_field(Field::new("id", TypeAnnotation::named("ID", false)))
        .with_field(
            Field::new(
                "friends",
                TypeAnnotation::list(TypeAnnotation::named("User", false), true),
            ).with_parameter(
                Parameter::new("first", TypeAnnotation::named("Int", true))
                    .with_default_value("10"),
            ),
        )
        .into()
}

/// The same `User` type as [`user_type()`] with its `id` field removed.
pub(super) fn user_type_without_id() -> GraphQLTypeNode {
    ObjectType::new("User")
        .with_description("A registered user.")
        .with_field(
            Field::new(
                "friends",
                TypeAnnotation::list(TypeAnnotation::named("User", false), true),
            ).with_parameter(
                Parameter::new("first", TypeAnnotation::named("Int", true))
                    .with_default_value("10"),
            ),
        )
        .into()
}

pub(super) fn date_scalar() -> GraphQLTypeNode {
    ScalarType::new("Date").into()
}
