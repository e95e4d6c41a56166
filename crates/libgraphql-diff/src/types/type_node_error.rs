#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum TypeNodeError {
    #[error(
        "a non-null type cannot wrap another non-null type (attempted to \
        wrap `{inner_type}`)"
    )]
    NestedNonNull {
        /// The SDL rendering of the rejected inner type.
        inner_type: String,
    },
}
