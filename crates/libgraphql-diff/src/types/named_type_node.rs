/// Accessors shared by every named (i.e. non-wrapper)
/// [`GraphQLTypeNode`](crate::types::GraphQLTypeNode) payload.
pub trait NamedTypeNode {
    /// The description of this type (e.g. the """-string immediately before
    /// the type definition in a schema), if one is present.
    fn description(&self) -> Option<&str>;

    fn name(&self) -> &str;
}
