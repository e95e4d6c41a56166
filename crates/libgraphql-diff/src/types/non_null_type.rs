use crate::types::GraphQLTypeNode;
use crate::types::TypeNodeError;

/// A [non-null](https://spec.graphql.org/October2021/#sec-Non-Null) wrapper
/// around another [`GraphQLTypeNode`].
///
/// The wrapped type is never itself a [`NonNullType`].
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct NonNullType {
    pub(super) of_type: Box<GraphQLTypeNode>,
}
impl NonNullType {
    /// Wrap `of_type` in a [`NonNullType`].
    ///
    /// Fails with [`TypeNodeError::NestedNonNull`] if `of_type` is already a
    /// non-null type.
    pub fn new(
        of_type: impl Into<GraphQLTypeNode>,
    ) -> Result<Self, TypeNodeError> {
        let of_type = of_type.into();
        if let GraphQLTypeNode::NonNull(_) = of_type {
            log::debug!("Refusing to wrap `{of_type}` in another non-null type.");
            return Err(TypeNodeError::NestedNonNull {
                inner_type: of_type.to_string(),
            });
        }
        Ok(Self {
            of_type: Box::new(of_type),
        })
    }

    /// The nullable [`GraphQLTypeNode`] this [`NonNullType`] wraps.
    pub fn of_type(&self) -> &GraphQLTypeNode {
        &self.of_type
    }
}

// Deserialization goes through `NonNullType::new()` so that nested non-null
// wrappers are rejected here too.
impl<'de> serde::Deserialize<'de> for NonNullType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct UncheckedNonNullType {
            of_type: Box<GraphQLTypeNode>,
        }

        let unchecked = UncheckedNonNullType::deserialize(deserializer)?;
        Self::new(*unchecked.of_type).map_err(serde::de::Error::custom)
    }
}
