use crate::DiffKind;
use crate::types::GraphQLTypeNode;

/// Describes one difference found between two versions of a GraphQL type.
///
/// `this_type` is the baseline and `other_type` is the type it was compared
/// against. Both are borrowed from type graphs owned elsewhere, and neither
/// is ever modified through a [`GraphQLTypeDiff`]. Once constructed, a
/// [`GraphQLTypeDiff`] cannot be changed.
///
/// The [`Display`](std::fmt::Display) form (also available as
/// [`GraphQLTypeDiff::to_text()`]) is a fixed format that log scrapers and
/// snapshot tests may depend on:
///
/// ```text
/// [diffType=FieldMissing, description="field 'id' removed"]
/// ```
///
/// The description is written as-is without escaping. A description that
/// itself contains `description="` therefore renders ambiguously.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQLTypeDiff<'a> {
    this_type: &'a GraphQLTypeNode,
    other_type: &'a GraphQLTypeNode,
    #[serde(rename = "diffType")]
    kind: DiffKind,
    description: String,
    #[serde(rename = "backwardsCompatible")]
    backward_compatible: bool,
}
impl<'a> GraphQLTypeDiff<'a> {
    /// Records a difference of `this_type` relative to `other_type`.
    ///
    /// Nothing is validated here beyond what the types enforce. The caller
    /// is responsible for picking a [`DiffKind`] and a `description` that
    /// agree with each other. `description` must not be empty.
    ///
    /// `backward_compatible` should be `true` only if changing `this_type`
    /// into `other_type` would not break existing clients.
    pub fn new(
        this_type: &'a GraphQLTypeNode,
        other_type: &'a GraphQLTypeNode,
        kind: DiffKind,
        description: impl Into<String>,
        backward_compatible: bool,
    ) -> Self {
        let description = description.into();
        debug_assert!(
            !description.is_empty(),
            "a GraphQLTypeDiff must carry a non-empty description",
        );
        Self {
            this_type,
            other_type,
            kind,
            description,
            backward_compatible,
        }
    }

    /// Indicates if evolving `this_type` into `other_type` is a non-breaking
    /// change.
    pub fn backward_compatible(&self) -> bool {
        self.backward_compatible
    }

    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// The inverse of [`GraphQLTypeDiff::backward_compatible()`].
    pub fn is_breaking(&self) -> bool {
        !self.backward_compatible
    }

    pub fn kind(&self) -> DiffKind {
        self.kind
    }

    /// The type that was compared against the baseline.
    pub fn other_type(&self) -> &'a GraphQLTypeNode {
        self.other_type
    }

    /// The baseline type.
    pub fn this_type(&self) -> &'a GraphQLTypeNode {
        self.this_type
    }

    /// Renders this diff as `[diffType=<kind>, description="<description>"]`.
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}
impl std::fmt::Display for GraphQLTypeDiff<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[diffType={}, description=\"{}\"]",
            self.kind,
            self.description,
        )
    }
}
