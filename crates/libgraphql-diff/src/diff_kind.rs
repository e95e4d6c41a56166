use crate::DiffKindParseError;
use std::str::FromStr;

/// Categorizes a [`GraphQLTypeDiff`](crate::GraphQLTypeDiff).
///
/// Every variant describes a difference of "this" type relative to the
/// "other" type it was compared against.
///
/// Each variant is identified by a string token equal to its own name (e.g.
/// [`DiffKind::FieldMissing`] is `"FieldMissing"`). That token is what
/// [`Display`](std::fmt::Display) writes, what [`FromStr`] accepts, and what
/// serde reads and writes in every data format. Ordinal encodings are never
/// used, so persisted tokens stay meaningful across releases.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum DiffKind {
    /// The description of the type differs.
    TypeDescriptionDiff,

    /// A type present in one schema is absent from the other.
    TypeMissing,

    /// The name of the type differs.
    TypeNameDiff,

    /// The type wrapped by a non-null or list type differs, or the two types
    /// are of different kinds altogether (e.g. object vs scalar).
    BaseTypeDiff,

    /// The set of member types of a union differs.
    UnionTypeDiff,

    /// The set of interfaces implemented by the type differs.
    InterfaceDiff,

    /// The description of a field differs.
    FieldDescriptionDiff,

    /// A field present on one type is absent from the other.
    FieldMissing,

    /// The type (or some other attribute) of a field differs.
    FieldDiff,

    /// The description of a field argument differs.
    ArgDescriptionDiff,

    /// The type, default value, or presence of a field argument differs.
    ArgDiff,

    /// The set of values of an enum differs.
    EnumDiff,
}
impl DiffKind {
    /// Every [`DiffKind`], in declaration order.
    pub const ALL: [DiffKind; 12] = [
        Self::TypeDescriptionDiff,
        Self::TypeMissing,
        Self::TypeNameDiff,
        Self::BaseTypeDiff,
        Self::UnionTypeDiff,
        Self::InterfaceDiff,
        Self::FieldDescriptionDiff,
        Self::FieldMissing,
        Self::FieldDiff,
        Self::ArgDescriptionDiff,
        Self::ArgDiff,
        Self::EnumDiff,
    ];

    /// The stable string token identifying this [`DiffKind`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TypeDescriptionDiff => "TypeDescriptionDiff",
            Self::TypeMissing => "TypeMissing",
            Self::TypeNameDiff => "TypeNameDiff",
            Self::BaseTypeDiff => "BaseTypeDiff",
            Self::UnionTypeDiff => "UnionTypeDiff",
            Self::InterfaceDiff => "InterfaceDiff",
            Self::FieldDescriptionDiff => "FieldDescriptionDiff",
            Self::FieldMissing => "FieldMissing",
            Self::FieldDiff => "FieldDiff",
            Self::ArgDescriptionDiff => "ArgDescriptionDiff",
            Self::ArgDiff => "ArgDiff",
            Self::EnumDiff => "EnumDiff",
        }
    }
}
impl std::fmt::Display for DiffKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
impl FromStr for DiffKind {
    type Err = DiffKindParseError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter()
            .find(|kind| kind.as_str() == token)
            .ok_or_else(|| {
                log::debug!("Unrecognized diff kind token: `{token}`.");
                DiffKindParseError::UnknownToken(token.to_string())
            })
    }
}
impl std::convert::From<DiffKind> for &'static str {
    fn from(value: DiffKind) -> Self {
        value.as_str()
    }
}
impl std::convert::TryFrom<String> for DiffKind {
    type Error = DiffKindParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
