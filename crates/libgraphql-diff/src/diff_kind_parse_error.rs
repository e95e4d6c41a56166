/// Produced when a string token does not name any
/// [`DiffKind`](crate::DiffKind).
///
/// Token matching is exact and case-sensitive, so `"fieldmissing"` is
/// rejected even though `"FieldMissing"` is accepted.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum DiffKindParseError {
    #[error("unknown diff kind: `{0}`")]
    UnknownToken(String),
}
