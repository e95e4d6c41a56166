//! Value types for describing the differences between two versions of a
//! GraphQL type.
//!
//! A [`GraphQLTypeDiff`] records one classified difference between a
//! baseline type ("this" type) and the type it was compared against ("other"
//! type). The nodes it points at are modelled by the closed set of variants
//! in [`types::GraphQLTypeNode`], and the category of each difference is one
//! of the fixed [`DiffKind`] tokens.
//!
//! This crate does not walk or compare type graphs itself. It only defines
//! the record shape a comparison engine produces and a reporting layer
//! consumes.

mod diff_kind;
mod diff_kind_parse_error;
mod graphql_type_diff;
pub mod types;

pub use diff_kind::DiffKind;
pub use diff_kind_parse_error::DiffKindParseError;
pub use graphql_type_diff::GraphQLTypeDiff;

#[cfg(test)]
mod tests;
