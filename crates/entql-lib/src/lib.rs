//! Query builder for hierarchical entity GraphQL APIs.
//!
//! A [`Query`] owns a tree of selected fields and a registry of typed
//! variables. Fields bind their arguments to declared variables, and the
//! printer renders the whole thing as GraphQL query text:
//!
//! - `variables` - variable registry (declaration order, per-call values)
//! - `field` - field tree nodes and the mutable field handle
//! - `query` - the query root
//! - `printer` - query text rendering
//! - `factories` - prebuilt queries for projects, folders, subsets, versions
//!   and representations
//!
//! The rendered text only depends on structure. Values travel separately
//! via [`Query::variables_values`], so the same text can be reused across
//! calls with different values.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod factories;
pub mod field;
pub mod printer;
pub mod query;
pub mod value;
pub mod variables;

#[cfg(test)]
mod factories_tests;
#[cfg(test)]
mod variables_tests;

pub use field::{FieldId, FieldMut, FieldNode};
pub use printer::QueryPrinter;
pub use query::Query;
pub use value::Value;
pub use variables::{VarRef, Variable, Variables};

/// Errors raised while building or rendering a query.
///
/// Every error is raised before any state is written, so the query is
/// unchanged after a failed call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A variable with this name is already declared.
    #[error("variable `${0}` is already declared")]
    VariableConflict(String),

    /// The argument is already bound on this field.
    #[error("filter `{argument}` is already set on field `{field}`")]
    FilterConflict { field: String, argument: String },

    /// A filter points at a variable the query does not declare.
    #[error("filter `{argument}` references undeclared variable `${variable}`")]
    UndefinedVariable { argument: String, variable: String },

    /// The query has no top-level fields.
    #[error("Missing fields to query in `{0}`")]
    MissingFields(String),

    #[error("variable `${0}` is not declared")]
    VariableNotFound(String),
}

/// Coarse error classification, independent of which component raised it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NameConflict,
    Reference,
    Structure,
    NotFound,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::VariableConflict(_) | Error::FilterConflict { .. } => ErrorKind::NameConflict,
            Error::UndefinedVariable { .. } => ErrorKind::Reference,
            Error::MissingFields(_) => ErrorKind::Structure,
            Error::VariableNotFound(_) => ErrorKind::NotFound,
        }
    }
}

/// Result type for query building operations.
pub type Result<T> = std::result::Result<T, Error>;
