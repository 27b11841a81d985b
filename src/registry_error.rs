use crate::query::QueryKind;

/// Errors produced by the delete-by-query registries and mappers.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DeleteByQueryError {
    /// No mapper is registered under this query kind key.
    #[error("unsupported query kind: key={key}")]
    UnsupportedQueryKind { key: usize },

    /// A mapper was handed a query of a kind it does not translate.
    #[error("query kind mismatch: expected {expected}, found {found}")]
    QueryKindMismatch {
        expected: QueryKind,
        found: QueryKind,
    },

    /// The flat string form of a query could not be decoded.
    #[error("malformed string array for {kind}: {reason}")]
    MalformedStringArray { kind: QueryKind, reason: String },

    /// Building a lazily initialized table failed; the table stays unbuilt.
    #[error("failed to build {table} table: {reason}")]
    BuildFailed { table: &'static str, reason: String },
}

pub type Result<T, E = DeleteByQueryError> = std::result::Result<T, E>;
