//! Translation of deletion queries into engine queries and a flat string form.

use crate::engine::{EngineQuery, NumericValue};
use crate::query::{DeletionQuery, QueryKind, QueryVariant, SingularTermDeletionQuery, TermValue};
use crate::registry_error::{DeleteByQueryError, Result};

/// Translator for one [`QueryKind`].
///
/// Mappers are stateless and shared across threads. The registry owns exactly one
/// instance per kind and hands out shared references to it.
pub trait DeletionQueryMapper: Send + Sync + 'static {
    /// The kind this mapper understands.
    fn kind(&self) -> QueryKind;

    /// Builds the engine query selecting every document the deletion covers.
    fn to_engine_query(&self, query: &DeletionQuery) -> Result<EngineQuery>;

    /// Encodes `query` into its portable string-array form.
    fn to_string_array(&self, query: &DeletionQuery) -> Result<Vec<String>>;

    /// Decodes the output of [`to_string_array`](Self::to_string_array).
    fn from_string_array(&self, parts: &[String]) -> Result<DeletionQuery>;
}

/// Mapper for [`SingularTermDeletionQuery`].
///
/// String form: `[VALUE_TYPE, field_name, value]`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SingularTermDeletionQueryMapper;

impl SingularTermDeletionQueryMapper {
    fn expect_term<'q>(&self, query: &'q DeletionQuery) -> Result<&'q SingularTermDeletionQuery> {
        query
            .as_singular_term()
            .ok_or(DeleteByQueryError::QueryKindMismatch {
                expected: SingularTermDeletionQuery::KIND,
                found: query.kind(),
            })
    }

    fn malformed(reason: impl Into<String>) -> DeleteByQueryError {
        DeleteByQueryError::MalformedStringArray {
            kind: SingularTermDeletionQuery::KIND,
            reason: reason.into(),
        }
    }
}

impl DeletionQueryMapper for SingularTermDeletionQueryMapper {
    fn kind(&self) -> QueryKind {
        SingularTermDeletionQuery::KIND
    }

    fn to_engine_query(&self, query: &DeletionQuery) -> Result<EngineQuery> {
        let term = self.expect_term(query)?;
        let field = term.field_name();
        Ok(match term.value() {
            TermValue::String(text) => EngineQuery::term(field, text.as_str()),
            TermValue::Int(v) => EngineQuery::numeric_exact(field, NumericValue::Int(*v)),
            TermValue::Long(v) => EngineQuery::numeric_exact(field, NumericValue::Long(*v)),
            TermValue::Float(v) => EngineQuery::numeric_exact(field, NumericValue::Float(*v)),
            TermValue::Double(v) => EngineQuery::numeric_exact(field, NumericValue::Double(*v)),
        })
    }

    fn to_string_array(&self, query: &DeletionQuery) -> Result<Vec<String>> {
        let term = self.expect_term(query)?;
        Ok(vec![
            term.value().value_type().to_string(),
            term.field_name().to_string(),
            term.value().to_string(),
        ])
    }

    fn from_string_array(&self, parts: &[String]) -> Result<DeletionQuery> {
        let [value_type, field_name, value] = parts else {
            return Err(Self::malformed(format!(
                "expected 3 entries, found {}",
                parts.len()
            )));
        };
        let value_type = value_type.parse().map_err(Self::malformed)?;
        let value = TermValue::parse(value_type, value).map_err(Self::malformed)?;
        Ok(SingularTermDeletionQuery::new(field_name.as_str(), value).into())
    }
}
