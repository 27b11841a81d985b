//! Deletion query variants.
//!
//! A [`DeletionQuery`] describes which indexed documents to remove. Every concrete
//! variant has a [`QueryKind`], whose [`key`](QueryKind::key) is a small dense
//! integer used to index the mapper table.

use std::fmt;
use std::str::FromStr;

/// Discriminant of a deletion query variant.
///
/// Keys are dense and start at zero: the position in [`QueryKind::ALL`] is the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKind {
    /// Delete every document whose field equals a single value.
    SingularTerm,
}

impl QueryKind {
    /// Every known kind, ordered by key.
    pub const ALL: &'static [QueryKind] = &[QueryKind::SingularTerm];

    /// Dense integer key of this kind.
    pub const fn key(self) -> usize {
        match self {
            QueryKind::SingularTerm => 0,
        }
    }

    /// Looks up the kind registered under `key`.
    pub fn from_key(key: usize) -> Option<QueryKind> {
        Self::ALL.iter().copied().find(|kind| kind.key() == key)
    }

    pub const fn name(self) -> &'static str {
        match self {
            QueryKind::SingularTerm => "SingularTerm",
        }
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Static contract of a concrete deletion query variant.
pub trait QueryVariant: Into<DeletionQuery> + Send + Sync + 'static {
    const KIND: QueryKind;

    /// Shorthand for `Self::KIND.key()`.
    fn query_key() -> usize {
        Self::KIND.key()
    }
}

/// Type tag of a [`TermValue`], as written in the string-array form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    String,
    Int,
    Long,
    Float,
    Double,
}

impl ValueType {
    pub const fn as_str(self) -> &'static str {
        match self {
            ValueType::String => "STRING",
            ValueType::Int => "INT",
            ValueType::Long => "LONG",
            ValueType::Float => "FLOAT",
            ValueType::Double => "DOUBLE",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "STRING" => Ok(ValueType::String),
            "INT" => Ok(ValueType::Int),
            "LONG" => Ok(ValueType::Long),
            "FLOAT" => Ok(ValueType::Float),
            "DOUBLE" => Ok(ValueType::Double),
            other => Err(format!("unknown value type `{other}`")),
        }
    }
}

/// Value compared against a single field.
#[derive(Debug, Clone, PartialEq)]
pub enum TermValue {
    String(String),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
}

impl TermValue {
    pub fn value_type(&self) -> ValueType {
        match self {
            TermValue::String(_) => ValueType::String,
            TermValue::Int(_) => ValueType::Int,
            TermValue::Long(_) => ValueType::Long,
            TermValue::Float(_) => ValueType::Float,
            TermValue::Double(_) => ValueType::Double,
        }
    }

    /// Parses `text` as a value of type `value_type`.
    pub fn parse(value_type: ValueType, text: &str) -> Result<Self, String> {
        let invalid = |e: &dyn fmt::Display| format!("invalid {value_type} value `{text}`: {e}");
        match value_type {
            ValueType::String => Ok(TermValue::String(text.to_string())),
            ValueType::Int => text.parse().map(TermValue::Int).map_err(|e| invalid(&e)),
            ValueType::Long => text.parse().map(TermValue::Long).map_err(|e| invalid(&e)),
            ValueType::Float => text.parse().map(TermValue::Float).map_err(|e| invalid(&e)),
            ValueType::Double => text.parse().map(TermValue::Double).map_err(|e| invalid(&e)),
        }
    }
}

impl fmt::Display for TermValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TermValue::String(v) => f.write_str(v),
            TermValue::Int(v) => write!(f, "{v}"),
            TermValue::Long(v) => write!(f, "{v}"),
            TermValue::Float(v) => write!(f, "{v}"),
            TermValue::Double(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for TermValue {
    fn from(value: &str) -> Self {
        TermValue::String(value.to_string())
    }
}

impl From<String> for TermValue {
    fn from(value: String) -> Self {
        TermValue::String(value)
    }
}

impl From<i32> for TermValue {
    fn from(value: i32) -> Self {
        TermValue::Int(value)
    }
}

impl From<i64> for TermValue {
    fn from(value: i64) -> Self {
        TermValue::Long(value)
    }
}

impl From<f32> for TermValue {
    fn from(value: f32) -> Self {
        TermValue::Float(value)
    }
}

impl From<f64> for TermValue {
    fn from(value: f64) -> Self {
        TermValue::Double(value)
    }
}

/// Deletes every document whose `field_name` equals `value`.
#[derive(Debug, Clone, PartialEq)]
pub struct SingularTermDeletionQuery {
    field_name: String,
    value: TermValue,
}

impl SingularTermDeletionQuery {
    pub fn new(field_name: impl Into<String>, value: impl Into<TermValue>) -> Self {
        Self {
            field_name: field_name.into(),
            value: value.into(),
        }
    }

    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    pub fn value(&self) -> &TermValue {
        &self.value
    }
}

impl QueryVariant for SingularTermDeletionQuery {
    const KIND: QueryKind = QueryKind::SingularTerm;
}

impl fmt::Display for SingularTermDeletionQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SingularTermDeletionQuery {{ field_name: {}, value: {}, type: {} }}",
            self.field_name,
            self.value,
            self.value.value_type()
        )
    }
}

/// A request to remove index entries matching some criterion.
#[derive(Debug, Clone, PartialEq)]
pub enum DeletionQuery {
    SingularTerm(SingularTermDeletionQuery),
}

impl DeletionQuery {
    pub fn kind(&self) -> QueryKind {
        match self {
            DeletionQuery::SingularTerm(_) => SingularTermDeletionQuery::KIND,
        }
    }

    /// Dense key of this query's kind, as used by the mapper table.
    pub fn query_key(&self) -> usize {
        self.kind().key()
    }

    pub fn as_singular_term(&self) -> Option<&SingularTermDeletionQuery> {
        match self {
            DeletionQuery::SingularTerm(query) => Some(query),
        }
    }
}

impl From<SingularTermDeletionQuery> for DeletionQuery {
    fn from(query: SingularTermDeletionQuery) -> Self {
        DeletionQuery::SingularTerm(query)
    }
}

impl fmt::Display for DeletionQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeletionQuery::SingularTerm(query) => fmt::Display::fmt(query, f),
        }
    }
}
