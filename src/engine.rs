//! Engine-native executable queries.

use std::cmp::Ordering;
use std::fmt;

use crate::query::TermValue;

/// Numeric bound of a range query. Both bounds of one range share a variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericValue {
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
}

impl NumericValue {
    /// Compares against a stored value of the same numeric type.
    ///
    /// Returns `None` for mismatched types and for NaN.
    fn compare(&self, stored: &TermValue) -> Option<Ordering> {
        match (stored, self) {
            (TermValue::Int(a), NumericValue::Int(b)) => Some(a.cmp(b)),
            (TermValue::Long(a), NumericValue::Long(b)) => Some(a.cmp(b)),
            (TermValue::Float(a), NumericValue::Float(b)) => a.partial_cmp(b),
            (TermValue::Double(a), NumericValue::Double(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

impl fmt::Display for NumericValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericValue::Int(v) => write!(f, "{v}"),
            NumericValue::Long(v) => write!(f, "{v}"),
            NumericValue::Float(v) => write!(f, "{v}"),
            NumericValue::Double(v) => write!(f, "{v}"),
        }
    }
}

/// A query the index engine can execute directly.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineQuery {
    /// Exact match of an indexed string term.
    Term { field: String, text: String },
    /// Numeric range over a trie-encoded numeric field.
    NumericRange {
        field: String,
        min: NumericValue,
        max: NumericValue,
        min_inclusive: bool,
        max_inclusive: bool,
    },
}

impl EngineQuery {
    pub fn term(field: impl Into<String>, text: impl Into<String>) -> Self {
        EngineQuery::Term {
            field: field.into(),
            text: text.into(),
        }
    }

    /// Closed range `[value, value]`, i.e. numeric equality.
    pub fn numeric_exact(field: impl Into<String>, value: NumericValue) -> Self {
        EngineQuery::NumericRange {
            field: field.into(),
            min: value,
            max: value,
            min_inclusive: true,
            max_inclusive: true,
        }
    }

    pub fn field(&self) -> &str {
        match self {
            EngineQuery::Term { field, .. } | EngineQuery::NumericRange { field, .. } => field,
        }
    }

    /// Whether a document holding `value` in `field` is selected by this query.
    pub fn matches(&self, field: &str, value: &TermValue) -> bool {
        if self.field() != field {
            return false;
        }
        match self {
            EngineQuery::Term { text, .. } => {
                matches!(value, TermValue::String(stored) if stored == text)
            }
            EngineQuery::NumericRange {
                min,
                max,
                min_inclusive,
                max_inclusive,
                ..
            } => {
                let above = match min.compare(value) {
                    Some(Ordering::Greater) => true,
                    Some(Ordering::Equal) => *min_inclusive,
                    _ => false,
                };
                let below = match max.compare(value) {
                    Some(Ordering::Less) => true,
                    Some(Ordering::Equal) => *max_inclusive,
                    _ => false,
                };
                above && below
            }
        }
    }
}

impl fmt::Display for EngineQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineQuery::Term { field, text } => write!(f, "{field}:{text}"),
            EngineQuery::NumericRange {
                field,
                min,
                max,
                min_inclusive,
                max_inclusive,
            } => {
                let open = if *min_inclusive { '[' } else { '{' };
                let close = if *max_inclusive { ']' } else { '}' };
                write!(f, "{field}:{open}{min} TO {max}{close}")
            }
        }
    }
}
