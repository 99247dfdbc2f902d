//! Raw input rows
//!
//! Manual-entry forms and uploaded tabular files both produce loosely-typed
//! rows: any field may be missing entirely or hold text that does not parse.
//! `RawRow` models this explicitly so the sanitizer can apply the three-way
//! rules (valid / invalid / absent) per field instead of scattering fallback
//! lookups.

/// One loosely-typed field of an input row
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RawField {
    /// The source row had no such column or cell
    #[default]
    Absent,
    /// The raw text as it appeared in the source
    Value(String),
}

impl RawField {
    /// Build from an optional cell, treating blank text as absent
    pub fn from_cell(cell: Option<&str>) -> Self {
        match cell {
            Some(text) if !text.trim().is_empty() => Self::Value(text.trim().to_string()),
            _ => Self::Absent,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// The raw text, if present
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Value(text) => Some(text.as_str()),
            Self::Absent => None,
        }
    }
}

impl From<&str> for RawField {
    fn from(text: &str) -> Self {
        Self::from_cell(Some(text))
    }
}

/// Outcome of parsing one field into its target type
#[derive(Debug, Clone, PartialEq)]
pub enum FieldOutcome<T> {
    /// Present and parsed successfully
    Valid(T),
    /// Present but could not be parsed
    Invalid,
    /// Not present in the source row
    Absent,
}

impl<T> FieldOutcome<T> {
    /// Resolve to a value using a fallback for both invalid and absent cases
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Self::Valid(value) => value,
            Self::Invalid | Self::Absent => fallback,
        }
    }
}

/// A raw expense row before sanitization
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    pub date: RawField,
    pub label: RawField,
    pub amount: RawField,
    pub category: RawField,
}

impl RawRow {
    /// Convenience constructor for tests and manual assembly
    pub fn new(date: RawField, label: RawField, amount: RawField, category: RawField) -> Self {
        Self {
            date,
            label,
            amount,
            category,
        }
    }
}
