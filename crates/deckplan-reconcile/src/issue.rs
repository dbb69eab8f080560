//! Merge diagnostics
//!
//! Reconciling a persisted fragment never fails on malformed shapes; the
//! schema walk keeps the default and reports a [`MergeIssue`] instead.

use std::fmt::{self, Display, Formatter};

use serde_json::Value as JsonValue;

/// One non-fatal finding from a reconcile pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeIssue {
    /// Dotted path of the offending field; empty for the document root
    pub path: String,

    /// What went wrong
    pub kind: IssueKind,
}

impl MergeIssue {
    /// Issue for a persisted value whose shape disagrees with the schema
    #[must_use]
    pub fn type_mismatch(path: impl Into<String>, expected: ValueKind, found: ValueKind) -> Self {
        Self {
            path: path.into(),
            kind: IssueKind::TypeMismatch { expected, found },
        }
    }

    /// Issue for a persisted key the schema does not define
    #[must_use]
    pub fn unknown_field(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: IssueKind::UnknownField,
        }
    }
}

impl Display for MergeIssue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let path = if self.path.is_empty() { "<root>" } else { &self.path };
        match &self.kind {
            IssueKind::TypeMismatch { expected, found } => {
                write!(f, "{path}: expected {expected}, found {found}; default kept")
            }
            IssueKind::UnknownField => write!(f, "{path}: not in schema; dropped"),
        }
    }
}

/// Classification of a merge issue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    /// Persisted shape disagrees with the Default Schema; the default won
    TypeMismatch {
        /// Shape the schema defines at this path
        expected: ValueKind,
        /// Shape the persisted fragment carried
        found: ValueKind,
    },

    /// Persisted key with no schema counterpart; the value was dropped
    UnknownField,
}

/// Coarse JSON value shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// `null`
    Null,
    /// `true` / `false`
    Bool,
    /// Any number
    Number,
    /// Any string
    String,
    /// Ordered list
    Array,
    /// Structured object
    Object,
}

impl ValueKind {
    /// Classify a JSON value
    #[must_use]
    pub fn of(value: &JsonValue) -> Self {
        match value {
            JsonValue::Null => Self::Null,
            JsonValue::Bool(_) => Self::Bool,
            JsonValue::Number(_) => Self::Number,
            JsonValue::String(_) => Self::String,
            JsonValue::Array(_) => Self::Array,
            JsonValue::Object(_) => Self::Object,
        }
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        };
        write!(f, "{name}")
    }
}
