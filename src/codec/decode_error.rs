use super::{Cursor, FieldPath};
use crate::schema::FieldType;
use serde_json::Value;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum DecodeError {
    /// A required field was absent or null.
    MissingField {
        entity: &'static str,
        field: &'static str,
        path: FieldPath,
    },
    /// The raw value has the wrong JSON kind for its declared type, or doesn't fit the declared integer width.
    TypeMismatch {
        entity: &'static str,
        field: &'static str,
        expected: FieldType,
        actual: &'static str,
        path: FieldPath,
    },
    /// The integer isn't a member of the enum.
    UnknownEnumValue {
        kind: &'static str,
        /// Wide enough for any JSON integer.
        value: i128,
        path: FieldPath,
    },
    MalformedTimestamp {
        entity: &'static str,
        field: &'static str,
        value: String,
        path: FieldPath,
        source: chrono::ParseError,
    },
    /// Only raised when unknown fields are rejected.
    UnknownField {
        entity: &'static str,
        field: String,
        path: FieldPath,
    },
    /// Only raised when inconsistent pagination is rejected.
    InconsistentPagination {
        entity: &'static str,
        reason: String,
        path: FieldPath,
    },
    Json {
        source: serde_json::Error,
    },
}

impl DecodeError {
    pub(crate) fn missing(cx: &Cursor) -> Self {
        DecodeError::MissingField {
            entity: cx.entity,
            field: cx.field,
            path: cx.path(),
        }
    }

    pub(crate) fn mismatch(cx: &Cursor, expected: FieldType, actual: &'static str) -> Self {
        DecodeError::TypeMismatch {
            entity: cx.entity,
            field: cx.field,
            expected,
            actual,
            path: cx.path(),
        }
    }

    pub(crate) fn unexpected(cx: &Cursor, expected: FieldType, raw: &Value) -> Self {
        Self::mismatch(cx, expected, json_kind(raw))
    }

    pub(crate) fn unknown_enum(kind: &'static str, value: i128, cx: &Cursor) -> Self {
        DecodeError::UnknownEnumValue {
            kind,
            value,
            path: cx.path(),
        }
    }

    pub(crate) fn malformed_timestamp(cx: &Cursor, value: &str, source: chrono::ParseError) -> Self {
        DecodeError::MalformedTimestamp {
            entity: cx.entity,
            field: cx.field,
            value: value.to_string(),
            path: cx.path(),
            source,
        }
    }

    /// Where in the payload decoding failed. `None` for malformed JSON text.
    pub fn path(&self) -> Option<&FieldPath> {
        match self {
            DecodeError::MissingField { path, .. }
            | DecodeError::TypeMismatch { path, .. }
            | DecodeError::UnknownEnumValue { path, .. }
            | DecodeError::MalformedTimestamp { path, .. }
            | DecodeError::UnknownField { path, .. }
            | DecodeError::InconsistentPagination { path, .. } => Some(path),
            DecodeError::Json { .. } => None,
        }
    }
}

// Kind of a raw JSON value, as reported in type mismatches.
pub(crate) fn json_kind(raw: &Value) -> &'static str {
    match raw {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl Error for DecodeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DecodeError::MalformedTimestamp { ref source, .. } => Some(source),
            DecodeError::Json { ref source } => Some(source),
            _ => None,
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DecodeError::MissingField { entity, field, path } => {
                write!(f, "{}.{} is required but missing (at {})", entity, field, path)
            }
            DecodeError::TypeMismatch {
                entity,
                field,
                expected,
                actual,
                path,
            } => {
                if field.is_empty() {
                    write!(f, "expected {} but found {} (at {})", expected, actual, path)
                } else {
                    write!(
                        f,
                        "{}.{} expected {} but found {} (at {})",
                        entity, field, expected, actual, path
                    )
                }
            }
            DecodeError::UnknownEnumValue { kind, value, path } => {
                write!(f, "{} is not a known {} value (at {})", value, kind, path)
            }
            DecodeError::MalformedTimestamp {
                entity,
                field,
                value,
                path,
                source,
            } => write!(
                f,
                "{}.{} has malformed timestamp {:?}: {} (at {})",
                entity, field, value, source, path
            ),
            DecodeError::UnknownField { entity, field, path } => {
                write!(f, "{} has undeclared field {:?} (at {})", entity, field, path)
            }
            DecodeError::InconsistentPagination { entity, reason, path } => {
                write!(f, "{} pagination is inconsistent: {} (at {})", entity, reason, path)
            }
            DecodeError::Json { source } => source.fmt(f),
        }
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(error: serde_json::Error) -> Self {
        DecodeError::Json { source: error }
    }
}
