use super::{Cursor, DecodeError, WireValue};
use crate::schema::FieldType;
use serde_json::{Map, Value};

/// An optional field that remembers how it was received.
///
/// `Absent` fields are left out when encoding, `Null` fields are written as `null`, so a decoded payload encodes back
/// to the same shape.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Nullable<T> {
    Absent,
    Null,
    Present(T),
}

impl<T> Default for Nullable<T> {
    fn default() -> Self {
        Nullable::Absent
    }
}

impl<T> Nullable<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Nullable::Absent)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Nullable::Null)
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Nullable::Present(_))
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            Nullable::Present(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Nullable::Present(value) => Some(value),
            _ => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Nullable<U> {
        match self {
            Nullable::Absent => Nullable::Absent,
            Nullable::Null => Nullable::Null,
            Nullable::Present(value) => Nullable::Present(f(value)),
        }
    }
}

impl<T: Copy> Nullable<T> {
    pub fn get(&self) -> Option<T> {
        self.as_option().copied()
    }
}

// Hand-built entities usually mean "leave it out" rather than an explicit null.
impl<T> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Nullable::Present(value),
            None => Nullable::Absent,
        }
    }
}

impl<T: WireValue> WireValue for Nullable<T> {
    fn wire_type() -> FieldType {
        T::wire_type()
    }

    fn is_optional() -> bool {
        true
    }

    fn decode_value(raw: &Value, cx: &Cursor) -> Result<Self, DecodeError> {
        match raw {
            Value::Null => Ok(Nullable::Null),
            raw => T::decode_value(raw, cx).map(Nullable::Present),
        }
    }

    fn encode_value(&self) -> Value {
        match self {
            Nullable::Present(value) => value.encode_value(),
            _ => Value::Null,
        }
    }

    fn decode_slot(raw: Option<&Value>, cx: &Cursor) -> Result<Self, DecodeError> {
        match raw {
            None => Ok(Nullable::Absent),
            Some(raw) => Self::decode_value(raw, cx),
        }
    }

    fn encode_slot(&self, name: &'static str, fields: &mut Map<String, Value>) {
        if !self.is_absent() {
            fields.insert(name.to_string(), self.encode_value());
        }
    }
}
