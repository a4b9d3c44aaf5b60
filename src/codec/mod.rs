//! Schema-driven conversion between untyped wire payloads and typed entities.
//!
//! Decoding is all-or-nothing: the first failure anywhere in the payload aborts the call and is reported with the
//! innermost entity, the field, and the path from the root. Encoding is total.

mod cursor;
mod decode_error;
mod nullable;
mod scalar;
mod timestamp;

pub use cursor::{Cursor, FieldPath, PathSegment};
pub use decode_error::DecodeError;
pub use nullable::Nullable;
pub use scalar::KeyedIntLists;
pub use timestamp::Timestamp;

use crate::api::{Entity, EntityKind};
use crate::schema::{EnumSchema, FieldType, RecordSchema};

use log::{debug, trace, warn};
use serde::Deserialize;
use serde_json::{Map, Value};

/// A type with a declared wire shape.
pub trait WireValue: Sized {
    fn wire_type() -> FieldType;

    fn is_optional() -> bool {
        false
    }

    fn decode_value(raw: &Value, cx: &Cursor) -> Result<Self, DecodeError>;

    fn encode_value(&self) -> Value;

    /* Decodes the value stored under a record field. `None` means the key wasn't present.
     * Required fields reject both absence and null. */
    fn decode_slot(raw: Option<&Value>, cx: &Cursor) -> Result<Self, DecodeError> {
        match raw {
            None | Some(Value::Null) => Err(DecodeError::missing(cx)),
            Some(raw) => Self::decode_value(raw, cx),
        }
    }

    fn encode_slot(&self, name: &'static str, fields: &mut Map<String, Value>) {
        fields.insert(name.to_string(), self.encode_value());
    }
}

/// A record entity: an ordered list of named fields.
pub trait Record: WireValue {
    const NAME: &'static str;
    /// Wire names in declared order.
    const FIELDS: &'static [&'static str];

    fn schema() -> RecordSchema;
}

/// A closed set of integer codes.
pub trait WireEnum: WireValue + Copy {
    const NAME: &'static str;
    const MEMBERS: &'static [(&'static str, i64)];

    fn from_wire(value: i64) -> Option<Self>;

    fn wire_value(self) -> i64;

    fn name(self) -> &'static str {
        let value = self.wire_value();
        Self::MEMBERS
            .iter()
            .find(|(_, v)| *v == value)
            .map(|(name, _)| *name)
            .unwrap_or(Self::NAME)
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::MEMBERS
            .iter()
            .find(|(n, _)| *n == name)
            .and_then(|(_, v)| Self::from_wire(*v))
    }

    fn members() -> Vec<Self> {
        Self::MEMBERS.iter().filter_map(|(_, v)| Self::from_wire(*v)).collect()
    }

    fn schema() -> EnumSchema {
        EnumSchema {
            name: Self::NAME,
            members: Self::MEMBERS,
        }
    }
}

/// What to do when a payload breaks an expectation that isn't part of the wire contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    Ignore,
    Warn,
    Reject,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodecOptions {
    /// Fields present in the payload but not declared by the record.
    pub unknown_fields: Policy,
    /// Page windows whose counts contradict each other or the returned data.
    pub pagination: Policy,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            unknown_fields: Policy::Ignore,
            pagination: Policy::Warn,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Codec {
    options: CodecOptions,
}

impl Codec {
    pub fn new(options: CodecOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CodecOptions {
        &self.options
    }

    pub fn decode<T: WireValue>(&self, raw: &Value) -> Result<T, DecodeError> {
        let name = T::wire_type().label();
        trace!("Decoding {}", name);
        let cx = Cursor::root(name, &self.options);
        T::decode_value(raw, &cx).map_err(|e| {
            debug!("Failed to decode {}: {}", name, e);
            e
        })
    }

    pub fn decode_str<T: WireValue>(&self, text: &str) -> Result<T, DecodeError> {
        let raw: Value = serde_json::from_str(text)?;
        self.decode(&raw)
    }

    pub fn decode_kind(&self, kind: EntityKind, raw: &Value) -> Result<Entity, DecodeError> {
        trace!("Decoding {}", kind.name());
        let cx = Cursor::root(kind.name(), &self.options);
        Entity::decode(kind, raw, &cx).map_err(|e| {
            debug!("Failed to decode {}: {}", kind.name(), e);
            e
        })
    }

    pub fn encode<T: WireValue>(&self, value: &T) -> Value {
        value.encode_value()
    }
}

pub fn decode<T: WireValue>(raw: &Value) -> Result<T, DecodeError> {
    Codec::default().decode(raw)
}

pub fn decode_kind(kind: EntityKind, raw: &Value) -> Result<Entity, DecodeError> {
    Codec::default().decode_kind(kind, raw)
}

pub fn encode<T: WireValue>(value: &T) -> Value {
    value.encode_value()
}

/* Checks that a record payload is an object and applies the unknown field policy.
 * Used by every record declaration before its fields are read. */
pub fn open_record<'v, R: Record>(raw: &'v Value, cx: &Cursor) -> Result<&'v Map<String, Value>, DecodeError> {
    let fields = match raw {
        Value::Object(fields) => fields,
        other => return Err(DecodeError::unexpected(cx, R::wire_type(), other)),
    };

    let policy = cx.options().unknown_fields;
    if policy != Policy::Ignore {
        for key in fields.keys() {
            if R::FIELDS.contains(&key.as_str()) {
                continue;
            }
            let path = cx.key(key).path();
            match policy {
                Policy::Reject => {
                    return Err(DecodeError::UnknownField {
                        entity: R::NAME,
                        field: key.clone(),
                        path,
                    })
                }
                _ => warn!("{} has undeclared field {:?} at {}", R::NAME, key, path),
            }
        }
    }
    Ok(fields)
}

pub fn decode_enum<E: WireEnum>(raw: &Value, cx: &Cursor) -> Result<E, DecodeError> {
    let value = match (raw.as_i64(), raw.as_u64()) {
        (Some(value), _) => value,
        // Above i64::MAX, so no member can have it.
        (None, Some(wide)) => return Err(DecodeError::unknown_enum(E::NAME, i128::from(wide), cx)),
        (None, None) => return Err(DecodeError::unexpected(cx, E::wire_type(), raw)),
    };
    E::from_wire(value).ok_or_else(|| DecodeError::unknown_enum(E::NAME, i128::from(value), cx))
}
