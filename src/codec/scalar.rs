use super::{Cursor, DecodeError, WireValue};
use crate::schema::FieldType;
use indexmap::IndexMap;
use serde_json::{Map, Value};

/// String keys mapped to integer lists, kept verbatim and in received order.
pub type KeyedIntLists = IndexMap<String, Vec<i64>>;

impl WireValue for String {
    fn wire_type() -> FieldType {
        FieldType::String
    }

    fn decode_value(raw: &Value, cx: &Cursor) -> Result<Self, DecodeError> {
        match raw {
            Value::String(s) => Ok(s.clone()),
            other => Err(DecodeError::unexpected(cx, Self::wire_type(), other)),
        }
    }

    fn encode_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl WireValue for bool {
    fn wire_type() -> FieldType {
        FieldType::Boolean
    }

    fn decode_value(raw: &Value, cx: &Cursor) -> Result<Self, DecodeError> {
        match raw {
            Value::Bool(b) => Ok(*b),
            other => Err(DecodeError::unexpected(cx, Self::wire_type(), other)),
        }
    }

    fn encode_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl WireValue for i64 {
    fn wire_type() -> FieldType {
        FieldType::Int64
    }

    fn decode_value(raw: &Value, cx: &Cursor) -> Result<Self, DecodeError> {
        match raw.as_i64() {
            Some(n) => Ok(n),
            None if raw.is_u64() => Err(DecodeError::mismatch(cx, Self::wire_type(), "integer outside int64 range")),
            None => Err(DecodeError::unexpected(cx, Self::wire_type(), raw)),
        }
    }

    fn encode_value(&self) -> Value {
        Value::from(*self)
    }
}

impl WireValue for i32 {
    fn wire_type() -> FieldType {
        FieldType::Int32
    }

    fn decode_value(raw: &Value, cx: &Cursor) -> Result<Self, DecodeError> {
        let wide = match raw.as_i64() {
            Some(n) => n,
            None if raw.is_u64() => {
                return Err(DecodeError::mismatch(cx, Self::wire_type(), "integer outside int32 range"))
            }
            None => return Err(DecodeError::unexpected(cx, Self::wire_type(), raw)),
        };
        i32::try_from(wide).map_err(|_| DecodeError::mismatch(cx, Self::wire_type(), "integer outside int32 range"))
    }

    fn encode_value(&self) -> Value {
        Value::from(*self)
    }
}

impl<T: WireValue> WireValue for Vec<T> {
    fn wire_type() -> FieldType {
        FieldType::List(Box::new(T::wire_type()))
    }

    fn decode_value(raw: &Value, cx: &Cursor) -> Result<Self, DecodeError> {
        let items = match raw {
            Value::Array(items) => items,
            other => return Err(DecodeError::unexpected(cx, Self::wire_type(), other)),
        };
        let mut decoded = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            decoded.push(T::decode_value(item, &cx.index(i))?);
        }
        Ok(decoded)
    }

    fn encode_value(&self) -> Value {
        Value::Array(self.iter().map(T::encode_value).collect())
    }
}

impl WireValue for KeyedIntLists {
    fn wire_type() -> FieldType {
        FieldType::KeyedIntLists
    }

    fn decode_value(raw: &Value, cx: &Cursor) -> Result<Self, DecodeError> {
        let entries = match raw {
            Value::Object(entries) => entries,
            other => return Err(DecodeError::unexpected(cx, Self::wire_type(), other)),
        };
        let mut decoded = IndexMap::with_capacity(entries.len());
        for (key, list) in entries {
            decoded.insert(key.clone(), Vec::<i64>::decode_value(list, &cx.key(key))?);
        }
        Ok(decoded)
    }

    fn encode_value(&self) -> Value {
        let mut entries = Map::new();
        for (key, list) in self {
            entries.insert(key.clone(), list.encode_value());
        }
        Value::Object(entries)
    }
}

#[cfg(test)]
mod tests {
    use crate::codec::{decode, encode, DecodeError, KeyedIntLists};
    use crate::schema::FieldType;
    use serde_json::json;

    #[test]
    fn int32_rejects_wide_values() {
        let res = decode::<i32>(&json!(3_000_000_000u64));
        assert!(matches!(res, Err(DecodeError::TypeMismatch { expected: FieldType::Int32, .. })));
        let res = decode::<i32>(&json!(-3_000_000_000i64));
        assert!(matches!(res, Err(DecodeError::TypeMismatch { .. })));
        assert_eq!(decode::<i64>(&json!(3_000_000_000u64)).unwrap(), 3_000_000_000);
    }

    #[test]
    fn integers_reject_fractions_and_strings() {
        let res = decode::<i64>(&json!(1.5));
        assert!(matches!(res, Err(DecodeError::TypeMismatch { actual: "number", .. })));
        let res = decode::<i32>(&json!("12"));
        assert!(matches!(res, Err(DecodeError::TypeMismatch { actual: "string", .. })));
    }

    #[test]
    fn list_failure_names_the_element() {
        let err = decode::<Vec<String>>(&json!(["1.20.1", 7, "1.19"])).unwrap_err();
        assert_eq!(err.path().unwrap().to_string(), "[1]");
    }

    #[test]
    fn keyed_lists_pass_through() -> Result<(), DecodeError> {
        let raw = json!({"456": [4], "123": [1, 2, 3]});
        let lists: KeyedIntLists = decode(&raw)?;
        let keys: Vec<&String> = lists.keys().collect();
        assert_eq!(keys, vec!["456", "123"]);
        assert_eq!(lists["123"], vec![1, 2, 3]);
        assert_eq!(encode(&lists), raw);
        Ok(())
    }

    #[test]
    fn keyed_lists_check_members() {
        let err = decode::<KeyedIntLists>(&json!({"123": [1, "2"]})).unwrap_err();
        assert_eq!(err.path().unwrap().to_string(), "[\"123\"][1]");
    }
}
