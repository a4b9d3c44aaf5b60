/* Declaration macros for the entity catalogue.
 *
 * Every enum and record is declared exactly once. The declaration yields the Rust type, its entry in the schema
 * registry, its codec implementation and its serde bridge, so the type and the schema can't drift apart.
 */

/// Declares a closed set of integer codes with symbolic names.
///
/// A member may carry an explicit wire label with `as "Label"` when the API name isn't a valid Rust identifier.
macro_rules! wire_enum {
    (@label $variant:ident) => {
        stringify!($variant)
    };
    (@label $variant:ident, $label:literal) => {
        $label
    };
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $value:literal $(as $label:literal)? ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $value, )+
        }

        impl $crate::codec::WireEnum for $name {
            const NAME: &'static str = stringify!($name);
            const MEMBERS: &'static [(&'static str, i64)] = &[ $( (wire_enum!(@label $variant $(, $label)?), $value) ),+ ];

            fn from_wire(value: i64) -> Option<Self> {
                match value {
                    $( $value => Some($name::$variant), )+
                    _ => None,
                }
            }

            fn wire_value(self) -> i64 {
                match self {
                    $( $name::$variant => $value, )+
                }
            }
        }

        impl $crate::codec::WireValue for $name {
            fn wire_type() -> $crate::schema::FieldType {
                $crate::schema::FieldType::Enum(stringify!($name))
            }

            fn decode_value(
                raw: &::serde_json::Value,
                cx: &$crate::codec::Cursor,
            ) -> Result<Self, $crate::codec::DecodeError> {
                $crate::codec::decode_enum(raw, cx)
            }

            fn encode_value(&self) -> ::serde_json::Value {
                ::serde_json::Value::from($crate::codec::WireEnum::wire_value(*self))
            }
        }

        impl ::std::convert::TryFrom<i64> for $name {
            type Error = $crate::codec::DecodeError;

            fn try_from(value: i64) -> Result<Self, Self::Error> {
                $crate::codec::decode(&::serde_json::Value::from(value))
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                f.write_str($crate::codec::WireEnum::name(*self))
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_i64($crate::codec::WireEnum::wire_value(*self))
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = <::serde_json::Value as ::serde::Deserialize>::deserialize(deserializer)?;
                $crate::codec::decode(&raw).map_err(::serde::de::Error::custom)
            }
        }
    };
}

/// Declares a record entity. Each field names its wire key after `=>`; fields typed `Nullable<T>` are optional.
///
/// An optional trailing `check = path;` runs a whole-record check after every field decoded successfully.
macro_rules! wire_record {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $( $(#[$fmeta:meta])* $field:ident: $ty:ty => $wire:literal ),+ $(,)?
        }
        $(check = $check:path;)?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        pub struct $name {
            $( $(#[$fmeta])* pub $field: $ty, )+
        }

        impl $crate::codec::Record for $name {
            const NAME: &'static str = stringify!($name);
            const FIELDS: &'static [&'static str] = &[ $($wire),+ ];

            fn schema() -> $crate::schema::RecordSchema {
                $crate::schema::RecordSchema {
                    name: stringify!($name),
                    fields: vec![
                        $( $crate::schema::FieldDef {
                            name: $wire,
                            ty: <$ty as $crate::codec::WireValue>::wire_type(),
                            optional: <$ty as $crate::codec::WireValue>::is_optional(),
                        }, )+
                    ],
                }
            }
        }

        impl $crate::codec::WireValue for $name {
            fn wire_type() -> $crate::schema::FieldType {
                $crate::schema::FieldType::Record(stringify!($name))
            }

            fn decode_value(
                raw: &::serde_json::Value,
                cx: &$crate::codec::Cursor,
            ) -> Result<Self, $crate::codec::DecodeError> {
                let fields = $crate::codec::open_record::<Self>(raw, cx)?;
                let decoded = Self {
                    $( $field: <$ty as $crate::codec::WireValue>::decode_slot(
                        fields.get($wire),
                        &cx.field(stringify!($name), $wire),
                    )?, )+
                };
                $( $check(&decoded, cx)?; )?
                Ok(decoded)
            }

            fn encode_value(&self) -> ::serde_json::Value {
                let mut fields = ::serde_json::Map::new();
                $( <$ty as $crate::codec::WireValue>::encode_slot(&self.$field, $wire, &mut fields); )+
                ::serde_json::Value::Object(fields)
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                ::serde::Serialize::serialize(&$crate::codec::WireValue::encode_value(self), serializer)
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = <::serde_json::Value as ::serde::Deserialize>::deserialize(deserializer)?;
                $crate::codec::decode(&raw).map_err(::serde::de::Error::custom)
            }
        }
    };
}

/// Declares the closed set of entity kinds: the `EntityKind` selector and the `Entity` tagged union.
macro_rules! entity_kinds {
    (
        records { $($record:ident),+ $(,)? }
        enums { $($enumeration:ident),+ $(,)? }
    ) => {
        /// Selects one record or enum shape of the catalogue.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum EntityKind {
            $( $record, )+
            $( $enumeration, )+
        }

        /// A decoded value of any kind, tagged with its kind.
        #[derive(Clone, Debug, PartialEq)]
        pub enum Entity {
            $( $record($record), )+
            $( $enumeration($enumeration), )+
        }

        impl EntityKind {
            pub const ALL: &'static [EntityKind] = &[
                $( EntityKind::$record, )+
                $( EntityKind::$enumeration, )+
            ];

            pub fn name(self) -> &'static str {
                match self {
                    $( EntityKind::$record => stringify!($record), )+
                    $( EntityKind::$enumeration => stringify!($enumeration), )+
                }
            }

            pub fn is_enum(self) -> bool {
                matches!(self, $( EntityKind::$enumeration )|+)
            }

            pub fn schema(self) -> $crate::schema::KindSchema {
                match self {
                    $( EntityKind::$record => $crate::schema::KindSchema::Record(
                        <$record as $crate::codec::Record>::schema(),
                    ), )+
                    $( EntityKind::$enumeration => $crate::schema::KindSchema::Enum(
                        <$enumeration as $crate::codec::WireEnum>::schema(),
                    ), )+
                }
            }
        }

        impl ::std::str::FromStr for EntityKind {
            type Err = UnknownKind;

            fn from_str(name: &str) -> Result<Self, Self::Err> {
                match name {
                    $( stringify!($record) => Ok(EntityKind::$record), )+
                    $( stringify!($enumeration) => Ok(EntityKind::$enumeration), )+
                    _ => Err(UnknownKind(name.to_string())),
                }
            }
        }

        impl Entity {
            pub fn kind(&self) -> EntityKind {
                match self {
                    $( Entity::$record(_) => EntityKind::$record, )+
                    $( Entity::$enumeration(_) => EntityKind::$enumeration, )+
                }
            }

            pub(crate) fn decode(
                kind: EntityKind,
                raw: &::serde_json::Value,
                cx: &$crate::codec::Cursor,
            ) -> Result<Self, $crate::codec::DecodeError> {
                use $crate::codec::WireValue;
                match kind {
                    $( EntityKind::$record => $record::decode_value(raw, cx).map(Entity::$record), )+
                    $( EntityKind::$enumeration => $enumeration::decode_value(raw, cx).map(Entity::$enumeration), )+
                }
            }

            pub fn encode(&self) -> ::serde_json::Value {
                use $crate::codec::WireValue;
                match self {
                    $( Entity::$record(v) => v.encode_value(), )+
                    $( Entity::$enumeration(v) => v.encode_value(), )+
                }
            }
        }
    };
}
