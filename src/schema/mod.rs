//! The catalogue of every record and enum shape, built once and read-only afterwards.

use crate::api::EntityKind;
use indexmap::IndexMap;
use std::fmt;
use std::sync::OnceLock;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldType {
    String,
    Int32,
    Int64,
    Boolean,
    Timestamp,
    Record(&'static str),
    Enum(&'static str),
    List(Box<FieldType>),
    KeyedIntLists,
}

impl FieldType {
    /// Short name, used to label decode roots.
    pub fn label(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Int32 => "int32",
            FieldType::Int64 => "int64",
            FieldType::Boolean => "boolean",
            FieldType::Timestamp => "date-time",
            FieldType::Record(name) | FieldType::Enum(name) => *name,
            FieldType::List(_) => "list",
            FieldType::KeyedIntLists => "keyed int lists",
        }
    }

    /// The record or enum this type refers to, looking through lists.
    pub fn referenced(&self) -> Option<&'static str> {
        match self {
            FieldType::Record(name) | FieldType::Enum(name) => Some(*name),
            FieldType::List(inner) => inner.referenced(),
            _ => None,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FieldType::List(inner) => write!(f, "[{}]", inner),
            FieldType::KeyedIntLists => f.write_str("{string: [int64]}"),
            other => f.write_str(other.label()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDef {
    pub name: &'static str,
    pub ty: FieldType,
    pub optional: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordSchema {
    pub name: &'static str,
    /// In declared order, which is also the encoding order.
    pub fields: Vec<FieldDef>,
}

impl RecordSchema {
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter().filter(|f| !f.optional)
    }

    pub fn optional_fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter().filter(|f| f.optional)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumSchema {
    pub name: &'static str,
    pub members: &'static [(&'static str, i64)],
}

impl EnumSchema {
    pub fn name_of(&self, value: i64) -> Option<&'static str> {
        self.members.iter().find(|(_, v)| *v == value).map(|(name, _)| *name)
    }

    pub fn value_of(&self, name: &str) -> Option<i64> {
        self.members.iter().find(|(n, _)| *n == name).map(|(_, v)| *v)
    }

    pub fn contains(&self, value: i64) -> bool {
        self.name_of(value).is_some()
    }
}

pub enum KindSchema {
    Record(RecordSchema),
    Enum(EnumSchema),
}

/// A reference from a record field to a shape the registry doesn't know.
#[derive(Debug, PartialEq, Eq)]
pub struct DanglingRef {
    pub record: &'static str,
    pub field: &'static str,
    pub target: &'static str,
}

pub struct Registry {
    records: IndexMap<&'static str, RecordSchema>,
    enums: IndexMap<&'static str, EnumSchema>,
}

impl Registry {
    pub fn global() -> &'static Registry {
        static REGISTRY: OnceLock<Registry> = OnceLock::new();
        REGISTRY.get_or_init(Registry::build)
    }

    fn build() -> Self {
        let mut records = IndexMap::new();
        let mut enums = IndexMap::new();
        for kind in EntityKind::ALL {
            match kind.schema() {
                KindSchema::Record(schema) => {
                    records.insert(schema.name, schema);
                }
                KindSchema::Enum(schema) => {
                    enums.insert(schema.name, schema);
                }
            }
        }
        log::debug!("Schema registry holds {} records and {} enums", records.len(), enums.len());
        Self { records, enums }
    }

    pub fn record(&self, name: &str) -> Option<&RecordSchema> {
        self.records.get(name)
    }

    pub fn enumeration(&self, name: &str) -> Option<&EnumSchema> {
        self.enums.get(name)
    }

    pub fn records(&self) -> impl Iterator<Item = &RecordSchema> {
        self.records.values()
    }

    pub fn enums(&self) -> impl Iterator<Item = &EnumSchema> {
        self.enums.values()
    }

    /// Field types that name a record or enum missing from the registry. Empty for a sound catalogue.
    pub fn dangling_refs(&self) -> Vec<DanglingRef> {
        let mut dangling = Vec::new();
        for record in self.records.values() {
            for field in &record.fields {
                let resolves = match &field.ty {
                    FieldType::Record(name) => self.records.contains_key(name),
                    FieldType::Enum(name) => self.enums.contains_key(name),
                    FieldType::List(inner) => match inner.as_ref() {
                        FieldType::Record(name) => self.records.contains_key(name),
                        FieldType::Enum(name) => self.enums.contains_key(name),
                        _ => true,
                    },
                    _ => true,
                };
                if !resolves {
                    if let Some(target) = field.ty.referenced() {
                        dangling.push(DanglingRef {
                            record: record.name,
                            field: field.name,
                            target,
                        });
                    }
                }
            }
        }
        dangling
    }
}

#[cfg(test)]
mod tests {
    use super::{FieldType, Registry};

    #[test]
    fn catalogue_is_closed() {
        let registry = Registry::global();
        assert!(registry.dangling_refs().is_empty());
        assert_eq!(registry.enums().count(), 12);
        assert!(registry.records().count() >= 45);
    }

    #[test]
    fn category_layout() {
        let category = Registry::global().record("Category").unwrap();
        let names: Vec<&str> = category.fields.iter().map(|f| f.name).collect();
        assert_eq!(
            names,
            vec![
                "id",
                "gameId",
                "name",
                "slug",
                "url",
                "iconUrl",
                "dateModified",
                "isClass",
                "classId",
                "parentCategoryId",
                "displayIndex"
            ]
        );
        assert_eq!(category.required_fields().count(), 7);
        assert_eq!(category.field("dateModified").unwrap().ty, FieldType::Timestamp);
        assert!(category.field("isClass").unwrap().optional);
    }

    #[test]
    fn nested_types_render() {
        let file = Registry::global().record("File").unwrap();
        assert_eq!(file.field("hashes").unwrap().ty.to_string(), "[FileHash]");
        assert_eq!(file.field("releaseType").unwrap().ty, FieldType::Enum("FileReleaseType"));
        let result = Registry::global().record("FingerprintsMatchesResult").unwrap();
        assert_eq!(
            result.field("partialMatchFingerprints").unwrap().ty,
            FieldType::KeyedIntLists
        );
    }

    #[test]
    fn enum_tables() {
        let loader = Registry::global().enumeration("ModLoaderType").unwrap();
        assert_eq!(loader.name_of(0), Some("Any"));
        assert_eq!(loader.value_of("Quilt"), Some(5));
        assert!(!loader.contains(6));
        let install = Registry::global().enumeration("ModLoaderInstallMethod").unwrap();
        assert_eq!(install.name_of(3), Some("ForgeInstaller_v2"));
    }
}
