use super::*;
use std::error::Error;
use std::fmt;

entity_kinds! {
    records {
        Category,
        File,
        FileDependency,
        FileHash,
        FileIndex,
        FileModule,
        SortableGameVersion,
        FingerprintFuzzyMatch,
        FingerprintFuzzyMatchResult,
        FingerprintMatch,
        FingerprintsMatchesResult,
        FolderFingerprint,
        Game,
        GameAssets,
        GameVersionsByType,
        GameVersionType,
        MinecraftGameVersion,
        MinecraftModLoaderIndex,
        MinecraftModLoaderVersion,
        Mod,
        ModAsset,
        ModAuthor,
        ModLinks,
        FeaturedModsResponse,
        Pagination,
        ApiResponseOfListOfMinecraftGameVersion,
        ApiResponseOfListOfMinecraftModLoaderIndex,
        ApiResponseOfMinecraftGameVersion,
        ApiResponseOfMinecraftModLoaderVersion,
        GetCategoriesResponse,
        GetFeaturedModsResponse,
        GetFilesResponse,
        GetFingerprintMatchesResponse,
        GetFingerprintsFuzzyMatchesResponse,
        GetGameResponse,
        GetGamesResponse,
        GetModFileResponse,
        GetModFilesResponse,
        GetModResponse,
        GetModsResponse,
        GetVersionTypesResponse,
        GetVersionsResponse,
        SearchModsResponse,
        StringResponse,
        GetFeaturedModsRequestBody,
        GetFilesRequestBody,
        GetFingerprintMatchesRequestBody,
        GetFuzzyMatchesRequestBody,
        GetModFilesRequestBody,
        GetModsByIdsListRequestBody,
    }
    enums {
        CoreApiStatus,
        CoreStatus,
        FileRelationType,
        FileReleaseType,
        FileStatus,
        GameVersionStatus,
        GameVersionTypeStatus,
        HashAlgo,
        ModLoaderInstallMethod,
        ModLoaderType,
        ModSearchSortField,
        ModStatus,
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownKind(pub String);

impl Error for UnknownKind {}

impl fmt::Display for UnknownKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "no entity kind named {:?}", self.0)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::{Entity, EntityKind, UnknownKind};
    use crate::codec::{decode_kind, DecodeError, Nullable};
    use crate::schema::Registry;
    use crate::test::fixture;
    use serde_json::{json, Value};

    // One complete payload per kind, taken from the fixtures.
    fn samples() -> Vec<(EntityKind, Value)> {
        let search = fixture("search_mods.json");
        let journeymap = &search["data"][1];
        vec![
            (EntityKind::SearchModsResponse, search.clone()),
            (EntityKind::Pagination, search["pagination"].clone()),
            (EntityKind::Mod, journeymap.clone()),
            (EntityKind::ModLinks, journeymap["links"].clone()),
            (EntityKind::ModAuthor, journeymap["authors"][0].clone()),
            (EntityKind::ModAsset, journeymap["logo"].clone()),
            (EntityKind::Category, journeymap["categories"][0].clone()),
            (EntityKind::File, journeymap["latestFiles"][0].clone()),
            (EntityKind::FileHash, journeymap["latestFiles"][0]["hashes"][0].clone()),
            (EntityKind::FileDependency, journeymap["latestFiles"][0]["dependencies"][0].clone()),
            (EntityKind::FileModule, journeymap["latestFiles"][0]["modules"][0].clone()),
            (EntityKind::SortableGameVersion, journeymap["latestFiles"][0]["sortableGameVersions"][0].clone()),
            (EntityKind::FileIndex, journeymap["latestFilesIndexes"][0].clone()),
            (EntityKind::GetModResponse, fixture("mod.json")),
            (EntityKind::Game, fixture("game.json")),
            (EntityKind::GameAssets, fixture("game.json")["assets"].clone()),
            (EntityKind::MinecraftGameVersion, fixture("minecraft_game_version.json")),
            (EntityKind::MinecraftModLoaderVersion, fixture("minecraft_mod_loader_version.json")),
        ]
    }

    #[test]
    fn samples_round_trip() -> Result<(), DecodeError> {
        for (kind, raw) in samples() {
            let entity = decode_kind(kind, &raw)?;
            assert_eq!(entity.kind(), kind);
            assert_eq!(entity.encode(), raw, "{}", kind);
        }
        Ok(())
    }

    #[test]
    fn every_required_field_is_enforced() {
        for (kind, raw) in samples() {
            let schema = Registry::global().record(kind.name()).unwrap();
            for field in schema.required_fields() {
                let mut partial = raw.clone();
                partial.as_object_mut().unwrap().remove(field.name);
                match decode_kind(kind, &partial) {
                    Err(DecodeError::MissingField { entity, field: missing, path }) => {
                        assert_eq!(entity, kind.name());
                        assert_eq!(missing, field.name);
                        assert_eq!(path.to_string(), field.name);
                    }
                    res => panic!("{} decoded without {}: {:?}", kind, field.name, res),
                }
            }
        }
    }

    #[test]
    fn optional_fields_may_all_be_left_out() -> Result<(), DecodeError> {
        for (kind, raw) in samples() {
            let schema = Registry::global().record(kind.name()).unwrap();
            let mut bare = raw.clone();
            for field in schema.optional_fields() {
                bare.as_object_mut().unwrap().remove(field.name);
            }
            let encoded = decode_kind(kind, &bare)?.encode();
            for field in schema.optional_fields() {
                assert!(encoded.get(field.name).is_none(), "{}.{}", kind, field.name);
            }
            assert_eq!(encoded, bare);
        }
        Ok(())
    }

    #[test]
    fn kinds_cover_the_registry() {
        let registry = Registry::global();
        for kind in EntityKind::ALL {
            if kind.is_enum() {
                assert!(registry.enumeration(kind.name()).is_some(), "{}", kind);
            } else {
                assert!(registry.record(kind.name()).is_some(), "{}", kind);
            }
        }
        assert_eq!(EntityKind::ALL.len(), registry.records().count() + registry.enums().count());
    }

    #[test]
    fn kinds_parse_by_name() {
        assert_eq!("SearchModsResponse".parse::<EntityKind>(), Ok(EntityKind::SearchModsResponse));
        assert_eq!("mod".parse::<EntityKind>(), Err(UnknownKind("mod".to_string())));
    }

    #[test]
    fn decode_by_kind() -> Result<(), DecodeError> {
        let status = decode_kind(EntityKind::ModStatus, &json!(4))?;
        assert_eq!(status, Entity::ModStatus(super::ModStatus::Approved));
        assert_eq!(status.kind(), EntityKind::ModStatus);

        let raw = json!({"id": 1, "gameId": 432, "name": "n", "slug": "s"});
        let version_type = decode_kind(EntityKind::GameVersionType, &raw)?;
        assert_eq!(version_type.encode(), raw);

        let raw = json!({"gameVersionName": "1.5b", "gameVersionPadded": "p", "gameVersion": "1.5",
                         "gameVersionReleaseDate": "2013-03-13T00:00:00"});
        match decode_kind(EntityKind::SortableGameVersion, &raw)? {
            Entity::SortableGameVersion(v) => assert_eq!(v.game_version_type_id, Nullable::Absent),
            other => panic!("wrong kind: {:?}", other.kind()),
        }
        Ok(())
    }

    #[test]
    fn records_reject_non_objects() {
        match decode_kind(EntityKind::Mod, &json!([1, 2])) {
            Err(DecodeError::TypeMismatch { entity, actual, path, .. }) => {
                assert_eq!(entity, "Mod");
                assert_eq!(actual, "array");
                assert!(path.is_root());
            }
            res => panic!("unexpected result: {:?}", res),
        }
    }
}
