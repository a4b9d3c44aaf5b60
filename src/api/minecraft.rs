use super::{GameVersionStatus, GameVersionTypeStatus, ModLoaderInstallMethod, ModLoaderType};
use crate::codec::Timestamp;

wire_record! {
    pub struct MinecraftGameVersion {
        id: i32 => "id",
        game_version_id: i32 => "gameVersionId",
        version_string: String => "versionString",
        jar_download_url: String => "jarDownloadUrl",
        json_download_url: String => "jsonDownloadUrl",
        approved: bool => "approved",
        date_modified: Timestamp => "dateModified",
        game_version_type_id: i32 => "gameVersionTypeId",
        game_version_status: GameVersionStatus => "gameVersionStatus",
        game_version_type_status: GameVersionTypeStatus => "gameVersionTypeStatus",
    }
}

wire_record! {
    pub struct MinecraftModLoaderIndex {
        name: String => "name",
        game_version: String => "gameVersion",
        latest: bool => "latest",
        recommended: bool => "recommended",
        date_modified: Timestamp => "dateModified",
        loader_type: ModLoaderType => "type",
    }
}

wire_record! {
    /// Full install metadata of one mod loader build.
    pub struct MinecraftModLoaderVersion {
        id: i32 => "id",
        game_version_id: i32 => "gameVersionId",
        minecraft_game_version_id: i32 => "minecraftGameVersionId",
        forge_version: String => "forgeVersion",
        name: String => "name",
        loader_type: ModLoaderType => "type",
        download_url: String => "downloadUrl",
        filename: String => "filename",
        install_method: ModLoaderInstallMethod => "installMethod",
        latest: bool => "latest",
        recommended: bool => "recommended",
        approved: bool => "approved",
        date_modified: Timestamp => "dateModified",
        maven_version_string: String => "mavenVersionString",
        /// Embedded JSON document, kept as text.
        version_json: String => "versionJson",
        libraries_install_location: String => "librariesInstallLocation",
        minecraft_version: String => "minecraftVersion",
        additional_files_json: String => "additionalFilesJson",
        mod_loader_game_version_id: i32 => "modLoaderGameVersionId",
        mod_loader_game_version_type_id: i32 => "modLoaderGameVersionTypeId",
        mod_loader_game_version_status: GameVersionStatus => "modLoaderGameVersionStatus",
        mod_loader_game_version_type_status: GameVersionTypeStatus => "modLoaderGameVersionTypeStatus",
        mc_game_version_id: i32 => "mcGameVersionId",
        mc_game_version_type_id: i32 => "mcGameVersionTypeId",
        mc_game_version_status: GameVersionStatus => "mcGameVersionStatus",
        mc_game_version_type_status: GameVersionTypeStatus => "mcGameVersionTypeStatus",
        install_profile_json: String => "installProfileJson",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode, encode, DecodeError};
    use crate::test::fixture;
    use serde_json::json;

    #[test]
    fn game_version() -> Result<(), DecodeError> {
        let raw = fixture("minecraft_game_version.json");
        let version: MinecraftGameVersion = decode(&raw)?;
        assert_eq!(version.game_version_id, 9990);
        assert!(version.approved);
        assert_eq!(version.game_version_status, GameVersionStatus::Approved);
        assert_eq!(version.game_version_type_status, GameVersionTypeStatus::Normal);
        assert_eq!(encode(&version), raw);
        Ok(())
    }

    #[test]
    fn loader_version() -> Result<(), DecodeError> {
        let raw = fixture("minecraft_mod_loader_version.json");
        let forge: MinecraftModLoaderVersion = decode(&raw)?;
        assert_eq!(forge.loader_type, ModLoaderType::Forge);
        assert_eq!(forge.install_method, ModLoaderInstallMethod::ForgeInstallerV2);
        assert_eq!(forge.version_json, r#"{"id": "1.20.1-forge-47.2.0"}"#);
        assert_eq!(forge.mc_game_version_type_id, 75125);
        assert_eq!(encode(&forge), raw);
        Ok(())
    }

    #[test]
    fn loader_version_keeps_embedded_json_as_text() {
        let mut raw = fixture("minecraft_mod_loader_version.json");
        raw["versionJson"] = json!({"id": "1.20.1-forge-47.2.0"});
        match decode::<MinecraftModLoaderVersion>(&raw) {
            Err(DecodeError::TypeMismatch { field, actual, .. }) => {
                assert_eq!(field, "versionJson");
                assert_eq!(actual, "object");
            }
            res => panic!("unexpected result: {:?}", res),
        }
    }

    #[test]
    fn loader_index() -> Result<(), DecodeError> {
        let raw = json!({
            "name": "forge-47.2.0",
            "gameVersion": "1.20.1",
            "latest": false,
            "recommended": true,
            "dateModified": "2023-09-28T20:14:20.36Z",
            "type": 1
        });
        let index: MinecraftModLoaderIndex = decode(&raw)?;
        assert_eq!(index.loader_type, ModLoaderType::Forge);
        assert!(index.recommended);
        Ok(())
    }

    #[test]
    fn bool_is_not_an_integer() {
        let raw = json!({
            "name": "fabric-0.14.22",
            "gameVersion": "1.20.1",
            "latest": 1,
            "recommended": false,
            "dateModified": "2023-09-28T20:14:20.36Z",
            "type": 4
        });
        match decode::<MinecraftModLoaderIndex>(&raw) {
            Err(DecodeError::TypeMismatch { field, actual, .. }) => {
                assert_eq!(field, "latest");
                assert_eq!(actual, "integer");
            }
            res => panic!("unexpected result: {:?}", res),
        }
    }
}
