use super::{FileRelationType, FileReleaseType, FileStatus, HashAlgo, ModLoaderType};
use crate::codec::{Nullable, Timestamp};
use std::io;

wire_record! {
    pub struct File {
        id: i32 => "id",
        /// Game of the mod this file belongs to.
        game_id: i32 => "gameId",
        mod_id: i32 => "modId",
        is_available: bool => "isAvailable",
        display_name: String => "displayName",
        /// Exact file name.
        file_name: String => "fileName",
        release_type: FileReleaseType => "releaseType",
        file_status: FileStatus => "fileStatus",
        hashes: Vec<FileHash> => "hashes",
        file_date: Timestamp => "fileDate",
        /// In bytes.
        file_length: i64 => "fileLength",
        download_count: i64 => "downloadCount",
        download_url: String => "downloadUrl",
        game_versions: Vec<String> => "gameVersions",
        sortable_game_versions: Vec<SortableGameVersion> => "sortableGameVersions",
        dependencies: Vec<FileDependency> => "dependencies",
        expose_as_alternative: Nullable<bool> => "exposeAsAlternative",
        parent_project_file_id: Nullable<i32> => "parentProjectFileId",
        alternate_file_id: Nullable<i32> => "alternateFileId",
        is_server_pack: Nullable<bool> => "isServerPack",
        server_pack_file_id: Nullable<i32> => "serverPackFileId",
        file_fingerprint: i64 => "fileFingerprint",
        modules: Vec<FileModule> => "modules",
    }
}

wire_record! {
    pub struct FileDependency {
        mod_id: i32 => "modId",
        relation_type: FileRelationType => "relationType",
    }
}

wire_record! {
    pub struct FileHash {
        value: String => "value",
        algo: HashAlgo => "algo",
    }
}

wire_record! {
    /// Summary of one of a mod's latest files, per game version and loader.
    pub struct FileIndex {
        game_version: String => "gameVersion",
        file_id: i32 => "fileId",
        filename: String => "filename",
        release_type: FileReleaseType => "releaseType",
        game_version_type_id: Nullable<i32> => "gameVersionTypeId",
        mod_loader: ModLoaderType => "modLoader",
    }
}

wire_record! {
    pub struct FileModule {
        name: String => "name",
        fingerprint: i64 => "fingerprint",
    }
}

wire_record! {
    pub struct SortableGameVersion {
        /// Original version name, e.g. `1.5b`.
        game_version_name: String => "gameVersionName",
        /// Zero padded for sorting, e.g. `0000000001.0000000005`.
        game_version_padded: String => "gameVersionPadded",
        /// Clean version name, e.g. `1.5`.
        game_version: String => "gameVersion",
        game_version_release_date: Timestamp => "gameVersionReleaseDate",
        game_version_type_id: Nullable<i32> => "gameVersionTypeId",
    }
}

impl FileHash {
    pub fn matches(&self, data: &[u8]) -> bool {
        match self.algo.digest(&mut &data[..]) {
            Ok(digest) => digest.eq_ignore_ascii_case(&self.value),
            Err(_) => false,
        }
    }
}

impl File {
    /* Checks downloaded bytes against every hash the API declared.
     * A file without hashes can't be verified and is rejected. */
    pub fn verify(&self, data: &[u8]) -> Result<(), io::Error> {
        if self.hashes.is_empty() {
            return Err(io::Error::new(io::ErrorKind::InvalidData, format!("{} declares no hashes", self.file_name)));
        }
        for hash in &self.hashes {
            if !hash.matches(data) {
                log::warn!("{} failed {} verification", self.file_name, hash.algo);
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("{} hash mismatch for {}", hash.algo, self.file_name),
                ));
            }
        }
        Ok(())
    }

    pub fn is_server_pack(&self) -> bool {
        self.is_server_pack.get().unwrap_or(false)
    }

    pub fn required_dependencies(&self) -> impl Iterator<Item = &FileDependency> {
        self.dependencies
            .iter()
            .filter(|d| d.relation_type == FileRelationType::RequiredDependency)
    }
}
