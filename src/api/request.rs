use super::FolderFingerprint;
use crate::codec::Nullable;

wire_record! {
    pub struct GetFeaturedModsRequestBody {
        game_id: i32 => "gameId",
        excluded_mod_ids: Vec<i32> => "excludedModIds",
        game_version_type_id: Nullable<i32> => "gameVersionTypeId",
    }
}

wire_record! {
    pub struct GetFilesRequestBody {
        file_ids: Vec<i32> => "fileIds",
    }
}

wire_record! {
    pub struct GetFingerprintMatchesRequestBody {
        fingerprints: Vec<i64> => "fingerprints",
    }
}

wire_record! {
    pub struct GetFuzzyMatchesRequestBody {
        game_id: i32 => "gameId",
        fingerprints: Vec<FolderFingerprint> => "fingerprints",
    }
}

wire_record! {
    pub struct GetModFilesRequestBody {
        file_ids: Vec<i32> => "fileIds",
    }
}

wire_record! {
    pub struct GetModsByIdsListRequestBody {
        mod_ids: Vec<i32> => "modIds",
    }
}
