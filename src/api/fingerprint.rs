use super::File;
use crate::codec::KeyedIntLists;

wire_record! {
    pub struct FingerprintFuzzyMatch {
        id: i32 => "id",
        file: File => "file",
        latest_files: Vec<File> => "latestFiles",
        fingerprints: Vec<i64> => "fingerprints",
    }
}

wire_record! {
    pub struct FingerprintFuzzyMatchResult {
        fuzzy_matches: Vec<FingerprintFuzzyMatch> => "fuzzyMatches",
    }
}

wire_record! {
    pub struct FingerprintMatch {
        id: i32 => "id",
        file: File => "file",
        latest_files: Vec<File> => "latestFiles",
    }
}

wire_record! {
    pub struct FingerprintsMatchesResult {
        is_cache_built: bool => "isCacheBuilt",
        exact_matches: Vec<FingerprintMatch> => "exactMatches",
        exact_fingerprints: Vec<i64> => "exactFingerprints",
        partial_matches: Vec<FingerprintMatch> => "partialMatches",
        /// Keys are passed through as received.
        partial_match_fingerprints: KeyedIntLists => "partialMatchFingerprints",
        installed_fingerprints: Vec<i64> => "installedFingerprints",
        unmatched_fingerprints: Vec<i64> => "unmatchedFingerprints",
    }
}

wire_record! {
    pub struct FolderFingerprint {
        foldername: String => "foldername",
        fingerprints: Vec<i64> => "fingerprints",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode, encode, DecodeError};
    use serde_json::json;

    #[test]
    fn partial_matches_pass_through() -> Result<(), DecodeError> {
        let raw = json!({
            "isCacheBuilt": true,
            "exactMatches": [],
            "exactFingerprints": [],
            "partialMatches": [],
            "partialMatchFingerprints": {"123": [1, 2, 3], "456": [4]},
            "installedFingerprints": [3089143260i64],
            "unmatchedFingerprints": [3089143260i64, 1]
        });
        let result: FingerprintsMatchesResult = decode(&raw)?;
        assert_eq!(result.partial_match_fingerprints.len(), 2);
        assert_eq!(result.partial_match_fingerprints["123"], vec![1, 2, 3]);
        assert_eq!(result.partial_match_fingerprints["456"], vec![4]);
        assert_eq!(result.unmatched_fingerprints, vec![3089143260, 1]);
        assert_eq!(encode(&result), raw);
        Ok(())
    }

    #[test]
    fn keyed_lists_are_required() {
        let raw = json!({
            "isCacheBuilt": false,
            "exactMatches": [],
            "exactFingerprints": [],
            "partialMatches": [],
            "installedFingerprints": [],
            "unmatchedFingerprints": []
        });
        assert!(matches!(
            decode::<FingerprintsMatchesResult>(&raw),
            Err(DecodeError::MissingField { field: "partialMatchFingerprints", .. })
        ));
    }

    #[test]
    fn folder_fingerprints_encode_in_order() {
        let folder = FolderFingerprint {
            foldername: "mods".to_string(),
            fingerprints: vec![3, 1, 2],
        };
        assert_eq!(encode(&folder), json!({"foldername": "mods", "fingerprints": [3, 1, 2]}));
    }
}
