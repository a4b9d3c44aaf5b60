use super::{
    Category, FeaturedModsResponse, File, FingerprintFuzzyMatchResult, FingerprintsMatchesResult, Game,
    GameVersionType, GameVersionsByType, MinecraftGameVersion, MinecraftModLoaderIndex, MinecraftModLoaderVersion, Mod,
};
use crate::codec::{Cursor, DecodeError, Policy, Record};
use log::warn;

wire_record! {
    /// One page window of a list endpoint.
    pub struct Pagination {
        /// Zero based index of the first returned item.
        index: i32 => "index",
        /// Requested number of items.
        page_size: i32 => "pageSize",
        /// Number of items actually returned.
        result_count: i32 => "resultCount",
        /// Number of items available to the request.
        total_count: i64 => "totalCount",
    }
}

impl Pagination {
    /// Describes the first way this window contradicts itself or the `returned` item count, if any.
    pub fn inconsistency(&self, returned: usize) -> Option<String> {
        if self.index < 0 || self.page_size < 0 || self.result_count < 0 || self.total_count < 0 {
            return Some("negative count".to_string());
        }
        if self.result_count > self.page_size {
            return Some(format!(
                "resultCount {} exceeds pageSize {}",
                self.result_count, self.page_size
            ));
        }
        if i64::from(self.index) + i64::from(self.result_count) > self.total_count {
            return Some(format!(
                "index {} + resultCount {} exceeds totalCount {}",
                self.index, self.result_count, self.total_count
            ));
        }
        if self.result_count as usize != returned {
            return Some(format!(
                "resultCount {} but {} items returned",
                self.result_count, returned
            ));
        }
        None
    }

    pub fn is_consistent(&self, returned: usize) -> bool {
        self.inconsistency(returned).is_none()
    }
}

/// An envelope carrying one page of a list.
pub trait Paginated: Record {
    fn pagination(&self) -> &Pagination;

    fn page_len(&self) -> usize;
}

fn check_page<P: Paginated>(page: &P, cx: &Cursor) -> Result<(), DecodeError> {
    let policy = cx.options().pagination;
    if policy == Policy::Ignore {
        return Ok(());
    }
    if let Some(reason) = page.pagination().inconsistency(page.page_len()) {
        let path = cx.path();
        match policy {
            Policy::Reject => {
                return Err(DecodeError::InconsistentPagination {
                    entity: P::NAME,
                    reason,
                    path,
                })
            }
            _ => warn!("{} pagination is inconsistent at {}: {}", P::NAME, path, reason),
        }
    }
    Ok(())
}

wire_record! {
    pub struct ApiResponseOfListOfMinecraftGameVersion {
        data: Vec<MinecraftGameVersion> => "data",
    }
}

wire_record! {
    pub struct ApiResponseOfListOfMinecraftModLoaderIndex {
        data: Vec<MinecraftModLoaderIndex> => "data",
    }
}

wire_record! {
    pub struct ApiResponseOfMinecraftGameVersion {
        data: MinecraftGameVersion => "data",
    }
}

wire_record! {
    pub struct ApiResponseOfMinecraftModLoaderVersion {
        data: MinecraftModLoaderVersion => "data",
    }
}

wire_record! {
    pub struct GetCategoriesResponse {
        data: Vec<Category> => "data",
    }
}

wire_record! {
    pub struct GetFeaturedModsResponse {
        data: FeaturedModsResponse => "data",
    }
}

wire_record! {
    pub struct GetFilesResponse {
        data: Vec<File> => "data",
    }
}

wire_record! {
    pub struct GetFingerprintMatchesResponse {
        data: FingerprintsMatchesResult => "data",
    }
}

wire_record! {
    pub struct GetFingerprintsFuzzyMatchesResponse {
        data: FingerprintFuzzyMatchResult => "data",
    }
}

wire_record! {
    pub struct GetGameResponse {
        data: Game => "data",
    }
}

wire_record! {
    pub struct GetGamesResponse {
        data: Vec<Game> => "data",
        pagination: Pagination => "pagination",
    }
    check = check_page;
}

wire_record! {
    pub struct GetModFileResponse {
        data: File => "data",
    }
}

wire_record! {
    pub struct GetModFilesResponse {
        data: Vec<File> => "data",
        pagination: Pagination => "pagination",
    }
    check = check_page;
}

wire_record! {
    pub struct GetModResponse {
        data: Mod => "data",
    }
}

wire_record! {
    pub struct GetModsResponse {
        data: Vec<Mod> => "data",
    }
}

wire_record! {
    pub struct GetVersionTypesResponse {
        data: Vec<GameVersionType> => "data",
    }
}

wire_record! {
    pub struct GetVersionsResponse {
        data: Vec<GameVersionsByType> => "data",
    }
}

wire_record! {
    pub struct SearchModsResponse {
        data: Vec<Mod> => "data",
        pagination: Pagination => "pagination",
    }
    check = check_page;
}

wire_record! {
    pub struct StringResponse {
        data: String => "data",
    }
}

impl Paginated for GetGamesResponse {
    fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    fn page_len(&self) -> usize {
        self.data.len()
    }
}

impl Paginated for GetModFilesResponse {
    fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    fn page_len(&self) -> usize {
        self.data.len()
    }
}

impl Paginated for SearchModsResponse {
    fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    fn page_len(&self) -> usize {
        self.data.len()
    }
}
