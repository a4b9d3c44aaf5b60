use super::{Category, File, FileIndex, ModStatus};
use crate::codec::{Nullable, Timestamp};

wire_record! {
    pub struct Mod {
        id: i32 => "id",
        game_id: i32 => "gameId",
        name: String => "name",
        slug: String => "slug",
        /// Website, wiki, issue tracker and source links.
        links: ModLinks => "links",
        summary: String => "summary",
        status: ModStatus => "status",
        download_count: i64 => "downloadCount",
        is_featured: bool => "isFeatured",
        /// The main category as chosen by the author.
        primary_category_id: i32 => "primaryCategoryId",
        categories: Vec<Category> => "categories",
        class_id: Nullable<i32> => "classId",
        authors: Vec<ModAuthor> => "authors",
        logo: ModAsset => "logo",
        screenshots: Vec<ModAsset> => "screenshots",
        main_file_id: i32 => "mainFileId",
        latest_files: Vec<File> => "latestFiles",
        latest_files_indexes: Vec<FileIndex> => "latestFilesIndexes",
        date_created: Timestamp => "dateCreated",
        date_modified: Timestamp => "dateModified",
        date_released: Timestamp => "dateReleased",
        allow_mod_distribution: Nullable<bool> => "allowModDistribution",
        game_popularity_rank: i32 => "gamePopularityRank",
        /// False for experimental or deleted mods, and for mods with only alpha files.
        is_available: bool => "isAvailable",
        thumbs_up_count: i32 => "thumbsUpCount",
    }
}

wire_record! {
    pub struct ModAsset {
        id: i32 => "id",
        mod_id: i32 => "modId",
        title: String => "title",
        description: String => "description",
        thumbnail_url: String => "thumbnailUrl",
        url: String => "url",
    }
}

wire_record! {
    pub struct ModAuthor {
        id: i32 => "id",
        name: String => "name",
        url: String => "url",
    }
}

wire_record! {
    pub struct ModLinks {
        website_url: String => "websiteUrl",
        wiki_url: String => "wikiUrl",
        issues_url: String => "issuesUrl",
        source_url: String => "sourceUrl",
    }
}

wire_record! {
    pub struct FeaturedModsResponse {
        featured: Vec<Mod> => "featured",
        popular: Vec<Mod> => "popular",
        recently_updated: Vec<Mod> => "recentlyUpdated",
    }
}

impl Mod {
    pub fn main_file(&self) -> Option<&File> {
        self.latest_files.iter().find(|f| f.id == self.main_file_id)
    }
}
