use super::{CoreApiStatus, CoreStatus};
use crate::codec::{Nullable, Timestamp};

wire_record! {
    pub struct Category {
        id: i32 => "id",
        game_id: i32 => "gameId",
        name: String => "name",
        /// As it appears in the URL.
        slug: String => "slug",
        url: String => "url",
        icon_url: String => "iconUrl",
        date_modified: Timestamp => "dateModified",
        /// Top level category that groups other categories.
        is_class: Nullable<bool> => "isClass",
        /// The class this category belongs to.
        class_id: Nullable<i32> => "classId",
        parent_category_id: Nullable<i32> => "parentCategoryId",
        display_index: Nullable<i32> => "displayIndex",
    }
}

wire_record! {
    pub struct Game {
        id: i32 => "id",
        name: String => "name",
        slug: String => "slug",
        date_modified: Timestamp => "dateModified",
        assets: GameAssets => "assets",
        status: CoreStatus => "status",
        api_status: CoreApiStatus => "apiStatus",
    }
}

wire_record! {
    pub struct GameAssets {
        icon_url: String => "iconUrl",
        tile_url: String => "tileUrl",
        cover_url: String => "coverUrl",
    }
}

wire_record! {
    pub struct GameVersionsByType {
        /// Id of the game version type.
        version_type: i32 => "type",
        versions: Vec<String> => "versions",
    }
}

wire_record! {
    pub struct GameVersionType {
        id: i32 => "id",
        game_id: i32 => "gameId",
        name: String => "name",
        slug: String => "slug",
    }
}

impl Category {
    pub fn is_class(&self) -> bool {
        self.is_class.get().unwrap_or(false)
    }
}
