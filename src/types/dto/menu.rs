use poem_openapi::types::MaybeUndefined;
use poem_openapi::Object;

use crate::types::internal::menu::{MenuNode, MenuTreeNode};

use super::rfc3339;

#[derive(Object, Debug)]
pub struct CreateMenuRequest {
    #[oai(validator(min_length = 1))]
    pub description: String,

    /// Target route; omitted for grouping entries
    pub url: Option<String>,

    /// Omitted for top-level entries
    pub parent_id: Option<i32>,

    #[oai(default)]
    pub level: i32,

    #[oai(default)]
    pub sort_order: i32,

    pub status_id: i32,
}

/// Partial update; send `null` to clear `url` or `parent_id`
#[derive(Object, Debug, Default)]
pub struct UpdateMenuRequest {
    pub description: Option<String>,
    pub url: MaybeUndefined<String>,
    pub parent_id: MaybeUndefined<i32>,
    pub level: Option<i32>,
    pub sort_order: Option<i32>,
    pub status_id: Option<i32>,
}

#[derive(Object, Debug)]
pub struct MenuResponse {
    pub menu_id: i32,
    pub description: String,
    pub url: Option<String>,
    pub parent_id: Option<i32>,
    pub level: i32,
    pub sort_order: i32,
    pub status_id: i32,
    pub created_at: String,
}

impl From<MenuNode> for MenuResponse {
    fn from(m: MenuNode) -> Self {
        Self {
            created_at: rfc3339(m.created_at),
            menu_id: m.id,
            description: m.description,
            url: m.url,
            parent_id: m.parent_id,
            level: m.level,
            sort_order: m.sort_order,
            status_id: m.status.id(),
        }
    }
}

/// Menu entry with its ordered children
#[derive(Object, Debug)]
pub struct MenuTreeResponse {
    pub menu_id: i32,
    pub description: String,
    pub url: Option<String>,
    pub parent_id: Option<i32>,
    pub level: i32,
    pub sort_order: i32,
    pub status_id: i32,
    pub created_at: String,
    pub children: Vec<MenuTreeResponse>,
}

impl From<MenuTreeNode> for MenuTreeResponse {
    fn from(node: MenuTreeNode) -> Self {
        let m = node.menu;
        Self {
            created_at: rfc3339(m.created_at),
            menu_id: m.id,
            description: m.description,
            url: m.url,
            parent_id: m.parent_id,
            level: m.level,
            sort_order: m.sort_order,
            status_id: m.status.id(),
            children: node.children.into_iter().map(MenuTreeResponse::from).collect(),
        }
    }
}
