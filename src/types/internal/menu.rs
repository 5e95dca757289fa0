use crate::types::db::{menu, RecordStatus};

/// One row of the navigation hierarchy, referencing its parent by id only
#[derive(Debug, Clone, PartialEq)]
pub struct MenuNode {
    pub id: i32,
    pub description: String,
    pub url: Option<String>,
    pub parent_id: Option<i32>,
    pub level: i32,
    pub sort_order: i32,
    pub status: RecordStatus,
    pub created_at: i64,
}

impl From<menu::Model> for MenuNode {
    fn from(m: menu::Model) -> Self {
        Self {
            id: m.id,
            description: m.description,
            url: m.url,
            parent_id: m.parent_id,
            level: m.level,
            sort_order: m.sort_order,
            status: m.status_id,
            created_at: m.created_at,
        }
    }
}

/// Materialized tree node: a menu row plus its ordered children
#[derive(Debug, Clone, PartialEq)]
pub struct MenuTreeNode {
    pub menu: MenuNode,
    pub children: Vec<MenuTreeNode>,
}
