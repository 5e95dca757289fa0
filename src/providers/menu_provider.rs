use std::collections::HashMap;
use std::sync::Arc;

use crate::errors::InternalError;
use crate::stores::CredentialStore;
use crate::types::internal::context::RequestContext;
use crate::types::internal::menu::{MenuNode, MenuTreeNode};

/// Assemble the navigation forest for one profile's menu assignments
///
/// Inactive rows are dropped first. A row whose parent did not survive is
/// dropped with its whole subtree rather than promoted to a root. Roots and
/// every sibling list are stably sorted by `sort_order`.
pub fn build_menu_tree(menus: &[MenuNode]) -> Vec<MenuTreeNode> {
    // Arena keyed by id; a repeated id keeps its first slot and last value
    let mut arena: Vec<&MenuNode> = Vec::new();
    let mut slot_by_id: HashMap<i32, usize> = HashMap::new();
    for menu in menus.iter().filter(|m| m.status.is_active()) {
        match slot_by_id.get(&menu.id) {
            Some(&slot) => arena[slot] = menu,
            None => {
                slot_by_id.insert(menu.id, arena.len());
                arena.push(menu);
            }
        }
    }

    let mut roots: Vec<usize> = Vec::new();
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); arena.len()];
    for (slot, menu) in arena.iter().enumerate() {
        match menu.parent_id {
            None => roots.push(slot),
            Some(parent_id) => {
                if let Some(&parent_slot) = slot_by_id.get(&parent_id) {
                    children[parent_slot].push(slot);
                }
            }
        }
    }

    roots.sort_by_key(|&slot| arena[slot].sort_order);
    for siblings in children.iter_mut() {
        siblings.sort_by_key(|&slot| arena[slot].sort_order);
    }

    // Only nodes reachable from a root are materialized, so a parent cycle
    // among non-root rows never gets walked
    roots
        .into_iter()
        .map(|slot| materialize(slot, &arena, &children))
        .collect()
}

fn materialize(slot: usize, arena: &[&MenuNode], children: &[Vec<usize>]) -> MenuTreeNode {
    MenuTreeNode {
        menu: arena[slot].clone(),
        children: children[slot]
            .iter()
            .map(|&child| materialize(child, arena, children))
            .collect(),
    }
}

/// Serves the menu tree for a caller's profile
pub struct MenuProvider {
    store: Arc<dyn CredentialStore>,
}

impl MenuProvider {
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self { store }
    }

    /// Tree for the given profile; a user without a profile sees no menu
    pub async fn menu_tree_for_profile(
        &self,
        ctx: &RequestContext,
        profile_id: Option<i32>,
    ) -> Result<Vec<MenuTreeNode>, InternalError> {
        let Some(profile_id) = profile_id else {
            return Ok(Vec::new());
        };

        let assigned = self.store.assigned_menus(profile_id).await?;
        tracing::debug!(
            request_id = %ctx.request_id,
            profile_id,
            assigned = assigned.len(),
            "Building menu tree"
        );

        Ok(build_menu_tree(&assigned))
    }
}
