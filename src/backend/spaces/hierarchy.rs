//! Space hierarchy
//!
//! Builds the navigation tree from flat space rows and prunes it down to the
//! spaces a user can see from their subscriptions. Subscriptions are only
//! recorded at the level the user chose; ancestors show up because a
//! descendant survived, never because of a stored record.

use std::collections::{HashMap, HashSet};
use uuid::Uuid;

use crate::shared::space::{Space, SpaceNode, MAX_SPACE_LEVEL};

/// Nest flat space rows into a tree rooted at the level 1 spaces
///
/// Siblings keep the order they have in `spaces`. Rows deeper than level 3
/// or whose parent is missing do not appear.
pub fn build_space_tree(spaces: &[Space]) -> Vec<SpaceNode> {
    let mut children_of: HashMap<Uuid, Vec<&Space>> = HashMap::new();
    for space in spaces {
        if let Some(parent_id) = space.parent_id {
            children_of.entry(parent_id).or_default().push(space);
        }
    }

    spaces
        .iter()
        .filter(|s| s.parent_id.is_none() && s.level == 1)
        .map(|root| attach_children(root, &children_of, 1))
        .collect()
}

fn attach_children(
    space: &Space,
    children_of: &HashMap<Uuid, Vec<&Space>>,
    depth: i16,
) -> SpaceNode {
    let mut node = SpaceNode::leaf(space);
    if depth < MAX_SPACE_LEVEL {
        if let Some(children) = children_of.get(&space.id) {
            node.children = children
                .iter()
                .map(|child| attach_children(child, children_of, depth + 1))
                .collect();
        }
    }
    node
}

/// Prune a space tree to the nodes a subscriber should see
///
/// A node survives when it has a surviving descendant (it is then returned
/// with only those descendants) or, failing that, when it is itself in
/// `subscribed`. Sibling order is preserved.
pub fn filter_subscribed(tree: &[SpaceNode], subscribed: &HashSet<Uuid>) -> Vec<SpaceNode> {
    tree.iter()
        .filter_map(|node| filter_node(node, subscribed))
        .collect()
}

fn filter_node(node: &SpaceNode, subscribed: &HashSet<Uuid>) -> Option<SpaceNode> {
    let children = filter_subscribed(&node.children, subscribed);

    if children.is_empty() && !subscribed.contains(&node.id) {
        return None;
    }

    Some(SpaceNode {
        id: node.id,
        name: node.name.clone(),
        level: node.level,
        children,
    })
}
