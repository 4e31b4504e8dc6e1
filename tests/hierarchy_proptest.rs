//! Property-based tests for space trees and comment threads

mod common;

use proptest::prelude::*;
use proptest::sample::Index;
use std::collections::HashSet;
use uuid::Uuid;

use kspace::backend::comments::{assemble_thread, create_comment};
use kspace::backend::error::BackendError;
use kspace::backend::spaces::{build_space_tree, filter_subscribed};
use kspace::backend::store::MemoryStore;
use kspace::shared::content::{CommentDraft, CommentNode, CommentTarget, MAX_COMMENT_LEVEL};
use kspace::shared::{Space, SpaceNode};

use common::{article, space, user};

/// Each entry: (parent pick, start a new root, subscribed)
fn forest_strategy() -> impl Strategy<Value = Vec<(Index, bool, bool)>> {
    prop::collection::vec((any::<Index>(), any::<bool>(), any::<bool>()), 0..24)
}

/// Spaces where every parent precedes its children and no level exceeds 3
fn build_forest(shape: &[(Index, bool, bool)]) -> (Vec<Space>, HashSet<Uuid>) {
    let mut spaces: Vec<Space> = Vec::new();
    let mut subscribed = HashSet::new();

    for (i, (pick, new_root, is_subscribed)) in shape.iter().enumerate() {
        let candidates: Vec<&Space> = spaces.iter().filter(|s| s.level < 3).collect();
        let parent = if *new_root || candidates.is_empty() {
            None
        } else {
            Some(candidates[pick.index(candidates.len())].clone())
        };

        let created = space(&format!("space-{}", i), parent.as_ref());
        if *is_subscribed {
            subscribed.insert(created.id);
        }
        spaces.push(created);
    }

    (spaces, subscribed)
}

fn all_ids(tree: &[SpaceNode]) -> Vec<Uuid> {
    tree.iter().flat_map(SpaceNode::ids).collect()
}

fn contains_subscribed(node: &SpaceNode, subscribed: &HashSet<Uuid>) -> bool {
    node.ids().iter().any(|id| subscribed.contains(id))
}

fn every_node<'a>(tree: &'a [SpaceNode], out: &mut Vec<&'a SpaceNode>) {
    for node in tree {
        out.push(node);
        every_node(&node.children, out);
    }
}

/// Each entry: reply to an earlier comment, or start a new root when `None`
fn thread_strategy() -> impl Strategy<Value = Vec<Option<Index>>> {
    prop::collection::vec(prop::option::of(any::<Index>()), 1..32)
}

/// A store with one author and one article; returns (store, author id, article target)
async fn thread_store() -> (MemoryStore, Uuid, CommentTarget) {
    let store = MemoryStore::new();
    let author = user("carol");
    let home = space("Rust", None);
    let post = article(&author, &home, "Macros");
    store.insert_user(author.clone()).await;
    store.insert_space(home).await;
    store.insert_article(post.clone()).await;
    (store, author.id, CommentTarget::Article(post.id))
}

fn check_levels(node: &CommentNode, level: i16, parent: Option<Uuid>) {
    assert_eq!(node.comment.level, level);
    assert_eq!(node.comment.parent_id, parent);
    for reply in &node.replies {
        check_levels(reply, level + 1, Some(node.comment.id));
    }
}

proptest! {
    #[test]
    fn tree_contains_every_space_once(shape in forest_strategy()) {
        let (spaces, _) = build_forest(&shape);
        let tree = build_space_tree(&spaces);

        let ids = all_ids(&tree);
        let unique: HashSet<Uuid> = ids.iter().copied().collect();
        prop_assert_eq!(ids.len(), spaces.len());
        prop_assert_eq!(unique.len(), spaces.len());
    }

    #[test]
    fn filtered_tree_keeps_subscriptions_and_ancestors(shape in forest_strategy()) {
        let (spaces, subscribed) = build_forest(&shape);
        let tree = build_space_tree(&spaces);
        let filtered = filter_subscribed(&tree, &subscribed);

        let kept: HashSet<Uuid> = all_ids(&filtered).into_iter().collect();
        for id in &subscribed {
            prop_assert!(kept.contains(id));
        }

        let mut nodes = Vec::new();
        every_node(&filtered, &mut nodes);
        for node in nodes {
            prop_assert!(contains_subscribed(node, &subscribed));
        }
    }

    #[test]
    fn filtering_is_idempotent(shape in forest_strategy()) {
        let (spaces, subscribed) = build_forest(&shape);
        let tree = build_space_tree(&spaces);

        let once = filter_subscribed(&tree, &subscribed);
        let twice = filter_subscribed(&once, &subscribed);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn filtering_with_everything_subscribed_is_identity(shape in forest_strategy()) {
        let (spaces, _) = build_forest(&shape);
        let tree = build_space_tree(&spaces);
        let everything: HashSet<Uuid> = spaces.iter().map(|s| s.id).collect();

        prop_assert_eq!(filter_subscribed(&tree, &everything), tree);
    }

    #[test]
    fn reply_chains_stop_at_max_level(length in 1usize..8) {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        runtime.block_on(async {
            let (store, author_id, target) = thread_store().await;
            let mut parent = None;
            let mut created = 0usize;
            for _ in 0..length {
                let draft = CommentDraft {
                    text: "again".to_string(),
                    parent_id: parent,
                    target: parent.is_none().then_some(target),
                };
                match create_comment(&store, author_id, draft).await {
                    Ok(comment) => {
                        created += 1;
                        parent = Some(comment.item.id);
                    }
                    Err(_) => break,
                }
            }

            let expected = length.min(MAX_COMMENT_LEVEL as usize);
            assert_eq!(created, expected);

            let thread = assemble_thread(&store, target).await.unwrap();
            assert_eq!(thread.len(), 1);
            assert_eq!(thread[0].size(), expected);
            assert!(thread[0].max_level() <= MAX_COMMENT_LEVEL);
        });
    }

    #[test]
    fn branching_threads_nest_one_level_per_reply(steps in thread_strategy()) {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        runtime.block_on(async {
            let (store, author_id, target) = thread_store().await;
            // (id, level) of every accepted comment
            let mut created: Vec<(Uuid, i16)> = Vec::new();
            let mut roots = 0usize;

            for step in &steps {
                let parent = step
                    .as_ref()
                    .filter(|_| !created.is_empty())
                    .map(|pick| created[pick.index(created.len())]);
                let draft = CommentDraft {
                    text: "branch".to_string(),
                    parent_id: parent.map(|(id, _)| id),
                    target: parent.is_none().then_some(target),
                };
                let result = create_comment(&store, author_id, draft).await;

                match parent {
                    Some((_, level)) if level >= MAX_COMMENT_LEVEL => {
                        assert!(matches!(result, Err(BackendError::InvalidInput { .. })));
                    }
                    Some((_, level)) => {
                        let comment = result.unwrap().item;
                        assert_eq!(comment.level, level + 1);
                        created.push((comment.id, comment.level));
                    }
                    None => {
                        let comment = result.unwrap().item;
                        assert_eq!(comment.level, 1);
                        roots += 1;
                        created.push((comment.id, comment.level));
                    }
                }
            }

            let thread = assemble_thread(&store, target).await.unwrap();
            assert_eq!(thread.len(), roots);
            assert_eq!(thread.iter().map(CommentNode::size).sum::<usize>(), created.len());
            for root in &thread {
                check_levels(root, 1, None);
                assert!(root.max_level() <= MAX_COMMENT_LEVEL);
            }
        });
    }
}
