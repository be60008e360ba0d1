#![allow(dead_code)]

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use arborist::{deserialize, NodeId, ParentMap, Tree};
use proptest::prelude::*;

const UPDATE_VAR: &str = "ARBORIST_UPDATE_SNAPSHOTS";

fn snapshot_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("snapshots")
        .join(name)
}

/// Compare keyed rows against `tests/snapshots/<name>`, one `key\trow`
/// line each. Mismatches are reported per key.
pub fn assert_rows_snapshot(name: &str, rows: &[(String, String)]) {
    let path = snapshot_path(name);
    if std::env::var(UPDATE_VAR).is_ok() {
        let rendered: String = rows
            .iter()
            .map(|(key, row)| format!("{key}\t{row}\n"))
            .collect();
        fs::write(&path, rendered).expect("write snapshot");
        return;
    }

    let stored =
        fs::read_to_string(&path).unwrap_or_else(|_| panic!("snapshot {path:?} not found"));
    let expected: BTreeMap<&str, &str> = stored
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.split_once('\t').unwrap_or((line, "")))
        .collect();

    let mut problems = Vec::new();
    for (key, row) in rows {
        match expected.get(key.as_str()) {
            Some(stored_row) if stored_row == row => {}
            Some(stored_row) => problems.push(format!("{key}: expected {stored_row}, got {row}")),
            None => problems.push(format!("{key}: missing from snapshot")),
        }
    }
    for key in expected.keys() {
        if !rows.iter().any(|(k, _)| k == key) {
            problems.push(format!("{key}: no longer produced"));
        }
    }

    assert!(
        problems.is_empty(),
        "snapshot {path:?} differs ({UPDATE_VAR}=1 regenerates):\n{}",
        problems.join("\n")
    );
}

/// 1(2(4, 5), 3)
pub fn sample_tree() -> Tree<i64> {
    deserialize("1,2,4,N,N,5,N,N,3,N,N").expect("sample tree decodes")
}

/// 10(8(3, 5), 2(_, 2)), assembled node by node
pub fn children_sum_tree() -> Tree<i64> {
    let mut tree = Tree::new();
    let root = tree.add_node(10);
    let eight = tree.add_node(8);
    let three = tree.add_node(3);
    let five = tree.add_node(5);
    let two = tree.add_node(2);
    let two_leaf = tree.add_node(2);

    tree.set_left(root, Some(eight));
    tree.set_right(root, Some(two));
    tree.set_left(eight, Some(three));
    tree.set_right(eight, Some(five));
    tree.set_right(two, Some(two_leaf));
    tree.set_root(Some(root));
    tree
}

/// Insert `values` one by one, steering each down the tree with the bits
/// of its path word (0 = left, 1 = right) until an empty slot is found
pub fn tree_from_paths<T: Clone>(values: &[T], paths: &[u64]) -> Tree<T> {
    let mut tree = Tree::with_capacity(values.len());

    for (value, &path) in values.iter().zip(paths) {
        let id = tree.add_node(value.clone());
        let Some(mut at) = tree.root() else {
            tree.set_root(Some(id));
            continue;
        };

        let mut bits = path;
        loop {
            let go_left = bits & 1 == 0;
            bits = bits.rotate_right(1);
            let next = if go_left { tree.left(at) } else { tree.right(at) };
            match next {
                Some(child) => at = child,
                None => {
                    if go_left {
                        tree.set_left(at, Some(id));
                    } else {
                        tree.set_right(at, Some(id));
                    }
                    break;
                }
            }
        }
    }

    tree
}

/// Arbitrary shapes over the distinct values `0..n`, `n <= max_nodes`
pub fn arb_tree(max_nodes: usize) -> impl Strategy<Value = Tree<i64>> {
    (0..=max_nodes)
        .prop_flat_map(|n| {
            (
                Just((0..n as i64).collect::<Vec<_>>()).prop_shuffle(),
                proptest::collection::vec(any::<u64>(), n),
            )
        })
        .prop_map(|(values, paths)| tree_from_paths(&values, &paths))
}

/// Arbitrary shapes carrying arbitrary text, delimiters and markers included
pub fn arb_string_tree(max_nodes: usize) -> impl Strategy<Value = Tree<String>> {
    let text = prop_oneof![
        any::<String>(),
        Just("N".to_string()),
        Just(String::new()),
        "[ ,N\\\\a-c]{0,6}",
    ];
    proptest::collection::vec((text, any::<u64>()), 0..=max_nodes).prop_map(|slots| {
        let (values, paths): (Vec<String>, Vec<u64>) = slots.into_iter().unzip();
        tree_from_paths(&values, &paths)
    })
}

/// Arbitrary non-empty tree plus one of its values
pub fn arb_tree_with_member(max_nodes: usize) -> impl Strategy<Value = (Tree<i64>, i64)> {
    arb_tree(max_nodes)
        .prop_filter("tree must have a node", |tree| !tree.is_empty())
        .prop_flat_map(|tree| {
            let n = tree.len() as i64;
            (Just(tree), 0..n)
        })
}

/// Largest hop count from `source` to any node, by brute force
pub fn eccentricity(tree: &Tree<i64>, source: NodeId) -> usize {
    let parents = ParentMap::build(tree);
    tree.node_ids(arborist::Order::Pre)
        .into_iter()
        .filter_map(|id| parents.hops_between(source, id))
        .max()
        .unwrap_or(0)
}

pub fn sorted(mut values: Vec<i64>) -> Vec<i64> {
    values.sort_unstable();
    values
}
