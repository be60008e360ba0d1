//! Breadth-first encoding
//!
//! Each present node contributes its value; each absent child of a present
//! node contributes a marker. Trailing markers are dropped on encode and
//! implied on decode.

use std::collections::VecDeque;
use std::str::FromStr;

use super::parse_token;
use crate::tree::{NodeId, Tree};
use crate::{StreamDefect, TreeError};

pub(super) fn encode<T>(tree: &Tree<T>) -> Vec<Option<&T>> {
    let Some(root) = tree.root() else {
        return vec![None];
    };

    let mut slots = vec![Some(tree.value(root))];
    let mut queue = VecDeque::from([root]);

    while let Some(id) = queue.pop_front() {
        let node = &tree[id];
        for child in [node.left, node.right] {
            match child {
                Some(child) => {
                    slots.push(Some(tree.value(child)));
                    queue.push_back(child);
                }
                None => slots.push(None),
            }
        }
    }

    while slots.last().is_some_and(Option::is_none) {
        slots.pop();
    }
    slots
}

pub(super) fn decode<T: FromStr>(tokens: &[&str], marker: &str) -> Result<Tree<T>, TreeError> {
    let first = tokens.first().ok_or(TreeError::MalformedStream {
        position: 0,
        defect: StreamDefect::UnexpectedEnd,
    })?;

    let mut tree = Tree::with_capacity(tokens.len());
    let Some(value) = parse_token(first, marker, 0)? else {
        if tokens.len() > 1 {
            return Err(trailing(1, tokens.len()));
        }
        return Ok(tree);
    };

    let root = tree.add_node(value);
    tree.set_root(Some(root));

    let mut queue: VecDeque<NodeId> = VecDeque::from([root]);
    let mut cursor = 1;

    while cursor < tokens.len() {
        let Some(parent) = queue.pop_front() else {
            return Err(trailing(cursor, tokens.len()));
        };

        for slot in [Side::Left, Side::Right] {
            let Some(token) = tokens.get(cursor) else {
                break;
            };
            if let Some(value) = parse_token(token, marker, cursor)? {
                let child = tree.add_node(value);
                match slot {
                    Side::Left => tree.set_left(parent, Some(child)),
                    Side::Right => tree.set_right(parent, Some(child)),
                };
                queue.push_back(child);
            }
            cursor += 1;
        }
    }

    Ok(tree)
}

#[derive(Debug, Clone, Copy)]
enum Side {
    Left,
    Right,
}

fn trailing(position: usize, len: usize) -> TreeError {
    TreeError::MalformedStream {
        position,
        defect: StreamDefect::TrailingTokens {
            count: len - position,
        },
    }
}

#[cfg(test)]
mod tests {
    use crate::codec::{deserialize, deserialize_level_order, serialize_level_order};
    use crate::{StreamDefect, Tree, TreeError};

    #[test]
    fn test_level_order_encoding() {
        let tree: Tree<i32> = deserialize("3,9,N,N,20,15,N,N,7,N,N").unwrap();
        assert_eq!(serialize_level_order(&tree), "3,9,20,N,N,15,7");

        let decoded: Tree<i32> = deserialize_level_order("3,9,20,N,N,15,7").unwrap();
        assert_eq!(decoded, tree);
    }

    #[test]
    fn test_explicit_trailing_markers_accepted() {
        let short: Tree<i32> = deserialize_level_order("1,N,2").unwrap();
        let long: Tree<i32> = deserialize_level_order("1,N,2,N,N").unwrap();
        assert_eq!(short, long);
        assert_eq!(short.preorder(), vec![1, 2]);
    }

    #[test]
    fn test_empty_tree() {
        let tree: Tree<i32> = Tree::new();
        assert_eq!(serialize_level_order(&tree), "N");
        assert!(deserialize_level_order::<i32>("N").unwrap().is_empty());
        assert!(deserialize_level_order::<i32>("").is_err());
    }

    #[test]
    fn test_tokens_after_last_parent() {
        let err = deserialize_level_order::<i32>("1,N,N,4").unwrap_err();
        assert_eq!(
            err,
            TreeError::MalformedStream {
                position: 3,
                defect: StreamDefect::TrailingTokens { count: 1 },
            }
        );

        let err = deserialize_level_order::<i32>("N,1").unwrap_err();
        assert!(matches!(
            err,
            TreeError::MalformedStream {
                position: 1,
                defect: StreamDefect::TrailingTokens { count: 1 },
            }
        ));
    }
}
