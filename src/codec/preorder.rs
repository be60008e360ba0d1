//! Preorder-with-markers encoding
//!
//! Decode mirrors encode exactly: root token, then the left subtree's
//! tokens, then the right subtree's, all read through one shared cursor.

use std::str::FromStr;

use super::parse_token;
use crate::tree::{NodeId, Tree};
use crate::{StreamDefect, TreeError};

/// Slots in preorder, `None` for each absent child
pub(super) fn encode<T>(tree: &Tree<T>) -> Vec<Option<&T>> {
    let mut slots = Vec::new();
    let mut stack = vec![tree.root()];

    while let Some(slot) = stack.pop() {
        match slot {
            Some(id) => {
                let node = &tree[id];
                slots.push(Some(&node.value));
                stack.push(node.right);
                stack.push(node.left);
            }
            None => slots.push(None),
        }
    }

    slots
}

pub(super) fn decode<T: FromStr>(tokens: &[&str], marker: &str) -> Result<Tree<T>, TreeError> {
    let mut decoder = Decoder {
        tokens,
        marker,
        cursor: 0,
        tree: Tree::with_capacity(tokens.len() / 2 + 1),
    };

    let root = decoder.subtree()?;
    if decoder.cursor < tokens.len() {
        return Err(TreeError::MalformedStream {
            position: decoder.cursor,
            defect: StreamDefect::TrailingTokens {
                count: tokens.len() - decoder.cursor,
            },
        });
    }

    decoder.tree.set_root(root);
    Ok(decoder.tree)
}

struct Decoder<'t, T> {
    tokens: &'t [&'t str],
    marker: &'t str,

    /// Next unread token
    cursor: usize,

    tree: Tree<T>,
}

impl<T: FromStr> Decoder<'_, T> {
    fn subtree(&mut self) -> Result<Option<NodeId>, TreeError> {
        let Some(value) = self.next_value()? else {
            return Ok(None);
        };

        let id = self.tree.add_node(value);
        let left = self.subtree()?;
        let right = self.subtree()?;
        self.tree.set_left(id, left);
        self.tree.set_right(id, right);

        Ok(Some(id))
    }

    fn next_value(&mut self) -> Result<Option<T>, TreeError> {
        let position = self.cursor;
        let token = self
            .tokens
            .get(position)
            .ok_or(TreeError::MalformedStream {
                position,
                defect: StreamDefect::UnexpectedEnd,
            })?;
        self.cursor += 1;
        parse_token(token, self.marker, position)
    }
}
