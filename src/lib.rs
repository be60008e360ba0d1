//! # Binary-tree algorithms over an arena tree
//!
//! This library implements a family of classic binary-tree algorithms that
//! all share one node-link model (`Tree<T>`, nodes addressed by `NodeId`).
//!
//! ## Components
//!
//! 1. **Reconstruction**: rebuild a tree from preorder+inorder or
//!    postorder+inorder sequences (`build`)
//! 2. **Codec**: flatten a tree to a token string and restore it (`codec`)
//! 3. **Ancestor/distance queries**: LCA, nodes at distance K, burn time,
//!    all driven by an ephemeral parent map (`query`)
//! 4. **In-place transforms**: flatten to a right chain, Morris-threaded
//!    traversals (`transform`)
//! 5. **Invariant checks**: children-sum property (`check`)
//!
//! ## Usage Example
//!
//! ```
//! use arborist::{build_from_preorder_inorder, serialize, lowest_common_ancestor};
//!
//! let tree = build_from_preorder_inorder(&[3, 9, 20, 15, 7], &[9, 3, 15, 20, 7])?;
//! assert_eq!(serialize(&tree), "3,9,N,N,20,15,N,N,7,N,N");
//!
//! let lca = lowest_common_ancestor(&tree, &15, &7)?;
//! assert_eq!(*tree.value(lca), 20);
//! # Ok::<(), arborist::TreeError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

// Core modules - each implements one algorithm family
pub mod tree;      // Arena tree model and walks
pub mod build;     // Reconstruction from traversal pairs
pub mod codec;     // Serialized token forms
pub mod query;     // Parent map, LCA, distance propagation
pub mod transform; // Flattening and threaded traversal
pub mod check;     // Structural invariants

// Re-exports for convenience
pub use tree::{Node, NodeId, Order, Tree};
pub use build::{build_from_postorder_inorder, build_from_preorder_inorder};
pub use codec::{
    deserialize, deserialize_level_order, serialize, serialize_level_order, Codec, CodecConfig,
};
pub use query::{
    distance_between, lowest_common_ancestor, minimum_burn_time, nodes_at_distance,
    root_to_node_path, ParentMap,
};
pub use transform::{flatten_to_right_chain, is_right_chain, threaded_inorder, threaded_preorder};
pub use check::{enforce_children_sum, first_violation, satisfies_children_sum};

use std::fmt::Debug;

use thiserror::Error;

/// Errors raised by tree construction, decoding and queries
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The two traversal sequences cannot describe one tree
    #[error("invalid traversal pair: {0}")]
    InvalidTraversalPair(#[from] PairDefect),

    /// Serialized token stream does not decode to exactly one tree
    #[error("malformed stream at token {position}: {defect}")]
    MalformedStream {
        /// Zero-based index of the offending token
        position: usize,
        /// What went wrong at that token
        defect: StreamDefect,
    },

    /// A query target is not present in the tree
    #[error("node {value} not found in tree")]
    NodeNotFound {
        /// Debug rendering of the missing value
        value: String,
    },

    /// Codec configuration cannot produce an unambiguous stream
    #[error("invalid codec configuration: {0}")]
    InvalidCodecConfig(String),

    /// Children of a node sum past the range of the value type
    #[error("children of node {value} overflow when summed")]
    SumOverflow {
        /// Debug rendering of the parent value
        value: String,
    },
}

/// Reason a traversal pair was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PairDefect {
    /// Sequences have different lengths
    #[error("length mismatch: {order} has {order_len} values, inorder has {inorder_len}")]
    LengthMismatch {
        /// Name of the non-inorder sequence
        order: &'static str,
        /// Length of the non-inorder sequence
        order_len: usize,
        /// Length of the inorder sequence
        inorder_len: usize,
    },

    /// A value occurs more than once
    #[error("duplicate value {value} in {sequence} sequence")]
    DuplicateValue {
        /// Debug rendering of the repeated value
        value: String,
        /// Sequence containing the repeat
        sequence: &'static str,
    },

    /// A value of the other sequence does not occur in the inorder sequence
    #[error("value {value} does not occur in the inorder sequence")]
    MissingValue {
        /// Debug rendering of the unmatched value
        value: String,
    },

    /// Same value set, but no tree has both orders
    #[error("sequences disagree on the subtree rooted at {value}")]
    Inconsistent {
        /// Debug rendering of the subtree root that could not be placed
        value: String,
    },
}

/// Reason a token stream was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StreamDefect {
    /// Cursor ran past the last token
    #[error("stream ended before the tree was complete")]
    UnexpectedEnd,

    /// Tokens remain after the root subtree was decoded
    #[error("{count} trailing token(s) after the tree was complete")]
    TrailingTokens {
        /// Number of unread tokens
        count: usize,
    },

    /// Token is neither the null marker nor a parsable value
    #[error("cannot parse token '{token}'")]
    InvalidToken {
        /// Offending token text
        token: String,
    },
}

/// Render a value for error messages
pub(crate) fn describe<T: Debug>(value: &T) -> String {
    format!("{:?}", value)
}
