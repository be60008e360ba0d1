//! In-place structural transforms
//!
//! Both transforms relink existing nodes and never allocate new ones.

mod flatten;
mod threading;

pub use flatten::{flatten_to_right_chain, is_right_chain};
pub use threading::{threaded_inorder, threaded_preorder};
