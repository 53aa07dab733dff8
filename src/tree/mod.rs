//! Collapsible folder tree
//!
//! Immutable [`FolderNode`] data plus a [`TreeView`] holding which nodes are
//! open.

mod node;
mod view;

pub use node::{FolderNode, default_structure};
pub use view::{INDENT_STEP, NodePath, ROOT_INDENT, TreeRow, TreeView, indent_for};
