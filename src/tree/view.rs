//! Expand/collapse state for the folder tree
//!
//! The tree data stays immutable; which nodes are open lives here, keyed by
//! each node's index path from the top level.

use super::FolderNode;
use rustc_hash::FxHashSet;

/// Indentation of top-level nodes
pub const ROOT_INDENT: usize = 1;

/// Extra indentation per depth level
pub const INDENT_STEP: usize = 5;

/// Index path from the top-level list down to a node
pub type NodePath = Vec<usize>;

/// A node currently on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRow<'a> {
    pub name: &'a str,
    pub depth: usize,
    pub path: NodePath,
    /// Whether the node has children to show
    pub expandable: bool,
    pub expanded: bool,
}

impl TreeRow<'_> {
    /// Left margin for this row
    #[must_use]
    pub const fn indent(&self) -> usize {
        indent_for(self.depth)
    }
}

/// Left margin at `depth`
#[must_use]
pub const fn indent_for(depth: usize) -> usize {
    ROOT_INDENT + INDENT_STEP * depth
}

/// Folder tree plus per-node expanded flags and a selection cursor
#[derive(Debug, Clone)]
pub struct TreeView {
    roots: Vec<FolderNode>,
    expanded: FxHashSet<NodePath>,
    selected: usize,
}

impl TreeView {
    /// All nodes start collapsed
    #[must_use]
    pub fn new(roots: Vec<FolderNode>) -> Self {
        Self {
            roots,
            expanded: FxHashSet::default(),
            selected: 0,
        }
    }

    #[must_use]
    pub fn roots(&self) -> &[FolderNode] {
        &self.roots
    }

    #[must_use]
    pub fn node(&self, path: &[usize]) -> Option<&FolderNode> {
        let (&first, rest) = path.split_first()?;
        self.roots.get(first)?.descend(rest)
    }

    #[must_use]
    pub fn is_expanded(&self, path: &[usize]) -> bool {
        self.expanded.contains(path)
    }

    /// Flip a node open or closed
    ///
    /// Returns whether the node is expanded afterwards. Leaves and unknown
    /// paths never expand. Closing a node also forgets the state of
    /// everything below it, so reopening shows its children collapsed.
    pub fn toggle(&mut self, path: &[usize]) -> bool {
        if self.node(path).is_none_or(FolderNode::is_leaf) {
            return false;
        }

        if self.expanded.remove(path) {
            self.expanded
                .retain(|open| !(open.len() > path.len() && open.starts_with(path)));
            self.clamp_selection();
            false
        } else {
            self.expanded.insert(path.to_vec());
            true
        }
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
        self.clamp_selection();
    }

    /// Nodes on screen, depth first, children under their open parent
    #[must_use]
    pub fn visible_rows(&self) -> Vec<TreeRow<'_>> {
        let mut rows = Vec::new();
        for (index, node) in self.roots.iter().enumerate() {
            self.collect_rows(node, vec![index], &mut rows);
        }
        rows
    }

    fn collect_rows<'a>(&'a self, node: &'a FolderNode, path: NodePath, rows: &mut Vec<TreeRow<'a>>) {
        let expanded = self.is_expanded(&path);
        let depth = path.len() - 1;

        rows.push(TreeRow {
            name: node.name(),
            depth,
            path: path.clone(),
            expandable: !node.is_leaf(),
            expanded,
        });

        if expanded {
            for (index, child) in node.children().iter().enumerate() {
                let mut child_path = path.clone();
                child_path.push(index);
                self.collect_rows(child, child_path, rows);
            }
        }
    }

    #[must_use]
    pub const fn selected(&self) -> usize {
        self.selected
    }

    pub fn select_next(&mut self) {
        let last = self.visible_rows().len().saturating_sub(1);
        self.selected = (self.selected + 1).min(last);
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Toggle the selected row. Returns whether it is expanded afterwards.
    pub fn toggle_selected(&mut self) -> bool {
        self.toggle_row(self.selected)
    }

    /// Select and toggle the `index`-th visible row
    ///
    /// Out-of-range rows are ignored.
    pub fn toggle_row(&mut self, index: usize) -> bool {
        let Some(path) = self.visible_rows().get(index).map(|row| row.path.clone()) else {
            return false;
        };
        self.selected = index;
        self.toggle(&path)
    }

    fn clamp_selection(&mut self) {
        let last = self.visible_rows().len().saturating_sub(1);
        self.selected = self.selected.min(last);
    }
}
