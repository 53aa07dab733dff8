//! Folder tree data

/// A named folder with ordered children
///
/// A node without children is a leaf and has nothing to expand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderNode {
    name: String,
    children: Vec<FolderNode>,
}

impl FolderNode {
    #[must_use]
    pub fn new(name: impl Into<String>, children: Vec<Self>) -> Self {
        Self {
            name: name.into(),
            children,
        }
    }

    #[must_use]
    pub fn leaf(name: impl Into<String>) -> Self {
        Self::new(name, Vec::new())
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    #[inline]
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Descend by child indexes, starting from this node
    #[must_use]
    pub fn descend(&self, path: &[usize]) -> Option<&Self> {
        path.iter()
            .try_fold(self, |node, &index| node.children.get(index))
    }
}

/// The fixed structure shown by the folder viewer
#[must_use]
pub fn default_structure() -> Vec<FolderNode> {
    vec![FolderNode::new(
        "root",
        vec![
            FolderNode::new(
                "A",
                vec![
                    FolderNode::new("A-1", vec![FolderNode::leaf("A-1-1")]),
                    FolderNode::leaf("A-2"),
                    FolderNode::leaf("A-3"),
                ],
            ),
            FolderNode::leaf("B"),
        ],
    )]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_structure_shape() {
        let roots = default_structure();
        assert_eq!(roots.len(), 1);

        let root = &roots[0];
        assert_eq!(root.name(), "root");
        let names: Vec<&str> = root.children().iter().map(FolderNode::name).collect();
        assert_eq!(names, vec!["A", "B"]);

        let a = &root.children()[0];
        let names: Vec<&str> = a.children().iter().map(FolderNode::name).collect();
        assert_eq!(names, vec!["A-1", "A-2", "A-3"]);
        assert!(root.children()[1].is_leaf());
    }

    #[test]
    fn descend_follows_indexes() {
        let root = &default_structure()[0];
        assert_eq!(root.descend(&[]).map(FolderNode::name), Some("root"));
        assert_eq!(root.descend(&[0, 0, 0]).map(FolderNode::name), Some("A-1-1"));
        assert_eq!(root.descend(&[1]).map(FolderNode::name), Some("B"));
        assert!(root.descend(&[1, 0]).is_none());
        assert!(root.descend(&[5]).is_none());
    }
}
