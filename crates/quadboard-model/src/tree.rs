#![forbid(unsafe_code)]

//! The component catalog: an ordered forest of group and leaf nodes.
//!
//! A node with no children is a leaf and is the only kind that can be
//! placed on the grid; a node with children is a group that can be
//! expanded or collapsed. The forest is immutable-by-replacement: updates
//! build a new forest rather than mutating in place, so state transitions
//! stay observable.
//!
//! # Example
//!
//! ```
//! use quadboard_model::tree::{ComponentNode, find_node, toggle_expansion};
//!
//! let forest = vec![
//!     ComponentNode::group("1", "Layout Components")
//!         .child(ComponentNode::leaf("1-1", "Header"))
//!         .child(ComponentNode::leaf("1-2", "Footer")),
//! ];
//!
//! assert_eq!(find_node(&forest, "1-2").map(ComponentNode::name), Some("Footer"));
//!
//! let collapsed = toggle_expansion(&forest, "1");
//! assert!(!collapsed[0].is_expanded());
//! ```

use serde::{Deserialize, Serialize};

/// A node in the component catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentNode {
    id: String,
    name: String,
    #[serde(default)]
    children: Vec<ComponentNode>,
    #[serde(default)]
    expanded: bool,
}

impl ComponentNode {
    /// Create a leaf node (placeable, never expandable).
    #[must_use]
    pub fn leaf(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            children: Vec::new(),
            expanded: false,
        }
    }

    /// Create a group node, expanded by default.
    #[must_use]
    pub fn group(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            children: Vec::new(),
            expanded: true,
        }
    }

    /// Add a child node.
    #[must_use]
    pub fn child(mut self, node: ComponentNode) -> Self {
        self.children.push(node);
        self
    }

    /// Set children from a vec.
    #[must_use]
    pub fn with_children(mut self, nodes: Vec<ComponentNode>) -> Self {
        self.children = nodes;
        self
    }

    /// Set whether this node is expanded.
    #[must_use]
    pub fn with_expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    /// Get the id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the children.
    #[must_use]
    pub fn children(&self) -> &[ComponentNode] {
        &self.children
    }

    /// Whether this node is a leaf (no children, placeable).
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Whether this node is expanded. Meaningful only for groups.
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Count all nodes in this subtree, including this one.
    #[must_use]
    pub fn total_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(ComponentNode::total_count)
            .sum::<usize>()
    }
}

/// Find a node by id, depth-first and pre-order, over the whole forest.
///
/// Returns the first match; `None` if the id is absent. Pure and
/// deterministic.
#[must_use]
pub fn find_node<'a>(forest: &'a [ComponentNode], id: &str) -> Option<&'a ComponentNode> {
    for node in forest {
        if node.id == id {
            return Some(node);
        }
        if let Some(found) = find_node(&node.children, id) {
            return Some(found);
        }
    }
    None
}

/// Return a new forest with the matching node's expansion flag inverted.
///
/// Ancestors on the path to the target are rebuilt (copy-on-write); every
/// other node is carried over unchanged. An unknown id yields a forest
/// value-equal to the input. Toggling a leaf flips its stored flag, which
/// is semantically invisible since leaves never consult it.
#[must_use]
pub fn toggle_expansion(forest: &[ComponentNode], id: &str) -> Vec<ComponentNode> {
    forest
        .iter()
        .map(|node| {
            if node.id == id {
                let mut toggled = node.clone();
                toggled.expanded = !toggled.expanded;
                toggled
            } else if node.children.is_empty() {
                node.clone()
            } else {
                let mut rebuilt = node.clone();
                rebuilt.children = toggle_expansion(&node.children, id);
                rebuilt
            }
        })
        .collect()
}

/// The seeded demo catalog: three expanded groups of three leaves each.
///
/// Shared fixture for the shell and for tests.
#[must_use]
pub fn demo_catalog() -> Vec<ComponentNode> {
    vec![
        ComponentNode::group("1", "Layout Components")
            .child(ComponentNode::leaf("1-1", "Header"))
            .child(ComponentNode::leaf("1-2", "Footer"))
            .child(ComponentNode::leaf("1-3", "Sidebar")),
        ComponentNode::group("2", "Navigation Components")
            .child(ComponentNode::leaf("2-1", "Menu Bar"))
            .child(ComponentNode::leaf("2-2", "Breadcrumbs"))
            .child(ComponentNode::leaf("2-3", "Pagination")),
        ComponentNode::group("3", "Content Components")
            .child(ComponentNode::leaf("3-1", "Card"))
            .child(ComponentNode::leaf("3-2", "Table"))
            .child(ComponentNode::leaf("3-3", "Form")),
    ]
}
