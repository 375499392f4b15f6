//! Arena-backed parse trees.

use std::fmt;

use crate::error::TreeError;

/// Index of a node inside one [`ParseTree`].
///
/// Ids are assigned in insertion order and never reused within a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
struct TreeNode<T> {
    value: T,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// A nested, owned view of a tree, convenient for display and assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Structured<T> {
    Leaf(T),
    Branch(T, Vec<Structured<T>>),
}

impl<T> Structured<T> {
    pub fn value(&self) -> &T {
        match self {
            Structured::Leaf(value) | Structured::Branch(value, _) => value,
        }
    }
}

/// An ordered tree whose nodes live in a vector and refer to each other by
/// [`NodeId`].
///
/// A child is always added after its parent, so every child id is greater
/// than its parent's id.
///
/// ```rust
/// use aoc_utils::grammar::{ParseTree, Structured};
///
/// let mut tree = ParseTree::new();
/// let root = tree.add_node("S", None).unwrap();
/// let a = tree.add_node("a", Some(root)).unwrap();
/// let b = tree.add_node("b", Some(root)).unwrap();
///
/// assert_eq!(tree.get_next_sibling(a), Some(b));
/// assert_eq!(tree.get_next_sibling(b), None);
/// assert_eq!(
///     tree.to_structured(),
///     Some(Structured::Branch("S", vec![Structured::Leaf("a"), Structured::Leaf("b")]))
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ParseTree<T> {
    nodes: Vec<TreeNode<T>>,
    root: Option<NodeId>,
}

impl<T> ParseTree<T> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
        }
    }

    /// Adds a node holding `value` as the last child of `parent`.
    ///
    /// Without a parent the node becomes the root, which is only allowed once.
    pub fn add_node(&mut self, value: T, parent: Option<NodeId>) -> Result<NodeId, TreeError> {
        let id = NodeId(self.nodes.len());
        match parent {
            Some(parent_id) => {
                self.nodes
                    .get_mut(parent_id.0)
                    .ok_or(TreeError::UnknownNode(parent_id))?
                    .children
                    .push(id);
            }
            None if self.root.is_some() => return Err(TreeError::RootAlreadySet),
            None => self.root = Some(id),
        }
        self.nodes.push(TreeNode {
            value,
            parent,
            children: Vec::new(),
        });
        Ok(id)
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn value(&self, id: NodeId) -> Option<&T> {
        self.nodes.get(id.0).map(|node| &node.value)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0).and_then(|node| node.parent)
    }

    pub fn children(&self, id: NodeId) -> Option<&[NodeId]> {
        self.nodes.get(id.0).map(|node| node.children.as_slice())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The next sibling of `id`, or of its nearest ancestor that has one.
    ///
    /// Returns `None` when neither `id` nor any ancestor has a following sibling.
    pub fn get_next_sibling(&self, id: NodeId) -> Option<NodeId> {
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            let siblings = self.children(parent)?;
            let position = siblings.iter().position(|&child| child == current)?;
            if let Some(&next) = siblings.get(position + 1) {
                return Some(next);
            }
            current = parent;
        }
        None
    }

    /// Node ids in depth-first, left-to-right order, starting at the root.
    pub fn preorder(&self) -> Preorder<'_, T> {
        Preorder {
            tree: self,
            stack: self.root.map(|root| (root, 0)).into_iter().collect(),
        }
    }

    /// Childless nodes in left-to-right order.
    pub fn leaves(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.preorder()
            .filter(|&id| self.children(id).is_some_and(|children| children.is_empty()))
    }
}

impl<T: Clone> ParseTree<T> {
    /// Builds the nested view of the whole tree, or `None` if it has no root.
    pub fn to_structured(&self) -> Option<Structured<T>> {
        let root = self.root?;
        let mut built: Vec<Option<Structured<T>>> = Vec::new();
        built.resize_with(self.nodes.len(), || None);

        // children have larger ids than their parent
        for idx in (0..self.nodes.len()).rev() {
            let node = &self.nodes[idx];
            let view = if node.children.is_empty() {
                Structured::Leaf(node.value.clone())
            } else {
                let children = node
                    .children
                    .iter()
                    .filter_map(|child| built[child.0].take())
                    .collect();
                Structured::Branch(node.value.clone(), children)
            };
            built[idx] = Some(view);
        }
        built[root.0].take()
    }
}

impl<T> Default for ParseTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Depth-first iterator over a [`ParseTree`].
pub struct Preorder<'a, T> {
    tree: &'a ParseTree<T>,
    stack: Vec<(NodeId, usize)>,
}

impl<T> Preorder<'_, T> {
    fn next_with_depth(&mut self) -> Option<(NodeId, usize)> {
        let (id, depth) = self.stack.pop()?;
        if let Some(children) = self.tree.children(id) {
            self.stack
                .extend(children.iter().rev().map(|&child| (child, depth + 1)));
        }
        Some((id, depth))
    }
}

impl<T> Iterator for Preorder<'_, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        self.next_with_depth().map(|(id, _)| id)
    }
}

/// Renders one node per line, indented two spaces per level.
impl<T: fmt::Display> fmt::Display for ParseTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut walk = self.preorder();
        while let Some((id, depth)) = walk.next_with_depth() {
            if let Some(value) = self.value(id) {
                writeln!(f, "{:indent$}{value}", "", indent = depth * 2)?;
            }
        }
        Ok(())
    }
}
