use std::fmt::Debug;

use crate::ConsistencyError;

/// Read access to a parsed style-sheet tree.
///
/// Nodes are addressed by a copyable id and compared by id, so two nodes with
/// equal contents are still different nodes. A parent owns the ordered list of
/// its children, a child only stores the id of its parent.
pub trait SyntaxTree {
  type NodeId: Copy + Eq + Debug;

  fn parent(&self, node: Self::NodeId) -> Option<Self::NodeId>;

  fn children(&self, node: Self::NodeId) -> &[Self::NodeId];
}

/// Return whatever structurally precedes `node`.
///
/// That is the previous sibling, or the parent itself when `node` is the first
/// child. Returns `None` when there is no node or it is the root.
pub fn previous_node<T: SyntaxTree>(
  tree: &T,
  node: Option<T::NodeId>,
) -> Result<Option<T::NodeId>, ConsistencyError> {
  let Some(node) = node else {
    return Ok(None);
  };
  let Some(parent) = tree.parent(node) else {
    return Ok(None);
  };

  let siblings = tree.children(parent);
  let Some(index) = siblings.iter().position(|sibling| *sibling == node) else {
    tracing::debug!(?node, ?parent, "Node is missing from its parent's children");
    return Err(ConsistencyError::new(&node, &parent));
  };

  tracing::trace!(?node, index, "Found node among its siblings");
  if index == 0 {
    Ok(Some(parent))
  } else {
    Ok(Some(siblings[index - 1]))
  }
}

/// Walk `levels` parents up from `node`. Zero levels is the node itself.
pub fn node_ancestor<T: SyntaxTree>(
  tree: &T,
  node: T::NodeId,
  levels: usize,
) -> Option<T::NodeId> {
  (0..levels).try_fold(node, |current, _| tree.parent(current))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug)]
struct NodeEntry<T> {
  data: T,
  parent: Option<NodeId>,
  children: Vec<NodeId>,
}

/// An owned [`SyntaxTree`] storing every node in one vector.
///
/// Ids are only meaningful for the arena that handed them out and carry no
/// arena tag, so a foreign id is not detected: if its index is below
/// [`NodeArena::len`] it names whichever node of this arena sits there.
/// Indices past the end read as unknown nodes with no parent or children.
#[derive(Debug)]
pub struct NodeArena<T> {
  nodes: Vec<NodeEntry<T>>,
}

impl<T> Default for NodeArena<T> {
  fn default() -> Self {
    Self { nodes: Vec::new() }
  }
}

impl<T> NodeArena<T> {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn add_root(&mut self, data: T) -> NodeId {
    self.push(data, None)
  }

  /// Add `data` as the last child of `parent`.
  ///
  /// # Panics
  ///
  /// If `parent` was not created by this arena.
  pub fn append_child(&mut self, parent: NodeId, data: T) -> NodeId {
    assert!(
      parent.0 < self.nodes.len(),
      "{parent:?} does not belong to this arena"
    );
    let id = self.push(data, Some(parent));
    self.nodes[parent.0].children.push(id);
    id
  }

  pub fn get(&self, node: NodeId) -> Option<&T> {
    self.nodes.get(node.0).map(|entry| &entry.data)
  }

  pub fn len(&self) -> usize {
    self.nodes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.nodes.is_empty()
  }

  fn push(&mut self, data: T, parent: Option<NodeId>) -> NodeId {
    let id = NodeId(self.nodes.len());
    self.nodes.push(NodeEntry {
      data,
      parent,
      children: Vec::new(),
    });
    id
  }
}

impl<T> SyntaxTree for NodeArena<T> {
  type NodeId = NodeId;

  fn parent(&self, node: NodeId) -> Option<NodeId> {
    self.nodes.get(node.0).and_then(|entry| entry.parent)
  }

  fn children(&self, node: NodeId) -> &[NodeId] {
    self
      .nodes
      .get(node.0)
      .map(|entry| entry.children.as_slice())
      .unwrap_or_default()
  }
}
