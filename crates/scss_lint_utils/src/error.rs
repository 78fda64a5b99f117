/// The syntax tree broke the parent/children invariant: a node names a parent
/// whose children list does not contain it.
///
/// This points at a bug in whatever built the tree, so it is reported to the
/// caller instead of guessing a position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("node {node} is not among the children of its parent {parent}")]
pub struct ConsistencyError {
  pub node: String,
  pub parent: String,
}

impl ConsistencyError {
  pub fn new(node: &impl std::fmt::Debug, parent: &impl std::fmt::Debug) -> Self {
    Self {
      node: format!("{:?}", node),
      parent: format!("{:?}", parent),
    }
  }
}
