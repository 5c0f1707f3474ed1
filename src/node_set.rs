/*!
`NodeSet`: the ordered, duplicate-tolerant-until-deduplicated container that
flows between every evaluator step.
*/

use crate::dom;
use std::iter::FromIterator;
use xml_dom::level2::RefNode;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

/// A sequence of DOM nodes in document order. Not a true set: duplicates
/// persist until a dedup point (the end of an absolute path, a `/` step, or
/// a `//` step) collapses them by identity.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct NodeSet(Vec<RefNode>);

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl NodeSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RefNode> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<RefNode> {
        self.0
    }

    pub fn push(&mut self, node: RefNode) {
        self.0.push(node);
    }

    pub fn extend(&mut self, other: NodeSet) {
        self.0.extend(other.0);
    }

    /// Deduplicate by node identity, preserving the order of first
    /// occurrence. Used at the dedup points the evaluator's path operations
    /// name explicitly — never applied implicitly inside `Pair`.
    pub fn unique(&self) -> Self {
        let mut result: Vec<RefNode> = Vec::with_capacity(self.0.len());
        for node in &self.0 {
            if !result.iter().any(|seen| dom::same_identity(seen, node)) {
                result.push(node.clone());
            }
        }
        Self(result)
    }

    /// Every node in the set plus all of its descendants, in document order,
    /// each subtree visited self-first. The basis for the `//` step.
    pub fn descendants_or_self(&self) -> Self {
        let mut result = Vec::new();
        for node in &self.0 {
            collect_descendants_or_self(node, &mut result);
        }
        Self(result)
    }
}

impl From<RefNode> for NodeSet {
    fn from(node: RefNode) -> Self {
        Self(vec![node])
    }
}

impl FromIterator<RefNode> for NodeSet {
    fn from_iter<T: IntoIterator<Item = RefNode>>(iter: T) -> Self {
        Self(Vec::from_iter(iter))
    }
}

impl IntoIterator for NodeSet {
    type Item = RefNode;
    type IntoIter = std::vec::IntoIter<RefNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

// ------------------------------------------------------------------------------------------------
// Private Functions
// ------------------------------------------------------------------------------------------------

fn collect_descendants_or_self(node: &RefNode, into: &mut Vec<RefNode>) {
    into.push(node.clone());
    for child in dom::children(node) {
        collect_descendants_or_self(&child, into);
    }
}

// ------------------------------------------------------------------------------------------------
// Unit Tests
// ------------------------------------------------------------------------------------------------
