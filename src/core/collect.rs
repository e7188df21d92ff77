//! Node collection.
//!
//! Flattens a layout tree in post-order: every node's descendants come
//! before the node itself, children in order, the root last.

use crate::document::{LayoutNode, SceneNode};

/// Lazy post-order walk over a layout tree.
///
/// Uses an explicit stack so deeply nested documents cannot overflow the
/// call stack. Walking the same root twice yields the same sequence.
pub struct PostOrder<'a> {
    /// Pending nodes paired with the index of the next child to descend into.
    stack: Vec<(&'a LayoutNode, usize)>,
}

impl<'a> PostOrder<'a> {
    pub fn new(root: &'a LayoutNode) -> Self {
        Self {
            stack: vec![(root, 0)],
        }
    }
}

impl<'a> Iterator for PostOrder<'a> {
    type Item = &'a LayoutNode;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let frame = self.stack.last_mut()?;
            let node: &'a LayoutNode = frame.0;

            match node.children().get(frame.1) {
                Some(child) => {
                    frame.1 += 1;
                    self.stack.push((child, 0));
                }
                None => {
                    self.stack.pop();
                    return Some(node);
                }
            }
        }
    }
}

/// Collect every node reachable from `root`, in post-order.
pub fn flatten(root: &LayoutNode) -> Vec<&LayoutNode> {
    PostOrder::new(root).collect()
}
