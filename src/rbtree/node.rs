/*!
 * Tree Node Storage
 * Arena-backed nodes addressed by index, with a shared sentinel at slot 0
 */

use crate::core::types::Pid;

/// Node color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Color {
    Red,
    Black,
}

/// Handle to a node inside a [`RbTree`](super::RbTree) arena
///
/// Index 0 is the shared sentinel ("nil") that stands in for every leaf and
/// for the parent of the root. Handles are only meaningful for the tree that
/// produced them and are invalidated by [`remove`](super::RbTree::remove).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(super) u32);

impl NodeId {
    /// The sentinel slot
    pub(super) const NIL: NodeId = NodeId(0);

    #[inline]
    pub(super) fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub(super) fn is_nil(self) -> bool {
        self.0 == 0
    }
}

/// A single tree node
///
/// The key is the process virtual runtime; the payload is opaque to the tree.
/// Parent links are plain indices used only for fixup navigation - the arena
/// owns every slot, so back-references never carry ownership.
#[derive(Debug, Clone)]
pub(super) struct Node {
    pub key: f64,
    pub pid: Pid,
    pub color: Color,
    pub parent: NodeId,
    pub left: NodeId,
    pub right: NodeId,
}

impl Node {
    /// The sentinel: black, self-linked, key never inspected
    pub(super) fn sentinel() -> Self {
        Self {
            key: 0.0,
            pid: 0,
            color: Color::Black,
            parent: NodeId::NIL,
            left: NodeId::NIL,
            right: NodeId::NIL,
        }
    }

    pub(super) fn new(key: f64, pid: Pid) -> Self {
        Self {
            key,
            pid,
            color: Color::Red,
            parent: NodeId::NIL,
            left: NodeId::NIL,
            right: NodeId::NIL,
        }
    }
}
