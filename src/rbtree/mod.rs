/*!
 * Red-Black Ready-Queue
 * Self-balancing BST keyed by virtual runtime with O(log n) minimum
 * extraction and O(log n) arbitrary-node removal
 *
 * Nodes live in a contiguous arena addressed by `NodeId` indices; slot 0 is
 * the shared sentinel, so fixup code has no null-case branching. Equal keys
 * descend to the right subtree, which makes tie order follow insertion order.
 */

mod node;

use crate::core::types::Pid;
use node::{Color, Node};

pub use node::NodeId;

/// Ordered ready-queue over (virtual runtime, pid) pairs
#[derive(Debug, Clone)]
pub struct RbTree {
    nodes: Vec<Node>,
    free: Vec<NodeId>,
    root: NodeId,
    len: usize,
}

impl RbTree {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::sentinel()],
            free: Vec::new(),
            root: NodeId::NIL,
            len: 0,
        }
    }

    /// Number of live (non-sentinel) nodes
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Key of a live node. The handle must be current for this tree.
    #[inline]
    pub fn key(&self, id: NodeId) -> f64 {
        self.nodes[id.index()].key
    }

    /// Payload of a live node. The handle must be current for this tree.
    #[inline]
    pub fn pid(&self, id: NodeId) -> Pid {
        self.nodes[id.index()].pid
    }

    /// Key at the root, if any. The admission policy seeds new arrivals here
    /// rather than at the minimum, landing them near the queue's center.
    pub fn root_key(&self) -> Option<f64> {
        if self.root.is_nil() {
            None
        } else {
            Some(self.nodes[self.root.index()].key)
        }
    }

    /// Insert a (key, pid) pair. O(log n). Equal keys go right.
    pub fn insert(&mut self, key: f64, pid: Pid) -> NodeId {
        let z = self.alloc(key, pid);

        let mut y = NodeId::NIL;
        let mut x = self.root;
        while !x.is_nil() {
            y = x;
            x = if key < self.node(x).key {
                self.node(x).left
            } else {
                self.node(x).right
            };
        }

        self.node_mut(z).parent = y;
        if y.is_nil() {
            self.root = z;
        } else if key < self.node(y).key {
            self.node_mut(y).left = z;
        } else {
            self.node_mut(y).right = z;
        }

        self.len += 1;
        self.fix_insert(z);
        z
    }

    /// Remove a node by handle. O(log n).
    ///
    /// Precondition: `z` was returned by `insert`/`minimum`/`find` on this
    /// tree and has not been removed since. This is a caller contract, not a
    /// checked error. Removal may relocate another node's key/payload into
    /// `z`'s slot (successor splice), so every other outstanding handle is
    /// invalidated as well.
    pub fn remove(&mut self, z: NodeId) {
        // y is the node physically spliced out: z itself when z has at most
        // one real child, otherwise z's in-order successor.
        let y = if self.node(z).left.is_nil() || self.node(z).right.is_nil() {
            z
        } else {
            self.successor(z)
        };

        let x = if !self.node(y).left.is_nil() {
            self.node(y).left
        } else {
            self.node(y).right
        };

        // x replaces y in y's parent. The sentinel's parent is written here
        // on purpose: fix_delete navigates through it when x is nil.
        let yp = self.node(y).parent;
        self.node_mut(x).parent = yp;
        if yp.is_nil() {
            self.root = x;
        } else if y == self.node(yp).left {
            self.node_mut(yp).left = x;
        } else {
            self.node_mut(yp).right = x;
        }

        if y != z {
            let (key, pid) = {
                let n = self.node(y);
                (n.key, n.pid)
            };
            let zn = self.node_mut(z);
            zn.key = key;
            zn.pid = pid;
        }

        let y_was_black = self.node(y).color == Color::Black;
        self.release(y);
        self.len -= 1;

        // Splicing out a red node changes no black heights and cannot put
        // two reds in a row.
        if y_was_black {
            self.fix_delete(x);
        }
    }

    /// Minimum-key node, or `None` on an empty tree. O(log n).
    pub fn minimum(&self) -> Option<NodeId> {
        if self.root.is_nil() {
            None
        } else {
            Some(self.minimum_from(self.root))
        }
    }

    /// Locate a node by exact (key, pid). O(log n) for distinct keys.
    ///
    /// The scheduling loop never needs this (it only ever takes the minimum);
    /// provided for completeness and for test harnesses.
    pub fn find(&self, key: f64, pid: Pid) -> Option<NodeId> {
        let mut x = self.root;
        while !x.is_nil() {
            let n = self.node(x);
            if n.key == key && n.pid == pid {
                return Some(x);
            }
            x = if key < n.key { n.left } else { n.right };
        }
        None
    }

    // --- arena plumbing ---

    #[inline]
    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    #[inline]
    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    fn alloc(&mut self, key: f64, pid: Pid) -> NodeId {
        let node = Node::new(key, pid);
        match self.free.pop() {
            Some(id) => {
                self.nodes[id.index()] = node;
                id
            }
            None => {
                let id = NodeId(self.nodes.len() as u32);
                self.nodes.push(node);
                id
            }
        }
    }

    fn release(&mut self, id: NodeId) {
        self.free.push(id);
    }

    // --- navigation helpers ---

    #[inline]
    fn left(&self, id: NodeId) -> NodeId {
        self.node(id).left
    }

    #[inline]
    fn right(&self, id: NodeId) -> NodeId {
        self.node(id).right
    }

    #[inline]
    fn parent(&self, id: NodeId) -> NodeId {
        self.node(id).parent
    }

    #[inline]
    fn color(&self, id: NodeId) -> Color {
        self.node(id).color
    }

    #[inline]
    fn set_color(&mut self, id: NodeId, color: Color) {
        // The sentinel must stay black; nothing ever recolors slot 0 red
        // because fixups only redden real parents/uncles/siblings.
        self.node_mut(id).color = color;
    }

    fn minimum_from(&self, mut x: NodeId) -> NodeId {
        while !self.left(x).is_nil() {
            x = self.left(x);
        }
        x
    }

    /// In-order successor: leftmost of the right subtree, or the nearest
    /// ancestor reached by right-child ascent.
    fn successor(&self, z: NodeId) -> NodeId {
        if !self.right(z).is_nil() {
            return self.minimum_from(self.right(z));
        }
        let mut z = z;
        let mut y = self.parent(z);
        while !y.is_nil() && z == self.right(y) {
            z = y;
            y = self.parent(y);
        }
        y
    }

    // --- rotations ---

    fn left_rotate(&mut self, x: NodeId) {
        let y = self.right(x);

        let yl = self.left(y);
        self.node_mut(x).right = yl;
        if !yl.is_nil() {
            self.node_mut(yl).parent = x;
        }

        let xp = self.parent(x);
        self.node_mut(y).parent = xp;
        if xp.is_nil() {
            self.root = y;
        } else if x == self.left(xp) {
            self.node_mut(xp).left = y;
        } else {
            self.node_mut(xp).right = y;
        }

        self.node_mut(y).left = x;
        self.node_mut(x).parent = y;
    }

    fn right_rotate(&mut self, x: NodeId) {
        let y = self.left(x);

        let yr = self.right(y);
        self.node_mut(x).left = yr;
        if !yr.is_nil() {
            self.node_mut(yr).parent = x;
        }

        let xp = self.parent(x);
        self.node_mut(y).parent = xp;
        if xp.is_nil() {
            self.root = y;
        } else if x == self.right(xp) {
            self.node_mut(xp).right = y;
        } else {
            self.node_mut(xp).left = y;
        }

        self.node_mut(y).right = x;
        self.node_mut(x).parent = y;
    }

    // --- fixups ---

    /// Restore invariants after inserting red node `z`. The only possible
    /// violation is a red parent (or a red root, fixed unconditionally at
    /// the end).
    fn fix_insert(&mut self, mut z: NodeId) {
        while self.color(self.parent(z)) == Color::Red {
            let p = self.parent(z);
            let g = self.parent(p);
            if p == self.left(g) {
                let u = self.right(g);
                if self.color(u) == Color::Red {
                    // Red uncle: push the violation up to the grandparent.
                    self.set_color(p, Color::Black);
                    self.set_color(u, Color::Black);
                    self.set_color(g, Color::Red);
                    z = g;
                } else {
                    if z == self.right(p) {
                        // Inner grandchild: rotate into the outer case.
                        z = p;
                        self.left_rotate(z);
                    }
                    let p = self.parent(z);
                    let g = self.parent(p);
                    self.set_color(p, Color::Black);
                    self.set_color(g, Color::Red);
                    self.right_rotate(g);
                }
            } else {
                let u = self.left(g);
                if self.color(u) == Color::Red {
                    self.set_color(p, Color::Black);
                    self.set_color(u, Color::Black);
                    self.set_color(g, Color::Red);
                    z = g;
                } else {
                    if z == self.left(p) {
                        z = p;
                        self.right_rotate(z);
                    }
                    let p = self.parent(z);
                    let g = self.parent(p);
                    self.set_color(p, Color::Black);
                    self.set_color(g, Color::Red);
                    self.left_rotate(g);
                }
            }
        }
        let root = self.root;
        self.set_color(root, Color::Black);
    }

    /// Restore black-height balance after splicing out a black node. `x`
    /// carries the "extra black" deficit and may be the sentinel, whose
    /// parent link was pointed at the splice site by `remove`.
    fn fix_delete(&mut self, mut x: NodeId) {
        while x != self.root && self.color(x) == Color::Black {
            let p = self.parent(x);
            if x == self.left(p) {
                let mut w = self.right(p);
                if self.color(w) == Color::Red {
                    // Red sibling: convert to a black-sibling case.
                    self.set_color(w, Color::Black);
                    self.set_color(p, Color::Red);
                    self.left_rotate(p);
                    w = self.right(p);
                }
                if self.color(self.left(w)) == Color::Black
                    && self.color(self.right(w)) == Color::Black
                {
                    // Both nephews black: move the deficit up.
                    self.set_color(w, Color::Red);
                    x = self.parent(x);
                } else {
                    if self.color(self.right(w)) == Color::Black {
                        // Near nephew red, far black: rotate at the sibling.
                        let wl = self.left(w);
                        self.set_color(wl, Color::Black);
                        self.set_color(w, Color::Red);
                        self.right_rotate(w);
                        w = self.right(self.parent(x));
                    }
                    // Far nephew red: terminal case.
                    let p = self.parent(x);
                    let pc = self.color(p);
                    self.set_color(w, pc);
                    self.set_color(p, Color::Black);
                    let wr = self.right(w);
                    self.set_color(wr, Color::Black);
                    self.left_rotate(p);
                    x = self.root;
                }
            } else {
                let mut w = self.left(p);
                if self.color(w) == Color::Red {
                    self.set_color(w, Color::Black);
                    self.set_color(p, Color::Red);
                    self.right_rotate(p);
                    w = self.left(p);
                }
                if self.color(self.left(w)) == Color::Black
                    && self.color(self.right(w)) == Color::Black
                {
                    self.set_color(w, Color::Red);
                    x = self.parent(x);
                } else {
                    if self.color(self.left(w)) == Color::Black {
                        let wr = self.right(w);
                        self.set_color(wr, Color::Black);
                        self.set_color(w, Color::Red);
                        self.left_rotate(w);
                        w = self.left(self.parent(x));
                    }
                    let p = self.parent(x);
                    let pc = self.color(p);
                    self.set_color(w, pc);
                    self.set_color(p, Color::Black);
                    let wl = self.left(w);
                    self.set_color(wl, Color::Black);
                    self.right_rotate(p);
                    x = self.root;
                }
            }
        }
        self.set_color(x, Color::Black);
    }
}

impl Default for RbTree {
    fn default() -> Self {
        Self::new()
    }
}
