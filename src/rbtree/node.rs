use super::{Color, Side};

/// Handle to a slot in the node arena
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(super) struct NodeId(usize);

/// The sentinel slot: every leaf position and the root's parent point here
pub(super) const NIL: NodeId = NodeId(0);

/// Structural part of a node. The key lives in a separate vector so that the
/// sentinel does not need one
#[derive(Debug, Copy, Clone)]
struct Links {
    color: Color,
    parent: NodeId,
    left: NodeId,
    right: NodeId,
}

impl Links {
    const SENTINEL: Links = Links {
        color: Color::Black,
        parent: NIL,
        left: NIL,
        right: NIL,
    };
}

/// Owns every node of a tree.
/// Slot 0 is reserved for the sentinel, so `keys[i - 1]` is the key of slot `i`
#[derive(Clone)]
pub(super) struct NodeStore<T> {
    links: Vec<Links>,
    keys: Vec<T>,
}

impl<T> NodeStore<T> {
    pub(super) fn with_capacity(capacity: usize) -> Self {
        let mut links = Vec::with_capacity(capacity + 1);
        links.push(Links::SENTINEL);
        NodeStore {
            links,
            keys: Vec::with_capacity(capacity),
        }
    }

    /// Allocate a new red node with both children and parent pointing to the sentinel
    pub(super) fn push(&mut self, key: T) -> NodeId {
        let id = NodeId(self.links.len());
        self.links.push(Links {
            color: Color::Red,
            ..Links::SENTINEL
        });
        self.keys.push(key);
        id
    }

    /// Number of real nodes (the sentinel is not counted)
    pub(super) fn len(&self) -> usize {
        self.keys.len()
    }

    /// Return the key stored at `id`.
    /// Panics if `id` is the sentinel
    pub(super) fn key(&self, id: NodeId) -> &T {
        assert_ne!(id, NIL, "The sentinel holds no key");
        &self.keys[id.0 - 1]
    }

    pub(super) fn color(&self, id: NodeId) -> Color {
        self.links[id.0].color
    }

    pub(super) fn is_red(&self, id: NodeId) -> bool {
        self.color(id) == Color::Red
    }

    pub(super) fn set_color(&mut self, id: NodeId, color: Color) {
        self.write(id).color = color;
    }

    pub(super) fn parent(&self, id: NodeId) -> NodeId {
        self.links[id.0].parent
    }

    pub(super) fn set_parent(&mut self, id: NodeId, parent: NodeId) {
        self.write(id).parent = parent;
    }

    pub(super) fn left(&self, id: NodeId) -> NodeId {
        self.links[id.0].left
    }

    pub(super) fn right(&self, id: NodeId) -> NodeId {
        self.links[id.0].right
    }

    pub(super) fn child(&self, id: NodeId, side: Side) -> NodeId {
        match side {
            Side::Left => self.left(id),
            Side::Right => self.right(id),
        }
    }

    pub(super) fn set_child(&mut self, id: NodeId, side: Side, child: NodeId) {
        let links = self.write(id);
        match side {
            Side::Left => links.left = child,
            Side::Right => links.right = child,
        }
    }

    /// Which child of its parent `id` is.
    /// The caller must make sure `id` has a parent
    pub(super) fn side_of(&self, id: NodeId) -> Side {
        let parent = self.parent(id);
        debug_assert_ne!(parent, NIL);
        if self.left(parent) == id {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Mutable access to a real node's links.
    /// The sentinel is never mutated
    fn write(&mut self, id: NodeId) -> &mut Links {
        assert_ne!(id, NIL, "The sentinel must not be mutated");
        &mut self.links[id.0]
    }
}
