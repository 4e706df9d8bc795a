mod fixup;
mod node;
mod rotate;
mod tree;
mod tree_iter;
mod validate;

pub use tree::RBTree;
pub use tree_iter::TreeIter;
pub use validate::Violation;

// A red-black tree with `n` nodes has height at most `2*log₂(n+1)`, so 128
// levels cover any tree whose size fits in a `usize`
const MAX_HEIGHT: usize = 128;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Color {
    Red,
    Black,
}

/// Direction of a child relative to its parent.
/// Every fixup case comes in two mirrored flavours, selected by this value
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

impl Side {
    fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}
