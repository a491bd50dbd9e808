//! Ordered sets based on self-balancing binary search trees.
//!
//! Two balance schemes are provided over one shared structural core: an AVL
//! tree ([`AvlSet`]), which stores per-node heights and rotates when subtree
//! heights drift two apart, and a red-black tree ([`RbSet`]), which keeps a
//! color tag per node and restores balance with the classical recolor-and-
//! rotate insertion fixup. Both support insertion, exact-match lookup, and
//! in-order traversal in O(log n); both keep equal items, sorting them to
//! the right. Deletion is not supported.
//!
//! Nodes are stored in an index arena owned by the tree, so parent
//! back-references are plain indices rather than owning pointers.
//!
//! # Examples
//!
//! ```
//! use bbtree::{AvlSet, RbSet};
//!
//! let mut avl = AvlSet::new();
//! let mut rb = RbSet::new();
//!
//! for word in ["act", "cat", "tac"] {
//!     avl.insert(word);
//!     rb.insert(word);
//! }
//!
//! assert!(avl.contains(&"cat") && rb.contains(&"cat"));
//! assert_eq!(avl.iter().collect::<Vec<_>>(), rb.iter().collect::<Vec<_>>());
//! ```

mod arena;

pub mod anagram;
pub mod avl;
pub mod rb;

#[cfg(feature = "quickcheck")]
mod quickcheck;

pub use self::avl::AvlSet;
pub use self::rb::RbSet;

/// An ordered container supporting insertion and exact-match lookup.
///
/// Both tree types expose this capability identically; consumers that only
/// need "insert a key" and "is this exact key present", like the
/// [`anagram`] module, are written against it.
pub trait OrderedSet<T> {
    /// Inserts an item. Items equal to one already present are kept.
    fn insert(&mut self, item: T);

    /// Checks for an item exactly equal to the given one.
    fn contains(&self, item: &T) -> bool;

    /// The number of items inserted, counting duplicates.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
