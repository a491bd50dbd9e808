//! An ordered set based on a red-black tree.

use compare::{Compare, Natural};
use std::fmt::{self, Debug};

use crate::arena::{Arena, Dir, NodeId};
use crate::OrderedSet;

/// A node's color tag. Absent children count as black.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Color {
    Red,
    Black,
}

/// An ordered set based on a red-black tree.
///
/// Balance is kept through the node colors alone: the root is black, a red
/// node never has a red child, and every path from a node down to an absent
/// child passes the same number of black nodes. New items start out red and
/// an insertion fixup walking toward the root restores the invariants with
/// recoloring and at most two rotations. Equal items are kept, not replaced:
/// they descend to the right of each other, so `len` counts every insertion.
///
/// The behavior of this set is undefined if an item's ordering relative to
/// any other item changes while the item is in the set.
#[derive(Clone)]
pub struct RbSet<T, C = Natural<T>>
where
    C: Compare<T>,
{
    arena: Arena<T, Color>,
    cmp: C,
}

impl<T> RbSet<T>
where
    T: Ord,
{
    /// Creates an empty set ordered according to the natural order of its
    /// items.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = bbtree::RbSet::new();
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut it = set.iter();
    /// assert_eq!(it.next(), Some(&1));
    /// assert_eq!(it.next(), Some(&2));
    /// assert_eq!(it.next(), Some(&3));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn new() -> Self {
        RbSet::with_cmp(compare::natural())
    }
}

impl<T, C> RbSet<T, C>
where
    C: Compare<T>,
{
    /// Creates an empty set ordered according to the given comparator.
    pub fn with_cmp(cmp: C) -> Self {
        RbSet { arena: Arena::new(), cmp }
    }

    /// Checks if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Returns the number of items in the set, counting duplicates.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns a reference to the set's comparator.
    pub fn cmp(&self) -> &C {
        &self.cmp
    }

    /// Removes all items from the set.
    pub fn clear(&mut self) {
        self.arena.clear();
    }

    /// Inserts an item into the set. An item equal to one already present is
    /// kept as a separate node.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = bbtree::RbSet::new();
    /// assert!(!set.contains(&1));
    /// set.insert(1);
    /// set.insert(1);
    /// assert!(set.contains(&1));
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn insert(&mut self, item: T) {
        let node = self.arena.attach(&self.cmp, item, Color::Red);
        self.fixup(node);
    }

    /// Checks if the set contains an item equal to the given one.
    pub fn contains<Q: ?Sized>(&self, item: &Q) -> bool
    where
        C: Compare<Q, T>,
    {
        self.arena.find(&self.cmp, item).is_some()
    }

    /// Returns the height of the tree: 0 for a single item, -1 when empty.
    pub fn height(&self) -> i32 {
        self.arena.height(self.arena.root())
    }

    /// Returns an iterator over the set's items in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter(self.arena.iter())
    }

    /// Restores the red-black invariants after `node` was attached red.
    ///
    /// Only the red-uncle case moves the violation up the tree, and it does
    /// so without rotating, so the loop performs at most two rotations
    /// total before terminating.
    fn fixup(&mut self, mut node: NodeId) {
        loop {
            let parent = match self.arena[node].parent {
                None => {
                    self.arena[node].balance = Color::Black;
                    return;
                }
                Some(parent) => parent,
            };

            if self.arena[parent].balance == Color::Black {
                return;
            }

            // A red parent is never the root, so the grandparent exists.
            let grandparent = self.arena[parent]
                .parent
                .expect("red parent is not the root");
            let pdir = self.arena.dir_of(grandparent, parent);
            let uncle = self.arena.child(grandparent, pdir.opposite());

            if let Some(uncle) = uncle.filter(|&u| self.arena[u].balance == Color::Red) {
                // Red uncle: recolor and push the violation up two levels.
                self.arena[parent].balance = Color::Black;
                self.arena[uncle].balance = Color::Black;
                self.arena[grandparent].balance = Color::Red;
                node = grandparent;
                continue;
            }

            // Black or absent uncle. A zig-zag first straightens into a
            // chain leaning toward `pdir` with one rotation at the parent.
            if self.arena.dir_of(parent, node) != pdir {
                self.arena.rotate(pdir, parent);
            }

            let middle = self
                .arena
                .child(grandparent, pdir)
                .expect("straightened chain keeps a child on the leaning side");
            self.arena[middle].balance = Color::Black;
            self.arena[grandparent].balance = Color::Red;
            self.arena.rotate(pdir.opposite(), grandparent);
            return;
        }
    }
}

impl<T, C> OrderedSet<T> for RbSet<T, C>
where
    C: Compare<T>,
{
    fn insert(&mut self, item: T) {
        RbSet::insert(self, item);
    }

    fn contains(&self, item: &T) -> bool {
        RbSet::contains(self, item)
    }

    fn len(&self) -> usize {
        RbSet::len(self)
    }
}

impl<T, C> Debug for RbSet<T, C>
where
    T: Debug,
    C: Compare<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, C> Default for RbSet<T, C>
where
    C: Compare<T> + Default,
{
    fn default() -> Self {
        RbSet::with_cmp(C::default())
    }
}

impl<T, C> Extend<T> for RbSet<T, C>
where
    C: Compare<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, it: I) {
        for item in it {
            self.insert(item);
        }
    }
}

impl<T, C> FromIterator<T> for RbSet<T, C>
where
    C: Compare<T> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(it: I) -> Self {
        let mut set: Self = Default::default();
        set.extend(it);
        set
    }
}

impl<'a, T, C> IntoIterator for &'a RbSet<T, C>
where
    C: Compare<T>,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// An iterator over an [`RbSet`]'s items in ascending order.
pub struct Iter<'a, T>(crate::arena::Iter<'a, T, Color>);

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter(self.0.clone())
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
