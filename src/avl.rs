//! An ordered set based on an AVL tree.

use compare::{Compare, Natural};
use std::fmt::{self, Debug};

use crate::arena::{Arena, Dir, NodeId};
use crate::OrderedSet;

/// An ordered set based on an AVL tree.
///
/// Every node stores the height of its subtree; whenever an insertion leaves
/// a node with subtree heights differing by two, a single or double rotation
/// restores the balance. Equal items are kept, not replaced: they descend to
/// the right of each other, so `len` counts every insertion.
///
/// The behavior of this set is undefined if an item's ordering relative to
/// any other item changes while the item is in the set.
#[derive(Clone)]
pub struct AvlSet<T, C = Natural<T>>
where
    C: Compare<T>,
{
    arena: Arena<T, i32>,
    cmp: C,
}

impl<T> AvlSet<T>
where
    T: Ord,
{
    /// Creates an empty set ordered according to the natural order of its
    /// items.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = bbtree::AvlSet::new();
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
        AvlSet::with_cmp(compare::natural())
    }
}

impl<T, C> AvlSet<T, C>
where
    C: Compare<T>,
{
    /// Creates an empty set ordered according to the given comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{natural, Compare};
    ///
    /// let mut set = bbtree::AvlSet::with_cmp(natural().rev());
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut it = set.iter();
    /// assert_eq!(it.next(), Some(&3));
    /// assert_eq!(it.next(), Some(&2));
    /// assert_eq!(it.next(), Some(&1));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn with_cmp(cmp: C) -> Self {
        AvlSet { arena: Arena::new(), cmp }
    }

    /// Checks if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Returns the number of items in the set, counting duplicates.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = bbtree::AvlSet::new();
    /// assert_eq!(set.len(), 0);
    ///
    /// set.insert(2);
    /// set.insert(2);
    /// assert_eq!(set.len(), 2);
    /// ```
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
    /// let mut set = bbtree::AvlSet::new();
    /// assert!(!set.contains(&1));
    /// set.insert(1);
    /// assert!(set.contains(&1));
    /// ```
    pub fn insert(&mut self, item: T) {
        let node = self.arena.attach(&self.cmp, item, 0);

        // Rebalance along the path from the new leaf's parent to the root.
        // An insertion creates at most one imbalance point on this path, so
        // one bottom-up pass restores the invariant everywhere.
        let mut cur = self.arena[node].parent;
        while let Some(id) = cur {
            self.rebalance(id);
            cur = self.arena[id].parent;
        }
    }

    /// Checks if the set contains an item equal to the given one.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = bbtree::AvlSet::new();
    /// set.insert(1);
    /// assert!(set.contains(&1));
    /// assert!(!set.contains(&2));
    /// ```
    pub fn contains<Q: ?Sized>(&self, item: &Q) -> bool
    where
        C: Compare<Q, T>,
    {
        self.arena.find(&self.cmp, item).is_some()
    }

    /// Returns the height of the tree: 0 for a single item, -1 when empty.
    pub fn height(&self) -> i32 {
        self.height_of(self.arena.root())
    }

    /// Returns an iterator over the set's items in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter(self.arena.iter())
    }

    fn height_of(&self, link: Option<NodeId>) -> i32 {
        link.map_or(-1, |id| self.arena[id].balance)
    }

    fn update_height(&mut self, id: NodeId) {
        let left = self.height_of(self.arena.child(id, Dir::Left));
        let right = self.height_of(self.arena.child(id, Dir::Right));
        self.arena[id].balance = 1 + left.max(right);
    }

    fn balance_factor(&self, id: NodeId) -> i32 {
        self.height_of(self.arena.child(id, Dir::Left))
            - self.height_of(self.arena.child(id, Dir::Right))
    }

    fn rotate(&mut self, dir: Dir, id: NodeId) -> NodeId {
        let up = self.arena.rotate(dir, id);
        // The pivot sank a level; recompute its height before its new
        // parent's.
        self.update_height(id);
        self.update_height(up);
        up
    }

    /// Recomputes `id`'s height and resolves a +/-2 balance factor with a
    /// single or double rotation. Returns the subtree's new root so callers
    /// can keep climbing.
    fn rebalance(&mut self, id: NodeId) -> NodeId {
        self.update_height(id);
        match self.balance_factor(id) {
            -2 => {
                let right = self
                    .arena
                    .child(id, Dir::Right)
                    .expect("right-heavy node has a right child");
                if self.balance_factor(right) == 1 {
                    self.rotate(Dir::Right, right);
                }
                self.rotate(Dir::Left, id)
            }
            2 => {
                let left = self
                    .arena
                    .child(id, Dir::Left)
                    .expect("left-heavy node has a left child");
                if self.balance_factor(left) == -1 {
                    self.rotate(Dir::Left, left);
                }
                self.rotate(Dir::Right, id)
            }
            _ => id,
        }
    }
}

impl<T, C> OrderedSet<T> for AvlSet<T, C>
where
    C: Compare<T>,
{
    fn insert(&mut self, item: T) {
        AvlSet::insert(self, item);
    }

    fn contains(&self, item: &T) -> bool {
        AvlSet::contains(self, item)
    }

    fn len(&self) -> usize {
        AvlSet::len(self)
    }
}

impl<T, C> Debug for AvlSet<T, C>
where
    T: Debug,
    C: Compare<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, C> Default for AvlSet<T, C>
where
    C: Compare<T> + Default,
{
    fn default() -> Self {
        AvlSet::with_cmp(C::default())
    }
}

impl<T, C> Extend<T> for AvlSet<T, C>
where
    C: Compare<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, it: I) {
        for item in it {
            self.insert(item);
        }
    }
}

impl<T, C> FromIterator<T> for AvlSet<T, C>
where
    C: Compare<T> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(it: I) -> Self {
        let mut set: Self = Default::default();
        set.extend(it);
        set
    }
}

impl<'a, T, C> IntoIterator for &'a AvlSet<T, C>
where
    C: Compare<T>,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// An iterator over an [`AvlSet`]'s items in ascending order.
pub struct Iter<'a, T>(crate::arena::Iter<'a, T, i32>);

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
