//! Index arena shared by both tree variants.
//!
//! Nodes live in a growable table; links are table indices, so children are
//! owned by the arena while the parent back-reference stays non-owning. The
//! balance metadata is a type parameter, which lets the AVL and red-black
//! schemes reuse the same attach, find, and rotation code.

use compare::Compare;
use std::cmp::Ordering::*;
use std::ops::{Index, IndexMut};

/// A handle to a node in an [`Arena`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct NodeId(usize);

/// A rotation or descent direction.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Dir {
    Left,
    Right,
}

impl Dir {
    pub fn opposite(self) -> Dir {
        match self {
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Node<K, B> {
    pub key: K,
    pub balance: B,
    pub parent: Option<NodeId>,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

impl<K, B> Node<K, B> {
    fn new(key: K, balance: B, parent: Option<NodeId>) -> Self {
        Node { key, balance, parent, left: None, right: None }
    }
}

#[derive(Clone, Debug)]
pub struct Arena<K, B> {
    nodes: Vec<Node<K, B>>,
    root: Option<NodeId>,
}

impl<K, B> Arena<K, B> {
    pub fn new() -> Self {
        Arena { nodes: Vec::new(), root: None }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    pub fn child(&self, id: NodeId, dir: Dir) -> Option<NodeId> {
        match dir {
            Dir::Left => self[id].left,
            Dir::Right => self[id].right,
        }
    }

    /// Links `child` under `id` on the given side, fixing the child's parent
    /// back-reference.
    pub fn set_child(&mut self, id: NodeId, dir: Dir, child: Option<NodeId>) {
        match dir {
            Dir::Left => self[id].left = child,
            Dir::Right => self[id].right = child,
        }
        if let Some(child) = child {
            self[child].parent = Some(id);
        }
    }

    /// Which side of `parent` holds `child`.
    pub fn dir_of(&self, parent: NodeId, child: NodeId) -> Dir {
        if self[parent].left == Some(child) {
            Dir::Left
        } else {
            Dir::Right
        }
    }

    /// Standard BST attach: descends from the root and links a new leaf in
    /// the first absent slot. Strictly-less keys go left; equal keys go
    /// right, so duplicates are kept.
    pub fn attach<C>(&mut self, cmp: &C, key: K, balance: B) -> NodeId
    where
        C: Compare<K>,
    {
        let id = NodeId(self.nodes.len());

        let mut cur = match self.root {
            None => {
                self.nodes.push(Node::new(key, balance, None));
                self.root = Some(id);
                return id;
            }
            Some(root) => root,
        };

        let dir = loop {
            let next = match cmp.compare(&key, &self[cur].key) {
                Less => Dir::Left,
                _ => Dir::Right,
            };
            match self.child(cur, next) {
                Some(child) => cur = child,
                None => break next,
            }
        };

        self.nodes.push(Node::new(key, balance, Some(cur)));
        self.set_child(cur, dir, Some(id));
        id
    }

    /// Exact-match descent from the root.
    pub fn find<C, Q: ?Sized>(&self, cmp: &C, key: &Q) -> Option<NodeId>
    where
        C: Compare<Q, K>,
    {
        let mut cur = self.root;
        while let Some(id) = cur {
            cur = match cmp.compare(key, &self[id].key) {
                Equal => return Some(id),
                Less => self.child(id, Dir::Left),
                Greater => self.child(id, Dir::Right),
            };
        }
        None
    }

    /// Rotates the subtree at `id` in direction `dir` and returns the new
    /// subtree root. The child opposite `dir` moves up, `id` becomes its
    /// `dir`-side child, and the displaced inner grandchild is relinked as
    /// `id`'s opposite-side child. The old parent (or the tree root
    /// reference) is rewired to the new subtree root.
    ///
    /// The required child must exist; asking for a rotation without one is a
    /// caller bug.
    pub fn rotate(&mut self, dir: Dir, id: NodeId) -> NodeId {
        let up = self
            .child(id, dir.opposite())
            .expect("rotation requires a child opposite the direction");
        let inner = self.child(up, dir);

        match self[id].parent {
            Some(parent) => {
                let side = self.dir_of(parent, id);
                self.set_child(parent, side, Some(up));
            }
            None => {
                self.root = Some(up);
                self[up].parent = None;
            }
        }

        self.set_child(up, dir, Some(id));
        self.set_child(id, dir.opposite(), inner);
        up
    }

    /// Height of the subtree under `link`, where an absent child counts
    /// as -1.
    pub fn height(&self, link: Option<NodeId>) -> i32 {
        match link {
            None => -1,
            Some(id) => {
                let left = self.height(self.child(id, Dir::Left));
                let right = self.height(self.child(id, Dir::Right));
                1 + left.max(right)
            }
        }
    }

    pub fn iter(&self) -> Iter<'_, K, B> {
        Iter::new(self)
    }

    #[cfg(test)]
    pub fn assert_links(&self) {
        for i in 0..self.nodes.len() {
            let id = NodeId(i);
            for dir in [Dir::Left, Dir::Right] {
                if let Some(child) = self.child(id, dir) {
                    assert_eq!(self[child].parent, Some(id));
                }
            }
        }
        if let Some(root) = self.root {
            assert_eq!(self[root].parent, None);
        }
        assert_eq!(self.iter().count(), self.nodes.len());
    }
}

impl<K, B> Index<NodeId> for Arena<K, B> {
    type Output = Node<K, B>;

    fn index(&self, id: NodeId) -> &Node<K, B> {
        &self.nodes[id.0]
    }
}

impl<K, B> IndexMut<NodeId> for Arena<K, B> {
    fn index_mut(&mut self, id: NodeId) -> &mut Node<K, B> {
        &mut self.nodes[id.0]
    }
}

/// In-order traversal over an arena, yielding keys in ascending order.
pub struct Iter<'a, K, B> {
    arena: &'a Arena<K, B>,
    stack: Vec<NodeId>,
    remaining: usize,
}

impl<'a, K, B> Iter<'a, K, B> {
    fn new(arena: &'a Arena<K, B>) -> Self {
        let mut iter = Iter { arena, stack: Vec::new(), remaining: arena.len() };
        iter.push_spine(arena.root());
        iter
    }

    fn push_spine(&mut self, mut link: Option<NodeId>) {
        while let Some(id) = link {
            self.stack.push(id);
            link = self.arena.child(id, Dir::Left);
        }
    }
}

impl<'a, K, B> Clone for Iter<'a, K, B> {
    fn clone(&self) -> Self {
        Iter { arena: self.arena, stack: self.stack.clone(), remaining: self.remaining }
    }
}

impl<'a, K, B> Iterator for Iter<'a, K, B> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        let id = self.stack.pop()?;
        self.push_spine(self.arena.child(id, Dir::Right));
        self.remaining -= 1;
        Some(&self.arena[id].key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, B> ExactSizeIterator for Iter<'_, K, B> {}
