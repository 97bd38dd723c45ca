use std::{cmp::Ordering::*, fmt};

use rand::{Rng, rngs::ThreadRng};

use crate::{
    arena::{Arena, NodeId},
    comparator::{Comparator, DefaultComparator},
    iter::{Iter, Keys, Values},
};

pub(crate) const DEFAULT_MAX_LEVELS: usize = 24;

/// Successor link at one level. The tail sentinel is a variant rather than
/// a stored node, so the comparator is never handed a sentinel key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Link {
    Entry(NodeId),
    Tail,
}

/// One real entry: a key, its values in insertion order, and one successor
/// link per level the node participates in. `forward` is sized exactly to
/// the node's height when it is created and never resized.
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) values: Vec<V>,
    pub(crate) forward: Vec<Link>,
}

impl<K, V> Node<K, V> {
    fn new(key: K, value: V, height: usize) -> Self {
        Node {
            key,
            values: vec![value],
            forward: Vec::with_capacity(height),
        }
    }

    fn height(&self) -> usize {
        self.forward.len()
    }
}

/// Position during a descent: the head sentinel or a real node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pos {
    Head,
    At(NodeId),
}

/// An ordered multimap backed by a skip list.
///
/// Each distinct key maps to one node holding every value inserted under
/// that key, in insertion order. Lookup, insert and remove descend the
/// level towers top-down and run in expected O(log n) over distinct keys.
///
/// `C` is the comparator deciding key order, `R` the random source driving
/// level promotion. Both are fixed at construction; use
/// [`SkipListOptions`](crate::SkipListOptions) to supply non-default ones.
pub struct SkipList<K, V, C = DefaultComparator<K>, R = ThreadRng> {
    arena: Arena<Node<K, V>>,
    /// Head sentinel tower, one link per active level. `head[0]` is the
    /// smallest key in the list.
    head: Vec<Link>,
    /// Highest level in use across all nodes. Grows when a promotion
    /// outruns it and never shrinks, even when the tallest node is removed.
    level_count: usize,
    max_levels: usize,
    /// Count of stored values, not distinct keys.
    len: usize,
    comparator: C,
    rng: R,
}

impl<K, V> SkipList<K, V>
where
    K: Ord,
{
    /// A list with natural key ordering, the thread-local RNG and the
    /// default level ceiling of 24.
    pub fn new() -> Self {
        Self::with_parts(DEFAULT_MAX_LEVELS, DefaultComparator::default(), rand::rng())
    }
}

impl<K, V> Default for SkipList<K, V>
where
    K: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C, R> SkipList<K, V, C, R> {
    pub(crate) fn with_parts(max_levels: usize, comparator: C, rng: R) -> Self {
        debug_assert!(max_levels >= 1);
        SkipList {
            arena: Arena::new(),
            head: vec![Link::Tail],
            level_count: 1,
            max_levels,
            len: 0,
            comparator,
            rng,
        }
    }

    /// Number of stored values (a key inserted twice counts twice).
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current highest level in use. Diagnostic only.
    pub fn levels(&self) -> usize {
        self.level_count
    }

    pub fn max_levels(&self) -> usize {
        self.max_levels
    }

    /// The smallest key and its values, without removing them.
    pub fn first(&self) -> Option<(&K, &[V])> {
        match self.head[0] {
            Link::Entry(id) => {
                let node = &self.arena[id];
                Some((&node.key, node.values.as_slice()))
            }
            Link::Tail => None,
        }
    }

    /// Removes the smallest key, returning it together with its values.
    ///
    /// This is the delete relinking applied to the first node: the head
    /// sentinel is the predecessor at every level the node occupies.
    pub fn pop_first(&mut self) -> Option<(K, Vec<V>)> {
        let id = match self.head[0] {
            Link::Entry(id) => id,
            Link::Tail => return None,
        };
        let preds = vec![Pos::Head; self.level_count];
        let node = self.unlink(id, &preds);
        Some((node.key, node.values))
    }

    /// Drops every entry. The level count keeps its high-water mark, same
    /// as after deletes.
    pub fn clear(&mut self) {
        self.arena.clear();
        for link in self.head.iter_mut() {
            *link = Link::Tail;
        }
        self.len = 0;
    }

    /// Visits every `(key, value)` pair in ascending key order; a key with
    /// three values is yielded three times, consecutively.
    pub fn iter(&self) -> Iter<'_, K, V, C, R> {
        Iter::new(self)
    }

    /// Visits each distinct key once, ascending.
    pub fn keys(&self) -> Keys<'_, K, V, C, R> {
        Keys::new(self)
    }

    /// Visits every value, ordered by key and then by insertion order
    /// within a key.
    pub fn values(&self) -> Values<'_, K, V, C, R> {
        Values::new(self)
    }

    pub(crate) fn first_link(&self) -> Link {
        self.head[0]
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node<K, V> {
        &self.arena[id]
    }

    fn next_link(&self, pos: Pos, level: usize) -> Link {
        match pos {
            Pos::Head => self.head[level],
            Pos::At(id) => self.arena[id].forward[level],
        }
    }

    fn set_link(&mut self, pos: Pos, level: usize, link: Link) {
        match pos {
            Pos::Head => self.head[level] = link,
            Pos::At(id) => self.arena[id].forward[level] = link,
        }
    }

    /// Rewires every predecessor that points directly at `victim`, then
    /// frees its slot. Levels above the victim's height never pointed at
    /// it and are left untouched.
    fn unlink(&mut self, victim: NodeId, preds: &[Pos]) -> Node<K, V> {
        for level in (0..self.arena[victim].height()).rev() {
            if self.next_link(preds[level], level) == Link::Entry(victim) {
                let succ = self.arena[victim].forward[level];
                self.set_link(preds[level], level, succ);
            }
        }
        let node = self.arena.remove(victim);
        self.len -= node.values.len();
        tracing::trace!(remaining = self.len, "unlinked node");
        node
    }
}

impl<K, V, C, R> SkipList<K, V, C, R>
where
    C: Comparator<Item = K>,
    R: Rng,
{
    /// Top-down descent to the rightmost position whose successor is still
    /// before `key` at each level. With `strict` false the walk advances
    /// past keys `<=` the target (landing *on* a matching node); with
    /// `strict` true it stops at the matching node's predecessor, which is
    /// what relinking needs.
    fn descend(&self, key: &K, strict: bool, mut preds: Option<&mut [Pos]>) -> Pos {
        let mut cur = Pos::Head;
        for level in (0..self.level_count).rev() {
            while let Link::Entry(next) = self.next_link(cur, level) {
                let ord = self.comparator.compare(&self.arena[next].key, key);
                let advance = if strict { ord == Less } else { ord != Greater };
                if !advance {
                    break;
                }
                cur = Pos::At(next);
            }
            if let Some(preds) = preds.as_deref_mut() {
                preds[level] = cur;
            }
        }
        cur
    }

    /// All values stored under `key`, in insertion order, or `None` if the
    /// key is absent. The equality check happens once, after the full
    /// descent has landed on the last candidate.
    pub fn get(&self, key: &K) -> Option<&[V]> {
        if self.len == 0 {
            return None;
        }
        match self.descend(key, false, None) {
            Pos::At(id) if self.comparator.compare(&self.arena[id].key, key) == Equal => {
                Some(self.arena[id].values.as_slice())
            }
            _ => None,
        }
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Inserts `value` under `key` and returns a reference to it as stored.
    ///
    /// An existing key keeps its node; the value is appended to that node's
    /// list and no link changes. A new key gets a node whose height is
    /// drawn by repeated fair coin tosses (geometric, mean 2), capped by
    /// `max_levels`; a promotion past the current top level links the head
    /// tower and raises the level count.
    pub fn insert(&mut self, key: K, value: V) -> &V {
        let mut preds = vec![Pos::Head; self.level_count];
        let pos = self.descend(&key, false, Some(&mut preds));

        if let Pos::At(id) = pos {
            if self.comparator.compare(&self.arena[id].key, &key) == Equal {
                self.arena[id].values.push(value);
                self.len += 1;
                let values = &self.arena[id].values;
                return &values[values.len() - 1];
            }
        }

        let height = self.random_height();
        let id = self.arena.insert(Node::new(key, value, height));
        for level in 0..height {
            if level < self.level_count {
                let old = self.next_link(preds[level], level);
                self.arena[id].forward.push(old);
                self.set_link(preds[level], level, Link::Entry(id));
            } else {
                // promotion past the current top: grow the head tower
                self.arena[id].forward.push(Link::Tail);
                self.head.push(Link::Entry(id));
                self.level_count += 1;
                tracing::trace!(level_count = self.level_count, "level count grew");
            }
        }
        self.len += 1;
        &self.arena[id].values[0]
    }

    /// Removes `key` and returns every value stored under it, or `None` if
    /// the key is absent. `len` drops by the number of values removed; the
    /// level count is never lowered, even if the tallest node went away.
    pub fn remove(&mut self, key: &K) -> Option<Vec<V>> {
        if self.len == 0 {
            return None;
        }
        let mut preds = vec![Pos::Head; self.level_count];
        self.descend(key, true, Some(&mut preds));

        let victim = match self.next_link(preds[0], 0) {
            Link::Entry(id) if self.comparator.compare(&self.arena[id].key, key) == Equal => id,
            _ => return None,
        };
        Some(self.unlink(victim, &preds).values)
    }

    // [1, max_levels]
    fn random_height(&mut self) -> usize {
        let mut height = 1;
        while height < self.max_levels && self.rng.random::<bool>() {
            height += 1;
        }
        height
    }
}

impl<K, V, C, R> Extend<(K, V)> for SkipList<K, V, C, R>
where
    C: Comparator<Item = K>,
    R: Rng,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for SkipList<K, V>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut list = SkipList::new();
        list.extend(iter);
        list
    }
}

impl<K, V, C, R> fmt::Debug for SkipList<K, V, C, R>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        let mut cur = self.head[0];
        while let Link::Entry(id) = cur {
            let node = &self.arena[id];
            map.entry(&node.key, &node.values);
            cur = node.forward[0];
        }
        map.finish()
    }
}
