use std::{
    mem,
    ops::{Index, IndexMut},
};

pub(crate) type NodeId = usize;

/// Slot arena backing the node graph. Links between nodes are `NodeId`
/// indices into this arena, so the arena is the single owner of every
/// node's storage. Removed slots go onto an intrusive free list and are
/// reused by later insertions.
#[derive(Debug)]
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<NodeId>,
    live: usize,
}

#[derive(Debug)]
enum Slot<T> {
    Occupied(T),
    Vacant { next_free: Option<NodeId> },
}

impl<T> Arena<T> {
    pub(crate) fn new() -> Self {
        Arena {
            slots: Vec::new(),
            free_head: None,
            live: 0,
        }
    }

    pub(crate) fn insert(&mut self, item: T) -> NodeId {
        self.live += 1;
        match self.free_head.take() {
            Some(id) => {
                match mem::replace(&mut self.slots[id], Slot::Occupied(item)) {
                    Slot::Vacant { next_free } => self.free_head = next_free,
                    Slot::Occupied(_) => unreachable!("free list points at occupied slot {id}"),
                }
                id
            }
            None => {
                self.slots.push(Slot::Occupied(item));
                self.slots.len() - 1
            }
        }
    }

    pub(crate) fn remove(&mut self, id: NodeId) -> T {
        assert!(
            matches!(self.slots[id], Slot::Occupied(_)),
            "remove on vacant slot {id}"
        );

        let slot = mem::replace(
            &mut self.slots[id],
            Slot::Vacant {
                next_free: self.free_head,
            },
        );
        self.free_head = Some(id);
        self.live -= 1;

        match slot {
            Slot::Occupied(item) => item,
            Slot::Vacant { .. } => unreachable!(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.live
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.live = 0;
    }
}

impl<T> Index<NodeId> for Arena<T> {
    type Output = T;

    fn index(&self, id: NodeId) -> &T {
        match &self.slots[id] {
            Slot::Occupied(item) => item,
            Slot::Vacant { .. } => panic!("vacant slot {id}"),
        }
    }
}

impl<T> IndexMut<NodeId> for Arena<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut T {
        match &mut self.slots[id] {
            Slot::Occupied(item) => item,
            Slot::Vacant { .. } => panic!("vacant slot {id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Arena;

    #[test]
    fn test_insert_get() {
        let mut arena = Arena::new();
        let a = arena.insert("a");
        let b = arena.insert("b");

        assert_eq!(arena[a], "a");
        assert_eq!(arena[b], "b");
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn test_slot_reuse() {
        let mut arena = Arena::new();
        let a = arena.insert(1);
        let b = arena.insert(2);
        let c = arena.insert(3);

        assert_eq!(arena.remove(b), 2);
        assert_eq!(arena.remove(a), 1);
        assert_eq!(arena.len(), 1);

        // freed slots come back in LIFO order
        assert_eq!(arena.insert(4), a);
        assert_eq!(arena.insert(5), b);
        assert_eq!(arena.insert(6), c + 1);
        assert_eq!(arena.len(), 4);
    }

    #[test]
    #[should_panic(expected = "vacant slot")]
    fn test_vacant_access_panics() {
        let mut arena = Arena::new();
        let a = arena.insert(());
        arena.remove(a);
        let _ = arena[a];
    }

    #[test]
    fn test_clear() {
        let mut arena = Arena::new();
        for i in 0..16 {
            arena.insert(i);
        }
        arena.clear();
        assert_eq!(arena.len(), 0);
        assert_eq!(arena.insert(99), 0);
    }
}
