use crate::skip_list::{Link, SkipList};

/// Level-0 walk over `(key, value)` pairs in ascending key order. A key is
/// yielded once per value it holds, consecutively, in insertion order.
pub struct Iter<'a, K, V, C, R> {
    list: &'a SkipList<K, V, C, R>,
    cur: Link,
    value_idx: usize,
}

impl<'a, K, V, C, R> Iter<'a, K, V, C, R> {
    pub(crate) fn new(list: &'a SkipList<K, V, C, R>) -> Self {
        Iter {
            list,
            cur: list.first_link(),
            value_idx: 0,
        }
    }
}

impl<'a, K, V, C, R> Iterator for Iter<'a, K, V, C, R> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let Link::Entry(id) = self.cur else {
                return None;
            };
            let node = self.list.node(id);
            if self.value_idx < node.values.len() {
                let item = (&node.key, &node.values[self.value_idx]);
                self.value_idx += 1;
                return Some(item);
            }
            self.cur = node.forward[0];
            self.value_idx = 0;
        }
    }
}

impl<'a, K, V, C, R> IntoIterator for &'a SkipList<K, V, C, R> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, C, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Each distinct key once, ascending.
pub struct Keys<'a, K, V, C, R> {
    list: &'a SkipList<K, V, C, R>,
    cur: Link,
}

impl<'a, K, V, C, R> Keys<'a, K, V, C, R> {
    pub(crate) fn new(list: &'a SkipList<K, V, C, R>) -> Self {
        Keys {
            list,
            cur: list.first_link(),
        }
    }
}

impl<'a, K, V, C, R> Iterator for Keys<'a, K, V, C, R> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let Link::Entry(id) = self.cur else {
            return None;
        };
        let node = self.list.node(id);
        self.cur = node.forward[0];
        Some(&node.key)
    }
}

/// Every value, ordered by key and then by insertion order within a key.
pub struct Values<'a, K, V, C, R> {
    inner: Iter<'a, K, V, C, R>,
}

impl<'a, K, V, C, R> Values<'a, K, V, C, R> {
    pub(crate) fn new(list: &'a SkipList<K, V, C, R>) -> Self {
        Values {
            inner: Iter::new(list),
        }
    }
}

impl<'a, K, V, C, R> Iterator for Values<'a, K, V, C, R> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::{SeedableRng, rngs::StdRng};

    use crate::{SkipList, SkipListOptions, comparator::DefaultComparator};

    fn sample() -> SkipList<u32, &'static str, DefaultComparator<u32>, StdRng> {
        let mut list = SkipListOptions::new()
            .rng(StdRng::seed_from_u64(17))
            .build()
            .unwrap();
        list.insert(2, "two-a");
        list.insert(1, "one");
        list.insert(2, "two-b");
        list.insert(3, "three");
        list
    }

    #[test]
    fn test_iter_repeats_multi_value_keys() {
        let list = sample();
        let pairs = list.iter().map(|(k, v)| (*k, *v)).collect_vec();
        assert_eq!(
            pairs,
            vec![(1, "one"), (2, "two-a"), (2, "two-b"), (3, "three")]
        );
    }

    #[test]
    fn test_iter_is_restartable() {
        let list = sample();
        assert_eq!(list.iter().count(), 4);
        assert_eq!(list.iter().count(), 4);
    }

    #[test]
    fn test_keys_and_values() {
        let list = sample();
        assert_eq!(list.keys().copied().collect_vec(), vec![1, 2, 3]);
        assert_eq!(
            list.values().copied().collect_vec(),
            vec!["one", "two-a", "two-b", "three"]
        );
    }

    #[test]
    fn test_into_iterator_for_ref() {
        let list = sample();
        let mut count = 0;
        for (key, _value) in &list {
            assert!(list.contains_key(key));
            count += 1;
        }
        assert_eq!(count, list.len());
    }
}
