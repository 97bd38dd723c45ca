use std::{cmp, marker::PhantomData};

use super::Comparator;

/// Natural `Ord`-based ordering.
#[derive(Debug)]
pub struct DefaultComparator<T> {
    _marker: PhantomData<T>,
}

impl<T> Default for DefaultComparator<T> {
    fn default() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Comparator for DefaultComparator<T>
where
    T: Ord,
{
    type Item = T;

    fn compare(&self, a: &Self::Item, b: &Self::Item) -> cmp::Ordering {
        a.cmp(b)
    }
}

impl<T> Clone for DefaultComparator<T> {
    fn clone(&self) -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Copy for DefaultComparator<T> {}
