use std::{cmp, marker::PhantomData};

use super::Comparator;

/// Adapter turning a plain comparison function into a [`Comparator`].
#[derive(Debug, Clone)]
pub struct FnComparator<T, F> {
    f: F,
    _marker: PhantomData<fn(&T)>,
}

impl<T, F> FnComparator<T, F>
where
    F: Fn(&T, &T) -> cmp::Ordering,
{
    pub fn new(f: F) -> Self {
        Self {
            f,
            _marker: PhantomData,
        }
    }
}

impl<T, F> Comparator for FnComparator<T, F>
where
    F: Fn(&T, &T) -> cmp::Ordering,
{
    type Item = T;

    fn compare(&self, a: &Self::Item, b: &Self::Item) -> cmp::Ordering {
        (self.f)(a, b)
    }
}

#[cfg(test)]
mod tests {
    use std::cmp;

    use super::FnComparator;
    use crate::comparator::Comparator;

    #[test]
    fn test_reverse_order() {
        let cmp = FnComparator::new(|a: &u32, b: &u32| b.cmp(a));
        assert_eq!(cmp.compare(&1, &2), cmp::Ordering::Greater);
        assert_eq!(cmp.compare(&2, &1), cmp::Ordering::Less);
        assert_eq!(cmp.compare(&2, &2), cmp::Ordering::Equal);
    }
}
