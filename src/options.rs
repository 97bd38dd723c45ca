use std::marker::PhantomData;

use rand::{Rng, rngs::ThreadRng};

use crate::{
    comparator::{Comparator, DefaultComparator},
    error::{Error, Result},
    skip_list::{DEFAULT_MAX_LEVELS, SkipList},
};

/// Builder for a [`SkipList`] with a non-default level ceiling, comparator
/// or random source.
///
/// ```
/// use multiskip::{SkipList, SkipListOptions};
///
/// let mut list: SkipList<u32, &str, _, _> = SkipListOptions::new()
///     .max_levels(12)
///     .build()?;
/// list.insert(1, "one");
/// # Ok::<(), multiskip::Error>(())
/// ```
#[derive(Debug)]
pub struct SkipListOptions<K, C = DefaultComparator<K>, R = ThreadRng> {
    max_levels: usize,
    comparator: C,
    rng: R,
    _marker: PhantomData<fn(&K)>,
}

impl<K> SkipListOptions<K>
where
    K: Ord,
{
    pub fn new() -> Self {
        SkipListOptions {
            max_levels: DEFAULT_MAX_LEVELS,
            comparator: DefaultComparator::default(),
            rng: rand::rng(),
            _marker: PhantomData,
        }
    }
}

impl<K> Default for SkipListOptions<K>
where
    K: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C, R> SkipListOptions<K, C, R> {
    /// Ceiling on how many levels a single node may span. Must be at least
    /// 1; checked by [`build`](Self::build).
    pub fn max_levels(mut self, max_levels: usize) -> Self {
        self.max_levels = max_levels;
        self
    }

    /// Key ordering used for every positional decision the list makes.
    pub fn comparator<C2>(self, comparator: C2) -> SkipListOptions<K, C2, R>
    where
        C2: Comparator<Item = K>,
    {
        SkipListOptions {
            max_levels: self.max_levels,
            comparator,
            rng: self.rng,
            _marker: PhantomData,
        }
    }

    /// Random source driving level promotion. Tests pass a seeded RNG to
    /// make promotion deterministic.
    pub fn rng<R2>(self, rng: R2) -> SkipListOptions<K, C, R2>
    where
        R2: Rng,
    {
        SkipListOptions {
            max_levels: self.max_levels,
            comparator: self.comparator,
            rng,
            _marker: PhantomData,
        }
    }

    pub fn build<V>(self) -> Result<SkipList<K, V, C, R>>
    where
        C: Comparator<Item = K>,
        R: Rng,
    {
        if self.max_levels < 1 {
            return Err(Error::InvalidMaxLevels {
                got: self.max_levels,
            });
        }
        Ok(SkipList::with_parts(
            self.max_levels,
            self.comparator,
            self.rng,
        ))
    }
}
