use std::cmp;

mod default_comparator;
mod fn_comparator;

pub use default_comparator::DefaultComparator;
pub use fn_comparator::FnComparator;

/// Total order over keys, fixed at construction. Every positional decision
/// the list makes goes through the one comparator it was built with; there
/// is no per-call override.
pub trait Comparator {
    type Item;

    fn compare(&self, a: &Self::Item, b: &Self::Item) -> cmp::Ordering;
}
