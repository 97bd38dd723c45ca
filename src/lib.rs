//! An ordered multimap backed by a skip list.
//!
//! Keys are kept in ascending order; a key inserted more than once keeps
//! every value, in insertion order, under a single node. Lookup, insert,
//! remove and pop-first all run in expected O(log n) over distinct keys,
//! balanced by randomized level promotion instead of rebalancing.
//!
//! ```
//! use multiskip::SkipList;
//!
//! let mut list = SkipList::new();
//! for e in [3, 2, 1, 5, 5] {
//!     list.insert(e, e * 10);
//! }
//!
//! assert_eq!(list.get(&5), Some(&[50, 50][..]));
//! assert_eq!(list.keys().copied().collect::<Vec<_>>(), vec![1, 2, 3, 5]);
//! assert_eq!(list.remove(&5), Some(vec![50, 50]));
//! assert_eq!(list.len(), 3);
//! ```
//!
//! The key ordering and the random source behind level promotion are both
//! injected at construction through [`SkipListOptions`]; see the
//! [`comparator`] module for the ordering side.
//!
//! The list is single-threaded: it is `Send` where its contents are, but
//! offers no interior mutability and no concurrent mutation.

mod arena;
mod iter;
mod options;
mod skip_list;

pub mod comparator;
pub mod error;

pub use comparator::{Comparator, DefaultComparator, FnComparator};
pub use error::{Error, Result};
pub use iter::{Iter, Keys, Values};
pub use options::SkipListOptions;
pub use skip_list::SkipList;
