//! A [disjoint-sets/union-find] implementation that supports deleting
//! arbitrary elements in amortized logarithmic time.
//!
//! The main struct of this crate is [`UfdMap<K>`] which partitions a set of
//! keys into disjoint sets. Each key starts in its own set, sets can be
//! joined with the `union` method, and, unlike in a textbook union-find, any
//! key can later be removed again with the `delete` method while the rest of
//! the partition stays intact. `find`, `union` and `delete` all run in
//! amortized `O(log n)` time. This is deliberately weaker than the
//! `O(α(n))` of a plain union-find: supporting deletion costs some
//! compression power, because `find` has to restructure trees in a way that
//! keeps every future deletion cheap.
//!
//! Deletion support follows the union-find-delete scheme of Ben-Amram and
//! Yoffe: besides the parent pointers, every tree threads circular doubly
//! linked lists through its nodes. Each node keeps a list of its children,
//! and each tree keeps a traversal-order list over all of its nodes as well
//! as a list of its interior nodes. Together these make it possible to
//! remove a node and
//! repair the tree with a bounded amount of local work.
//!
//! The traversal-order list has a useful side effect: the elements of a set
//! can be iterated with the `set` method, and the next element of that
//! iterator is found in `O(1)` time.
//!
//! [`UfdMap<K>`] keys its elements by hashing and accepts a custom
//! [`BuildHasher`]. Callers that manage their own element handles can use
//! the index-based [`Forest`] directly.
//!
//! This crate optionally integrates with `proptest`; the feature is enabled
//! by default and provides an `Arbitrary` implementation for [`UfdMap<K>`]:
//! ```text
//! [dependencies.ufd]
//! version = "0.1"
//! features = ["proptest"]
//! ```
//!
//! # Examples
//!
//! ```
//! use ufd::UfdMap;
//!
//! let mut ufd = UfdMap::new();
//! for city in ["ayr", "banff", "crail", "dunbar"] {
//!     ufd.make_set(city).unwrap();
//! }
//! ufd.union(&"ayr", &"banff").unwrap();
//! ufd.union(&"banff", &"crail").unwrap();
//!
//! assert_eq!(ufd.same_set(&"ayr", &"crail"), Ok(true));
//! assert_eq!(ufd.same_set(&"ayr", &"dunbar"), Ok(false));
//!
//! ufd.delete(&"banff").unwrap();
//!
//! assert_eq!(ufd.same_set(&"ayr", &"crail"), Ok(true));
//! assert!(!ufd.contains_key(&"banff"));
//! ```
//!
//! [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
//! [`UfdMap<K>`]: struct.UfdMap.html
//! [`Forest`]: struct.Forest.html
//! [`BuildHasher`]: std::hash::BuildHasher

mod node;
pub mod forest;
pub mod ufd_map;

pub use {
    forest::{Forest, Removal},
    ufd_map::UfdMap,
};

/// The errors returned by the element-keyed operations of [`UfdMap`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// `make_set` was called with an element that is already bound to a
    /// live node of this forest.
    #[error("element is already bound to a live node")]
    DuplicateElement,
    /// The element is not bound to any live node of this forest, either
    /// because it was never inserted or because it has been deleted.
    #[error("element is not bound to any live node")]
    NotFound,
}
