//! Header containers.
//!
//! Headers are a multi-map: HTTP allows the same name to appear several times, so
//! inserting never overwrites and removing a name drops every entry under it.
//! [`HeaderContainer`] is the contract a message relies on, [`HeaderMultiMap`] is the
//! implementation the built-in encodings use.

mod multi_map;

pub use multi_map::HeaderMultiMap;
pub use multi_map::Iter;

use std::fmt::Debug;

/// An associative multi-map from header name to header value.
///
/// Implementations decide the overall iteration order, but it must be the same
/// across calls on an unchanged container, and entries sharing a name must come
/// out in the order they were inserted.
pub trait HeaderContainer: Default + Clone + Debug + PartialEq {
    type Key;
    type Value;

    type Iter<'a>: Iterator<Item = (&'a Self::Key, &'a Self::Value)>
    where
        Self: 'a;

    type Values<'a>: Iterator<Item = &'a Self::Value>
    where
        Self: 'a;

    /// Inserts one entry, keeping any entries already stored under `key`
    fn insert(&mut self, key: Self::Key, value: Self::Value);

    /// Removes every entry stored under `key`, returning how many were removed
    fn remove(&mut self, key: &Self::Key) -> usize;

    /// Removes every entry
    fn clear(&mut self);

    /// Number of entries, each duplicate counted
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of entries stored under `key`
    fn count(&self, key: &Self::Key) -> usize {
        self.get_all(key).count()
    }

    /// Values stored under `key`, in insertion order
    fn get_all<'a>(&'a self, key: &Self::Key) -> Self::Values<'a>;

    /// All entries in container order
    fn iter(&self) -> Self::Iter<'_>;
}
