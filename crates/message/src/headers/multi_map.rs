use std::collections::BTreeMap;
use std::collections::btree_map;
use std::slice;

use tracing::trace;

use super::HeaderContainer;

/// A header multi-map ordered by name.
///
/// Names iterate in ascending order. Values sharing a name keep their insertion
/// order, the same layout as an ordered multimap. Name comparison is exact: any
/// case normalization is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderMultiMap<S> {
    entries: BTreeMap<S, Vec<S>>,
    len: usize,
}

impl<S> Default for HeaderMultiMap<S> {
    fn default() -> Self {
        Self { entries: BTreeMap::new(), len: 0 }
    }
}

impl<S: Ord> HeaderMultiMap<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the first value stored under `key`
    pub fn first(&self, key: &S) -> Option<&S> {
        self.entries.get(key).and_then(|values| values.first())
    }

    /// Returns the last value stored under `key`
    pub fn last(&self, key: &S) -> Option<&S> {
        self.entries.get(key).and_then(|values| values.last())
    }

    pub fn contains_key(&self, key: &S) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterates the distinct header names in order
    pub fn keys(&self) -> impl Iterator<Item = &S> {
        self.entries.keys()
    }
}

impl<S> HeaderContainer for HeaderMultiMap<S>
where
    S: Ord + Clone + std::fmt::Debug,
{
    type Key = S;
    type Value = S;

    type Iter<'a>
        = Iter<'a, S>
    where
        Self: 'a;

    type Values<'a>
        = slice::Iter<'a, S>
    where
        Self: 'a;

    fn insert(&mut self, key: S, value: S) {
        self.entries.entry(key).or_default().push(value);
        self.len += 1;
    }

    fn remove(&mut self, key: &S) -> usize {
        let removed = self.entries.remove(key).map_or(0, |values| values.len());
        self.len -= removed;
        removed
    }

    fn clear(&mut self) {
        trace!(entries = self.len, "clear headers");
        self.entries.clear();
        self.len = 0;
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    fn count(&self, key: &S) -> usize {
        self.entries.get(key).map_or(0, Vec::len)
    }

    fn get_all<'a>(&'a self, key: &S) -> slice::Iter<'a, S> {
        match self.entries.get(key) {
            Some(values) => values.iter(),
            None => <&[S]>::default().iter(),
        }
    }

    fn iter(&self) -> Iter<'_, S> {
        Iter { names: self.entries.iter(), current: None }
    }
}

/// Iterator over the `(name, value)` entries of a [`HeaderMultiMap`].
#[derive(Debug)]
pub struct Iter<'a, S> {
    names: btree_map::Iter<'a, S, Vec<S>>,
    current: Option<(&'a S, slice::Iter<'a, S>)>,
}

impl<'a, S> Iterator for Iter<'a, S> {
    type Item = (&'a S, &'a S);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((name, values)) = &mut self.current
                && let Some(value) = values.next()
            {
                return Some((*name, value));
            }

            let (name, values) = self.names.next()?;
            self.current = Some((name, values.iter()));
        }
    }
}

impl<'a, S> IntoIterator for &'a HeaderMultiMap<S>
where
    S: Ord + Clone + std::fmt::Debug,
{
    type Item = (&'a S, &'a S);
    type IntoIter = Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S> Extend<(S, S)> for HeaderMultiMap<S>
where
    S: Ord + Clone + std::fmt::Debug,
{
    fn extend<I: IntoIterator<Item = (S, S)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<S> FromIterator<(S, S)> for HeaderMultiMap<S>
where
    S: Ord + Clone + std::fmt::Debug,
{
    fn from_iter<I: IntoIterator<Item = (S, S)>>(iter: I) -> Self {
        let mut headers = Self::default();
        headers.extend(iter);
        headers
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    fn headers(pairs: &[(&str, &str)]) -> HeaderMultiMap<String> {
        pairs.iter().map(|(name, value)| ((*name).to_owned(), (*value).to_owned())).collect()
    }

    #[test]
    fn insert_keeps_duplicates() {
        let map = headers(&[("X-Test", "1"), ("X-Test", "2")]);

        assert_eq!(map.len(), 2);
        assert_eq!(map.count(&"X-Test".to_owned()), 2);

        let values: Vec<_> = map.get_all(&"X-Test".to_owned()).collect();
        assert_eq!(values, ["1", "2"]);
        assert_eq!(map.first(&"X-Test".to_owned()).map(String::as_str), Some("1"));
        assert_eq!(map.last(&"X-Test".to_owned()).map(String::as_str), Some("2"));
    }

    #[test]
    fn remove_drops_every_duplicate() {
        let mut map = headers(&[("X-Test", "1"), ("Accept", "*/*"), ("X-Test", "2")]);

        assert_eq!(map.remove(&"X-Test".to_owned()), 2);
        assert_eq!(map.len(), 1);
        assert!(!map.contains_key(&"X-Test".to_owned()));
        assert_eq!(map.get_all(&"X-Test".to_owned()).count(), 0);

        assert_eq!(map.remove(&"X-Test".to_owned()), 0);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn clear_empties_the_map() {
        let mut map = headers(&[("Host", "127.0.0.1:8080"), ("Accept", "*/*")]);
        map.clear();
        assert!(map.is_empty());
        assert_eq!(map.iter().count(), 0);
    }

    #[test]
    fn iterates_sorted_by_name_then_insertion() {
        let map = headers(&[
            ("User-Agent", "curl/7.79.1"),
            ("Accept", "text/html"),
            ("Host", "127.0.0.1:8080"),
            ("Accept", "*/*"),
        ]);

        let dump: String = map.iter().map(|(name, value)| format!("{name}: {value}\n")).collect();

        assert_eq!(
            dump,
            indoc! {"
            Accept: text/html
            Accept: */*
            Host: 127.0.0.1:8080
            User-Agent: curl/7.79.1
            "}
        );

        let names: Vec<_> = map.keys().collect();
        assert_eq!(names, ["Accept", "Host", "User-Agent"]);
    }

    #[test]
    fn iteration_is_stable_across_calls() {
        let map = headers(&[("b", "1"), ("a", "2"), ("b", "3")]);
        let first: Vec<_> = (&map).into_iter().collect();
        let second: Vec<_> = map.iter().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), map.len());
    }
}
