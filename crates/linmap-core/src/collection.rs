//! Insertion-ordered collections of named grids.

use indexmap::IndexMap;

use crate::grid::NamedGrid;

/// Records keyed by display name, iterated in first-insertion order.
///
/// Inserting a name that already exists replaces the stored record but keeps
/// its position, so a definition file that repeats a name ends up with the
/// last definition in the place of the first.
#[derive(Debug, Clone)]
pub struct NamedCollection<T> {
    entries: IndexMap<String, T>,
}

impl<T> Default for NamedCollection<T> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

impl<T> NamedCollection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert under `name`, returning the record it replaced
    pub fn insert(&mut self, name: impl Into<String>, value: T) -> Option<T> {
        self.entries.insert(name.into(), value)
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Names in collection order
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> + '_ {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn first(&self) -> Option<(&str, &T)> {
        self.entries.first().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K> NamedCollection<NamedGrid<K>> {
    /// Insert a grid under its own display name
    pub fn add(&mut self, grid: NamedGrid<K>) -> Option<NamedGrid<K>> {
        let name = grid.name().to_string();
        self.insert(name, grid)
    }
}

impl<K> FromIterator<NamedGrid<K>> for NamedCollection<NamedGrid<K>> {
    fn from_iter<I: IntoIterator<Item = NamedGrid<K>>>(iter: I) -> Self {
        let mut collection = Self::new();
        for grid in iter {
            collection.add(grid);
        }
        collection
    }
}
