//! Import identifier collection.

use indexmap::IndexSet;

use crate::walk::Accumulate;

/// Deduplicated set of import paths for one artifact.
///
/// Membership is explicit, never inferred from the rendered text. Keeps
/// first-seen order; [`sorted`](Self::sorted) is for targets that want a
/// sorted block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSet {
    paths: IndexSet<String>,
}

impl ImportSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one import path. Re-adding is a no-op.
    pub fn add(&mut self, path: impl Into<String>) {
        self.paths.insert(path.into());
    }

    /// Merge another set into this one.
    pub fn merge(&mut self, other: &ImportSet) {
        for path in &other.paths {
            self.paths.insert(path.clone());
        }
    }

    /// Check membership of an exact path.
    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Number of distinct paths.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Iterate in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }

    /// Paths in lexicographic order, the way an import block lists them.
    pub fn sorted(&self) -> Vec<&str> {
        let mut paths: Vec<&str> = self.iter().collect();
        paths.sort_unstable();
        paths
    }
}

impl Accumulate for ImportSet {
    fn absorb(&mut self, child: Self) {
        for path in child.paths {
            self.paths.insert(path);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for ImportSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for path in iter {
            set.add(path);
        }
        set
    }
}
