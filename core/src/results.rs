//! Search result container.

use crate::error::Result;

/// Ordered positions of matching items in the searched list.
///
/// Order is decided by the strategy that produced it and is not necessarily
/// ascending. Each result set is owned by the caller of the search that built
/// it; nothing else keeps a reference to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResult {
    indices: Vec<usize>,
}

impl SearchResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a position, reporting allocation failure instead of aborting.
    pub(crate) fn push(&mut self, index: usize) -> Result<()> {
        self.indices.try_reserve(1)?;
        self.indices.push(index);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    /// Resolves positions back to the items they point at.
    ///
    /// `items` must be the list the search ran over.
    pub fn matched<'a, T>(&'a self, items: &'a [Option<T>]) -> impl Iterator<Item = &'a T> + 'a {
        self.indices
            .iter()
            .filter_map(move |&index| items.get(index).and_then(Option::as_ref))
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.indices
    }
}

impl AsRef<[usize]> for SearchResult {
    fn as_ref(&self) -> &[usize] {
        &self.indices
    }
}

impl From<SearchResult> for Vec<usize> {
    fn from(result: SearchResult) -> Self {
        result.indices
    }
}

impl IntoIterator for SearchResult {
    type Item = usize;
    type IntoIter = std::vec::IntoIter<usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.indices.into_iter()
    }
}
