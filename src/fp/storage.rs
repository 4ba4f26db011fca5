use crate::Item;

/// Flat append-only storage for mined patterns.
///
/// Paths are packed into one contiguous buffer with `(start, len)` offsets
/// and a parallel supports vector. Append order and path order are both
/// preserved exactly as emitted; entries are never sorted or deduplicated,
/// since the position of an item within a path is part of the result.
#[derive(Debug, Clone)]
pub struct PatternStore<I> {
    items: Vec<I>,
    offsets: Vec<(usize, usize)>,
    supports: Vec<usize>,
}

impl<I: Item> PatternStore<I> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            offsets: Vec::new(),
            supports: Vec::new(),
        }
    }

    pub fn push(&mut self, path: &[I], support: usize) {
        let start = self.items.len();
        self.items.extend_from_slice(path);
        self.offsets.push((start, path.len()));
        self.supports.push(support);
    }

    pub fn get(&self, idx: usize) -> (&[I], usize) {
        let (start, len) = self.offsets[idx];
        (&self.items[start..start + len], self.supports[idx])
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[I], usize)> {
        (0..self.len()).map(move |idx| self.get(idx))
    }

    /// Copy out as owned (path, support) pairs, in emission order.
    pub fn to_vec(&self) -> Vec<(Vec<I>, usize)> {
        self.iter()
            .map(|(path, support)| (path.to_vec(), support))
            .collect()
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.offsets.clear();
        self.supports.clear();
    }
}

impl<I: Item> Default for PatternStore<I> {
    fn default() -> Self {
        Self::new()
    }
}
