use std::collections::HashMap;
use std::hash::Hash;

use crate::interface::WindowHasher;

/// Mapping from window hash to the start offsets producing that hash, for
/// every window of one fixed size in a sequence.
///
/// Offsets under a key are in ascending order because the index is built in
/// a single left-to-right pass; first-match search depends on that order.
/// Data shorter than the window size yields an empty index, not an error.
#[derive(Debug, Clone)]
pub struct HashIndex<THash> {
    by_hash: HashMap<THash, Vec<usize>>,
    window_size: usize,
}

impl<THash: Copy + Eq + Hash> HashIndex<THash> {
    pub fn build<TData, H>(hasher: &H, data: &[TData], window_size: usize) -> Self
    where
        H: WindowHasher<THash, TData>,
    {
        let mut by_hash: HashMap<THash, Vec<usize>> = HashMap::new();
        for (hash, start) in hasher.hash_windows(data, window_size) {
            by_hash.entry(hash).or_default().push(start);
        }
        HashIndex {
            by_hash,
            window_size,
        }
    }

    /// Candidate start offsets for `hash`, ascending. Empty when no window
    /// produced that hash.
    pub fn offsets(&self, hash: &THash) -> &[usize] {
        self.by_hash.get(hash).map_or(&[], Vec::as_slice)
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Number of distinct hash values observed.
    pub fn len(&self) -> usize {
        self.by_hash.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_hash.is_empty()
    }
}
