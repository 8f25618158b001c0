use std::hash::Hash;

use crate::hash_index::HashIndex;
use crate::interface::{SearchErr, WindowHasher};
use crate::modular::{Mod, ModInt};
use crate::rolling_hash::{RollingHasher, DEFAULT_BASE, DEFAULT_MOD_U64};

/// Rabin-Karp substring search with caller-supplied hash parameters.
///
/// Weak parameters never change answers, only cost: every hash-equal
/// candidate is confirmed by direct comparison before it is reported, so
/// collisions degrade performance rather than correctness.
#[derive(Clone, Copy, Debug)]
pub struct Finder<THash> {
    base: THash,
    modulus: THash,
}

impl<THash> Finder<THash>
where
    THash: ModInt + Eq + Hash,
{
    pub fn new(base: THash, modulus: THash) -> Result<Self, SearchErr> {
        Mod::new(modulus)?;
        if base <= THash::zero() {
            return Err(SearchErr::InvalidBase("base must be positive"));
        }
        Ok(Finder { base, modulus })
    }

    /// Smallest offset at which `target` occurs in `source`, or `Ok(None)`.
    ///
    /// An empty target is rejected rather than defined to match everywhere.
    /// A target longer than the source is an ordinary `Ok(None)`.
    pub fn find<TData>(
        &self,
        source: &[TData],
        target: &[TData],
    ) -> Result<Option<usize>, SearchErr>
    where
        TData: Copy + Eq,
        THash: From<TData>,
    {
        if target.is_empty() {
            return Err(SearchErr::InvalidTarget("target must be non-empty"));
        }
        if target.len() > source.len() {
            return Ok(None);
        }

        let hasher =
            <RollingHasher<THash> as WindowHasher<THash, TData>>::new(self.base, self.modulus)?;
        let index = HashIndex::build(&hasher, source, target.len());
        let target_hash = hasher.hash(target);

        // candidates come back in ascending offset order; a matching hash is
        // only a candidate until the window compares equal element-wise
        for &start in index.offsets(&target_hash) {
            if &source[start..start + target.len()] == target {
                return Ok(Some(start));
            }
        }
        Ok(None)
    }
}

/// Search two strings as `char` sequences with the default prime/modulus
/// pair. The returned offset counts chars, not bytes.
pub fn find(source: &str, target: &str) -> Result<Option<usize>, SearchErr> {
    let finder: Finder<u64> = Finder::new(DEFAULT_BASE.into(), DEFAULT_MOD_U64)?;
    let source: Vec<char> = source.chars().collect();
    let target: Vec<char> = target.chars().collect();
    finder.find(&source, &target)
}
