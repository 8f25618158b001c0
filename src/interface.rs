use thiserror::Error;

/// Failure modes shared by hasher construction and search argument checks.
///
/// A missing match is never an error; `Finder::find` reports it as
/// `Ok(None)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchErr {
    #[error("invalid base: {0}")]
    InvalidBase(&'static str),
    #[error("invalid modulus: {0}")]
    InvalidModulus(&'static str),
    #[error("invalid target: {0}")]
    InvalidTarget(&'static str),
}

pub trait WindowHasher<THash, TData>: Sized + Clone {
    /**
     * Need to Implement
     */

    fn new(base: THash, modulus: THash) -> Result<Self, SearchErr>;

    /// Hash of the whole slice. For a window this is exactly the value the
    /// sliding iterators report at that window's start offset.
    fn hash(&self, data: &[TData]) -> THash;

    /**
     * Override
     */

    fn hash_windows_owned<'data>(
        self,
        data: &'data [TData],
        window_size: usize,
    ) -> impl Iterator<Item = (THash, usize)> + 'data
    where
        Self: 'data,
    {
        self.hash_windows_by_recompute_owned(data, window_size)
    }

    fn hash_windows<'data>(
        &self,
        data: &'data [TData],
        window_size: usize,
    ) -> impl Iterator<Item = (THash, usize)> + 'data
    where
        Self: 'data,
    {
        let clone = self.clone();
        clone.hash_windows_owned(data, window_size)
    }

    /**
     * Do not Implement
     */

    /// Hashes every window from scratch in O(window_size) each.
    /// Shouldn't be overridden as it serves as the reference the rolling
    /// implementation is checked against. Zero-size windows yield nothing.
    fn hash_windows_by_recompute_owned<'data>(
        self,
        data: &'data [TData],
        window_size: usize,
    ) -> impl Iterator<Item = (THash, usize)> + 'data
    where
        Self: 'data,
    {
        let num_windows = if window_size == 0 {
            0
        } else {
            (data.len() + 1).saturating_sub(window_size)
        };
        (0..num_windows).map(move |start| {
            let window = &data[start..start + window_size];
            (self.hash(window), start)
        })
    }

    fn hash_windows_with<'data>(
        base: THash,
        modulus: THash,
        data: &'data [TData],
        window_size: usize,
    ) -> Result<impl Iterator<Item = (THash, usize)> + 'data, SearchErr>
    where
        Self: 'data,
    {
        Self::new(base, modulus).map(|hasher| hasher.hash_windows_owned(data, window_size))
    }
}
