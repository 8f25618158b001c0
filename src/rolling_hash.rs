use crate::interface::{SearchErr, WindowHasher};
use crate::modular::{Mod, ModInt};

// Mersenne primes
pub const DEFAULT_MOD_U64: u64 = (1 << 61) - 1;
pub const DEFAULT_MOD_U32: u32 = (1 << 31) - 1;
// prime, comfortably above the byte alphabet
pub const DEFAULT_BASE: u16 = 257;

/// Polynomial hasher whose sliding iterator pays O(window) for the first
/// window and O(1) for each window after it.
#[derive(Clone, Copy, Debug)]
pub struct RollingHasher<THash> {
    base: THash,
    modulus: Mod<THash>,
}

impl<THash, TData> WindowHasher<THash, TData> for RollingHasher<THash>
where
    THash: ModInt + From<TData>,
    TData: Copy,
{
    fn new(base: THash, modulus: THash) -> Result<Self, SearchErr> {
        let modulus = Mod::new(modulus)?;
        if base <= THash::zero() {
            return Err(SearchErr::InvalidBase("base must be positive"));
        }
        Ok(RollingHasher { base, modulus })
    }

    fn hash(&self, data: &[TData]) -> THash {
        let mut hash = THash::zero();
        for &unit in data {
            hash = self
                .modulus
                .mod_add(self.modulus.mod_mul(hash, self.base), unit.into());
        }
        hash
    }

    fn hash_windows_owned<'data>(
        self,
        data: &'data [TData],
        window_size: usize,
    ) -> impl Iterator<Item = (THash, usize)> + 'data
    where
        Self: 'data,
    {
        RollingWindows::new(self, data, window_size)
    }
}

/// Iterator over `(hash, start_offset)` for every window of a fixed size,
/// in ascending offset order.
pub struct RollingWindows<'data, TData, THash> {
    state: Option<WindowState<'data, TData, THash>>,
}

struct WindowState<'data, TData, THash> {
    data: &'data [TData],
    window_size: usize,
    base: THash,
    modulus: Mod<THash>,
    curr_start: usize,
    curr_hash: THash,
    // base^(window_size - 1) mod modulus, the weight of the leading unit
    leading_weight: THash,
}

impl<'data, TData, THash> RollingWindows<'data, TData, THash>
where
    THash: ModInt + From<TData>,
    TData: Copy,
{
    fn new(hasher: RollingHasher<THash>, data: &'data [TData], window_size: usize) -> Self {
        if window_size == 0 || window_size > data.len() {
            return RollingWindows { state: None };
        }

        let leading_weight = hasher
            .modulus
            .mod_pow(hasher.base, (window_size - 1) as u64);

        let mut curr_hash = THash::zero();
        for &unit in &data[..window_size] {
            curr_hash = hasher
                .modulus
                .mod_add(hasher.modulus.mod_mul(curr_hash, hasher.base), unit.into());
        }

        RollingWindows {
            state: Some(WindowState {
                data,
                window_size,
                base: hasher.base,
                modulus: hasher.modulus,
                curr_start: 0,
                curr_hash,
                leading_weight,
            }),
        }
    }
}

impl<'data, TData, THash> Iterator for RollingWindows<'data, TData, THash>
where
    THash: ModInt + From<TData>,
    TData: Copy,
{
    type Item = (THash, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let state = self.state.as_mut()?;
        let curr_end = state.curr_start + state.window_size;
        if curr_end > state.data.len() {
            return None;
        }

        let emitted = (state.curr_hash, state.curr_start);

        if curr_end < state.data.len() {
            // roll: strip the leading unit, shift, append the next unit
            let outgoing = THash::from(state.data[state.curr_start]);
            let incoming = THash::from(state.data[curr_end]);
            let stripped = state.modulus.mod_sub(
                state.curr_hash,
                state.modulus.mod_mul(outgoing, state.leading_weight),
            );
            state.curr_hash = state
                .modulus
                .mod_add(state.modulus.mod_mul(stripped, state.base), incoming);
        }

        state.curr_start += 1;
        Some(emitted)
    }
}

#[cfg(test)]
mod tests {
    use crate::interface::tests::WindowHasherTests;
    use crate::interface::WindowHasher;

    use super::{RollingHasher, DEFAULT_BASE, DEFAULT_MOD_U32, DEFAULT_MOD_U64};

    #[test]
    fn empty_data() {
        <RollingHasher<u64> as WindowHasherTests<u64, u8>>::check_empty_data();
    }

    #[test]
    fn window_larger_than_data() {
        <RollingHasher<u64> as WindowHasherTests<u64, u8>>::check_window_larger_than_data();
    }

    #[test]
    fn window_equal_to_data() {
        <RollingHasher<u64> as WindowHasherTests<u64, u8>>::check_window_equal_to_data();
    }

    #[test]
    fn single_unit_windows() {
        <RollingHasher<u64> as WindowHasherTests<u64, u8>>::check_single_unit_windows();
    }

    #[test]
    fn overlapping_windows() {
        <RollingHasher<u64> as WindowHasherTests<u64, u8>>::check_overlapping_windows();
    }

    #[test]
    fn modulus_one() {
        <RollingHasher<u64> as WindowHasherTests<u64, u8>>::check_modulus_one();
    }

    #[test]
    fn windows_match_recompute_u64() {
        <RollingHasher<u64> as WindowHasherTests<u64, u8>>::check_windows_match_recompute();
    }

    #[test]
    fn windows_match_recompute_u32() {
        <RollingHasher<u32> as WindowHasherTests<u32, u8>>::check_windows_match_recompute();
    }

    #[test]
    fn windows_match_recompute_i64() {
        <RollingHasher<i64> as WindowHasherTests<i64, u8>>::check_windows_match_recompute();
    }

    #[test]
    fn determinism() {
        <RollingHasher<u64> as WindowHasherTests<u64, u8>>::check_determinism();
    }

    #[test]
    fn rejects_bad_arguments() {
        <RollingHasher<u64> as WindowHasherTests<u64, u8>>::check_rejects_bad_arguments();
    }

    #[test]
    fn default_constants_are_usable() {
        let hasher: RollingHasher<u64> =
            WindowHasher::<u64, u8>::new(DEFAULT_BASE.into(), DEFAULT_MOD_U64).unwrap();
        let hash = WindowHasher::<u64, u8>::hash(&hasher, b"hello");
        assert!(hash < DEFAULT_MOD_U64);
        assert!(hash > 0);

        let hasher32: RollingHasher<u32> =
            WindowHasher::<u32, u8>::new(DEFAULT_BASE.into(), DEFAULT_MOD_U32).unwrap();
        let hash32 = WindowHasher::<u32, u8>::hash(&hasher32, b"hello");
        assert!(hash32 < DEFAULT_MOD_U32);
    }

    #[test]
    fn rolling_update_matches_direct_summation() {
        // the hash at offset i+1 must equal a from-scratch hash of that window
        let data: &[u8] = b"the quick brown fox jumps over the lazy dog";
        let hasher: RollingHasher<u64> =
            WindowHasher::<u64, u8>::new(DEFAULT_BASE.into(), DEFAULT_MOD_U64).unwrap();
        let window_size = 9;
        for (hash, start) in hasher.hash_windows(data, window_size) {
            let direct = WindowHasher::<u64, u8>::hash(&hasher, &data[start..start + window_size]);
            assert_eq!(hash, direct, "window at {start}");
        }
    }
}
