use num_bigint::BigInt;
use num_iter::range;

use crate::interface::{SearchErr, WindowHasher};

/// Reference hasher that evaluates the polynomial in `BigInt`, so it can
/// never overflow regardless of the hash type. Slow by design; it exists to
/// cross-check `RollingHasher` and relies on the trait's recompute-based
/// sliding default.
#[derive(Clone)]
pub struct BigIntHasher {
    base: BigInt,
    modulus: BigInt,
}

impl BigIntHasher {
    fn build_hash<TData: Copy + Into<BigInt>>(&self, data: &[TData]) -> BigInt {
        let mut hash = BigInt::from(0);
        for idx in range(0, data.len()) {
            let unit: BigInt = data[idx].into();
            hash *= self.base.clone();
            hash += unit;
            hash %= self.modulus.clone();
            hash += self.modulus.clone();
            hash %= self.modulus.clone();
        }
        hash
    }
}

impl<THash, TData> WindowHasher<THash, TData> for BigIntHasher
where
    TData: Copy + Into<BigInt>,
    THash: Copy + Into<BigInt> + TryFrom<BigInt>,
{
    fn new(base: THash, modulus: THash) -> Result<Self, SearchErr> {
        let base: BigInt = base.into();
        let modulus: BigInt = modulus.into();
        if modulus <= BigInt::from(0) {
            return Err(SearchErr::InvalidModulus("modulus must be positive"));
        }
        if base <= BigInt::from(0) {
            return Err(SearchErr::InvalidBase("base must be positive"));
        }
        Ok(BigIntHasher { base, modulus })
    }

    fn hash(&self, data: &[TData]) -> THash {
        // the reduced hash is non-negative and below the modulus, and the
        // modulus came out of a THash, so the conversion back cannot fail
        self.build_hash(data).try_into().ok().unwrap()
    }
}
