use std::ops::{Add, BitAnd, Mul, Rem, Shr, Sub};

use num_traits::{ops::overflowing::OverflowingAdd, CheckedMul, One, Zero};

use crate::interface::SearchErr;

/// Integer types the modular arithmetic (and therefore the hashers) can run
/// on. Satisfied by every primitive integer width, signed or unsigned.
pub trait ModInt:
    Copy
    + PartialOrd
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Rem<Output = Self>
    + Shr<Output = Self>
    + BitAnd<Output = Self>
    + CheckedMul
    + OverflowingAdd
{
}

impl<T> ModInt for T where
    T: Copy
        + PartialOrd
        + Zero
        + One
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Rem<Output = T>
        + Shr<Output = T>
        + BitAnd<Output = T>
        + CheckedMul
        + OverflowingAdd
{
}

/// Modular arithmetic over a validated positive modulus.
///
/// Every operation reduces its result into `[0, modulus)` and reduces after
/// each intermediate add/subtract/multiply. Construction rejects moduli
/// whose doubling would overflow `T`, which is what lets `mod_add` and
/// `mod_sub` normalize intermediates without wrapping.
#[derive(Clone, Copy, Debug)]
pub struct Mod<T> {
    modulus: T,
}

impl<T: ModInt> Mod<T> {
    pub fn new(modulus: T) -> Result<Self, SearchErr> {
        if modulus <= T::zero() {
            return Err(SearchErr::InvalidModulus("modulus must be positive"));
        }
        let (_, overflowed) = modulus.overflowing_add(&modulus);
        if overflowed {
            return Err(SearchErr::InvalidModulus(
                "2 * modulus must fit in the hash type",
            ));
        }
        Ok(Mod { modulus })
    }

    pub fn modulus(&self) -> T {
        self.modulus
    }

    /// Reduce `a` into `[0, modulus)`, mapping negative values of signed
    /// types onto their non-negative residue.
    pub fn mod_of(&self, a: T) -> T {
        let reduced = a % self.modulus; // -modulus < reduced < modulus
        (reduced + self.modulus) % self.modulus
    }

    pub fn mod_add(&self, a: T, b: T) -> T {
        self.mod_of((a % self.modulus) + (b % self.modulus))
    }

    pub fn mod_sub(&self, a: T, b: T) -> T {
        // lift a into [modulus, 2*modulus) so the subtraction can't go negative
        let a = self.mod_of(a) + self.modulus;
        (a - self.mod_of(b)) % self.modulus
    }

    pub fn mod_mul(&self, a: T, b: T) -> T {
        let a = self.mod_of(a);
        let b = self.mod_of(b);
        match a.checked_mul(&b) {
            Some(product) => self.mod_of(product),
            None => self.mul_by_doubling(a, b),
        }
    }

    // Russian-peasant multiplication for reduced operands whose product
    // still overflows T. Expects 0 <= a, b < modulus.
    fn mul_by_doubling(&self, mut a: T, mut b: T) -> T {
        let mut result = T::zero();
        while b > T::zero() {
            if (b & T::one()) == T::one() {
                result = self.mod_add(result, a);
            }
            a = self.mod_add(a, a);
            b = b >> T::one();
        }
        result
    }

    /// Binary exponentiation: `base^exp mod modulus`.
    ///
    /// `exp == 0` gives `1 mod modulus`, so `0` when the modulus is one.
    pub fn mod_pow(&self, base: T, mut exp: u64) -> T {
        let mut result = self.mod_of(T::one());
        let mut base = self.mod_of(base);
        while exp > 0 {
            if exp % 2 == 1 {
                result = self.mod_mul(result, base);
            }
            exp >>= 1;
            base = self.mod_mul(base, base);
        }
        result
    }
}

/// `base^exponent mod modulus` with argument validation.
///
/// A negative base is normalized into `[0, modulus)` first; a negative
/// exponent is unrepresentable. Non-positive moduli are rejected.
pub fn modular_power<T: ModInt>(base: T, exponent: u64, modulus: T) -> Result<T, SearchErr> {
    Ok(Mod::new(modulus)?.mod_pow(base, exponent))
}
