//! Rabin-Karp substring search over generic sequences.
//!
//! The pieces compose bottom-up: [`modular`] provides overflow-safe modular
//! arithmetic (including binary exponentiation), [`rolling_hash`] turns it
//! into an O(1)-per-window sliding polynomial hash, [`hash_index`] collects
//! the window hashes of a sequence into a hash-to-offsets map, and
//! [`finder`] resolves a target's hash against that map, verifying each
//! candidate window to rule out collisions.
//!
//! Hash and data types are generic; [`reference_hash`] supplies a `BigInt`
//! implementation of the same [`interface::WindowHasher`] contract for
//! cross-checking.

pub mod finder;
pub mod hash_index;
pub mod interface;
pub mod modular;
pub mod reference_hash;
pub mod rolling_hash;

pub use finder::{find, Finder};
pub use interface::{SearchErr, WindowHasher};
pub use modular::modular_power;
