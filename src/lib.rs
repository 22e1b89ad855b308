//! Exact arithmetic over finite fields GF(p) and GF(p^n).
//!
//! Extension fields are defined by monic irreducible polynomials that are
//! discovered by sieving and cached on disk per prime, so later runs reuse
//! earlier searches.

pub mod algebra;
pub mod error;
pub mod structures;
pub mod utils;

pub use algebra::field::Field;
pub use algebra::ring::Ring;

pub use error::{FieldError, Result};
pub use structures::ext::{ExtensionField, ExtensionFieldElement};
pub use structures::fp::{Fp, PrimeField};
pub use structures::irreducible::{
    CacheConfig, FileStore, IrreducibilityRecord, IrreduciblePolynomialCache, MemoryStore,
    MonicPolynomials, RecordStore, SieveBound, StoreLocation, DEFAULT_DIRECTORY,
};
pub use structures::poly::Poly;
pub use utils::{checked_pow, floor_sqrt, is_prime, prime_divisors};
