use core::ops::{Add, Mul, Neg, Sub};

/// A commutative ring whose elements carry their own parameters.
///
/// This trait assumes:
/// - (R, +) is an abelian group
/// - (R, ·) is a commutative monoid
/// - multiplication distributes over addition.
///
/// Elements of runtime-parameterized rings (such as residues modulo a prime
/// chosen at runtime) cannot expose `ZERO`/`ONE` constants, so the identities
/// are produced from an existing element with [`Ring::zero_like`] and
/// [`Ring::one_like`].
pub trait Ring:
    Sized
    + Clone
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// The additive identity of the ring `self` lives in.
    fn zero_like(&self) -> Self;

    /// The multiplicative identity of the ring `self` lives in.
    fn one_like(&self) -> Self;

    #[inline]
    fn is_zero(&self) -> bool {
        *self == self.zero_like()
    }

    #[inline]
    fn is_one(&self) -> bool {
        *self == self.one_like()
    }
}
