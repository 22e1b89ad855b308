use super::ring::Ring;
use crate::error::Result;

/// A (commutative) field.
///
/// Extends `Ring` with multiplicative inverses for all non-zero elements.
pub trait Field: Ring {
    /// Multiplicative inverse `a⁻¹`.
    ///
    /// Fails with [`FieldError::DivisionByZero`](crate::FieldError::DivisionByZero)
    /// when `self` is zero.
    fn inverse(&self) -> Result<Self>;

    /// Division `self / rhs`, failing on a zero divisor.
    #[inline]
    fn try_div(&self, rhs: &Self) -> Result<Self> {
        Ok(self.clone() * rhs.inverse()?)
    }
}
