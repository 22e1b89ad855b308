use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::algebra::field::Field;
use crate::algebra::ring::Ring;
use crate::error::{FieldError, Result};
use crate::utils::is_prime;

/// The prime field GF(p), with `p` chosen at runtime.
///
/// A `PrimeField` is a validated characteristic: it can only be built from a
/// prime, so every [`Fp`] produced from it lives in a genuine field.
///
/// # Example
///
/// ```
/// use gfext::PrimeField;
///
/// let f5 = PrimeField::new(5).unwrap();
/// let a = f5.elem(3);
/// let b = f5.elem(-1); // lifted to 4
///
/// assert_eq!((a + b).value(), 2);
/// assert!(PrimeField::new(15).is_err());
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct PrimeField {
    p: u64,
}

impl PrimeField {
    /// Create GF(p).
    ///
    /// # Errors
    ///
    /// Returns `FieldError::InvalidArgument` if `p` is not prime.
    pub fn new(p: u64) -> Result<Self> {
        if !is_prime(p) {
            return Err(FieldError::InvalidArgument(format!(
                "characteristic {p} is not prime"
            )));
        }
        Ok(Self { p })
    }

    /// The characteristic `p`.
    pub const fn characteristic(&self) -> u64 {
        self.p
    }

    /// Lift a signed integer into the field.
    pub fn elem(&self, value: i64) -> Fp {
        let p = self.p as i128;
        Fp {
            value: (value as i128).rem_euclid(p) as u64,
            p: self.p,
        }
    }

    /// Lift an unsigned integer into the field.
    pub fn elem_u64(&self, value: u64) -> Fp {
        Fp::new(value, *self)
    }

    pub fn zero(&self) -> Fp {
        Fp { value: 0, p: self.p }
    }

    pub fn one(&self) -> Fp {
        Fp { value: 1, p: self.p }
    }

    /// All `p` residues, in increasing order of their representative.
    pub fn elements(&self) -> impl Iterator<Item = Fp> {
        let p = self.p;
        (0..p).map(move |value| Fp { value, p })
    }

    /// Whether `a` was produced by a field of the same characteristic.
    pub fn contains(&self, a: &Fp) -> bool {
        a.p == self.p
    }

    /// Uniformly random element.
    #[cfg(feature = "rand")]
    pub fn random<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Fp {
        Fp {
            value: rng.gen_range(0..self.p),
            p: self.p,
        }
    }
}

impl fmt::Debug for PrimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GF({})", self.p)
    }
}

impl fmt::Display for PrimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// An element of GF(p): a residue in `[0, p)` tagged with its characteristic.
///
/// Arithmetic operators panic when the operands come from different fields,
/// the same way integer division panics on zero. Use the `try_*` methods to
/// get a [`FieldError::IncompatibleOperand`] instead.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Fp {
    value: u64,
    p: u64,
}

#[cfg(feature = "serde")]
impl serde::Serialize for Fp {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl Fp {
    /// Create a field element, reducing `value` modulo the characteristic.
    pub fn new(value: u64, field: PrimeField) -> Self {
        Self {
            value: value % field.p,
            p: field.p,
        }
    }

    /// Get the representative in `[0, p-1]`.
    pub const fn value(self) -> u64 {
        self.value
    }

    /// The characteristic `p`.
    pub const fn characteristic(self) -> u64 {
        self.p
    }

    /// The field this element belongs to.
    pub const fn field(self) -> PrimeField {
        PrimeField { p: self.p }
    }

    /// Compute `self^exp` using square-and-multiply.
    ///
    /// Time complexity: O(log exp) multiplications.
    ///
    /// # Example
    ///
    /// ```
    /// use gfext::PrimeField;
    ///
    /// let f17 = PrimeField::new(17).unwrap();
    /// let a = f17.elem(3);
    /// assert_eq!(a.pow(0), f17.one());
    /// assert_eq!(a.pow(2), a * a);
    /// assert_eq!(a.pow(16), f17.one()); // Fermat: a^(p-1) = 1
    /// ```
    pub fn pow(self, exp: u64) -> Self {
        let mut base = self;
        let mut result = Self { value: 1, p: self.p };
        let mut e = exp;

        while e > 0 {
            if e & 1 == 1 {
                result = result.mul_unchecked(base);
            }
            base = base.mul_unchecked(base);
            e >>= 1;
        }
        result
    }

    /// `self^exp` for a signed exponent.
    ///
    /// # Errors
    ///
    /// Negative exponents are rejected with `FieldError::InvalidArgument`.
    pub fn checked_pow(self, exp: i64) -> Result<Self> {
        let exp = u64::try_from(exp).map_err(|_| {
            FieldError::InvalidArgument(format!("exponent {exp} is negative"))
        })?;
        Ok(self.pow(exp))
    }

    pub fn try_add(self, rhs: Self) -> Result<Self> {
        self.check_same_field(rhs)?;
        Ok(self.add_unchecked(rhs))
    }

    pub fn try_sub(self, rhs: Self) -> Result<Self> {
        self.check_same_field(rhs)?;
        Ok(self.sub_unchecked(rhs))
    }

    pub fn try_mul(self, rhs: Self) -> Result<Self> {
        self.check_same_field(rhs)?;
        Ok(self.mul_unchecked(rhs))
    }

    /// `self / rhs`, failing on mixed fields or a zero divisor.
    pub fn try_div(self, rhs: Self) -> Result<Self> {
        self.check_same_field(rhs)?;
        Ok(self.mul_unchecked(rhs.inverse()?))
    }

    fn check_same_field(self, rhs: Self) -> Result<()> {
        if self.p != rhs.p {
            return Err(FieldError::IncompatibleOperand(format!(
                "GF({}) and GF({}) elements cannot be combined",
                self.p, rhs.p
            )));
        }
        Ok(())
    }

    /// Panicking counterpart of [`Fp::check_same_field`] used by the operators.
    #[inline]
    fn assert_same_field(self, rhs: Self) {
        assert!(
            self.p == rhs.p,
            "Fp elements must have the same characteristic ({} != {})",
            self.p,
            rhs.p
        );
    }

    #[inline]
    fn add_unchecked(self, rhs: Self) -> Self {
        let (sum, carry) = self.value.overflowing_add(rhs.value);
        let value = if carry || sum >= self.p {
            sum.wrapping_sub(self.p)
        } else {
            sum
        };
        Self { value, p: self.p }
    }

    #[inline]
    fn sub_unchecked(self, rhs: Self) -> Self {
        let value = if self.value >= rhs.value {
            self.value - rhs.value
        } else {
            self.value + (self.p - rhs.value)
        };
        Self { value, p: self.p }
    }

    #[inline]
    fn mul_unchecked(self, rhs: Self) -> Self {
        let prod = (self.value as u128) * (rhs.value as u128);
        Self {
            value: (prod % self.p as u128) as u64,
            p: self.p,
        }
    }
}

impl fmt::Debug for Fp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (mod {})", self.value, self.p)
    }
}

impl fmt::Display for Fp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<Fp> for u64 {
    fn from(fp: Fp) -> Self {
        fp.value
    }
}

/// Comparison against integer literals, reduced modulo `p`.
impl PartialEq<u64> for Fp {
    fn eq(&self, other: &u64) -> bool {
        self.value == other % self.p
    }
}

/* ---- standard arithmetic operators ---- */

impl Add for Fp {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.assert_same_field(rhs);
        self.add_unchecked(rhs)
    }
}

impl Sub for Fp {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.assert_same_field(rhs);
        self.sub_unchecked(rhs)
    }
}

impl Mul for Fp {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.assert_same_field(rhs);
        self.mul_unchecked(rhs)
    }
}

impl Neg for Fp {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        if self.value == 0 {
            self
        } else {
            Self {
                value: self.p - self.value,
                p: self.p,
            }
        }
    }
}

/// Division implemented via multiplicative inverse.
impl Div for Fp {
    type Output = Self;

    #[inline]
    #[allow(clippy::suspicious_arithmetic_impl)]
    fn div(self, rhs: Self) -> Self::Output {
        self.assert_same_field(rhs);
        assert!(rhs.value != 0, "division by zero in Fp");
        self.mul_unchecked(rhs.pow(self.p - 2))
    }
}

/* ---- implement Ring ---- */

impl Ring for Fp {
    #[inline]
    fn zero_like(&self) -> Self {
        Self { value: 0, p: self.p }
    }

    #[inline]
    fn one_like(&self) -> Self {
        Self { value: 1, p: self.p }
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.value == 0
    }

    #[inline]
    fn is_one(&self) -> bool {
        self.value == 1
    }
}

/* ---- implement Field ---- */

impl Field for Fp {
    /// Fermat inversion: `a^(p-2) = a^(-1)` for non-zero `a`.
    fn inverse(&self) -> Result<Self> {
        if self.value == 0 {
            return Err(FieldError::DivisionByZero);
        }
        Ok(self.pow(self.p - 2))
    }
}

/* ---- basic tests ---- */
