use core::fmt;
use core::ops::{Add, Mul, Neg, Rem, Sub};

use crate::algebra::field::Field;
use crate::algebra::ring::Ring;
use crate::error::{FieldError, Result};
use crate::structures::fp::{Fp, PrimeField};
use crate::utils::prime_divisors;

/// Polynomial with coefficients in a ring `T`.
///
/// Coefficients are stored in ascending order of degree:
/// `coeffs[i]` is the coefficient of `x^i`.
///
/// Trailing zeros are trimmed on construction and after every arithmetic
/// operation, except that the zero polynomial keeps a single zero
/// coefficient and reports degree 0. A polynomial built from an empty
/// coefficient vector is also zero; it compares equal to any other zero
/// polynomial but has no coefficient to take the ring's identities from.
#[derive(Clone)]
pub struct Poly<T> {
    coeffs: Vec<T>,
}

impl<T: Ring> Poly<T> {
    /// Create a polynomial from coefficients in ascending order.
    ///
    /// # Example
    ///
    /// ```
    /// use gfext::{Poly, PrimeField};
    ///
    /// let f17 = PrimeField::new(17).unwrap();
    ///
    /// // 3 + 2x + x^2
    /// let p = Poly::new(vec![f17.elem(3), f17.elem(2), f17.elem(1), f17.elem(0)]);
    /// assert_eq!(p.degree(), 2);
    /// ```
    pub fn new(coeffs: Vec<T>) -> Self {
        let mut poly = Self { coeffs };
        poly.normalize();
        poly
    }

    /// The zero polynomial over the ring `like` lives in.
    pub fn zero_like(like: &T) -> Self {
        Self {
            coeffs: vec![like.zero_like()],
        }
    }

    /// The constant polynomial `c`.
    pub fn constant(c: T) -> Self {
        Self { coeffs: vec![c] }
    }

    /// The polynomial `x` over the ring `like` lives in.
    pub fn x_like(like: &T) -> Self {
        Self {
            coeffs: vec![like.zero_like(), like.one_like()],
        }
    }

    /// Create a monomial `c * x^n`.
    pub fn monomial(c: T, n: usize) -> Self {
        let mut coeffs = vec![c.zero_like(); n + 1];
        coeffs[n] = c;
        Self::new(coeffs)
    }

    /// Check if this is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(Ring::is_zero)
    }

    /// Highest power with a non-zero coefficient; 0 for the zero polynomial.
    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    /// Get the leading coefficient.
    ///
    /// Returns `None` only for a zero polynomial built from no coefficients.
    pub fn leading_coeff(&self) -> Option<&T> {
        self.coeffs.last()
    }

    /// Whether the leading coefficient is the multiplicative identity.
    pub fn is_monic(&self) -> bool {
        self.leading_coeff().is_some_and(Ring::is_one)
    }

    /// Get the coefficient of `x^i`, if stored.
    pub fn coeff(&self, i: usize) -> Option<&T> {
        self.coeffs.get(i)
    }

    /// Get a slice of all coefficients.
    pub fn coefficients(&self) -> &[T] {
        &self.coeffs
    }

    pub fn into_coefficients(self) -> Vec<T> {
        self.coeffs
    }

    /// Evaluate the polynomial at a point using Horner's method.
    pub fn eval(&self, x: &T) -> T {
        // p(x) = a_0 + x(a_1 + x(a_2 + ... + x*a_n))
        let mut result = x.zero_like();
        for coeff in self.coeffs.iter().rev() {
            result = result * x.clone() + coeff.clone();
        }
        result
    }

    /// Multiply every coefficient by `c`.
    pub fn scale(&self, c: &T) -> Self {
        Self::new(self.coeffs.iter().map(|a| a.clone() * c.clone()).collect())
    }

    /// Remove trailing zero coefficients, keeping at least one.
    fn normalize(&mut self) {
        while self.coeffs.len() > 1 && self.coeffs.last().is_some_and(Ring::is_zero) {
            self.coeffs.pop();
        }
    }

    /// Some coefficient of either operand, used to build identities.
    fn prototype<'a>(&'a self, other: &'a Self) -> Option<&'a T> {
        self.coeffs.first().or_else(|| other.coeffs.first())
    }

    fn add_ref(&self, rhs: &Self) -> Self {
        let n = self.coeffs.len().max(rhs.coeffs.len());
        let mut coeffs = Vec::with_capacity(n);
        for i in 0..n {
            let c = match (self.coeffs.get(i), rhs.coeffs.get(i)) {
                (Some(a), Some(b)) => a.clone() + b.clone(),
                (Some(a), None) => a.clone(),
                (None, Some(b)) => b.clone(),
                (None, None) => unreachable!("index below the longer length"),
            };
            coeffs.push(c);
        }
        Self::new(coeffs)
    }

    fn sub_ref(&self, rhs: &Self) -> Self {
        let n = self.coeffs.len().max(rhs.coeffs.len());
        let mut coeffs = Vec::with_capacity(n);
        for i in 0..n {
            let c = match (self.coeffs.get(i), rhs.coeffs.get(i)) {
                (Some(a), Some(b)) => a.clone() - b.clone(),
                (Some(a), None) => a.clone(),
                (None, Some(b)) => -b.clone(),
                (None, None) => unreachable!("index below the longer length"),
            };
            coeffs.push(c);
        }
        Self::new(coeffs)
    }

    /// Convolution of the coefficient sequences.
    fn mul_ref(&self, rhs: &Self) -> Self {
        if self.coeffs.is_empty() || rhs.coeffs.is_empty() {
            return Self {
                coeffs: self.prototype(rhs).map(Ring::zero_like).into_iter().collect(),
            };
        }

        let zero = self.coeffs[0].zero_like();
        let mut coeffs = vec![zero; self.coeffs.len() + rhs.coeffs.len()];

        for (i, a) in self.coeffs.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, b) in rhs.coeffs.iter().enumerate() {
                coeffs[i + j] = coeffs[i + j].clone() + a.clone() * b.clone();
            }
        }

        Self::new(coeffs)
    }
}

impl<T: Field> Poly<T> {
    /// Make the polynomial monic (leading coefficient = 1).
    ///
    /// # Errors
    ///
    /// Returns `FieldError::DivisionByZero` for the zero polynomial.
    pub fn monic(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(FieldError::DivisionByZero);
        }
        let lc = self.leading_coeff().ok_or(FieldError::DivisionByZero)?;
        Ok(self.scale(&lc.inverse()?))
    }

    /// Euclidean division: compute quotient and remainder.
    ///
    /// Returns `(q, r)` such that `self = q * divisor + r` and
    /// `deg(r) < deg(divisor)` or `r = 0`.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::DivisionByZero` if the divisor is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use gfext::{Poly, PrimeField};
    ///
    /// let f17 = PrimeField::new(17).unwrap();
    ///
    /// // (x^2 + 2x + 1) / (x + 1) = (x + 1), remainder 0
    /// let dividend = Poly::lift(f17, &[1, 2, 1]);
    /// let divisor = Poly::lift(f17, &[1, 1]);
    /// let (q, r) = dividend.div_rem(&divisor).unwrap();
    ///
    /// assert_eq!(q, divisor);
    /// assert!(r.is_zero());
    /// ```
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self)> {
        if divisor.is_zero() {
            return Err(FieldError::DivisionByZero);
        }

        let divisor_deg = divisor.degree();
        let lc = &divisor.coeffs[divisor_deg];
        let zero = lc.zero_like();

        if self.is_zero() || self.degree() < divisor_deg {
            return Ok((Self::constant(zero), self.clone()));
        }

        let lc_inv = lc.inverse()?;
        let n = self.degree();
        let mut remainder = self.coeffs.clone();
        let mut quotient = vec![zero.clone(); n - divisor_deg + 1];

        for k in (0..=n - divisor_deg).rev() {
            let c = remainder[k + divisor_deg].clone() * lc_inv.clone();
            if c.is_zero() {
                continue;
            }
            // remainder -= c * x^k * divisor
            for (i, d) in divisor.coeffs.iter().enumerate() {
                remainder[k + i] = remainder[k + i].clone() - c.clone() * d.clone();
            }
            quotient[k] = c;
        }

        remainder.truncate(divisor_deg);
        if remainder.is_empty() {
            remainder.push(zero);
        }

        Ok((Self::new(quotient), Self::new(remainder)))
    }

    /// The quotient of Euclidean division, discarding the remainder.
    pub fn quotient(&self, divisor: &Self) -> Result<Self> {
        self.div_rem(divisor).map(|(q, _)| q)
    }

    /// The remainder of Euclidean division.
    pub fn rem(&self, divisor: &Self) -> Result<Self> {
        self.div_rem(divisor).map(|(_, r)| r)
    }

    /// Exact division.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::NotDivisible` if `divisor` does not divide `self`,
    /// and `FieldError::DivisionByZero` for a zero divisor.
    pub fn exact_div(&self, divisor: &Self) -> Result<Self> {
        let (q, r) = self.div_rem(divisor)?;
        if !r.is_zero() {
            return Err(FieldError::NotDivisible);
        }
        Ok(q)
    }

    /// Whether `divisor` divides `self` with zero remainder.
    pub fn is_divisible_by(&self, divisor: &Self) -> Result<bool> {
        Ok(self.rem(divisor)?.is_zero())
    }

    /// Monic greatest common divisor; zero if both inputs are zero.
    pub fn gcd(a: &Self, b: &Self) -> Result<Self> {
        let mut r0 = a.clone();
        let mut r1 = b.clone();
        while !r1.is_zero() {
            let r = r0.rem(&r1)?;
            r0 = r1;
            r1 = r;
        }
        if r0.is_zero() {
            return Ok(r0);
        }
        r0.monic()
    }

    /// Extended Euclidean algorithm for polynomials.
    ///
    /// Returns `(g, s, t)` such that `g = gcd(a, b) = s*a + t*b`, with `g`
    /// monic unless both inputs are zero.
    ///
    /// # Example
    ///
    /// ```
    /// use gfext::{Poly, PrimeField};
    ///
    /// let f17 = PrimeField::new(17).unwrap();
    /// let a = Poly::lift(f17, &[1, 2, 1]); // 1 + 2x + x^2
    /// let b = Poly::lift(f17, &[1, 1]); // 1 + x
    ///
    /// let (g, s, t) = Poly::extended_gcd(&a, &b).unwrap();
    /// assert_eq!(s * a + t * b, g);
    /// ```
    pub fn extended_gcd(a: &Self, b: &Self) -> Result<(Self, Self, Self)> {
        let Some(proto) = a.prototype(b) else {
            return Ok((a.clone(), a.clone(), a.clone()));
        };
        let zero = Self::constant(proto.zero_like());
        let one = Self::constant(proto.one_like());

        let (mut r0, mut r1) = (a.clone(), b.clone());
        let (mut s0, mut s1) = (one.clone(), zero.clone());
        let (mut t0, mut t1) = (zero, one);

        while !r1.is_zero() {
            let (q, r) = r0.div_rem(&r1)?;
            let s = &s0 - &(&q * &s1);
            let t = &t0 - &(&q * &t1);
            r0 = core::mem::replace(&mut r1, r);
            s0 = core::mem::replace(&mut s1, s);
            t0 = core::mem::replace(&mut t1, t);
        }

        if r0.is_zero() {
            return Ok((r0, s0, t0));
        }

        let lc_inv = r0.coeffs[r0.degree()].inverse()?;
        Ok((r0.scale(&lc_inv), s0.scale(&lc_inv), t0.scale(&lc_inv)))
    }

    /// Compute `base^exp mod self` using repeated squaring.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::DivisionByZero` if `self` is zero.
    pub fn powmod(&self, base: &Self, exp: u64) -> Result<Self> {
        if self.is_zero() {
            return Err(FieldError::DivisionByZero);
        }

        let mut b = base.rem(self)?;
        let mut result = Self::constant(self.coeffs[0].one_like()).rem(self)?;
        let mut e = exp;

        while e > 0 {
            if e & 1 == 1 {
                result = (&result * &b).rem(self)?;
            }
            b = (&b * &b).rem(self)?;
            e >>= 1;
        }

        Ok(result)
    }
}

impl Poly<Fp> {
    /// Build a polynomial over GF(p) from signed integer coefficients.
    pub fn lift(field: PrimeField, values: &[i64]) -> Self {
        Self::new(values.iter().map(|&v| field.elem(v)).collect())
    }

    /// Coefficient residues, low to high degree.
    pub fn to_values(&self) -> Vec<u64> {
        self.coeffs.iter().map(|c| c.value()).collect()
    }

    /// Test if this polynomial is irreducible over GF(p) using Rabin's algorithm.
    ///
    /// A polynomial f(x) of degree n over GF(p) is irreducible if and only if:
    /// 1. `x^{p^n} ≡ x (mod f(x))`
    /// 2. `gcd(x^{p^{n/q}} - x, f(x)) = 1` for each prime divisor q of n
    ///
    /// Returns `false` for constant or zero polynomials.
    ///
    /// # Example
    ///
    /// ```
    /// use gfext::{Poly, PrimeField};
    ///
    /// let f17 = PrimeField::new(17).unwrap();
    ///
    /// // x^2 - 3 is irreducible over F_17 (3 is not a quadratic residue)
    /// assert!(Poly::lift(f17, &[-3, 0, 1]).is_irreducible());
    ///
    /// // x^2 - 4 = (x - 2)(x + 2)
    /// assert!(!Poly::lift(f17, &[-4, 0, 1]).is_irreducible());
    /// ```
    pub fn is_irreducible(&self) -> bool {
        let n = match self.degree() {
            _ if self.is_zero() => return false,
            0 => return false,
            1 => return true,
            d => d,
        };

        let f = match self.monic() {
            Ok(m) => m,
            Err(_) => return false,
        };
        let p = f.coeffs[0].characteristic();
        let x = Self::x_like(&f.coeffs[0]);

        // h = x^{p^i} mod f, starting with i = 0
        let mut h = x.clone();
        let divisors = prime_divisors(n);

        for i in 1..=n {
            h = match f.powmod(&h, p) {
                Ok(r) => r,
                Err(_) => return false,
            };

            // At i = n/q for each prime divisor q, gcd(h - x, f) must be 1
            for &q in &divisors {
                if n == i * q {
                    match Self::gcd(&(&h - &x), &f) {
                        Ok(g) if g.degree() == 0 && !g.is_zero() => {}
                        _ => return false,
                    }
                }
            }
        }

        (h - x).is_zero()
    }
}

/// Coefficient-wise equality with implicit zero padding.
impl<T: Ring> PartialEq for Poly<T> {
    fn eq(&self, other: &Self) -> bool {
        let n = self.coeffs.len().max(other.coeffs.len());
        (0..n).all(|i| match (self.coeffs.get(i), other.coeffs.get(i)) {
            (Some(a), Some(b)) => a == b,
            (Some(c), None) | (None, Some(c)) => c.is_zero(),
            (None, None) => true,
        })
    }
}

impl<T: Ring + Eq> Eq for Poly<T> {}

/* ---- standard arithmetic operators ---- */

impl<T: Ring> Add for Poly<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.add_ref(&rhs)
    }
}

impl<T: Ring> Add<&Poly<T>> for &Poly<T> {
    type Output = Poly<T>;

    fn add(self, rhs: &Poly<T>) -> Self::Output {
        self.add_ref(rhs)
    }
}

impl<T: Ring> Sub for Poly<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.sub_ref(&rhs)
    }
}

impl<T: Ring> Sub<&Poly<T>> for &Poly<T> {
    type Output = Poly<T>;

    fn sub(self, rhs: &Poly<T>) -> Self::Output {
        self.sub_ref(rhs)
    }
}

impl<T: Ring> Neg for Poly<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            coeffs: self.coeffs.into_iter().map(|c| -c).collect(),
        }
    }
}

impl<T: Ring> Neg for &Poly<T> {
    type Output = Poly<T>;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

impl<T: Ring> Mul for Poly<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.mul_ref(&rhs)
    }
}

impl<T: Ring> Mul<&Poly<T>> for Poly<T> {
    type Output = Self;

    fn mul(self, rhs: &Poly<T>) -> Self::Output {
        self.mul_ref(rhs)
    }
}

impl<T: Ring> Mul<&Poly<T>> for &Poly<T> {
    type Output = Poly<T>;

    fn mul(self, rhs: &Poly<T>) -> Self::Output {
        self.mul_ref(rhs)
    }
}

/// Remainder operator; panics on a zero divisor like integer `%`.
impl<T: Field> Rem<&Poly<T>> for &Poly<T> {
    type Output = Poly<T>;

    fn rem(self, rhs: &Poly<T>) -> Self::Output {
        match self.div_rem(rhs) {
            Ok((_, r)) => r,
            Err(e) => panic!("polynomial remainder failed: {e}"),
        }
    }
}

impl<T: Ring + fmt::Display> fmt::Debug for Poly<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut first = true;
        for (i, coeff) in self.coeffs.iter().enumerate() {
            if coeff.is_zero() {
                continue;
            }

            if !first {
                write!(f, " + ")?;
            }
            first = false;

            match i {
                0 => write!(f, "{}", coeff)?,
                1 if coeff.is_one() => write!(f, "x")?,
                1 => write!(f, "{}*x", coeff)?,
                _ if coeff.is_one() => write!(f, "x^{}", i)?,
                _ => write!(f, "{}*x^{}", coeff, i)?,
            }
        }

        Ok(())
    }
}

impl<T: Ring + fmt::Display> fmt::Display for Poly<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Poly<T> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.coeffs.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn f17() -> PrimeField {
        PrimeField::new(17).unwrap()
    }

    fn p17(values: &[i64]) -> Poly<Fp> {
        Poly::lift(f17(), values)
    }

    #[test]
    fn new_normalizes() {
        // Trailing zeros should be removed
        let p = p17(&[1, 2, 0, 0]);
        assert_eq!(p.degree(), 1);
        assert_eq!(p.coefficients().len(), 2);
    }

    #[test]
    fn all_zeros_keep_one_coefficient() {
        let p = p17(&[0, 0, 0]);
        assert!(p.is_zero());
        assert_eq!(p.degree(), 0);
        assert_eq!(p.coefficients().len(), 1);
        assert_eq!(p.leading_coeff(), Some(&f17().zero()));
    }

    #[test]
    fn empty_is_zero() {
        let empty = Poly::<Fp>::new(vec![]);
        assert!(empty.is_zero());
        assert_eq!(empty.degree(), 0);
        assert_eq!(empty, p17(&[0]));
        assert_eq!(empty.leading_coeff(), None);
    }

    #[test]
    fn constant_and_x() {
        let c = Poly::constant(f17().elem(5));
        assert_eq!(c.degree(), 0);
        assert_eq!(c.eval(&f17().elem(100)), f17().elem(5));

        let x = Poly::x_like(&f17().one());
        assert_eq!(x.degree(), 1);
        assert_eq!(x.eval(&f17().elem(5)), f17().elem(5));
    }

    #[test]
    fn monomial() {
        let m = Poly::monomial(f17().elem(3), 2); // 3x^2
        assert_eq!(m.degree(), 2);
        assert_eq!(m, p17(&[0, 0, 3]));
    }

    #[test]
    fn eval_horner() {
        // p(x) = 1 + 2x + 3x^2
        let p = p17(&[1, 2, 3]);
        assert_eq!(p.eval(&f17().elem(2)), f17().zero()); // 17 ≡ 0
        assert_eq!(p.eval(&f17().elem(1)), f17().elem(6));
    }

    #[test]
    fn add_trims_cancelled_terms() {
        let a = p17(&[1, 2, 3]);
        let b = p17(&[4, 5, -3]);
        let sum = &a + &b;
        assert_eq!(sum.degree(), 1);
        assert_eq!(sum, p17(&[5, 7]));
    }

    #[test]
    fn sub_self_is_zero() {
        let a = p17(&[1, 2, 3]);
        let diff = &a - &a;
        assert!(diff.is_zero());
        assert_eq!(diff.degree(), 0);
        assert_eq!(diff.coefficients().len(), 1);
    }

    #[test]
    fn sub_longer_rhs_negates_tail() {
        let a = p17(&[1]);
        let b = p17(&[0, 0, 1]);
        assert_eq!(a - b, p17(&[1, 0, -1]));
    }

    #[test]
    fn neg_involution() {
        let a = p17(&[1, 2, 3]);
        assert_eq!(-(-a.clone()), a);
        assert!((&a + &(-&a)).is_zero());
    }

    #[test]
    fn mul_convolution() {
        // (1 + x)(1 - x) = 1 - x^2
        let a = p17(&[1, 1]);
        let b = p17(&[1, -1]);
        assert_eq!(a * b, p17(&[1, 0, -1]));
    }

    #[test]
    fn mul_by_zero() {
        let a = p17(&[1, 2, 3]);
        let z = p17(&[0]);
        let prod = &a * &z;
        assert!(prod.is_zero());
        assert_eq!(prod.coefficients().len(), 1);
        assert!((&a * &Poly::new(vec![])).is_zero());
    }

    #[test]
    fn div_rem_exact() {
        // (x^2 + 2x + 1) / (x + 1) = (x + 1)
        let dividend = p17(&[1, 2, 1]);
        let divisor = p17(&[1, 1]);
        let (q, r) = dividend.div_rem(&divisor).unwrap();
        assert_eq!(q, divisor);
        assert!(r.is_zero());
    }

    #[test]
    fn div_rem_with_remainder() {
        // x^3 + 1 = (x^2 + 1)(x) + (1 - x)
        let f = p17(&[1, 0, 0, 1]);
        let g = p17(&[1, 0, 1]);
        let (q, r) = f.div_rem(&g).unwrap();
        assert_eq!(q, p17(&[0, 1]));
        assert_eq!(r, p17(&[1, -1]));
        assert_eq!(&(&q * &g) + &r, f);
    }

    #[test]
    fn div_rem_non_monic_divisor() {
        let f = p17(&[3, 5, 7, 11, 13]);
        let g = p17(&[2, 0, 5]);
        let (q, r) = f.div_rem(&g).unwrap();
        assert_eq!(q.degree(), 2);
        assert!(r.degree() < g.degree());
        assert_eq!(&(&q * &g) + &r, f);
    }

    #[test]
    fn div_rem_smaller_dividend() {
        let f = p17(&[1, 1]);
        let g = p17(&[1, 0, 1]);
        let (q, r) = f.div_rem(&g).unwrap();
        assert!(q.is_zero());
        assert_eq!(r, f);
    }

    #[test]
    fn div_by_constant() {
        let f = p17(&[2, 4, 6]);
        let (q, r) = f.div_rem(&p17(&[2])).unwrap();
        assert_eq!(q, p17(&[1, 2, 3]));
        assert!(r.is_zero());
        assert_eq!(r.coefficients().len(), 1);
    }

    #[test]
    fn div_by_zero_fails() {
        let f = p17(&[1, 1]);
        assert!(matches!(
            f.div_rem(&p17(&[0])),
            Err(FieldError::DivisionByZero)
        ));
        assert!(matches!(
            f.div_rem(&Poly::new(vec![])),
            Err(FieldError::DivisionByZero)
        ));
    }

    #[test]
    fn derived_division_operators() {
        let f = p17(&[1, 0, 0, 1]);
        let g = p17(&[1, 0, 1]);
        assert_eq!(f.quotient(&g).unwrap(), p17(&[0, 1]));
        assert_eq!(f.rem(&g).unwrap(), p17(&[1, -1]));
        assert_eq!(&f % &g, p17(&[1, -1]));
        assert!(matches!(f.exact_div(&g), Err(FieldError::NotDivisible)));

        let h = p17(&[1, 1]);
        let prod = &g * &h;
        assert_eq!(prod.exact_div(&h).unwrap(), g);
        assert!(prod.is_divisible_by(&g).unwrap());
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn rem_operator_panics_on_zero() {
        let _ = &p17(&[1, 1]) % &p17(&[0]);
    }

    #[test]
    fn monic_scales() {
        let p = p17(&[2, 4, 2]);
        let m = p.monic().unwrap();
        assert!(m.is_monic());
        assert_eq!(m, p17(&[1, 2, 1]));
        assert!(p17(&[0]).monic().is_err());
    }

    #[test]
    fn gcd_common_root() {
        // gcd((x-1)(x-2), (x-2)(x-3)) = x - 2
        let p1 = &p17(&[-1, 1]) * &p17(&[-2, 1]);
        let p2 = &p17(&[-2, 1]) * &p17(&[-3, 1]);
        let g = Poly::gcd(&p1, &p2).unwrap();
        assert_eq!(g, p17(&[-2, 1]));
    }

    #[test]
    fn gcd_coprime() {
        let g = Poly::gcd(&p17(&[1, 1]), &p17(&[2, 1])).unwrap();
        assert_eq!(g, p17(&[1]));
    }

    #[test]
    fn extended_gcd_bezout() {
        let a = p17(&[3, 0, 5, 1]);
        let b = p17(&[7, 2, 1]);
        let (g, s, t) = Poly::extended_gcd(&a, &b).unwrap();
        assert!(g.is_monic());
        assert_eq!(&(&s * &a) + &(&t * &b), g);
    }

    #[test]
    fn extended_gcd_zero_inputs() {
        let z = p17(&[0]);
        let (g, _, _) = Poly::extended_gcd(&z, &z).unwrap();
        assert!(g.is_zero());

        let a = p17(&[2, 2]);
        let (g, s, t) = Poly::extended_gcd(&a, &z).unwrap();
        assert_eq!(g, p17(&[1, 1]));
        assert_eq!(&(&s * &a) + &(&t * &z), g);
    }

    #[test]
    fn powmod_matches_repeated_multiplication() {
        let m = p17(&[3, 0, 1, 1]);
        let base = p17(&[1, 2]);
        let mut expected = p17(&[1]);
        for _ in 0..10 {
            expected = (&expected * &base).rem(&m).unwrap();
        }
        assert_eq!(m.powmod(&base, 10).unwrap(), expected);
        assert_eq!(m.powmod(&base, 0).unwrap(), p17(&[1]));
    }

    #[test]
    fn irreducible_quadratics() {
        assert!(p17(&[-3, 0, 1]).is_irreducible());
        assert!(!p17(&[-4, 0, 1]).is_irreducible());
        assert!(p17(&[5, 1]).is_irreducible());
        assert!(!p17(&[5]).is_irreducible());
        assert!(!p17(&[0]).is_irreducible());
    }

    #[test]
    fn irreducible_over_gf2() {
        let f2 = PrimeField::new(2).unwrap();
        assert!(Poly::lift(f2, &[1, 1, 1]).is_irreducible());
        assert!(!Poly::lift(f2, &[1, 0, 1]).is_irreducible()); // (x+1)^2
        assert!(Poly::lift(f2, &[1, 1, 0, 1]).is_irreducible());
        // (x^3 + x + 1)^2 = x^6 + x^2 + 1
        assert!(!Poly::lift(f2, &[1, 0, 1, 0, 0, 0, 1]).is_irreducible());
    }

    #[test]
    fn debug_format() {
        assert_eq!(format!("{:?}", p17(&[3, 1, 0, 2])), "3 + x + 2*x^3");
        assert_eq!(format!("{:?}", p17(&[0])), "0");
    }

    #[test]
    fn to_values_round_trip() {
        let p = p17(&[1, -1, 1]);
        assert_eq!(p.to_values(), vec![1, 16, 1]);
    }
}
