use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};
use std::sync::Arc;

use log::debug;

use crate::algebra::field::Field;
use crate::algebra::ring::Ring;
use crate::error::{FieldError, Result};
use crate::structures::fp::{Fp, PrimeField};
use crate::structures::irreducible::IrreduciblePolynomialCache;
use crate::structures::poly::Poly;
use crate::utils::checked_pow;

/// Shared, immutable definition of GF(p^n).
struct Definition {
    base: PrimeField,
    degree: usize,
    /// Monic, degree `degree`.
    defining: Poly<Fp>,
    /// `-c_i` for the lower coefficients `c_0..c_{n-1}` of the defining polynomial.
    neg_tail: Vec<Fp>,
}

/// The extension field GF(p^n) = GF(p)[x] / (f(x)).
///
/// `f` is a monic irreducible polynomial of degree `n` taken from an
/// [`IrreduciblePolynomialCache`] when the field is created. Cloning the
/// field is cheap: clones share the definition.
///
/// # Example
///
/// ```
/// use gfext::{CacheConfig, ExtensionField, IrreduciblePolynomialCache};
///
/// let cache = IrreduciblePolynomialCache::new(CacheConfig::in_memory());
///
/// // GF(4) = GF(2)[x] / (x^2 + x + 1)
/// let gf4 = ExtensionField::new(2, 2, &cache).unwrap();
/// let x = gf4.element(&[0, 1]);
///
/// // x^2 = x + 1
/// assert_eq!(&x * &x, gf4.element(&[1, 1]));
/// assert_eq!(gf4.order(), Some(4));
/// ```
#[derive(Clone)]
pub struct ExtensionField {
    inner: Arc<Definition>,
}

impl ExtensionField {
    /// Create GF(p^n) with the cache's defining polynomial for `(p, n)`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `p` is not prime or `n == 0`; any error the cache
    /// raises while computing or loading irreducibles.
    pub fn new(p: u64, n: usize, cache: &IrreduciblePolynomialCache) -> Result<Self> {
        let base = PrimeField::new(p)?;
        if n == 0 {
            return Err(FieldError::InvalidArgument(
                "extension degree must be at least 1".to_string(),
            ));
        }

        let defining = cache.defining_polynomial(p, n)?;
        debug!("GF({p}^{n}) defined by {defining:?}");

        let neg_tail = defining.coefficients()[..n].iter().map(|&c| -c).collect();
        Ok(Self {
            inner: Arc::new(Definition {
                base,
                degree: n,
                defining,
                neg_tail,
            }),
        })
    }

    pub fn base(&self) -> PrimeField {
        self.inner.base
    }

    pub fn characteristic(&self) -> u64 {
        self.inner.base.characteristic()
    }

    /// Extension degree `n`.
    pub fn degree(&self) -> usize {
        self.inner.degree
    }

    pub fn defining_polynomial(&self) -> &Poly<Fp> {
        &self.inner.defining
    }

    /// Number of elements `p^n`, or `None` if it does not fit in a `u64`.
    pub fn order(&self) -> Option<u64> {
        checked_pow(self.characteristic(), self.degree())
    }

    pub fn zero(&self) -> ExtensionFieldElement {
        ExtensionFieldElement {
            field: self.clone(),
            coeffs: vec![self.inner.base.zero()],
        }
    }

    pub fn one(&self) -> ExtensionFieldElement {
        ExtensionFieldElement {
            field: self.clone(),
            coeffs: vec![self.inner.base.one()],
        }
    }

    /// The class of `x`, which generates the field over GF(p).
    ///
    /// Returns `None` for `n < 2`, where `x` collapses into the base field.
    pub fn x(&self) -> Option<ExtensionFieldElement> {
        if self.degree() < 2 {
            return None;
        }
        Some(self.element(&[0, 1]))
    }

    /// Element from integer coefficients, low to high degree.
    ///
    /// Coefficients are lifted into GF(p) and the vector is reduced.
    pub fn element(&self, values: &[i64]) -> ExtensionFieldElement {
        let coeffs = values.iter().map(|&v| self.inner.base.elem(v)).collect();
        self.wrap(coeffs)
    }

    /// Element from prime-field coefficients, low to high degree.
    ///
    /// # Errors
    ///
    /// `IncompatibleOperand` if a coefficient is not in GF(p).
    pub fn element_from(&self, coeffs: Vec<Fp>) -> Result<ExtensionFieldElement> {
        if let Some(c) = coeffs.iter().find(|c| !self.inner.base.contains(c)) {
            return Err(FieldError::IncompatibleOperand(format!(
                "coefficient over GF({}) used in {:?}",
                c.characteristic(),
                self
            )));
        }
        Ok(self.wrap(coeffs))
    }

    /// Reduce a coefficient vector to at most `n` entries using the
    /// defining relation `x^n = -(c_0 + c_1 x + ... + c_{n-1} x^{n-1})`.
    ///
    /// Coefficients must belong to the base field.
    ///
    /// ```
    /// use gfext::{CacheConfig, ExtensionField, IrreduciblePolynomialCache, PrimeField};
    ///
    /// let cache = IrreduciblePolynomialCache::new(CacheConfig::in_memory());
    /// let gf4 = ExtensionField::new(2, 2, &cache).unwrap();
    /// let f2 = PrimeField::new(2).unwrap();
    ///
    /// // x^3 = x * (x + 1) = x^2 + x = 1
    /// let cube = vec![f2.zero(), f2.zero(), f2.zero(), f2.one()];
    /// assert_eq!(gf4.reduce(cube), vec![f2.one(), f2.zero()]);
    /// ```
    pub fn reduce(&self, mut v: Vec<Fp>) -> Vec<Fp> {
        let n = self.inner.degree;
        while v.len() > n {
            let Some(h) = v.pop() else { break };
            if h.is_zero() {
                continue;
            }
            let offset = v.len() - n;
            for (slot, &c) in v[offset..].iter_mut().zip(&self.inner.neg_tail) {
                *slot = *slot + h * c;
            }
        }
        v
    }

    #[cfg(feature = "rand")]
    pub fn random_element<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> ExtensionFieldElement {
        let coeffs = (0..self.degree())
            .map(|_| self.inner.base.random(rng))
            .collect();
        self.wrap(coeffs)
    }

    fn wrap(&self, coeffs: Vec<Fp>) -> ExtensionFieldElement {
        let coeffs = self.reduce(coeffs);
        ExtensionFieldElement {
            field: self.clone(),
            coeffs,
        }
    }
}

impl PartialEq for ExtensionField {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
            || (self.inner.base == other.inner.base
                && self.inner.degree == other.inner.degree
                && self.inner.defining == other.inner.defining)
    }
}

impl Eq for ExtensionField {}

impl fmt::Debug for ExtensionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GF({}^{}) mod {:?}",
            self.characteristic(),
            self.degree(),
            self.inner.defining
        )
    }
}

/// An element of GF(p^n): a vector of at most `n` coefficients over GF(p),
/// low to high degree.
#[derive(Clone)]
pub struct ExtensionFieldElement {
    field: ExtensionField,
    coeffs: Vec<Fp>,
}

impl ExtensionFieldElement {
    pub fn field(&self) -> &ExtensionField {
        &self.field
    }

    /// Coefficient vector; may be shorter than `n`.
    pub fn coeffs(&self) -> &[Fp] {
        &self.coeffs
    }

    /// Coefficient of `x^i`, zero past the stored length.
    pub fn coeff(&self, i: usize) -> Fp {
        self.coeffs
            .get(i)
            .copied()
            .unwrap_or_else(|| self.field.inner.base.zero())
    }

    pub fn to_poly(&self) -> Poly<Fp> {
        Poly::new(self.coeffs.clone())
    }

    /// `self^exp` by square-and-multiply.
    pub fn pow(&self, exp: u64) -> Self {
        let mut base = self.clone();
        let mut result = self.field.one();
        let mut e = exp;

        while e > 0 {
            if e & 1 == 1 {
                result = result.mul_unchecked(&base);
            }
            base = base.mul_unchecked(&base);
            e >>= 1;
        }
        result
    }

    pub fn try_add(&self, rhs: &Self) -> Result<Self> {
        self.check_same_field(rhs)?;
        Ok(self.add_unchecked(rhs))
    }

    pub fn try_sub(&self, rhs: &Self) -> Result<Self> {
        self.check_same_field(rhs)?;
        Ok(self.sub_unchecked(rhs))
    }

    pub fn try_mul(&self, rhs: &Self) -> Result<Self> {
        self.check_same_field(rhs)?;
        Ok(self.mul_unchecked(rhs))
    }

    /// `self * rhs⁻¹`, failing on mixed fields or a non-invertible divisor.
    pub fn try_div(&self, rhs: &Self) -> Result<Self> {
        self.check_same_field(rhs)?;
        Ok(self.mul_unchecked(&rhs.inverse()?))
    }

    fn check_same_field(&self, rhs: &Self) -> Result<()> {
        if self.field != rhs.field {
            return Err(FieldError::IncompatibleOperand(format!(
                "{:?} and {:?} elements cannot be combined",
                self.field, rhs.field
            )));
        }
        Ok(())
    }

    #[inline]
    fn assert_same_field(&self, rhs: &Self) {
        assert!(
            self.field == rhs.field,
            "extension field elements must belong to the same field ({:?} != {:?})",
            self.field,
            rhs.field
        );
    }

    fn add_unchecked(&self, rhs: &Self) -> Self {
        let n = self.coeffs.len().max(rhs.coeffs.len());
        let coeffs = (0..n).map(|i| self.coeff(i) + rhs.coeff(i)).collect();
        self.field.wrap(coeffs)
    }

    fn sub_unchecked(&self, rhs: &Self) -> Self {
        let n = self.coeffs.len().max(rhs.coeffs.len());
        let coeffs = (0..n).map(|i| self.coeff(i) - rhs.coeff(i)).collect();
        self.field.wrap(coeffs)
    }

    /// Convolve into a `2n` buffer, then reduce.
    fn mul_unchecked(&self, rhs: &Self) -> Self {
        let base = self.field.inner.base;
        let mut buf = vec![base.zero(); 2 * self.field.degree()];

        for (i, &a) in self.coeffs.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, &b) in rhs.coeffs.iter().enumerate() {
                buf[i + j] = buf[i + j] + a * b;
            }
        }

        self.field.wrap(buf)
    }
}

/// Equal when both belong to the same field and their zero-padded vectors match.
impl PartialEq for ExtensionFieldElement {
    fn eq(&self, other: &Self) -> bool {
        if self.field != other.field {
            return false;
        }
        let n = self.coeffs.len().max(other.coeffs.len());
        (0..n).all(|i| self.coeff(i) == other.coeff(i))
    }
}

impl Eq for ExtensionFieldElement {}

/* ---- standard arithmetic operators ---- */

impl Add<&ExtensionFieldElement> for &ExtensionFieldElement {
    type Output = ExtensionFieldElement;

    fn add(self, rhs: &ExtensionFieldElement) -> Self::Output {
        self.assert_same_field(rhs);
        self.add_unchecked(rhs)
    }
}

impl Add for ExtensionFieldElement {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl Sub<&ExtensionFieldElement> for &ExtensionFieldElement {
    type Output = ExtensionFieldElement;

    fn sub(self, rhs: &ExtensionFieldElement) -> Self::Output {
        self.assert_same_field(rhs);
        self.sub_unchecked(rhs)
    }
}

impl Sub for ExtensionFieldElement {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl Mul<&ExtensionFieldElement> for &ExtensionFieldElement {
    type Output = ExtensionFieldElement;

    fn mul(self, rhs: &ExtensionFieldElement) -> Self::Output {
        self.assert_same_field(rhs);
        self.mul_unchecked(rhs)
    }
}

impl Mul for ExtensionFieldElement {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

/// Scalar multiplication by a base field element.
impl Mul<Fp> for &ExtensionFieldElement {
    type Output = ExtensionFieldElement;

    fn mul(self, rhs: Fp) -> Self::Output {
        assert!(
            self.field.inner.base.contains(&rhs),
            "scalar must belong to the base field"
        );
        let coeffs = self.coeffs.iter().map(|&c| c * rhs).collect();
        self.field.wrap(coeffs)
    }
}

impl Neg for &ExtensionFieldElement {
    type Output = ExtensionFieldElement;

    fn neg(self) -> Self::Output {
        ExtensionFieldElement {
            field: self.field.clone(),
            coeffs: self.coeffs.iter().map(|&c| -c).collect(),
        }
    }
}

impl Neg for ExtensionFieldElement {
    type Output = Self;

    fn neg(self) -> Self::Output {
        -&self
    }
}

impl Div<&ExtensionFieldElement> for &ExtensionFieldElement {
    type Output = ExtensionFieldElement;

    fn div(self, rhs: &ExtensionFieldElement) -> Self::Output {
        self.assert_same_field(rhs);
        match rhs.inverse() {
            Ok(inv) => self.mul_unchecked(&inv),
            Err(e) => panic!("extension field division failed: {e}"),
        }
    }
}

impl Div for ExtensionFieldElement {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        &self / &rhs
    }
}

impl fmt::Debug for ExtensionFieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.to_poly())
    }
}

impl fmt::Display for ExtensionFieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ExtensionFieldElement {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.coeffs.serialize(serializer)
    }
}

/* ---- implement Ring and Field ---- */

impl Ring for ExtensionFieldElement {
    fn zero_like(&self) -> Self {
        self.field.zero()
    }

    fn one_like(&self) -> Self {
        self.field.one()
    }

    fn is_zero(&self) -> bool {
        self.coeffs.iter().all(Ring::is_zero)
    }

    fn is_one(&self) -> bool {
        self.coeff(0).is_one() && self.coeffs.iter().skip(1).all(Ring::is_zero)
    }
}

impl Field for ExtensionFieldElement {
    /// Inverse via the extended Euclidean algorithm against the defining
    /// polynomial: `s*a + t*f = 1` gives `a⁻¹ = s`.
    ///
    /// Fails with `DivisionByZero` for zero and `NotInvertible` when `a`
    /// shares a factor with a reducible defining polynomial.
    fn inverse(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(FieldError::DivisionByZero);
        }

        let modulus = self.field.defining_polynomial();
        let (g, s, _t) = Poly::extended_gcd(&self.to_poly(), modulus)?;

        if g.degree() != 0 || g.is_zero() {
            return Err(FieldError::NotInvertible {
                modulus: format!("{modulus:?}"),
            });
        }

        Ok(self.field.wrap(s.into_coefficients()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::irreducible::{CacheConfig, SieveBound};

    fn cache() -> IrreduciblePolynomialCache {
        IrreduciblePolynomialCache::new(CacheConfig::in_memory())
    }

    fn gf(p: u64, n: usize) -> ExtensionField {
        ExtensionField::new(p, n, &cache()).unwrap()
    }

    /// Every vector of `len` coefficients over GF(p), as integers.
    fn all_vectors(p: i64, len: usize) -> Vec<Vec<i64>> {
        let mut out = vec![vec![]];
        for _ in 0..len {
            out = out
                .into_iter()
                .flat_map(|v| {
                    (0..p).map(move |c| {
                        let mut w = v.clone();
                        w.push(c);
                        w
                    })
                })
                .collect();
        }
        out
    }

    #[test]
    fn defining_polynomial_from_cache() {
        let gf4 = gf(2, 2);
        assert_eq!(gf4.defining_polynomial().to_values(), vec![1, 1, 1]);
        assert_eq!(gf4.degree(), 2);
        assert_eq!(gf4.characteristic(), 2);

        let c = cache();
        let gf27 = ExtensionField::new(3, 3, &c).unwrap();
        assert_eq!(
            Some(gf27.defining_polynomial()),
            c.compute(3, 3).unwrap().last()
        );
    }

    #[test]
    fn invalid_parameters() {
        let c = cache();
        assert!(matches!(
            ExtensionField::new(6, 2, &c),
            Err(FieldError::InvalidArgument(_))
        ));
        assert!(matches!(
            ExtensionField::new(5, 0, &c),
            Err(FieldError::InvalidArgument(_))
        ));
    }

    #[test]
    fn x_squared_in_gf4() {
        let gf4 = gf(2, 2);
        let x = gf4.element(&[0, 1]);
        assert_eq!(&x * &x, gf4.element(&[1, 1]));
        assert_eq!(gf4.x(), Some(x));
    }

    #[test]
    fn zero_one_and_x() {
        let gf8 = gf(2, 3);
        assert!(gf8.zero().is_zero());
        assert!(gf8.one().is_one());
        assert!(!gf8.x().unwrap().is_one());
        assert!(gf(5, 1).x().is_none());
        assert_eq!(gf8.order(), Some(8));
        assert_eq!(gf(7, 3).order(), Some(343));
    }

    #[test]
    fn element_reduces_input() {
        let gf4 = gf(2, 2);
        // x^2 -> x + 1, and coefficients are lifted mod 2
        let e = gf4.element(&[0, 0, 1]);
        assert_eq!(e.coeffs().len(), 2);
        assert_eq!(e, gf4.element(&[1, 1]));
        assert_eq!(gf4.element(&[3, -1]), gf4.element(&[1, 1]));
    }

    #[test]
    fn element_from_checks_characteristic() {
        let gf9 = gf(3, 2);
        let f3 = PrimeField::new(3).unwrap();
        let f5 = PrimeField::new(5).unwrap();
        assert_eq!(
            gf9.element_from(vec![f3.elem(1), f3.elem(2)]).unwrap(),
            gf9.element(&[1, 2])
        );
        assert!(matches!(
            gf9.element_from(vec![f5.elem(1)]),
            Err(FieldError::IncompatibleOperand(_))
        ));
    }

    #[test]
    fn reduce_gf8_is_idempotent() {
        let gf8 = gf(2, 3);
        let f2 = gf8.base();
        for len in 0..=6 {
            for v in all_vectors(2, len) {
                let v: Vec<Fp> = v.iter().map(|&c| f2.elem(c)).collect();
                let once = gf8.reduce(v);
                assert!(once.len() <= 3);
                assert_eq!(gf8.reduce(once.clone()), once);
            }
        }
    }

    #[test]
    fn reduce_matches_polynomial_remainder() {
        let gf27 = gf(3, 3);
        let f3 = gf27.base();
        for v in all_vectors(3, 5) {
            let coeffs: Vec<Fp> = v.iter().map(|&c| f3.elem(c)).collect();
            let expected = Poly::new(coeffs.clone())
                .rem(gf27.defining_polynomial())
                .unwrap();
            assert_eq!(Poly::new(gf27.reduce(coeffs)), expected);
        }
    }

    #[test]
    fn add_sub_neg() {
        let gf9 = gf(3, 2);
        let a = gf9.element(&[1, 2]);
        let b = gf9.element(&[2, 2]);
        assert_eq!(&a + &b, gf9.element(&[0, 1]));
        assert_eq!(&a - &b, gf9.element(&[2, 0]));
        assert!((&a + &(-&a)).is_zero());
        assert_eq!(a.clone() - a.clone(), gf9.zero());
    }

    #[test]
    fn mul_identity_and_zero() {
        let gf8 = gf(2, 3);
        for v in all_vectors(2, 3) {
            let a = gf8.element(&v);
            assert_eq!(&a * &gf8.one(), a);
            assert!((&a * &gf8.zero()).is_zero());
        }
    }

    #[test]
    fn mul_commutative_and_associative() {
        let gf9 = gf(3, 2);
        let a = gf9.element(&[1, 2]);
        let b = gf9.element(&[2, 1]);
        let c = gf9.element(&[0, 2]);
        assert_eq!(&a * &b, &b * &a);
        assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
        assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
    }

    #[test]
    fn scalar_mul() {
        let gf9 = gf(3, 2);
        let a = gf9.element(&[1, 2]);
        assert_eq!(&a * gf9.base().elem(2), gf9.element(&[2, 1]));
    }

    #[test]
    fn inverse_all_nonzero() {
        for (p, n) in [(2, 3), (3, 2), (5, 2)] {
            let field = gf(p, n);
            for v in all_vectors(p as i64, n) {
                let a = field.element(&v);
                if a.is_zero() {
                    continue;
                }
                let inv = a.inverse().unwrap();
                assert!((&a * &inv).is_one(), "{a:?} * {inv:?} in {field:?}");
            }
        }
    }

    #[test]
    fn inverse_of_zero_fails() {
        let gf4 = gf(2, 2);
        assert!(matches!(
            gf4.zero().inverse(),
            Err(FieldError::DivisionByZero)
        ));
    }

    #[test]
    fn reducible_modulus_not_invertible() {
        // Under the square-root bound, the last degree-6 survivor over GF(2)
        // is 1 + x + ... + x^6 = (x^3 + x + 1)(x^3 + x^2 + 1).
        let cache = IrreduciblePolynomialCache::new(
            CacheConfig::in_memory().with_sieve_bound(SieveBound::SquareRoot),
        );
        let field = ExtensionField::new(2, 6, &cache).unwrap();
        assert_eq!(field.defining_polynomial().to_values(), vec![1; 7]);

        let factor = field.element(&[1, 1, 0, 1]);
        assert!(matches!(
            factor.inverse(),
            Err(FieldError::NotInvertible { .. })
        ));
        assert!(field.element(&[0, 1]).inverse().is_ok());
    }

    #[test]
    fn division_and_pow() {
        let gf25 = gf(5, 2);
        let a = gf25.element(&[2, 3]);
        let b = gf25.element(&[4, 1]);
        assert_eq!(&(&a / &b) * &b, a);
        assert_eq!(a.try_div(&b).unwrap(), &a / &b);

        assert_eq!(a.pow(0), gf25.one());
        assert_eq!(a.pow(3), &(&a * &a) * &a);
        // Multiplicative group has order 24
        assert_eq!(a.pow(24), gf25.one());
        assert_eq!(a.pow(25), a);
    }

    #[test]
    fn mixed_fields() {
        let gf4 = gf(2, 2);
        let gf8 = gf(2, 3);
        let a = gf4.one();
        let b = gf8.one();
        assert_ne!(a, b);
        assert!(matches!(a.try_add(&b), Err(FieldError::IncompatibleOperand(_))));
        assert!(matches!(a.try_sub(&b), Err(FieldError::IncompatibleOperand(_))));
        assert!(matches!(a.try_mul(&b), Err(FieldError::IncompatibleOperand(_))));
        assert!(matches!(a.try_div(&b), Err(FieldError::IncompatibleOperand(_))));
    }

    #[test]
    #[should_panic(expected = "same field")]
    fn mixed_fields_operator_panics() {
        let _ = &gf(2, 2).one() + &gf(3, 2).one();
    }

    #[test]
    fn fields_from_separate_caches_are_equal() {
        let a = gf(3, 2);
        let b = gf(3, 2);
        assert_eq!(a, b);
        assert_eq!(a.element(&[1, 1]), b.element(&[1, 1]));
    }

    #[test]
    fn coefficient_access() {
        let gf9 = gf(3, 2);
        let a = gf9.element(&[2]);
        assert_eq!(a.coeff(0), 2);
        assert_eq!(a.coeff(5), 0);
        assert_eq!(a.to_poly().to_values(), vec![2]);
    }

    #[test]
    fn debug_format() {
        let gf9 = gf(3, 2);
        assert_eq!(format!("{:?}", gf9.element(&[1, 2])), "1 + 2*x");
        assert_eq!(format!("{:?}", gf9.zero()), "0");
    }
}
