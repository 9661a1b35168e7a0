//! Exact Gaussian-rational field Q(i): pairs (re, im) of [`BigRational`].

use std::ops::{Add, Mul, Neg, Sub};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

use crate::error::{AlgebraError, AlgebraResult};

/// A Gaussian rational `re + im*i`, re, im ∈ ℚ.
///
/// Mirrors the teacher's `Unitary2x2`'s flat `Complex64`-based design, but
/// with exact rationals in place of `f64` — see `SPEC_FULL.md` §3.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GaussianRational {
    pub re: BigRational,
    pub im: BigRational,
}

impl GaussianRational {
    /// Construct from a real and imaginary rational part.
    pub fn new(re: BigRational, im: BigRational) -> Self {
        Self { re, im }
    }

    /// Construct from real and imaginary integers.
    pub fn from_ints(re: impl Into<BigInt>, im: impl Into<BigInt>) -> Self {
        Self {
            re: BigRational::from_integer(re.into()),
            im: BigRational::from_integer(im.into()),
        }
    }

    /// The additive identity `0 + 0i`.
    pub fn zero() -> Self {
        Self {
            re: BigRational::zero(),
            im: BigRational::zero(),
        }
    }

    /// The multiplicative identity `1 + 0i`.
    pub fn one() -> Self {
        Self {
            re: BigRational::one(),
            im: BigRational::zero(),
        }
    }

    /// The imaginary unit `0 + 1i`.
    pub fn i() -> Self {
        Self {
            re: BigRational::zero(),
            im: BigRational::one(),
        }
    }

    /// True iff this value is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.re.is_zero() && self.im.is_zero()
    }

    /// Complex conjugate: `conj(a, b) = (a, -b)`.
    pub fn conj(&self) -> Self {
        Self {
            re: self.re.clone(),
            im: -self.im.clone(),
        }
    }

    /// `re^2 + im^2`, a non-negative rational, zero iff this value is zero.
    pub fn norm_squared(&self) -> BigRational {
        &self.re * &self.re + &self.im * &self.im
    }

    /// Multiplicative inverse. Fails with [`AlgebraError::DivisionByZero`]
    /// iff `norm_squared(self) == 0`.
    pub fn inv(&self) -> AlgebraResult<Self> {
        let n = self.norm_squared();
        if n.is_zero() {
            return Err(AlgebraError::DivisionByZero);
        }
        Ok(Self {
            re: &self.re / &n,
            im: -(&self.im / &n),
        })
    }

    /// `self / other`, i.e. `self * other.inv()`.
    pub fn div(&self, other: &Self) -> AlgebraResult<Self> {
        Ok(self.clone() * other.inv()?)
    }

    /// Scale by a rational: `(re*r, im*r)`.
    pub fn scale(&self, r: &BigRational) -> Self {
        Self {
            re: &self.re * r,
            im: &self.im * r,
        }
    }
}

impl Add for GaussianRational {
    type Output = GaussianRational;
    fn add(self, rhs: Self) -> Self::Output {
        GaussianRational {
            re: self.re + rhs.re,
            im: self.im + rhs.im,
        }
    }
}

impl<'a, 'b> Add<&'b GaussianRational> for &'a GaussianRational {
    type Output = GaussianRational;
    fn add(self, rhs: &'b GaussianRational) -> Self::Output {
        GaussianRational {
            re: &self.re + &rhs.re,
            im: &self.im + &rhs.im,
        }
    }
}

impl Sub for GaussianRational {
    type Output = GaussianRational;
    fn sub(self, rhs: Self) -> Self::Output {
        GaussianRational {
            re: self.re - rhs.re,
            im: self.im - rhs.im,
        }
    }
}

impl<'a, 'b> Sub<&'b GaussianRational> for &'a GaussianRational {
    type Output = GaussianRational;
    fn sub(self, rhs: &'b GaussianRational) -> Self::Output {
        GaussianRational {
            re: &self.re - &rhs.re,
            im: &self.im - &rhs.im,
        }
    }
}

impl Neg for GaussianRational {
    type Output = GaussianRational;
    fn neg(self) -> Self::Output {
        GaussianRational {
            re: -self.re,
            im: -self.im,
        }
    }
}

impl Mul for GaussianRational {
    type Output = GaussianRational;
    /// `(a + bi)(c + di) = (ac - bd) + (ad + bc)i`, computed exactly.
    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl<'a, 'b> Mul<&'b GaussianRational> for &'a GaussianRational {
    type Output = GaussianRational;
    fn mul(self, rhs: &'b GaussianRational) -> Self::Output {
        GaussianRational {
            re: &self.re * &rhs.re - &self.im * &rhs.im,
            im: &self.re * &rhs.im + &self.im * &rhs.re,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(re: i64, im: i64) -> GaussianRational {
        GaussianRational::from_ints(re, im)
    }

    #[test]
    fn conjugate_negates_imaginary_part() {
        assert_eq!(q(3, -4).conj(), q(3, 4));
    }

    #[test]
    fn mul_matches_the_spec_formula() {
        // (1+2i)(3+4i) = (3-8) + (4+6)i = -5 + 10i
        assert_eq!(q(1, 2) * q(3, 4), q(-5, 10));
    }

    #[test]
    fn inv_of_i_is_negative_i() {
        // S6: inv((0,1)) = (0,-1)
        assert_eq!(GaussianRational::i().inv().unwrap(), q(0, -1));
    }

    #[test]
    fn inv_of_zero_fails() {
        // S6: inv((0,0)) fails
        assert!(matches!(
            GaussianRational::zero().inv(),
            Err(AlgebraError::DivisionByZero)
        ));
    }

    #[test]
    fn additive_inverse_law() {
        let a = q(7, -3);
        assert!((a.clone() + (-a)).is_zero());
    }

    #[test]
    fn multiplicative_inverse_law() {
        let a = q(3, 4);
        let prod = a.clone() * a.inv().unwrap();
        assert_eq!(prod, GaussianRational::one());
    }

    #[test]
    fn addition_is_commutative_and_associative() {
        let a = q(1, 2);
        let b = q(-3, 5);
        let c = q(7, -1);
        assert_eq!(a.clone() + b.clone(), b.clone() + a.clone());
        assert_eq!(
            (a.clone() + b.clone()) + c.clone(),
            a + (b + c)
        );
    }

    #[test]
    fn multiplication_distributes_over_addition() {
        let a = q(2, 1);
        let b = q(0, 3);
        let c = q(-1, -1);
        let lhs = a.clone() * (b.clone() + c.clone());
        let rhs = a.clone() * b + a * c;
        assert_eq!(lhs, rhs);
    }
}
