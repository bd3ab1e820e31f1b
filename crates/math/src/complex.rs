//! Complex numbers over any float type
//!
//! `Complex<F32x4>` holds four independent complex numbers, one per lane,
//! and every operation stays lane-wise. Magnitude and angle go through the
//! approximation kernels, so the type is usable in `no_std` builds.

use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::math::{atan2, cos_wrapped, sin_wrapped, sqrt};
use crate::traits::Float;
use crate::types::{F32x4, F64x2};

/// A complex number `re + im·i`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Complex<X: Float> {
    /// Real part
    pub re: X,
    /// Imaginary part
    pub im: X,
}

impl<X: Float> Complex<X> {
    /// `re + im·i`
    #[inline(always)]
    pub fn new(re: X, im: X) -> Self {
        Self { re, im }
    }

    /// The imaginary unit.
    #[inline(always)]
    pub fn i() -> Self {
        Self::new(X::ZERO, X::ONE)
    }

    /// `r · (cos θ + i·sin θ)`, for any finite `theta`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vsl_math::Complex;
    ///
    /// let z = Complex::from_polar(2.0f64, core::f64::consts::FRAC_PI_2);
    /// assert!(z.re.abs() < 1e-6);
    /// assert!((z.im - 2.0).abs() < 1e-6);
    /// ```
    #[inline(always)]
    pub fn from_polar(r: X, theta: X) -> Self {
        Self::new(r * cos_wrapped(theta), r * sin_wrapped(theta))
    }

    /// Complex conjugate.
    #[inline(always)]
    pub fn conj(self) -> Self {
        Self::new(self.re, -self.im)
    }

    /// `re² + im²`
    #[inline(always)]
    pub fn norm_sqr(self) -> X {
        self.re * self.re + self.im * self.im
    }

    /// Magnitude.
    #[inline(always)]
    pub fn abs(self) -> X {
        sqrt(self.norm_sqr())
    }

    /// Angle in `[-π, π]`.
    #[inline(always)]
    pub fn arg(self) -> X {
        atan2(self.im, self.re)
    }

    /// `(abs, arg)`
    #[inline(always)]
    pub fn to_polar(self) -> (X, X) {
        (self.abs(), self.arg())
    }

    /// Multiply both parts by a real value.
    #[inline(always)]
    pub fn scale(self, t: X) -> Self {
        Self::new(self.re * t, self.im * t)
    }

    /// `1 / self`
    #[inline(always)]
    pub fn inv(self) -> Self {
        let n = self.norm_sqr();
        Self::new(self.re / n, -self.im / n)
    }
}

impl<X: Float> From<X> for Complex<X> {
    #[inline(always)]
    fn from(re: X) -> Self {
        Self::new(re, X::ZERO)
    }
}

impl<X: Float> Neg for Complex<X> {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        Self::new(-self.re, -self.im)
    }
}

impl<X: Float> Add for Complex<X> {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl<X: Float> Sub for Complex<X> {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl<X: Float> Mul for Complex<X> {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl<X: Float> Div for Complex<X> {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        let n = rhs.norm_sqr();
        Self::new(
            (self.re * rhs.re + self.im * rhs.im) / n,
            (self.im * rhs.re - self.re * rhs.im) / n,
        )
    }
}

impl<X: Float> Add<X> for Complex<X> {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: X) -> Self {
        Self::new(self.re + rhs, self.im)
    }
}

impl<X: Float> Sub<X> for Complex<X> {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: X) -> Self {
        Self::new(self.re - rhs, self.im)
    }
}

impl<X: Float> Mul<X> for Complex<X> {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: X) -> Self {
        self.scale(rhs)
    }
}

impl<X: Float> Div<X> for Complex<X> {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: X) -> Self {
        Self::new(self.re / rhs, self.im / rhs)
    }
}

macro_rules! compound_assign {
    ($($trait:ident :: $method:ident => $op:tt),*) => {
        $(
            impl<X: Float> $trait for Complex<X> {
                #[inline(always)]
                fn $method(&mut self, rhs: Self) {
                    *self = *self $op rhs;
                }
            }

            impl<X: Float> $trait<X> for Complex<X> {
                #[inline(always)]
                fn $method(&mut self, rhs: X) {
                    *self = *self $op rhs;
                }
            }
        )*
    };
}

compound_assign!(
    AddAssign::add_assign => +,
    SubAssign::sub_assign => -,
    MulAssign::mul_assign => *,
    DivAssign::div_assign => /
);

// Coherence rules out `impl<X> Add<Complex<X>> for X`, so the real-on-the-left
// forms are spelled out per float type.
macro_rules! real_lhs {
    ($($t:ty),*) => {
        $(
            impl Add<Complex<$t>> for $t {
                type Output = Complex<$t>;

                #[inline(always)]
                fn add(self, rhs: Complex<$t>) -> Complex<$t> {
                    rhs + self
                }
            }

            impl Sub<Complex<$t>> for $t {
                type Output = Complex<$t>;

                #[inline(always)]
                fn sub(self, rhs: Complex<$t>) -> Complex<$t> {
                    Complex::new(self - rhs.re, -rhs.im)
                }
            }

            impl Mul<Complex<$t>> for $t {
                type Output = Complex<$t>;

                #[inline(always)]
                fn mul(self, rhs: Complex<$t>) -> Complex<$t> {
                    rhs.scale(self)
                }
            }

            impl Div<Complex<$t>> for $t {
                type Output = Complex<$t>;

                #[inline(always)]
                fn div(self, rhs: Complex<$t>) -> Complex<$t> {
                    rhs.inv().scale(self)
                }
            }
        )*
    };
}

real_lhs!(f32, f64, F32x4, F64x2);
