//! Complex number arithmetic for domain-coloring evaluation.
//!
//! Plain f64 components throughout. The operations here are total over
//! finite inputs: `ln` of a zero-magnitude value yields the sentinel
//! `(-inf, 0)` instead of panicking, and everything downstream (exp,
//! lightness compression) accepts that sentinel.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Complex number with f64 components.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const ZERO: Complex = Complex { re: 0.0, im: 0.0 };

    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Complex addition: (a + bi) + (c + di) = (a+c) + (b+d)i
    #[inline]
    pub fn add(&self, other: &Complex) -> Complex {
        Complex {
            re: self.re + other.re,
            im: self.im + other.im,
        }
    }

    /// Complex multiplication: (a + bi)(c + di) = (ac - bd) + (ad + bc)i
    #[inline]
    pub fn mul(&self, other: &Complex) -> Complex {
        Complex {
            re: self.re * other.re - self.im * other.im,
            im: self.re * other.im + self.im * other.re,
        }
    }

    /// Squared magnitude: |z|² = re² + im²
    #[inline]
    pub fn norm_sqr(&self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Magnitude: |z| = √(re² + im²)
    #[inline]
    pub fn mag(&self) -> f64 {
        self.norm_sqr().sqrt()
    }

    /// Phase angle in (-π, π], via `atan2(im, re)`.
    ///
    /// The origin has no defined angle; `atan2(0, 0)` is 0 and that is the
    /// value callers get.
    #[inline]
    pub fn phase(&self) -> f64 {
        self.im.atan2(self.re)
    }

    /// Principal-branch natural logarithm: ln|z| + i·arg(z).
    ///
    /// At the origin the real part is `-inf` (log of a zero magnitude) and
    /// the imaginary part is 0. No finite input produces NaN here.
    pub fn ln(&self) -> Complex {
        Complex {
            re: self.mag().ln(),
            im: self.phase(),
        }
    }

    /// Complex exponential: e^(a + bi) = e^a·(cos b + i·sin b)
    pub fn exp(&self) -> Complex {
        let magnitude = self.re.exp();
        Complex {
            re: magnitude * self.im.cos(),
            im: magnitude * self.im.sin(),
        }
    }

    /// Principal-branch complex power: exp(exponent · ln(self)).
    ///
    /// The principal branch restricts the phase of the base to (-π, π], so
    /// results are discontinuous across the negative real axis. Rendered
    /// images show that as a seam along the axis; it is a property of the
    /// branch choice, not a defect in the arithmetic.
    ///
    /// A zero-magnitude base yields NaN components (0 · -inf in the
    /// exponent product is indeterminate); callers treat NaN results as
    /// evaluation failures.
    pub fn pow(&self, exponent: &Complex) -> Complex {
        exponent.mul(&self.ln()).exp()
    }

    /// True when either component is NaN.
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }
}

impl fmt::Display for Complex {
    /// Formats as `(re, im)`, honoring any requested precision.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(places) => write!(f, "({:.p$}, {:.p$})", self.re, self.im, p = places),
            None => write!(f, "({}, {})", self.re, self.im),
        }
    }
}
