use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

/// Colors are compared more loosely than geometry.
pub const COLOR_EPSILON: f64 = 1e-3;

/// Linear RGB triple. Channels are unbounded; clamping is left to whatever
/// writes pixels out.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Color { r, g, b }
    }
    pub fn all(x: f64) -> Self {
        Self::new(x, x, x)
    }

    pub fn approx_eq(&self, other: &Self) -> bool {
        (self.r - other.r).abs() < COLOR_EPSILON
            && (self.g - other.g).abs() < COLOR_EPSILON
            && (self.b - other.b).abs() < COLOR_EPSILON
    }

    /// Per-channel product, e.g. light intensity times surface reflectance.
    pub fn hadamard(&self, other: &Self) -> Self {
        Color {
            r: self.r * other.r,
            g: self.g * other.g,
            b: self.b * other.b,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Color: (r={:.2}, g={:.2}, b={:.2})", self.r, self.g, self.b)
    }
}

impl From<[f64; 3]> for Color {
    fn from([r, g, b]: [f64; 3]) -> Self {
        Color::new(r, g, b)
    }
}

impl<'a> Add<&'a Self> for Color {
    type Output = Self;
    fn add(self, rhs: &'a Self) -> Self {
        Color {
            r: self.r + rhs.r,
            g: self.g + rhs.g,
            b: self.b + rhs.b,
        }
    }
}

impl Add for Color {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.add(&rhs)
    }
}

impl AddAssign for Color {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs
    }
}

impl<'a> Sub<&'a Self> for Color {
    type Output = Self;
    fn sub(self, rhs: &'a Self) -> Self {
        Color {
            r: self.r - rhs.r,
            g: self.g - rhs.g,
            b: self.b - rhs.b,
        }
    }
}

impl Sub for Color {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self.sub(&rhs)
    }
}

impl Neg for Color {
    type Output = Self;
    fn neg(self) -> Self {
        Color::new(-self.r, -self.g, -self.b)
    }
}

impl<'a> Mul<&'a Self> for Color {
    type Output = Self;
    fn mul(self, rhs: &'a Self) -> Self {
        self.hadamard(rhs)
    }
}

impl Mul for Color {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.mul(&rhs)
    }
}

impl Mul<f64> for Color {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Color {
            r: self.r * rhs,
            g: self.g * rhs,
            b: self.b * rhs,
        }
    }
}

impl Div<f64> for Color {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        Color {
            r: self.r / rhs,
            g: self.g / rhs,
            b: self.b / rhs,
        }
    }
}

#[test]
fn test_construction() {
    let c = Color::new(-0.5, 0.4, 1.7);
    assert_eq!(c.r, -0.5);
    assert_eq!(c.g, 0.4);
    assert_eq!(c.b, 1.7);
    assert_eq!(Color::from([-0.5, 0.4, 1.7]), c);
    assert_eq!(Color::all(0.25), Color::new(0.25, 0.25, 0.25));
    assert_eq!(Color::default(), Color::all(0.0));
}

#[test]
fn test_approx_eq() {
    let c = Color::new(0.5, 0.5, 0.5);
    assert!(c.approx_eq(&Color::new(0.5004, 0.4996, 0.5)));
    assert!(!c.approx_eq(&Color::new(0.502, 0.5, 0.5)));
    assert!(!c.approx_eq(&Color::new(0.5, 0.5, 1.5)));
    assert!(!Color::new(0.5, 0.5, 1.5).approx_eq(&c));
}

#[test]
fn test_arith() {
    let a = Color::new(0.9, 0.6, 0.75);
    let b = Color::new(0.7, 0.1, 0.25);
    assert!((a + b).approx_eq(&Color::new(1.6, 0.7, 1.0)));
    assert!((a + &b).approx_eq(&(a + b)));
    assert!((a - b).approx_eq(&Color::new(0.2, 0.5, 0.5)));
    assert!((Color::new(0.7, 0.2, -0.1) - Color::new(1.0, 0.2, 1.1))
        .approx_eq(&Color::new(-0.3, 0.0, -1.2)));
    assert!((-a).approx_eq(&Color::new(-0.9, -0.6, -0.75)));

    let mut acc = Color::all(0.0);
    acc += a;
    acc += b;
    assert!(acc.approx_eq(&(a + b)));
}

#[test]
fn test_scale() {
    let c = Color::new(0.2, 0.3, 0.4);
    assert!((c * 2.0).approx_eq(&Color::new(0.4, 0.6, 0.8)));
    assert!((Color::new(0.2, 1.0, 0.5) / 2.0).approx_eq(&Color::new(0.1, 0.5, 0.25)));
    assert!(!(c / 0.0).is_finite());
}

#[test]
fn test_hadamard() {
    let a = Color::new(1.0, 0.2, 0.4);
    let b = Color::new(0.9, 1.0, 0.1);
    assert!(a.hadamard(&b).approx_eq(&Color::new(0.9, 0.2, 0.04)));
    assert_eq!(a * b, a.hadamard(&b));
    assert!(Color::new(0.2, 1.0, 0.5)
        .hadamard(&Color::new(1.0, -0.1, 0.5))
        .approx_eq(&Color::new(0.2, -0.1, 0.25)));
}

#[test]
fn test_display() {
    assert_eq!(
        Color::new(1.0, 0.5, -0.126).to_string(),
        "Color: (r=1.00, g=0.50, b=-0.13)"
    );
}
