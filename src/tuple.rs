use crate::*;
use std::fmt;
use std::ops::{Add, AddAssign, Div, Index, Mul, Neg, Sub, SubAssign};

/// Largest per-component difference for two tuples to compare equal.
pub const TUPLE_EPSILON: f64 = 1e-5;

/// Homogeneous 4-tuple. `w == 1.0` marks a point, `w == 0.0` a vector.
///
/// The tag is ordinary data: it takes part in every component-wise
/// operation, so `point - point` yields a vector and `point + vector`
/// yields a point without any extra bookkeeping.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tuple {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Tuple {
    pub fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Tuple { x, y, z, w }
    }

    pub fn point(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z, 1.0)
    }

    pub fn vector(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z, 0.0)
    }

    pub fn is_point(&self) -> bool {
        self.w == 1.0
    }

    pub fn is_vector(&self) -> bool {
        self.w == 0.0
    }

    /// Component-wise comparison within `TUPLE_EPSILON`.
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.approx_eq_eps(other, TUPLE_EPSILON)
    }

    pub fn approx_eq_eps(&self, other: &Self, eps: f64) -> bool {
        (self.x - other.x).abs() < eps
            && (self.y - other.y).abs() < eps
            && (self.z - other.z).abs() < eps
            && (self.w - other.w).abs() < eps
    }

    /// Euclidean norm over all four components.
    pub fn magnitude(&self) -> f64 {
        V4::from(*self).norm()
    }

    /// Scales to unit magnitude. A zero tuple comes back as NaNs.
    pub fn normalize(&self) -> Self {
        *self / self.magnitude()
    }

    /// Checked `normalize`: `None` for zero or non-finite magnitude.
    pub fn try_normalize(&self) -> Option<Self> {
        let m = self.magnitude();
        if m == 0.0 || !m.is_finite() {
            None
        } else {
            Some(*self / m)
        }
    }

    /// Four-component dot product, w included.
    pub fn dot(&self, other: &Self) -> f64 {
        V4::from(*self).dot(&V4::from(*other))
    }

    /// Cross product of the xyz parts. Always a vector: the operands' w
    /// never reaches the result.
    pub fn cross(&self, other: &Self) -> Self {
        self.xyz().cross(&other.xyz()).into()
    }

    pub fn xyz(&self) -> V3 {
        V3::new(self.x, self.y, self.z)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.w.is_finite()
    }
}

impl fmt::Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Tuple: (x={:.2}, y={:.2}, z={:.2}, w={:.2})",
            self.x, self.y, self.z, self.w
        )
    }
}

impl From<[f64; 4]> for Tuple {
    fn from([x, y, z, w]: [f64; 4]) -> Self {
        Tuple::new(x, y, z, w)
    }
}

impl From<(f64, f64, f64, f64)> for Tuple {
    fn from((x, y, z, w): (f64, f64, f64, f64)) -> Self {
        Tuple::new(x, y, z, w)
    }
}

impl From<Tuple> for [f64; 4] {
    fn from(t: Tuple) -> Self {
        [t.x, t.y, t.z, t.w]
    }
}

impl From<V4> for Tuple {
    fn from(v: V4) -> Self {
        Tuple::new(v.x, v.y, v.z, v.w)
    }
}

impl From<Tuple> for V4 {
    fn from(t: Tuple) -> Self {
        V4::new(t.x, t.y, t.z, t.w)
    }
}

impl From<P3> for Tuple {
    fn from(p: P3) -> Self {
        Tuple::point(p.x, p.y, p.z)
    }
}

impl From<V3> for Tuple {
    fn from(v: V3) -> Self {
        Tuple::vector(v.x, v.y, v.z)
    }
}

impl Index<usize> for Tuple {
    type Output = f64;
    fn index(&self, i: usize) -> &f64 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("tuple index out of range: {}", i),
        }
    }
}

impl<'a> Add<&'a Self> for Tuple {
    type Output = Self;
    fn add(self, rhs: &'a Self) -> Self {
        Tuple {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
            w: self.w + rhs.w,
        }
    }
}

impl Add for Tuple {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.add(&rhs)
    }
}

impl AddAssign for Tuple {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs
    }
}

impl<'a> Sub<&'a Self> for Tuple {
    type Output = Self;
    fn sub(self, rhs: &'a Self) -> Self {
        Tuple {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
            w: self.w - rhs.w,
        }
    }
}

impl Sub for Tuple {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self.sub(&rhs)
    }
}

impl SubAssign for Tuple {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs
    }
}

impl Neg for Tuple {
    type Output = Self;
    fn neg(self) -> Self {
        Tuple {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: -self.w,
        }
    }
}

impl Mul<f64> for Tuple {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Tuple {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
            w: self.w * rhs,
        }
    }
}

impl Mul<Tuple> for f64 {
    type Output = Tuple;
    fn mul(self, rhs: Tuple) -> Tuple {
        rhs * self
    }
}

impl Div<f64> for Tuple {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        Tuple {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
            w: self.w / rhs,
        }
    }
}
