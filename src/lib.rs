use nalgebra::{Point3, Vector3, Vector4};

pub type P3 = Point3<f64>;
pub type V3 = Vector3<f64>;
pub type V4 = Vector4<f64>;

pub mod cli;
pub mod color;
pub mod projectile;
pub mod tuple;

pub use color::{Color, COLOR_EPSILON};
pub use tuple::{Tuple, TUPLE_EPSILON};
