use std::ops::{Add, Mul, Neg, Sub};

/// A 2D displacement.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector {
    /// Horizontal component.
    pub dx: f64,
    /// Vertical component.
    pub dy: f64,
}

impl Vector {
    /// The zero displacement.
    pub const ZERO: Vector = Vector::new(0.0, 0.0);

    /// Creates a vector from its components.
    #[must_use]
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, other: Vector) -> Vector {
        Vector::new(self.dx + other.dx, self.dy + other.dy)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, other: Vector) -> Vector {
        Vector::new(self.dx - other.dx, self.dy - other.dy)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::new(-self.dx, -self.dy)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, factor: f64) -> Vector {
        Vector::new(self.dx * factor, self.dy * factor)
    }
}

impl From<Vector> for nalgebra::Vector2<f64> {
    fn from(v: Vector) -> Self {
        nalgebra::Vector2::new(v.dx, v.dy)
    }
}

impl From<nalgebra::Vector2<f64>> for Vector {
    fn from(v: nalgebra::Vector2<f64>) -> Self {
        Vector::new(v.x, v.y)
    }
}
