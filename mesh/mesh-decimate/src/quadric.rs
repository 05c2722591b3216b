//! Quadric error metric.
//!
//! A quadric stores the sum of squared distances from a point to a set of
//! planes as `vᵀAv + 2bᵀv + c`.

use std::ops::{Add, AddAssign};

use nalgebra::{Matrix3, Point3, Vector3};

/// Below this determinant the quadric is treated as singular.
const SINGULAR_EPSILON: f64 = 1e-10;

/// Quadric error matrix for a vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadric {
    a: Matrix3<f64>,
    b: Vector3<f64>,
    c: f64,
}

impl Default for Quadric {
    fn default() -> Self {
        Self {
            a: Matrix3::zeros(),
            b: Vector3::zeros(),
            c: 0.0,
        }
    }
}

impl Quadric {
    /// Quadric of the plane `n·p + d = 0`; `n` must be unit length.
    #[must_use]
    pub fn from_plane(normal: Vector3<f64>, d: f64) -> Self {
        Self {
            a: normal * normal.transpose(),
            b: normal * d,
            c: d * d,
        }
    }

    /// Quadric of the plane through a triangle, `None` if it is degenerate.
    #[must_use]
    pub fn from_triangle(p0: &Point3<f64>, p1: &Point3<f64>, p2: &Point3<f64>) -> Option<Self> {
        let normal = (p1 - p0).cross(&(p2 - p0)).try_normalize(SINGULAR_EPSILON)?;
        Some(Self::from_plane(normal, -normal.dot(&p0.coords)))
    }

    /// Sum of squared plane distances at `p`.
    #[must_use]
    pub fn evaluate(&self, p: &Point3<f64>) -> f64 {
        let v = p.coords;
        v.dot(&(self.a * v)) + 2.0 * self.b.dot(&v) + self.c
    }

    /// Point minimizing the error, or `None` if the system is singular.
    #[must_use]
    pub fn optimal_point(&self) -> Option<Point3<f64>> {
        if self.a.determinant().abs() < SINGULAR_EPSILON {
            return None;
        }
        self.a
            .try_inverse()
            .map(|inv| Point3::from(-(inv * self.b)))
    }
}

impl Add for Quadric {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            a: self.a + other.a,
            b: self.b + other.b,
            c: self.c + other.c,
        }
    }
}

impl AddAssign for Quadric {
    fn add_assign(&mut self, other: Self) {
        self.a += other.a;
        self.b += other.b;
        self.c += other.c;
    }
}
