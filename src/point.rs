use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::error::ParseError;
use crate::transform::Transform2D;
use crate::vector::Vector2D;

/// A location in the 2D Euclidean plane.
///
/// Points form an affine space over [`Vector2D<f64>`]: two points subtract
/// to the displacement between them, and a point translates by a
/// displacement. There is no point addition and no zero point in the
/// algebra; [`Point2D::origin`] is only the reference location used when a
/// transformation is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Point2D {
    coords: Vector2D<f64>,
}

impl Point2D {
    /// Creates a point from its two coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            coords: Vector2D::new(x, y),
        }
    }

    /// The reference location `(0, 0)`.
    #[must_use]
    pub const fn origin() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Returns the x coordinate.
    #[inline]
    #[must_use]
    pub fn x(self) -> f64 {
        self.coords.x()
    }

    /// Returns the y coordinate.
    #[inline]
    #[must_use]
    pub fn y(self) -> f64 {
        self.coords.y()
    }

    /// Destructures the point into its `(x, y)` coordinate pair.
    #[must_use]
    pub fn to_pair(self) -> (f64, f64) {
        self.coords.to_pair()
    }

    /// Reinterprets a displacement from the origin as a location.
    #[must_use]
    pub const fn from_vector(v: Vector2D<f64>) -> Self {
        Self { coords: v }
    }

    /// The displacement of this point from the origin.
    #[must_use]
    pub fn to_vector(self) -> Vector2D<f64> {
        self.coords
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (self - other).length()
    }

    /// Squared Euclidean distance, avoiding the square root.
    #[must_use]
    pub fn distance_squared(self, other: Self) -> f64 {
        (self - other).length_squared()
    }

    /// The point halfway between this point and `other`.
    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        self + (other - self).scale(0.5)
    }

    /// Applies an affine transformation to this point.
    ///
    /// The point is treated as origin plus displacement: the map acts on
    /// the displacement and the result is read back as a location.
    #[must_use]
    pub fn transform(self, t: &Transform2D) -> Self {
        Self::from_vector(t.apply(self.to_vector()))
    }
}

impl Sub for Point2D {
    type Output = Vector2D<f64>;

    /// The displacement from `rhs` to `self`.
    #[inline]
    fn sub(self, rhs: Self) -> Vector2D<f64> {
        self.coords - rhs.coords
    }
}

impl Add<Vector2D<f64>> for Point2D {
    type Output = Self;

    /// Translates the point by a displacement.
    #[inline]
    fn add(self, rhs: Vector2D<f64>) -> Self {
        Self {
            coords: self.coords + rhs,
        }
    }
}

impl Sub<Vector2D<f64>> for Point2D {
    type Output = Self;

    /// Translates the point by the opposite of a displacement.
    #[inline]
    fn sub(self, rhs: Vector2D<f64>) -> Self {
        Self {
            coords: self.coords - rhs,
        }
    }
}

impl From<Point2D> for nalgebra::Point2<f64> {
    fn from(p: Point2D) -> Self {
        nalgebra::Point2::new(p.x(), p.y())
    }
}

impl From<nalgebra::Point2<f64>> for Point2D {
    fn from(p: nalgebra::Point2<f64>) -> Self {
        Self::new(p.x, p.y)
    }
}

/// Renders the point as `P (x & y)`, the vector pair at its embedded
/// (parenthesized) form.
impl fmt::Display for Point2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P {:#}", self.coords)
    }
}

/// Parses the `P (x & y)` form produced by `Display`.
impl FromStr for Point2D {
    type Err = ParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        let rest = trimmed
            .strip_prefix('P')
            .ok_or_else(|| ParseError::MissingPointTag(trimmed.to_string()))?;
        Ok(Self::from_vector(rest.parse()?))
    }
}
