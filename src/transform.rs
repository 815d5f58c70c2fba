use nalgebra::{Matrix3, Vector3};

use crate::vector::Vector2D;

/// An opaque affine transformation of the plane.
///
/// Building specific maps, composing them, and inverting them belong to the
/// transform engine of the consuming system; this type only carries a
/// finished map and applies it. The map acts on displacements from the
/// origin, so applying it to a point's coordinate vector transforms the
/// point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D {
    matrix: Matrix3<f64>,
}

impl Transform2D {
    /// Wraps a homogeneous 3x3 matrix produced by the transform engine.
    ///
    /// The matrix is expected to be affine (last row `0 0 1`); no
    /// perspective division is performed on application.
    #[must_use]
    pub const fn from_matrix(matrix: Matrix3<f64>) -> Self {
        Self { matrix }
    }

    /// The identity map.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            matrix: Matrix3::identity(),
        }
    }

    /// The homogeneous matrix carried by this transformation.
    #[must_use]
    pub fn matrix(&self) -> &Matrix3<f64> {
        &self.matrix
    }

    /// Applies the affine map to a displacement from the origin.
    #[must_use]
    pub fn apply(&self, v: Vector2D<f64>) -> Vector2D<f64> {
        let (x, y) = v.to_pair();
        let h = self.matrix * Vector3::new(x, y, 1.0);
        Vector2D::new(h.x, h.y)
    }
}

impl From<Matrix3<f64>> for Transform2D {
    fn from(matrix: Matrix3<f64>) -> Self {
        Self::from_matrix(matrix)
    }
}
