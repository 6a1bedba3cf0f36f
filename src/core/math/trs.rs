use crate::core::math::transform::TransformFactory;
use nalgebra::{Matrix4, Rotation3, Vector3};

/// Position / Euler rotation / scale triple, the unpacked form of an affine
/// transform matrix. This is the shape scene objects are edited in; the
/// matrix form is what the pipeline consumes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformState {
    pub position: Vector3<f32>,
    /// Euler angles in degrees, applied X first, then Y, then Z.
    pub rotation_deg: Vector3<f32>,
    pub scale: Vector3<f32>,
}

impl TransformState {
    pub const IDENTITY: Self = Self {
        position: Vector3::new(0.0, 0.0, 0.0),
        rotation_deg: Vector3::new(0.0, 0.0, 0.0),
        scale: Vector3::new(1.0, 1.0, 1.0),
    };

    pub fn new(position: Vector3<f32>, rotation_deg: Vector3<f32>, scale: Vector3<f32>) -> Self {
        Self {
            position,
            rotation_deg,
            scale,
        }
    }

    /// Builds the transform matrix `T * (Rz * Ry * Rx) * S`: scale first,
    /// then rotate, then translate.
    pub fn compose(&self) -> Matrix4<f32> {
        TransformFactory::translation(&self.position)
            * TransformFactory::rotation_xyz(&self.rotation_deg)
            * TransformFactory::scaling_nonuniform(&self.scale)
    }

    /// Splits a composed matrix back into position, rotation and scale.
    ///
    /// Position is read off the last column, scale from the Euclidean norms
    /// of the 3x3 block's columns, and rotation from the block with the scale
    /// divided out. This is the usual TRS approximation: exact for a rotation
    /// combined with positive scale, wrong in general under shear or negative
    /// scale, so it is not a precise inverse of [`TransformState::compose`].
    pub fn decompose(matrix: &Matrix4<f32>) -> Self {
        let position = Vector3::new(matrix[(0, 3)], matrix[(1, 3)], matrix[(2, 3)]);

        let mut block = matrix.fixed_view::<3, 3>(0, 0).into_owned();
        let scale = Vector3::new(
            block.column(0).norm(),
            block.column(1).norm(),
            block.column(2).norm(),
        );

        for (mut column, s) in block.column_iter_mut().zip(scale.iter()) {
            if *s > 0.0 {
                column /= *s;
            }
        }
        // nalgebra's Euler convention is Rz(yaw) * Ry(pitch) * Rx(roll),
        // the same X-first order compose() uses.
        let (roll, pitch, yaw) = Rotation3::from_matrix_unchecked(block).euler_angles();
        let rotation_deg = Vector3::new(roll.to_degrees(), pitch.to_degrees(), yaw.to_degrees());

        Self {
            position,
            rotation_deg,
            scale,
        }
    }
}

impl Default for TransformState {
    fn default() -> Self {
        Self::IDENTITY
    }
}
