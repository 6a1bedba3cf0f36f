use crate::core::math::transform::TransformFactory;
use crate::error::{TransformError, TransformResult};
use nalgebra::{Matrix4, Point3, Vector3};

/// Immutable snapshot of an orthographic camera.
///
/// There is no hidden "main camera": every projection call takes one of these
/// explicitly, and every matrix is recomputed from it on demand. Copy the
/// struct, change a field, and the next call sees the new parameters.
#[derive(Debug, Clone, Copy)]
pub struct CameraParams {
    /// Half of the vertical extent of the view volume, in world units.
    pub ortho_half_height: f32,
    /// Width over height of the view volume.
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub eye: Point3<f32>,
    pub forward: Vector3<f32>,
    pub up: Vector3<f32>,
}

impl CameraParams {
    /// Checks `far > near > 0`, `aspect > 0`, `ortho_half_height > 0` and
    /// that `forward` is not parallel to `up`.
    ///
    /// The matrix constructors themselves stay total and propagate NaN/Inf on
    /// bad input; call this at the boundary where parameters come in.
    pub fn validate(&self) -> TransformResult<()> {
        if self.near <= 0.0 || self.near.is_nan() {
            return Err(TransformError::DegenerateCamera("near must be > 0"));
        }
        if self.far <= self.near || self.far.is_nan() {
            return Err(TransformError::DegenerateCamera("far must be > near"));
        }
        if self.aspect <= 0.0 || self.aspect.is_nan() {
            return Err(TransformError::DegenerateCamera("aspect must be > 0"));
        }
        if self.ortho_half_height <= 0.0 || self.ortho_half_height.is_nan() {
            return Err(TransformError::DegenerateCamera(
                "ortho_half_height must be > 0",
            ));
        }
        if self.forward.cross(&self.up).norm_squared() < 1e-12 {
            return Err(TransformError::DegenerateCamera(
                "forward must not be parallel to up",
            ));
        }
        Ok(())
    }

    /// Orthographic projection matrix for this camera. The view volume is
    /// derived from the half height and aspect: `top = ortho_half_height`,
    /// `right = top * aspect`, both mirrored for the negative side.
    pub fn projection_matrix(&self) -> Matrix4<f32> {
        let top = self.ortho_half_height;
        let bottom = -top;
        let right = top * self.aspect;
        let left = -right;
        TransformFactory::orthographic(left, right, bottom, top, self.near, self.far)
    }

    /// Left-handed view matrix looking from `eye` along `forward`.
    pub fn view_matrix(&self) -> Matrix4<f32> {
        let target = self.eye + self.forward;
        TransformFactory::look_at_lh(&self.eye, &target, &self.up)
    }

    /// `projection * view`, the world-to-clip transform.
    pub fn view_projection(&self) -> Matrix4<f32> {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Current render target extent in pixels.
#[derive(Debug, Clone, Copy)]
pub struct ScreenSize {
    pub width: f32,
    pub height: f32,
}

impl ScreenSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    pub(crate) fn require_nonzero(&self) -> TransformResult<()> {
        if self.width == 0.0 || self.height == 0.0 {
            return Err(TransformError::ZeroScreenExtent {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}
