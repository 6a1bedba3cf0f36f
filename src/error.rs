use thiserror::Error;

/// Failures surfaced by the screen-space conversions.
///
/// Purely numeric degeneracies (zero orthographic extents, a forward vector
/// parallel to up, `w == 0` in the homogeneous divide) are intentionally not
/// represented here: those propagate NaN/Inf through the matrices and callers
/// detect them with `is_finite`. The variants below cover the cases where a
/// silently non-finite result would be actively misleading.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum TransformError {
    /// `projection * view` has no usable inverse, so screen points cannot be
    /// mapped back to world space.
    #[error("projection * view is singular and cannot be inverted")]
    SingularViewProjection,

    /// A screen dimension is zero; dividing a pixel coordinate by it is
    /// undefined.
    #[error("screen size {width}x{height} has a zero extent")]
    ZeroScreenExtent { width: f32, height: f32 },

    /// Camera parameters violate an invariant checked by
    /// [`crate::CameraParams::validate`].
    #[error("degenerate camera parameters: {0}")]
    DegenerateCamera(&'static str),
}

pub type TransformResult<T> = Result<T, TransformError>;
