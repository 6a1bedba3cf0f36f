use log::warn;
use nalgebra::{Matrix4, Point3, Vector3};

const EPSILON: f32 = 1e-6;

//=================================
// Transform Matrix Factory
//=================================

/// Factory for the primitive transformation matrices.
///
/// Every matrix is assembled entry by entry instead of going through
/// nalgebra's built-in constructors, so the handedness and axis conventions
/// are spelled out in one place. Matrices multiply column vectors and the
/// translation lives in the last column.
pub struct TransformFactory;

#[rustfmt::skip]
impl TransformFactory {
    /// Rotation around the X axis (right-handed), angle in degrees.
    pub fn rotation_x(angle_deg: f32) -> Matrix4<f32> {
        let (s, c) = angle_deg.to_radians().sin_cos();
        Matrix4::new(
            1.0, 0.0, 0.0, 0.0,
            0.0, c,  -s,   0.0,
            0.0, s,   c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Rotation around the Y axis (right-handed), angle in degrees.
    pub fn rotation_y(angle_deg: f32) -> Matrix4<f32> {
        let (s, c) = angle_deg.to_radians().sin_cos();
        Matrix4::new(
            c,   0.0, s,   0.0,
            0.0, 1.0, 0.0, 0.0,
           -s,   0.0, c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Rotation around the Z axis (right-handed), angle in degrees.
    pub fn rotation_z(angle_deg: f32) -> Matrix4<f32> {
        let (s, c) = angle_deg.to_radians().sin_cos();
        Matrix4::new(
            c,  -s,   0.0, 0.0,
            s,   c,   0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Combined rotation `Rz * Ry * Rx`: X is applied first, then Y, then Z.
    /// The order is a fixed convention; swapping it produces a different
    /// orientation.
    pub fn rotation_xyz(angles_deg: &Vector3<f32>) -> Matrix4<f32> {
        Self::rotation_z(angles_deg.z)
            * Self::rotation_y(angles_deg.y)
            * Self::rotation_x(angles_deg.x)
    }

    /// Translation matrix.
    pub fn translation(t: &Vector3<f32>) -> Matrix4<f32> {
        Matrix4::new(
            1.0, 0.0, 0.0, t.x,
            0.0, 1.0, 0.0, t.y,
            0.0, 0.0, 1.0, t.z,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Non-uniform scaling matrix.
    pub fn scaling_nonuniform(scale: &Vector3<f32>) -> Matrix4<f32> {
        Matrix4::new(
            scale.x, 0.0,     0.0,     0.0,
            0.0,     scale.y, 0.0,     0.0,
            0.0,     0.0,     scale.z, 0.0,
            0.0,     0.0,     0.0,     1.0,
        )
    }

    /// Orthographic projection, OpenGL convention.
    ///
    /// Maps x ∈ [left, right] and y ∈ [bottom, top] to [-1, 1]. Depth is
    /// mapped with a sign flip (`-2 / (far - near)` on the z scale term): the
    /// camera looks down -z in view space, so view-space z = -near lands on
    /// NDC -1 and z = -far on +1.
    ///
    /// Degenerate extents (`right == left`, `top == bottom`, `far == near`)
    /// divide by zero and propagate Inf/NaN; callers must guarantee strict
    /// inequalities.
    pub fn orthographic(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    ) -> Matrix4<f32> {
        if right == left || top == bottom || far == near {
            warn!(
                "orthographic: degenerate extents [{left}, {right}]x[{bottom}, {top}] \
                 depth [{near}, {far}], matrix will be non-finite"
            );
        }
        let rl = right - left;
        let tb = top - bottom;
        let fnr = far - near;

        Matrix4::new(
            2.0 / rl, 0.0,      0.0,       -(right + left) / rl,
            0.0,      2.0 / tb, 0.0,       -(top + bottom) / tb,
            0.0,      0.0,     -2.0 / fnr, -(far + near) / fnr,
            0.0,      0.0,      0.0,        1.0,
        )
    }

    /// Left-handed look-at view matrix.
    ///
    /// Basis: forward `e = normalize(target - eye)`, right
    /// `v = normalize(up × e)`, recomputed up `u = e × v`. The rows of the
    /// matrix are the basis vectors with the sign of the forward row's z
    /// component flipped; together with the negated point z in
    /// [`crate::core::pipeline::point_to_clip_space`] this yields a
    /// left-handed view space for cameras aligned with the world z axis
    /// (where it coincides with negating the whole forward row).
    ///
    /// `up` parallel to the view direction leaves the right axis with zero
    /// length; normalizing it produces NaN. Callers must rule that out.
    pub fn look_at_lh(eye: &Point3<f32>, target: &Point3<f32>, up: &Vector3<f32>) -> Matrix4<f32> {
        let e = (target - eye).normalize();
        let right = up.cross(&e);
        if right.norm_squared() < EPSILON {
            warn!("look_at_lh: up is parallel to the view direction, basis is degenerate");
        }
        let v = right.normalize();
        let u = e.cross(&v);

        Matrix4::new(
            v.x, v.y, v.z,  -eye.coords.dot(&v),
            u.x, u.y, u.z,  -eye.coords.dot(&u),
            e.x, e.y, -e.z,  eye.coords.dot(&e),
            0.0, 0.0, 0.0,   1.0,
        )
    }
}
