//! Forward transform chain: model space → world → view → clip → NDC.

use crate::scene::camera::CameraParams;
use nalgebra::{Matrix4, Point3, Vector3, Vector4};

/// `projection * view * model`.
///
/// Matrix multiplication is not commutative: the projection stays leftmost
/// and the model rightmost, so a column vector passes through model, view and
/// projection in that order.
pub fn model_view_projection(model: &Matrix4<f32>, camera: &CameraParams) -> Matrix4<f32> {
    camera.projection_matrix() * camera.view_matrix() * model
}

/// Transforms a model-space point into homogeneous clip space.
///
/// The point's z component is negated before the multiply. This is the other
/// half of the left-handed convention in
/// [`TransformFactory::look_at_lh`](crate::TransformFactory::look_at_lh);
/// dropping either half breaks the round trip through view space.
pub fn point_to_clip_space(
    model: &Matrix4<f32>,
    camera: &CameraParams,
    point: &Point3<f32>,
) -> Vector4<f32> {
    model_view_projection(model, camera) * Vector4::new(point.x, point.y, -point.z, 1.0)
}

/// Clip-space position of the model-space origin (a sprite's center).
pub fn to_clip_space(model: &Matrix4<f32>, camera: &CameraParams) -> Vector4<f32> {
    point_to_clip_space(model, camera, &Point3::origin())
}

/// NDC position of the model-space origin: the homogeneous divide applied to
/// [`to_clip_space`].
///
/// `w == 0` (a degenerate camera) divides through to Inf/NaN; callers that
/// cannot rule that out should check the result with `is_finite`.
pub fn to_ndc(model: &Matrix4<f32>, camera: &CameraParams) -> Vector3<f32> {
    let clip = to_clip_space(model, camera);
    Vector3::new(clip.x, clip.y, clip.z) / clip.w
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::transform::TransformFactory;
    use approx::assert_relative_eq;

    fn test_camera() -> CameraParams {
        CameraParams {
            ortho_half_height: 5.0,
            aspect: 1.7777,
            near: 0.3,
            far: 1000.0,
            eye: Point3::new(0.0, 0.0, -10.0),
            forward: Vector3::new(0.0, 0.0, 1.0),
            up: Vector3::new(0.0, 1.0, 0.0),
        }
    }

    #[test]
    fn world_origin_projects_to_ndc_center() {
        let ndc = to_ndc(&Matrix4::identity(), &test_camera());
        assert_relative_eq!(ndc.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(ndc.y, 0.0, epsilon = 1e-5);
        assert!(ndc.z.is_finite());
    }

    #[test]
    fn orthographic_clip_w_is_one() {
        let clip = to_clip_space(&Matrix4::identity(), &test_camera());
        assert_relative_eq!(clip.w, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn translated_model_lands_off_center() {
        let camera = test_camera();
        let model = TransformFactory::translation(&Vector3::new(1.0, 2.0, 0.0));
        let ndc = to_ndc(&model, &camera);

        // right = 5 * aspect, top = 5.
        assert_relative_eq!(ndc.x, 1.0 / (5.0 * camera.aspect), epsilon = 1e-5);
        assert_relative_eq!(ndc.y, 2.0 / 5.0, epsilon = 1e-5);
    }

    #[test]
    fn mvp_agrees_with_view_projection() {
        let camera = test_camera();
        let model = TransformFactory::translation(&Vector3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(
            model_view_projection(&model, &camera),
            camera.view_projection() * model,
            epsilon = 1e-6
        );
    }
}
