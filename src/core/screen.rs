//! Conversions between NDC, viewport ([0, 1]²) and pixel coordinates, plus
//! the unprojection from a screen point back to world space.

use crate::core::pipeline;
use crate::error::{TransformError, TransformResult};
use crate::scene::camera::{CameraParams, ScreenSize};
use nalgebra::{Matrix4, Point3, Vector2, Vector3, Vector4};

//=================================
// NDC <-> viewport <-> screen
//=================================

/// Remaps NDC [-1, 1] to viewport [0, 1], per component (z included; for the
/// orthographic depth produced by this crate that remap is valid).
pub fn ndc_to_viewport(ndc: &Vector3<f32>) -> Vector3<f32> {
    Vector3::new(ndc.x * 0.5 + 0.5, ndc.y * 0.5 + 0.5, ndc.z * 0.5 + 0.5)
}

/// Scales viewport x/y up to pixels. The screen origin inherits the viewport
/// origin convention (bottom-left here).
pub fn viewport_to_screen(viewport: &Vector3<f32>, screen: &ScreenSize) -> Vector2<f32> {
    Vector2::new(viewport.x * screen.width, viewport.y * screen.height)
}

/// NDC straight to pixels, through the viewport remap.
pub fn ndc_to_screen(ndc: &Vector3<f32>, screen: &ScreenSize) -> Vector2<f32> {
    viewport_to_screen(&ndc_to_viewport(ndc), screen)
}

/// Pixel coordinates down to viewport [0, 1]. The z component of the input
/// is dropped; [`screen_to_ndc`] carries it through instead.
pub fn screen_to_viewport(
    screen_pos: &Vector3<f32>,
    screen: &ScreenSize,
) -> TransformResult<Vector2<f32>> {
    screen.require_nonzero()?;
    Ok(Vector2::new(
        screen_pos.x / screen.width,
        screen_pos.y / screen.height,
    ))
}

/// Viewport x/y back to NDC [-1, 1]. The z component is passed through from
/// the screen coordinate **unmapped**: the [0, 1] depth remap is deliberately
/// not inverted here, so the caller gets back exactly the depth it fed in.
pub fn viewport_to_ndc(viewport: &Vector2<f32>, screen_z: f32) -> Vector3<f32> {
    Vector3::new(viewport.x / 0.5 - 1.0, viewport.y / 0.5 - 1.0, screen_z)
}

/// Pixels to NDC: [`screen_to_viewport`] then [`viewport_to_ndc`], keeping
/// the input z.
pub fn screen_to_ndc(
    screen_pos: &Vector3<f32>,
    screen: &ScreenSize,
) -> TransformResult<Vector3<f32>> {
    let viewport = screen_to_viewport(screen_pos, screen)?;
    Ok(viewport_to_ndc(&viewport, screen_pos.z))
}

//=================================
// World <-> screen
//=================================

/// Viewport position of the model-space origin.
pub fn world_to_viewport(model: &Matrix4<f32>, camera: &CameraParams) -> Vector3<f32> {
    ndc_to_viewport(&pipeline::to_ndc(model, camera))
}

/// Pixel position of the model-space origin.
pub fn world_to_screen(
    model: &Matrix4<f32>,
    camera: &CameraParams,
    screen: &ScreenSize,
) -> Vector2<f32> {
    viewport_to_screen(&world_to_viewport(model, camera), screen)
}

/// Unprojects a pixel position (with a depth in its z) back to world space.
///
/// The NDC point is built directly from the raw pixel coordinates, then the
/// inverse of `projection * view` is applied. The resulting world z is then
/// overwritten with the camera's z before the homogeneous divide, a depth
/// recovery shortcut that is only meaningful while the camera looks along the
/// world z axis. Known limitation, kept as-is rather than generalized.
///
/// Fails with [`TransformError::SingularViewProjection`] when
/// `projection * view` cannot be inverted, which includes a view-projection
/// with non-finite entries (degenerate near/far or zero extents).
pub fn screen_to_world(
    screen_pos: &Vector3<f32>,
    camera: &CameraParams,
    screen: &ScreenSize,
) -> TransformResult<Point3<f32>> {
    screen.require_nonzero()?;

    let ndc = Vector4::new(
        (screen_pos.x / screen.width) * 2.0 - 1.0,
        (screen_pos.y / screen.height) * 2.0 - 1.0,
        screen_pos.z,
        1.0,
    );

    let inv_view_projection = camera
        .view_projection()
        .try_inverse()
        .filter(|inv| inv.iter().all(|entry| entry.is_finite()))
        .ok_or(TransformError::SingularViewProjection)?;

    let mut world = inv_view_projection * ndc;
    world.z = camera.eye.z; // depth recovery shortcut, see above
    world /= world.w;

    Ok(Point3::new(world.x, world.y, world.z))
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

    fn test_screen() -> ScreenSize {
        ScreenSize::new(1920.0, 1080.0)
    }

    #[test]
    fn ndc_center_maps_to_viewport_center() {
        let viewport = ndc_to_viewport(&Vector3::zeros());
        assert_relative_eq!(viewport, Vector3::new(0.5, 0.5, 0.5), epsilon = 1e-6);
    }

    #[test]
    fn viewport_round_trips_through_ndc() {
        let viewport = Vector2::new(0.25, 0.75);
        let ndc = viewport_to_ndc(&viewport, 0.3);
        let back = ndc_to_viewport(&ndc);
        assert_relative_eq!(back.x, viewport.x, epsilon = 1e-5);
        assert_relative_eq!(back.y, viewport.y, epsilon = 1e-5);
        // z does not round-trip: it was passed through on the way in but
        // remapped on the way back.
        assert_relative_eq!(back.z, 0.3 * 0.5 + 0.5, epsilon = 1e-5);
    }

    #[test]
    fn screen_round_trips_back_to_viewport() {
        let screen = test_screen();
        let ndc = Vector3::new(-0.4, 0.6, 0.1);
        let viewport = ndc_to_viewport(&ndc);
        let pixels = ndc_to_screen(&ndc, &screen);
        let back =
            screen_to_viewport(&Vector3::new(pixels.x, pixels.y, 0.0), &screen).unwrap();
        assert_relative_eq!(back.x, viewport.x, epsilon = 1e-5);
        assert_relative_eq!(back.y, viewport.y, epsilon = 1e-5);
    }

    #[test]
    fn world_origin_hits_screen_center() {
        // Half height 5, aspect 1.7777, camera at (0, 0, -10) looking at
        // the origin, 1920x1080 output.
        let pixels = world_to_screen(&Matrix4::identity(), &test_camera(), &test_screen());
        assert_relative_eq!(pixels.x, 960.0, epsilon = 1e-2);
        assert_relative_eq!(pixels.y, 540.0, epsilon = 1e-2);
    }

    #[test]
    fn zero_screen_extent_is_an_explicit_error() {
        let degenerate = ScreenSize::new(0.0, 1080.0);
        assert_eq!(
            screen_to_viewport(&Vector3::zeros(), &degenerate),
            Err(TransformError::ZeroScreenExtent {
                width: 0.0,
                height: 1080.0
            })
        );
        assert!(screen_to_world(&Vector3::zeros(), &test_camera(), &degenerate).is_err());
    }

    #[test]
    fn screen_to_world_recovers_x_and_y() {
        let camera = test_camera();
        let screen = test_screen();
        let model = TransformFactory::translation(&Vector3::new(3.0, 2.0, 0.0));

        let pixels = world_to_screen(&model, &camera, &screen);
        let world =
            screen_to_world(&Vector3::new(pixels.x, pixels.y, 0.0), &camera, &screen).unwrap();

        assert_relative_eq!(world.x, 3.0, epsilon = 1e-3);
        assert_relative_eq!(world.y, 2.0, epsilon = 1e-3);
        // z is not recovered from depth; the camera's z is substituted.
        assert_relative_eq!(world.z, camera.eye.z, epsilon = 1e-5);
    }

    #[test]
    fn singular_view_projection_is_an_explicit_error() {
        let mut camera = test_camera();
        camera.far = camera.near; // degenerate depth extent
        assert_eq!(
            screen_to_world(&Vector3::new(10.0, 10.0, 0.0), &camera, &test_screen()),
            Err(TransformError::SingularViewProjection)
        );
    }
}
