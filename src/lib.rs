//! From-first-principles orthographic camera math.
//!
//! Projection, view and rotation matrices are assembled entry by entry rather
//! than through an engine's transform API, and points are converted along the
//! full chain world → clip → NDC → viewport → screen and back again
//! (unprojection).
//!
//! Conventions, fixed once and relied on everywhere:
//! - matrices multiply **column vectors** (`M * v`); translation sits in the
//!   last column and entries are addressed `m[(row, col)]`;
//! - axis rotations are right-handed and combine as `Rz * Ry * Rx`
//!   (X applied first);
//! - the view matrix is left-handed ([`TransformFactory::look_at_lh`]) and
//!   pairs with a negated point z in the clip-space transform;
//! - single precision throughout; degenerate numeric input propagates
//!   NaN/Inf except where [`TransformError`] names an explicit failure.
//!
//! Nothing is cached and nothing is global: the camera and screen size are
//! plain immutable structs passed into every call, so each call computes from
//! a consistent snapshot.
//!
//! ```
//! use nalgebra::{Matrix4, Point3, Vector3};
//! use orthocam::core::screen::world_to_screen;
//! use orthocam::{CameraParams, ScreenSize};
//!
//! let camera = CameraParams {
//!     ortho_half_height: 5.0,
//!     aspect: 16.0 / 9.0,
//!     near: 0.3,
//!     far: 1000.0,
//!     eye: Point3::new(0.0, 0.0, -10.0),
//!     forward: Vector3::new(0.0, 0.0, 1.0),
//!     up: Vector3::new(0.0, 1.0, 0.0),
//! };
//! let screen = ScreenSize::new(1920.0, 1080.0);
//!
//! // The world origin lands in the middle of the screen.
//! let px = world_to_screen(&Matrix4::identity(), &camera, &screen);
//! assert!((px.x - 960.0).abs() < 1e-3);
//! assert!((px.y - 540.0).abs() < 1e-3);
//! ```

pub mod core;
pub mod error;
pub mod scene;

pub use crate::core::math::transform::TransformFactory;
pub use crate::core::math::trs::TransformState;
pub use crate::error::{TransformError, TransformResult};
pub use crate::scene::camera::{CameraParams, ScreenSize};
