//! 4x4 matrix operations for building model-view-projection transforms.
//!
//! This crate provides the small set of matrix operations a renderer needs
//! to place a camera and objects in a 3D scene: identity construction,
//! matrix multiplication, perspective-frustum projection, look-at view
//! construction, and translate/scale/rotate composition. All types are
//! designed to be compatible with GPU memory layouts, so a finished matrix
//! can be uploaded directly as a shader uniform.
//!
//! # Module Organization
//!
//! - [`mat`] module contains [`Mat4`] and all matrix operations
//! - [`vec`] module contains [`Vec3`] and its vector operations
//! - [`error`] module contains [`MatrixError`] for the checked constructors
//! - Angle conversion helpers are provided at root level
//!
//! # Storage Convention
//!
//! A [`Mat4`] is 16 contiguous `f32` values. The constructors write the
//! same flat layout the OpenGL fixed-function helpers use: the main
//! diagonal sits at indices 0, 5, 10, 15 and the translation terms at
//! indices 12..15. [`Mat4::multiply`] composes left-operand-applied-second,
//! so the model-view-projection product is built as
//! `projection * view * model`. When binding the buffer to a shader
//! uniform, verify the consuming API's transpose expectations rather than
//! assuming them.
//!
//! # Example
//!
//! ```
//! use clipspace::{Mat4, Vec3};
//!
//! let projection = Mat4::frustum(-1.0, 1.0, -1.0, 1.0, 1.0, 10.0);
//! let view = Mat4::look_at(
//!     Vec3::new(0.0, 0.0, 5.0),
//!     Vec3::new(0.0, 0.0, 0.0),
//!     Vec3::new(0.0, 1.0, 0.0),
//! );
//!
//! let mut model = Mat4::identity();
//! model.translate(0.5, 0.0, 0.0);
//! model.rotate(45.0, 0.0, 1.0, 0.0);
//!
//! let mvp = projection.multiply(&view).multiply(&model);
//! let uniform: &[f32; 16] = mvp.as_slice(); // ready for upload
//! assert_eq!(uniform.len(), 16);
//! ```

pub mod error;
pub mod mat;
pub mod vec;

pub use error::MatrixError;
pub use mat::Mat4;
pub use vec::Vec3;

/// Converts degrees to radians.
///
/// # Arguments
///
/// * `degrees` - The angle in degrees (can be any finite value)
///
/// # Example
/// ```
/// use clipspace::deg_to_rad;
///
/// assert!((deg_to_rad(180.0) - std::f32::consts::PI).abs() < 1e-6);
/// ```
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees * (std::f32::consts::PI / 180.0)
}

/// Converts radians to degrees.
///
/// # Arguments
///
/// * `radians` - The angle in radians (can be any finite value)
///
/// # Example
/// ```
/// use clipspace::rad_to_deg;
///
/// assert!((rad_to_deg(std::f32::consts::PI) - 180.0).abs() < 1e-4);
/// ```
pub fn rad_to_deg(radians: f32) -> f32 {
    radians * (180.0 / std::f32::consts::PI)
}
