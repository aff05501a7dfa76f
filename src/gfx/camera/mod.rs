//! Orbit camera used to look around the desk scene
//!
//! Left drag orbits around the focus point, shift + left drag pans it and the
//! mouse wheel zooms. Arrow keys step the orbit, Home or Shift + C restores
//! the starting view.

pub mod camera_controller;
pub mod camera_utils;
pub mod orbit_camera;

// Re-export main types
pub use camera_controller::CameraController;
pub use camera_utils::{CameraManager, CameraUniform};
pub use orbit_camera::OrbitCamera;
