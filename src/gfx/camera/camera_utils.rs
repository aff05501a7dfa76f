use cgmath::{Matrix4, SquareMatrix};
use winit::{
    event::{DeviceEvent, KeyEvent},
    window::Window,
};

use super::{camera_controller::CameraController, orbit_camera::OrbitCamera};

/// Owns the scene camera together with the input controller driving it
pub struct CameraManager {
    pub camera: OrbitCamera,
    pub controller: CameraController,
}

impl CameraManager {
    pub fn new(camera: OrbitCamera, controller: CameraController) -> Self {
        Self { camera, controller }
    }

    /// Camera framing the whole desk for a window of the given size
    pub fn for_desk(width: u32, height: u32) -> Self {
        let aspect = width as f32 / height.max(1) as f32;
        Self::new(
            OrbitCamera::desk_view(aspect),
            CameraController::new(0.005, 0.1),
        )
    }

    pub fn process_event(&mut self, event: &DeviceEvent, window: &Window) {
        self.controller
            .process_events(event, window, &mut self.camera);
    }

    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        self.controller
            .process_keyed_events(event, &mut self.camera);
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.resize_projection(width, height);
    }

    /// Recomputes and returns the camera uniform for this frame
    pub fn uniform(&mut self) -> CameraUniform {
        self.camera.update_view_proj();
        self.camera.uniform
    }
}

pub trait Camera: Sized {
    fn build_view_projection_matrix(&self) -> Matrix4<f32>;
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable, Debug)]
pub struct CameraUniform {
    /// The eye position of the camera in homogenous coordinates.
    ///
    /// Homogenous coordinates are used to fullfill the 16 byte alignment requirement.
    pub view_position: [f32; 4],

    /// Contains the view projection matrix.
    pub view_proj: [[f32; 4]; 4],
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self {
            view_position: [0.0; 4],
            view_proj: Matrix4::identity().into(),
        }
    }
}
