//! Mouse and keyboard control of the desk camera
//!
//! winit events are first reduced to a [`CameraInput`], then
//! [`CameraController::apply`] moves the camera according to the current
//! [`DragMode`]. Only `apply` touches the camera, so every move can be
//! exercised without a window.

use winit::{
    event::{DeviceEvent, ElementState, KeyEvent, MouseScrollDelta},
    keyboard::{KeyCode, PhysicalKey},
    window::Window,
};

use super::orbit_camera::OrbitCamera;

/// Touchpad pixels that count as one wheel line
const PIXELS_PER_LINE: f32 = 20.0;
/// Radians turned per arrow key press
const KEY_ORBIT_STEP: f32 = 0.05;
const LEFT_BUTTON: u32 = 0;

/// What a mouse drag does right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMode {
    Idle,
    /// Turn around the focus point
    Orbit,
    /// Slide the focus point across the view plane
    Pan,
}

impl DragMode {
    pub fn from_state(left_held: bool, shift_held: bool) -> Self {
        match (left_held, shift_held) {
            (false, _) => Self::Idle,
            (true, false) => Self::Orbit,
            (true, true) => Self::Pan,
        }
    }
}

/// One camera move decoded from an input event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraInput {
    /// Mouse motion in pixels
    Drag(f32, f32),
    /// Wheel lines, positive when scrolling up
    Scroll(f32),
    /// Keyboard orbit, in key steps of yaw and pitch
    Step(f32, f32),
    /// Back to the starting view of the desk
    ResetView,
}

/// Wheel delta in lines, whatever the device reports
pub fn scroll_lines(delta: &MouseScrollDelta) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, lines) => *lines,
        MouseScrollDelta::PixelDelta(position) => position.y as f32 / PIXELS_PER_LINE,
    }
}

pub struct CameraController {
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub pan_speed: f32,
    left_held: bool,
    shift_held: bool,
}

impl CameraController {
    pub fn new(rotate_speed: f32, zoom_speed: f32) -> Self {
        Self {
            rotate_speed,
            zoom_speed,
            pan_speed: 0.01,
            left_held: false,
            shift_held: false,
        }
    }

    pub fn drag_mode(&self) -> DragMode {
        DragMode::from_state(self.left_held, self.shift_held)
    }

    /// Camera move bound to a pressed key
    pub fn key_input(&self, code: KeyCode) -> Option<CameraInput> {
        match code {
            KeyCode::Home => Some(CameraInput::ResetView),
            KeyCode::KeyC if self.shift_held => Some(CameraInput::ResetView),
            KeyCode::ArrowLeft => Some(CameraInput::Step(1.0, 0.0)),
            KeyCode::ArrowRight => Some(CameraInput::Step(-1.0, 0.0)),
            KeyCode::ArrowUp => Some(CameraInput::Step(0.0, 1.0)),
            KeyCode::ArrowDown => Some(CameraInput::Step(0.0, -1.0)),
            _ => None,
        }
    }

    /// Moves the camera, returning whether the view changed
    pub fn apply(&self, input: CameraInput, camera: &mut OrbitCamera) -> bool {
        match input {
            CameraInput::Drag(dx, dy) => match self.drag_mode() {
                DragMode::Idle => false,
                DragMode::Orbit => {
                    camera.add_yaw(-dx * self.rotate_speed);
                    camera.add_pitch(dy * self.rotate_speed);
                    true
                }
                DragMode::Pan => {
                    camera.pan((-dx * self.pan_speed, dy * self.pan_speed));
                    true
                }
            },
            CameraInput::Scroll(lines) => {
                camera.add_distance(-lines * self.zoom_speed * 10.0);
                true
            }
            CameraInput::Step(yaw, pitch) => {
                camera.add_yaw(yaw * KEY_ORBIT_STEP);
                camera.add_pitch(pitch * KEY_ORBIT_STEP);
                true
            }
            CameraInput::ResetView => {
                log::info!("Resetting camera to the desk view");
                camera.reset_to_default();
                true
            }
        }
    }

    pub fn process_events(
        &mut self,
        event: &DeviceEvent,
        window: &Window,
        camera: &mut OrbitCamera,
    ) {
        let input = match event {
            DeviceEvent::Button {
                button: LEFT_BUTTON,
                state,
            } => {
                self.left_held = *state == ElementState::Pressed;
                return;
            }
            DeviceEvent::MouseWheel { delta, .. } => CameraInput::Scroll(scroll_lines(delta)),
            DeviceEvent::MouseMotion { delta } => {
                CameraInput::Drag(delta.0 as f32, delta.1 as f32)
            }
            _ => return,
        };
        if self.apply(input, camera) {
            window.request_redraw();
        }
    }

    pub fn process_keyed_events(&mut self, event: &KeyEvent, camera: &mut OrbitCamera) {
        let PhysicalKey::Code(code) = event.physical_key else {
            return;
        };
        let pressed = event.state == ElementState::Pressed;
        if matches!(code, KeyCode::ShiftLeft | KeyCode::ShiftRight) {
            self.shift_held = pressed;
            return;
        }
        if let Some(input) = self.key_input(code).filter(|_| pressed) {
            self.apply(input, camera);
        }
    }
}
