//! Window and event loop
//!
//! [`DeskSceneApp`] opens the window, creates the render engine and scene on
//! first resume, then redraws the desk every frame while forwarding mouse and
//! keyboard input to the orbit camera.

use std::sync::Arc;

use anyhow::Context;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{DeviceEvent, DeviceId, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowAttributes, WindowId},
};

use crate::{
    config::SceneConfig,
    gfx::{camera::camera_utils::CameraManager, rendering::GpuScene, RenderEngine},
};

pub struct DeskSceneApp {
    event_loop: EventLoop<()>,
    app_state: AppState,
}

struct AppState {
    config: SceneConfig,
    window: Option<Arc<Window>>,
    render_engine: Option<RenderEngine>,
    scene: Option<GpuScene>,
    camera_manager: CameraManager,
    init_error: Option<anyhow::Error>,
}

impl DeskSceneApp {
    pub fn new(config: SceneConfig) -> anyhow::Result<Self> {
        let event_loop = EventLoop::new().context("failed to create event loop")?;
        let camera_manager = CameraManager::for_desk(config.width, config.height);

        Ok(Self {
            event_loop,
            app_state: AppState {
                config,
                window: None,
                render_engine: None,
                scene: None,
                camera_manager,
                init_error: None,
            },
        })
    }

    /// Runs the event loop until the window closes
    pub fn run(mut self) -> anyhow::Result<()> {
        self.event_loop.set_control_flow(ControlFlow::Poll);
        self.event_loop
            .run_app(&mut self.app_state)
            .context("event loop failed")?;

        match self.app_state.init_error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl AppState {
    fn init(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let window = event_loop
            .create_window(
                WindowAttributes::default()
                    .with_title(self.config.title.as_str())
                    .with_inner_size(PhysicalSize::new(self.config.width, self.config.height)),
            )
            .context("failed to create window")?;
        let window = Arc::new(window);

        let renderer = pollster::block_on(RenderEngine::new(window.clone(), &self.config))?;
        let (width, height) = renderer.surface_size();
        self.camera_manager.resize(width, height);

        let mut scene = renderer.create_scene();
        scene.prepare_scene(&self.config.texture_dir);

        self.window = Some(window);
        self.scene = Some(scene);
        self.render_engine = Some(renderer);
        Ok(())
    }

    fn redraw(&mut self) {
        let (Some(render_engine), Some(scene)) =
            (self.render_engine.as_mut(), self.scene.as_mut())
        else {
            return;
        };

        let camera = self.camera_manager.uniform();
        match render_engine.render_frame(scene, &camera) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let (width, height) = render_engine.surface_size();
                render_engine.resize(width, height);
            }
            Err(wgpu::SurfaceError::Timeout) => log::warn!("Surface timed out, skipping frame"),
            Err(e) => log::error!("Failed to render frame: {}", e),
        }
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.init(event_loop) {
            log::error!("Failed to start: {:#}", e);
            self.init_error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let KeyEvent {
                    physical_key: PhysicalKey::Code(KeyCode::Escape),
                    ..
                } = event
                {
                    event_loop.exit();
                }
                self.camera_manager.process_keyboard_event(&event);
            }
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                self.camera_manager.resize(width, height);
                if let Some(render_engine) = self.render_engine.as_mut() {
                    render_engine.resize(width, height);
                }
            }
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => self.redraw(),
            _ => (),
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        let Some(window) = self.window.as_ref() else {
            return;
        };
        self.camera_manager.process_event(&event, window);
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}
