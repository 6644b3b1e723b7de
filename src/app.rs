use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::camera::Camera;
use crate::clock::Clock;
use crate::config::FlycamConfig;
use crate::flycam::FlyCam;
use crate::input::WinitController;
use crate::renderer::Renderer;
use crate::transform::Transform;
use crate::xr::XrRig;

const FPS_UPDATE_INTERVAL: f32 = 1.0;
const INITIAL_WINDOW_WIDTH: u32 = 800;
const INITIAL_WINDOW_HEIGHT: u32 = 600;

/// Demo application: a window whose camera is driven by the fly-camera.
pub struct App {
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    camera: Camera,
    flycam: FlyCam,
    xr_rig: Option<XrRig>,
    input: WinitController,
    clock: Clock,
    frame_count: u32,
    fps_timer: f32,
}

impl App {
    pub fn new(config: FlycamConfig, use_xr_rig: bool) -> Self {
        let mut camera = Camera::new(INITIAL_WINDOW_WIDTH, INITIAL_WINDOW_HEIGHT);
        let xr_rig = if use_xr_rig {
            log::info!("XR rig mode: driving a parent transform, camera-local pose left to the device");
            Some(XrRig::attach(&mut camera.transform))
        } else {
            None
        };

        Self {
            window: None,
            renderer: None,
            camera,
            flycam: FlyCam::from_config(&config),
            xr_rig,
            input: WinitController::new(),
            clock: Clock::new(),
            frame_count: 0,
            fps_timer: 0.0,
        }
    }

    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let dt = self.clock.tick();

        // Under XR the fly-camera drives the rig, not the camera itself.
        match &mut self.xr_rig {
            Some(rig) => self.flycam.update(&mut rig.rig, &self.input, dt),
            None => self
                .flycam
                .update(&mut self.camera.transform, &self.input, dt),
        }
        self.input.end_frame();

        let world = match &self.xr_rig {
            Some(rig) => rig.world(),
            None => self.camera.transform,
        };

        self.update_fps(dt, &world);

        let uniform = self.camera.uniform_for(&world);
        if let Some(renderer) = &mut self.renderer {
            match renderer.render(&uniform) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    if let Some(window) = &self.window {
                        let size = window.inner_size();
                        renderer.resize(size.width, size.height);
                    }
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("out of GPU memory, exiting");
                    event_loop.exit();
                }
                Err(e) => log::warn!("surface error: {e:?}"),
            }
        }
    }

    fn update_fps(&mut self, dt: f32, pose: &Transform) {
        self.frame_count += 1;
        self.fps_timer += dt;

        if self.fps_timer >= FPS_UPDATE_INTERVAL {
            let fps = self.frame_count as f32 / self.fps_timer;
            log::debug!(
                "{fps:.1} fps, camera at {:.1?} yaw {:.2} pitch {:.2}",
                pose.position,
                pose.yaw,
                pose.pitch
            );
            self.frame_count = 0;
            self.fps_timer = 0.0;
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title("flycam")
                .with_inner_size(winit::dpi::LogicalSize::new(
                    INITIAL_WINDOW_WIDTH,
                    INITIAL_WINDOW_HEIGHT,
                )),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        match pollster::block_on(Renderer::new(window.clone())) {
            Ok(renderer) => {
                let size = window.inner_size();
                self.camera.set_aspect(size.width, size.height);
                self.renderer = Some(renderer);
            }
            Err(e) => {
                // No camera output to control; disable the controller and
                // keep the window alive so the failure is inspectable.
                log::error!("renderer unavailable, controller disabled: {e:#}");
                self.flycam.enabled = false;
            }
        }

        self.clock.reset();
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => {
                self.camera.set_aspect(size.width, size.height);
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => self.frame(event_loop),
            other => self.input.process_event(&other),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
