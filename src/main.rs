use std::sync::Arc;

use clap::Parser;
use glam::Vec3;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use orbit_scene::auto_rotate::AutoRotate;
use orbit_scene::camera::Camera;
use orbit_scene::cli::Cli;
use orbit_scene::clock::FrameClock;
use orbit_scene::config::SceneConfig;
use orbit_scene::controls::{Interaction, OrbitControls};
use orbit_scene::renderer::Renderer;

// === Constants ===

const INITIAL_WINDOW_WIDTH: u32 = 1280;
const INITIAL_WINDOW_HEIGHT: u32 = 720;
const FPS_UPDATE_INTERVAL: f32 = 1.0;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

// === Application ===

struct App {
    cli: Cli,
    config: SceneConfig,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    camera: Camera,
    controls: OrbitControls,
    auto_rotate: AutoRotate,
    clock: FrameClock,
    frame_count: u32,
    fps: f32,
    fps_update_timer: f32,
}

impl App {
    fn new(cli: Cli, config: SceneConfig) -> Self {
        let mut camera = Camera::new(
            Vec3::from_array(config.camera.position),
            Vec3::from_array(config.camera.target),
            INITIAL_WINDOW_WIDTH as f32 / INITIAL_WINDOW_HEIGHT as f32,
        );
        camera.fovy = config.camera.fovy;
        camera.znear = config.camera.znear;
        camera.zfar = config.camera.zfar;

        let clock = FrameClock::new();
        let mut auto_rotate =
            AutoRotate::new(&camera, clock.now_ms()).with_speed(config.auto_rotate.speed);
        auto_rotate.enabled = config.auto_rotate.enabled && !cli.no_auto_rotate;

        Self {
            cli,
            config,
            window: None,
            renderer: None,
            camera,
            controls: OrbitControls::new(),
            auto_rotate,
            clock,
            frame_count: 0,
            fps: 0.0,
            fps_update_timer: 0.0,
        }
    }

    fn update_fps(&mut self, delta: f32) {
        self.frame_count += 1;
        self.fps_update_timer += delta;

        if self.fps_update_timer >= FPS_UPDATE_INTERVAL {
            self.fps = self.frame_count as f32 / self.fps_update_timer;
            self.frame_count = 0;
            self.fps_update_timer = 0.0;
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let now = self.clock.now_ms();
        let delta = self.clock.tick();
        self.update_fps(delta);

        self.auto_rotate.update(&mut self.camera, now);

        let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) else {
            return;
        };
        match renderer.render(&self.camera, window, self.fps, !self.cli.no_ui) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                renderer.resize(window.inner_size());
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("surface out of memory, exiting");
                event_loop.exit();
            }
            Err(e) => log::warn!("render error: {e}"),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title("Orbit Scene")
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

            let renderer = match pollster::block_on(Renderer::new(window.clone(), &self.config)) {
                Ok(r) => r,
                Err(e) => {
                    log::error!("failed to initialize renderer: {e}");
                    event_loop.exit();
                    return;
                }
            };

            let size = window.inner_size();
            self.camera.set_aspect(size.width, size.height);
            self.window = Some(window);
            self.renderer = Some(renderer);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui handle the event first
        if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
            if renderer.handle_event(window, &event) {
                return;
            }
        }

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
                    renderer.resize(size);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            event => {
                match self.controls.process_event(&mut self.camera, &event) {
                    Some(Interaction::Started) => self.auto_rotate.interaction_started(),
                    Some(Interaction::Ended) => {
                        self.auto_rotate.interaction_ended(self.clock.now_ms());
                    }
                    None => {}
                }
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => SceneConfig::load(path)?,
        None => SceneConfig::default(),
    };
    if let Some(hdr) = &cli.hdr {
        config.environment = Some(hdr.display().to_string());
    }
    if let Some(speed) = cli.speed {
        config.auto_rotate.speed = speed;
    }

    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli, config);

    log::info!("controls: drag to orbit, right-drag to pan, scroll to zoom, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
