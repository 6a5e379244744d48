use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use scene_viewer::cli::Cli;
use scene_viewer::config::ViewerConfig;
use scene_viewer::core::{Clock, FpsCounter, WinitController};
use scene_viewer::geometry;
use scene_viewer::gui;
use scene_viewer::renderer::Renderer;
use scene_viewer::scene::Scene;
use scene_viewer::types::FrameUniform;

// === Constants ===

const FPS_UPDATE_INTERVAL: f32 = 1.0;
const GROUND_HALF_EXTENT: f32 = 10.0;
const GROUND_DIVISIONS: u32 = 40;
const GROUND_HEIGHT: f32 = -0.75;
const GROUND_COLOR: [f32; 4] = [0.55, 0.65, 0.75, 0.8];
const AXIS_LENGTH: f32 = 0.5;

// === Application ===

struct App {
    cli: Cli,
    config: ViewerConfig,
    scene: Scene,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    controller: WinitController,
    clock: Clock,
    fps: FpsCounter,
}

impl App {
    fn new(cli: Cli, config: ViewerConfig, scene: Scene) -> Self {
        Self {
            cli,
            config,
            scene,
            window: None,
            renderer: None,
            controller: WinitController::new(),
            clock: Clock::new(),
            fps: FpsCounter::new(FPS_UPDATE_INTERVAL),
        }
    }

    /// One pass of the render loop: viewport, input, camera matrix, draw.
    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(window), Some(renderer)) = (&self.window, &mut self.renderer) else {
            return;
        };

        let delta = self.clock.tick();
        if let Some(fps) = self.fps.frame(delta) {
            log::debug!("FPS: {:.1}", fps);
        }

        let size = window.inner_size();
        if let Err(e) = self.scene.set_viewport(size.width, size.height) {
            log::debug!("Skipping frame: {}", e);
            return;
        }

        for button in self.controller.take_presses() {
            if let Some(command) = button.camera_command() {
                self.scene.apply(command);
            }
        }

        let time = self.clock.elapsed();
        let placements = self.scene.placements(time);
        let mut vertices = geometry::wave_grid(
            &self.scene,
            time,
            GROUND_HALF_EXTENT,
            GROUND_DIVISIONS,
            GROUND_HEIGHT,
            GROUND_COLOR,
        );
        vertices.extend(geometry::axis_lines(AXIS_LENGTH));
        vertices.extend(geometry::placement_lines(&placements));

        let frame = FrameUniform::new(self.scene.active_camera(), &self.scene);
        let show_ui = !self.cli.no_ui;
        let scene = &mut self.scene;
        let result = renderer.render(window, &frame, &vertices, |ctx| {
            if show_ui {
                gui::parameters_panel(ctx, scene);
            }
        });

        match result {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("Surface lost, reconfiguring");
                let (width, height) = renderer.surface_size();
                renderer.resize(width, height);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of GPU memory, exiting");
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title(self.config.window.title.clone())
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        self.config.window.width,
                        self.config.window.height,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    log::error!("Failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            let renderer = match pollster::block_on(Renderer::new(window.clone())) {
                Ok(r) => r,
                Err(e) => {
                    log::error!("Failed to initialize renderer: {:#}", e);
                    event_loop.exit();
                    return;
                }
            };

            self.window = Some(window);
            self.renderer = Some(renderer);
            self.clock.reset();
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
                return; // egui consumed the event
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
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size.width, size.height);
                }
            }
            WindowEvent::Focused(false) => self.controller.clear(),
            WindowEvent::KeyboardInput { .. } => self.controller.process_event(&event),
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
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
    let config = match &cli.config {
        Some(path) => ViewerConfig::load(path)?,
        None => ViewerConfig::default(),
    };
    let scene = config.build_scene(cli.seed)?;

    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli, config, scene);

    log::info!("Controls: WASD move, R/F up/down, Q/E turn, T/G pitch, Home reset, Escape quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
