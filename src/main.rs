use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use log::{debug, error, info, warn};
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use orchid_garden::animation::{AnimationState, GroundSway};
use orchid_garden::camera::OrbitCamera;
use orchid_garden::cli::Cli;
use orchid_garden::config::GardenConfig;
use orchid_garden::frame::{FpsCounter, SceneClock};
use orchid_garden::garden::Garden;
use orchid_garden::input::PointerState;
use orchid_garden::renderer::GardenRenderer;
use orchid_garden::scene::{SceneGraph, SceneMeshes};
use orchid_garden::ui::{ControlPanel, PanelAction};

const INITIAL_WINDOW_WIDTH: u32 = 1280;
const INITIAL_WINDOW_HEIGHT: u32 = 720;

struct App {
    window: Option<Arc<Window>>,
    renderer: Option<GardenRenderer>,
    meshes: SceneMeshes,
    camera: OrbitCamera,
    pointer: PointerState,
    config: GardenConfig,
    garden: Garden,
    graph: SceneGraph,
    ground_sway: GroundSway,
    clock: SceneClock,
    fps: FpsCounter,
    panel: ControlPanel,
}

impl App {
    fn new(cli: &Cli, config: GardenConfig) -> Self {
        let mut garden = match cli.seed {
            Some(seed) => Garden::with_seed(config.spawn_half_extent, seed),
            None => Garden::new(config.spawn_half_extent),
        };
        garden.apply_config(&config);
        for _ in 0..cli.flowers {
            garden.add_flower(config.flower_params());
        }

        Self {
            window: None,
            renderer: None,
            meshes: SceneMeshes::build(),
            camera: OrbitCamera::default(),
            pointer: PointerState::new(),
            config,
            garden,
            graph: SceneGraph::new(),
            ground_sway: GroundSway::new(config.ground_wind),
            clock: SceneClock::new(),
            fps: FpsCounter::new(),
            panel: ControlPanel::new(!cli.no_ui),
        }
    }

    /// Advance animation and rebuild the draw list
    fn update(&mut self) -> Vec<orchid_garden::DrawItem> {
        let frame = self.clock.tick();
        if let Some(fps) = self.fps.record(frame.delta) {
            debug!("FPS: {:.1}", fps);
        }

        self.camera.update(&self.pointer);
        self.pointer.reset_deltas();

        self.ground_sway.set_wind_intensity(self.config.ground_wind);
        self.ground_sway.tick();
        let state = AnimationState::new(frame.time, self.config.flower_wind);

        self.graph.sync(&self.garden);
        self.graph.animate(&self.garden, &state, &self.ground_sway);
        self.graph.compose(&self.config, &self.garden)
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let items = self.update();

        let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) else {
            return;
        };
        if renderer.is_minimized() {
            return;
        }

        let panel = &mut self.panel;
        let config = &mut self.config;
        let flower_count = self.garden.len();
        let fps = self.fps.fps();
        let mut actions: Vec<PanelAction> = Vec::new();

        let result = renderer.render(window, &self.camera, &items, |ctx| {
            actions = panel.show(ctx, config, flower_count, fps);
        });

        match result {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => renderer.reconfigure(),
            Err(wgpu::SurfaceError::OutOfMemory) => {
                error!("GPU out of memory, closing the garden");
                event_loop.exit();
            }
            Err(wgpu::SurfaceError::Timeout) => warn!("Surface timed out, skipping frame"),
            Err(e) => warn!("Render error: {}", e),
        }

        for action in actions {
            action.apply(&mut self.garden, &self.config);
        }
        self.garden.apply_config(&self.config);
        self.garden.set_half_extent(self.config.spawn_half_extent);
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title("Orchid Garden")
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        INITIAL_WINDOW_WIDTH,
                        INITIAL_WINDOW_HEIGHT,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    error!("Failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            let renderer = match pollster::block_on(GardenRenderer::new(window.clone(), &self.meshes)) {
                Ok(r) => r,
                Err(e) => {
                    error!("Unable to start the garden renderer: {:#}", e);
                    event_loop.exit();
                    return;
                }
            };

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
                self.pointer.captured_by_panel(&event);
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
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            other => self.pointer.process_event(&other),
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
    let config = cli.garden_config()?;

    if cli.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let event_loop = EventLoop::new()?;
    let mut app = App::new(&cli, config);

    info!("Orchid Garden - left drag orbits, right drag pans, scroll zooms, Escape quits");
    event_loop.run_app(&mut app)?;

    Ok(())
}
