//! Application observer: renders a simulation as wireframes and steps it on
//! a fixed timestep.

use glam::Vec2;

use crate::config::ViewerConfig;
use crate::core::wireframe::{draw_body, draw_joint};
use crate::core::{
    Clock, DrawFrameInfo, EventObserver, Key, MouseButton, Renderer, TickScheduler, TimeSource,
    WindowDimensions,
};
use crate::math::Color;
use crate::traits::Simulation;

const ZOOM_STEP: f32 = 1.25;

/// Viewer settings taken from [`ViewerConfig`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewSettings {
    pub dimensions: WindowDimensions,
    pub scale: Vec2,
    pub offset: Vec2,
    pub background: Color,
    pub foreground: Color,
}

impl From<&ViewerConfig> for ViewSettings {
    fn from(config: &ViewerConfig) -> Self {
        Self {
            dimensions: config.dimensions(),
            scale: config.scale(),
            offset: config.offset(),
            background: Color(config.background),
            foreground: Color(config.foreground),
        }
    }
}

/// Screen-space drag in progress
#[derive(Debug, Clone, Copy)]
struct Drag {
    last: (i32, i32),
}

/// Owns the renderer, the tick scheduler and the simulation it displays
pub struct SimulationViewer<S: Simulation, C: TimeSource = Clock> {
    settings: ViewSettings,
    renderer: Option<Renderer>,
    scheduler: TickScheduler<C>,
    world: S,
    paused: bool,
    drag: Option<Drag>,
    frames: u64,
    ticks: u64,
}

impl<S: Simulation> SimulationViewer<S> {
    /// Viewer on the wall clock with the configured tick rate
    pub fn new(world: S, config: &ViewerConfig) -> Self {
        let scheduler = TickScheduler::new(Clock::new(), config.quantum(), config.catch_up_quanta());
        Self::with_scheduler(world, ViewSettings::from(config), scheduler)
    }
}

impl<S: Simulation, C: TimeSource> SimulationViewer<S, C> {
    pub fn with_scheduler(world: S, settings: ViewSettings, scheduler: TickScheduler<C>) -> Self {
        Self {
            settings,
            renderer: None,
            scheduler,
            world,
            paused: false,
            drag: None,
            frames: 0,
            ticks: 0,
        }
    }

    /// `None` before `on_start` or if the framebuffer could not be allocated
    pub fn renderer(&self) -> Option<&Renderer> {
        self.renderer.as_ref()
    }

    pub fn world(&self) -> &S {
        &self.world
    }

    pub fn scheduler(&self) -> &TickScheduler<C> {
        &self.scheduler
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames
    }

    /// Simulation steps taken so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    fn render_world(&mut self) -> bool {
        let Some(renderer) = self.renderer.as_mut() else {
            return false;
        };

        renderer.clear(self.settings.background);
        for body in self.world.bodies() {
            draw_body(renderer, &body, self.settings.foreground);
        }
        for joint in self.world.joints() {
            draw_joint(renderer, &joint, self.settings.foreground);
        }
        true
    }

    fn zoom(&mut self, factor: f32) {
        if let Some(renderer) = self.renderer.as_mut() {
            let scale = renderer.transform().scale * factor;
            renderer.set_scale(scale.x, scale.y);
            log::debug!("Zoom: scale {:?}", scale);
        }
    }
}

impl<S: Simulation, C: TimeSource> EventObserver for SimulationViewer<S, C> {
    fn on_start(&mut self) {
        let ViewSettings { dimensions, scale, offset, .. } = self.settings;
        self.renderer = match Renderer::init(dimensions, scale, offset) {
            Ok(renderer) => Some(renderer),
            Err(e) => {
                log::error!("Renderer initialization failed: {}", e);
                None
            }
        };
        self.scheduler.start();
    }

    fn on_draw_frame(&mut self) -> Option<DrawFrameInfo<'_>> {
        if !self.render_world() {
            return None;
        }

        for dt in self.scheduler.advance() {
            self.on_timer(dt);
        }

        self.frames += 1;
        self.renderer.as_ref().map(Renderer::frame_info)
    }

    fn on_timer(&mut self, delta: f32) {
        if self.paused {
            return;
        }
        self.world.step(delta);
        self.ticks += 1;
    }

    fn on_key_down(&mut self, key: Key) {
        match key {
            Key::P => {
                self.paused = !self.paused;
                log::info!("Simulation {}", if self.paused { "paused" } else { "resumed" });
            }
            Key::Up => self.zoom(ZOOM_STEP),
            Key::Down => self.zoom(1.0 / ZOOM_STEP),
            _ => {}
        }
    }

    fn on_mouse_down(&mut self, button: MouseButton, x: i32, y: i32) {
        if button != MouseButton::Left {
            return;
        }
        if let Some(renderer) = self.renderer.as_ref() {
            let world = renderer.screen_to_world(Vec2::new(x as f32, y as f32));
            log::debug!("Click at screen ({}, {}) -> world {:?}", x, y, world);
        }
        self.drag = Some(Drag { last: (x, y) });
    }

    fn on_mouse_move(&mut self, x: i32, y: i32) {
        let (Some(drag), Some(renderer)) = (self.drag.as_mut(), self.renderer.as_mut()) else {
            return;
        };

        let offset = renderer.transform().offset
            + Vec2::new((x - drag.last.0) as f32, (y - drag.last.1) as f32);
        renderer.set_offsets(offset.x, offset.y);
        drag.last = (x, y);
    }

    fn on_mouse_up(&mut self, button: MouseButton, _x: i32, _y: i32) {
        if button == MouseButton::Left {
            self.drag = None;
        }
    }
}
