use std::sync::Arc;
use std::time::{Duration, Instant};

use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{ElementState, KeyEvent, StartCause, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use super::input_adapter::InputAdapter;
use super::surface::SurfacePresenter;
use crate::core::{EventDispatcher, EventObserver, Lifecycle, WindowDimensions};

/// Window settings for the platform layer
#[derive(Debug, Clone)]
pub struct PlatformConfig {
    pub title: String,
    pub dimensions: WindowDimensions,
    /// Redraw timer period
    pub timer_interval: Duration,
}

/// winit-driven host for an [`EventObserver`].
///
/// Owns the window, the presenter and the observer itself; the observer is
/// reached only through the dispatcher, which refuses events before start and
/// after teardown.
pub struct PlatformLayer<O: EventObserver> {
    config: PlatformConfig,
    dispatcher: EventDispatcher<O>,
    window: Option<Arc<Window>>,
    presenter: Option<SurfacePresenter>,
    input: InputAdapter,
    next_timer: Instant,
}

impl<O: EventObserver> PlatformLayer<O> {
    pub fn new(config: PlatformConfig, observer: O) -> Self {
        Self {
            config,
            dispatcher: EventDispatcher::new(observer),
            window: None,
            presenter: None,
            input: InputAdapter::new(),
            next_timer: Instant::now(),
        }
    }

    pub fn dispatcher(&self) -> &EventDispatcher<O> {
        &self.dispatcher
    }

    /// Stop forwarding events, release GPU and window resources, and exit
    fn teardown(&mut self, event_loop: &ActiveEventLoop) {
        self.dispatcher.shutdown();
        self.presenter = None;
        self.window = None;
        event_loop.exit();
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), Box<dyn std::error::Error>> {
        let WindowDimensions { width, height } = self.config.dimensions;
        let window = Arc::new(
            event_loop.create_window(
                Window::default_attributes()
                    .with_title(self.config.title.clone())
                    .with_inner_size(PhysicalSize::new(width, height))
                    .with_resizable(false),
            )?,
        );

        let presenter = pollster::block_on(SurfacePresenter::new(window.clone(), self.config.dimensions))?;
        log::info!("Window created: {}x{}", width, height);

        window.request_redraw();
        self.window = Some(window);
        self.presenter = Some(presenter);
        Ok(())
    }

    fn draw(&mut self) {
        let Some(frame) = self.dispatcher.draw_frame() else {
            return;
        };
        if let Some(presenter) = self.presenter.as_mut() {
            if let Err(e) = presenter.present(&frame) {
                log::error!("Present failed: {}", e);
            }
        }
    }

    fn keyboard(&mut self, event_loop: &ActiveEventLoop, event: KeyEvent) {
        let PhysicalKey::Code(keycode) = event.physical_key else {
            return;
        };

        // Escape is reserved for quit and never reaches the observer.
        if keycode == KeyCode::Escape {
            if event.state == ElementState::Pressed {
                self.teardown(event_loop);
            }
            return;
        }

        if let Some(key) = InputAdapter::map_key(keycode) {
            match event.state {
                ElementState::Pressed => self.dispatcher.key_down(key),
                ElementState::Released => self.dispatcher.key_up(key),
            }
        }
    }
}

impl<O: EventObserver> ApplicationHandler for PlatformLayer<O> {
    fn new_events(&mut self, _event_loop: &ActiveEventLoop, cause: StartCause) {
        if let StartCause::ResumeTimeReached { .. } = cause {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.dispatcher.state() != Lifecycle::Pending {
            return;
        }

        // Start-of-run precedes every other event, including the first redraw.
        self.dispatcher.start();

        if let Err(e) = self.create_window(event_loop) {
            log::error!("Failed to create window: {}", e);
            self.teardown(event_loop);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        if !self.dispatcher.is_running() {
            return;
        }

        match event {
            WindowEvent::CloseRequested | WindowEvent::Destroyed => self.teardown(event_loop),
            WindowEvent::KeyboardInput { event, .. } => self.keyboard(event_loop, event),
            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(button) = InputAdapter::map_mouse_button(button) {
                    let (x, y) = self.input.cursor();
                    match state {
                        ElementState::Pressed => self.dispatcher.mouse_down(button, x, y),
                        ElementState::Released => self.dispatcher.mouse_up(button, x, y),
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                let (x, y) = self.input.cursor_moved(position);
                self.dispatcher.mouse_move(x, y);
            }
            WindowEvent::Resized(size) => {
                if let Some(presenter) = self.presenter.as_mut() {
                    presenter.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => self.draw(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if !self.dispatcher.is_running() {
            return;
        }

        let now = Instant::now();
        if now >= self.next_timer {
            self.next_timer = now + self.config.timer_interval;
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_timer));
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.dispatcher.shutdown();
    }
}

/// Run `observer` in a native window until it is closed
pub fn run<O: EventObserver>(config: PlatformConfig, observer: O) -> anyhow::Result<()> {
    let event_loop = EventLoop::new()?;
    let mut app = PlatformLayer::new(config, observer);
    event_loop.run_app(&mut app)?;
    Ok(())
}
