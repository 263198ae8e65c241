use super::frame::DrawFrameInfo;
use super::input::{Key, MouseButton};
use super::observer::EventObserver;

/// Where the platform is in its run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Created, start-of-run not yet delivered
    Pending,
    Running,
    /// Teardown has begun; nothing more is forwarded
    TornDown,
}

/// Forwards platform events to an owned observer while enforcing the
/// lifecycle: nothing reaches the observer before `start` or after `shutdown`.
pub struct EventDispatcher<O: EventObserver> {
    observer: O,
    state: Lifecycle,
}

impl<O: EventObserver> EventDispatcher<O> {
    pub fn new(observer: O) -> Self {
        Self {
            observer,
            state: Lifecycle::Pending,
        }
    }

    pub fn state(&self) -> Lifecycle {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == Lifecycle::Running
    }

    /// Deliver start-of-run. Only the first call while pending has any effect.
    pub fn start(&mut self) {
        if self.state != Lifecycle::Pending {
            return;
        }
        self.state = Lifecycle::Running;
        self.observer.on_start();
    }

    /// Begin teardown; every later event is dropped
    pub fn shutdown(&mut self) {
        if self.state != Lifecycle::TornDown {
            log::debug!("Event dispatch shut down");
        }
        self.state = Lifecycle::TornDown;
    }

    fn accepts(&self, event: &str) -> bool {
        if !self.is_running() {
            log::trace!("Dropping {} event in state {:?}", event, self.state);
            return false;
        }
        true
    }

    pub fn draw_frame(&mut self) -> Option<DrawFrameInfo<'_>> {
        if !self.accepts("draw") {
            return None;
        }
        self.observer.on_draw_frame()
    }

    pub fn timer(&mut self, delta: f32) {
        if self.accepts("timer") {
            self.observer.on_timer(delta);
        }
    }

    pub fn key_up(&mut self, key: Key) {
        if self.accepts("key up") {
            self.observer.on_key_up(key);
        }
    }

    pub fn key_down(&mut self, key: Key) {
        if self.accepts("key down") {
            self.observer.on_key_down(key);
        }
    }

    pub fn mouse_down(&mut self, button: MouseButton, x: i32, y: i32) {
        if self.accepts("mouse down") {
            self.observer.on_mouse_down(button, x, y);
        }
    }

    pub fn mouse_move(&mut self, x: i32, y: i32) {
        if self.accepts("mouse move") {
            self.observer.on_mouse_move(x, y);
        }
    }

    pub fn mouse_up(&mut self, button: MouseButton, x: i32, y: i32) {
        if self.accepts("mouse up") {
            self.observer.on_mouse_up(button, x, y);
        }
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn into_inner(self) -> O {
        self.observer
    }
}
