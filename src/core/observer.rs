use super::frame::DrawFrameInfo;
use super::input::{Key, MouseButton};

/// Application-side receiver of platform events.
///
/// Every hook defaults to a no-op so implementors only override what they
/// need. Hooks are invoked synchronously on the platform's event thread.
pub trait EventObserver {
    /// Start of run; always delivered before any other hook
    fn on_start(&mut self) {}

    /// Redraw request. Returns the frame to present, or `None` if there is
    /// nothing to show yet.
    fn on_draw_frame(&mut self) -> Option<DrawFrameInfo<'_>> {
        None
    }

    /// Periodic tick carrying its duration in seconds
    fn on_timer(&mut self, _delta: f32) {}

    fn on_key_up(&mut self, _key: Key) {}

    fn on_key_down(&mut self, _key: Key) {}

    /// Mouse button pressed at window pixel `(x, y)`
    fn on_mouse_down(&mut self, _button: MouseButton, _x: i32, _y: i32) {}

    fn on_mouse_move(&mut self, _x: i32, _y: i32) {}

    fn on_mouse_up(&mut self, _button: MouseButton, _x: i32, _y: i32) {}
}

impl<O: EventObserver + ?Sized> EventObserver for Box<O> {
    fn on_start(&mut self) {
        (**self).on_start()
    }

    fn on_draw_frame(&mut self) -> Option<DrawFrameInfo<'_>> {
        (**self).on_draw_frame()
    }

    fn on_timer(&mut self, delta: f32) {
        (**self).on_timer(delta)
    }

    fn on_key_up(&mut self, key: Key) {
        (**self).on_key_up(key)
    }

    fn on_key_down(&mut self, key: Key) {
        (**self).on_key_down(key)
    }

    fn on_mouse_down(&mut self, button: MouseButton, x: i32, y: i32) {
        (**self).on_mouse_down(button, x, y)
    }

    fn on_mouse_move(&mut self, x: i32, y: i32) {
        (**self).on_mouse_move(x, y)
    }

    fn on_mouse_up(&mut self, button: MouseButton, x: i32, y: i32) {
        (**self).on_mouse_up(button, x, y)
    }
}
