pub mod clock;
pub mod dispatch;
pub mod frame;
pub mod framebuffer;
pub mod input;
pub mod line;
pub mod observer;
pub mod renderer;
pub mod timer;
pub mod window;
pub mod wireframe;

pub use clock::{Clock, TimeSource};
pub use dispatch::{EventDispatcher, Lifecycle};
pub use frame::DrawFrameInfo;
pub use framebuffer::{Framebuffer, FramebufferError};
pub use input::{Key, MouseButton};
pub use line::{fill_pattern, rasterize_line};
pub use observer::EventObserver;
pub use renderer::Renderer;
pub use timer::{TickScheduler, DEFAULT_MAX_QUANTA, DEFAULT_QUANTUM};
pub use window::WindowDimensions;
