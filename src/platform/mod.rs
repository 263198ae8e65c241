//! Native window, input and presentation on winit + wgpu.

pub mod app;
pub mod input_adapter;
pub mod surface;

pub use app::{run, PlatformConfig, PlatformLayer};
pub use input_adapter::InputAdapter;
pub use surface::SurfacePresenter;
