pub mod cli;
pub mod config;
pub mod core;
pub mod demo;
pub mod math;
pub mod platform;
pub mod traits;
pub mod viewer;

pub use config::ViewerConfig;
pub use viewer::SimulationViewer;
