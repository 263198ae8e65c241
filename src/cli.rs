// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "wireframe-sim")]
#[command(about = "Software-rendered 2D physics viewer", long_about = None)]
pub struct Cli {
    /// JSON configuration file; flags below override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Framebuffer width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Framebuffer height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Pixels per world unit, both axes
    #[arg(long)]
    pub scale: Option<f32>,

    /// Simulation rate in ticks per second
    #[arg(long = "tick-hz")]
    pub tick_hz: Option<f64>,

    /// Number of pendulums in the demo world
    #[arg(long)]
    pub pendulums: Option<usize>,
}
