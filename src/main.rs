use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use wireframe_sim::cli::Cli;
use wireframe_sim::demo::DemoWorld;
use wireframe_sim::platform::{self, PlatformConfig};
use wireframe_sim::{SimulationViewer, ViewerConfig};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = ViewerConfig::from_cli(&cli)?;
    log::info!(
        "Starting {}x{} viewer, {} pendulums at {} Hz",
        config.width,
        config.height,
        config.pendulums,
        config.tick_hz
    );

    let platform_config = PlatformConfig {
        title: config.title.clone(),
        dimensions: config.dimensions(),
        timer_interval: Duration::from_millis(config.timer_interval_ms.max(1)),
    };
    let viewer = SimulationViewer::new(DemoWorld::new(config.pendulums), &config);

    println!("Wireframe Sim - Controls: P pause, Up/Down zoom, drag to pan, Escape to quit");
    platform::run(platform_config, viewer)
}
