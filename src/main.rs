use anyhow::Context;
use clap::Parser;
use winit::event_loop::EventLoop;

use flycam::app::App;
use flycam::cli::Cli;
use flycam::config::FlycamConfig;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => FlycamConfig::load(path)?,
        None => FlycamConfig::default(),
    };
    cli.apply(&mut config);

    log::info!(
        "controls: WASD move, E/Q up/down, arrows turn, drag LMB to look, Shift sprint, Escape quits"
    );

    let event_loop = EventLoop::new().context("creating event loop")?;
    let mut app = App::new(config, cli.xr);
    event_loop.run_app(&mut app).context("running event loop")?;

    Ok(())
}
