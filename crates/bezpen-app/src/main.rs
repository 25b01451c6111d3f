//! Command line entry point.

use bezpen_app::{App, AppConfig, Script};
use clap::Parser;
use std::path::PathBuf;

/// Replay a gesture script through the Bezpen curve editor
///
/// Examples:
///   bezpen demos/closed_curve.json
///   bezpen demos/closed_curve.json --config bezpen.json
#[derive(Parser, Debug)]
#[clap(name = "bezpen", version, about = "Replay a gesture script through the Bezpen curve editor")]
struct CliArgs {
    /// JSON gesture script
    script: PathBuf,

    /// JSON configuration (editor and scene settings)
    #[clap(long = "config", short = 'c')]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = CliArgs::parse();
    log::info!("Starting Bezpen");

    let config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    let script = Script::load(&args.script)?;

    let mut app = App::new(config);
    let summary = app.run(&script);
    print!("{summary}");
    Ok(())
}
