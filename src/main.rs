use std::io;

use clap::Parser;
use color_eyre::Result;
use tracing::debug;

use vision_label::cli::Args;
use vision_label::config::Config;
use vision_label::core::Reporter;
use vision_label::vision::VisionClient;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let (config, source) = Config::load()?;
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(config.level()?)
        .init();
    debug!(%source, "Loaded configuration");

    let client = VisionClient::new(&config)?;
    let stdout = io::stdout();
    Reporter::new(client).run(&args.image_file, &mut stdout.lock())?;
    Ok(())
}
