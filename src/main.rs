mod core;
mod ewmh;
mod overlay;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::core::context::Context;
use crate::overlay::settings::Settings;
use crate::overlay::Overlay;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// X display to connect to (defaults to $DISPLAY)
    #[arg(long)]
    display: Option<String>,

    /// Window title
    #[arg(long, default_value = "smart_pointer")]
    title: String,

    /// Path to a settings file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let settings = Settings::load_or_default(args.config.as_deref());

    let ctx = match Context::new(args.display.as_deref()) {
        Ok(ctx) => {
            info!(
                "Connected to X11 server, screen {} ({}x{})",
                ctx.screen_num, ctx.screen_width, ctx.screen_height
            );
            ctx
        }
        Err(e) => {
            error!("Overlay setup failed: {:#}", e);
            return Err(e);
        }
    };

    let mut overlay = Overlay::new(ctx, settings, &args.title)?;
    overlay.run()?;

    info!("Exiting");
    Ok(())
}
