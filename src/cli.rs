// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "orbit-scene")]
#[command(about = "WebGPU demo scene with an auto-rotating orbit camera", long_about = None)]
pub struct Cli {
    /// JSON scene config overriding the built-in demo scene
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Equirectangular Radiance .hdr environment map
    #[arg(long)]
    pub hdr: Option<PathBuf>,

    /// Auto-rotation speed multiplier
    #[arg(long)]
    pub speed: Option<f32>,

    /// Start with auto-rotation switched off
    #[arg(long = "no-auto-rotate", default_value = "false")]
    pub no_auto_rotate: bool,

    /// Disable the FPS overlay
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,
}
