use std::path::PathBuf;

use clap::{Args, Parser};

use crate::core::data::point::Point;
use crate::core::fractals::dragon::dragon_config::{
    DEFAULT_HEIGHT, DEFAULT_ITERATIONS, DEFAULT_RENDER_SPEED, DEFAULT_SEGMENT_LENGTH,
    DEFAULT_START, DEFAULT_WIDTH, DragonConfig,
};

/// Curve options shared by every front end.
#[derive(Debug, Clone, PartialEq, Args)]
pub struct CurveArgs {
    /// Number of folds; the curve has 2^n segments
    #[arg(short, long, default_value_t = DEFAULT_ITERATIONS)]
    pub iterations: u32,

    /// Length of each segment in pixels
    #[arg(long, default_value_t = DEFAULT_SEGMENT_LENGTH)]
    pub segment_length: f64,

    #[arg(long, default_value_t = DEFAULT_START.x, allow_hyphen_values = true)]
    pub start_x: f64,

    #[arg(long, default_value_t = DEFAULT_START.y, allow_hyphen_values = true)]
    pub start_y: f64,

    /// Segments drawn per animation tick
    #[arg(short = 's', long, default_value_t = DEFAULT_RENDER_SPEED)]
    pub render_speed: usize,

    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,
}

impl CurveArgs {
    #[must_use]
    pub fn to_config(&self) -> DragonConfig {
        DragonConfig {
            iterations: self.iterations,
            segment_length: self.segment_length,
            start: Point::new(self.start_x, self.start_y),
            render_speed: self.render_speed,
            width: self.width,
            height: self.height,
            ..DragonConfig::default()
        }
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "dragon_curve")]
#[command(about = "Render a Dragon Curve to a PPM image, optionally saving animation frames")]
pub struct CliArgs {
    #[command(flatten)]
    pub curve: CurveArgs,

    /// Final image path
    #[arg(short, long, default_value = "output/dragon_curve.ppm")]
    pub output: PathBuf,

    /// Directory to save intermediate animation frames into
    #[arg(long)]
    pub frames_dir: Option<PathBuf>,

    /// Save a frame every N ticks
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    pub frame_every: u64,

    /// Pace ticks at this rate instead of running flat out
    #[arg(long)]
    pub fps: Option<f64>,

    /// Skip the muted background trace
    #[arg(long)]
    pub no_trace: bool,

    /// Print the turn sequence
    #[arg(long)]
    pub dump: bool,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "gui")]
#[command(about = "Animate a Dragon Curve in a window")]
pub struct GuiArgs {
    #[command(flatten)]
    pub curve: CurveArgs,
}
