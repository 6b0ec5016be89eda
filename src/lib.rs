mod presenters;
mod controllers;
mod core;
mod input;

pub use controllers::cli::dragon_cli::{DragonCliController, FrameOutput, RenderSummary};
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use crate::core::actions::rasterize::rasterize_segments::{rasterize_segments, rasterize_segments_rayon};
pub use crate::core::actions::render_walk::curve_animation::CurveAnimation;
pub use crate::core::actions::render_walk::ports::canvas::Canvas;
pub use crate::core::actions::render_walk::ports::tick_scheduler::{TickOutcome, TickScheduler};
pub use crate::core::actions::render_walk::schedulers::immediate::ImmediateTicker;
pub use crate::core::actions::render_walk::schedulers::paced::PacedTicker;
pub use crate::core::actions::walk_path::trace_path::trace_path;
pub use crate::core::actions::walk_path::walk_state::WalkState;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::facing::Facing;
pub use crate::core::data::line_style::LineStyle;
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::data::pixel_rect::PixelRect;
pub use crate::core::data::point::Point;
pub use crate::core::data::segment::Segment;
pub use crate::core::data::turn_sequence::TurnSequence;
pub use crate::core::fractals::dragon::algorithm::generate_turn_sequence;
pub use crate::core::fractals::dragon::dragon_config::DragonConfig;
pub use crate::core::fractals::dragon::errors::DragonError;
pub use input::cli::args::{CliArgs, CurveArgs, GuiArgs};
pub use presenters::file::ppm::PpmFilePresenter;

#[cfg(feature = "gui")]
pub use input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use presenters::pixels::factory::PixelsPresenterFactory;
