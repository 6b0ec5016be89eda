use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::{
    actions::{
        rasterize::{line_spans::is_visible, rasterize_segments::rasterize_segments_rayon},
        render_walk::{
            curve_animation::CurveAnimation,
            ports::tick_scheduler::{TickOutcome, TickScheduler},
        },
        walk_path::trace_path::trace_path,
    },
    data::{pixel_buffer::PixelBuffer, turn_sequence::TurnSequence},
    fractals::dragon::{algorithm::generate_turn_sequence, dragon_config::DragonConfig},
};

/// Where and how often to save intermediate animation frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameOutput {
    dir: PathBuf,
    every: u64,
}

impl FrameOutput {
    pub fn new(dir: impl Into<PathBuf>, every: u64) -> Self {
        Self {
            dir: dir.into(),
            every: every.max(1),
        }
    }

    #[must_use]
    pub fn frame_path(&self, index: u64) -> PathBuf {
        self.dir.join(format!("frame_{:05}.ppm", index))
    }

    fn is_due(&self, tick: u64, outcome: TickOutcome) -> bool {
        outcome == TickOutcome::Complete || (tick + 1) % self.every == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSummary {
    pub turns: usize,
    pub segments_drawn: usize,
    pub hidden_segments: usize,
    pub ticks: u64,
    pub frames_written: u64,
    pub complete: bool,
    pub duration: Duration,
}

/// Headless front end: generates the curve, draws the muted trace, then
/// animates the curve onto an off-screen canvas with a [`TickScheduler`].
pub struct DragonCliController<P: FilePresenterPort> {
    presenter: P,
    config: DragonConfig,
    draw_trace: bool,
    frames: Option<FrameOutput>,
    animation: Option<CurveAnimation>,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> DragonCliController<P> {
    pub fn new(presenter: P, config: DragonConfig) -> Self {
        Self {
            presenter,
            config,
            draw_trace: true,
            frames: None,
            animation: None,
            buffer: None,
        }
    }

    #[must_use]
    pub fn with_trace(mut self, draw_trace: bool) -> Self {
        self.draw_trace = draw_trace;
        self
    }

    #[must_use]
    pub fn with_frames(mut self, frames: FrameOutput) -> Self {
        self.frames = Some(frames);
        self
    }

    pub fn generate<S: TickScheduler>(
        &mut self,
        scheduler: &mut S,
    ) -> Result<RenderSummary, Box<dyn std::error::Error>> {
        self.config.validate()?;

        let config = self.config;
        let start = Instant::now();
        let sequence = generate_turn_sequence(config.iterations)?;
        let turns = sequence.len();

        log::info!("Rendering dragon curve...");
        log::info!("Iterations: {} ({} turns)", config.iterations, turns);
        log::info!("Canvas size: {}x{}", config.width, config.height);
        log::info!("Render speed: {} segments/tick", config.render_speed);

        let mut buffer = config.blank_canvas()?;
        let pixel_rect = buffer.pixel_rect();
        let trace = trace_path(
            &sequence,
            config.start,
            config.segment_length,
            config.initial_facing,
        );

        let hidden_segments = trace
            .iter()
            .filter(|segment| !is_visible(segment, config.curve_style, pixel_rect))
            .count();
        if hidden_segments > 0 {
            log::warn!(
                "{} of {} segments fall outside the {}x{} canvas",
                hidden_segments,
                trace.len(),
                config.width,
                config.height
            );
        }

        if self.draw_trace {
            rasterize_segments_rayon(&mut buffer, &trace, config.trace_style);
            log::debug!("trace drawn in {:?}", start.elapsed());
        }

        if let Some(frames) = &self.frames {
            std::fs::create_dir_all(&frames.dir)?;
        }

        let mut animation = CurveAnimation::from_config(sequence, &config);
        let mut frames_written = 0;
        let mut frame_error: Option<io::Error> = None;
        let presenter = &self.presenter;
        let frames = self.frames.as_ref();

        let ticks = scheduler.run(|tick| {
            let outcome = animation.tick(&mut buffer);

            if let Some(frames) = frames.filter(|f| f.is_due(tick, outcome)) {
                if let Err(error) = presenter.present(&buffer, frames.frame_path(frames_written)) {
                    frame_error = Some(error);
                    return TickOutcome::Complete;
                }
                frames_written += 1;
            }

            outcome
        });

        if let Some(error) = frame_error {
            return Err(error.into());
        }

        let summary = RenderSummary {
            turns,
            segments_drawn: animation.drawn_segments(),
            hidden_segments,
            ticks,
            frames_written,
            complete: animation.is_complete(),
            duration: start.elapsed(),
        };

        log::info!(
            "Drew {}/{} segments in {} ticks",
            summary.segments_drawn,
            animation.total_segments(),
            summary.ticks
        );
        if !summary.complete {
            log::warn!("Tick budget ran out before the curve was finished");
        }
        log::info!("Duration:   {:?}", summary.duration);

        self.animation = Some(animation);
        self.buffer = Some(buffer);

        Ok(summary)
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> io::Result<()> {
        let filepath = filepath.as_ref();

        if let Some(buffer) = &self.buffer {
            if let Some(parent) = filepath.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            self.presenter.present(buffer, filepath)?;
        }

        Ok(())
    }

    #[must_use]
    pub fn turn_sequence(&self) -> Option<&TurnSequence> {
        self.animation.as_ref().map(CurveAnimation::sequence)
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::rasterize::rasterize_segments::rasterize_segments;
    use crate::core::actions::render_walk::schedulers::immediate::ImmediateTicker;
    use crate::core::data::{colour::Colour, line_style::LineStyle, point::Point};
    use crate::core::fractals::dragon::errors::DragonError;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingPresenter {
        paths: RefCell<Vec<PathBuf>>,
    }

    impl FilePresenterPort for &RecordingPresenter {
        fn present(&self, _: &PixelBuffer, filepath: impl AsRef<Path>) -> io::Result<()> {
            self.paths.borrow_mut().push(filepath.as_ref().to_path_buf());
            Ok(())
        }
    }

    struct FailingPresenter;

    impl FilePresenterPort for FailingPresenter {
        fn present(&self, _: &PixelBuffer, _: impl AsRef<Path>) -> io::Result<()> {
            Err(io::Error::other("disk full"))
        }
    }

    fn small_config() -> DragonConfig {
        DragonConfig {
            iterations: 6,
            segment_length: 4.0,
            start: Point::new(60.0, 40.0),
            width: 120,
            height: 90,
            ..DragonConfig::default()
        }
    }

    #[test]
    fn test_generate_draws_full_curve() {
        let presenter = RecordingPresenter::default();
        let mut controller = DragonCliController::new(&presenter, small_config());

        let summary = controller.generate(&mut ImmediateTicker::new()).unwrap();

        assert_eq!(summary.turns, 63);
        assert_eq!(summary.segments_drawn, 64);
        assert_eq!(summary.ticks, 22);
        assert!(summary.complete);
        assert_eq!(controller.turn_sequence().map(TurnSequence::len), Some(63));
    }

    #[test]
    fn test_curve_covers_trace() {
        let presenter = RecordingPresenter::default();
        let config = small_config();
        let mut controller = DragonCliController::new(&presenter, config);

        controller.generate(&mut ImmediateTicker::new()).unwrap();
        let rendered = controller.buffer().unwrap();

        let sequence = generate_turn_sequence(config.iterations).unwrap();
        let trace = trace_path(&sequence, config.start, config.segment_length, config.initial_facing);
        let mut expected = config.blank_canvas().unwrap();
        rasterize_segments(&mut expected, &trace, LineStyle::CURVE);

        assert_eq!(rendered, &expected);
        assert_eq!(rendered.count_colour(Colour::LIGHT_GREY), 0);
    }

    #[test]
    fn test_partial_run_leaves_trace_visible() {
        let presenter = RecordingPresenter::default();
        let mut controller = DragonCliController::new(&presenter, small_config());

        let summary = controller.generate(&mut ImmediateTicker::with_max_ticks(2)).unwrap();

        assert!(!summary.complete);
        assert_eq!(summary.segments_drawn, 6);
        assert!(controller.buffer().unwrap().count_colour(Colour::LIGHT_GREY) > 0);
    }

    #[test]
    fn test_without_trace_only_curve_colour_is_drawn() {
        let presenter = RecordingPresenter::default();
        let mut controller =
            DragonCliController::new(&presenter, small_config()).with_trace(false);

        controller.generate(&mut ImmediateTicker::with_max_ticks(2)).unwrap();

        assert_eq!(controller.buffer().unwrap().count_colour(Colour::LIGHT_GREY), 0);
    }

    #[test]
    fn test_frames_written_on_schedule_and_at_completion() {
        let presenter = RecordingPresenter::default();
        let dir = std::env::temp_dir().join(format!("dragon_frames_{}", std::process::id()));
        let mut controller = DragonCliController::new(&presenter, small_config())
            .with_frames(FrameOutput::new(&dir, 10));

        let summary = controller.generate(&mut ImmediateTicker::new()).unwrap();

        // 22 ticks: frames after ticks 10, 20 and the final one
        assert_eq!(summary.frames_written, 3);
        assert_eq!(presenter.paths.borrow()[0], dir.join("frame_00000.ppm"));
        assert_eq!(presenter.paths.borrow()[2], dir.join("frame_00002.ppm"));
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_frame_write_failure_is_reported() {
        let dir = std::env::temp_dir().join(format!("dragon_fail_{}", std::process::id()));
        let mut controller = DragonCliController::new(FailingPresenter, small_config())
            .with_frames(FrameOutput::new(&dir, 1));

        let result = controller.generate(&mut ImmediateTicker::new());

        assert!(result.is_err());
        assert!(controller.buffer().is_none());
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_invalid_config_is_rejected_before_rendering() {
        let presenter = RecordingPresenter::default();
        let config = DragonConfig {
            iterations: 0,
            ..small_config()
        };
        let mut controller = DragonCliController::new(&presenter, config);

        let error = controller.generate(&mut ImmediateTicker::new()).unwrap_err();

        assert_eq!(
            error.downcast_ref::<DragonError>(),
            Some(&DragonError::ZeroIterations)
        );
    }

    #[test]
    fn test_write_without_generate_is_a_no_op() {
        let presenter = RecordingPresenter::default();
        let controller = DragonCliController::new(&presenter, small_config());

        controller.write("unused.ppm").unwrap();

        assert!(presenter.paths.borrow().is_empty());
    }
}
