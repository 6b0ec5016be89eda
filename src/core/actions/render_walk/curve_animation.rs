use crate::core::actions::render_walk::ports::{canvas::Canvas, tick_scheduler::TickOutcome};
use crate::core::actions::walk_path::walk_state::WalkState;
use crate::core::data::{
    facing::Facing, line_style::LineStyle, point::Point, turn_sequence::TurnSequence,
};
use crate::core::fractals::dragon::dragon_config::DragonConfig;

/// Paced rendering of a turn sequence: each tick walks up to `render_speed`
/// segments and draws them.
#[derive(Debug, Clone)]
pub struct CurveAnimation {
    sequence: TurnSequence,
    state: WalkState,
    segment_length: f64,
    render_speed: usize,
    style: LineStyle,
    drawn: usize,
}

impl CurveAnimation {
    #[must_use]
    pub fn new(
        sequence: TurnSequence,
        start: Point,
        facing: Facing,
        segment_length: f64,
        render_speed: usize,
        style: LineStyle,
    ) -> Self {
        Self {
            sequence,
            state: WalkState::new(start, facing),
            segment_length,
            render_speed,
            style,
            drawn: 0,
        }
    }

    #[must_use]
    pub fn from_config(sequence: TurnSequence, config: &DragonConfig) -> Self {
        Self::new(
            sequence,
            config.start,
            config.initial_facing,
            config.segment_length,
            config.render_speed,
            config.curve_style,
        )
    }

    /// Draws the next batch of segments onto `canvas`. Once the walk is
    /// complete this draws nothing and keeps returning `Complete`.
    pub fn tick<C: Canvas + ?Sized>(&mut self, canvas: &mut C) -> TickOutcome {
        let (state, segments) =
            self.state.step(&self.sequence, self.render_speed, self.segment_length);

        for segment in &segments {
            canvas.draw_line(segment.start, segment.end, self.style);
        }

        self.state = state;
        self.drawn += segments.len();

        if self.is_complete() {
            TickOutcome::Complete
        } else {
            TickOutcome::Continue
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state.is_complete(&self.sequence)
    }

    #[must_use]
    pub fn drawn_segments(&self) -> usize {
        self.drawn
    }

    #[must_use]
    pub fn total_segments(&self) -> usize {
        self.sequence.len() + 1
    }

    #[must_use]
    pub fn state(&self) -> WalkState {
        self.state
    }

    #[must_use]
    pub fn sequence(&self) -> &TurnSequence {
        &self.sequence
    }

    #[must_use]
    pub fn render_speed(&self) -> usize {
        self.render_speed
    }
}
