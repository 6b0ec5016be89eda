use crate::core::actions::walk_path::walk_state::WalkState;
use crate::core::data::{
    facing::Facing, point::Point, segment::Segment, turn_sequence::TurnSequence,
};

/// Walks the whole sequence at once: the leading segment followed by one
/// segment per turn, `sequence.len() + 1` in total.
#[must_use]
pub fn trace_path(
    sequence: &TurnSequence,
    start: Point,
    segment_length: f64,
    facing: Facing,
) -> Vec<Segment> {
    let (_, segments) =
        WalkState::new(start, facing).step(sequence, sequence.len() + 1, segment_length);

    segments
}
