use crate::core::data::{
    facing::Facing, point::Point, segment::Segment, turn_sequence::TurnSequence,
};

/// Position of a walk over a [`TurnSequence`].
///
/// The cursor counts emitted segments. Cursor `0` emits the leading segment
/// in the initial facing, cursor `i >= 1` applies turn `i - 1` first, and
/// cursor `len + 1` means the walk is complete. It never moves past that.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WalkState {
    facing: Facing,
    point: Point,
    cursor: usize,
}

impl WalkState {
    #[must_use]
    pub fn new(start: Point, facing: Facing) -> Self {
        Self {
            facing,
            point: start,
            cursor: 0,
        }
    }

    #[must_use]
    pub fn facing(&self) -> Facing {
        self.facing
    }

    #[must_use]
    pub fn point(&self) -> Point {
        self.point
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn is_complete(&self, sequence: &TurnSequence) -> bool {
        self.cursor > sequence.len()
    }

    #[must_use]
    pub fn remaining(&self, sequence: &TurnSequence) -> usize {
        (sequence.len() + 1).saturating_sub(self.cursor)
    }

    /// Advances at most `steps` segments, returning the new state and the
    /// segments walked. A complete walk yields no segments.
    #[must_use]
    pub fn step(
        self,
        sequence: &TurnSequence,
        steps: usize,
        segment_length: f64,
    ) -> (Self, Vec<Segment>) {
        let count = steps.min(self.remaining(sequence));
        let mut state = self;
        let mut segments = Vec::with_capacity(count);

        for _ in 0..count {
            if state.cursor > 0 {
                state.facing = state.facing.turn(sequence.as_slice()[state.cursor - 1]);
            }

            let next = state.facing.step(state.point, segment_length);
            segments.push(Segment::new(state.point, next));

            state.point = next;
            state.cursor += 1;
        }

        (state, segments)
    }
}
