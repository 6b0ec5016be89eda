use crate::core::data::point::Point;

/// Cardinal direction of travel while walking a turn sequence.
///
/// The discriminants are the direction's position in the counter-clockwise
/// cycle Right, Up, Left, Down. Turning left adds one, turning right
/// subtracts one, both modulo four.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Facing {
    #[default]
    Right = 0,
    Up = 1,
    Left = 2,
    Down = 3,
}

impl Facing {
    pub const ALL: [Facing; 4] = [Facing::Right, Facing::Up, Facing::Left, Facing::Down];

    #[must_use]
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Maps any integer onto a direction using Euclidean remainder, so
    /// `-1` is `Down` rather than an out-of-range value.
    #[must_use]
    pub fn from_index(index: i64) -> Self {
        match index.rem_euclid(4) {
            0 => Facing::Right,
            1 => Facing::Up,
            2 => Facing::Left,
            _ => Facing::Down,
        }
    }

    #[must_use]
    pub fn turn_left(self) -> Self {
        Self::from_index(i64::from(self.index()) + 1)
    }

    #[must_use]
    pub fn turn_right(self) -> Self {
        Self::from_index(i64::from(self.index()) - 1)
    }

    /// Applies one entry of a turn sequence: `true` turns left, `false` right.
    #[must_use]
    pub fn turn(self, left: bool) -> Self {
        if left { self.turn_left() } else { self.turn_right() }
    }

    /// Point reached by moving `length` units from `from` in this direction.
    #[must_use]
    pub fn step(self, from: Point, length: f64) -> Point {
        let offset = match self {
            Facing::Right => Point::new(length, 0.0),
            Facing::Up => Point::new(0.0, -length),
            Facing::Left => Point::new(-length, 0.0),
            Facing::Down => Point::new(0.0, length),
        };

        from + offset
    }
}
