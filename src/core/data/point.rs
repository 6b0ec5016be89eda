use std::ops::Add;

use crate::core::data::pixel::Pixel;

/// Position on the drawing plane in canvas units. `y` grows downward, so
/// "up" on screen is negative `y`.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Nearest pixel to this point.
    #[must_use]
    pub fn to_pixel(self) -> Pixel {
        Pixel {
            x: self.x.round() as i32,
            y: self.y.round() as i32,
        }
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}
