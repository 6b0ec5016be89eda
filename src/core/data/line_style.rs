use crate::core::data::colour::Colour;

/// Stroke used when drawing a segment. `weight` is the line thickness in
/// pixels; anything below one is drawn one pixel wide.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LineStyle {
    pub colour: Colour,
    pub weight: u32,
}

impl LineStyle {
    /// Muted stroke for the background reference trace.
    pub const TRACE: LineStyle = LineStyle {
        colour: Colour::LIGHT_GREY,
        weight: 1,
    };

    /// Stroke for the animated curve.
    pub const CURVE: LineStyle = LineStyle {
        colour: Colour::BLACK,
        weight: 1,
    };

    #[must_use]
    pub fn half_width(&self) -> i32 {
        (self.weight.max(1) as i32 - 1) / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_width() {
        let style = |weight| LineStyle { colour: Colour::BLACK, weight };

        assert_eq!(style(0).half_width(), 0);
        assert_eq!(style(1).half_width(), 0);
        assert_eq!(style(2).half_width(), 0);
        assert_eq!(style(3).half_width(), 1);
        assert_eq!(style(5).half_width(), 2);
    }
}
