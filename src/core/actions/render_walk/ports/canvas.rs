use crate::core::data::{line_style::LineStyle, point::Point};

/// Drawing surface the curve is rendered onto.
pub trait Canvas {
    fn draw_line(&mut self, from: Point, to: Point, style: LineStyle);
}
