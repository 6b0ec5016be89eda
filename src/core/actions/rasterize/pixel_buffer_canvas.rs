use crate::core::actions::rasterize::rasterize_segments::rasterize_segment;
use crate::core::actions::render_walk::ports::canvas::Canvas;
use crate::core::data::{
    line_style::LineStyle, pixel_buffer::PixelBuffer, point::Point, segment::Segment,
};

impl Canvas for PixelBuffer {
    fn draw_line(&mut self, from: Point, to: Point, style: LineStyle) {
        rasterize_segment(self, &Segment::new(from, to), style);
    }
}
