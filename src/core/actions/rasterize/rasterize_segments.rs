use rayon::prelude::*;

use crate::core::actions::rasterize::line_spans::{covered_rows, fill_span, row_span};
use crate::core::data::{line_style::LineStyle, pixel_buffer::PixelBuffer, segment::Segment};

/// Rows handed to each rayon task.
pub const BAND_HEIGHT: usize = 16;

/// Strokes one segment into `buffer`, touching only the rows it covers.
pub fn rasterize_segment(buffer: &mut PixelBuffer, segment: &Segment, style: LineStyle) {
    let pixel_rect = buffer.pixel_rect();
    let stride = buffer.row_stride();
    let top = pixel_rect.top_left().y;
    let (first, last) = covered_rows(segment, style);
    let first = first.max(top);
    let last = last.min(pixel_rect.bottom_right().y);

    for y in first..=last {
        let Some(span) = row_span(segment, style, y) else {
            continue;
        };

        let offset = (y - top) as usize * stride;
        fill_span(
            &mut buffer.buffer_mut()[offset..offset + stride],
            pixel_rect,
            span,
            style.colour,
        );
    }
}

pub fn rasterize_segments(buffer: &mut PixelBuffer, segments: &[Segment], style: LineStyle) {
    for segment in segments {
        rasterize_segment(buffer, segment, style);
    }
}

/// Strokes all `segments` into `buffer` in parallel.
///
/// The buffer is split into bands of [`BAND_HEIGHT`] rows and each band
/// paints the spans of every segment crossing it, so bands never share
/// bytes. The result matches [`rasterize_segments`].
pub fn rasterize_segments_rayon(buffer: &mut PixelBuffer, segments: &[Segment], style: LineStyle) {
    let pixel_rect = buffer.pixel_rect();
    let stride = buffer.row_stride();
    let top = pixel_rect.top_left().y;
    let rows: Vec<(i32, i32)> = segments.iter().map(|s| covered_rows(s, style)).collect();

    buffer
        .buffer_mut()
        .par_chunks_mut(stride * BAND_HEIGHT)
        .enumerate()
        .for_each(|(band_index, band)| {
            let band_top = top + (band_index * BAND_HEIGHT) as i32;
            let band_bottom = band_top + (band.len() / stride) as i32 - 1;

            for (segment, &(first, last)) in segments.iter().zip(&rows) {
                if last < band_top || first > band_bottom {
                    continue;
                }

                for y in first.max(band_top)..=last.min(band_bottom) {
                    if let Some(span) = row_span(segment, style, y) {
                        let offset = (y - band_top) as usize * stride;
                        fill_span(
                            &mut band[offset..offset + stride],
                            pixel_rect,
                            span,
                            style.colour,
                        );
                    }
                }
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::walk_path::trace_path::trace_path;
    use crate::core::data::{
        colour::Colour, facing::Facing, pixel::Pixel, pixel_rect::PixelRect, point::Point,
    };
    use crate::core::fractals::dragon::algorithm::generate_turn_sequence;

    fn white_canvas(width: u32, height: u32) -> PixelBuffer {
        PixelBuffer::filled(PixelRect::with_size(width, height).unwrap(), Colour::WHITE)
    }

    #[test]
    fn test_horizontal_segment_paints_inclusive_endpoints() {
        let mut buffer = white_canvas(10, 3);
        let segment = Segment::new(Point::new(2.0, 1.0), Point::new(5.0, 1.0));

        rasterize_segment(&mut buffer, &segment, LineStyle::CURVE);

        assert_eq!(buffer.count_colour(Colour::BLACK), 4);
        assert_eq!(buffer.pixel(Pixel { x: 2, y: 1 }), Ok(Colour::BLACK));
        assert_eq!(buffer.pixel(Pixel { x: 5, y: 1 }), Ok(Colour::BLACK));
        assert_eq!(buffer.pixel(Pixel { x: 6, y: 1 }), Ok(Colour::WHITE));
    }

    #[test]
    fn test_segment_off_canvas_is_clipped() {
        let mut buffer = white_canvas(4, 4);
        let segment = Segment::new(Point::new(2.0, -10.0), Point::new(2.0, 10.0));

        rasterize_segment(&mut buffer, &segment, LineStyle::CURVE);

        assert_eq!(buffer.count_colour(Colour::BLACK), 4);
    }

    #[test]
    fn test_rayon_matches_sequential_for_a_dragon_trace() {
        let sequence = generate_turn_sequence(10).unwrap();
        let segments = trace_path(&sequence, Point::new(120.0, 90.0), 3.0, Facing::Right);

        let mut sequential = white_canvas(200, 150);
        let mut parallel = white_canvas(200, 150);

        rasterize_segments(&mut sequential, &segments, LineStyle::TRACE);
        rasterize_segments_rayon(&mut parallel, &segments, LineStyle::TRACE);

        assert_eq!(sequential, parallel);
        assert!(sequential.count_colour(Colour::LIGHT_GREY) > 0);
    }

    #[test]
    fn test_rayon_handles_partial_last_band() {
        let rows = BAND_HEIGHT as u32 + 3;
        let segment = Segment::new(Point::new(1.0, 0.0), Point::new(1.0, f64::from(rows - 1)));

        let mut sequential = white_canvas(4, rows);
        let mut parallel = white_canvas(4, rows);

        rasterize_segment(&mut sequential, &segment, LineStyle::CURVE);
        rasterize_segments_rayon(&mut parallel, &[segment], LineStyle::CURVE);

        assert_eq!(sequential, parallel);
        assert_eq!(parallel.count_colour(Colour::BLACK), rows as usize);
    }
}
