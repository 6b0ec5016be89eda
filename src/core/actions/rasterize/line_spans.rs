//! Row-by-row coverage of a stroked segment.
//!
//! A segment is rasterised as a set of horizontal spans, one per pixel row
//! it touches. Both the sequential and the row-parallel rasterisers paint
//! from these spans, so they produce identical images.

use crate::core::data::{
    colour::Colour, line_style::LineStyle, pixel_buffer::BYTES_PER_PIXEL, pixel_rect::PixelRect,
    segment::Segment,
};

/// First and last pixel row touched by `segment`, inclusive.
#[must_use]
pub fn covered_rows(segment: &Segment, style: LineStyle) -> (i32, i32) {
    let a = segment.start.to_pixel();
    let b = segment.end.to_pixel();
    let half = style.half_width();

    (a.y.min(b.y) - half, a.y.max(b.y) + half)
}

/// Inclusive range of columns covered by `segment` on row `y`.
#[must_use]
pub fn row_span(segment: &Segment, style: LineStyle, y: i32) -> Option<(i32, i32)> {
    let (first, last) = covered_rows(segment, style);
    if y < first || y > last {
        return None;
    }

    let a = segment.start.to_pixel();
    let b = segment.end.to_pixel();
    let half = style.half_width();

    if a.y == b.y {
        return Some((a.x.min(b.x) - half, a.x.max(b.x) + half));
    }

    let dx = f64::from(b.x - a.x);
    let dy = f64::from(b.y - a.y);
    let x_at = |row: f64| {
        let t = ((row - f64::from(a.y)) / dy).clamp(0.0, 1.0);
        f64::from(a.x) + t * dx
    };

    let x0 = x_at(f64::from(y) - 0.5);
    let x1 = x_at(f64::from(y) + 0.5);
    let (low, high) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };

    Some((low.round() as i32 - half, high.round() as i32 + half))
}

/// Whether any part of the stroked segment lands inside `pixel_rect`.
#[must_use]
pub fn is_visible(segment: &Segment, style: LineStyle, pixel_rect: PixelRect) -> bool {
    let (first, last) = covered_rows(segment, style);
    let top = pixel_rect.top_left().y;
    let bottom = pixel_rect.bottom_right().y;

    (first.max(top)..=last.min(bottom)).any(|y| {
        row_span(segment, style, y).is_some_and(|(x0, x1)| {
            x1 >= pixel_rect.top_left().x && x0 <= pixel_rect.bottom_right().x
        })
    })
}

/// Paints columns `span` of one buffer row, clipped to `pixel_rect`.
pub fn fill_span(row: &mut [u8], pixel_rect: PixelRect, span: (i32, i32), colour: Colour) {
    let left = pixel_rect.top_left().x;
    let x0 = span.0.max(left);
    let x1 = span.1.min(pixel_rect.bottom_right().x);

    if x0 > x1 {
        return;
    }

    let start = (x0 - left) as usize * BYTES_PER_PIXEL;
    let end = (x1 - left + 1) as usize * BYTES_PER_PIXEL;

    for pixel in row[start..end].chunks_exact_mut(BYTES_PER_PIXEL) {
        pixel[0] = colour.r;
        pixel[1] = colour.g;
        pixel[2] = colour.b;
    }
}
