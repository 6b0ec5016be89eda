pub mod line_spans;
pub mod pixel_buffer_canvas;
pub mod rasterize_segments;
