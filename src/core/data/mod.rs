pub mod colour;
pub mod facing;
pub mod line_style;
pub mod pixel;
pub mod pixel_buffer;
pub mod pixel_rect;
pub mod point;
pub mod segment;
pub mod turn_sequence;
