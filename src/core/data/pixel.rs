/// Integer pixel coordinate on a canvas. `y` grows downward.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Pixel {
    pub x: i32,
    pub y: i32,
}
