#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const WHITE: Colour = Colour { r: 255, g: 255, b: 255 };
    pub const BLACK: Colour = Colour { r: 0, g: 0, b: 0 };
    pub const LIGHT_GREY: Colour = Colour { r: 211, g: 211, b: 211 };
}
