use std::error::Error;
use std::fmt;
use crate::core::data::pixel::Pixel;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelRectError {
    InvalidSize { width: i64, height: i64 },
}

impl fmt::Display for PixelRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "canvas must be at least 2x2 pixels: {}x{}", width, height)
            }
        }
    }
}

impl Error for PixelRectError {}

/// Inclusive rectangle of pixels, `top_left` to `bottom_right`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelRect {
    top_left: Pixel,
    bottom_right: Pixel,
}

impl PixelRect {
    pub fn new(top_left: Pixel, bottom_right: Pixel) -> Result<Self, PixelRectError> {
        let width = i64::from(bottom_right.x) - i64::from(top_left.x) + 1;
        let height = i64::from(bottom_right.y) - i64::from(top_left.y) + 1;

        if width < 2 || height < 2 {
            return Err(PixelRectError::InvalidSize { width, height });
        }

        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    /// Canvas of `width` x `height` pixels anchored at the origin.
    pub fn with_size(width: u32, height: u32) -> Result<Self, PixelRectError> {
        if width < 2 || height < 2 || width > i32::MAX as u32 || height > i32::MAX as u32 {
            return Err(PixelRectError::InvalidSize {
                width: i64::from(width),
                height: i64::from(height),
            });
        }

        Self::new(
            Pixel { x: 0, y: 0 },
            Pixel {
                x: width as i32 - 1,
                y: height as i32 - 1,
            },
        )
    }

    #[must_use]
    pub fn top_left(&self) -> Pixel {
        self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> Pixel {
        self.bottom_right
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        (self.bottom_right.x - self.top_left.x + 1) as u32
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        (self.bottom_right.y - self.top_left.y + 1) as u32
    }

    #[must_use]
    pub fn contains_pixel(&self, pixel: Pixel) -> bool {
        self.top_left.x <= pixel.x
            && self.top_left.y <= pixel.y
            && self.bottom_right.x >= pixel.x
            && self.bottom_right.y >= pixel.y
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_size_anchors_at_origin() {
        let rect = PixelRect::with_size(1000, 750).unwrap();

        assert_eq!(rect.top_left(), Pixel { x: 0, y: 0 });
        assert_eq!(rect.bottom_right(), Pixel { x: 999, y: 749 });
        assert_eq!(rect.width(), 1000);
        assert_eq!(rect.height(), 750);
        assert_eq!(rect.size(), 750_000);
    }

    #[test]
    fn test_offset_rect_dimensions() {
        let rect = PixelRect::new(Pixel { x: -10, y: -20 }, Pixel { x: 110, y: 80 }).unwrap();

        assert_eq!(rect.width(), 121);
        assert_eq!(rect.height(), 101);
    }

    #[test]
    fn test_inverted_corners_are_rejected() {
        let inverted = PixelRect::new(Pixel { x: 2, y: 2 }, Pixel { x: -2, y: -2 });

        assert_eq!(inverted, Err(PixelRectError::InvalidSize { width: -3, height: -3 }));
    }

    #[test]
    fn test_must_be_at_least_two_pixels_each_way() {
        assert_eq!(
            PixelRect::with_size(1, 10),
            Err(PixelRectError::InvalidSize { width: 1, height: 10 })
        );
        assert_eq!(
            PixelRect::with_size(10, 0),
            Err(PixelRectError::InvalidSize { width: 10, height: 0 })
        );
        assert!(PixelRect::with_size(2, 2).is_ok());
    }

    #[test]
    fn test_contains_pixel_is_inclusive() {
        let rect = PixelRect::with_size(10, 10).unwrap();

        assert!(rect.contains_pixel(Pixel { x: 0, y: 0 }));
        assert!(rect.contains_pixel(Pixel { x: 9, y: 9 }));
        assert!(!rect.contains_pixel(Pixel { x: 10, y: 5 }));
        assert!(!rect.contains_pixel(Pixel { x: 5, y: -1 }));
    }
}
