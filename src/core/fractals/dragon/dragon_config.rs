use crate::core::{
    data::{
        colour::Colour, facing::Facing, line_style::LineStyle, pixel_buffer::PixelBuffer,
        pixel_rect::{PixelRect, PixelRectError}, point::Point,
    },
    fractals::dragon::{algorithm::turns_for_iterations, errors::DragonError},
};

pub const DEFAULT_ITERATIONS: u32 = 12;
pub const DEFAULT_SEGMENT_LENGTH: f64 = 6.0;
pub const DEFAULT_START: Point = Point::new(600.0, 400.0);
pub const DEFAULT_RENDER_SPEED: usize = 3;
pub const DEFAULT_WIDTH: u32 = 1000;
pub const DEFAULT_HEIGHT: u32 = 750;

/// Everything needed to generate, trace and animate one curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragonConfig {
    pub iterations: u32,
    pub segment_length: f64,
    pub start: Point,
    pub initial_facing: Facing,
    /// Segments drawn per animation tick.
    pub render_speed: usize,
    pub width: u32,
    pub height: u32,
    pub background: Colour,
    pub trace_style: LineStyle,
    pub curve_style: LineStyle,
}

impl Default for DragonConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            segment_length: DEFAULT_SEGMENT_LENGTH,
            start: DEFAULT_START,
            initial_facing: Facing::Right,
            render_speed: DEFAULT_RENDER_SPEED,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            background: Colour::WHITE,
            trace_style: LineStyle::TRACE,
            curve_style: LineStyle::CURVE,
        }
    }
}

impl DragonConfig {
    pub fn validate(&self) -> Result<(), DragonError> {
        turns_for_iterations(self.iterations)?;

        if !(self.segment_length.is_finite() && self.segment_length > 0.0) {
            return Err(DragonError::InvalidSegmentLength {
                length: self.segment_length,
            });
        }

        if self.render_speed == 0 {
            return Err(DragonError::ZeroRenderSpeed);
        }

        Ok(())
    }

    pub fn pixel_rect(&self) -> Result<PixelRect, PixelRectError> {
        PixelRect::with_size(self.width, self.height)
    }

    /// Blank canvas in the background colour.
    pub fn blank_canvas(&self) -> Result<PixelBuffer, PixelRectError> {
        Ok(PixelBuffer::filled(self.pixel_rect()?, self.background))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = DragonConfig::default();

        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.iterations, 12);
        assert_eq!(config.start, Point::new(600.0, 400.0));
        assert_eq!(config.render_speed, 3);
    }

    #[test]
    fn test_zero_iterations_is_invalid() {
        let config = DragonConfig {
            iterations: 0,
            ..DragonConfig::default()
        };

        assert_eq!(config.validate(), Err(DragonError::ZeroIterations));
    }

    #[test]
    fn test_zero_render_speed_is_invalid() {
        let config = DragonConfig {
            render_speed: 0,
            ..DragonConfig::default()
        };

        assert_eq!(config.validate(), Err(DragonError::ZeroRenderSpeed));
    }

    #[test]
    fn test_segment_length_must_be_positive_and_finite() {
        for length in [0.0, -6.0, f64::INFINITY] {
            let config = DragonConfig {
                segment_length: length,
                ..DragonConfig::default()
            };

            assert_eq!(
                config.validate(),
                Err(DragonError::InvalidSegmentLength { length })
            );
        }

        let nan = DragonConfig {
            segment_length: f64::NAN,
            ..DragonConfig::default()
        };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn test_blank_canvas_uses_background() {
        let config = DragonConfig {
            width: 4,
            height: 3,
            ..DragonConfig::default()
        };

        let canvas = config.blank_canvas().unwrap();

        assert_eq!(canvas.count_colour(Colour::WHITE), 12);
    }

    #[test]
    fn test_blank_canvas_rejects_degenerate_size() {
        let config = DragonConfig {
            width: 1,
            ..DragonConfig::default()
        };

        assert!(config.blank_canvas().is_err());
    }
}
