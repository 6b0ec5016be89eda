use std::{error::Error, fmt};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragonError {
    ZeroIterations,
    IterationsOverflow { iterations: u32, max_iterations: u32 },
    ZeroRenderSpeed,
    InvalidSegmentLength { length: f64 },
}

impl fmt::Display for DragonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroIterations => {
                write!(f, "Iterations must be greater than zero")
            }
            Self::IterationsOverflow {
                iterations,
                max_iterations,
            } => {
                write!(
                    f,
                    "{} iterations would overflow the turn count, maximum is {}",
                    iterations, max_iterations
                )
            }
            Self::ZeroRenderSpeed => {
                write!(f, "Render speed must be at least one segment per tick")
            }
            Self::InvalidSegmentLength { length } => {
                write!(f, "Segment length must be positive and finite, got {}", length)
            }
        }
    }
}

impl Error for DragonError {}
