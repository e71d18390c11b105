use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GameError {
    #[error("grid of {width}x{height} cells has no room for a snake and its food")]
    GridTooSmall { width: usize, height: usize },
    #[error("grid of {width}x{height} cells is larger than {max} cells")]
    GridTooLarge {
        width: usize,
        height: usize,
        max: usize,
    },
    #[error("time step must be a positive number of seconds, got {0}")]
    InvalidTimeStep(f32),
    #[error("world size must be positive, got {width}x{height}")]
    InvalidWorldSize { width: f32, height: f32 },
}

pub type Result<T> = core::result::Result<T, GameError>;
