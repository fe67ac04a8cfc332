use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Landmark document error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(
        "Incomplete landmark set: {recorded} of {required} placed, landmark {missing} ({name}) is missing"
    )]
    IncompleteSet {
        recorded: usize,
        required: usize,
        missing: usize,
        name: &'static str,
    },

    #[error("Landmark index {index} out of range 1..={max}")]
    OutOfRange { index: usize, max: usize },

    #[error(
        "Degenerate geometry in metric '{metric}': {length} between landmarks {a} and {b} is zero"
    )]
    DegenerateGeometry {
        metric: &'static str,
        length: &'static str,
        a: usize,
        b: usize,
    },

    #[error("Landmark set already holds all {0} landmarks")]
    SetFull(usize),

    #[error("Landmark {index} has a non-finite coordinate ({x}, {y})")]
    NonFiniteCoordinate { index: usize, x: f64, y: f64 },

    #[error("Invalid image dimensions {width}x{height}")]
    InvalidImageSize { width: u32, height: u32 },
}

impl Error {
    /// Whether the operator can fix this by adjusting or adding points.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::IncompleteSet { .. }
                | Error::DegenerateGeometry { .. }
                | Error::NonFiniteCoordinate { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
