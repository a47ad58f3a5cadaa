#[derive(Debug, Clone, Copy, PartialEq)]
/// Represents the ways a sampling range can be rejected.
pub enum SampleError {
    /// The step is zero, negative, or not finite.
    InvalidStep {
        /// The rejected step.
        step: f64,
    },
    /// One of the range bounds is infinite or NaN.
    NonFiniteBound {
        /// Lower bound of the range.
        start: f64,
        /// Upper bound of the range.
        end:   f64,
    },
    /// The range would produce more points than a single sampling allows.
    TooManyPoints {
        /// Number of steps between `start` and `end`.
        intervals: f64,
        /// The maximum number of points.
        limit:     usize,
    },
}

impl std::fmt::Display for SampleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidStep { step } => {
                write!(f, "Sampling step must be a positive finite number, got {step}.")
            },
            Self::NonFiniteBound { start, end } => {
                write!(f, "Sampling range bounds must be finite, got {start}..={end}.")
            },
            Self::TooManyPoints { intervals, limit } => write!(f,
                                                               "Sampling range spans {intervals} steps, more than the limit of {limit} points."),
        }
    }
}

impl std::error::Error for SampleError {}
