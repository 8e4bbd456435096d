//! Error types.
//!
//! Every failure is a validation error raised where it is detected;
//! nothing is retried.

use thiserror::Error;

/// Result type alias for colormap operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while resolving options, building a ramp or
/// applying it to a surface.
#[derive(Debug, Error)]
pub enum Error {
    /// The color range is empty or reversed.
    #[error("invalid range: low ({low}) must be less than high ({high})")]
    Range { low: f64, high: f64 },

    /// The white point is not strictly inside the range.
    #[error("white point {white} must lie strictly between {low} and {high}")]
    WhitePoint { white: f64, low: f64, high: f64 },

    /// A color does not have exactly three channels.
    #[error("{option} must be a 3-element color [r, g, b], got {len} element(s)")]
    ColorShape { option: &'static str, len: usize },

    /// A color channel is outside \[0, 1\].
    #[error("{option} channels must be in [0, 1], got {value}")]
    ColorChannel { option: &'static str, value: f64 },

    /// The number of levels is not an integer in `1 ..= MAX_LEVELS`.
    #[error("level must be a positive integer at most 65536, got {0}")]
    Level(f64),

    /// The log warp factor is zero, or too large for `10^f` to be finite.
    #[error("log factor must be non-zero with 10^factor finite, got {0}")]
    LogFactor(f64),

    /// An option keyword nobody knows.
    #[error("unknown option “{0}”")]
    UnknownOption(String),

    /// An option that requires a value is last in the list.
    #[error("option “{0}” requires a value")]
    MissingValue(&'static str),

    /// An option value has the wrong type.
    #[error("option “{option}” expects {expected}, got {got}")]
    InvalidValue {
        option: &'static str,
        expected: &'static str,
        got: String,
    },

    /// A number follows another number with no option between them.
    #[error("ambiguous argument {value} at position {position}: \
             expected an option name")]
    Ambiguous { value: String, position: usize },

    /// The same option was given twice.
    #[error("option “{0}” given more than once")]
    Duplicate(&'static str),

    /// The range bounds are missing or not numbers.
    #[error("expected numeric low and high bounds, got {0}")]
    Bounds(String),

    /// The requested outputs cannot be produced with these options.
    #[error("incompatible outputs: {0}")]
    Outputs(&'static str),

    /// Failed to write a legend.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an InvalidValue error.
    pub fn invalid_value(option: &'static str, expected: &'static str,
                         got: impl Into<String>) -> Self {
        Self::InvalidValue { option, expected, got: got.into() }
    }
}
