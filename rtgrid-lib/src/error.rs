use std::fmt;
use std::io;

use crate::generate::Axis;

#[derive(Debug)]
pub enum GridError {
    /// Accepted bounds do not span an interval in the direction of the spacing.
    InvalidRange {
        axis: Axis,
        start: f64,
        end: f64,
        spacing: f64,
    },
    /// Neither the hint nor the reference supplied a spacing or a fixed array.
    MissingSpacing { axis: Axis },
    /// Neither the hint nor the reference supplied a positive oversampling.
    MissingOversample { axis: Axis },
    /// No usable bound was supplied on either the direct or the inverted axis.
    MissingBounds { axis: Axis },
    InvalidUnitsFactor { axis: Axis, factor: f64 },
    /// Interpolation query outside the tabulated domain.
    OutOfDomain { x: f64, min: f64, max: f64 },
    /// Non-positive interval width in a knot or quadrature spacing array.
    DegenerateSpacing { index: usize, value: f64 },
    TooFewKnots { count: usize },
    CorruptData(String),
    /// Fatal: downstream line-strength lookups are undefined past the bounds.
    TemperatureOutOfBounds {
        layer: usize,
        temperature: f64,
        min: f64,
        max: f64,
    },
    AllocationFailure { axis: Axis, requested: usize },
    /// Pipeline stage invoked before its prerequisite completed.
    StageOrder {
        stage: &'static str,
        requires: &'static str,
    },
    Io(io::Error),
}

pub type Result<T> = std::result::Result<T, GridError>;

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRange {
                axis,
                start,
                end,
                spacing,
            } => write!(
                f,
                "initial accepted value ({start}) is greater or equal than final accepted \
                 value ({end}) in {axis} sampling (spacing {spacing})"
            ),
            Self::MissingSpacing { axis } => write!(
                f,
                "spacing and fixed point count were both unset for {axis} sampling"
            ),
            Self::MissingOversample { axis } => {
                write!(f, "no valid oversampling for {axis} sampling")
            }
            Self::MissingBounds { axis } => {
                write!(f, "no usable bounds were provided for {axis} sampling")
            }
            Self::InvalidUnitsFactor { axis, factor } => {
                write!(f, "units factor for {axis} sampling is not positive ({factor})")
            }
            Self::OutOfDomain { x, min, max } => write!(
                f,
                "interpolation point {x} lies outside the tabulated domain [{min}, {max}]"
            ),
            Self::DegenerateSpacing { index, value } => {
                write!(f, "non-positive interval width ({value}) at index {index}")
            }
            Self::TooFewKnots { count } => {
                write!(f, "cubic spline needs at least two knots, got {count}")
            }
            Self::CorruptData(msg) => write!(f, "corrupt sample data: {msg}"),
            Self::TemperatureOutOfBounds {
                layer,
                temperature,
                min,
                max,
            } => write!(
                f,
                "layer {layer} temperature ({temperature} K) is outside the allowed \
                 line-data range [{min} K, {max} K]"
            ),
            Self::AllocationFailure { axis, requested } => {
                write!(f, "cannot allocate {requested} samples for {axis} sampling")
            }
            Self::StageOrder { stage, requires } => {
                write!(f, "{stage} called before {requires}")
            }
            Self::Io(e) => write!(f, "i/o error: {e}"),
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for GridError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
