use rtgrid_data::{GridHints, Sample};

use crate::error::{GridError, Result};
use crate::generate::{Axis, generate_sample};
use crate::report::Reporter;

/// Build the temperature grid. Temperature is always hint-defined: the unit
/// factor and oversampling are fixed at one and there is no reference-array
/// fallback.
pub fn build_temperature(hints: &GridHints, rep: &dyn Reporter) -> Result<(Sample, u32)> {
    if hints.temperature.end < hints.temperature.start {
        return Err(GridError::InvalidRange {
            axis: Axis::Temperature,
            start: hints.temperature.start,
            end: hints.temperature.end,
            spacing: hints.temperature.spacing,
        });
    }

    let hint = Sample::hinted(
        1.0,
        hints.temperature.start,
        hints.temperature.end,
        hints.temperature.spacing,
        1,
    );
    let reference = Sample {
        cgs_factor: 1.0,
        oversample: 1,
        ..Sample::default()
    };

    generate_sample(Axis::Temperature, &hint, &reference, rep)
}
