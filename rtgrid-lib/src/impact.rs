use rtgrid_data::{GridHints, Sample};

use crate::error::{GridError, Result};
use crate::generate::{Axis, generate_sample};
use crate::report::Reporter;

/// Derive the impact-parameter grid by inverting the built radius grid.
///
/// A passthrough radius grid (spacing `0`: single-layer or kept-reference
/// sampling) inverts by reversal. A resampled radius grid goes through the
/// generator with a negated-spacing, swapped-bounds hint and reference
/// anchored to the radius extremes, so the grid descends from the outermost
/// radius inward.
pub fn build_impact(
    hints: &GridHints,
    radius: &Sample,
    rep: &dyn Reporter,
) -> Result<(Sample, u32)> {
    if radius.spacing == 0.0 {
        let ips = Sample {
            cgs_factor: radius.cgs_factor,
            start: radius.end,
            end: radius.start,
            spacing: 0.0,
            oversample: 0,
            values: radius.values.iter().rev().copied().collect(),
        };
        return Ok((ips, 0));
    }

    // The hint is validated in its native, ascending orientation.
    if hints.impact.end < hints.impact.start {
        return Err(GridError::InvalidRange {
            axis: Axis::ImpactParameter,
            start: hints.impact.start,
            end: hints.impact.end,
            spacing: hints.impact.spacing,
        });
    }

    let hint = Sample::hinted(
        hints.impact.cgs_factor,
        hints.impact.end,
        hints.impact.start,
        -hints.impact.spacing,
        hints.impact.oversample,
    );
    let reference = Sample::hinted(
        radius.cgs_factor,
        radius.values[radius.values.len() - 1],
        radius.values[0],
        -radius.spacing,
        radius.oversample,
    );

    generate_sample(Axis::ImpactParameter, &hint, &reference, rep)
}
