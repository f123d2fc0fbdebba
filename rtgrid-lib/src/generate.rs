use std::fmt;

use rtgrid_data::Sample;

use crate::error::{GridError, Result};
use crate::report::Reporter;

/// Axis identity, used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Wavenumber,
    Wavelength,
    Radius,
    ImpactParameter,
    Temperature,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Wavenumber => "wavenumber",
            Self::Wavelength => "wavelength",
            Self::Radius => "radius",
            Self::ImpactParameter => "impact parameter",
            Self::Temperature => "temperature",
        })
    }
}

/// The initial bound was taken from the reference.
pub const SUBSTITUTED_INITIAL: u32 = 0x1;
/// The final bound was taken from the reference.
pub const SUBSTITUTED_FINAL: u32 = 0x2;

/// Tolerated ratio exceeding the final value without truncating the last bin.
const FINAL_EXCESS: f64 = 1e-8;

/// Hard ceiling on materialized point counts.
const MAX_COUNT: usize = 100_000_000;

/// Materialize a sampling axis from a user hint, falling back to a reference
/// sampling for every unset field.
///
/// Returns the built sample and a bitmask of which bounds were substituted
/// from the reference ([`SUBSTITUTED_INITIAL`], [`SUBSTITUTED_FINAL`]).
///
/// If neither side supplies a spacing but the reference carries a fixed
/// value array, that array is copied verbatim and oversampling is skipped —
/// with a warning, not an error, if the reference still advertises one.
pub fn generate_sample(
    axis: Axis,
    hint: &Sample,
    reference: &Sample,
    rep: &dyn Reporter,
) -> Result<(Sample, u32)> {
    let mut flags = 0u32;
    let mut samp = Sample::default();

    samp.cgs_factor = if hint.cgs_factor <= 0.0 {
        reference.cgs_factor
    } else {
        hint.cgs_factor
    };

    if hint.start <= 0.0 {
        samp.start = reference.start;
        rep.report(
            4,
            &format!(
                "using reference value {} [cgs] as the initial bound of {axis}",
                samp.start * samp.cgs_factor
            ),
        );
        flags |= SUBSTITUTED_INITIAL;
    } else {
        samp.start = hint.start;
    }

    if hint.end <= 0.0 {
        samp.end = reference.end;
        rep.report(
            4,
            &format!(
                "using reference value {} [cgs] as the final bound of {axis}",
                samp.end * samp.cgs_factor
            ),
        );
        flags |= SUBSTITUTED_FINAL;
    } else {
        samp.end = hint.end;
    }

    rep.report(
        21,
        &format!(
            "{axis} hint spacing: {}, reference fixed points: {}",
            hint.spacing,
            reference.values.len()
        ),
    );

    if hint.spacing == 0.0 {
        if reference.spacing == 0.0 && reference.values.is_empty() {
            return Err(GridError::MissingSpacing { axis });
        }
        if reference.spacing != 0.0 {
            samp.spacing = reference.spacing;
        } else {
            // Fixed reference array: adopt it verbatim, no oversampling.
            if flags != 0 {
                rep.report(
                    0,
                    &format!(
                        "fixed array of length {} referenced for {axis} sampling, but the \
                         initial ({} -> {}) or final ({} -> {}) bounds might have been modified",
                        reference.values.len(),
                        reference.start,
                        samp.start,
                        reference.end,
                        samp.end
                    ),
                );
            }
            samp.spacing = 0.0;
            samp.values = reference.values.clone();
            if reference.oversample != 0 {
                rep.report(
                    0,
                    &format!(
                        "fixed sampling array of length {} was referenced for {axis}, \
                         ignoring the oversampling ({}) also given",
                        samp.values.len(),
                        reference.oversample
                    ),
                );
            }
            samp.oversample = 0;
            return Ok((samp, flags));
        }
    } else {
        samp.spacing = hint.spacing;
    }

    materialize(axis, &mut samp, hint.oversample, reference.oversample, rep)?;
    Ok((samp, flags))
}

/// One-argument variant for axes whose bounds are never user-hintable: the
/// reference supplies everything.
pub fn generate_sample_from_ref(
    axis: Axis,
    reference: &Sample,
    rep: &dyn Reporter,
) -> Result<Sample> {
    let mut samp = Sample::default();
    samp.cgs_factor = reference.cgs_factor;
    samp.start = reference.start;
    samp.end = reference.end;

    if samp.end < samp.start {
        return Err(GridError::InvalidRange {
            axis,
            start: samp.start,
            end: samp.end,
            spacing: reference.spacing,
        });
    }

    rep.report(
        21,
        &format!("{axis} reference spacing: {}", reference.spacing),
    );
    if reference.spacing == 0.0 {
        return Err(GridError::MissingSpacing { axis });
    }
    samp.spacing = reference.spacing;

    materialize(axis, &mut samp, reference.oversample, 0, rep)?;
    Ok(samp)
}

/// Shared tail of both generator forms: range check, point count,
/// oversampling, value fill, final-point consistency warning.
fn materialize(
    axis: Axis,
    samp: &mut Sample,
    hint_oversample: u32,
    ref_oversample: u32,
    rep: &dyn Reporter,
) -> Result<()> {
    // The range must extend in the direction implied by the spacing sign.
    if (samp.end <= samp.start && samp.spacing > 0.0)
        || (samp.end >= samp.start && samp.spacing < 0.0)
    {
        return Err(GridError::InvalidRange {
            axis,
            start: samp.start,
            end: samp.end,
            spacing: samp.spacing,
        });
    }

    let excess = if samp.spacing < 0.0 {
        -FINAL_EXCESS
    } else {
        FINAL_EXCESS
    };
    // Truncating count with a small overshoot allowance so accumulated
    // rounding does not drop the last bin.
    let mut count = (((1.0 + excess) * samp.end - samp.start) / samp.spacing + 1.0) as i64;
    if count < 0 {
        count = -count;
    }

    samp.oversample = if hint_oversample > 0 {
        hint_oversample
    } else if ref_oversample > 0 {
        ref_oversample
    } else {
        return Err(GridError::MissingOversample { axis });
    };

    let total = (count - 1) * i64::from(samp.oversample) + 1;
    if total <= 0 || total as usize > MAX_COUNT {
        return Err(GridError::AllocationFailure {
            axis,
            requested: total.max(0) as usize,
        });
    }
    let total = total as usize;
    let osd = samp.spacing / f64::from(samp.oversample);

    let mut values = vec![0.0; total];
    values[0] = samp.start;
    for (k, v) in values.iter_mut().enumerate().skip(1) {
        *v = samp.start + k as f64 * osd;
    }
    samp.values = values;

    if samp.start != 0.0 && samp.values[total - 1] != samp.end {
        rep.report(
            2,
            &format!(
                "final sampled value ({}) of the {total} points doesn't coincide exactly \
                 with the requested value ({}) in {axis} sampling, pre-oversampling \
                 spacing {}",
                samp.values[total - 1], samp.end, samp.spacing
            ),
        );
    }
    Ok(())
}
