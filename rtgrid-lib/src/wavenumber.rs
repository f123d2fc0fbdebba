use rtgrid_data::{GridHints, Sample};

use crate::error::{GridError, Result};
use crate::generate::{Axis, generate_sample_from_ref};
use crate::report::Reporter;

/// Wavenumber grids plus their wavelength counterpart.
#[derive(Debug, Clone, Default)]
pub struct WavenumberGrids {
    /// Oversampled wavenumber grid, cm⁻¹.
    pub fine: Sample,
    /// Unit-oversample wavenumber grid sharing bounds and spacing, cm⁻¹.
    pub coarse: Sample,
    /// Wavelength counterpart of the grid bounds, cm; diagnostics only.
    pub wavelength: Sample,
    /// Exact divisors of the oversampling factor, ascending. Downstream
    /// decimation schemes pick their stride from this list.
    pub divisors: Vec<u32>,
}

/// Build the wavenumber sampling from direct wavenumber hints, or by
/// inverting wavelength hints (`wavenumber = 1/wavelength`) where the direct
/// hint is unset. Bounds are reconciled into cm⁻¹ before generation.
pub fn build_wavenumber(hints: &GridHints, rep: &dyn Reporter) -> Result<WavenumberGrids> {
    let wn = &hints.wavenumber;
    let wl = &hints.wavelength;
    let mut reference = Sample::default();

    // Initial wavenumber bound: direct hint first, else final wavelength.
    if wn.start > 0.0 {
        if wn.cgs_factor <= 0.0 {
            return Err(GridError::InvalidUnitsFactor {
                axis: Axis::Wavenumber,
                factor: wn.cgs_factor,
            });
        }
        reference.start = wn.start * wn.cgs_factor;
        rep.report(
            1,
            &format!(
                "initial wavenumber: {} = {} * {}",
                reference.start, wn.start, wn.cgs_factor
            ),
        );
    } else if wl.end > 0.0 {
        if wl.cgs_factor <= 0.0 {
            return Err(GridError::InvalidUnitsFactor {
                axis: Axis::Wavelength,
                factor: wl.cgs_factor,
            });
        }
        reference.start = 1.0 / (wl.end * wl.cgs_factor);
    } else {
        return Err(GridError::MissingBounds {
            axis: Axis::Wavenumber,
        });
    }

    // Final wavenumber bound: direct hint first, else initial wavelength.
    if wn.end > 0.0 {
        if wn.cgs_factor <= 0.0 {
            return Err(GridError::InvalidUnitsFactor {
                axis: Axis::Wavenumber,
                factor: wn.cgs_factor,
            });
        }
        reference.end = wn.end * wn.cgs_factor;
    } else if wl.start > 0.0 {
        if wl.cgs_factor <= 0.0 {
            return Err(GridError::InvalidUnitsFactor {
                axis: Axis::Wavelength,
                factor: wl.cgs_factor,
            });
        }
        reference.end = 1.0 / (wl.start * wl.cgs_factor);
    } else {
        return Err(GridError::MissingBounds {
            axis: Axis::Wavenumber,
        });
    }

    if wn.spacing <= 0.0 {
        return Err(GridError::MissingSpacing {
            axis: Axis::Wavenumber,
        });
    }
    reference.spacing = wn.spacing;
    // The internal wavenumber unit is cm⁻¹.
    reference.cgs_factor = 1.0;
    reference.oversample = wn.oversample;

    let fine = generate_sample_from_ref(Axis::Wavenumber, &reference, rep)?;
    reference.oversample = 1;
    let coarse = generate_sample_from_ref(Axis::Wavenumber, &reference, rep)?;

    let divisors = divisors(fine.oversample);
    rep.report(
        20,
        &format!(
            "{} divisors of the oversampling factor ({})",
            divisors.len(),
            fine.oversample
        ),
    );

    let wavelength = Sample::hinted(1.0, 1.0 / reference.end, 1.0 / reference.start, 0.0, 0);

    Ok(WavenumberGrids {
        fine,
        coarse,
        wavelength,
        divisors,
    })
}

/// Ascending exact divisors of `n`.
pub fn divisors(n: u32) -> Vec<u32> {
    (1..=n).filter(|d| n % d == 0).collect()
}
