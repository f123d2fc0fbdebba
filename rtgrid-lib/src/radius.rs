use rtgrid_data::{AtmosphereData, GridHints, LineData, RadiusSampling, Sample};

use crate::error::{GridError, Result};
use crate::generate::{Axis, generate_sample};
use crate::report::Reporter;
use crate::spline::splinterp;

/// Per-layer physical state resampled onto the built radius grid.
#[derive(Debug, Clone, Default)]
pub struct InterpolatedAtmosphere {
    pub temperature: Vec<f64>,
    pub pressure: Vec<f64>,
    pub mean_molar_mass: Vec<f64>,
    pub temperature_factor: f64,
    pub pressure_factor: f64,
    pub molecules: Vec<MoleculeState>,
    pub partition: Vec<DatabaseState>,
}

/// Per-molecule arrays over the built radius layers.
#[derive(Debug, Clone, Default)]
pub struct MoleculeState {
    pub name: String,
    pub density: Vec<f64>,
    pub abundance: Vec<f64>,
}

/// Per-database partition functions over the built radius layers.
#[derive(Debug, Clone, Default)]
pub struct DatabaseState {
    pub name: String,
    /// One inner vector per isotope.
    pub partition_functions: Vec<Vec<f64>>,
}

/// Output of the radius builder.
#[derive(Debug, Clone)]
pub struct RadiusOutput {
    pub radius: Sample,
    pub atmosphere: InterpolatedAtmosphere,
    /// Bound-substitution flags from the generator, `0` on passthrough paths.
    pub flags: u32,
}

/// Build the radius grid and resample every per-layer physical array onto it.
///
/// Three mutually exclusive paths: a single-layer atmosphere is copied
/// through, `RadiusSampling::KeepReference` keeps the atmospheric sampling
/// verbatim, and otherwise the generator produces an equispaced radius axis.
/// Interpolated layer temperatures outside the line-data bounds are fatal.
pub fn build_radius(
    hints: &GridHints,
    atm: &AtmosphereData,
    lines: &LineData,
    rep: &dyn Reporter,
) -> Result<RadiusOutput> {
    let reference = &atm.radius;

    let (radius, flags) = if reference.values.len() == 1 {
        rep.report(
            0,
            "single-layer atmosphere: radius hints are ignored and the layer is copied",
        );
        (passthrough(reference), 0)
    } else if hints.radius_mode == RadiusSampling::KeepReference {
        (passthrough(reference), 0)
    } else {
        generate_sample(Axis::Radius, &hints.radius, reference, rep)?
    };

    let ref_radius = &reference.values;
    let mut out = InterpolatedAtmosphere {
        temperature_factor: atm.temperature_factor,
        pressure_factor: atm.pressure_factor,
        ..Default::default()
    };

    out.temperature = resample_profile(ref_radius, &atm.temperature, &radius.values)?;
    out.pressure = resample_profile(ref_radius, &atm.pressure, &radius.values)?;
    out.mean_molar_mass = resample_profile(ref_radius, &atm.mean_molar_mass, &radius.values)?;

    // Out-of-range temperatures make downstream line-strength lookups
    // undefined, so this check is not recoverable.
    for (layer, &t) in out.temperature.iter().enumerate() {
        if t < lines.tmin || t > lines.tmax {
            return Err(GridError::TemperatureOutOfBounds {
                layer,
                temperature: t,
                min: lines.tmin,
                max: lines.tmax,
            });
        }
    }

    for molecule in &atm.molecules {
        out.molecules.push(MoleculeState {
            name: molecule.name.clone(),
            density: resample_profile(ref_radius, &molecule.density, &radius.values)?,
            abundance: resample_profile(ref_radius, &molecule.abundance, &radius.values)?,
        });
    }

    // Partition functions are tabulated over temperature, not radius:
    // evaluate each isotope's table at the new per-layer temperatures.
    for db in &lines.databases {
        let mut state = DatabaseState {
            name: db.name.clone(),
            partition_functions: Vec::with_capacity(db.partition_functions.len()),
        };
        for table in &db.partition_functions {
            state
                .partition_functions
                .push(resample_profile(&db.temperatures, table, &out.temperature)?);
        }
        out.partition.push(state);
    }

    Ok(RadiusOutput {
        radius,
        atmosphere: out,
        flags,
    })
}

fn passthrough(reference: &Sample) -> Sample {
    Sample {
        cgs_factor: reference.cgs_factor,
        start: reference.start,
        end: reference.end,
        spacing: 0.0,
        oversample: 0,
        values: reference.values.clone(),
    }
}

/// Spline-resample one tabulated profile; a single-knot table has nothing to
/// interpolate and is copied through.
fn resample_profile(xi: &[f64], yi: &[f64], xout: &[f64]) -> Result<Vec<f64>> {
    if xi.len() < 2 {
        return Ok(yi.to_vec());
    }
    splinterp(xi, yi, xout)
}
