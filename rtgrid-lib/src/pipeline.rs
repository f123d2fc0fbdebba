use rtgrid_data::{AtmosphereData, GridHints, LineData, Sample};

use crate::error::{GridError, Result};
use crate::impact::build_impact;
use crate::radius::{InterpolatedAtmosphere, build_radius};
use crate::report::Reporter;
use crate::temperature::build_temperature;
use crate::wavenumber::{WavenumberGrids, build_wavenumber};

pub const STAGE_WAVENUMBER: u32 = 0x1;
pub const STAGE_RADIUS: u32 = 0x2;
pub const STAGE_IMPACT: u32 = 0x4;
pub const STAGE_TEMPERATURE: u32 = 0x8;

/// Owner of one sampling grid per axis for the lifetime of a pipeline run.
///
/// Builders run in dependency order: the impact-parameter builder requires
/// the radius builder; the wavenumber and temperature builders are
/// independent. Each instance owns disjoint state, so independent pipelines
/// may run in parallel.
#[derive(Debug, Default)]
pub struct SamplingPipeline {
    pub hints: GridHints,
    pub wavenumber: WavenumberGrids,
    pub radius: Sample,
    pub impact: Sample,
    pub temperature: Sample,
    pub atmosphere: InterpolatedAtmosphere,
    progress: u32,
}

impl SamplingPipeline {
    pub fn new(hints: GridHints) -> Self {
        SamplingPipeline {
            hints,
            ..Default::default()
        }
    }

    /// Bitmask of completed stages (`STAGE_*`).
    pub fn progress(&self) -> u32 {
        self.progress
    }

    pub fn build_wavenumber(&mut self, rep: &dyn Reporter) -> Result<()> {
        self.wavenumber = build_wavenumber(&self.hints, rep)?;
        self.progress |= STAGE_WAVENUMBER;
        Ok(())
    }

    /// Build the radius grid and resample the atmosphere onto it.
    ///
    /// On a rebuild, the previously interpolated per-layer arrays and the
    /// radius and impact-parameter grids are released first.
    pub fn build_radius(
        &mut self,
        atm: &AtmosphereData,
        lines: &LineData,
        rep: &dyn Reporter,
    ) -> Result<u32> {
        if self.progress & STAGE_RADIUS != 0 {
            self.atmosphere = InterpolatedAtmosphere::default();
            self.radius.release();
            self.impact.release();
            self.progress &= !(STAGE_RADIUS | STAGE_IMPACT);
        }
        let out = build_radius(&self.hints, atm, lines, rep)?;
        self.radius = out.radius;
        self.atmosphere = out.atmosphere;
        self.progress |= STAGE_RADIUS;
        Ok(out.flags)
    }

    pub fn build_impact(&mut self, rep: &dyn Reporter) -> Result<u32> {
        if self.progress & STAGE_RADIUS == 0 {
            return Err(GridError::StageOrder {
                stage: "build_impact",
                requires: "build_radius",
            });
        }
        let (ips, flags) = build_impact(&self.hints, &self.radius, rep)?;
        self.impact = ips;
        self.progress |= STAGE_IMPACT;
        Ok(flags)
    }

    pub fn build_temperature(&mut self, rep: &dyn Reporter) -> Result<u32> {
        let (temp, flags) = build_temperature(&self.hints, rep)?;
        self.temperature = temp;
        self.progress |= STAGE_TEMPERATURE;
        Ok(flags)
    }
}
