#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// One-dimensional sampling axis plus its generation metadata.
///
/// A `Sample` is also the carrier for user hints and reference samplings:
/// a hint leaves unset numeric fields at `0` and `values` empty, and the
/// grid generator substitutes from the reference accordingly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Multiplicative conversion from the axis's native unit to the
    /// internal centimeter-based unit.
    pub cgs_factor: f64,
    /// Initial bound, native units.
    pub start: f64,
    /// Final bound, native units. Named `end` because `final` is reserved.
    pub end: f64,
    /// Nominal step before oversampling; `0` means "explicit value array".
    pub spacing: f64,
    /// Point-density multiplier; `0` only on fixed-array paths.
    pub oversample: u32,
    /// Materialized samples; empty until a builder fills them.
    pub values: Vec<f64>,
}

impl Sample {
    /// Hint/reference constructor, fields in declaration order.
    pub fn hinted(cgs_factor: f64, start: f64, end: f64, spacing: f64, oversample: u32) -> Self {
        Sample {
            cgs_factor,
            start,
            end,
            spacing,
            oversample,
            values: Vec::new(),
        }
    }

    pub fn count(&self) -> usize {
        self.values.len()
    }

    pub fn is_materialized(&self) -> bool {
        !self.values.is_empty()
    }

    /// Drop the backing array and metadata ahead of a rebuild.
    pub fn release(&mut self) {
        *self = Sample::default();
    }
}

/// Fixed header record written ahead of a sample's value payload.
///
/// `count` is signed so that a corrupt negative count is representable on
/// restore; in a well-formed stream it equals the payload length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleRecord {
    pub cgs_factor: f64,
    pub start: f64,
    pub end: f64,
    pub spacing: f64,
    pub oversample: u32,
    pub count: i64,
    pub has_values: bool,
}

/// Per-molecule profile over the reference radius axis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MoleculeProfile {
    pub name: String,
    /// Number density per layer.
    pub density: Vec<f64>,
    /// Abundance (mixing ratio) per layer.
    pub abundance: Vec<f64>,
}

/// Reference atmosphere as produced by the (external) atmosphere reader.
///
/// All per-layer arrays are indexed by the layers of `radius`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AtmosphereData {
    pub radius: Sample,
    pub temperature: Vec<f64>,
    pub pressure: Vec<f64>,
    pub mean_molar_mass: Vec<f64>,
    pub temperature_factor: f64,
    pub pressure_factor: f64,
    pub molecules: Vec<MoleculeProfile>,
}

/// One spectral database: partition functions tabulated per isotope over a
/// common temperature axis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartitionDatabase {
    pub name: String,
    pub temperatures: Vec<f64>,
    /// One inner vector per isotope, over `temperatures`.
    pub partition_functions: Vec<Vec<f64>>,
}

/// Line-list data as produced by the (external) line reader.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineData {
    /// Lowest temperature the line data supports.
    pub tmin: f64,
    /// Highest temperature the line data supports.
    pub tmax: f64,
    pub databases: Vec<PartitionDatabase>,
}

/// How the radius builder treats the reference radius axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RadiusSampling {
    /// Resample to an equispaced radius axis.
    #[default]
    Resample,
    /// Keep the reference sampling verbatim.
    KeepReference,
}

/// User-supplied partial grid specifications, one hint per axis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GridHints {
    pub wavenumber: Sample,
    pub wavelength: Sample,
    pub radius: Sample,
    pub radius_mode: RadiusSampling,
    pub impact: Sample,
    pub temperature: Sample,
}
