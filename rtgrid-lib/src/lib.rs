pub mod constants;
pub mod error;
pub mod generate;
pub mod impact;
pub mod persist;
pub mod pipeline;
pub mod radius;
pub mod report;
pub mod simpson;
pub mod spline;
pub mod temperature;
pub mod tridiag;
pub mod wavenumber;

pub use error::{GridError, Result};
pub use generate::{
    Axis, SUBSTITUTED_FINAL, SUBSTITUTED_INITIAL, generate_sample, generate_sample_from_ref,
};
pub use persist::{Advisory, Restored, restore_sample, save_sample, write_sample_info};
pub use pipeline::SamplingPipeline;
pub use radius::InterpolatedAtmosphere;
pub use report::{LogReporter, NullReporter, Reporter};
pub use wavenumber::WavenumberGrids;
pub use rtgrid_data;
