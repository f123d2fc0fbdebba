use std::io::{self, Write};

use rtgrid_data::{Sample, SampleRecord};

use crate::error::{GridError, Result};
use crate::pipeline::SamplingPipeline;

/// Stored counts above this are treated as suspicious on restore.
pub const MAX_RESTORE_COUNT: i64 = 1_000_000;

/// Non-fatal advisory raised by a restore.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    /// The header count exceeded [`MAX_RESTORE_COUNT`]; the value payload
    /// was left unread.
    SuspiciousCount(i64),
}

/// Result of restoring one sample from a byte stream.
#[derive(Debug)]
pub struct Restored<'a> {
    pub sample: Sample,
    pub advisory: Option<Advisory>,
    /// Unconsumed remainder, so consecutive samples restore sequentially.
    pub rest: &'a [u8],
}

/// Write one sample: a postcard-encoded header record followed by `count`
/// native-endian f64 values.
///
/// The layout is a private interchange format — readers must match this
/// writer exactly.
pub fn save_sample<W: Write>(out: &mut W, sample: &Sample) -> Result<()> {
    let record = SampleRecord {
        cgs_factor: sample.cgs_factor,
        start: sample.start,
        end: sample.end,
        spacing: sample.spacing,
        oversample: sample.oversample,
        count: sample.values.len() as i64,
        has_values: !sample.values.is_empty(),
    };
    let header = postcard::to_allocvec(&record)
        .map_err(|e| GridError::CorruptData(format!("cannot encode sample header: {e}")))?;
    out.write_all(&header)?;
    for value in &sample.values {
        out.write_all(&value.to_ne_bytes())?;
    }
    Ok(())
}

/// Restore one sample from `bytes`.
///
/// A negative stored count is corrupt. A count above [`MAX_RESTORE_COUNT`]
/// is suspicious but not fatal: the header fields are returned with an
/// [`Advisory::SuspiciousCount`] and the values left empty.
pub fn restore_sample(bytes: &[u8]) -> Result<Restored<'_>> {
    let (record, rest): (SampleRecord, &[u8]) = postcard::take_from_bytes(bytes)
        .map_err(|e| GridError::CorruptData(format!("cannot decode sample header: {e}")))?;

    if record.count < 0 {
        return Err(GridError::CorruptData(format!(
            "negative stored count ({})",
            record.count
        )));
    }
    if record.has_values != (record.count > 0) {
        return Err(GridError::CorruptData(format!(
            "value-presence flag ({}) disagrees with stored count ({})",
            record.has_values, record.count
        )));
    }

    let mut sample = Sample {
        cgs_factor: record.cgs_factor,
        start: record.start,
        end: record.end,
        spacing: record.spacing,
        oversample: record.oversample,
        values: Vec::new(),
    };

    if record.count > MAX_RESTORE_COUNT {
        return Ok(Restored {
            sample,
            advisory: Some(Advisory::SuspiciousCount(record.count)),
            rest,
        });
    }

    let count = record.count as usize;
    let need = count * size_of::<f64>();
    if rest.len() < need {
        return Err(GridError::CorruptData(format!(
            "value payload truncated: need {need} bytes, have {}",
            rest.len()
        )));
    }
    sample.values = rest[..need]
        .chunks_exact(size_of::<f64>())
        .map(|chunk| {
            let mut buf = [0u8; size_of::<f64>()];
            buf.copy_from_slice(chunk);
            f64::from_ne_bytes(buf)
        })
        .collect();

    Ok(Restored {
        sample,
        advisory: None,
        rest: &rest[need..],
    })
}

/// Show/hide choices for one dumped sample block.
#[derive(Debug, Clone, Copy)]
pub struct DumpOptions {
    pub oversample: bool,
    pub values: bool,
}

/// Human-readable dump of one sample.
pub fn print_sample<W: Write>(
    out: &mut W,
    sample: &Sample,
    label: &str,
    opts: DumpOptions,
) -> Result<()> {
    writeln!(out, "############################")?;
    writeln!(out, "   {label:<12} Sampling")?;
    writeln!(out, "----------------------------")?;
    writeln!(out, "Factor to cgs units: {}", sample.cgs_factor)?;
    writeln!(out, "Initial value: {}", sample.start)?;
    writeln!(out, "Final value: {}", sample.end)?;
    writeln!(out, "Spacing: {}", sample.spacing)?;
    if opts.oversample {
        writeln!(out, "Oversample: {}", sample.oversample)?;
    }
    writeln!(out, "Number of elements: {}", sample.values.len())?;
    if opts.values {
        write!(out, "Values:")?;
        for value in &sample.values {
            write!(out, " {value:12.8}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Write the per-axis diagnostic blocks for a pipeline. A path of `None` or
/// `-` selects standard output.
pub fn write_sample_info(pipeline: &SamplingPipeline, path: Option<&str>) -> Result<()> {
    match path {
        Some(p) if p != "-" => {
            let mut file = std::fs::File::create(p)?;
            dump_all(&mut file, pipeline)
        }
        _ => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            dump_all(&mut lock, pipeline)
        }
    }
}

fn dump_all<W: Write>(out: &mut W, p: &SamplingPipeline) -> Result<()> {
    let no_values = DumpOptions {
        oversample: true,
        values: false,
    };
    print_sample(out, &p.wavenumber.coarse, "Wavenumber", no_values)?;
    print_sample(out, &p.wavenumber.wavelength, "Wavelength", no_values)?;
    print_sample(
        out,
        &p.radius,
        "Radius",
        DumpOptions {
            oversample: false,
            values: true,
        },
    )?;
    print_sample(
        out,
        &p.impact,
        "Impact parameter",
        DumpOptions {
            oversample: true,
            values: true,
        },
    )?;
    Ok(())
}
