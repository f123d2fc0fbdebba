//! Generate a sampling grid from command-line bounds and dump it.
//!
//! Usage: gridgen <initial> <final> <spacing> <oversample>

use std::env;
use std::io;
use std::process::exit;

use rtgrid::persist::{DumpOptions, print_sample};
use rtgrid::report::Reporter;
use rtgrid::rtgrid_data::Sample;
use rtgrid::{Axis, generate_sample};

/// Prints every message at or below the configured level to stderr.
struct StderrReporter {
    verbosity: u32,
}

impl Reporter for StderrReporter {
    fn report(&self, level: u32, message: &str) {
        if level <= self.verbosity {
            eprintln!("{message}");
        }
    }
}

fn parse(arg: &str) -> f64 {
    arg.parse().unwrap_or_else(|e| {
        eprintln!("bad number '{arg}': {e}");
        exit(1);
    })
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() != 5 {
        eprintln!("usage: gridgen <initial> <final> <spacing> <oversample>");
        exit(1);
    }

    let hint = Sample::hinted(
        1.0,
        parse(&args[1]),
        parse(&args[2]),
        parse(&args[3]),
        parse(&args[4]) as u32,
    );
    let reporter = StderrReporter { verbosity: 4 };

    match generate_sample(Axis::Radius, &hint, &Sample::default(), &reporter) {
        Ok((sample, _)) => {
            let mut stdout = io::stdout();
            print_sample(
                &mut stdout,
                &sample,
                "Radius",
                DumpOptions {
                    oversample: true,
                    values: true,
                },
            )
            .unwrap_or_else(|e| {
                eprintln!("cannot write sample: {e}");
                exit(1);
            });
        }
        Err(e) => {
            eprintln!("grid generation failed: {e}");
            exit(1);
        }
    }
}
