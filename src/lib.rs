//! Samples a fixed Lissajous curve and stores the points as
//! tab-separated text.

pub mod curve;
pub mod exit_codes;
pub mod logging;
pub mod writer;

pub use curve::{sample, samples, Sample};
pub use writer::{format_sample, write_file, write_samples};

/// File the samples are written to, relative to the working directory.
pub const OUTPUT_FILE: &str = "lissajous_data.txt";

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
