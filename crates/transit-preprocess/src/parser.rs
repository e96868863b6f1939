//! Light-curve text parsing
//!
//! Input is comma-separated text with a single header row. Only the first
//! two columns are read, as `time` and `flux`; any further columns (flux
//! errors, quality flags) are ignored. Rows that do not yield two finite
//! numbers are skipped silently. Deciding whether a file is a light curve
//! at all (rather than a catalog export) is the caller's job.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, instrument};
use transit_core::{Error, Result, Sample, Series};

/// Parse light-curve text held in memory
///
/// # Examples
///
/// ```rust
/// use transit_preprocess::parse_light_curve;
///
/// let mut text = String::from("time,flux\n");
/// for i in 0..12 {
///     text.push_str(&format!("{},{}\n", i as f64 * 0.02, 1000.0));
/// }
/// text.push_str("oops,1000\n");
///
/// let series = parse_light_curve(&text).unwrap();
/// assert_eq!(series.len(), 12);
/// ```
pub fn parse_light_curve(text: &str) -> Result<Series> {
    parse_reader(text.as_bytes())
}

/// Parse a light-curve file from disk
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Series> {
    let file = File::open(path.as_ref())?;
    parse_reader(file)
}

/// Parse light-curve text from any reader
#[instrument(level = "debug", skip(reader))]
pub fn parse_reader<R: Read>(reader: R) -> Result<Series> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut samples = Vec::new();
    let mut dropped = 0usize;

    for record in rdr.records() {
        let record = match record {
            Ok(record) => record,
            Err(e) => match e.into_kind() {
                csv::ErrorKind::Io(io) => return Err(Error::Io(io)),
                _ => {
                    dropped += 1;
                    continue;
                }
            },
        };

        match parse_row(&record) {
            Some(sample) => samples.push(sample),
            None => dropped += 1,
        }
    }

    debug!(kept = samples.len(), dropped, "parsed light-curve rows");
    Series::validated(samples)
}

fn parse_row(record: &csv::StringRecord) -> Option<Sample> {
    let time = record.get(0)?.parse::<f64>().ok()?;
    let flux = record.get(1)?.parse::<f64>().ok()?;
    let sample = Sample::new(time, flux);
    sample.is_finite().then_some(sample)
}
