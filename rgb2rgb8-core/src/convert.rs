//! Whole-palette conversion.
//!
//! Takes palette text as a single string and converts it line by line.
//! Lines that fail to parse are collected as diagnostics and skipped;
//! they never abort the run and never produce an output line.

use crate::{Error, Quantization, Rgb24};
use tracing::{debug, warn};

/// One successfully converted palette line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    /// 1-based input line number.
    pub line_number: usize,
    /// The color as parsed from the input line.
    pub source: Rgb24,
    /// The candidates considered for `source` and the chosen result.
    pub quantized: Quantization,
}

/// A skipped palette line and the reason it did not parse.
#[derive(Debug)]
pub struct Diagnostic {
    /// 1-based input line number.
    pub line_number: usize,
    pub error: Error,
}

/// The outcome of converting a whole palette.
///
/// Entries and diagnostics both keep input order.
#[derive(Debug, Default)]
pub struct Conversion {
    pub entries: Vec<Entry>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Conversion {
    /// Encodes the converted palette: one six-digit lowercase hex line
    /// per entry, each newline terminated, in input order.
    #[must_use]
    pub fn encoded_lines(&self) -> String {
        self.entries
            .iter()
            .map(|entry| format!("{}\n", entry.quantized.nearest))
            .collect()
    }
}

/// Converts every line of `input`.
///
/// Line numbers are 1-based. Windows line endings are accepted; the
/// trailing carriage return is not part of the line.
#[must_use]
pub fn convert_palette(input: &str) -> Conversion {
    let mut conversion = Conversion::default();

    for (index, line) in input.lines().enumerate() {
        let line_number = index + 1;

        match Rgb24::parse_line(line) {
            Ok(source) => {
                let quantized = source.quantize();

                debug!(
                    line = line_number,
                    raw = ?source.channels(),
                    high = ?quantized.high.channels(),
                    low = ?quantized.low.channels(),
                    nearest = ?quantized.nearest.channels(),
                    raw_hex = %source,
                    high_hex = %quantized.high,
                    low_hex = %quantized.low,
                    nearest_hex = %quantized.nearest,
                    "quantized palette line"
                );

                conversion.entries.push(Entry {
                    line_number,
                    source,
                    quantized,
                });
            }
            Err(error) => {
                warn!(line = line_number, %error, "skipping unparsable line");

                conversion.diagnostics.push(Diagnostic { line_number, error });
            }
        }
    }

    conversion
}
