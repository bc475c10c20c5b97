//! Terminal palette preview.
//!
//! Draws each palette entry as a row of colored blocks using 24-bit SGR
//! background sequences, so the terminal has to support truecolor.

use rgb2rgb8_core::Entry;
use std::io::{self, Write};

const HEADER: &str = "Raw  High Low  Final";

/// Prints one row per entry to stdout: the raw color, both candidates
/// and the chosen result, in header order.
pub fn print(entries: &[Entry]) -> io::Result<()> {
    let mut stdout = io::stdout().lock();

    for entry in entries {
        writeln!(stdout, "{HEADER}")?;

        swatch(&mut stdout, entry.source.channels())?;
        swatch(&mut stdout, entry.quantized.high.channels())?;
        swatch(&mut stdout, entry.quantized.low.channels())?;
        swatch(&mut stdout, entry.quantized.nearest.channels())?;
        writeln!(stdout)?;
    }

    stdout.flush()
}

// Five spaces on the colored background, matching the header column
// width.
fn swatch(out: &mut impl Write, (r, g, b): (u8, u8, u8)) -> io::Result<()> {
    write!(out, "\x1b[48;2;{r};{g};{b}m     \x1b[0m")
}
