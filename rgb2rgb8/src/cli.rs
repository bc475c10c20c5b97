use std::path::{Path, PathBuf};

pub const BIN_NAME: &str = "rgb2rgb8";
const ABOUT: &str = "Converts RGB24 hex palette files to 8-bit 3-3-2 RGB.";
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\n(c) 2025 the rgb2rgb8 developers\nDistributed under the MIT license",
);

#[derive(clap::Parser)]
#[command(name = BIN_NAME, about = ABOUT, version, long_version = LONG_VERSION)]
pub struct Cli {
    #[arg(
        help = "RGB24 palette file to convert.",
        long_help = "RGB24 palette file to convert. Every line holds one color as six hex \
           digits, \"RRGGBB\". Lines that don't parse are reported and skipped.",
        required = false
    )]
    file: Option<PathBuf>,
    #[arg(
        short,
        long,
        help = "File the converted palette is written to",
        default_value = "out.hex",
        required = false
    )]
    output: PathBuf,
    #[arg(short, long, help = "Log every converted line")]
    verbose: bool,
    #[arg(
        short,
        long,
        help = "Preview the palette on the terminal (needs 24-bit color support)"
    )]
    colors: bool,
}

impl Cli {
    #[must_use]
    #[inline]
    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    #[must_use]
    #[inline]
    pub fn output(&self) -> &Path {
        &self.output
    }

    #[must_use]
    #[inline]
    pub const fn verbose(&self) -> bool {
        self.verbose
    }

    #[must_use]
    #[inline]
    pub const fn colors(&self) -> bool {
        self.colors
    }
}
