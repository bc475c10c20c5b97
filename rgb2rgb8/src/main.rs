mod cli;
mod preview;

use clap::Parser;
use cli::Cli;
use rgb2rgb8_core::convert_palette;
use std::{
    fs::{self, File},
    io::Write,
    path::PathBuf,
    process::ExitCode,
};
use tracing::{debug, error, warn};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Cli::parse();

    init_tracing(args.verbose());

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}

// WARN keeps skipped-line reports visible by default, `-v` lowers the
// threshold to the per-line records. `RUST_LOG` overrides both.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run(args: &Cli) -> Result<(), Error> {
    let input = args.file().ok_or(Error::NoInputFile)?;
    let output = args.output();

    let bytes = fs::read(input).map_err(|err| Error::ReadInput {
        path: input.to_owned(),
        source: err,
    })?;

    // Claim the output path before converting, so a bad `-o` fails
    // before any work is done.
    let mut file = File::create(output).map_err(|err| Error::CreateOutput {
        path: output.to_owned(),
        source: err,
    })?;

    debug!(
        input = %input.display(),
        output = %output.display(),
        "converting palette"
    );

    // Well formed palette files are ASCII. Anything else still gets
    // line-by-line diagnostics instead of a hard failure here.
    let conversion = convert_palette(&String::from_utf8_lossy(&bytes));

    if args.colors() {
        if let Err(err) = preview::print(&conversion.entries) {
            warn!("cannot draw palette preview: {err}");
        }
    }

    file.write_all(conversion.encoded_lines().as_bytes())
        .map_err(|err| Error::WriteOutput {
            path: output.to_owned(),
            source: err,
        })?;

    Ok(())
}

#[derive(Debug)]
enum Error {
    NoInputFile,
    ReadInput {
        path: PathBuf,
        source: std::io::Error,
    },
    CreateOutput {
        path: PathBuf,
        source: std::io::Error,
    },
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Error {
    // One process exit code per failure, so scripts can tell them apart.
    const fn exit_code(&self) -> u8 {
        match self {
            Self::NoInputFile => 1,
            Self::ReadInput { .. } => 2,
            Self::CreateOutput { .. } => 3,
            Self::WriteOutput { .. } => 4,
        }
    }
}

impl std::error::Error for Error {}
impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoInputFile => write!(f, "no input file specified"),
            Self::ReadInput { path, source } => {
                write!(f, "cannot open input file {}: {source}", path.display())
            }
            Self::CreateOutput { path, source } => {
                write!(f, "cannot create output file {}: {source}", path.display())
            }
            Self::WriteOutput { path, source } => {
                write!(f, "cannot write output file {}: {source}", path.display())
            }
        }
    }
}
