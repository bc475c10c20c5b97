use core::{error, fmt};
use fmt::Display;

#[derive(Debug)]
pub enum Error {
    InvalidHexDigit { line: String },
    InvalidLineLength { line: String },
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidHexDigit { line } => {
                write!(f, "invalid hex digit in palette line: {line:?}")
            }
            Self::InvalidLineLength { line } => {
                write!(f, "palette line is not six hex digits: {line:?}")
            }
        }
    }
}

impl error::Error for Error {}
