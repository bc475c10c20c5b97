//! # rgb2rgb8 Palette Conversion Core
//!
//! Conversion logic for turning RGB24 palettes, stored as one six-digit
//! hex triplet per line, into 8-bit 3-3-2 RGB palettes. This crate is
//! pure: it never touches the filesystem or the terminal, so frontends
//! decide where input comes from and where results go.
//!
//! ## Tracing
//!
//! This crate uses the standard Rust `tracing` crate. Every converted
//! line is recorded at DEBUG with its raw value and both reconstruction
//! candidates, and every skipped line at WARN with the parse failure.
//! To see them, configure a subscriber in your application:
//!
//! ```rust,ignore
//! use tracing_subscriber::EnvFilter;
//!
//! tracing_subscriber::fmt()
//!     .with_env_filter(EnvFilter::from_default_env())
//!     .init();
//! ```

mod color;
mod convert;
mod error;
mod quantize;

pub use {
    color::{Rgb24, Rgb332},
    convert::{Conversion, Diagnostic, Entry, convert_palette},
    error::Error,
    quantize::{BLUE_BITS, GREEN_BITS, Quantization, RED_BITS, quantize_channel},
};
