//! 3-3-2 channel quantization.
//!
//! Each channel keeps its top bits and drops the rest. Dropping bits
//! leaves two reconstructions a full byte wide: the dropped bits all
//! zero or all one. Per channel the numerically closer one wins, so a
//! pure red stays pure and a pure white stays white instead of fading
//! towards the truncated value.

use crate::{Rgb24, Rgb332};

/// Bits kept of the red channel.
pub const RED_BITS: u32 = 3;
/// Bits kept of the green channel.
pub const GREEN_BITS: u32 = 3;
/// Bits kept of the blue channel.
pub const BLUE_BITS: u32 = 2;

const fn low_candidate(value: u8, bits: u32) -> u8 {
    value & !(u8::MAX >> bits)
}

const fn high_candidate(value: u8, bits: u32) -> u8 {
    value | (u8::MAX >> bits)
}

/// Quantizes one 8-bit channel, keeping its `bits` top bits.
///
/// Returns whichever reconstruction candidate is numerically closer to
/// `value`; the high candidate has to be strictly closer to win. `bits`
/// must be between 0 and 7.
#[must_use]
#[inline]
pub const fn quantize_channel(value: u8, bits: u32) -> u8 {
    let low = low_candidate(value, bits);
    let high = high_candidate(value, bits);

    // low <= value <= high always holds, so both distances are plain
    // unsigned subtractions.
    if high - value < value - low { high } else { low }
}

/// Both reconstruction candidates for one [`Rgb24`] and the winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantization {
    /// Every channel with its dropped bits cleared.
    pub low: Rgb332,
    /// Every channel with its dropped bits set.
    pub high: Rgb332,
    /// Per channel, the candidate closer to the source value.
    pub nearest: Rgb332,
}

impl Rgb24 {
    /// Quantizes to 3-3-2, keeping the per-channel candidates around
    /// for callers that want to show the choice.
    #[must_use]
    pub const fn quantize(self) -> Quantization {
        Quantization {
            low: Rgb332::new(
                low_candidate(self.r, RED_BITS),
                low_candidate(self.g, GREEN_BITS),
                low_candidate(self.b, BLUE_BITS),
            ),
            high: Rgb332::new(
                high_candidate(self.r, RED_BITS),
                high_candidate(self.g, GREEN_BITS),
                high_candidate(self.b, BLUE_BITS),
            ),
            nearest: Rgb332::new(
                quantize_channel(self.r, RED_BITS),
                quantize_channel(self.g, GREEN_BITS),
                quantize_channel(self.b, BLUE_BITS),
            ),
        }
    }

    /// Quantizes to 3-3-2.
    #[must_use]
    #[inline]
    pub const fn to_rgb332(self) -> Rgb332 {
        self.quantize().nearest
    }
}
