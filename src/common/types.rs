// src/common/types.rs

use super::conversion::convert;
use core::fmt;

// --- Raw Sensor Count ---

/// Unsigned 16-bit count as transmitted in frame bytes 1-2 (big-endian).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct RawCount(u16);

impl RawCount {
    #[inline]
    pub const fn new(count: u16) -> Self {
        Self(count)
    }

    /// Decodes a count from its two big-endian wire bytes.
    #[inline]
    pub const fn from_be_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_be_bytes(bytes))
    }

    #[inline]
    pub const fn value(&self) -> u16 {
        self.0
    }

    /// Applies the calibration curve to this count.
    #[inline]
    pub fn to_pressure(self) -> PressureReading {
        PressureReading::from(self)
    }
}

impl From<u16> for RawCount {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl From<RawCount> for u16 {
    fn from(value: RawCount) -> Self {
        value.0
    }
}

// --- Decoded Pressure ---

/// Vacuum pressure in microns of mercury (mTorr).
///
/// Zero is a legitimate reading (full vacuum on the lower segment); failures
/// are always reported through `Result`, never as a zero value.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default)]
pub struct PressureReading(f64);

impl PressureReading {
    /// Creates a reading from a value already in microns Hg.
    pub fn from_microns(microns_hg: f64) -> Self {
        Self(microns_hg)
    }

    /// Returns the pressure in microns of mercury.
    #[inline]
    pub fn microns_hg(&self) -> f64 {
        self.0
    }

    /// Returns the pressure in Torr (1 Torr = 1000 microns Hg).
    #[inline]
    pub fn torr(&self) -> f64 {
        self.0 / 1000.0
    }
}

impl From<RawCount> for PressureReading {
    fn from(count: RawCount) -> Self {
        Self(convert(count.value()))
    }
}

impl fmt::Display for PressureReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} microns Hg", self.0)
    }
}

// --- Raw-data Register Sample ---

/// Result of a raw-data register acquisition.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RawSample {
    /// Count from frame bytes 1-2.
    pub count: RawCount,
    /// Frame bytes 3-4 as an undecoded big-endian word.
    ///
    /// Documented inconsistently for this register (sometimes a copy of the
    /// count, sometimes temperature related), so it is passed through as-is.
    pub reserved: u16,
    /// `count` run through the calibration curve.
    pub pressure: PressureReading,
}
