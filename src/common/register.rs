// src/common/register.rs

use core::convert::TryFrom;
use core::fmt;

/// Readable PVC-4000 registers.
///
/// Selecting a register starts a conversion; its 6-byte frame is available
/// after [`SETTLE_DELAY`](super::timing::SETTLE_DELAY).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
#[repr(u8)]
pub enum Register {
    /// Calibrated reading. The default acquisition target.
    #[default]
    CalibratedData = 0x00,
    /// Raw reading, with an extra secondary word in frame bytes 3-4.
    RawData = 0xD0,
}

impl Register {
    /// The register address byte written to select this register.
    #[inline]
    pub const fn address(self) -> u8 {
        self as u8
    }

    /// Tries to map an address byte back to a known register.
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0x00 => Some(Register::CalibratedData),
            0xD0 => Some(Register::RawData),
            _ => None,
        }
    }
}

impl TryFrom<u8> for Register {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Register::from_u8(value).ok_or(value)
    }
}

impl From<Register> for u8 {
    fn from(value: Register) -> Self {
        value.address()
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Register::CalibratedData => write!(f, "calibrated-data ({:#04x})", self.address()),
            Register::RawData => write!(f, "raw-data ({:#04x})", self.address()),
        }
    }
}
