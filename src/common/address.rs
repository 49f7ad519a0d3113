// src/common/address.rs

use super::error::Pvc4000Error;
use core::convert::TryFrom;
use core::fmt;

/// 7-bit I2C address of a PVC-4000.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct DeviceAddress(u8);

impl DeviceAddress {
    pub const DEFAULT_ADDRESS: DeviceAddress = DeviceAddress(0x50);

    /// Creates a new `DeviceAddress` if the value fits in 7 bits.
    /// Returns `Result<Self, Pvc4000Error<()>>` because validation itself
    /// cannot cause a bus error.
    pub fn new(address: u8) -> Result<Self, Pvc4000Error<()>> {
        if Self::is_valid_address(address) {
            Ok(DeviceAddress(address))
        } else {
            Err(Pvc4000Error::InvalidAddress(address))
        }
    }

    #[inline]
    pub const fn as_u8(&self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_default(&self) -> bool {
        self.0 == Self::DEFAULT_ADDRESS.0
    }

    #[inline]
    pub const fn is_valid_address(address: u8) -> bool {
        address <= 0x7F
    }
}

impl Default for DeviceAddress {
    fn default() -> Self {
        Self::DEFAULT_ADDRESS
    }
}

impl TryFrom<u8> for DeviceAddress {
    type Error = Pvc4000Error<()>;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DeviceAddress> for u8 {
    fn from(value: DeviceAddress) -> Self {
        value.0
    }
}

impl fmt::Display for DeviceAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#04x}", self.0)
    }
}
