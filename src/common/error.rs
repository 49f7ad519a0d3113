// src/common/error.rs

#[derive(Debug, thiserror::Error)]
pub enum Pvc4000Error<E = ()>
where
    E: core::fmt::Debug, // Need Debug for the generic Transport error
{
    /// Underlying bus error from the transport (no-acknowledge, bus busy, ...).
    /// Propagated immediately, never retried by the reader.
    #[error("Transport error: {0:?}")]
    Transport(E),

    /// A single frame failed checksum validation.
    ///
    /// The acquisition loop handles this locally by re-reading; callers only
    /// see it from the single-frame decode helpers.
    #[error("Checksum mismatch: frame carried {received:#04x}, payload requires {expected:#04x}")]
    ChecksumMismatch { expected: u8, received: u8 },

    /// Every read attempt produced a corrupt frame.
    #[error("Acquisition failed: no valid frame after {attempts} attempts")]
    AcquisitionFailed { attempts: usize },

    /// Provided value is not a valid 7-bit I2C device address.
    #[error("Invalid I2C device address: {0:#04x}")]
    InvalidAddress(u8),
}

impl<E: core::fmt::Debug> Pvc4000Error<E> {
    /// Returns `true` for errors the acquisition loop recovers from by re-reading.
    #[inline]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Pvc4000Error::ChecksumMismatch { .. })
    }
}
