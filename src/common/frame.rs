// src/common/frame.rs

use super::checksum::{compute_checksum, verify_frame_checksum};
use super::error::Pvc4000Error;
use super::types::{PressureReading, RawCount, RawSample};

/// Bytes in one sensor response frame.
pub const FRAME_LEN: usize = 6;
/// Checksum-covered bytes (frame offsets 1-4).
pub const PAYLOAD_LEN: usize = 4;

/// One 6-byte PVC-4000 response frame.
///
/// | Offset | Field |
/// |---|---|
/// | 0 | checksum |
/// | 1-2 | raw count (big-endian) |
/// | 3-4 | reserved / secondary word (big-endian) |
/// | 5 | padding |
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct Frame([u8; FRAME_LEN]);

impl Frame {
    /// Wraps bytes exactly as read from the bus. No validation is performed.
    #[inline]
    pub const fn from_bytes(bytes: [u8; FRAME_LEN]) -> Self {
        Self(bytes)
    }

    /// Builds a well-formed frame, computing the checksum for `payload`.
    /// The padding byte is zero.
    pub fn from_payload(payload: [u8; PAYLOAD_LEN]) -> Self {
        let checksum = compute_checksum(&payload);
        Self([checksum, payload[0], payload[1], payload[2], payload[3], 0])
    }

    /// Builds a well-formed frame carrying `count` and `reserved`.
    pub fn from_fields(count: RawCount, reserved: u16) -> Self {
        let [c0, c1] = count.value().to_be_bytes();
        let [r0, r1] = reserved.to_be_bytes();
        Self::from_payload([c0, c1, r0, r1])
    }

    #[inline]
    pub const fn as_bytes(&self) -> &[u8; FRAME_LEN] {
        &self.0
    }

    /// Mutable access for reading a frame in place.
    #[inline]
    pub fn as_mut_bytes(&mut self) -> &mut [u8; FRAME_LEN] {
        &mut self.0
    }

    #[inline]
    pub const fn checksum(&self) -> u8 {
        self.0[0]
    }

    #[inline]
    pub const fn payload(&self) -> [u8; PAYLOAD_LEN] {
        [self.0[1], self.0[2], self.0[3], self.0[4]]
    }

    /// Raw count from bytes 1-2. Meaningful only once the frame is verified.
    #[inline]
    pub const fn raw_count(&self) -> RawCount {
        RawCount::from_be_bytes([self.0[1], self.0[2]])
    }

    /// Undecoded big-endian word from bytes 3-4.
    #[inline]
    pub const fn reserved(&self) -> u16 {
        u16::from_be_bytes([self.0[3], self.0[4]])
    }

    /// Checks the frame's checksum byte against its payload.
    #[inline]
    pub fn verify<E: core::fmt::Debug>(&self) -> Result<(), Pvc4000Error<E>> {
        verify_frame_checksum(&self.0)
    }

    /// Validates the frame and converts its count to pressure.
    ///
    /// # Returns
    ///
    /// * `Ok(PressureReading)` for a valid frame.
    /// * `Err(Pvc4000Error::ChecksumMismatch)` if the checksum does not match.
    pub fn decode<E: core::fmt::Debug>(&self) -> Result<PressureReading, Pvc4000Error<E>> {
        self.verify()?;
        Ok(self.raw_count().to_pressure())
    }

    /// Validates the frame and returns all of its fields.
    pub fn decode_raw<E: core::fmt::Debug>(&self) -> Result<RawSample, Pvc4000Error<E>> {
        self.verify()?;
        let count = self.raw_count();
        Ok(RawSample { count, reserved: self.reserved(), pressure: count.to_pressure() })
    }
}

impl From<[u8; FRAME_LEN]> for Frame {
    fn from(value: [u8; FRAME_LEN]) -> Self {
        Self(value)
    }
}
