// src/common/checksum.rs

use super::error::Pvc4000Error;
use super::frame::{FRAME_LEN, PAYLOAD_LEN};

/// Computes the PVC-4000 frame checksum for a 4-byte payload.
///
/// The sensor transmits the two's-complement negation of the payload byte
/// sum, so that `checksum + b1 + b2 + b3 + b4 == 0 (mod 256)`. All arithmetic
/// wraps at 8 bits.
///
/// # Arguments
///
/// * `payload`: Frame bytes 1 through 4.
///
/// # Returns
///
/// The checksum byte the sensor would place at frame offset 0.
#[inline]
pub fn compute_checksum(payload: &[u8; PAYLOAD_LEN]) -> u8 {
    payload
        .iter()
        .fold(0u8, |acc, b| acc.wrapping_add(*b))
        .wrapping_neg()
}

/// Returns `true` if `checksum_byte` is the valid checksum for `payload`.
#[inline]
pub fn validate(checksum_byte: u8, payload: [u8; PAYLOAD_LEN]) -> bool {
    checksum_byte == compute_checksum(&payload)
}

/// Verifies a complete 6-byte frame as read from the sensor.
///
/// # Returns
///
/// * `Ok(())` if byte 0 matches the checksum of bytes 1-4.
/// * `Err(Pvc4000Error::ChecksumMismatch)` otherwise.
pub fn verify_frame_checksum<E>(frame: &[u8; FRAME_LEN]) -> Result<(), Pvc4000Error<E>>
where
    E: core::fmt::Debug,
{
    let payload = [frame[1], frame[2], frame[3], frame[4]];
    let expected = compute_checksum(&payload);

    if frame[0] == expected {
        Ok(())
    } else {
        Err(Pvc4000Error::ChecksumMismatch { expected, received: frame[0] })
    }
}
