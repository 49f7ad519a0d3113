// src/reader/sync_reader/transaction.rs

use super::SensorReader;
use crate::common::{
    error::Pvc4000Error,
    frame::Frame,
    hal_traits::{PvcTimer, PvcTransport},
    register::Register,
    timing::MAX_READ_ATTEMPTS,
};

impl<T, D> SensorReader<T, D>
where
    T: PvcTransport,
    D: PvcTimer,
{
    /// Executes a full select-settle-read acquisition with bounded re-reads.
    /// Returns a copy of the first frame that passes checksum validation.
    pub(super) fn execute_acquisition(&mut self, register: Register) -> Result<Frame, Pvc4000Error<T::Error>> {
        // 1. Select register, then let the sensor convert
        self.select_register(register)?;
        self.settle();

        // 2. Read loop. Only the read is repeated.
        for _attempt in 1..=MAX_READ_ATTEMPTS {
            // Bus errors are fatal for this call
            self.read_frame_into_buffer()?;

            // verify() only fails with ChecksumMismatch
            match self.frame.verify::<T::Error>() {
                Ok(()) => return Ok(self.frame),
                Err(_mismatch) => {
                    #[cfg(feature = "log")]
                    log::debug!(
                        "pvc4000: corrupt frame from {} (attempt {}/{}): {}",
                        register, _attempt, MAX_READ_ATTEMPTS, _mismatch
                    );
                }
            }
        }

        // 3. Post-Loop: every attempt produced a corrupt frame
        #[cfg(feature = "log")]
        log::warn!("pvc4000: no valid frame from {} after {} reads", register, MAX_READ_ATTEMPTS);

        Err(Pvc4000Error::AcquisitionFailed { attempts: MAX_READ_ATTEMPTS })
    }
}
