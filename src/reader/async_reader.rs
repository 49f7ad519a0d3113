// src/reader/async_reader.rs

use crate::common::{
    error::Pvc4000Error,
    frame::Frame,
    hal_traits::{PvcTimerAsync, PvcTransportAsync},
    register::Register,
    timing::{MAX_READ_ATTEMPTS, SETTLE_DELAY_MS},
    types::{PressureReading, RawSample},
};

/// Asynchronous counterpart of [`SensorReader`](super::SensorReader).
///
/// Same select, settle, bounded re-read sequence; the settle delay is awaited
/// so other tasks run while the sensor converts.
#[derive(Debug)]
pub struct AsyncSensorReader<T, D>
where
    T: PvcTransportAsync,
    D: PvcTimerAsync,
{
    transport: T,
    timer: D,
    frame: Frame,
}

impl<T, D> AsyncSensorReader<T, D>
where
    T: PvcTransportAsync,
    D: PvcTimerAsync,
{
    pub fn new(transport: T, timer: D) -> Self {
        AsyncSensorReader {
            transport,
            timer,
            frame: Frame::default(),
        }
    }

    /// Reads the calibrated-data register and returns the pressure.
    pub async fn acquire_pressure(&mut self) -> Result<PressureReading, Pvc4000Error<T::Error>> {
        let frame = self.execute_acquisition(Register::CalibratedData).await?;
        Ok(frame.raw_count().to_pressure())
    }

    /// Reads the raw-data register.
    pub async fn acquire_raw(&mut self) -> Result<RawSample, Pvc4000Error<T::Error>> {
        let frame = self.execute_acquisition(Register::RawData).await?;
        frame.decode_raw()
    }

    /// Selects `register` and returns its first valid frame.
    pub async fn acquire_from(&mut self, register: Register) -> Result<Frame, Pvc4000Error<T::Error>> {
        self.execute_acquisition(register).await
    }

    #[inline]
    pub fn last_frame(&self) -> &Frame {
        &self.frame
    }

    #[inline]
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn release(self) -> (T, D) {
        (self.transport, self.timer)
    }

    async fn execute_acquisition(&mut self, register: Register) -> Result<Frame, Pvc4000Error<T::Error>> {
        self.transport
            .write_register(register.address())
            .await
            .map_err(Pvc4000Error::Transport)?;
        self.timer.delay_ms(SETTLE_DELAY_MS).await;

        for _attempt in 1..=MAX_READ_ATTEMPTS {
            self.transport
                .read_frame(self.frame.as_mut_bytes())
                .await
                .map_err(Pvc4000Error::Transport)?;

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

        #[cfg(feature = "log")]
        log::warn!("pvc4000: no valid frame from {} after {} reads", register, MAX_READ_ATTEMPTS);

        Err(Pvc4000Error::AcquisitionFailed { attempts: MAX_READ_ATTEMPTS })
    }
}
