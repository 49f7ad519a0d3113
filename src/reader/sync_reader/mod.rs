// src/reader/sync_reader/mod.rs

use crate::common::{
    error::Pvc4000Error,
    frame::Frame,
    hal_traits::{PvcTimer, PvcTransport},
    register::Register,
    types::{PressureReading, RawSample},
};

mod io_helpers;
mod transaction;

/// Represents one PVC-4000 for SYNCHRONOUS (blocking) acquisition.
///
/// Owns the transport, the delay provider and the frame buffer. Every method
/// takes `&mut self`, so sharing a sensor between tasks means sharing one
/// reader behind a mutex.
#[derive(Debug)]
pub struct SensorReader<T, D>
where
    T: PvcTransport,
    D: PvcTimer,
{
    transport: T,
    timer: D,
    frame: Frame,
}

impl<T, D> SensorReader<T, D>
where
    T: PvcTransport,
    D: PvcTimer,
{
    pub fn new(transport: T, timer: D) -> Self {
        SensorReader {
            transport,
            timer,
            frame: Frame::default(),
        }
    }

    // --- Public Blocking Methods ---

    /// Reads the calibrated-data register and returns the pressure.
    ///
    /// Corrupt frames are re-read up to the attempt limit. A bus failure is
    /// returned as `Pvc4000Error::Transport` straight away; running out of
    /// attempts gives `Pvc4000Error::AcquisitionFailed`.
    pub fn acquire_pressure(&mut self) -> Result<PressureReading, Pvc4000Error<T::Error>> {
        let frame = self.execute_acquisition(Register::CalibratedData)?;
        Ok(frame.raw_count().to_pressure())
    }

    /// Reads the raw-data register, returning the count, the undecoded
    /// secondary word and the converted pressure.
    pub fn acquire_raw(&mut self) -> Result<RawSample, Pvc4000Error<T::Error>> {
        let frame = self.execute_acquisition(Register::RawData)?;
        frame.decode_raw()
    }

    /// Selects `register` and returns its first valid frame.
    pub fn acquire_from(&mut self, register: Register) -> Result<Frame, Pvc4000Error<T::Error>> {
        self.execute_acquisition(register)
    }

    /// The frame buffer as left by the most recent read, valid or not.
    #[inline]
    pub fn last_frame(&self) -> &Frame {
        &self.frame
    }

    #[inline]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    #[inline]
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Destroys the reader and gives back the transport and delay provider.
    pub fn release(self) -> (T, D) {
        (self.transport, self.timer)
    }
}
