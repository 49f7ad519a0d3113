// src/sensor/simulator.rs

use crate::common::{
    frame::{Frame, FRAME_LEN},
    hal_traits::{PvcTimer, PvcTransport},
    register::Register,
    types::RawCount,
};

#[cfg(feature = "async")]
use crate::common::hal_traits::{PvcTimerAsync, PvcTransportAsync};

/// Bus failures the simulated sensor can produce.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SimulatedBusError {
    /// Device did not acknowledge (injected, or read before any register select).
    NoAcknowledge,
    /// Register address the device does not implement.
    UnknownRegister(u8),
}

/// In-memory PVC-4000.
///
/// Holds a fixed count and secondary word, encodes them into checksummed
/// frames on read, and can be told to corrupt a number of upcoming frames or
/// fail the next bus transaction.
#[derive(Debug, Clone)]
pub struct SimulatedSensor {
    count: RawCount,
    reserved: u16,
    selected: Option<Register>,
    corrupt_reads: usize,
    fail_next: Option<SimulatedBusError>,
    writes: usize,
    reads: usize,
}

impl SimulatedSensor {
    pub fn new(count: RawCount) -> Self {
        SimulatedSensor {
            count,
            reserved: 0,
            selected: None,
            corrupt_reads: 0,
            fail_next: None,
            writes: 0,
            reads: 0,
        }
    }

    /// Sets the word reported in bytes 3-4 of raw-data frames.
    pub fn with_reserved(mut self, reserved: u16) -> Self {
        self.reserved = reserved;
        self
    }

    /// Changes the count reported by subsequent frames.
    pub fn set_count(&mut self, count: RawCount) {
        self.count = count;
    }

    /// Makes the next `n` frame reads carry a bad checksum.
    pub fn corrupt_next_reads(&mut self, n: usize) {
        self.corrupt_reads = n;
    }

    /// Makes the next bus transaction (write or read) fail with `error`.
    pub fn fail_next_transaction(&mut self, error: SimulatedBusError) {
        self.fail_next = Some(error);
    }

    #[inline]
    pub fn selected_register(&self) -> Option<Register> {
        self.selected
    }

    /// Register-select writes received so far.
    #[inline]
    pub fn write_count(&self) -> usize {
        self.writes
    }

    /// Frame reads served so far, including corrupted ones.
    #[inline]
    pub fn read_count(&self) -> usize {
        self.reads
    }

    fn handle_write(&mut self, register: u8) -> Result<(), SimulatedBusError> {
        self.writes += 1;
        if let Some(e) = self.fail_next.take() {
            return Err(e);
        }
        let register = Register::from_u8(register).ok_or(SimulatedBusError::UnknownRegister(register))?;
        self.selected = Some(register);
        Ok(())
    }

    fn handle_read(&mut self, buffer: &mut [u8; FRAME_LEN]) -> Result<(), SimulatedBusError> {
        self.reads += 1;
        if let Some(e) = self.fail_next.take() {
            return Err(e);
        }
        let register = self.selected.ok_or(SimulatedBusError::NoAcknowledge)?;

        // The secondary word is only populated by the raw-data register.
        let reserved = match register {
            Register::CalibratedData => 0,
            Register::RawData => self.reserved,
        };
        let mut frame = Frame::from_fields(self.count, reserved);

        if self.corrupt_reads > 0 {
            self.corrupt_reads -= 1;
            let bytes = frame.as_mut_bytes();
            bytes[0] = !bytes[0];
        }

        *buffer = *frame.as_bytes();
        Ok(())
    }
}

impl PvcTransport for SimulatedSensor {
    type Error = SimulatedBusError;

    fn write_register(&mut self, register: u8) -> Result<(), Self::Error> {
        self.handle_write(register)
    }

    fn read_frame(&mut self, buffer: &mut [u8; FRAME_LEN]) -> Result<(), Self::Error> {
        self.handle_read(buffer)
    }
}

#[cfg(feature = "async")]
impl PvcTransportAsync for SimulatedSensor {
    type Error = SimulatedBusError;

    async fn write_register(&mut self, register: u8) -> Result<(), Self::Error> {
        self.handle_write(register)
    }

    async fn read_frame(&mut self, buffer: &mut [u8; FRAME_LEN]) -> Result<(), Self::Error> {
        self.handle_read(buffer)
    }
}

/// Delay provider that only accounts for requested time.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct SimulatedClock {
    elapsed_ms: u64,
}

impl SimulatedClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total milliseconds of delay requested so far.
    #[inline]
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }
}

impl PvcTimer for SimulatedClock {
    fn delay_ms(&mut self, ms: u32) {
        self.elapsed_ms += u64::from(ms);
    }
}

#[cfg(feature = "async")]
impl PvcTimerAsync for SimulatedClock {
    async fn delay_ms(&mut self, ms: u32) {
        self.elapsed_ms += u64::from(ms);
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::error::Pvc4000Error;

    #[test]
    fn test_read_before_select_is_nack() {
        let mut sensor = SimulatedSensor::new(RawCount::new(100));
        let mut buffer = [0u8; FRAME_LEN];
        assert_eq!(sensor.handle_read(&mut buffer), Err(SimulatedBusError::NoAcknowledge));
    }

    #[test]
    fn test_unknown_register_rejected() {
        let mut sensor = SimulatedSensor::new(RawCount::new(100));
        assert_eq!(sensor.handle_write(0x42), Err(SimulatedBusError::UnknownRegister(0x42)));
        assert_eq!(sensor.selected_register(), None);
    }

    #[test]
    fn test_frames_are_checksummed() {
        let mut sensor = SimulatedSensor::new(RawCount::new(10_001)).with_reserved(0x1234);
        sensor.handle_write(Register::RawData.address()).unwrap();
        let mut buffer = [0u8; FRAME_LEN];
        sensor.handle_read(&mut buffer).unwrap();

        let frame = Frame::from_bytes(buffer);
        let sample = frame.decode_raw::<SimulatedBusError>().unwrap();
        assert_eq!(sample.count.value(), 10_001);
        assert_eq!(sample.reserved, 0x1234);
    }

    #[test]
    fn test_calibrated_register_leaves_reserved_zero() {
        let mut sensor = SimulatedSensor::new(RawCount::new(5)).with_reserved(0xFFFF);
        sensor.handle_write(Register::CalibratedData.address()).unwrap();
        let mut buffer = [0u8; FRAME_LEN];
        sensor.handle_read(&mut buffer).unwrap();
        assert_eq!(Frame::from_bytes(buffer).reserved(), 0);
    }

    #[test]
    fn test_corruption_then_recovery() {
        let mut sensor = SimulatedSensor::new(RawCount::new(7));
        sensor.handle_write(0x00).unwrap();
        sensor.corrupt_next_reads(1);
        let mut buffer = [0u8; FRAME_LEN];

        sensor.handle_read(&mut buffer).unwrap();
        assert!(matches!(
            Frame::from_bytes(buffer).verify::<SimulatedBusError>(),
            Err(Pvc4000Error::ChecksumMismatch { .. })
        ));

        sensor.handle_read(&mut buffer).unwrap();
        assert!(Frame::from_bytes(buffer).verify::<SimulatedBusError>().is_ok());
        assert_eq!(sensor.read_count(), 2);
    }

    #[test]
    fn test_injected_failure_applies_once() {
        let mut sensor = SimulatedSensor::new(RawCount::new(7));
        sensor.fail_next_transaction(SimulatedBusError::NoAcknowledge);
        assert_eq!(sensor.handle_write(0x00), Err(SimulatedBusError::NoAcknowledge));
        assert!(sensor.handle_write(0x00).is_ok());
        assert_eq!(sensor.write_count(), 2);
    }

    #[test]
    fn test_clock_accumulates() {
        let mut clock = SimulatedClock::new();
        PvcTimer::delay_ms(&mut clock, 50);
        PvcTimer::delay_ms(&mut clock, 50);
        assert_eq!(clock.elapsed_ms(), 100);
    }
}
