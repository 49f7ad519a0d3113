// src/reader/sync_reader/io_helpers.rs

use super::SensorReader; // Access SensorReader definition
use crate::common::{
    error::Pvc4000Error,
    hal_traits::{PvcTimer, PvcTransport},
    register::Register,
    timing,
};

// Implementation block for I/O related helpers
impl<T, D> SensorReader<T, D>
where
    T: PvcTransport,
    D: PvcTimer,
{
    /// Writes the register-select byte, starting a conversion.
    pub(super) fn select_register(
        &mut self,
        register: Register,
    ) -> Result<(), Pvc4000Error<T::Error>> {
        self.transport
            .write_register(register.address())
            .map_err(Pvc4000Error::Transport)
    }

    /// Blocks for the fixed conversion time.
    pub(super) fn settle(&mut self) {
        self.timer.delay_ms(timing::SETTLE_DELAY_MS);
    }

    /// Reads one frame into the reader's buffer, overwriting the previous one.
    pub(super) fn read_frame_into_buffer(&mut self) -> Result<(), Pvc4000Error<T::Error>> {
        self.transport
            .read_frame(self.frame.as_mut_bytes())
            .map_err(Pvc4000Error::Transport)
    }
}

// --- Unit Tests for IO Helpers ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::frame::FRAME_LEN;

    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    struct MockBusError;

    // Records what the reader put on the bus.
    #[derive(Default)]
    struct MockTransport {
        written: [Option<u8>; 4],
        write_pos: usize,
        next_frame: [u8; FRAME_LEN],
        fail: bool,
    }
    impl PvcTransport for MockTransport {
        type Error = MockBusError;
        fn write_register(&mut self, register: u8) -> Result<(), Self::Error> {
            if self.fail {
                return Err(MockBusError);
            }
            self.written[self.write_pos] = Some(register);
            self.write_pos += 1;
            Ok(())
        }
        fn read_frame(&mut self, buffer: &mut [u8; FRAME_LEN]) -> Result<(), Self::Error> {
            if self.fail {
                return Err(MockBusError);
            }
            *buffer = self.next_frame;
            Ok(())
        }
    }

    #[derive(Default)]
    struct MockTimer {
        delays_ms: [u32; 4],
        calls: usize,
    }
    impl PvcTimer for MockTimer {
        fn delay_ms(&mut self, ms: u32) {
            self.delays_ms[self.calls] = ms;
            self.calls += 1;
        }
    }

    #[test]
    fn test_select_register_writes_address_byte() {
        let mut reader = SensorReader::new(MockTransport::default(), MockTimer::default());
        reader.select_register(Register::RawData).unwrap();
        reader.select_register(Register::CalibratedData).unwrap();
        assert_eq!(reader.transport.written[..2], [Some(0xD0), Some(0x00)]);
    }

    #[test]
    fn test_settle_waits_fifty_ms() {
        let mut reader = SensorReader::new(MockTransport::default(), MockTimer::default());
        reader.settle();
        assert_eq!(reader.timer.calls, 1);
        assert_eq!(reader.timer.delays_ms[0], 50);
    }

    #[test]
    fn test_read_fills_frame_buffer() {
        let transport = MockTransport { next_frame: [9, 8, 7, 6, 5, 4], ..Default::default() };
        let mut reader = SensorReader::new(transport, MockTimer::default());
        reader.read_frame_into_buffer().unwrap();
        assert_eq!(reader.last_frame().as_bytes(), &[9, 8, 7, 6, 5, 4]);
    }

    #[test]
    fn test_bus_errors_map_to_transport() {
        let transport = MockTransport { fail: true, ..Default::default() };
        let mut reader = SensorReader::new(transport, MockTimer::default());
        assert!(matches!(
            reader.select_register(Register::CalibratedData),
            Err(Pvc4000Error::Transport(MockBusError))
        ));
        assert!(matches!(
            reader.read_frame_into_buffer(),
            Err(Pvc4000Error::Transport(MockBusError))
        ));
    }
}
