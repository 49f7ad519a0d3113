// src/sensor/mod.rs

// Device side of the link: a software PVC-4000 that answers register
// selects and frame reads the way the hardware does. Used for host-side
// testing and for running readers without a bus attached.

pub mod simulator;

// --- Public Re-exports ---
pub use simulator::{SimulatedBusError, SimulatedClock, SimulatedSensor};
