// src/lib.rs

#![no_std] // Specify no_std at the crate root

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod common;
pub mod reader;
pub mod sensor;

// Re-export key types for convenience
pub use common::{DeviceAddress, Frame, PressureReading, Pvc4000Error, RawCount, Register};
pub use reader::SensorReader;

#[cfg(feature = "async")]
pub use reader::AsyncSensorReader;
