// src/reader/mod.rs

// Declare the sub-modules
pub mod sync_reader;

#[cfg(feature = "async")]
pub mod async_reader;

// Re-export the public reader structs
pub use sync_reader::SensorReader;

#[cfg(feature = "async")]
pub use async_reader::AsyncSensorReader;
