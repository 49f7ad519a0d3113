// src/common/mod.rs

// --- Declare all public modules within common ---
pub mod address;
pub mod checksum;
pub mod conversion;
pub mod error;
pub mod frame;
pub mod hal_traits;
pub mod register;
pub mod timing;
pub mod types;

// --- Re-export key types/traits/functions for easier access ---

// From address.rs
pub use address::DeviceAddress;

// From checksum.rs
pub use checksum::{compute_checksum, validate, verify_frame_checksum};

// From conversion.rs
pub use conversion::{convert, BREAKPOINT_COUNT, UPPER_SEGMENT_SLOPE};

// From error.rs
pub use error::Pvc4000Error;

// From frame.rs
pub use frame::{Frame, FRAME_LEN, PAYLOAD_LEN};

// From hal_traits.rs
pub use hal_traits::{PvcTimer, PvcTransport}; // Core sync traits

// From register.rs
pub use register::Register;

// From types.rs
pub use types::{PressureReading, RawCount, RawSample};

// Async traits (from hal_traits.rs)
#[cfg(feature = "async")]
pub use hal_traits::{PvcTimerAsync, PvcTransportAsync};

// embedded-hal integration (from hal_traits.rs)
#[cfg(feature = "impl-generic-hal")]
pub use hal_traits::{HalDelay, I2cTransport};
