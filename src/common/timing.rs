// src/common/timing.rs

use core::time::Duration;

// === Conversion Timing ===

/// Wait between selecting a register and reading the frame.
///
/// The sensor needs this long to finish its internal conversion. It is a
/// hardware constraint, not a tuning knob.
pub const SETTLE_DELAY: Duration = Duration::from_millis(50);

/// [`SETTLE_DELAY`] in whole milliseconds, as passed to delay providers.
pub const SETTLE_DELAY_MS: u32 = SETTLE_DELAY.as_millis() as u32;

// === Retry Policy ===

/// Maximum frame reads per acquisition before giving up.
///
/// Only the read is repeated; the register select is issued once.
pub const MAX_READ_ATTEMPTS: usize = 20;
