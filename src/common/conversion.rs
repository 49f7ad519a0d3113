// src/common/conversion.rs

/// Raw count at which the calibration curve changes slope.
pub const BREAKPOINT_COUNT: u16 = 10_000;

/// Microns Hg per count above the breakpoint.
pub const UPPER_SEGMENT_SLOPE: f64 = 13.5;

/// Converts a raw sensor count to pressure in microns of mercury.
///
/// Two linear segments anchored at [`BREAKPOINT_COUNT`]: counts at or below
/// the breakpoint are already microns Hg, counts above it rise at
/// [`UPPER_SEGMENT_SLOPE`] microns per count.
#[inline]
pub fn convert(raw_count: u16) -> f64 {
    if raw_count <= BREAKPOINT_COUNT {
        f64::from(raw_count)
    } else {
        let above = f64::from(raw_count - BREAKPOINT_COUNT);
        UPPER_SEGMENT_SLOPE * above + f64::from(BREAKPOINT_COUNT)
    }
}
