//! Angle constants and heading normalization helpers

/// Mathematical constants
pub const DEG_TO_RAD: f32 = core::f32::consts::PI / 180.0;
pub const RAD_TO_DEG: f32 = 180.0 / core::f32::consts::PI;

/// Wrap an angle in degrees into the `[0, 360)` heading range
///
/// For azimuth values out of `atan2` (within ±180°) this is exactly the
/// `(azimuth + 360) % 360` normalization; arbitrary inputs are reduced first
/// so the result always lands in range.
///
/// # Example
/// ```
/// use compass_level::normalize_heading;
///
/// assert_eq!(normalize_heading(-90.0), 270.0);
/// assert_eq!(normalize_heading(360.0), 0.0);
/// assert_eq!(normalize_heading(45.0), 45.0);
/// ```
#[inline]
pub fn normalize_heading(degrees: f32) -> f32 {
    let wrapped = degrees % 360.0;
    if wrapped < 0.0 { wrapped + 360.0 } else { wrapped }
}
