//! Core types for the compass-level orientation estimator

/// Errors reported by the orientation estimator
///
/// Every error is recoverable: the estimator keeps its previously published
/// angles and stays live, so the caller can continue feeding samples in a
/// tight loop regardless of intermittent bad input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrientationError {
    /// No stable orthonormal basis can be built from the current
    /// accelerometer/magnetometer pair
    ///
    /// Raised when the accelerometer magnitude is too small to normalize
    /// (free fall, or the zero default before the first sample) or when the
    /// gravity and magnetic vectors are nearly collinear (magnetic pole
    /// proximity or an orientation singularity). The previously published
    /// heading is retained.
    DegenerateInput,
    /// A gyroscope timestamp was not strictly greater than the previous one
    ///
    /// The reference timestamp is reseeded and the integration step is
    /// skipped, exactly like the first-sample case. Sensor streams
    /// occasionally redeliver or reorder samples; the estimator keeps running.
    NonMonotonicTimestamp,
}

impl core::fmt::Display for OrientationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            OrientationError::DegenerateInput => {
                write!(f, "degenerate accelerometer/magnetometer pair")
            }
            OrientationError::NonMonotonicTimestamp => {
                write!(f, "non-monotonic gyroscope timestamp")
            }
        }
    }
}

impl core::error::Error for OrientationError {}

/// Orientation estimator settings
///
/// Numeric thresholds for rejecting sensor pairs that cannot produce a stable
/// rotation matrix. The defaults reproduce the constants used by the Android
/// `SensorManager.getRotationMatrix` implementation this behavior was taken
/// from, assuming accelerometer readings in m/s² and magnetometer readings
/// in µT.
///
/// # Example
/// ```
/// use compass_level::EstimatorSettings;
///
/// let settings = EstimatorSettings {
///     min_east_magnitude: 0.5, // stricter collinearity rejection
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Copy)]
pub struct EstimatorSettings {
    /// Minimum squared accelerometer magnitude in (m/s²)²
    ///
    /// Readings below this are treated as free fall and rejected. The default
    /// is `0.01 * 9.81²` — one tenth of standard gravity, squared.
    pub free_fall_gravity_squared: f32,
    /// Minimum magnitude of the raw `accel × mag` cross product
    ///
    /// Below this the gravity and magnetic vectors are considered collinear
    /// and no east axis can be derived. The default is `0.1`, measured on the
    /// unnormalized input vectors.
    pub min_east_magnitude: f32,
}

impl Default for EstimatorSettings {
    fn default() -> Self {
        Self {
            free_fall_gravity_squared: 0.01 * 9.81 * 9.81,
            min_east_magnitude: 0.1,
        }
    }
}

/// Snapshot of the published orientation angles
///
/// All values are in degrees. `heading` is always within `[0, 360)`;
/// `pitch` and `roll` are unbounded running integrals and will drift over
/// long sessions (see the crate-level documentation).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrientationAngles {
    /// Compass heading, 0° = magnetic north, increasing clockwise
    pub heading: f32,
    /// Rotation about the device's lateral axis
    pub pitch: f32,
    /// Rotation about the device's longitudinal axis
    pub roll: f32,
}
