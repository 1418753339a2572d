//! Orientation estimator combining a compass heading fix with gyroscope
//! roll/pitch integration

use crate::heading::tilt_compensated_heading;
use crate::math::{RAD_TO_DEG, normalize_heading};
use crate::types::{EstimatorSettings, OrientationAngles, OrientationError};
use nalgebra::Vector3;

const NANOS_PER_SECOND: f32 = 1_000_000_000.0;

/// Stateful orientation estimator
///
/// Ingests three independent sensor streams and maintains three published
/// angles: a tilt-compensated compass heading recomputed from the latest
/// accelerometer/magnetometer pair, and roll/pitch obtained by integrating
/// gyroscope angular rates over the elapsed time between samples.
///
/// The two computations are independent. The heading fix is memoryless: it is
/// a pure function of the two most recent vector samples. The roll/pitch
/// integration is a first-order Euler integral with no correction against the
/// accelerometer's gravity tilt estimate, so it drifts over long sessions;
/// that drift is a property of the design, not a defect.
///
/// Every update is a synchronous state transition and the published angles
/// are current as soon as the call returns. The estimator has no internal
/// locking: callers delivering samples from multiple threads must serialize
/// access themselves.
///
/// # Quick Start
/// ```
/// use nalgebra::Vector3;
/// use compass_level::OrientationEstimator;
///
/// let mut estimator = OrientationEstimator::new();
///
/// // Accelerometer in m/s², magnetometer in µT
/// estimator.update_accelerometer(Vector3::new(0.0, 0.0, 9.81)).ok();
/// estimator.update_magnetometer(Vector3::new(0.0, 40.0, -30.0)).ok();
///
/// // Gyroscope in rad/s with a monotonic nanosecond timestamp
/// estimator.update_gyroscope(Vector3::new(0.1, 0.0, 0.0), 1_000_000_000).ok();
/// estimator.update_gyroscope(Vector3::new(0.1, 0.0, 0.0), 2_000_000_000).ok();
///
/// let angles = estimator.angles();
/// assert!(angles.heading < 1.0 || angles.heading > 359.0);
/// assert!((angles.pitch - 5.73).abs() < 0.01);
/// ```
pub struct OrientationEstimator {
    /// Degeneracy rejection thresholds
    settings: EstimatorSettings,
    /// Most recent accelerometer reading, zero until the first sample
    accelerometer: Vector3<f32>,
    /// Most recent magnetometer reading, zero until the first sample
    magnetometer: Vector3<f32>,
    /// Running integral of the x angular rate, radians, unbounded
    integrated_pitch_rad: f32,
    /// Running integral of the y angular rate, radians, unbounded
    integrated_roll_rad: f32,
    /// Timestamp of the previous gyroscope sample, None until one arrives
    last_gyro_timestamp: Option<u64>,
    /// Published heading in degrees, always within [0, 360)
    heading_deg: f32,
    /// Published pitch in degrees, unbounded
    pitch_deg: f32,
    /// Published roll in degrees, unbounded
    roll_deg: f32,
}

impl OrientationEstimator {
    /// Create a new estimator with default settings
    pub fn new() -> Self {
        Self::with_settings(EstimatorSettings::default())
    }

    /// Create a new estimator with the specified settings
    pub fn with_settings(settings: EstimatorSettings) -> Self {
        Self {
            settings,
            accelerometer: Vector3::zeros(),
            magnetometer: Vector3::zeros(),
            integrated_pitch_rad: 0.0,
            integrated_roll_rad: 0.0,
            last_gyro_timestamp: None,
            heading_deg: 0.0,
            pitch_deg: 0.0,
            roll_deg: 0.0,
        }
    }

    /// Get current estimator settings
    pub fn settings(&self) -> EstimatorSettings {
        self.settings
    }

    /// Return the estimator to its freshly constructed state
    ///
    /// Clears the stored sensor vectors, the integrated angles, and the
    /// gyroscope timestamp. This is the only way the integrated roll/pitch
    /// ever reset.
    pub fn reset(&mut self) {
        *self = Self::with_settings(self.settings);
    }

    /// Ingest an accelerometer sample
    ///
    /// Stores the reading and recomputes the published heading from the
    /// stored accelerometer/magnetometer pair.
    ///
    /// # Arguments
    /// * `sample` - Accelerometer reading in m/s²
    ///
    /// # Returns
    /// The newly published heading in degrees, or
    /// [`OrientationError::DegenerateInput`] if no heading could be computed.
    /// On error the previously published heading is retained.
    pub fn update_accelerometer(
        &mut self,
        sample: Vector3<f32>,
    ) -> Result<f32, OrientationError> {
        self.accelerometer = sample;
        self.compute_heading()
    }

    /// Ingest a magnetic-field sample
    ///
    /// Stores the reading and recomputes the published heading from the
    /// stored accelerometer/magnetometer pair.
    ///
    /// # Arguments
    /// * `sample` - Magnetometer reading in µT
    ///
    /// # Returns
    /// The newly published heading in degrees, or
    /// [`OrientationError::DegenerateInput`] if no heading could be computed.
    /// On error the previously published heading is retained.
    pub fn update_magnetometer(&mut self, sample: Vector3<f32>) -> Result<f32, OrientationError> {
        self.magnetometer = sample;
        self.compute_heading()
    }

    /// Ingest a gyroscope sample and integrate roll and pitch
    ///
    /// The x angular rate feeds pitch and the y angular rate feeds roll,
    /// matching the two-axis convention of the sensor frame. The z (yaw)
    /// rate is not integrated; yaw comes from the magnetometer instead.
    ///
    /// The first sample after construction (or after [`reset`](Self::reset))
    /// only seeds the reference timestamp and integrates nothing, so an
    /// undefined elapsed interval can never enter the integral.
    ///
    /// # Arguments
    /// * `sample` - Angular rate reading in rad/s
    /// * `timestamp_ns` - Monotonic sample timestamp in nanoseconds
    ///
    /// # Returns
    /// [`OrientationError::NonMonotonicTimestamp`] if `timestamp_ns` is not
    /// strictly greater than the previous sample's timestamp. The reference
    /// timestamp is reseeded and the integration step skipped, so a negative
    /// or zero interval never corrupts the integrated angles.
    pub fn update_gyroscope(
        &mut self,
        sample: Vector3<f32>,
        timestamp_ns: u64,
    ) -> Result<(), OrientationError> {
        let Some(last_timestamp) = self.last_gyro_timestamp else {
            self.last_gyro_timestamp = Some(timestamp_ns);
            return Ok(());
        };

        self.last_gyro_timestamp = Some(timestamp_ns);

        if timestamp_ns <= last_timestamp {
            return Err(OrientationError::NonMonotonicTimestamp);
        }

        let delta_time = (timestamp_ns - last_timestamp) as f32 / NANOS_PER_SECOND;

        self.integrated_pitch_rad += sample.x * delta_time;
        self.integrated_roll_rad += sample.y * delta_time;

        self.pitch_deg = self.integrated_pitch_rad * RAD_TO_DEG;
        self.roll_deg = self.integrated_roll_rad * RAD_TO_DEG;

        Ok(())
    }

    /// Recompute and publish the heading from the stored sensor pair
    ///
    /// Invoked internally after every accelerometer and magnetometer update;
    /// exposed so the heading path can be driven directly in tests. On
    /// failure the previously published heading is left unchanged.
    pub fn compute_heading(&mut self) -> Result<f32, OrientationError> {
        let heading =
            tilt_compensated_heading(self.settings, self.accelerometer, self.magnetometer)?;
        self.heading_deg = heading;
        Ok(heading)
    }

    /// Published compass heading in degrees, range `[0, 360)`
    pub fn heading(&self) -> f32 {
        self.heading_deg
    }

    /// Published pitch in degrees (unbounded running integral)
    pub fn pitch(&self) -> f32 {
        self.pitch_deg
    }

    /// Published roll in degrees (unbounded running integral)
    pub fn roll(&self) -> f32 {
        self.roll_deg
    }

    /// Snapshot of all three published angles
    pub fn angles(&self) -> OrientationAngles {
        OrientationAngles {
            heading: self.heading_deg,
            pitch: self.pitch_deg,
            roll: self.roll_deg,
        }
    }

    /// Set the published heading directly
    ///
    /// The value is normalized into `[0, 360)`. Useful for restoring a
    /// persisted heading before live samples arrive; the next successful
    /// recomputation overwrites it.
    pub fn set_heading(&mut self, heading_deg: f32) {
        self.heading_deg = normalize_heading(heading_deg);
    }
}

impl Default for OrientationEstimator {
    fn default() -> Self {
        Self::new()
    }
}
