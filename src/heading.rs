//! Tilt-compensated compass heading from accelerometer and magnetometer samples

use crate::math::{RAD_TO_DEG, normalize_heading};
use crate::types::{EstimatorSettings, OrientationError};
use nalgebra::Vector3;

/// Calculate the tilt-compensated magnetic heading
///
/// Builds an orthonormal east/north/up basis (the rows of the device-to-world
/// rotation matrix) from a raw accelerometer and magnetometer pair, then
/// extracts the azimuth about the vertical axis. The device's local up axis is
/// estimated from the accelerometer, which is assumed to measure the gravity
/// reaction while the device is quasi-static; east is the cross product of the
/// magnetic field with gravity, and north completes the basis.
///
/// Degeneracy checks run on the raw (unnormalized) inputs, with thresholds
/// taken from [`EstimatorSettings`]: an accelerometer magnitude below the
/// free-fall threshold, or an east cross product too small to normalize
/// (gravity and magnetic field nearly collinear), yields
/// [`OrientationError::DegenerateInput`].
///
/// # Arguments
/// * `settings` - Degeneracy rejection thresholds
/// * `accelerometer` - Accelerometer reading in m/s² (gravity vector)
/// * `magnetometer` - Magnetometer reading in µT
///
/// # Returns
/// Heading angle in degrees, range `[0, 360)`, 0° = magnetic north,
/// increasing clockwise.
///
/// # Example
/// ```
/// use nalgebra::Vector3;
/// use compass_level::{EstimatorSettings, tilt_compensated_heading};
///
/// // Device flat on a table, top edge facing magnetic north
/// let accel = Vector3::new(0.0, 0.0, 9.81);
/// let mag = Vector3::new(0.0, 40.0, -30.0); // northern-hemisphere inclination
///
/// let heading = tilt_compensated_heading(EstimatorSettings::default(), accel, mag).unwrap();
/// assert!(heading < 1.0 || heading > 359.0);
/// ```
pub fn tilt_compensated_heading(
    settings: EstimatorSettings,
    accelerometer: Vector3<f32>,
    magnetometer: Vector3<f32>,
) -> Result<f32, OrientationError> {
    let gravity_squared = accelerometer.magnitude_squared();
    if gravity_squared < settings.free_fall_gravity_squared {
        // Free fall, or the zero default before the first sample
        return Err(OrientationError::DegenerateInput);
    }

    // East axis: mag × accel on the raw vectors, checked before normalizing
    let east_raw = magnetometer.cross(&accelerometer);
    if east_raw.magnitude_squared() < settings.min_east_magnitude * settings.min_east_magnitude {
        return Err(OrientationError::DegenerateInput);
    }

    let east = safe_normalize(east_raw);
    let up = accelerometer / gravity_squared.sqrt();

    // North completes the right-handed basis: up × east
    let north = up.cross(&east);

    // Azimuth is the rotation about the vertical axis
    let azimuth_rad = east.y.atan2(north.y);

    Ok(normalize_heading(azimuth_rad * RAD_TO_DEG))
}

/// Safely normalize a vector, returning the zero vector for zero input
fn safe_normalize(vector: Vector3<f32>) -> Vector3<f32> {
    let magnitude_squared = vector.magnitude_squared();

    if magnitude_squared == 0.0 {
        return Vector3::zeros();
    }

    vector / magnitude_squared.sqrt()
}
