#![no_std]

//! Compass Level - orientation estimation for a compass and digital level
//!
//! This library turns raw 3-axis sensor samples into a compass readout: a
//! tilt-compensated magnetic heading derived from the accelerometer and
//! magnetometer, and roll/pitch angles obtained by integrating gyroscope
//! angular rates over time. It is the computational core of a single-screen
//! compass application; sensor registration, lifecycle management, and
//! rendering are left to the surrounding harness.
//!
//! # Features
//!
//! - Tilt-compensated heading via a gravity/magnetic-north rotation matrix,
//!   always published in `[0, 360)`
//! - First-order Euler integration of angular rate into roll and pitch
//! - Explicit handling of degenerate sensor pairs (free fall, collinear
//!   gravity and magnetic vectors) with a stale-value policy
//! - Recovery from non-monotonic gyroscope timestamps without corrupting the
//!   integrated angles
//! - `#![no_std]` compatible for embedded targets
//!
//! # Quick Start
//!
//! ```rust
//! use nalgebra::Vector3;
//! use compass_level::OrientationEstimator;
//!
//! let mut estimator = OrientationEstimator::new();
//!
//! // Feed samples as the hardware delivers them
//! estimator.update_accelerometer(Vector3::new(0.0, 0.0, 9.81)).ok(); // m/s²
//! estimator.update_magnetometer(Vector3::new(0.0, 40.0, -30.0)).ok(); // µT
//! estimator.update_gyroscope(Vector3::new(0.0, 0.0, 0.0), 1_000_000_000).ok(); // rad/s
//!
//! // Read the published angles on every redraw
//! let angles = estimator.angles();
//! println!(
//!     "Heading: {:.0}°, Roll: {:.1}°, Pitch: {:.1}°",
//!     angles.heading, angles.roll, angles.pitch
//! );
//! ```
//!
//! The roll/pitch integration carries no correction against the
//! accelerometer's tilt estimate and will drift over long sessions. This
//! mirrors the behavior of the application the library was built for and is
//! intentional; fuse with an AHRS filter upstream if drift-free attitude is
//! required.

mod estimator;
pub mod heading;
mod math;
mod types;

// Re-export all public types and functions
pub use estimator::OrientationEstimator;
pub use heading::tilt_compensated_heading;
pub use math::{DEG_TO_RAD, RAD_TO_DEG, normalize_heading};
pub use types::{EstimatorSettings, OrientationAngles, OrientationError};
