use compass_level::OrientationEstimator;
use nalgebra::Vector3;

const SAMPLE_PERIOD_NS: u64 = 10_000_000; // 10 ms sample period

fn main() {
    let mut estimator = OrientationEstimator::new();

    for i in 0..10_u64 {
        // this loop should repeat each time new sensor data is available
        let accelerometer = Vector3::new(0.0, 0.0, 9.81); // replace with actual accelerometer data in m/s²
        let magnetometer = Vector3::new(0.0, 40.0, -30.0); // replace with actual magnetometer data in µT
        let gyroscope = Vector3::new(0.0, 0.0, 0.0); // replace with actual gyroscope data in rad/s

        if let Err(error) = estimator.update_accelerometer(accelerometer) {
            eprintln!("accelerometer sample rejected: {error}");
        }
        if let Err(error) = estimator.update_magnetometer(magnetometer) {
            eprintln!("magnetometer sample rejected: {error}");
        }
        if let Err(error) = estimator.update_gyroscope(gyroscope, i * SAMPLE_PERIOD_NS) {
            eprintln!("gyroscope sample rejected: {error}");
        }

        let angles = estimator.angles();
        println!(
            "Heading: {:.0}°, Roll: {:.1}°, Pitch: {:.1}°",
            angles.heading, angles.roll, angles.pitch
        );
    }
}
