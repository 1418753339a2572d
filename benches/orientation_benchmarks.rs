use compass_level::{EstimatorSettings, OrientationEstimator, tilt_compensated_heading};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use nalgebra::Vector3;

/// Generate realistic sensor data for benchmarking
fn generate_sensor_data() -> (Vector3<f32>, Vector3<f32>, Vector3<f32>) {
    // Realistic accelerometer data (gravity plus a little tilt, m/s²)
    let accelerometer = Vector3::new(0.4, -0.8, 9.75);

    // Realistic magnetometer data (Earth's magnetic field in µT)
    let magnetometer = Vector3::new(21.0, 35.0, -28.0);

    // Realistic gyroscope data (slow hand motion in rad/s)
    let gyroscope = Vector3::new(0.02, -0.04, 0.01);

    (accelerometer, magnetometer, gyroscope)
}

/// Benchmark the bare heading computation
fn bench_tilt_compensated_heading(c: &mut Criterion) {
    let settings = EstimatorSettings::default();
    let (accelerometer, magnetometer, _) = generate_sensor_data();

    c.bench_function("tilt_compensated_heading", |b| {
        b.iter(|| {
            tilt_compensated_heading(
                black_box(settings),
                black_box(accelerometer),
                black_box(magnetometer),
            )
        })
    });
}

/// Benchmark an accelerometer ingest including the heading recomputation
fn bench_update_accelerometer(c: &mut Criterion) {
    let (accelerometer, magnetometer, _) = generate_sensor_data();
    let mut estimator = OrientationEstimator::new();
    estimator.update_magnetometer(magnetometer).ok();

    c.bench_function("update_accelerometer", |b| {
        b.iter(|| estimator.update_accelerometer(black_box(accelerometer)))
    });
}

/// Benchmark the gyroscope integration step
fn bench_update_gyroscope(c: &mut Criterion) {
    let (_, _, gyroscope) = generate_sensor_data();
    let mut estimator = OrientationEstimator::new();
    let mut timestamp_ns = 0_u64;
    estimator.update_gyroscope(gyroscope, timestamp_ns).ok();

    c.bench_function("update_gyroscope", |b| {
        b.iter(|| {
            timestamp_ns += 10_000_000; // 100 Hz
            estimator.update_gyroscope(black_box(gyroscope), black_box(timestamp_ns))
        })
    });
}

/// Benchmark a full sample frame: one update per sensor stream
fn bench_full_frame(c: &mut Criterion) {
    let (accelerometer, magnetometer, gyroscope) = generate_sensor_data();
    let mut estimator = OrientationEstimator::new();
    let mut timestamp_ns = 0_u64;
    estimator.update_gyroscope(gyroscope, timestamp_ns).ok();

    c.bench_function("full_sensor_frame", |b| {
        b.iter(|| {
            timestamp_ns += 10_000_000;
            estimator.update_accelerometer(black_box(accelerometer)).ok();
            estimator.update_magnetometer(black_box(magnetometer)).ok();
            estimator.update_gyroscope(black_box(gyroscope), black_box(timestamp_ns)).ok();
            black_box(estimator.angles())
        })
    });
}

/// Benchmark estimator creation
fn bench_estimator_creation(c: &mut Criterion) {
    c.bench_function("estimator_new", |b| {
        b.iter(|| black_box(OrientationEstimator::new()))
    });
}

criterion_group!(
    benches,
    bench_tilt_compensated_heading,
    bench_update_accelerometer,
    bench_update_gyroscope,
    bench_full_frame,
    bench_estimator_creation
);

criterion_main!(benches);
