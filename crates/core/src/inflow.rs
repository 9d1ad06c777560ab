use std::f64::consts::TAU;

/// Fill rate delivered to a bucket sitting at `angle` on a wheel with
/// `bucket_count` buckets.
///
/// The source sits above angle 0. Only buckets inside the band where
/// `cos(angle) > |cos(2π / bucket_count)|` receive fluid, following a smooth
/// bump that peaks at exactly `fill_rate` directly beneath the source and falls
/// to zero at the band edges. More buckets means a narrower band.
///
/// `angle` need not be wrapped; the formula is periodic in `2π`.
#[must_use]
pub fn inflow(angle: f64, bucket_count: usize, fill_rate: f64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let n = bucket_count as f64;
    let threshold = (TAU / n).cos().abs();

    if angle.cos() > threshold {
        fill_rate / 2.0 * ((n * angle.tan().atan2(1.0) / 2.0).cos() + 1.0)
    } else {
        0.0
    }
}
