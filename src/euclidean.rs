use crate::error::MetricError;

/// Compute the Euclidean (L2) distance between two vectors.
///
/// Returns a non-negative value; 0 means the vectors are identical.
pub fn euclidean_distance(a: &[f64], b: &[f64]) -> Result<f64, MetricError> {
    if a.len() != b.len() {
        return Err(MetricError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let mut sum_sq: f64 = 0.0;

    for i in 0..a.len() {
        let diff = a[i] - b[i];
        sum_sq += diff * diff;
    }

    Ok(sum_sq.sqrt())
}
