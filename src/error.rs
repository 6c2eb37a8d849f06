use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetricError {
    #[error("vecmetric: length mismatch: left {left}, right {right}")]
    LengthMismatch { left: usize, right: usize },
}
