//! Pairwise similarity and distance metrics over dense embedding vectors.
//!
//! Two stateless metric functions (cosine similarity and Euclidean distance)
//! over equal-length `f64` slices, plus a uniform random embedding generator
//! for synthesizing benchmark and test inputs.

pub mod cosine;
pub mod embedding;
pub mod error;
pub mod euclidean;

pub use cosine::cosine_similarity;
pub use embedding::{Embedding, uniform_random_embedding};
pub use error::MetricError;
pub use euclidean::euclidean_distance;
