use rand::Rng;

/// Embedding is a dense vector of f64 coordinates.
pub type Embedding = Vec<f64>;

/// Generate an embedding of `dimension` values drawn uniformly from `[-1, 1)`.
///
/// The caller supplies the RNG, so benchmarks can use `thread_rng()` while
/// tests seed a `StdRng` for reproducible output.
///
/// Uniformly random vectors are nearly orthogonal in high dimensions and do
/// not stand in for real embedding distributions; this is a synthetic-input
/// helper for tests and benchmarks only.
pub fn uniform_random_embedding<R: Rng + ?Sized>(rng: &mut R, dimension: usize) -> Embedding {
    (0..dimension).map(|_| rng.gen_range(-1.0..1.0)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_length() {
        let mut rng = StdRng::seed_from_u64(7);
        for dim in [0, 1, 2, 7, 128] {
            let emb = uniform_random_embedding(&mut rng, dim);
            assert_eq!(emb.len(), dim, "dimension {dim}: got {}", emb.len());
        }
    }

    #[test]
    fn test_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let emb = uniform_random_embedding(&mut rng, 1536);
        for (i, &x) in emb.iter().enumerate() {
            assert!((-1.0..1.0).contains(&x), "index {i}: {x} out of [-1, 1)");
        }
    }

    #[test]
    fn test_seeded_reproducibility() {
        let a = uniform_random_embedding(&mut StdRng::seed_from_u64(99), 128);
        let b = uniform_random_embedding(&mut StdRng::seed_from_u64(99), 128);
        assert_eq!(a, b, "same seed must produce the same embedding");

        let c = uniform_random_embedding(&mut StdRng::seed_from_u64(100), 128);
        assert_ne!(a, c, "different seeds should diverge");
    }
}
