//! Unit tests for the RNG module.
//!
//! This module contains tests verifying:
//! - Seed reproducibility
//! - Independence of derived worker streams
//! - Distribution properties (normal moments)
//! - Statistical properties via property-based testing

use super::*;
use proptest::prelude::*;

fn mean_and_variance(samples: &[f64]) -> (f64, f64) {
    let n = samples.len() as f64;
    let mean = samples.iter().sum::<f64>() / n;
    let variance = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);
    (mean, variance)
}

/// Verifies that the same seed produces identical sequences.
#[test]
fn test_seed_reproducibility() {
    let mut a = GaussianSampler::from_seed(12345);
    let mut b = GaussianSampler::from_seed(12345);

    for _ in 0..100 {
        assert_eq!(a.next(), b.next());
    }
}

#[test]
fn test_seed_is_tracked() {
    let sampler = GaussianSampler::from_seed(42);
    assert_eq!(sampler.seed(), 42);

    let sampler = GaussianSampler::for_worker(42, 3);
    assert_eq!(sampler.seed(), derive_seed(42, 3));
}

/// Verifies that derived worker streams differ from each other.
#[test]
fn test_worker_streams_differ() {
    let mut w0 = GaussianSampler::for_worker(99, 0);
    let mut w1 = GaussianSampler::for_worker(99, 1);

    let s0: Vec<f64> = (0..16).map(|_| w0.next()).collect();
    let s1: Vec<f64> = (0..16).map(|_| w1.next()).collect();
    assert_ne!(s0, s1);
}

/// Verifies that the standard normal distribution has correct moments.
#[test]
fn test_normal_moments() {
    let mut sampler = GaussianSampler::from_seed(42);
    let mut buffer = vec![0.0; 100_000];
    sampler.fill(&mut buffer);

    let (mean, variance) = mean_and_variance(&buffer);
    assert!(mean.abs() < 0.02, "Normal mean {} too far from 0", mean);
    assert!(
        (variance - 1.0).abs() < 0.02,
        "Normal variance {} too far from 1",
        variance
    );
}

/// Verifies that two worker streams are approximately uncorrelated.
#[test]
fn test_worker_streams_uncorrelated() {
    let n = 50_000;
    let mut w0 = GaussianSampler::for_worker(7, 0);
    let mut w1 = GaussianSampler::for_worker(7, 1);
    let a: Vec<f64> = (0..n).map(|_| w0.next()).collect();
    let b: Vec<f64> = (0..n).map(|_| w1.next()).collect();

    let (ma, va) = mean_and_variance(&a);
    let (mb, vb) = mean_and_variance(&b);
    let cov = a
        .iter()
        .zip(&b)
        .map(|(x, y)| (x - ma) * (y - mb))
        .sum::<f64>()
        / (n as f64 - 1.0);
    let corr = cov / (va * vb).sqrt();

    assert!(corr.abs() < 0.02, "Worker streams correlated: {}", corr);
}

/// Verifies that empty buffer is handled gracefully.
#[test]
fn test_empty_buffer() {
    let mut sampler = GaussianSampler::from_seed(42);
    let mut empty: Vec<f64> = vec![];
    sampler.fill(&mut empty);
    assert!(empty.is_empty());
}

#[test]
fn test_fill_matches_next() {
    let mut a = GaussianSampler::from_seed(5);
    let mut b = GaussianSampler::from_seed(5);

    let mut buffer = vec![0.0; 32];
    a.fill(&mut buffer);
    for &value in &buffer {
        assert_eq!(value, b.next());
    }
}

proptest! {
    #[test]
    fn prop_derived_seeds_distinct(run_seed in any::<u64>(), i in 0usize..1024, j in 0usize..1024) {
        prop_assume!(i != j);
        prop_assert_ne!(derive_seed(run_seed, i), derive_seed(run_seed, j));
    }

    #[test]
    fn prop_samples_finite(seed in any::<u64>()) {
        let mut sampler = GaussianSampler::from_seed(seed);
        for _ in 0..64 {
            prop_assert!(sampler.next().is_finite());
        }
    }
}
