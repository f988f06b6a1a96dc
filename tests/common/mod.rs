//! Shared fixtures: seeded arkworks points and chunk labels

#![allow(dead_code)]

use ark_ed_on_bls12_377::EdwardsProjective;
use ark_std::UniformRand;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub type Point = EdwardsProjective;

/// `n` random curve points from a fixed seed
pub fn sample_points(n: usize, seed: u64) -> Vec<Point> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| Point::rand(&mut rng)).collect()
}

/// `n` chunk labels drawn uniformly from `0..max_label`
pub fn sample_labels(n: usize, max_label: u32, seed: u64) -> Vec<u32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(0..max_label)).collect()
}
