//! Tournament selection.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::types::Individual;
use crate::error::{Error, Result};
use rand::Rng;

/// Tournament selection: sample `size` individuals with replacement and
/// keep the best (lowest fitness).
///
/// Higher `size` = stronger selection pressure.
/// - 2: light pressure
/// - 3-5: moderate pressure
/// - >5: strong pressure (risk of premature convergence)
///
/// # Examples
///
/// ```
/// use tsp_evo::ga::Tournament;
///
/// assert_eq!(Tournament::default(), Tournament::new(5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tournament {
    /// Number of contestants drawn per tournament.
    pub size: usize,
}

impl Default for Tournament {
    fn default() -> Self {
        Tournament { size: 5 }
    }
}

impl Tournament {
    /// Creates a tournament of `size` contestants.
    pub fn new(size: usize) -> Self {
        Tournament { size }
    }

    /// Runs `count` independent tournaments and returns the winners in
    /// draw order.
    ///
    /// Fails with [`Error::EmptyPopulation`] when `population` is empty.
    pub fn select<I: Individual, R: Rng>(
        &self,
        population: &[I],
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<I>> {
        if population.is_empty() {
            return Err(Error::EmptyPopulation);
        }
        Ok((0..count)
            .map(|_| population[self.select_index(population, rng)].clone())
            .collect())
    }

    /// Index of one tournament winner. `population` must be non-empty.
    ///
    /// Ties go to the contestant drawn first.
    fn select_index<I: Individual, R: Rng>(&self, population: &[I], rng: &mut R) -> usize {
        let k = self.size.max(1);
        let n = population.len();

        let mut best_idx = rng.random_range(0..n);
        for _ in 1..k {
            let idx = rng.random_range(0..n);
            if population[idx].fitness() < population[best_idx].fitness() {
                best_idx = idx;
            }
        }
        best_idx
    }
}
