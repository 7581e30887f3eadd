//! GA configuration.
//!
//! [`GaConfig`] holds every parameter of the evolutionary loop;
//! [`Replacement`] picks how a new generation is assembled.

use super::selection::Tournament;
use crate::error::{Error, Result};

/// How the next generation is assembled from the selected parents.
///
/// Both policies keep the `population_size / 2` tournament winners as
/// parents and append the offspring bred from consecutive parent pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Replacement {
    /// Breed offspring until the population is back at `population_size`.
    #[default]
    Refill,

    /// Breed one offspring per parent pair (`ceil(parents / 2)` offspring).
    ///
    /// The population drops to roughly three quarters of `population_size`
    /// after the first generation and stays there (100 → 75 → 75 …).
    HalfOffspring,
}

impl Replacement {
    /// Number of offspring to breed from `parents` survivors.
    pub fn offspring_count(self, population_size: usize, parents: usize) -> usize {
        match self {
            Replacement::Refill => population_size.saturating_sub(parents),
            Replacement::HalfOffspring => parents.div_ceil(2),
        }
    }
}

/// Configuration for the genetic algorithm.
///
/// # Defaults
///
/// ```
/// use tsp_evo::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, 1000);
/// assert_eq!(config.tournament.size, 5);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use tsp_evo::ga::{GaConfig, Replacement};
///
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_max_generations(200)
///     .with_tournament_size(3)
///     .with_replacement(Replacement::HalfOffspring)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct GaConfig {
    /// Number of individuals in the initial population.
    ///
    /// Half of it (rounded down) is selected as parents every generation.
    pub population_size: usize,

    /// Number of generations to run. Zero returns the best initial individual.
    pub max_generations: usize,

    /// Parent selection.
    pub tournament: Tournament,

    /// How the next generation is filled.
    pub replacement: Replacement,

    /// Check every crossover and mutation output with
    /// [`GaProblem::check_invariant`](super::GaProblem::check_invariant)
    /// and abort the run on the first violation.
    pub validate_offspring: bool,

    /// Whether to evaluate offspring in parallel using rayon.
    ///
    /// Only takes effect with the `parallel` cargo feature.
    pub parallel: bool,

    /// Random seed for [`GaRunner::run`](super::GaRunner::run).
    ///
    /// `None` uses a random seed. Ignored by
    /// [`GaRunner::run_with_rng`](super::GaRunner::run_with_rng).
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 1000,
            tournament: Tournament::default(),
            replacement: Replacement::default(),
            validate_offspring: true,
            parallel: true,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament = Tournament::new(k);
        self
    }

    /// Sets the replacement policy.
    pub fn with_replacement(mut self, replacement: Replacement) -> Self {
        self.replacement = replacement;
        self
    }

    /// Enables or disables operator output validation.
    pub fn with_validate_offspring(mut self, validate: bool) -> Self {
        self.validate_offspring = validate;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reproduces the classic loop this engine started from: 100
    /// individuals, 1000 generations, half-offspring replacement and no
    /// offspring validation.
    pub fn reference() -> Self {
        Self {
            replacement: Replacement::HalfOffspring,
            validate_offspring: false,
            ..Self::default()
        }
    }

    /// Number of parents selected each generation.
    pub fn parent_count(&self) -> usize {
        self.population_size / 2
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(Error::InvalidConfig(
                "population_size must be at least 2".into(),
            ));
        }
        if self.tournament.size == 0 {
            return Err(Error::InvalidConfig(
                "tournament size must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
