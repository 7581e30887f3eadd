//! GA evolutionary loop execution.
//!
//! [`GaRunner`] drives `Initializing → Evolving → Terminated`:
//! initialization, then per generation tournament selection → crossover →
//! mutation → replacement, then a final sort of the last population.

use super::config::GaConfig;
use super::population::{evaluate_population, find_best, initialize};
use super::types::{Fitness, GaProblem, Individual};
use crate::error::{Error, Result};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, info_span};

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult<I: Individual> {
    /// Lowest-fitness individual of the final population.
    pub best: I,

    /// Best fitness value (same as `best.fitness()`).
    pub best_fitness: I::Fitness,

    /// Total number of generations executed.
    pub generations: usize,

    /// Size of the final population.
    pub population_size: usize,

    /// Best fitness of the initial population followed by the best of
    /// every generation.
    pub fitness_history: Vec<f64>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use tsp_evo::ga::{GaConfig, GaRunner};
/// use tsp_evo::{Instance, TspProblem};
///
/// let model = Instance::sample().into_cost_model().unwrap();
/// let problem = TspProblem::new(&model);
/// let config = GaConfig::default()
///     .with_population_size(30)
///     .with_max_generations(50)
///     .with_seed(42);
///
/// let result = GaRunner::run(&problem, &config).unwrap();
/// assert_eq!(result.generations, 50);
/// assert_eq!(result.best.order.len(), 7);
/// assert_eq!(result.fitness_history.len(), 51);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with a ChaCha8 generator seeded from `config.seed`
    /// (a random seed when `None`).
    pub fn run<P: GaProblem>(problem: &P, config: &GaConfig) -> Result<GaResult<P::Individual>> {
        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs the GA drawing all randomness from `rng`.
    ///
    /// Identical inputs and an identically seeded `rng` produce identical
    /// results, with or without parallel evaluation.
    pub fn run_with_rng<P: GaProblem, R: Rng>(
        problem: &P,
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<GaResult<P::Individual>> {
        config.validate()?;

        let span = info_span!(
            "ga",
            population_size = config.population_size,
            max_generations = config.max_generations
        );
        let _enter = span.enter();

        // Initializing
        let mut population = initialize(problem, config.population_size, rng)?;
        let mut fitness_history = Vec::with_capacity(config.max_generations + 1);
        fitness_history.push(best_fitness_of(&population)?);
        info!(best = fitness_history[0], "initial population evaluated");

        // Evolving
        let parent_count = config.parent_count();
        let offspring_count = config
            .replacement
            .offspring_count(config.population_size, parent_count);

        for generation in 0..config.max_generations {
            let parents = config.tournament.select(&population, parent_count, rng)?;
            let mut offspring = breed(problem, config, &parents, offspring_count, rng)?;
            evaluate_population(problem, &mut offspring, config.parallel)?;

            population = parents;
            population.append(&mut offspring);

            let best = find_best(&population).ok_or(Error::EmptyPopulation)?;
            fitness_history.push(best.fitness().to_f64());
            problem.on_generation(generation + 1, best.fitness());
            debug!(
                generation = generation + 1,
                best = best.fitness().to_f64(),
                population = population.len(),
                "generation complete"
            );
        }

        // Terminated
        population.sort_by(|a, b| {
            a.fitness()
                .partial_cmp(&b.fitness())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        let population_size = population.len();
        let best = population
            .into_iter()
            .next()
            .ok_or(Error::EmptyPopulation)?;
        info!(
            best = best.fitness().to_f64(),
            generations = config.max_generations,
            "evolution terminated"
        );

        Ok(GaResult {
            best_fitness: best.fitness(),
            best,
            generations: config.max_generations,
            population_size,
            fitness_history,
        })
    }
}

/// Breeds `count` offspring from consecutive parent pairs.
///
/// Pair `j` is `(parents[2j], parents[2j + 1])`, wrapping around the parent
/// list, so an unpaired last parent is matched with the first one.
fn breed<P: GaProblem, R: Rng>(
    problem: &P,
    config: &GaConfig,
    parents: &[P::Individual],
    count: usize,
    rng: &mut R,
) -> Result<Vec<P::Individual>> {
    let m = parents.len();
    if m == 0 {
        return Err(Error::EmptyPopulation);
    }

    let mut offspring = Vec::with_capacity(count);
    for j in 0..count {
        let p1 = &parents[(2 * j) % m];
        let p2 = &parents[(2 * j + 1) % m];

        let child = problem.crossover(p1, p2, rng);
        if config.validate_offspring {
            problem.check_invariant(&child)?;
        }
        let mutant = problem.mutate(&child, rng);
        if config.validate_offspring {
            problem.check_invariant(&mutant)?;
        }
        offspring.push(mutant);
    }
    Ok(offspring)
}

fn best_fitness_of<I: Individual>(population: &[I]) -> Result<f64> {
    find_best(population)
        .map(|b| b.fitness().to_f64())
        .ok_or(Error::EmptyPopulation)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::operators::{ordered_crossover, random_permutation, swap_mutation};
    use crate::ga::Replacement;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // ---- Sorting problem: minimize inversions of a permutation ----

    #[derive(Clone, Debug, PartialEq)]
    struct Perm {
        order: Vec<usize>,
        fitness: f64,
    }

    impl Individual for Perm {
        type Fitness = f64;
        fn fitness(&self) -> f64 {
            self.fitness
        }
        fn set_fitness(&mut self, f: f64) {
            self.fitness = f;
        }
    }

    struct Inversions {
        n: usize,
        generations_seen: AtomicUsize,
    }

    impl Inversions {
        fn new(n: usize) -> Self {
            Self {
                n,
                generations_seen: AtomicUsize::new(0),
            }
        }
    }

    impl GaProblem for Inversions {
        type Individual = Perm;

        fn create_individual<R: Rng>(&self, rng: &mut R) -> Perm {
            Perm {
                order: random_permutation(self.n, rng),
                fitness: f64::worst(),
            }
        }

        fn evaluate(&self, ind: &Perm) -> Result<f64> {
            let o = &ind.order;
            let mut inv = 0usize;
            for i in 0..o.len() {
                for j in i + 1..o.len() {
                    if o[i] > o[j] {
                        inv += 1;
                    }
                }
            }
            Ok(inv as f64)
        }

        fn crossover<R: Rng>(&self, p1: &Perm, p2: &Perm, rng: &mut R) -> Perm {
            Perm {
                order: ordered_crossover(&p1.order, &p2.order, rng),
                fitness: f64::worst(),
            }
        }

        fn mutate<R: Rng>(&self, ind: &Perm, rng: &mut R) -> Perm {
            let mut m = ind.clone();
            swap_mutation(&mut m.order, rng);
            m
        }

        fn on_generation(&self, _generation: usize, _best: f64) {
            self.generations_seen.fetch_add(1, Ordering::Relaxed);
        }
    }

    fn config() -> GaConfig {
        GaConfig::default()
            .with_population_size(40)
            .with_max_generations(150)
            .with_seed(42)
            .with_parallel(false)
    }

    #[test]
    fn test_sorting_convergence() {
        let problem = Inversions::new(8);
        let result = GaRunner::run(&problem, &config()).unwrap();

        // a random 8-permutation averages 14 inversions
        assert!(
            result.best_fitness <= 4.0,
            "expected near-sorted permutation, got {}",
            result.best_fitness
        );
        assert_eq!(result.best_fitness, problem.evaluate(&result.best).unwrap());
    }

    #[test]
    fn test_refill_keeps_population_constant() {
        let problem = Inversions::new(6);
        let cfg = config().with_population_size(41).with_max_generations(10);
        let result = GaRunner::run(&problem, &cfg).unwrap();
        assert_eq!(result.population_size, 41);
    }

    #[test]
    fn test_half_offspring_shrinks_once() {
        let problem = Inversions::new(6);
        let cfg = config()
            .with_population_size(100)
            .with_max_generations(10)
            .with_replacement(Replacement::HalfOffspring);
        let result = GaRunner::run(&problem, &cfg).unwrap();
        assert_eq!(result.population_size, 75);
    }

    #[test]
    fn test_fitness_history_and_callback() {
        let problem = Inversions::new(6);
        let cfg = config().with_max_generations(30);
        let result = GaRunner::run(&problem, &cfg).unwrap();

        assert_eq!(result.generations, 30);
        assert_eq!(result.fitness_history.len(), 31);
        assert_eq!(problem.generations_seen.load(Ordering::Relaxed), 30);
        assert_eq!(*result.fitness_history.last().unwrap(), result.best_fitness);
    }

    #[test]
    fn test_zero_generations_returns_initial_best() {
        let problem = Inversions::new(7);
        let cfg = config().with_max_generations(0);

        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let result = GaRunner::run_with_rng(&problem, &cfg, &mut rng).unwrap();

        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let initial = initialize(&problem, cfg.population_size, &mut rng).unwrap();
        let expected = find_best(&initial).unwrap();

        assert_eq!(result.generations, 0);
        assert_eq!(&result.best, expected);
        assert_eq!(result.fitness_history, vec![expected.fitness]);
        assert_eq!(problem.generations_seen.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn test_same_seed_same_result() {
        let problem = Inversions::new(9);
        let a = GaRunner::run(&problem, &config()).unwrap();
        let b = GaRunner::run(&problem, &config()).unwrap();
        assert_eq!(a.best, b.best);
        assert_eq!(a.fitness_history, b.fitness_history);
    }

    #[test]
    fn test_parallel_flag_does_not_change_result() {
        let problem = Inversions::new(9);
        let a = GaRunner::run(&problem, &config().with_parallel(true)).unwrap();
        let b = GaRunner::run(&problem, &config().with_parallel(false)).unwrap();
        assert_eq!(a.best, b.best);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let problem = Inversions::new(4);
        let cfg = config().with_population_size(1);
        assert!(matches!(
            GaRunner::run(&problem, &cfg),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_minimal_population() {
        // a single parent breeds with itself
        let problem = Inversions::new(5);
        for replacement in [Replacement::Refill, Replacement::HalfOffspring] {
            let cfg = config()
                .with_population_size(2)
                .with_max_generations(20)
                .with_replacement(replacement);
            let result = GaRunner::run(&problem, &cfg).unwrap();
            assert_eq!(result.population_size, 2);
        }
    }

    // ---- Default crossover/mutate (clone) ----

    struct CloneOnly;

    impl GaProblem for CloneOnly {
        type Individual = Perm;

        fn create_individual<R: Rng>(&self, rng: &mut R) -> Perm {
            Perm {
                order: vec![rng.random_range(0..100)],
                fitness: f64::worst(),
            }
        }

        fn evaluate(&self, ind: &Perm) -> Result<f64> {
            Ok(ind.order[0] as f64)
        }
    }

    #[test]
    fn test_default_operators() {
        let cfg = config().with_population_size(20).with_max_generations(10);
        let result = GaRunner::run(&CloneOnly, &cfg).unwrap();
        assert_eq!(result.generations, 10);
        assert_eq!(result.population_size, 20);
        assert_eq!(result.best_fitness, result.best.order[0] as f64);
    }

    // ---- Invariant validation ----

    struct Truncating;

    impl GaProblem for Truncating {
        type Individual = Perm;

        fn create_individual<R: Rng>(&self, rng: &mut R) -> Perm {
            Perm {
                order: random_permutation(4, rng),
                fitness: f64::worst(),
            }
        }

        fn evaluate(&self, ind: &Perm) -> Result<f64> {
            Ok(ind.order.len() as f64)
        }

        fn crossover<R: Rng>(&self, p1: &Perm, _p2: &Perm, _rng: &mut R) -> Perm {
            let mut child = p1.clone();
            child.order.truncate(1);
            child
        }

        fn check_invariant(&self, ind: &Perm) -> Result<()> {
            if ind.order.len() == 4 {
                Ok(())
            } else {
                Err(Error::InvariantViolation(format!("{:?}", ind.order)))
            }
        }
    }

    #[test]
    fn test_invariant_violation_fails_fast() {
        let cfg = config().with_population_size(10).with_max_generations(5);
        assert!(matches!(
            GaRunner::run(&Truncating, &cfg),
            Err(Error::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_invariant_check_can_be_disabled() {
        let cfg = config()
            .with_population_size(10)
            .with_max_generations(5)
            .with_validate_offspring(false);
        let result = GaRunner::run(&Truncating, &cfg).unwrap();
        assert_eq!(result.best.order.len(), 1);
    }
}
