//! The Traveling Salesman Problem bound to the GA engine.
//!
//! [`TspProblem`] adapts a [`CostModel`] to [`GaProblem`]: individuals are
//! [`Tour`]s of location indices, fitness is the open-path tour cost.
//! [`run`] is the one-call entry point.

use crate::cost::CostModel;
use crate::error::{Error, Result};
use crate::ga::operators::{
    index_aligned_crossover, is_permutation, ordered_crossover, random_permutation, swap_mutation,
};
use crate::ga::{Fitness, GaConfig, GaProblem, GaRunner, Individual};
use rand::Rng;
use std::fmt::Debug;
use std::hash::Hash;

/// Recombination operator used by [`TspProblem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Crossover {
    /// [`ordered_crossover`]: always yields a full permutation.
    #[default]
    Ordered,

    /// [`index_aligned_crossover`]: may drop locations. Pair with
    /// `validate_offspring = false` to let shortened tours circulate.
    IndexAligned,
}

/// A candidate tour: location indices in visiting order plus cached cost.
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    /// Indices into [`CostModel::locations`].
    pub order: Vec<usize>,
    /// Open-path cost; [`Fitness::worst`] until evaluated.
    pub cost: f64,
}

impl Tour {
    /// An unevaluated tour.
    pub fn new(order: Vec<usize>) -> Self {
        Self {
            order,
            cost: <f64 as Fitness>::worst(),
        }
    }
}

impl Individual for Tour {
    type Fitness = f64;

    fn fitness(&self) -> f64 {
        self.cost
    }

    fn set_fitness(&mut self, cost: f64) {
        self.cost = cost;
    }
}

/// Outcome of [`TspProblem::solve`].
#[derive(Debug, Clone, PartialEq)]
pub struct TspSolution<L> {
    /// Best tour of the final population, as labels.
    pub tour: Vec<L>,
    /// Its open-path cost.
    pub cost: f64,
    /// Generations executed.
    pub generations: usize,
    /// Best cost of the initial population, then of every generation.
    pub cost_history: Vec<f64>,
}

/// TSP over a borrowed [`CostModel`].
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use tsp_evo::ga::GaConfig;
/// use tsp_evo::{CostModel, TspProblem};
///
/// let model = CostModel::new(
///     vec!["A", "B", "C"],
///     vec![
///         vec![0.0, 1.0, 5.0],
///         vec![1.0, 0.0, 1.0],
///         vec![5.0, 1.0, 0.0],
///     ],
/// )
/// .unwrap();
///
/// let config = GaConfig::default()
///     .with_population_size(10)
///     .with_max_generations(20);
/// let mut rng = ChaCha8Rng::seed_from_u64(1);
/// let solution = TspProblem::new(&model).solve(&config, &mut rng).unwrap();
/// assert_eq!(solution.tour.len(), 3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TspProblem<'a, L> {
    model: &'a CostModel<L>,
    crossover: Crossover,
}

impl<'a, L> TspProblem<'a, L>
where
    L: Clone + Eq + Hash + Debug + Send + Sync,
{
    /// A problem using [`Crossover::Ordered`].
    pub fn new(model: &'a CostModel<L>) -> Self {
        Self {
            model,
            crossover: Crossover::default(),
        }
    }

    /// Selects the recombination operator.
    pub fn with_crossover(mut self, crossover: Crossover) -> Self {
        self.crossover = crossover;
        self
    }

    /// The underlying cost model.
    pub fn model(&self) -> &'a CostModel<L> {
        self.model
    }

    /// Runs the GA and maps the best tour back to location labels.
    pub fn solve<R: Rng>(&self, config: &GaConfig, rng: &mut R) -> Result<TspSolution<L>> {
        let result = GaRunner::run_with_rng(self, config, rng)?;
        Ok(TspSolution {
            tour: self.model().labels(&result.best.order),
            cost: result.best_fitness,
            generations: result.generations,
            cost_history: result.fitness_history,
        })
    }
}

impl<L> GaProblem for TspProblem<'_, L>
where
    L: Clone + Eq + Hash + Debug + Send + Sync,
{
    type Individual = Tour;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> Tour {
        Tour::new(random_permutation(self.model.len(), rng))
    }

    fn evaluate(&self, tour: &Tour) -> Result<f64> {
        self.model.tour_cost_indices(&tour.order)
    }

    fn crossover<R: Rng>(&self, parent1: &Tour, parent2: &Tour, rng: &mut R) -> Tour {
        let order = match self.crossover {
            Crossover::Ordered => ordered_crossover(&parent1.order, &parent2.order, rng),
            Crossover::IndexAligned => index_aligned_crossover(&parent1.order, &parent2.order, rng),
        };
        Tour::new(order)
    }

    fn mutate<R: Rng>(&self, tour: &Tour, rng: &mut R) -> Tour {
        let mut order = tour.order.clone();
        swap_mutation(&mut order, rng);
        Tour::new(order)
    }

    fn check_invariant(&self, tour: &Tour) -> Result<()> {
        let n = self.model.len();
        if is_permutation(&tour.order, n) {
            Ok(())
        } else {
            Err(Error::InvariantViolation(format!(
                "tour {:?} is not a permutation of {n} locations",
                tour.order
            )))
        }
    }
}

/// Builds a cost model and searches it with the default operators.
///
/// `population_size` must be at least 2; `max_generations = 0` returns the
/// best individual of the initial population. All randomness comes from
/// `rng`, so identically seeded generators give identical results.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(42);
/// let (tour, cost) = tsp_evo::run(
///     vec!['A', 'B', 'C', 'D'],
///     vec![
///         vec![0.0, 1.0, 2.0, 3.0],
///         vec![1.0, 0.0, 1.0, 2.0],
///         vec![2.0, 1.0, 0.0, 1.0],
///         vec![3.0, 2.0, 1.0, 0.0],
///     ],
///     20,
///     200,
///     &mut rng,
/// )
/// .unwrap();
/// assert_eq!(tour.len(), 4);
/// assert!(cost <= 3.0);
/// ```
pub fn run<L, R>(
    locations: Vec<L>,
    cost_matrix: Vec<Vec<f64>>,
    population_size: usize,
    max_generations: usize,
    rng: &mut R,
) -> Result<(Vec<L>, f64)>
where
    L: Clone + Eq + Hash + Debug + Send + Sync,
    R: Rng,
{
    let model = CostModel::new(locations, cost_matrix)?;
    let config = GaConfig::default()
        .with_population_size(population_size)
        .with_max_generations(max_generations);
    let solution = TspProblem::new(&model).solve(&config, rng)?;
    Ok((solution.tour, solution.cost))
}
