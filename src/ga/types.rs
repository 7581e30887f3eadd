//! Core trait definitions for the GA engine.
//!
//! The two central traits — [`Individual`] and [`GaProblem`] — define the
//! contract between the generic evolutionary loop and a concrete problem
//! such as [`TspProblem`](crate::tsp::TspProblem).

use crate::error::Result;
use rand::Rng;

/// Marker trait for fitness values.
///
/// Fitness must support comparison and be cheaply copyable.
/// Lower fitness is considered better (minimization).
pub trait Fitness: PartialOrd + Copy + Send + Sync + std::fmt::Debug + 'static {
    /// Returns a value representing the worst possible fitness.
    ///
    /// Used for freshly created, not yet evaluated individuals.
    fn worst() -> Self;

    /// Converts the fitness to `f64` for logging and history.
    fn to_f64(self) -> f64;
}

impl Fitness for f64 {
    fn worst() -> Self {
        f64::INFINITY
    }

    fn to_f64(self) -> f64 {
        self
    }
}

/// A candidate solution carrying its own fitness.
///
/// The engine calls [`GaProblem::evaluate`] and stores the result through
/// [`set_fitness`](Individual::set_fitness).
pub trait Individual: Clone + Send + Sync {
    /// The fitness type. Must implement [`Fitness`].
    type Fitness: Fitness;

    /// Returns the current fitness of this individual.
    fn fitness(&self) -> Self::Fitness;

    /// Sets the fitness of this individual.
    fn set_fitness(&mut self, fitness: Self::Fitness);
}

/// Defines a GA optimization problem.
///
/// Implementors supply:
///
/// 1. **Initialization**: a random valid individual
/// 2. **Evaluation**: its fitness
/// 3. **Crossover**: one child from two parents
/// 4. **Mutation**: a perturbed copy
/// 5. **Invariant check**: whether an operator output is still valid
///
/// `GaProblem` must be `Send + Sync` because evaluation may run on rayon
/// when the `parallel` feature is enabled.
pub trait GaProblem: Send + Sync {
    /// The individual (solution) type for this problem.
    type Individual: Individual;

    /// Creates a random, unevaluated individual.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Self::Individual;

    /// Evaluates an individual. Lower is better.
    fn evaluate(
        &self,
        individual: &Self::Individual,
    ) -> Result<<Self::Individual as Individual>::Fitness>;

    /// Produces one child by recombining two parents.
    ///
    /// The default implementation clones `parent1` (no crossover).
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Individual,
        _parent2: &Self::Individual,
        _rng: &mut R,
    ) -> Self::Individual {
        parent1.clone()
    }

    /// Returns a mutated copy of `individual`; the input is left untouched.
    ///
    /// The default implementation returns an unchanged clone.
    fn mutate<R: Rng>(&self, individual: &Self::Individual, _rng: &mut R) -> Self::Individual {
        individual.clone()
    }

    /// Checks the representation invariant of an operator output.
    ///
    /// Fails with [`Error::InvariantViolation`](crate::Error::InvariantViolation).
    /// The default accepts everything.
    fn check_invariant(&self, _individual: &Self::Individual) -> Result<()> {
        Ok(())
    }

    /// Called at the end of each generation with the best fitness of the
    /// new population. The default implementation is a no-op.
    fn on_generation(
        &self,
        _generation: usize,
        _best_fitness: <Self::Individual as Individual>::Fitness,
    ) {
    }
}
