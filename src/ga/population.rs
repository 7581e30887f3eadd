//! Population creation and evaluation.

use super::types::{GaProblem, Individual};
use crate::error::{Error, Result};
use rand::Rng;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Creates and evaluates `size` independent random individuals.
///
/// Duplicates are not filtered out. Fails with
/// [`Error::InvalidConfig`] when `size` is zero.
pub fn initialize<P: GaProblem, R: Rng>(
    problem: &P,
    size: usize,
    rng: &mut R,
) -> Result<Vec<P::Individual>> {
    if size == 0 {
        return Err(Error::InvalidConfig(
            "population size must be at least 1".into(),
        ));
    }
    let mut population: Vec<P::Individual> =
        (0..size).map(|_| problem.create_individual(rng)).collect();
    evaluate_population(problem, &mut population, false)?;
    Ok(population)
}

/// Evaluates every individual and stores its fitness.
///
/// `parallel` only has an effect with the `parallel` cargo feature.
#[cfg(feature = "parallel")]
pub(crate) fn evaluate_population<P: GaProblem>(
    problem: &P,
    population: &mut [P::Individual],
    parallel: bool,
) -> Result<()> {
    if !parallel {
        return evaluate_sequential(problem, population);
    }
    population.par_iter_mut().try_for_each(|ind| {
        let f = problem.evaluate(ind)?;
        ind.set_fitness(f);
        Ok(())
    })
}

/// Evaluates every individual and stores its fitness.
#[cfg(not(feature = "parallel"))]
pub(crate) fn evaluate_population<P: GaProblem>(
    problem: &P,
    population: &mut [P::Individual],
    _parallel: bool,
) -> Result<()> {
    evaluate_sequential(problem, population)
}

fn evaluate_sequential<P: GaProblem>(problem: &P, population: &mut [P::Individual]) -> Result<()> {
    for ind in population.iter_mut() {
        let f = problem.evaluate(ind)?;
        ind.set_fitness(f);
    }
    Ok(())
}

/// The individual with the lowest fitness; the first one on ties.
pub(crate) fn find_best<I: Individual>(population: &[I]) -> Option<&I> {
    population.iter().reduce(|best, ind| {
        if ind.fitness() < best.fitness() {
            ind
        } else {
            best
        }
    })
}
