//! Genetic Algorithm engine.
//!
//! A generic GA built on trait-based abstractions. A problem plugs in by
//! implementing [`GaProblem`], which specifies how to create, evaluate,
//! recombine, mutate and validate individuals; [`TspProblem`](crate::tsp::TspProblem)
//! is the implementation this crate ships.
//!
//! # Core Traits
//!
//! - [`Individual`]: A candidate solution with associated fitness type
//! - [`GaProblem`]: Problem definition — initialization, evaluation, operators
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, tournament, replacement)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Final optimization result with statistics
//!
//! # Submodules
//!
//! - [`operators`]: Fisher–Yates shuffle, ordered and index-aligned
//!   crossover, swap mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod population;
mod runner;
mod selection;
mod types;

pub use config::{GaConfig, Replacement};
pub use population::initialize;
pub use runner::{GaResult, GaRunner};
pub use selection::Tournament;
pub use types::{Fitness, GaProblem, Individual};
