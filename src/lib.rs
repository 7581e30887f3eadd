//! Genetic-algorithm heuristic for the Traveling Salesman Problem.
//!
//! Given a fixed set of locations and a pairwise cost matrix, searches for a
//! short tour visiting every location exactly once. The result is a
//! stochastic heuristic, not a proven optimum.
//!
//! - [`CostModel`]: locations plus an immutable cost matrix; point and tour
//!   cost queries.
//! - [`ga`]: a generic evolutionary engine (tournament selection, pluggable
//!   crossover and mutation, generational replacement) driven through the
//!   [`GaProblem`](ga::GaProblem) trait.
//! - [`TspProblem`]: the TSP as a `GaProblem`; [`run`] is the one-call entry
//!   point.
//! - [`Instance`]: serializable problem data, including a seven-city sample.
//!
//! Randomness is always injected: pass a seeded generator (for example
//! `rand_chacha::ChaCha8Rng`) and identical inputs yield identical tours.
//!
//! # Cargo features
//!
//! - `parallel`: evaluate offspring with rayon
//! - `serde`: `Serialize`/`Deserialize` for [`Instance`] and the operator enums
//! - `cli` (default): the `tsp-evo` binary

pub mod cost;
mod error;
pub mod ga;
pub mod instance;
pub mod tsp;

pub use cost::CostModel;
pub use error::{Error, Result};
pub use instance::Instance;
pub use tsp::{run, Crossover, Tour, TspProblem, TspSolution};
