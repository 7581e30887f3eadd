use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::error::Error;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use tsp_evo::ga::{GaConfig, Replacement};
use tsp_evo::{Crossover, Instance, TspProblem};

#[derive(Parser)]
#[command(version, about = "Search a short tour with a genetic algorithm")]
struct Args {
    /// JSON instance `{"locations": [...], "costs": [[...]]}`; the built-in
    /// seven-city sample when omitted
    #[arg(long)]
    instance: Option<PathBuf>,

    /// population size
    #[arg(long, default_value_t = 100)]
    population_size: usize,

    /// number of generations
    #[arg(long, default_value_t = 1000)]
    generations: usize,

    /// RNG seed (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// tournament size
    #[arg(long, default_value_t = 5)]
    tournament_size: usize,

    #[arg(long, value_enum, default_value_t = CrossoverArg::Ordered)]
    crossover: CrossoverArg,

    #[arg(long, value_enum, default_value_t = ReplacementArg::Refill)]
    replacement: ReplacementArg,

    /// let invalid offspring through instead of aborting
    #[arg(long, default_value_t = false)]
    no_validate: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum CrossoverArg {
    Ordered,
    IndexAligned,
}

#[derive(Clone, Copy, ValueEnum)]
enum ReplacementArg {
    Refill,
    HalfOffspring,
}

impl From<CrossoverArg> for Crossover {
    fn from(arg: CrossoverArg) -> Self {
        match arg {
            CrossoverArg::Ordered => Crossover::Ordered,
            CrossoverArg::IndexAligned => Crossover::IndexAligned,
        }
    }
}

impl From<ReplacementArg> for Replacement {
    fn from(arg: ReplacementArg) -> Self {
        match arg {
            ReplacementArg::Refill => Replacement::Refill,
            ReplacementArg::HalfOffspring => Replacement::HalfOffspring,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let instance = match &args.instance {
        Some(path) => {
            info!(path = %path.display(), "loading instance");
            serde_json::from_str::<Instance>(&std::fs::read_to_string(path)?)?
        }
        None => Instance::sample(),
    };
    let model = instance.into_cost_model()?;

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, locations = model.len(), "starting search");

    let config = GaConfig::default()
        .with_population_size(args.population_size)
        .with_max_generations(args.generations)
        .with_tournament_size(args.tournament_size)
        .with_replacement(args.replacement.into())
        .with_validate_offspring(!args.no_validate)
        .with_seed(seed);

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let solution = TspProblem::new(&model)
        .with_crossover(args.crossover.into())
        .solve(&config, &mut rng)?;

    println!("Optimal Path: {:?}", solution.tour);
    println!("Total Distance: {}", solution.cost);
    Ok(())
}
