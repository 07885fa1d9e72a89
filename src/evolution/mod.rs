//! A toy genetic algorithm that evolves strings toward a target.
//!
//! Each generation keeps its fittest individuals (elitism) and fills
//! the remaining slots by tournament selection, single-point crossover
//! and per-gene mutation. The caller supplies the random number
//! generator, so a seeded [`rand::rngs::StdRng`] reproduces a run
//! exactly.
//!
//! ```
//! use pathweave::evolution::{run, EvolutionConfig};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let config = EvolutionConfig {
//!     alphabet: "ab".to_string(),
//!     population_size: 20,
//!     ..EvolutionConfig::default()
//! };
//! let report = run("abba", &config, &mut StdRng::seed_from_u64(1)).unwrap();
//! assert!(report.fitness <= 1.0);
//! ```
//!
//! This module shares nothing with the graph types.

use rand::Rng;
use serde::{Deserialize, Serialize};

pub mod config;
pub mod individual;
pub mod population;

pub use config::EvolutionConfig;
pub use individual::Individual;
pub use population::Population;

/// Errors reported by the evolution module.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum EvolutionError {
    #[error("target string is empty")]
    EmptyTarget,

    #[error("alphabet is empty")]
    EmptyAlphabet,

    #[error("target character {0:?} is not in the alphabet")]
    TargetOutsideAlphabet(char),

    #[error("population size must be at least 1, got {0}")]
    InvalidPopulation(usize),

    #[error("mutation rate must be within [0, 1], got {0}")]
    InvalidMutationRate(f64),

    #[error("{name} must be within [0, 1], got {value}")]
    InvalidRatio { name: &'static str, value: f64 },

    #[error("chromosome has {found} genes, target needs {expected}")]
    GenomeLength { expected: usize, found: usize },
}

/// Outcome of [`run`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionReport {
    /// Chromosome of the fittest individual.
    pub best: String,
    pub fitness: f64,
    /// Generations evolved, not counting the random seed generation.
    pub generations: usize,
    /// True when `best` equals the target.
    pub solved: bool,
}

/// Evolves a population until it spells `target` or
/// `config.max_generations` is reached.
///
/// # Errors
/// See [`Population::new`].
pub fn run<R: Rng + ?Sized>(
    target: &str,
    config: &EvolutionConfig,
    rng: &mut R,
) -> Result<EvolutionReport, EvolutionError> {
    info!(
        "Evolving {:?} with {} individuals",
        target, config.population_size
    );
    let mut population = Population::new(target, config.clone(), rng)?;

    while !population.is_solved() && population.generation() < config.max_generations {
        population.evolve(rng);
        let best = population.best();
        debug!(
            "generation {}: {} ({})",
            population.generation(),
            best.chromosome(),
            best.fitness()
        );
    }

    let best = population.best();
    let report = EvolutionReport {
        best: best.chromosome(),
        fitness: best.fitness(),
        generations: population.generation(),
        solved: population.is_solved(),
    };
    if report.solved {
        info!("Target reached after {} generations", report.generations);
    } else {
        info!(
            "Stopped after {} generations, best {:?} ({})",
            report.generations, report.best, report.fitness
        );
    }
    Ok(report)
}
