//! Tuning knobs for the genetic algorithm.

use serde::{Deserialize, Serialize};

use super::EvolutionError;

/// Default number of individuals per generation.
pub const DEFAULT_POPULATION_SIZE: usize = 100;
/// Default per-gene mutation probability.
pub const DEFAULT_MUTATION_RATE: f64 = 0.05;
/// Default generation cap.
pub const DEFAULT_MAX_GENERATIONS: usize = 1000;
/// Default share of the population copied unchanged into the next
/// generation.
pub const DEFAULT_ELITISM_RATIO: f64 = 0.1;
/// Default share of the population sampled for each tournament.
pub const DEFAULT_TOURNAMENT_RATIO: f64 = 0.1;
/// Default gene pool.
pub const DEFAULT_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Parameters of an evolution run.
///
/// Missing fields fall back to their defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    pub population_size: usize,
    pub mutation_rate: f64,
    pub max_generations: usize,
    pub elitism_ratio: f64,
    pub tournament_ratio: f64,
    /// Characters a gene may take. The target must be spelled from it.
    pub alphabet: String,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        EvolutionConfig {
            population_size: DEFAULT_POPULATION_SIZE,
            mutation_rate: DEFAULT_MUTATION_RATE,
            max_generations: DEFAULT_MAX_GENERATIONS,
            elitism_ratio: DEFAULT_ELITISM_RATIO,
            tournament_ratio: DEFAULT_TOURNAMENT_RATIO,
            alphabet: DEFAULT_ALPHABET.to_string(),
        }
    }
}

impl EvolutionConfig {
    /// Checks every field, reporting the first bad one.
    pub fn validate(&self) -> Result<(), EvolutionError> {
        if self.population_size == 0 {
            return Err(EvolutionError::InvalidPopulation(self.population_size));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(EvolutionError::InvalidMutationRate(self.mutation_rate));
        }
        for (name, value) in [
            ("elitism_ratio", self.elitism_ratio),
            ("tournament_ratio", self.tournament_ratio),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(EvolutionError::InvalidRatio { name, value });
            }
        }
        if self.alphabet.is_empty() {
            return Err(EvolutionError::EmptyAlphabet);
        }
        Ok(())
    }

    /// Individuals carried over untouched each generation.
    pub fn elite_count(&self) -> usize {
        ((self.population_size as f64 * self.elitism_ratio) as usize).min(self.population_size)
    }

    /// Contestants per tournament, at least one.
    pub fn tournament_size(&self) -> usize {
        ((self.population_size as f64 * self.tournament_ratio) as usize).max(1)
    }
}
