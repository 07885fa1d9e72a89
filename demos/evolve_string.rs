//! Evolves random strings until one spells "hello world".
//!
//! Pass a number as the first argument to seed the generator; without
//! one the run is seeded from the OS.

use pathweave::evolution::{EvolutionConfig, EvolutionError, Population};
use rand::{rngs::StdRng, SeedableRng};

fn main() -> Result<(), EvolutionError> {
    env_logger::init();

    let target = "hello world";
    let config = EvolutionConfig {
        alphabet: "abcdefghijklmnopqrstuvwxyz ".to_string(),
        ..EvolutionConfig::default()
    };
    let mut rng = match std::env::args().nth(1).and_then(|s| s.parse().ok()) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut population = Population::new(target, config.clone(), &mut rng)?;
    while population.generation() < config.max_generations {
        population.evolve(&mut rng);
        let best = population.best();
        println!("Best Individual: {}", best.chromosome());
        println!("Fitness: {}", best.fitness());

        if population.is_solved() {
            println!("Target string reached!");
            break;
        }
    }
    Ok(())
}
