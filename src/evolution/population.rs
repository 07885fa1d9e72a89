//! A generation of [`Individual`]s and the operators that breed the next one.

use std::cmp::Reverse;

use ordered_float::OrderedFloat;
use rand::Rng;

use super::{config::EvolutionConfig, individual::Individual, EvolutionError};

/// The current generation, kept sorted by descending fitness.
#[derive(Debug, Clone)]
pub struct Population {
    target: Vec<char>,
    alphabet: Vec<char>,
    config: EvolutionConfig,
    individuals: Vec<Individual>,
    generation: usize,
}

impl Population {
    /// Seeds a random first generation.
    ///
    /// # Errors
    /// * [`EvolutionError::EmptyTarget`] for an empty target.
    /// * [`EvolutionError::TargetOutsideAlphabet`] if the target uses a
    ///   character the alphabet lacks, since it could never be matched.
    /// * Anything [`EvolutionConfig::validate`] rejects.
    pub fn new<R: Rng + ?Sized>(
        target: &str,
        config: EvolutionConfig,
        rng: &mut R,
    ) -> Result<Self, EvolutionError> {
        config.validate()?;
        let target: Vec<char> = target.chars().collect();
        let alphabet: Vec<char> = config.alphabet.chars().collect();
        if target.is_empty() {
            return Err(EvolutionError::EmptyTarget);
        }
        if let Some(&missing) = target.iter().find(|c| !alphabet.contains(c)) {
            return Err(EvolutionError::TargetOutsideAlphabet(missing));
        }

        let individuals = (0..config.population_size)
            .map(|_| Individual::random(&target, &alphabet, rng))
            .collect();
        let mut population = Population {
            target,
            alphabet,
            config,
            individuals,
            generation: 0,
        };
        population.rank();
        Ok(population)
    }

    /// The fittest individual.
    pub fn best(&self) -> &Individual {
        &self.individuals[0]
    }

    /// Individuals, fittest first.
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    /// How many times [`Population::evolve`] has run.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn is_solved(&self) -> bool {
        self.best().is_perfect()
    }

    /// Replaces the population with the next generation.
    ///
    /// The top [`EvolutionConfig::elite_count`] individuals survive
    /// unchanged. Every other slot is a mutated crossover of two
    /// tournament winners.
    pub fn evolve<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let size = self.config.population_size;
        let elites = self.config.elite_count();

        let mut next = Vec::with_capacity(size);
        next.extend_from_slice(&self.individuals[..elites]);
        while next.len() < size {
            let first = self.tournament_select(rng);
            let second = self.tournament_select(rng);
            let mut child = self.splice(first, second, rng);
            child.mutate(&self.target, &self.alphabet, self.config.mutation_rate, rng);
            next.push(child);
        }

        self.individuals = next;
        self.rank();
        self.generation += 1;
    }

    /// Samples contestants with replacement and returns the fittest.
    /// The earliest sampled wins a tie.
    pub fn tournament_select<R: Rng + ?Sized>(&self, rng: &mut R) -> &Individual {
        let size = self.individuals.len();
        let mut winner = &self.individuals[rng.gen_range(0..size)];
        for _ in 1..self.config.tournament_size() {
            let contestant = &self.individuals[rng.gen_range(0..size)];
            if contestant.fitness() > winner.fitness() {
                winner = contestant;
            }
        }
        winner
    }

    /// Single-point crossover: genes before a random cut come from
    /// `first`, the rest from `second`.
    ///
    /// # Errors
    /// [`EvolutionError::GenomeLength`] if either parent's chromosome
    /// is not as long as the target.
    pub fn crossover<R: Rng + ?Sized>(
        &self,
        first: &Individual,
        second: &Individual,
        rng: &mut R,
    ) -> Result<Individual, EvolutionError> {
        for parent in [first, second] {
            if parent.genes().len() != self.target.len() {
                return Err(EvolutionError::GenomeLength {
                    expected: self.target.len(),
                    found: parent.genes().len(),
                });
            }
        }
        Ok(self.splice(first, second, rng))
    }

    /// Crossover for parents already known to match the target length.
    fn splice<R: Rng + ?Sized>(
        &self,
        first: &Individual,
        second: &Individual,
        rng: &mut R,
    ) -> Individual {
        let cut = rng.gen_range(0..self.target.len());
        let genes = first.genes()[..cut]
            .iter()
            .chain(&second.genes()[cut..])
            .copied()
            .collect();
        Individual::from_genes(genes, &self.target)
    }

    /// Stable sort, fittest first.
    fn rank(&mut self) {
        self.individuals
            .sort_by_key(|individual| Reverse(OrderedFloat(individual.fitness())));
    }
}

#[cfg(test)]
mod population_tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn config(population_size: usize, alphabet: &str) -> EvolutionConfig {
        EvolutionConfig {
            population_size,
            alphabet: alphabet.to_string(),
            ..EvolutionConfig::default()
        }
    }

    #[test]
    fn test_new_is_ranked() {
        let mut rng = StdRng::seed_from_u64(42);
        let population = Population::new("hello", config(50, "ehlo"), &mut rng).unwrap();

        assert_eq!(population.individuals().len(), 50);
        assert_eq!(population.generation(), 0);
        assert!(population
            .individuals()
            .windows(2)
            .all(|pair| pair[0].fitness() >= pair[1].fitness()));
    }

    #[test]
    fn test_new_rejects_bad_targets() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            Population::new("", config(10, "ab"), &mut rng).unwrap_err(),
            EvolutionError::EmptyTarget
        );
        assert_eq!(
            Population::new("hello world", config(10, "ehlowrd"), &mut rng).unwrap_err(),
            EvolutionError::TargetOutsideAlphabet(' ')
        );
        assert_eq!(
            Population::new("ab", config(0, "ab"), &mut rng).unwrap_err(),
            EvolutionError::InvalidPopulation(0)
        );
    }

    #[test]
    fn test_crossover_splices_parents() {
        let mut rng = StdRng::seed_from_u64(3);
        let population = Population::new("abcdef", config(4, "abcdefxy"), &mut rng).unwrap();
        let target: Vec<char> = "abcdef".chars().collect();
        let first = Individual::from_genes("xxxxxx".chars().collect(), &target);
        let second = Individual::from_genes("yyyyyy".chars().collect(), &target);

        for _ in 0..20 {
            let child = population.crossover(&first, &second, &mut rng).unwrap();
            let chromosome = child.chromosome();
            assert_eq!(chromosome.len(), 6);
            let cut = chromosome.find('y').unwrap();
            assert!(chromosome[..cut].chars().all(|c| c == 'x'));
            assert!(chromosome[cut..].chars().all(|c| c == 'y'));
        }
    }

    #[test]
    fn test_crossover_rejects_mismatched_parents() {
        let mut rng = StdRng::seed_from_u64(4);
        let population = Population::new("abcdef", config(4, "abcdefxy"), &mut rng).unwrap();
        let target: Vec<char> = "abcdef".chars().collect();
        let full = Individual::from_genes("xxxxxx".chars().collect(), &target);
        let short = Individual::from_genes("yy".chars().collect(), &target);

        assert_eq!(
            population.crossover(&full, &short, &mut rng),
            Err(EvolutionError::GenomeLength {
                expected: 6,
                found: 2
            })
        );
        assert_eq!(
            population.crossover(&short, &full, &mut rng),
            Err(EvolutionError::GenomeLength {
                expected: 6,
                found: 2
            })
        );
    }

    #[test]
    fn test_tournament_favours_fitter_individuals() {
        let mut rng = StdRng::seed_from_u64(9);
        let target: Vec<char> = "ab".chars().collect();
        let mut cfg = config(10, "ab");
        cfg.tournament_ratio = 1.0;

        let mut individuals = vec![Individual::from_genes(vec!['b', 'a'], &target); 9];
        individuals.insert(0, Individual::from_genes(vec!['a', 'b'], &target));
        let population = Population {
            target,
            alphabet: vec!['a', 'b'],
            config: cfg,
            individuals,
            generation: 0,
        };

        // Ten draws per tournament miss the single perfect individual
        // about a third of the time.
        let wins = (0..200)
            .filter(|_| population.tournament_select(&mut rng).is_perfect())
            .count();
        assert!(wins > 80, "perfect individual won only {wins} of 200");
        assert!(wins < 200);
    }

    #[test]
    fn test_elitism_never_loses_best_fitness() {
        let mut rng = StdRng::seed_from_u64(2024);
        let mut population =
            Population::new("generation", config(40, "abcdefghijklmnopqrstuvwxyz"), &mut rng)
                .unwrap();

        let mut previous = population.best().fitness();
        for _ in 0..25 {
            population.evolve(&mut rng);
            assert_eq!(population.individuals().len(), 40);
            assert!(population.best().fitness() >= previous);
            previous = population.best().fitness();
        }
        assert_eq!(population.generation(), 25);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let run = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut population = Population::new("seed", config(30, "desz"), &mut rng).unwrap();
            for _ in 0..5 {
                population.evolve(&mut rng);
            }
            population.best().chromosome()
        };
        assert_eq!(run(11), run(11));
    }
}
