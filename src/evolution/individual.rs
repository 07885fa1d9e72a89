//! A single candidate string and its fitness.

use rand::Rng;

/// A candidate string scored against the target.
///
/// Fitness is the share of positions that already match the target,
/// from `0.0` (nothing matches) to `1.0` (exact match).
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    genes: Vec<char>,
    fitness: f64,
}

impl Individual {
    /// A uniformly random chromosome the length of `target`.
    pub fn random<R: Rng + ?Sized>(target: &[char], alphabet: &[char], rng: &mut R) -> Self {
        let genes = (0..target.len())
            .map(|_| random_gene(alphabet, rng))
            .collect();
        Individual::from_genes(genes, target)
    }

    pub fn from_genes(genes: Vec<char>, target: &[char]) -> Self {
        let fitness = score(&genes, target);
        Individual { genes, fitness }
    }

    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    pub fn genes(&self) -> &[char] {
        &self.genes
    }

    pub fn chromosome(&self) -> String {
        self.genes.iter().collect()
    }

    pub fn is_perfect(&self) -> bool {
        self.fitness >= 1.0
    }

    /// Replaces genes at random and rescores.
    pub(crate) fn mutate<R: Rng + ?Sized>(
        &mut self,
        target: &[char],
        alphabet: &[char],
        rate: f64,
        rng: &mut R,
    ) {
        for gene in self.genes.iter_mut() {
            if rng.gen_bool(rate) {
                *gene = random_gene(alphabet, rng);
            }
        }
        self.fitness = score(&self.genes, target);
    }
}

/// Picks one character from a non-empty alphabet.
pub(crate) fn random_gene<R: Rng + ?Sized>(alphabet: &[char], rng: &mut R) -> char {
    alphabet[rng.gen_range(0..alphabet.len())]
}

fn score(genes: &[char], target: &[char]) -> f64 {
    if target.is_empty() {
        return 0.0;
    }
    let matches = genes
        .iter()
        .zip(target)
        .filter(|(gene, wanted)| gene == wanted)
        .count();
    matches as f64 / target.len() as f64
}
