//! # Chromosome & Population
//!
//! A chromosome is a pure bitmask over the [`CodeIndex`](crate::CodeIndex):
//! gene `i` set means the product at code-index position `i` is part of the
//! candidate bundle. A population is a fixed-size collection of chromosomes
//! of one uniform length.
//!
//! The structural invariants of the search — every chromosome exactly `U`
//! genes, the population never empty — are enforced eagerly at construction
//! time, so the operators downstream can treat them as given.

use std::fmt;

use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// Bit-vector encoding of one candidate product bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chromosome {
    genes: Vec<bool>,
}

impl Chromosome {
    /// Builds a chromosome from explicit genes.
    pub fn from_genes(genes: Vec<bool>) -> Self {
        Self { genes }
    }

    /// Builds a random chromosome of `len` genes, each drawn independently
    /// as Bernoulli(0.5).
    pub fn random(len: usize, rng: &mut RandomNumberGenerator) -> Self {
        Self {
            genes: (0..len).map(|_| rng.gen_bool(0.5)).collect(),
        }
    }

    /// Single-point recombination: the first `crosspoint` genes of `first`
    /// followed by the remaining genes of `second`.
    ///
    /// Callers guarantee `0 < crosspoint < len` and equal parent lengths.
    pub fn spliced(first: &Self, second: &Self, crosspoint: usize) -> Self {
        let mut genes = Vec::with_capacity(first.len());
        genes.extend_from_slice(&first.genes[..crosspoint]);
        genes.extend_from_slice(&second.genes[crosspoint..]);
        Self { genes }
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Whether the product at `position` is included in the bundle.
    pub fn is_set(&self, position: usize) -> bool {
        self.genes[position]
    }

    /// Flips the gene at `position`.
    pub fn flip(&mut self, position: usize) {
        self.genes[position] = !self.genes[position];
    }

    pub fn genes(&self) -> &[bool] {
        &self.genes
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &gene in &self.genes {
            write!(f, "{}", if gene { '1' } else { '0' })?;
        }
        Ok(())
    }
}

/// A fixed-size collection of chromosomes of one uniform length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Population {
    individuals: Vec<Chromosome>,
}

impl Population {
    /// Builds a population, rejecting empty input and ragged chromosome
    /// lengths.
    ///
    /// # Errors
    ///
    /// Returns `EmptyPopulation` for empty input and `InvalidChromosome`
    /// when any chromosome's length differs from the first one's.
    pub fn new(individuals: Vec<Chromosome>) -> Result<Self> {
        let first_len = match individuals.first() {
            Some(first) => first.len(),
            None => return Err(GeneticError::EmptyPopulation),
        };
        for (index, individual) in individuals.iter().enumerate() {
            if individual.len() != first_len {
                return Err(GeneticError::InvalidChromosome(format!(
                    "Chromosome {} has {} genes, expected {}",
                    index,
                    individual.len(),
                    first_len
                )));
            }
        }
        Ok(Self { individuals })
    }

    /// Builds the starting generation: `size` random chromosomes of
    /// `universe_len` genes each.
    pub fn random(
        size: usize,
        universe_len: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Self> {
        if size == 0 {
            return Err(GeneticError::EmptyPopulation);
        }
        if universe_len == 0 {
            return Err(GeneticError::InvalidChromosome(
                "Cannot build chromosomes over an empty universe".to_string(),
            ));
        }
        let individuals = (0..size)
            .map(|_| Chromosome::random(universe_len, rng))
            .collect();
        Ok(Self { individuals })
    }

    /// The population size `P`.
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// The uniform chromosome length `U`.
    pub fn universe_len(&self) -> usize {
        self.individuals[0].len()
    }

    pub fn get(&self, index: usize) -> &Chromosome {
        &self.individuals[index]
    }

    pub fn individuals(&self) -> &[Chromosome] {
        &self.individuals
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Chromosome> {
        self.individuals.iter()
    }

    /// Flips one gene of one individual in place. Used by the mutation pass.
    pub fn flip_gene(&mut self, individual: usize, position: usize) {
        self.individuals[individual].flip(position);
    }

    /// Whether any individual is value-equal to `chromosome`.
    pub fn contains(&self, chromosome: &Chromosome) -> bool {
        self.individuals.iter().any(|c| c == chromosome)
    }

    /// Overwrites the slot at `index` with `chromosome`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidChromosome` if the replacement's length differs from
    /// the population's uniform length.
    pub fn replace(&mut self, index: usize, chromosome: Chromosome) -> Result<()> {
        if chromosome.len() != self.universe_len() {
            return Err(GeneticError::InvalidChromosome(format!(
                "Replacement chromosome has {} genes, expected {}",
                chromosome.len(),
                self.universe_len()
            )));
        }
        self.individuals[index] = chromosome;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_chromosome_length() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        let chromosome = Chromosome::random(16, &mut rng);

        assert_eq!(chromosome.len(), 16);
    }

    #[test]
    fn test_spliced_takes_prefix_and_suffix() {
        let first = Chromosome::from_genes(vec![true, true, true, true]);
        let second = Chromosome::from_genes(vec![false, false, false, false]);

        let child = Chromosome::spliced(&first, &second, 3);

        assert_eq!(child.genes(), &[true, true, true, false]);
    }

    #[test]
    fn test_flip_toggles_gene() {
        let mut chromosome = Chromosome::from_genes(vec![false, true]);
        chromosome.flip(0);
        chromosome.flip(1);

        assert_eq!(chromosome.genes(), &[true, false]);
    }

    #[test]
    fn test_display_renders_bitmask() {
        let chromosome = Chromosome::from_genes(vec![true, false, true]);
        assert_eq!(chromosome.to_string(), "101");
    }

    #[test]
    fn test_population_rejects_empty_input() {
        let result = Population::new(Vec::new());
        assert!(matches!(result, Err(GeneticError::EmptyPopulation)));
    }

    #[test]
    fn test_population_rejects_ragged_lengths() {
        let result = Population::new(vec![
            Chromosome::from_genes(vec![true, false]),
            Chromosome::from_genes(vec![true]),
        ]);

        assert!(matches!(result, Err(GeneticError::InvalidChromosome(_))));
    }

    #[test]
    fn test_random_population_shape() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        let population = Population::random(40, 16, &mut rng).unwrap();

        assert_eq!(population.len(), 40);
        assert_eq!(population.universe_len(), 16);
        for individual in population.iter() {
            assert_eq!(individual.len(), 16);
        }
    }

    #[test]
    fn test_replace_rejects_wrong_length() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        let mut population = Population::random(4, 8, &mut rng).unwrap();

        let result = population.replace(0, Chromosome::from_genes(vec![true]));
        assert!(matches!(result, Err(GeneticError::InvalidChromosome(_))));
    }
}
