use tracing::debug;

use crate::population::Population;
use crate::rng::RandomNumberGenerator;

/// Bounded random bit-flips over the post-crossover population.
///
/// One pass performs exactly `floor(probability * P * U)` flips. Each flip
/// picks an individual and a gene position independently and uniformly, so
/// the same gene may be flipped more than once within a pass.
#[derive(Debug, Clone)]
pub struct BoundedMutation {
    probability: f64,
}

impl BoundedMutation {
    pub fn new(probability: f64) -> Self {
        Self { probability }
    }

    /// Number of flips a pass over `population` performs.
    pub fn flips_per_pass(&self, population: &Population) -> usize {
        let total_genes = population.len() * population.universe_len();
        (self.probability * total_genes as f64).floor() as usize
    }

    /// Applies one mutation pass in place and returns the number of flips
    /// performed.
    pub fn apply(&self, population: &mut Population, rng: &mut RandomNumberGenerator) -> usize {
        let flips = self.flips_per_pass(population);
        debug!(flips, "mutation pass");
        for _ in 0..flips {
            let individual = rng.gen_index(population.len());
            let position = rng.gen_index(population.universe_len());
            population.flip_gene(individual, position);
        }
        flips
    }
}
