use crate::error::{GeneticError, Result};
use crate::population::{Chromosome, Population};
use crate::rng::RandomNumberGenerator;

/// Single-point recombination over the mating pool.
///
/// The pool is consumed in consecutive pairs `(pool[2k], pool[2k+1])`; each
/// pair produces one child by splicing the first parent's prefix to the
/// second parent's suffix at a crossover point drawn uniformly from
/// `[1, U-1]`. The result is a new population of exactly `P` chromosomes in
/// pair order.
#[derive(Debug, Clone, Default)]
pub struct SinglePointCrossover;

impl SinglePointCrossover {
    /// Breeds the next generation from the current population and its
    /// mating pool.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error when the pool does not hold exactly
    /// two parents per child or when the universe is too small to have an
    /// interior crossover point.
    pub fn breed(
        &self,
        population: &Population,
        pool: &[usize],
        rng: &mut RandomNumberGenerator,
    ) -> Result<Population> {
        if pool.len() != 2 * population.len() {
            return Err(GeneticError::Configuration(format!(
                "Mating pool holds {} parents, expected {}",
                pool.len(),
                2 * population.len()
            )));
        }
        let universe_len = population.universe_len();
        if universe_len < 2 {
            return Err(GeneticError::Configuration(
                "Single-point crossover needs chromosomes of at least 2 genes".to_string(),
            ));
        }

        let mut children = Vec::with_capacity(population.len());
        for pair in pool.chunks_exact(2) {
            let crosspoint = rng.gen_range(1, universe_len);
            let parent1 = population.get(pair[0]);
            let parent2 = population.get(pair[1]);
            children.push(Chromosome::spliced(parent1, parent2, crosspoint));
        }
        Population::new(children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform_population(genes: &[Vec<bool>]) -> Population {
        Population::new(genes.iter().cloned().map(Chromosome::from_genes).collect()).unwrap()
    }

    #[test]
    fn test_breed_produces_one_child_per_pair() {
        let population = uniform_population(&[
            vec![true, true, true, true],
            vec![false, false, false, false],
        ]);
        let pool = vec![0, 1, 1, 0];
        let mut rng = RandomNumberGenerator::from_seed(42);

        let children = SinglePointCrossover.breed(&population, &pool, &mut rng).unwrap();

        assert_eq!(children.len(), 2);
        assert_eq!(children.universe_len(), 4);
    }

    #[test]
    fn test_child_is_prefix_of_first_and_suffix_of_second() {
        let population = uniform_population(&[
            vec![true, true, true, true],
            vec![false, false, false, false],
        ]);
        let pool = vec![0, 1, 1, 0];
        let mut rng = RandomNumberGenerator::from_seed(42);

        let children = SinglePointCrossover.breed(&population, &pool, &mut rng).unwrap();

        for (child, pair) in children.iter().zip(pool.chunks_exact(2)) {
            let parent1 = population.get(pair[0]);
            let parent2 = population.get(pair[1]);
            // Whatever crosspoint was drawn, the child switches from
            // parent1's genes to parent2's exactly once, inside the
            // chromosome.
            let crosspoint = child
                .genes()
                .iter()
                .zip(parent1.genes())
                .take_while(|(c, p)| c == p)
                .count();
            assert!(crosspoint >= 1 && crosspoint <= 3);
            assert_eq!(&child.genes()[..crosspoint], &parent1.genes()[..crosspoint]);
            assert_eq!(&child.genes()[crosspoint..], &parent2.genes()[crosspoint..]);
        }
    }

    #[test]
    fn test_breed_rejects_short_pool() {
        let population = uniform_population(&[
            vec![true, false],
            vec![false, true],
        ]);
        let pool = vec![0, 1];
        let mut rng = RandomNumberGenerator::from_seed(42);

        let result = SinglePointCrossover.breed(&population, &pool, &mut rng);
        assert!(matches!(result, Err(GeneticError::Configuration(_))));
    }

    #[test]
    fn test_breed_rejects_single_gene_universe() {
        let population = uniform_population(&[vec![true], vec![false]]);
        let pool = vec![0, 1, 1, 0];
        let mut rng = RandomNumberGenerator::from_seed(42);

        let result = SinglePointCrossover.breed(&population, &pool, &mut rng);
        assert!(matches!(result, Err(GeneticError::Configuration(_))));
    }
}
