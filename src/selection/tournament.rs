use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// Parent selection through size-2 tournaments.
///
/// For every pool slot, two distinct individuals are drawn uniformly from
/// the current population and the one with strictly greater fitness wins; on
/// an exact tie the first-drawn index wins. The output is an ordered mating
/// pool of `2 * P` population indices — consecutive pairs become the parents
/// of one child — so the same individual can parent many children.
///
/// # Examples
///
/// ```
/// use kitgen::selection::TournamentSelection;
/// use kitgen::rng::RandomNumberGenerator;
///
/// let fitness = vec![5.0, 10.0, 7.5];
/// let mut rng = RandomNumberGenerator::from_seed(42);
///
/// let pool = TournamentSelection.select(&fitness, &mut rng).unwrap();
/// assert_eq!(pool.len(), 6);
/// assert!(pool.iter().all(|&index| index < fitness.len()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TournamentSelection;

impl TournamentSelection {
    /// Builds the mating pool for one generation.
    ///
    /// # Errors
    ///
    /// Returns `EmptyPopulation` for an empty fitness vector and a
    /// `Configuration` error when the population is too small to draw two
    /// distinct tournament participants.
    pub fn select(&self, fitness: &[f64], rng: &mut RandomNumberGenerator) -> Result<Vec<usize>> {
        if fitness.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }
        if fitness.len() < 2 {
            return Err(GeneticError::Configuration(
                "Tournament selection needs at least 2 individuals".to_string(),
            ));
        }

        let population_size = fitness.len();
        let mut pool = Vec::with_capacity(2 * population_size);
        for _ in 0..2 * population_size {
            pool.push(self.run_tournament(fitness, rng));
        }
        Ok(pool)
    }

    /// Runs a single tournament and returns the index of the winner.
    fn run_tournament(&self, fitness: &[f64], rng: &mut RandomNumberGenerator) -> usize {
        let (first, second) = rng.distinct_pair(fitness.len());
        // Strictly greater wins; the first-drawn index wins ties.
        if fitness[second] > fitness[first] {
            second
        } else {
            first
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_has_two_draws_per_individual() {
        let fitness = vec![0.5, 0.8, 0.3, 0.9, 0.1];
        let mut rng = RandomNumberGenerator::from_seed(42);

        let pool = TournamentSelection.select(&fitness, &mut rng).unwrap();

        assert_eq!(pool.len(), 10);
        assert!(pool.iter().all(|&index| index < fitness.len()));
    }

    #[test]
    fn test_better_individual_always_wins_pairwise() {
        // With two individuals every tournament pits them against each
        // other, so the weaker one can never enter the pool.
        let fitness = vec![5.0, 10.0];
        let mut rng = RandomNumberGenerator::from_seed(42);

        for _ in 0..50 {
            let pool = TournamentSelection.select(&fitness, &mut rng).unwrap();
            assert!(pool.iter().all(|&index| index == 1));
        }
    }

    #[test]
    fn test_tie_keeps_first_drawn_index() {
        let fitness = vec![3.0, 3.0];
        let mut rng = RandomNumberGenerator::from_seed(42);

        // All fitness values equal: winners are exactly the first-drawn
        // indices, which must still be valid.
        let pool = TournamentSelection.select(&fitness, &mut rng).unwrap();
        assert_eq!(pool.len(), 4);
        assert!(pool.iter().all(|&index| index < 2));
    }

    #[test]
    fn test_empty_population_is_rejected() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        let result = TournamentSelection.select(&[], &mut rng);

        assert!(matches!(result, Err(GeneticError::EmptyPopulation)));
    }

    #[test]
    fn test_single_individual_is_rejected() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        let result = TournamentSelection.select(&[1.0], &mut rng);

        assert!(matches!(result, Err(GeneticError::Configuration(_))));
    }
}
