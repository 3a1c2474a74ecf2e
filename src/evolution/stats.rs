use crate::error::{GeneticError, Result};
use crate::fitness::round2;

/// Per-generation fitness statistics, appended once per generation and never
/// rewritten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationStats {
    pub max_fitness: f64,
    /// Population average, rounded to two decimal places.
    pub avg_fitness: f64,
}

impl GenerationStats {
    /// Summarizes one generation's fitness vector.
    ///
    /// # Errors
    ///
    /// Returns `EmptyPopulation` for an empty vector.
    pub fn from_fitness(fitness: &[f64]) -> Result<Self> {
        if fitness.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }
        let mut max_fitness = fitness[0];
        let mut total = 0.0;
        for &score in fitness {
            if score > max_fitness {
                max_fitness = score;
            }
            total += score;
        }
        Ok(Self {
            max_fitness,
            avg_fitness: round2(total / fitness.len() as f64),
        })
    }
}
