//! # Elitism
//!
//! Guarantees the best-known individual survives breeding. The elite is
//! captured from the generation about to reproduce, judged by its
//! pre-breeding fitness vector; after crossover and mutation, if no
//! value-equal chromosome exists in the offspring, the elite overwrites the
//! slot that held the previous generation's worst individual.
//!
//! Fitness ties resolve to the lowest index on both the best and the worst
//! scan, which keeps the step deterministic under a fixed seed.

use crate::error::{GeneticError, Result};
use crate::population::{Chromosome, Population};

/// Index of the first individual with maximal fitness.
fn best_index(fitness: &[f64]) -> Result<usize> {
    if fitness.is_empty() {
        return Err(GeneticError::EmptyPopulation);
    }
    let mut best = 0;
    for (index, &score) in fitness.iter().enumerate().skip(1) {
        if score > fitness[best] {
            best = index;
        }
    }
    Ok(best)
}

/// Index of the first individual with minimal fitness.
fn worst_index(fitness: &[f64]) -> Result<usize> {
    if fitness.is_empty() {
        return Err(GeneticError::EmptyPopulation);
    }
    let mut worst = 0;
    for (index, &score) in fitness.iter().enumerate().skip(1) {
        if score < fitness[worst] {
            worst = index;
        }
    }
    Ok(worst)
}

/// Captures a copy of the best individual of `population` by its
/// pre-breeding `fitness`.
pub fn capture_elite(population: &Population, fitness: &[f64]) -> Result<Chromosome> {
    if fitness.len() != population.len() {
        return Err(GeneticError::Configuration(format!(
            "Fitness vector length ({}) doesn't match population length ({})",
            fitness.len(),
            population.len()
        )));
    }
    Ok(population.get(best_index(fitness)?).clone())
}

/// Reinserts `elite` into `offspring` if it was lost during breeding.
///
/// `previous_fitness` is the fitness vector of the generation the elite was
/// captured from; its worst slot is the one overwritten.
pub fn reinsert_elite(
    offspring: &mut Population,
    elite: &Chromosome,
    previous_fitness: &[f64],
) -> Result<()> {
    if offspring.contains(elite) {
        return Ok(());
    }
    let slot = worst_index(previous_fitness)?;
    offspring.replace(slot, elite.clone())
}
