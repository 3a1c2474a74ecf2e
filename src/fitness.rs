//! # Fitness Evaluation
//!
//! Decodes chromosomes into a price sum plus a per-family product count and
//! scores them. The score combines two terms:
//!
//! 1. **Price term** — rewards bundle prices that approach the target from
//!    below (penalty-weighted) and shrinks monotonically once the price
//!    exceeds the target.
//! 2. **Diversity term** — rewards spreading the included products across
//!    many families.
//!
//! When the diversity term applies, the combined score is rounded to two
//! decimal places. An empty bundle short-circuits both terms to the fixed
//! sentinel `1.0 + 1.0`, which keeps the evaluation total without dividing
//! by zero.
//!
//! The evaluator holds explicit references to the catalog and code index —
//! there is no ambient universe state.

use std::collections::BTreeMap;

use tracing::trace;

use crate::catalog::{Catalog, CodeIndex};
use crate::error::{GeneticError, Result};
use crate::evolution::EvolutionOptions;
use crate::population::{Chromosome, Population};

/// Count of included products per family id.
///
/// A `BTreeMap` keeps the aggregation order deterministic, so scores are
/// bit-reproducible given a fixed seed.
pub type FamilyDistribution = BTreeMap<u32, u32>;

/// Rounds to two decimal places, the way the combined score and the average
/// fitness statistic are reported.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Scores chromosomes against one fixed catalog, code index and scoring
/// configuration.
#[derive(Debug, Clone)]
pub struct FitnessEvaluator<'a> {
    catalog: &'a Catalog,
    codes: &'a CodeIndex,
    target_price: u64,
    factor: f64,
    penalty: f64,
}

impl<'a> FitnessEvaluator<'a> {
    pub fn new(catalog: &'a Catalog, codes: &'a CodeIndex, options: &EvolutionOptions) -> Self {
        Self {
            catalog,
            codes,
            target_price: options.target_price(),
            factor: options.factor(),
            penalty: options.penalty(),
        }
    }

    /// Decodes a chromosome into the total price of its included products
    /// and the count of included products per family.
    ///
    /// # Errors
    ///
    /// Returns `InvalidChromosome` if the chromosome's length disagrees with
    /// the code index, and `Catalog` if a code has no catalog record; both
    /// are contract violations, not runtime conditions.
    pub fn quantify(&self, chromosome: &Chromosome) -> Result<(u64, FamilyDistribution)> {
        if chromosome.len() != self.codes.len() {
            return Err(GeneticError::InvalidChromosome(format!(
                "Chromosome has {} genes but the code index has {} positions",
                chromosome.len(),
                self.codes.len()
            )));
        }

        let mut price = 0u64;
        let mut families = FamilyDistribution::new();
        for position in 0..chromosome.len() {
            if !chromosome.is_set(position) {
                continue;
            }
            let code = self.codes.code_at(position);
            let record = self.catalog.get(code).ok_or_else(|| {
                GeneticError::Catalog(format!("Product code {} is not in the catalog", code))
            })?;
            price += record.price;
            *families.entry(record.family).or_insert(0) += 1;
        }
        Ok((price, families))
    }

    /// Computes the fitness score for a quantified bundle.
    ///
    /// `price == 0` and an empty family distribution are the degenerate
    /// empty-bundle cases; each contributes the fixed sentinel `1.0` instead
    /// of a division by zero, and the sentinel path skips rounding.
    pub fn score(&self, price: u64, families: &FamilyDistribution) -> f64 {
        let target = self.target_price as f64;
        let mut fit = if price == 0 {
            1.0
        } else if price < self.target_price {
            6.0 * self.penalty * self.factor * target / (target - price as f64 + target)
                - 2.0 * self.factor
        } else {
            6.0 * self.factor * target / price as f64
        };

        let nr_families = families.len() as f64;
        let nr_products: u32 = families.values().sum();
        if nr_products > 0 {
            fit += self.factor * nr_families / nr_products as f64;
            fit = round2(fit);
        } else {
            fit += 1.0;
        }
        fit
    }

    /// Applies `quantify` + `score` to every chromosome, preserving index
    /// order.
    ///
    /// Per-individual diagnostics go to the tracing sink only; they never
    /// affect the returned vector.
    pub fn evaluate_population(&self, population: &Population) -> Result<Vec<f64>> {
        let mut fitness = Vec::with_capacity(population.len());
        for (index, chromosome) in population.iter().enumerate() {
            let (price, families) = self.quantify(chromosome)?;
            let score = self.score(price, &families);
            if !score.is_finite() {
                return Err(GeneticError::FitnessCalculation(format!(
                    "Non-finite fitness score encountered: {}",
                    score
                )));
            }
            trace!(
                individual = index,
                gene = %chromosome,
                price,
                nr_families = families.len(),
                fitness = score,
                "evaluated individual"
            );
            fitness.push(score);
        }
        Ok(fitness)
    }
}
