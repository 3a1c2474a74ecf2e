//! # Reporting Sink
//!
//! Output-only observers for the evolutionary loop. The launcher calls a
//! [`Reporter`] after each generation and once at run end with the decoded
//! bundles; reporters never influence control flow, and the loop behaves
//! identically under [`NullReporter`] and [`TraceReporter`].

use tracing::info;

use crate::catalog::{Catalog, CodeIndex};
use crate::error::{GeneticError, Result};
use crate::evolution::GenerationStats;
use crate::fitness::FamilyDistribution;
use crate::population::{Chromosome, Population};

/// A candidate bundle decoded back into catalog terms: the included product
/// codes, their total price, and the per-family breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bundle {
    pub codes: Vec<u32>,
    pub total_price: u64,
    pub families: FamilyDistribution,
}

/// Decodes one chromosome against the catalog and code index.
///
/// # Errors
///
/// Returns `InvalidChromosome` on a length mismatch with the code index and
/// `Catalog` when a set gene points at a code the catalog does not know.
pub fn decode_chromosome(
    chromosome: &Chromosome,
    catalog: &Catalog,
    codes: &CodeIndex,
) -> Result<Bundle> {
    if chromosome.len() != codes.len() {
        return Err(GeneticError::InvalidChromosome(format!(
            "Chromosome has {} genes but the code index has {} positions",
            chromosome.len(),
            codes.len()
        )));
    }

    let mut included = Vec::new();
    let mut total_price = 0u64;
    let mut families = FamilyDistribution::new();
    for position in 0..chromosome.len() {
        if !chromosome.is_set(position) {
            continue;
        }
        let code = codes.code_at(position);
        let record = catalog.get(code).ok_or_else(|| {
            GeneticError::Catalog(format!("Product code {} is not in the catalog", code))
        })?;
        included.push(code);
        total_price += record.price;
        *families.entry(record.family).or_insert(0) += 1;
    }
    Ok(Bundle {
        codes: included,
        total_price,
        families,
    })
}

/// Decodes every individual of a population, preserving index order.
pub fn decode_population(
    population: &Population,
    catalog: &Catalog,
    codes: &CodeIndex,
) -> Result<Vec<Bundle>> {
    population
        .iter()
        .map(|chromosome| decode_chromosome(chromosome, catalog, codes))
        .collect()
}

/// Observer of the evolutionary loop. All methods default to no-ops.
pub trait Reporter {
    /// Called once per generation, after evaluation and statistics.
    fn on_generation(
        &mut self,
        _generation: usize,
        _population: &Population,
        _fitness: &[f64],
        _stats: &GenerationStats,
    ) {
    }

    /// Called once at run end with the final population decoded into
    /// bundles, index-aligned with its fitness vector.
    fn on_run_end(&mut self, _bundles: &[Bundle], _fitness: &[f64]) {}
}

/// A reporter that observes nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {}

/// A reporter that logs generations and final bundles through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TraceReporter;

impl Reporter for TraceReporter {
    fn on_generation(
        &mut self,
        generation: usize,
        _population: &Population,
        _fitness: &[f64],
        stats: &GenerationStats,
    ) {
        info!(
            generation,
            max_fitness = stats.max_fitness,
            avg_fitness = stats.avg_fitness,
            "generation complete"
        );
    }

    fn on_run_end(&mut self, bundles: &[Bundle], fitness: &[f64]) {
        for (index, (bundle, score)) in bundles.iter().zip(fitness).enumerate() {
            info!(
                individual = index,
                codes = ?bundle.codes,
                total_price = bundle.total_price,
                families = ?bundle.families,
                fitness = score,
                "final bundle"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::catalog::ProductRecord;

    fn fixture() -> (Catalog, CodeIndex) {
        let mut products = BTreeMap::new();
        products.insert(10, ProductRecord { family: 0, price: 3000 });
        products.insert(20, ProductRecord { family: 1, price: 3000 });
        products.insert(30, ProductRecord { family: 0, price: 3000 });
        products.insert(40, ProductRecord { family: 1, price: 3000 });
        let catalog = Catalog::new(products);
        let codes = CodeIndex::from_catalog(&catalog);
        (catalog, codes)
    }

    #[test]
    fn test_decode_lists_included_codes() {
        let (catalog, codes) = fixture();
        let chromosome = Chromosome::from_genes(vec![true, false, true, false]);

        let bundle = decode_chromosome(&chromosome, &catalog, &codes).unwrap();

        assert_eq!(bundle.codes, vec![10, 30]);
        assert_eq!(bundle.total_price, 6000);
        assert_eq!(bundle.families.get(&0), Some(&2));
    }

    #[test]
    fn test_decode_empty_bundle() {
        let (catalog, codes) = fixture();
        let chromosome = Chromosome::from_genes(vec![false, false, false, false]);

        let bundle = decode_chromosome(&chromosome, &catalog, &codes).unwrap();

        assert!(bundle.codes.is_empty());
        assert_eq!(bundle.total_price, 0);
        assert!(bundle.families.is_empty());
    }

    #[test]
    fn test_decode_rejects_mismatched_length() {
        let (catalog, codes) = fixture();
        let chromosome = Chromosome::from_genes(vec![true]);

        let result = decode_chromosome(&chromosome, &catalog, &codes);
        assert!(matches!(result, Err(GeneticError::InvalidChromosome(_))));
    }
}
