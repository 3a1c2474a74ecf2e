use std::collections::BTreeMap;

use kitgen::catalog::{Catalog, CodeIndex, ProductRecord};
use kitgen::evolution::EvolutionOptions;
use kitgen::fitness::{FamilyDistribution, FitnessEvaluator};
use kitgen::population::Chromosome;

/// The regression scenario: four products priced 3000, alternating between
/// two families, with a 9000 target and the original scoring constants.
fn fixture() -> (Catalog, EvolutionOptions) {
    let mut products = BTreeMap::new();
    products.insert(10, ProductRecord { family: 0, price: 3000 });
    products.insert(20, ProductRecord { family: 1, price: 3000 });
    products.insert(30, ProductRecord { family: 0, price: 3000 });
    products.insert(40, ProductRecord { family: 1, price: 3000 });

    let options = EvolutionOptions::builder()
        .target_price(9000)
        .factor(500.0)
        .penalty(0.25)
        .build();

    (Catalog::new(products), options)
}

#[test]
fn test_quantify_matches_included_products() {
    let (catalog, options) = fixture();
    let codes = CodeIndex::from_catalog(&catalog);
    let evaluator = FitnessEvaluator::new(&catalog, &codes, &options);

    let chromosome = Chromosome::from_genes(vec![true, true, false, false]);
    let (price, families) = evaluator.quantify(&chromosome).unwrap();

    assert_eq!(price, 6000);
    assert_eq!(families.len(), 2);
    assert_eq!(families.get(&0), Some(&1));
    assert_eq!(families.get(&1), Some(&1));
    // Family counts sum to the number of set genes.
    assert_eq!(families.values().sum::<u32>(), 2);
}

#[test]
fn test_golden_regression_value() {
    let (catalog, options) = fixture();
    let codes = CodeIndex::from_catalog(&catalog);
    let evaluator = FitnessEvaluator::new(&catalog, &codes, &options);

    let chromosome = Chromosome::from_genes(vec![true, true, false, false]);
    let (price, families) = evaluator.quantify(&chromosome).unwrap();

    // Below-target price term -437.5 plus diversity term 500.0, rounded.
    assert_eq!(evaluator.score(price, &families), 62.5);
}

#[test]
fn test_empty_bundle_scores_both_sentinels() {
    let (catalog, options) = fixture();
    let codes = CodeIndex::from_catalog(&catalog);
    let evaluator = FitnessEvaluator::new(&catalog, &codes, &options);

    let chromosome = Chromosome::from_genes(vec![false, false, false, false]);
    let (price, families) = evaluator.quantify(&chromosome).unwrap();

    assert_eq!(price, 0);
    assert!(families.is_empty());
    assert_eq!(evaluator.score(price, &families), 2.0);
}

#[test]
fn test_below_target_branch_decreases_with_distance() {
    let (catalog, options) = fixture();
    let codes = CodeIndex::from_catalog(&catalog);
    let evaluator = FitnessEvaluator::new(&catalog, &codes, &options);

    let mut families = FamilyDistribution::new();
    families.insert(0, 2);

    let mut previous = f64::INFINITY;
    for price in [8500u64, 7000, 5000, 2000, 500] {
        let score = evaluator.score(price, &families);
        assert!(
            score < previous,
            "score {} at price {} did not decrease",
            score,
            price
        );
        previous = score;
    }
}

#[test]
fn test_above_target_branch_decreases_as_price_grows() {
    let (catalog, options) = fixture();
    let codes = CodeIndex::from_catalog(&catalog);
    let evaluator = FitnessEvaluator::new(&catalog, &codes, &options);

    let mut families = FamilyDistribution::new();
    families.insert(0, 2);

    let mut previous = f64::INFINITY;
    for price in [9000u64, 10000, 15000, 30000] {
        let score = evaluator.score(price, &families);
        assert!(
            score < previous,
            "score {} at price {} did not decrease",
            score,
            price
        );
        previous = score;
    }
}

#[test]
fn test_diversity_rewards_spread_families() {
    let (catalog, options) = fixture();
    let codes = CodeIndex::from_catalog(&catalog);
    let evaluator = FitnessEvaluator::new(&catalog, &codes, &options);

    let mut spread = FamilyDistribution::new();
    spread.insert(0, 1);
    spread.insert(1, 1);

    let mut clumped = FamilyDistribution::new();
    clumped.insert(0, 2);

    assert!(evaluator.score(6000, &spread) > evaluator.score(6000, &clumped));
}
