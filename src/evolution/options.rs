//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct is the run configuration: population size,
//! generation limit, the scoring constants (target price, factor, penalty),
//! the mutation probability, the elitism switch and the optional random
//! seed. It is supplied once at construction and immutable for the run.
//!
//! ## Example
//!
//! ```rust
//! use kitgen::evolution::EvolutionOptions;
//!
//! let options = EvolutionOptions::builder()
//!     .population_size(40)
//!     .num_generations(200)
//!     .target_price(9000)
//!     .mutation_probability(0.05)
//!     .seed(42)
//!     .build();
//!
//! assert_eq!(options.num_generations(), 200);
//! ```

use crate::error::{GeneticError, Result};

#[derive(Debug, Clone)]
pub struct EvolutionOptions {
    population_size: usize,
    num_generations: usize,
    target_price: u64,
    factor: f64,
    penalty: f64,
    mutation_probability: f64,
    elitism: bool,
    seed: Option<u64>,
}

impl EvolutionOptions {
    /// The population size `P`, fixed for the entire run.
    pub fn population_size(&self) -> usize {
        self.population_size
    }

    /// The generation limit: the single termination criterion of the loop.
    pub fn num_generations(&self) -> usize {
        self.num_generations
    }

    /// The price the bundle should approximate, in the smallest currency
    /// unit.
    pub fn target_price(&self) -> u64 {
        self.target_price
    }

    /// Weight of the family-diversity term.
    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Weight of the below-target price penalty.
    pub fn penalty(&self) -> f64 {
        self.penalty
    }

    /// Probability driving the per-pass mutation budget
    /// `floor(probability * P * U)`.
    pub fn mutation_probability(&self) -> f64 {
        self.mutation_probability
    }

    /// Whether the best individual is reinserted when breeding loses it.
    pub fn elitism(&self) -> bool {
        self.elitism
    }

    /// Seed for the run's random source. `None` means entropy seeding, and
    /// the run is not reproducible.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Checks the options for values the operators cannot work with.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error naming the offending value.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(GeneticError::Configuration(
                "Population size must be at least 2 for tournament selection".to_string(),
            ));
        }
        if self.target_price == 0 {
            return Err(GeneticError::Configuration(
                "Target price cannot be zero".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_probability) {
            return Err(GeneticError::Configuration(format!(
                "Mutation probability must be within [0, 1], got {}",
                self.mutation_probability
            )));
        }
        if !self.factor.is_finite() || !self.penalty.is_finite() {
            return Err(GeneticError::Configuration(
                "Factor and penalty must be finite".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            population_size: 40,
            num_generations: 100,
            target_price: 9000,
            factor: 500.0,
            penalty: 0.25,
            mutation_probability: 0.05,
            elitism: true,
            seed: None,
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Provides a fluent interface for constructing `EvolutionOptions`
/// instances; unset fields fall back to the defaults.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    population_size: Option<usize>,
    num_generations: Option<usize>,
    target_price: Option<u64>,
    factor: Option<f64>,
    penalty: Option<f64>,
    mutation_probability: Option<f64>,
    elitism: Option<bool>,
    seed: Option<u64>,
}

impl EvolutionOptionsBuilder {
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    pub fn num_generations(mut self, value: usize) -> Self {
        self.num_generations = Some(value);
        self
    }

    pub fn target_price(mut self, value: u64) -> Self {
        self.target_price = Some(value);
        self
    }

    pub fn factor(mut self, value: f64) -> Self {
        self.factor = Some(value);
        self
    }

    pub fn penalty(mut self, value: f64) -> Self {
        self.penalty = Some(value);
        self
    }

    pub fn mutation_probability(mut self, value: f64) -> Self {
        self.mutation_probability = Some(value);
        self
    }

    pub fn elitism(mut self, value: bool) -> Self {
        self.elitism = Some(value);
        self
    }

    pub fn seed(mut self, value: u64) -> Self {
        self.seed = Some(value);
        self
    }

    /// Builds the `EvolutionOptions` instance.
    pub fn build(self) -> EvolutionOptions {
        let defaults = EvolutionOptions::default();
        EvolutionOptions {
            population_size: self.population_size.unwrap_or(defaults.population_size),
            num_generations: self.num_generations.unwrap_or(defaults.num_generations),
            target_price: self.target_price.unwrap_or(defaults.target_price),
            factor: self.factor.unwrap_or(defaults.factor),
            penalty: self.penalty.unwrap_or(defaults.penalty),
            mutation_probability: self
                .mutation_probability
                .unwrap_or(defaults.mutation_probability),
            elitism: self.elitism.unwrap_or(defaults.elitism),
            seed: self.seed.or(defaults.seed),
        }
    }
}
