//! # EvolutionLauncher
//!
//! Owns the immutable run context — catalog, code index, options — and
//! drives the generation loop: evaluate, record statistics, check the
//! generation limit, then select, breed, mutate and reinsert the elite.
//! Every stage runs to completion before the next begins and all randomness
//! flows through the single generator handed to [`EvolutionLauncher::run`],
//! so a seeded run is reproducible end to end.

use tracing::debug;

use crate::breeding::{BoundedMutation, SinglePointCrossover};
use crate::catalog::{Catalog, CodeIndex};
use crate::elitism::{capture_elite, reinsert_elite};
use crate::error::{GeneticError, Result};
use crate::fitness::FitnessEvaluator;
use crate::population::{Chromosome, Population};
use crate::report::{decode_population, Reporter};
use crate::rng::RandomNumberGenerator;
use crate::selection::TournamentSelection;

use super::options::EvolutionOptions;
use super::stats::GenerationStats;

/// Terminal state of a run: the final population, its fitness vector, and
/// the per-generation statistics.
#[derive(Debug, Clone)]
pub struct EvolutionResult {
    pub population: Population,
    pub fitness: Vec<f64>,
    pub stats: Vec<GenerationStats>,
}

impl EvolutionResult {
    /// The best individual of the final generation and its score; ties
    /// resolve to the lowest index.
    pub fn best(&self) -> Option<(&Chromosome, f64)> {
        let mut best: Option<usize> = None;
        for (index, &score) in self.fitness.iter().enumerate() {
            match best {
                Some(current) if self.fitness[current] >= score => {}
                _ => best = Some(index),
            }
        }
        best.map(|index| (self.population.get(index), self.fitness[index]))
    }
}

/// Manages the evolution process over one fixed catalog and configuration.
#[derive(Debug, Clone)]
pub struct EvolutionLauncher {
    catalog: Catalog,
    codes: CodeIndex,
    options: EvolutionOptions,
    selection: TournamentSelection,
    crossover: SinglePointCrossover,
    mutation: BoundedMutation,
}

impl EvolutionLauncher {
    /// Creates a launcher over `catalog` with gene positions fixed by
    /// `codes`.
    pub fn new(catalog: Catalog, codes: CodeIndex, options: EvolutionOptions) -> Self {
        let mutation = BoundedMutation::new(options.mutation_probability());
        Self {
            catalog,
            codes,
            options,
            selection: TournamentSelection,
            crossover: SinglePointCrossover,
            mutation,
        }
    }

    /// Runs the full evolutionary loop to the configured generation limit.
    ///
    /// The reporter observes each generation and the decoded final
    /// population; it cannot influence the loop. The returned statistics
    /// hold one entry per evaluated generation, `0..=num_generations`.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error for invalid options or a code index
    /// that disagrees with the catalog, and propagates any contract
    /// violation surfaced by the operators.
    pub fn run(
        &self,
        rng: &mut RandomNumberGenerator,
        reporter: &mut dyn Reporter,
    ) -> Result<EvolutionResult> {
        self.options.validate()?;
        if self.codes.is_empty() {
            return Err(GeneticError::Configuration(
                "Cannot evolve over an empty universe".to_string(),
            ));
        }
        if self.codes.len() != self.catalog.len() {
            return Err(GeneticError::Configuration(format!(
                "Code index covers {} products but the catalog holds {}",
                self.codes.len(),
                self.catalog.len()
            )));
        }

        let evaluator = FitnessEvaluator::new(&self.catalog, &self.codes, &self.options);
        let mut population =
            Population::random(self.options.population_size(), self.codes.len(), rng)?;
        let mut stats = Vec::with_capacity(self.options.num_generations() + 1);
        let mut generation = 0;

        let final_fitness = loop {
            let fitness = evaluator.evaluate_population(&population)?;
            let generation_stats = GenerationStats::from_fitness(&fitness)?;
            debug!(
                generation,
                max_fitness = generation_stats.max_fitness,
                avg_fitness = generation_stats.avg_fitness,
                "generation evaluated"
            );
            stats.push(generation_stats);
            reporter.on_generation(generation, &population, &fitness, &generation_stats);

            // The single termination check: the configured limit is reached,
            // breeding is skipped for this generation.
            if generation == self.options.num_generations() {
                break fitness;
            }

            let elite = if self.options.elitism() {
                Some(capture_elite(&population, &fitness)?)
            } else {
                None
            };

            let pool = self.selection.select(&fitness, rng)?;
            let mut offspring = self.crossover.breed(&population, &pool, rng)?;
            self.mutation.apply(&mut offspring, rng);
            if let Some(elite) = &elite {
                reinsert_elite(&mut offspring, elite, &fitness)?;
            }

            population = offspring;
            generation += 1;
        };

        let bundles = decode_population(&population, &self.catalog, &self.codes)?;
        reporter.on_run_end(&bundles, &final_fitness);

        Ok(EvolutionResult {
            population,
            fitness: final_fitness,
            stats,
        })
    }
}
