pub mod breeding;
pub mod catalog;
pub mod elitism;
pub mod error;
pub mod evolution;
pub mod fitness;
pub mod population;
pub mod report;
pub mod rng;
pub mod selection;

// Re-export commonly used types for convenience
pub use catalog::{Catalog, CodeIndex, ProductRecord};
pub use error::{GeneticError, Result, ResultExt};
pub use evolution::{EvolutionLauncher, EvolutionOptions, EvolutionResult, GenerationStats};
pub use population::{Chromosome, Population};
