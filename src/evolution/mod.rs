pub mod launcher;
pub mod options;
pub mod stats;

pub use launcher::{EvolutionLauncher, EvolutionResult};
pub use options::{EvolutionOptions, EvolutionOptionsBuilder};
pub use stats::GenerationStats;
