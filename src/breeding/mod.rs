//! # Breeding Operators
//!
//! Crossover turns the mating pool into the next generation's chromosomes;
//! mutation then perturbs them in place. Both operate on populations that
//! already satisfy the encoding invariants, so their failure modes are
//! contract violations, not runtime conditions.
pub mod crossover;
pub mod mutation;

pub use crossover::SinglePointCrossover;
pub use mutation::BoundedMutation;
