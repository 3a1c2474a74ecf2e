//! # Error Types
//!
//! This module defines the error types for the genetic search. It provides
//! specific variants for the failure scenarios that can occur while building
//! a catalog or driving the evolutionary loop.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use kitgen::error::{GeneticError, Result};
//!
//! fn some_function() -> Result<()> {
//!     // Function implementation
//!     Ok(())
//! }
//!
//! fn caller() {
//!     match some_function() {
//!         Ok(_) => println!("Success!"),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! Using the `ResultExt` trait to add context to errors:
//!
//! ```rust
//! use kitgen::error::{Result, ResultExt};
//! use std::fs::File;
//!
//! fn open_products_file(path: &str) -> Result<File> {
//!     File::open(path).context("Failed to open products file")
//! }
//! ```

use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Represents errors that can occur while preparing or running the search.
///
/// This enum provides specific error variants for different failure scenarios
/// that may occur during catalog construction and the evolution process.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when a catalog record cannot be read or parsed.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when a chromosome violates the population contract.
    #[error("Chromosome error: {0}")]
    InvalidChromosome(String),

    /// Error that occurs when a fitness calculation produces an invalid value.
    #[error("Fitness calculation error: {0}")]
    FitnessCalculation(String),

    /// Error that occurs when an I/O operation fails.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error that occurs when reading or writing CSV records fails.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A generic error with a custom message.
    #[error("{0}")]
    Other(String),
}

/// A specialized Result type for genetic search operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the
/// error type fixed to `GeneticError`.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Result to add context to errors.
///
/// This trait provides a convenient way to add context to errors when
/// converting from one error type to `GeneticError`.
///
/// ## Examples
///
/// ```rust
/// use kitgen::error::ResultExt;
/// use std::fs::File;
///
/// fn read_file(path: &str) -> kitgen::error::Result<()> {
///     File::open(path).context("Failed to open file")?;
///     Ok(())
/// }
/// ```
pub trait ResultExt<T, E> {
    /// Adds context to an error.
    ///
    /// This method converts the error to a `GeneticError` with the provided
    /// context.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| GeneticError::Other(format!("{}: {}", context, e)))
    }
}
