use std::env;
use std::process::ExitCode;

use tracing::{error, info};

use kitgen::catalog::{Catalog, CodeIndex};
use kitgen::evolution::{EvolutionLauncher, EvolutionOptions};
use kitgen::report::TraceReporter;
use kitgen::rng::RandomNumberGenerator;

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> kitgen::Result<()> {
    // Defaults mirror the original product-kit search: 40 individuals
    // hunting a 9000-cent bundle over a 16-product universe.
    let options = EvolutionOptions::default();
    let mut rng = RandomNumberGenerator::from_optional_seed(options.seed());

    let catalog = match env::args().nth(1) {
        Some(path) => Catalog::from_csv_path(path)?,
        None => Catalog::synthetic(16, 10_000, 10, &mut rng)?,
    };
    let codes = CodeIndex::from_catalog(&catalog);
    info!(universe = codes.len(), population = options.population_size(), "starting evolution");

    let launcher = EvolutionLauncher::new(catalog, codes, options);
    let result = launcher.run(&mut rng, &mut TraceReporter)?;

    if let Some((chromosome, score)) = result.best() {
        info!(gene = %chromosome, fitness = score, "best individual");
    }
    Ok(())
}
