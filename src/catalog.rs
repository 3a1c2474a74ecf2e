//! # Product Catalog
//!
//! The catalog is the universe of candidate products for a run: a mapping
//! from product code to family and price, fixed before the evolutionary loop
//! starts and never mutated afterwards.
//!
//! A [`CodeIndex`] pins every chromosome position to a product code. It is
//! built once from the catalog's sorted codes, so gene `i` always refers to
//! the same product for the whole run.
//!
//! Catalogs come from two places: synthetic random generation, or a CSV file
//! of `code,family,price` records. A malformed record is a fatal error
//! surfaced before any evolution happens.

use std::collections::BTreeMap;
use std::fs::File;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{GeneticError, Result, ResultExt};
use crate::rng::RandomNumberGenerator;

/// Lowest product code issued by synthetic generation.
const MIN_PRODUCT_CODE: u32 = 10_000;
/// One past the highest product code issued by synthetic generation.
const MAX_PRODUCT_CODE: u32 = 100_000;

/// A single product: its family (category id) and price in the smallest
/// currency unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub family: u32,
    pub price: u64,
}

/// On-disk representation of one catalog row: `code,family,price`.
#[derive(Debug, Serialize, Deserialize)]
struct CatalogRow {
    code: u32,
    family: u32,
    price: u64,
}

/// The fixed universe of products considered for bundling.
///
/// Backed by a `BTreeMap` so iteration order is deterministic; the sorted
/// keys double as the canonical code ordering for [`CodeIndex`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: BTreeMap<u32, ProductRecord>,
}

impl Catalog {
    /// Builds a catalog from an existing code → record mapping.
    pub fn new(products: BTreeMap<u32, ProductRecord>) -> Self {
        Self { products }
    }

    /// Generates a synthetic universe of exactly `count` distinct products.
    ///
    /// Codes are drawn uniformly from `10000..100000`, families from
    /// `0..family_range` and prices from `0..max_price`. Colliding codes are
    /// redrawn until `count` distinct products exist.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if `count` is zero or exceeds the
    /// code space, or if `max_price` or `family_range` is zero.
    pub fn synthetic(
        count: usize,
        max_price: u64,
        family_range: u32,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Self> {
        if count == 0 {
            return Err(GeneticError::Configuration(
                "Synthetic catalog size cannot be zero".to_string(),
            ));
        }
        if count > (MAX_PRODUCT_CODE - MIN_PRODUCT_CODE) as usize {
            return Err(GeneticError::Configuration(format!(
                "Synthetic catalog size {} exceeds the product code space",
                count
            )));
        }
        if max_price == 0 || family_range == 0 {
            return Err(GeneticError::Configuration(
                "Synthetic catalog needs a non-zero price ceiling and family range".to_string(),
            ));
        }

        let mut products = BTreeMap::new();
        while products.len() < count {
            let code = rng.gen_range_u32(MIN_PRODUCT_CODE, MAX_PRODUCT_CODE);
            let record = ProductRecord {
                family: rng.gen_range_u32(0, family_range),
                price: rng.gen_range_u64(0, max_price),
            };
            products.insert(code, record);
        }
        Ok(Self { products })
    }

    /// Loads a catalog from a header-less CSV file of `code,family,price`
    /// records.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened, or a `Catalog` error
    /// naming the offending record if any row is malformed.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .context(format!("Failed to open products file {}", path.display()))?;
        Self::from_reader(file)
    }

    /// Loads a catalog from any reader yielding header-less CSV records.
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(reader);

        let mut products = BTreeMap::new();
        for (line, row) in csv_reader.deserialize::<CatalogRow>().enumerate() {
            let row = row.map_err(|e| {
                GeneticError::Catalog(format!("Malformed product record at line {}: {}", line + 1, e))
            })?;
            if let Some(previous) = products.insert(row.code, ProductRecord {
                family: row.family,
                price: row.price,
            }) {
                warn!(code = row.code, ?previous, "duplicate product code, keeping last record");
            }
        }
        Ok(Self { products })
    }

    /// Writes the catalog as header-less `code,family,price` CSV records.
    pub fn to_csv_path<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path.as_ref())?;
        self.to_writer(file)
    }

    /// Writes the catalog to any writer as header-less CSV records.
    pub fn to_writer<W: io::Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        for (&code, record) in &self.products {
            csv_writer.serialize(CatalogRow {
                code,
                family: record.family,
                price: record.price,
            })?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    /// Looks up a product by code.
    pub fn get(&self, code: u32) -> Option<&ProductRecord> {
        self.products.get(&code)
    }

    /// Number of products in the universe.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Iterates products in ascending code order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &ProductRecord)> {
        self.products.iter().map(|(&code, record)| (code, record))
    }
}

/// The fixed position → product-code mapping shared by every chromosome.
///
/// Built once from the catalog's codes sorted ascending; immutable for the
/// rest of the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeIndex {
    codes: Vec<u32>,
}

impl CodeIndex {
    /// Builds the index from a catalog. `BTreeMap` keys are already sorted,
    /// so the ordering is deterministic across runs.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            codes: catalog.products.keys().copied().collect(),
        }
    }

    /// The universe size `U`: every chromosome must have exactly this many
    /// genes.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// The product code a gene position refers to.
    pub fn code_at(&self, position: usize) -> u32 {
        self.codes[position]
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.codes
    }
}
