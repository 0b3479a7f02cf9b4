#![cfg_attr(docsrs, feature(doc_cfg))]

/*!
 # catalog-datagen

 A batch generator of synthetic fashion e-commerce catalog records, built to
 seed search/indexing datastores with realistic-looking products and SKUs.

 ## Core concepts

 Generation runs as a chunk-oriented batch pipeline:

 - **Job:** an ordered sequence of steps making up one generation run.
 - **Step:** reads items one at a time, processes them, and writes them in
   chunks.
 - **ItemReader:** source of items (sampled product concepts, grouped
   documents, ...).
 - **ItemProcessor:** business logic turning a read item into an output
   record (e.g. concept into nested product document).
 - **ItemWriter:** record sink, chiefly the newline-delimited JSON file
   writer.

 ## Generation modes

 - [`generator::generate_details_and_search`] — one nested product document
   per concept (every color/size variant embedded) plus one denormalized
   search document per (product, color), written to two NDJSON files.
 - [`generator::generate_color_listings`] — one independent document per
   (concept, color) pair sharing a UUID product id, written to one NDJSON
   file.

 ## Example

```rust,no_run
use std::env::temp_dir;

use catalog_datagen::{config::GeneratorConfig, generator::generate_details_and_search};

fn main() -> Result<(), catalog_datagen::GeneratorError> {
    let config = GeneratorConfig::new()
        .concept_count(1_000)
        .brand_pool_size(17)
        .product_type_pool_size(13)
        .seed(42);

    let report = generate_details_and_search(
        &config,
        &temp_dir().join("products-details.json"),
        &temp_dir().join("products-search.json"),
    )?;

    println!(
        "generated {} products and {} search documents",
        report.products, report.search_documents
    );

    Ok(())
}
```
 */

/// Core batch machinery: item traits, steps and jobs.
pub mod core;

/// Error types for generation runs.
pub mod error;

#[doc(inline)]
pub use error::*;

/// Run configuration.
pub mod config;

/// Item readers and writers, including the catalog domain itself.
pub mod item;

/// High-level entry points wiring config, pipeline and output files.
pub mod generator;
