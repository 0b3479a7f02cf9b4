use std::env::temp_dir;

use anyhow::Result;

use catalog_datagen::{config::GeneratorConfig, generator::generate_details_and_search};

fn main() -> Result<()> {
    env_logger::init();

    let config = GeneratorConfig::new()
        .concept_count(20_000)
        .brand_pool_size(17)
        .product_type_pool_size(13);

    let details_path = temp_dir().join("products-details-index-fashion-data.json");
    let search_path = temp_dir().join("products-search-index-fashion-data.json");

    let report = generate_details_and_search(&config, &details_path, &search_path)?;

    println!(
        "generated {} products ({}) and {} search documents ({})",
        report.products,
        details_path.display(),
        report.search_documents,
        search_path.display()
    );

    Ok(())
}
