use std::env::temp_dir;

use anyhow::Result;

use catalog_datagen::{config::GeneratorConfig, generator::generate_color_listings};

fn main() -> Result<()> {
    env_logger::init();

    let config = GeneratorConfig::new()
        .concept_count(10_000)
        .brand_pool_size(10)
        .product_type_pool_size(8)
        .seed(4242);

    let output_path = temp_dir().join("products-color-listings-fashion-data.json");

    let report = generate_color_listings(&config, &output_path)?;

    println!(
        "generated {} color listing documents ({})",
        report.documents,
        output_path.display()
    );

    Ok(())
}
