use std::path::Path;

use log::info;

use crate::{
    GeneratorError,
    config::GeneratorConfig,
    core::{
        item::PassThroughProcessor,
        job::{Job, JobBuilder},
        step::StepBuilder,
    },
    item::{
        catalog::{
            SharedRng,
            color_listing_reader::ColorListingReader,
            concept_reader::{ConceptReader, ConceptReaderBuilder},
            grouping::GroupedDocumentReader,
            product_assembler::ProductAssembler,
            reference::ReferenceData,
            shared_rng,
        },
        composite::CompositeItemWriter,
        json::json_writer::JsonLinesItemWriter,
        support::CollectingItemWriter,
    },
};

/// Commit interval of the export steps.
const CHUNK_SIZE: usize = 100;

/// Counts reported by a details/search run.
#[derive(Debug)]
pub struct DetailsAndSearchReport {
    pub products: usize,
    pub search_documents: usize,
}

/// Counts reported by a color-listings run.
#[derive(Debug)]
pub struct ListingsReport {
    pub documents: usize,
}

fn concept_reader(config: &GeneratorConfig, reference: ReferenceData, rng: SharedRng) -> ConceptReader {
    let mut builder = ConceptReaderBuilder::new(reference)
        .concept_count(config.concept_count)
        .brand_pool_size(config.brand_pool_size)
        .product_type_pool_size(config.product_type_pool_size)
        .rng(rng);

    if let Some(timestamp) = config.timestamp {
        builder = builder.timestamp(timestamp);
    }

    builder.build()
}

/// Details/search mode: exports one nested product document per
/// concept to `details_path`, then one color-grouped search document per
/// (product, color) to `search_path`, both as newline-delimited JSON.
///
/// Identifiers and EANs are sampled without collision checks; duplicates
/// across a large run are accepted.
pub fn generate_details_and_search(
    config: &GeneratorConfig,
    details_path: &Path,
    search_path: &Path,
) -> Result<DetailsAndSearchReport, GeneratorError> {
    let reference = ReferenceData::fashion();
    let rng = shared_rng(config.seed);

    info!(
        "generating {} product concepts into {} and {}",
        config.concept_count,
        details_path.display(),
        search_path.display()
    );

    // Phase 1: sample concepts, assemble products, export the details file
    // while buffering the products for grouping.
    let concepts = concept_reader(config, reference.clone(), rng.clone());
    let assembler = ProductAssembler::new(&reference, rng);

    let details_writer = JsonLinesItemWriter::from_path(details_path)?;
    let buffer = CollectingItemWriter::new();
    let details_fan_out = CompositeItemWriter::new()
        .writer(&details_writer)
        .writer(&buffer);

    let assemble_step = StepBuilder::new()
        .name("assemble-products")
        .reader(&concepts)
        .processor(&assembler)
        .writer(&details_fan_out)
        .chunk(CHUNK_SIZE)
        .build();

    JobBuilder::new()
        .name("catalog-details")
        .start(&assemble_step)
        .build()
        .run()?;

    // Phase 2: regroup the buffered products by color and export the
    // search file.
    let products = buffer.take();
    let product_count = products.len();

    let grouped = GroupedDocumentReader::new(products);
    let pass_through = PassThroughProcessor::default();
    let search_writer = JsonLinesItemWriter::from_path(search_path)?;

    let group_step = StepBuilder::new()
        .name("group-skus-by-color")
        .reader(&grouped)
        .processor(&pass_through)
        .writer(&search_writer)
        .chunk(CHUNK_SIZE)
        .build();

    JobBuilder::new()
        .name("catalog-search")
        .start(&group_step)
        .build()
        .run()?;

    Ok(DetailsAndSearchReport {
        products: product_count,
        search_documents: group_step.write_count(),
    })
}

/// Color-listings mode: exports one independent document per
/// (concept, color) pair to `output_path`, all colors of a concept sharing
/// a UUID product id.
pub fn generate_color_listings(
    config: &GeneratorConfig,
    output_path: &Path,
) -> Result<ListingsReport, GeneratorError> {
    let reference = ReferenceData::fashion();
    let rng = shared_rng(config.seed);

    info!(
        "generating {} listing concepts into {}",
        config.concept_count,
        output_path.display()
    );

    let concepts = concept_reader(config, reference.clone(), rng.clone());
    let listings = ColorListingReader::new(&reference, concepts, rng);
    let pass_through = PassThroughProcessor::default();
    let writer = JsonLinesItemWriter::from_path(output_path)?;

    let export_step = StepBuilder::new()
        .name("export-color-listings")
        .reader(&listings)
        .processor(&pass_through)
        .writer(&writer)
        .chunk(CHUNK_SIZE)
        .build();

    JobBuilder::new()
        .name("catalog-listings")
        .start(&export_step)
        .build()
        .run()?;

    Ok(ListingsReport {
        documents: export_step.write_count(),
    })
}
