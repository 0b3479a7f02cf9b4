use std::cell::Cell;

use log::debug;
use rand::{Rng, seq::IndexedRandom};
use time::OffsetDateTime;

use crate::{
    GeneratorError,
    core::item::{ItemReader, ItemReaderResult},
};

use super::{
    SharedRng, shared_rng,
    reference::{Brand, ProductType, ReferenceData},
};

/// One sampled product concept: the (brand, type, material, model) tuple
/// plus the colors its variants will come in. Every document of a concept
/// derives its naming and keyword fields from this tuple.
#[derive(Clone, Debug)]
pub struct Concept {
    pub brand: Brand,
    pub product_type: String,
    pub material: String,
    pub model: String,
    pub colors: Vec<String>,
    pub created_at: OffsetDateTime,
}

/// Sampling layer: yields `concept_count` concepts, then `None`.
///
/// The brand and product-type subsets are drawn once, without replacement,
/// when the reader is built and stay fixed for the run. Each concept then
/// draws with replacement from those subsets, a material from the drawn
/// type, a model, and 1 to 3 distinct colors.
pub struct ConceptReader {
    selected_brands: Vec<Brand>,
    selected_types: Vec<ProductType>,
    models: Vec<String>,
    colors: Vec<String>,
    remaining: Cell<usize>,
    rng: SharedRng,
    timestamp: OffsetDateTime,
}

impl ConceptReader {
    /// Brand subset fixed for this run.
    pub fn selected_brands(&self) -> &[Brand] {
        &self.selected_brands
    }

    /// Product-type subset fixed for this run.
    pub fn selected_types(&self) -> &[ProductType] {
        &self.selected_types
    }
}

impl ItemReader<Concept> for ConceptReader {
    fn read(&self) -> ItemReaderResult<Concept> {
        if self.remaining.get() == 0 {
            return None;
        }

        self.remaining.set(self.remaining.get() - 1);

        let mut rng = self.rng.borrow_mut();

        let brand = match self.selected_brands.choose(&mut *rng) {
            Some(brand) => brand.clone(),
            None => {
                return Some(Err(GeneratorError::ItemReader(
                    "brand pool is empty".to_string(),
                )));
            }
        };

        let product_type = match self.selected_types.choose(&mut *rng) {
            Some(product_type) => product_type.clone(),
            None => {
                return Some(Err(GeneratorError::ItemReader(
                    "product type pool is empty".to_string(),
                )));
            }
        };

        let material = match product_type.materials.choose(&mut *rng) {
            Some(material) => material.clone(),
            None => {
                return Some(Err(GeneratorError::ItemReader(format!(
                    "product type {} has no materials",
                    product_type.name
                ))));
            }
        };

        let model = match self.models.choose(&mut *rng) {
            Some(model) => model.clone(),
            None => {
                return Some(Err(GeneratorError::ItemReader(
                    "model pool is empty".to_string(),
                )));
            }
        };

        let color_count = rng.random_range(1..=3);
        let colors: Vec<String> = self
            .colors
            .choose_multiple(&mut *rng, color_count)
            .cloned()
            .collect();

        let concept = Concept {
            brand,
            product_type: product_type.name,
            material,
            model,
            colors,
            created_at: self.timestamp,
        };

        debug!(
            "concept: {} {} {} {}",
            concept.product_type, concept.model, concept.material, concept.brand.name
        );

        Some(Ok(concept))
    }
}

/// Builder for [`ConceptReader`].
pub struct ConceptReaderBuilder {
    reference: ReferenceData,
    concept_count: usize,
    brand_pool_size: usize,
    product_type_pool_size: usize,
    rng: Option<SharedRng>,
    timestamp: Option<OffsetDateTime>,
}

impl ConceptReaderBuilder {
    pub fn new(reference: ReferenceData) -> ConceptReaderBuilder {
        ConceptReaderBuilder {
            reference,
            concept_count: 0,
            brand_pool_size: usize::MAX,
            product_type_pool_size: usize::MAX,
            rng: None,
            timestamp: None,
        }
    }

    pub fn concept_count(mut self, concept_count: usize) -> ConceptReaderBuilder {
        self.concept_count = concept_count;
        self
    }

    /// Distinct brands drawn for the run. Over-requests clamp to the pool
    /// size; zero is raised to one so draws stay possible.
    pub fn brand_pool_size(mut self, brand_pool_size: usize) -> ConceptReaderBuilder {
        self.brand_pool_size = brand_pool_size;
        self
    }

    /// Distinct product types drawn for the run. Clamped like brands.
    pub fn product_type_pool_size(mut self, product_type_pool_size: usize) -> ConceptReaderBuilder {
        self.product_type_pool_size = product_type_pool_size;
        self
    }

    pub fn rng(mut self, rng: SharedRng) -> ConceptReaderBuilder {
        self.rng = Some(rng);
        self
    }

    /// Fixed generation clock, needed for reproducible seeded runs.
    pub fn timestamp(mut self, timestamp: OffsetDateTime) -> ConceptReaderBuilder {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn build(self) -> ConceptReader {
        let rng = self.rng.unwrap_or_else(|| shared_rng(None));

        let (selected_brands, selected_types) = {
            let mut rng = rng.borrow_mut();

            let brand_count = clamp_pool_size(self.brand_pool_size, self.reference.brands.len());
            let selected_brands: Vec<Brand> = self
                .reference
                .brands
                .choose_multiple(&mut *rng, brand_count)
                .cloned()
                .collect();

            let type_count =
                clamp_pool_size(self.product_type_pool_size, self.reference.product_types.len());
            let selected_types: Vec<ProductType> = self
                .reference
                .product_types
                .choose_multiple(&mut *rng, type_count)
                .cloned()
                .collect();

            (selected_brands, selected_types)
        };

        ConceptReader {
            selected_brands,
            selected_types,
            models: self.reference.models,
            colors: self.reference.colors,
            remaining: Cell::new(self.concept_count),
            rng,
            timestamp: self.timestamp.unwrap_or_else(OffsetDateTime::now_utc),
        }
    }
}

fn clamp_pool_size(requested: usize, available: usize) -> usize {
    requested.max(1).min(available)
}
