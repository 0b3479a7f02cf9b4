use std::{cell::RefCell, collections::VecDeque};

use rand::{Rng, seq::IndexedRandom};

use crate::core::item::{ItemReader, ItemReaderResult};

use super::{
    SharedRng, codes,
    concept_reader::{Concept, ConceptReader},
    model::{ColorListing, ListingSku, Pricing, SkuAttributes, round_to_cents},
    reference::ReferenceData,
};

const PRICE_FROM_MIN: f64 = 49.90;
const PRICE_FROM_MAX: f64 = 499.90;
const DISCOUNT_MIN: f64 = 0.7;
const DISCOUNT_MAX: f64 = 0.95;
const DISCOUNT_PROBABILITY: f64 = 0.5;

/// Yields one independent listing document per (concept, color) pair.
///
/// All documents of a concept share one UUID `product_id` but have no
/// parent container. Each document samples its own 2..=|sizes| distinct
/// sizes and carries the real price itself; its SKUs hold zeroed pricing.
pub struct ColorListingReader {
    concepts: ConceptReader,
    sizes: Vec<String>,
    rng: SharedRng,
    queue: RefCell<VecDeque<ColorListing>>,
}

impl ColorListingReader {
    pub fn new(
        reference: &ReferenceData,
        concepts: ConceptReader,
        rng: SharedRng,
    ) -> ColorListingReader {
        ColorListingReader {
            concepts,
            sizes: reference.sizes.clone(),
            rng,
            queue: RefCell::new(VecDeque::new()),
        }
    }

    fn build_documents(&self, concept: &Concept) -> Vec<ColorListing> {
        let mut rng = self.rng.borrow_mut();

        let product_id = codes::random_uuid(&mut *rng);

        let name = format!(
            "{} {} {}",
            concept.product_type, concept.model, concept.material
        );

        concept
            .colors
            .iter()
            .map(|color| {
                let size_count = if self.sizes.len() <= 2 {
                    self.sizes.len()
                } else {
                    rng.random_range(2..=self.sizes.len())
                };
                let sizes: Vec<String> = self
                    .sizes
                    .choose_multiple(&mut *rng, size_count)
                    .cloned()
                    .collect();

                let skus: Vec<ListingSku> = sizes
                    .iter()
                    .map(|size| ListingSku {
                        id: codes::random_uuid(&mut *rng),
                        updated_at: concept.created_at,
                        active: true,
                        code: codes::sku_code(
                            &concept.brand.name,
                            &concept.product_type,
                            color,
                            size,
                        ),
                        ean: codes::ean13(&mut *rng),
                        pricing: Pricing::disabled(concept.created_at),
                        attributes: SkuAttributes::with_specifications(
                            color,
                            size,
                            &concept.model,
                            &concept.material,
                        ),
                    })
                    .collect();

                let price_from = round_to_cents(rng.random_range(PRICE_FROM_MIN..PRICE_FROM_MAX));
                let sale_value = if rng.random_bool(DISCOUNT_PROBABILITY) {
                    round_to_cents(price_from * rng.random_range(DISCOUNT_MIN..DISCOUNT_MAX))
                } else {
                    price_from
                };

                ColorListing {
                    product_id,
                    created_at: concept.created_at,
                    updated_at: concept.created_at,
                    active: true,
                    name: name.clone(),
                    keywords: format!(
                        "{} {} {}",
                        concept.product_type, concept.brand.name, color
                    )
                    .to_lowercase(),
                    brand: concept.brand.clone(),
                    color: color.clone(),
                    sku_code: skus[0].code.clone(),
                    promotional_value: (price_from > sale_value).then_some(price_from),
                    sale_value,
                    skus,
                }
            })
            .collect()
    }
}

impl ItemReader<ColorListing> for ColorListingReader {
    fn read(&self) -> ItemReaderResult<ColorListing> {
        loop {
            if let Some(document) = self.queue.borrow_mut().pop_front() {
                return Some(Ok(document));
            }

            match self.concepts.read()? {
                Ok(concept) => {
                    self.queue
                        .borrow_mut()
                        .extend(self.build_documents(&concept));
                }
                Err(error) => return Some(Err(error)),
            }
        }
    }
}
