use rand::{Rng, seq::IndexedRandom};

use crate::{
    GeneratorError,
    core::item::{ItemProcessor, ItemProcessorResult},
};

use super::{
    SharedRng, codes,
    concept_reader::Concept,
    model::{
        Image, ORIGIN, Pricing, Product, ProductCharacteristics, Sku, SkuAttributes,
        TechnicalSpecifications, round_to_cents,
    },
    reference::{Category, ReferenceData, Segment},
};

const PRICE_FROM_MIN: f64 = 49.90;
const PRICE_FROM_MAX: f64 = 499.90;
const DISCOUNT_MIN: f64 = 0.7;
const DISCOUNT_MAX: f64 = 0.95;
const DISCOUNT_PROBABILITY: f64 = 0.5;

/// Turns a concept into one nested product document for the details index.
///
/// Samples 1 to 3 distinct sizes once per concept (shared across all of the
/// concept's colors) and emits one SKU per color x size pair. The first SKU
/// generated, outer loop colors and inner loop sizes, is the main SKU.
pub struct ProductAssembler {
    sizes: Vec<String>,
    segments: Vec<Segment>,
    categories: Vec<Category>,
    rng: SharedRng,
}

impl ProductAssembler {
    pub fn new(reference: &ReferenceData, rng: SharedRng) -> ProductAssembler {
        ProductAssembler {
            sizes: reference.sizes.clone(),
            segments: reference.segments.clone(),
            categories: reference.categories.clone(),
            rng,
        }
    }
}

impl ItemProcessor<Concept, Product> for ProductAssembler {
    fn process(&self, concept: &Concept) -> ItemProcessorResult<Product> {
        let mut rng = self.rng.borrow_mut();

        let size_count = rng.random_range(1..=3);
        let sizes: Vec<String> = self
            .sizes
            .choose_multiple(&mut *rng, size_count)
            .cloned()
            .collect();

        let mut skus = Vec::with_capacity(concept.colors.len() * sizes.len());
        let mut main_sku = true;

        for color in &concept.colors {
            for size in &sizes {
                skus.push(build_sku(&mut *rng, concept, color, size, main_sku));
                main_sku = false;
            }
        }

        let segment = self
            .segments
            .choose(&mut *rng)
            .cloned()
            .ok_or_else(|| GeneratorError::ItemProcessor("segment pool is empty".to_string()))?;
        let category = self
            .categories
            .choose(&mut *rng)
            .cloned()
            .ok_or_else(|| GeneratorError::ItemProcessor("category pool is empty".to_string()))?;

        let name = format!(
            "{} {} {}",
            concept.product_type, concept.model, concept.material
        );
        let description = format!("{} {}", name, concept.brand.name);
        let keywords = description.to_lowercase();

        Ok(Product {
            id: codes::alphanumeric_id(&mut *rng, codes::ID_LENGTH),
            created_at: concept.created_at,
            updated_at: concept.created_at,
            active: true,
            name,
            description,
            keywords,
            segments: vec![segment],
            brand: concept.brand.clone(),
            categories: vec![category],
            characteristics: ProductCharacteristics {
                brand: concept.brand.name.clone(),
                model: concept.model.clone(),
                product_type: concept.product_type.clone(),
            },
            technical_specifications: TechnicalSpecifications {
                origin: ORIGIN.to_string(),
                material: concept.material.clone(),
            },
            skus,
        })
    }
}

fn build_sku<R: Rng>(rng: &mut R, concept: &Concept, color: &str, size: &str, main_sku: bool) -> Sku {
    let (price_from, sale_price) = sample_prices(rng);

    let code = format!(
        "{}-{}",
        codes::sku_code(&concept.brand.name, &concept.product_type, color, size),
        codes::numeric_code(rng)
    );

    Sku {
        id: codes::alphanumeric_id(rng, codes::ID_LENGTH),
        updated_at: concept.created_at,
        active: true,
        code,
        ean: codes::ean13(rng),
        main_sku,
        pricing: Pricing {
            updated_at: concept.created_at,
            price_from,
            sale_price,
        },
        attributes: SkuAttributes::with_specifications(
            color,
            size,
            &concept.model,
            &concept.material,
        ),
        images: vec![Image::placeholder()],
    }
}

/// Draws a base price, applies a discount half of the time, and returns
/// `(compare_at, sale_price)`. The compare-at price is only kept when it is
/// strictly greater than the sale price.
fn sample_prices<R: Rng>(rng: &mut R) -> (Option<f64>, f64) {
    let price_from = round_to_cents(rng.random_range(PRICE_FROM_MIN..PRICE_FROM_MAX));

    let sale_price = if rng.random_bool(DISCOUNT_PROBABILITY) {
        round_to_cents(price_from * rng.random_range(DISCOUNT_MIN..DISCOUNT_MAX))
    } else {
        price_from
    };

    let compare_at = (price_from > sale_price).then_some(price_from);

    (compare_at, sale_price)
}

#[cfg(test)]
mod tests {
    use super::{ProductAssembler, sample_prices};
    use crate::{
        core::item::{ItemProcessor, ItemReader},
        item::catalog::{
            concept_reader::ConceptReaderBuilder, reference::ReferenceData, shared_rng,
        },
    };
    use rand::{SeedableRng, rngs::StdRng};

    fn assembled_products(seed: u64, count: usize) -> Vec<crate::item::catalog::model::Product> {
        let reference = ReferenceData::fashion();
        let rng = shared_rng(Some(seed));
        let reader = ConceptReaderBuilder::new(reference.clone())
            .concept_count(count)
            .rng(rng.clone())
            .build();
        let assembler = ProductAssembler::new(&reference, rng);

        let mut products = Vec::new();
        while let Some(result) = reader.read() {
            products.push(assembler.process(&result.unwrap()).unwrap());
        }
        products
    }

    #[test]
    fn sku_count_is_colors_times_sizes_with_one_main_sku() {
        for product in assembled_products(3, 25) {
            let colors: std::collections::BTreeSet<_> = product
                .skus
                .iter()
                .map(|sku| sku.attributes.color.clone())
                .collect();
            let sizes: std::collections::BTreeSet<_> = product
                .skus
                .iter()
                .map(|sku| sku.attributes.size.clone())
                .collect();

            assert_eq!(product.skus.len(), colors.len() * sizes.len());
            assert_eq!(product.skus.iter().filter(|sku| sku.main_sku).count(), 1);
            assert!(product.skus[0].main_sku);
        }
    }

    #[test]
    fn compare_at_price_present_iff_strictly_greater_than_sale_price() {
        for product in assembled_products(5, 25) {
            for sku in &product.skus {
                match sku.pricing.price_from {
                    Some(price_from) => assert!(price_from > sku.pricing.sale_price),
                    None => { /* no discount: sale price alone is meaningful */ }
                }
            }
        }
    }

    #[test]
    fn prices_stay_in_the_sampled_band() {
        let mut rng = StdRng::seed_from_u64(21);

        for _ in 0..500 {
            let (compare_at, sale_price) = sample_prices(&mut rng);

            if let Some(price_from) = compare_at {
                assert!((49.90..499.91).contains(&price_from));
                assert!(sale_price < price_from);
                // Discount band, with a cent of rounding slack.
                assert!(sale_price >= price_from * 0.7 - 0.01);
            } else {
                assert!((49.90..499.91).contains(&sale_price));
            }
        }
    }

    #[test]
    fn product_naming_concatenates_type_model_material_and_brand() {
        for product in assembled_products(9, 10) {
            let expected_name = format!(
                "{} {} {}",
                product.characteristics.product_type,
                product.characteristics.model,
                product.technical_specifications.material
            );

            assert_eq!(product.name, expected_name);
            assert_eq!(
                product.description,
                format!("{} {}", expected_name, product.brand.name)
            );
            assert_eq!(product.keywords, product.description.to_lowercase());
            // Brand belongs to description and keywords, never to the name.
            assert!(!product.name.contains(&product.brand.name));
        }
    }

    #[test]
    fn sku_codes_carry_prefixes_and_numeric_suffix() {
        for product in assembled_products(13, 10) {
            for sku in &product.skus {
                let parts: Vec<&str> = sku.code.split('-').collect();

                let suffix = parts.last().unwrap();
                assert_eq!(suffix.len(), 6);
                assert!(suffix.chars().all(|c| c.is_ascii_digit()));
                assert!(sku.code.ends_with(&format!(
                    "-{}-{}",
                    sku.attributes.size, suffix
                )));
            }
        }
    }

    #[test]
    fn skus_carry_ordered_specifications_and_placeholder_image() {
        for product in assembled_products(17, 5) {
            for sku in &product.skus {
                let orders: Vec<u32> = sku
                    .attributes
                    .specifications
                    .iter()
                    .map(|spec| spec.display_order)
                    .collect();
                assert_eq!(orders, vec![1, 2, 3, 4, 5]);

                assert_eq!(sku.attributes.specifications[0].key, "Material");
                assert_eq!(sku.attributes.specifications[4].value, "Nacional");
                assert_eq!(sku.images.len(), 1);
                assert!(sku.images[0].main);
            }
        }
    }

    #[test]
    fn segments_and_categories_are_single_entry_lists() {
        for product in assembled_products(23, 10) {
            assert_eq!(product.segments.len(), 1);
            assert_eq!(product.categories.len(), 1);
        }
    }
}
