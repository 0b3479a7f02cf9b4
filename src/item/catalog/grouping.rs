use std::{
    cell::{Cell, RefCell},
    collections::VecDeque,
};

use crate::core::item::{ItemReader, ItemReaderResult};

use super::model::{GroupedSearchDocument, Product, Sku, price_range_label};

/// Splits a product into one search document per distinct SKU color.
///
/// Partitioning keeps first-seen order, both for the colors and for the
/// SKUs inside a color, so the emission order is stable for a given SKU
/// array. The first SKU of each partition is the representative: its
/// pricing, code, id and first image are copied onto the document.
pub fn group_by_color(product: &Product) -> Vec<GroupedSearchDocument> {
    let mut partitions: Vec<(String, Vec<Sku>)> = Vec::new();

    for sku in &product.skus {
        let color = &sku.attributes.color;

        match partitions.iter_mut().find(|(c, _)| c == color) {
            Some((_, skus)) => skus.push(sku.clone()),
            None => partitions.push((color.clone(), vec![sku.clone()])),
        }
    }

    partitions
        .into_iter()
        .map(|(_, skus)| {
            let first_sku = &skus[0];

            GroupedSearchDocument {
                product_id: product.id.clone(),
                created_at: product.created_at,
                updated_at: product.updated_at,
                active: product.active,
                sku_id: first_sku.id.clone(),
                sku_code: first_sku.code.clone(),
                name: product.name.clone(),
                keywords: product.keywords.clone(),
                segments: product.segments.clone(),
                brand: product.brand.clone(),
                categories: product.categories.clone(),
                pricing: first_sku.pricing.clone(),
                price_range: price_range_label(first_sku.pricing.sale_price),
                images: first_sku.images[0].clone(),
                skus: skus.clone(),
            }
        })
        .collect()
}

/// Drains a list of assembled products as color-grouped search documents,
/// one at a time.
pub struct GroupedDocumentReader {
    products: Vec<Product>,
    position: Cell<usize>,
    queue: RefCell<VecDeque<GroupedSearchDocument>>,
}

impl GroupedDocumentReader {
    pub fn new(products: Vec<Product>) -> GroupedDocumentReader {
        GroupedDocumentReader {
            products,
            position: Cell::new(0),
            queue: RefCell::new(VecDeque::new()),
        }
    }
}

impl ItemReader<GroupedSearchDocument> for GroupedDocumentReader {
    fn read(&self) -> ItemReaderResult<GroupedSearchDocument> {
        loop {
            if let Some(document) = self.queue.borrow_mut().pop_front() {
                return Some(Ok(document));
            }

            let position = self.position.get();
            let product = self.products.get(position)?;
            self.position.set(position + 1);

            self.queue.borrow_mut().extend(group_by_color(product));
        }
    }
}
