use serde::{Serialize, Serializer, ser::Error};
use time::{OffsetDateTime, format_description};
use uuid::Uuid;

use super::reference::{Brand, Category, Segment};

/// Origin value stamped on every generated record.
pub const ORIGIN: &str = "Nacional";

/// Serializes timestamps as `YYYY-MM-DDTHH:MM:SS`, second resolution,
/// no offset suffix.
pub fn timestamp_serializer<S>(timestamp: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let result = format_description::parse("[year]-[month]-[day]T[hour]:[minute]:[second]");

    match result {
        Ok(format) => {
            let formatted = timestamp
                .format(&format)
                .map_err(|error| Error::custom(error.to_string()))?;
            serializer.serialize_str(&formatted)
        }
        Err(error) => Err(Error::custom(error.to_string())),
    }
}

/// Rounds a price to two decimal places.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Faceted price bucket label for a sale price: `"{low}-{high}"` with
/// `low = floor(price / 50) * 50` and `high = low + 50`. A price exactly on
/// a multiple of 50 opens the bucket starting at that multiple.
pub fn price_range_label(sale_price: f64) -> String {
    let low = (sale_price / 50.0).floor() as i64 * 50;
    format!("{}-{}", low, low + 50)
}

/// One entry of a SKU's ordered specification list.
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Specification {
    pub key: String,
    pub value: String,
    #[serde(rename = "type")]
    pub value_type: String,
    pub unit: Option<String>,
    pub display_order: u32,
}

impl Specification {
    pub fn text(key: &str, value: &str, display_order: u32) -> Specification {
        Specification {
            key: key.to_string(),
            value: value.to_string(),
            value_type: "text".to_string(),
            unit: None,
            display_order,
        }
    }
}

/// Image entry attached to a SKU.
#[derive(Serialize, Clone, Debug)]
pub struct Image {
    pub small: String,
    pub medium: String,
    pub large: String,
    pub zoom: String,
    pub order: u32,
    pub main: bool,
}

impl Image {
    /// The fixture image every generated SKU points at.
    pub fn placeholder() -> Image {
        Image {
            small: "/images/sku-tshirt-print-g-01-small.jpg".to_string(),
            medium: "/images/sku-tshirt-print-g-01-medium.jpg".to_string(),
            large: "/images/sku-tshirt-print-g-01-large.jpg".to_string(),
            zoom: "/images/sku-tshirt-print-g-01-zoom.jpg".to_string(),
            order: 1,
            main: true,
        }
    }
}

/// SKU pricing. `price_from` is the compare-at price and is only populated
/// when it is strictly greater than `sale_price`; otherwise it serializes
/// as `null` and `sale_price` alone is meaningful.
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Pricing {
    #[serde(serialize_with = "timestamp_serializer")]
    pub updated_at: OffsetDateTime,
    pub price_from: Option<f64>,
    pub sale_price: f64,
}

impl Pricing {
    /// Zeroed pricing carried by listing SKUs, whose real price lives on
    /// the enclosing document.
    pub fn disabled(updated_at: OffsetDateTime) -> Pricing {
        Pricing {
            updated_at,
            price_from: Some(0.0),
            sale_price: 0.0,
        }
    }
}

/// Variant attributes of a SKU.
#[derive(Serialize, Clone, Debug)]
pub struct SkuAttributes {
    pub color: String,
    pub size: String,
    pub model: String,
    pub voltage: Option<String>,
    pub specifications: Vec<Specification>,
}

impl SkuAttributes {
    /// Attributes with the standard ordered specification list:
    /// Material, Cor, Tamanho, Modelo, Origem.
    pub fn with_specifications(
        color: &str,
        size: &str,
        model: &str,
        material: &str,
    ) -> SkuAttributes {
        SkuAttributes {
            color: color.to_string(),
            size: size.to_string(),
            model: model.to_string(),
            voltage: None,
            specifications: vec![
                Specification::text("Material", material, 1),
                Specification::text("Cor", color, 2),
                Specification::text("Tamanho", size, 3),
                Specification::text("Modelo", model, 4),
                Specification::text("Origem", ORIGIN, 5),
            ],
        }
    }
}

/// A sellable color/size variant, embedded in a product document.
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Sku {
    pub id: String,
    #[serde(serialize_with = "timestamp_serializer")]
    pub updated_at: OffsetDateTime,
    pub active: bool,
    pub code: String,
    pub ean: String,
    pub main_sku: bool,
    pub pricing: Pricing,
    pub attributes: SkuAttributes,
    pub images: Vec<Image>,
}

/// Product-level characteristic block, Portuguese keys as in the target
/// index mapping.
#[derive(Serialize, Clone, Debug)]
pub struct ProductCharacteristics {
    #[serde(rename = "Marca")]
    pub brand: String,
    #[serde(rename = "Modelo")]
    pub model: String,
    #[serde(rename = "Tipo")]
    pub product_type: String,
}

#[derive(Serialize, Clone, Debug)]
pub struct TechnicalSpecifications {
    #[serde(rename = "Origem")]
    pub origin: String,
    #[serde(rename = "Material")]
    pub material: String,
}

/// The nested "details" document: one per concept, with every color/size
/// variant embedded.
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    #[serde(serialize_with = "timestamp_serializer")]
    pub created_at: OffsetDateTime,
    #[serde(serialize_with = "timestamp_serializer")]
    pub updated_at: OffsetDateTime,
    pub active: bool,
    pub name: String,
    pub description: String,
    pub keywords: String,
    pub segments: Vec<Segment>,
    pub brand: Brand,
    pub categories: Vec<Category>,
    pub characteristics: ProductCharacteristics,
    pub technical_specifications: TechnicalSpecifications,
    pub skus: Vec<Sku>,
}

/// The denormalized "search" document: one per (product, color), carrying
/// the product's descriptive fields, a representative SKU's pricing and
/// image, and the subset of SKUs sharing the color.
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GroupedSearchDocument {
    pub product_id: String,
    #[serde(serialize_with = "timestamp_serializer")]
    pub created_at: OffsetDateTime,
    #[serde(serialize_with = "timestamp_serializer")]
    pub updated_at: OffsetDateTime,
    pub active: bool,
    /// Representative SKU id, kept so the seed data has a usable document
    /// key. Not a real index field.
    pub sku_id: String,
    pub sku_code: String,
    pub name: String,
    pub keywords: String,
    pub segments: Vec<Segment>,
    pub brand: Brand,
    pub categories: Vec<Category>,
    pub pricing: Pricing,
    pub price_range: String,
    pub images: Image,
    pub skus: Vec<Sku>,
}

/// A size variant inside a color listing. No main-SKU flag in this shape,
/// and pricing is zeroed: the listing document owns the real price.
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ListingSku {
    pub id: Uuid,
    #[serde(serialize_with = "timestamp_serializer")]
    pub updated_at: OffsetDateTime,
    pub active: bool,
    pub code: String,
    pub ean: String,
    pub pricing: Pricing,
    pub attributes: SkuAttributes,
}

/// The per-color listing document: an independent top-level record,
/// sharing its `product_id` with the other colors of the same concept.
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ColorListing {
    pub product_id: Uuid,
    #[serde(serialize_with = "timestamp_serializer")]
    pub created_at: OffsetDateTime,
    #[serde(serialize_with = "timestamp_serializer")]
    pub updated_at: OffsetDateTime,
    pub active: bool,
    pub name: String,
    pub keywords: String,
    pub brand: Brand,
    pub color: String,
    pub sku_code: String,
    /// Compare-at price, populated only when strictly greater than
    /// `sale_value`.
    pub promotional_value: Option<f64>,
    pub sale_value: f64,
    pub skus: Vec<ListingSku>,
}

#[cfg(test)]
mod tests {
    use serde_json::Value;
    use time::macros::datetime;

    use super::{Pricing, Specification, price_range_label, round_to_cents, timestamp_serializer};

    #[test]
    fn price_range_label_buckets_by_fifty() {
        assert_eq!(price_range_label(123.45), "100-150");
        assert_eq!(price_range_label(49.90), "0-50");
        assert_eq!(price_range_label(499.90), "450-500");
    }

    #[test]
    fn price_on_exact_multiple_of_fifty_opens_its_bucket() {
        assert_eq!(price_range_label(100.0), "100-150");
        assert_eq!(price_range_label(50.0), "50-100");
    }

    #[test]
    fn round_to_cents_keeps_two_decimals() {
        assert_eq!(round_to_cents(123.456), 123.46);
        assert_eq!(round_to_cents(49.9), 49.9);
    }

    #[test]
    fn pricing_serializes_camel_case_with_null_compare_at() {
        let pricing = Pricing {
            updated_at: datetime!(2024-05-01 10:30:00 UTC),
            price_from: None,
            sale_price: 99.9,
        };

        let value: Value = serde_json::to_value(&pricing).unwrap();

        assert_eq!(value["updatedAt"], "2024-05-01T10:30:00");
        assert!(value["priceFrom"].is_null());
        assert_eq!(value["salePrice"], 99.9);
    }

    #[test]
    fn specification_serializes_type_and_display_order_keys() {
        let spec = Specification::text("Material", "Algodão", 1);

        let value: Value = serde_json::to_value(&spec).unwrap();

        assert_eq!(value["key"], "Material");
        assert_eq!(value["value"], "Algodão");
        assert_eq!(value["type"], "text");
        assert!(value["unit"].is_null());
        assert_eq!(value["displayOrder"], 1);
    }

    #[test]
    fn timestamp_serializer_truncates_to_seconds() {
        #[derive(serde::Serialize)]
        struct Wrapper {
            #[serde(serialize_with = "timestamp_serializer")]
            at: time::OffsetDateTime,
        }

        let value: Value = serde_json::to_value(&Wrapper {
            at: datetime!(2024-12-31 23:59:59.123456 UTC),
        })
        .unwrap();

        assert_eq!(value["at"], "2024-12-31T23:59:59");
    }
}
