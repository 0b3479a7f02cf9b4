use serde::Serialize;

/// A catalog brand, embedded verbatim in generated documents.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Brand {
    pub id: String,
    pub name: String,
}

/// A store segment tag.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Segment {
    pub id: String,
    pub name: String,
    pub slug: String,
}

/// A category tag.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub slug: String,
}

/// A product type and the materials it can be made of.
///
/// Kept as an ordered record rather than a map so that material lookup and
/// subset sampling never depend on map iteration order.
#[derive(Clone, Debug)]
pub struct ProductType {
    pub name: String,
    pub materials: Vec<String>,
}

/// The fixed reference pools a run samples from.
#[derive(Clone, Debug)]
pub struct ReferenceData {
    pub brands: Vec<Brand>,
    pub product_types: Vec<ProductType>,
    pub models: Vec<String>,
    pub colors: Vec<String>,
    pub sizes: Vec<String>,
    pub segments: Vec<Segment>,
    pub categories: Vec<Category>,
}

fn brand(id: &str, name: &str) -> Brand {
    Brand {
        id: id.to_string(),
        name: name.to_string(),
    }
}

fn product_type(name: &str, materials: &[&str]) -> ProductType {
    ProductType {
        name: name.to_string(),
        materials: materials.iter().map(|m| m.to_string()).collect(),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

impl ReferenceData {
    /// The built-in Brazilian fashion catalog pools.
    pub fn fashion() -> ReferenceData {
        ReferenceData {
            brands: vec![
                brand("1", "Xinguilingui"),
                brand("2", "Nike"),
                brand("3", "Adidas"),
                brand("4", "Vestem"),
                brand("5", "Puma"),
                brand("6", "Reserva"),
                brand("7", "Hering"),
                brand("8", "Zara"),
                brand("9", "Lacoste"),
                brand("10", "Levi's"),
                brand("11", "Piticas"),
                brand("12", "Calvin Klein"),
                brand("13", "Louis Vuitton"),
                brand("14", "Hugo Boss"),
                brand("15", "Emporio Armani"),
                brand("16", "Michael Kros"),
                brand("17", "Tommy Hilfiger"),
            ],
            product_types: vec![
                product_type("Camiseta", &["Algodão", "Poliéster", "Malha Fria"]),
                product_type("Calça", &["Jeans", "Sarja", "Moletom"]),
                product_type("Blusa", &["Seda", "Viscose", "Crepe", "Corta Vento"]),
                product_type("Saia", &["Couro Sintético", "Tafetá", "Linho"]),
                product_type("Vestido", &["Viscolycra", "Canelado", "Renda"]),
                product_type("Cueca", &["Microfibra", "Modal", "Algodão Pima"]),
                product_type("Calcinha", &["Renda", "Lycra", "Cotton", "Sexy"]),
                product_type("Jaqueta", &["Nylon", "Couro", "Jeans"]),
                product_type("Meia", &["Lã", "Poli-algodão", "Acrílico"]),
                product_type("Bermuda", &["Tactel", "Moletinho", "Sarja"]),
                product_type("Moletom", &["Fleece", "Algodão Mescla"]),
                product_type("Sapato", &["Couro", "Camurça"]),
                product_type("Tênis", &["Lona", "Material Sintético"]),
            ],
            models: strings(&[
                "Basic", "Daily", "Slim", "Regular", "Comfort", "Classic", "Styled",
            ]),
            colors: strings(&[
                "Preto",
                "Branco",
                "Azul Marinho",
                "Cinza Mescla",
                "Vermelho",
                "Verde Musgo",
                "Amarelo",
                "Rosa",
                "Bege",
                "Rosa Choque",
            ]),
            sizes: strings(&["XP", "PP", "P", "M", "G", "GG", "XG", "XXG"]),
            segments: vec![Segment {
                id: "seg-1".to_string(),
                name: "Moda".to_string(),
                slug: "moda".to_string(),
            }],
            categories: vec![
                Category {
                    id: "cat-1".to_string(),
                    name: "Moda Casual".to_string(),
                    slug: "moda-casual".to_string(),
                },
                Category {
                    id: "cat-2".to_string(),
                    name: "Moda Profissional".to_string(),
                    slug: "moda-prof".to_string(),
                },
                Category {
                    id: "cat-3".to_string(),
                    name: "Moda Out-of-style".to_string(),
                    slug: "moda-out-of-style".to_string(),
                },
                Category {
                    id: "cat-4".to_string(),
                    name: "Lançamentos".to_string(),
                    slug: "moda-lancamentos".to_string(),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ReferenceData;

    #[test]
    fn fashion_pools_have_expected_sizes() {
        let reference = ReferenceData::fashion();

        assert_eq!(reference.brands.len(), 17);
        assert_eq!(reference.product_types.len(), 13);
        assert_eq!(reference.models.len(), 7);
        assert_eq!(reference.colors.len(), 10);
        assert_eq!(reference.sizes.len(), 8);
        assert_eq!(reference.segments.len(), 1);
        assert_eq!(reference.categories.len(), 4);
    }

    #[test]
    fn every_product_type_has_at_least_one_material() {
        let reference = ReferenceData::fashion();

        for product_type in &reference.product_types {
            assert!(
                !product_type.materials.is_empty(),
                "{} has no materials",
                product_type.name
            );
        }
    }
}
