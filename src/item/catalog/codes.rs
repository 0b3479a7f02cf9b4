use rand::{
    Rng,
    distr::{Alphanumeric, SampleString},
};
use uuid::Uuid;

/// Length of product and SKU identifiers in the details shape.
pub const ID_LENGTH: usize = 24;

const EAN_LENGTH: usize = 13;
const NUMERIC_CODE_LENGTH: usize = 6;

/// Random alphanumeric identifier, uniform over `[A-Za-z0-9]`.
///
/// No collision detection: duplicates across a large run are possible and
/// accepted, these are seed-data identifiers rather than real keys.
pub fn alphanumeric_id<R: Rng>(rng: &mut R, length: usize) -> String {
    Alphanumeric.sample_string(rng, length)
}

/// EAN-13-shaped numeric string. Purely decorative: the last digit is
/// random like all the others, no check digit is computed.
pub fn ean13<R: Rng>(rng: &mut R) -> String {
    digits(rng, EAN_LENGTH)
}

/// Short numeric code used to de-duplicate SKU codes across the corpus.
pub fn numeric_code<R: Rng>(rng: &mut R) -> String {
    digits(rng, NUMERIC_CODE_LENGTH)
}

/// Version-4 UUID drawn from the injected RNG stream instead of OS
/// entropy, so seeded runs reproduce their identifiers.
pub fn random_uuid<R: Rng>(rng: &mut R) -> Uuid {
    uuid::Builder::from_random_bytes(rng.random()).into_uuid()
}

fn digits<R: Rng>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
        .collect()
}

/// Human-readable SKU code: `BRA-TYP-COL-{size}` from the first three
/// characters of brand, product type and color, upper-cased.
pub fn sku_code(brand_name: &str, product_type: &str, color: &str, size: &str) -> String {
    format!(
        "{}-{}-{}-{}",
        code_prefix(brand_name),
        code_prefix(product_type),
        code_prefix(color),
        size
    )
}

fn code_prefix(value: &str) -> String {
    // chars, not bytes: type and color names are Portuguese and may hold
    // multi-byte characters near the cut.
    value.chars().take(3).collect::<String>().to_uppercase()
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::{ID_LENGTH, alphanumeric_id, ean13, numeric_code, sku_code};

    #[test]
    fn alphanumeric_id_has_requested_length_and_charset() {
        let mut rng = StdRng::seed_from_u64(7);

        let id = alphanumeric_id(&mut rng, ID_LENGTH);

        assert_eq!(id.len(), 24);
        assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn ean13_is_thirteen_digits() {
        let mut rng = StdRng::seed_from_u64(7);

        let ean = ean13(&mut rng);

        assert_eq!(ean.len(), 13);
        assert!(ean.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn numeric_code_is_six_digits() {
        let mut rng = StdRng::seed_from_u64(7);

        let code = numeric_code(&mut rng);

        assert_eq!(code.len(), 6);
        assert!(code.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn random_uuid_is_version_four_and_seed_stable() {
        let mut rng = StdRng::seed_from_u64(7);
        let first = super::random_uuid(&mut rng);

        assert_eq!(first.get_version_num(), 4);

        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(super::random_uuid(&mut rng), first);
    }

    #[test]
    fn sku_code_uses_uppercased_three_char_prefixes() {
        assert_eq!(sku_code("Nike", "Camiseta", "Preto", "M"), "NIK-CAM-PRE-M");
        assert_eq!(
            sku_code("Zara", "Calça", "Azul Marinho", "GG"),
            "ZAR-CAL-AZU-GG"
        );
    }

    #[test]
    fn sku_code_handles_multi_byte_names() {
        // "Tênis" cut at three chars crosses a multi-byte boundary.
        assert_eq!(sku_code("Hering", "Tênis", "Bege", "P"), "HER-TÊN-BEG-P");
    }
}
