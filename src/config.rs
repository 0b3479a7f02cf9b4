use time::OffsetDateTime;

/// Run configuration for the catalog generators.
///
/// Pool sizes beyond the reference pools clamp silently to what is
/// available. `seed` and `timestamp` exist for reproducible runs: with both
/// set, two runs produce byte-identical output files.
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    /// Product concepts to generate. The document count is higher: each
    /// concept fans out into colors (and, in the details shape, sizes).
    pub concept_count: usize,
    /// Distinct brands sampled for the whole run.
    pub brand_pool_size: usize,
    /// Distinct product types sampled for the whole run.
    pub product_type_pool_size: usize,
    /// RNG seed. `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Generation clock override. `None` stamps records with the current
    /// UTC time.
    pub timestamp: Option<OffsetDateTime>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            concept_count: 20_000,
            brand_pool_size: 17,
            product_type_pool_size: 13,
            seed: None,
            timestamp: None,
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> GeneratorConfig {
        GeneratorConfig::default()
    }

    pub fn concept_count(mut self, concept_count: usize) -> GeneratorConfig {
        self.concept_count = concept_count;
        self
    }

    pub fn brand_pool_size(mut self, brand_pool_size: usize) -> GeneratorConfig {
        self.brand_pool_size = brand_pool_size;
        self
    }

    pub fn product_type_pool_size(mut self, product_type_pool_size: usize) -> GeneratorConfig {
        self.product_type_pool_size = product_type_pool_size;
        self
    }

    pub fn seed(mut self, seed: u64) -> GeneratorConfig {
        self.seed = Some(seed);
        self
    }

    pub fn timestamp(mut self, timestamp: OffsetDateTime) -> GeneratorConfig {
        self.timestamp = Some(timestamp);
        self
    }
}
