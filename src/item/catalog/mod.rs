use std::{cell::RefCell, rc::Rc};

use rand::{SeedableRng, rngs::StdRng};

/// Static reference pools: brands, product types, colors, sizes, tags.
pub mod reference;

/// Random identifier and code generators.
pub mod codes;

/// Serializable record types for both document shapes.
pub mod model;

/// Sampling layer: reads product concepts out of the reference pools.
pub mod concept_reader;

/// Assembles a concept into one nested product document.
pub mod product_assembler;

/// Denormalizes products into color-grouped search documents.
pub mod grouping;

/// Builds independent per-color listing documents.
pub mod color_listing_reader;

/// The single RNG stream every sampling site draws from.
///
/// Generation is single-threaded, so plain `Rc<RefCell<_>>` interior
/// mutability is enough to share the stream between readers and processors.
pub type SharedRng = Rc<RefCell<StdRng>>;

/// Builds the run's RNG stream: seeded for reproducible runs, OS entropy
/// otherwise.
pub fn shared_rng(seed: Option<u64>) -> SharedRng {
    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    Rc::new(RefCell::new(rng))
}
