use rand::distr::{Alphanumeric, SampleString};

pub mod item;

pub mod job;

pub mod step;

/// Generates a random alphanumeric name for unnamed jobs and steps.
fn build_name() -> String {
    Alphanumeric.sample_string(&mut rand::rng(), 8)
}
