use thiserror::Error;

/// Errors raised while generating or exporting catalog records.
///
/// The taxonomy is deliberately small: reads and writes can fail, and a
/// failed step aborts the whole run. There is no retry or skip semantic
/// anywhere in this crate.
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("ItemWriter: {0}")]
    ItemWriter(String),

    #[error("ItemReader: {0}")]
    ItemReader(String),

    #[error("ItemProcessor: {0}")]
    ItemProcessor(String),

    #[error("Step failed: {0}")]
    Step(String),
}
