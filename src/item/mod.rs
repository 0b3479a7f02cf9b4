/// Newline-delimited JSON file writer.
pub mod json;

/// Writer that logs records, useful for debugging pipelines.
pub mod logger;

/// Writer that fans one record stream out to several writers.
pub mod composite;

/// In-memory reader and writer used to chain generation phases and in tests.
pub mod support;

/// Catalog domain: reference pools, code generators, record models and the
/// readers/processors that assemble them.
pub mod catalog;
