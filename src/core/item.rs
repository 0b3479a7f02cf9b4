use crate::error::GeneratorError;

/// Result of a single read attempt: `None` once the reader is exhausted.
pub type ItemReaderResult<R> = Option<Result<R, GeneratorError>>;

/// Result of processing a single item.
pub type ItemProcessorResult<W> = Result<W, GeneratorError>;

/// Result of a writer operation.
pub type ItemWriterResult = Result<(), GeneratorError>;

/// Pull-based source of items, read one at a time by a step.
pub trait ItemReader<R> {
    fn read(&self) -> ItemReaderResult<R>;
}

/// Transforms one read item into one output item.
pub trait ItemProcessor<R, W> {
    fn process(&self, item: &R) -> ItemProcessorResult<W>;
}

/// Destination of processed items, written one chunk at a time.
///
/// `open` is called once before the first chunk and `close` once after the
/// last one, on error paths included. `flush` runs after every chunk.
pub trait ItemWriter<W> {
    fn write(&self, items: &[W]) -> ItemWriterResult;

    fn flush(&self) -> ItemWriterResult {
        Ok(())
    }

    fn open(&self) -> ItemWriterResult {
        Ok(())
    }

    fn close(&self) -> ItemWriterResult {
        Ok(())
    }
}

/// Processor that forwards each item unchanged, for steps whose reader
/// already yields the output record type.
#[derive(Default)]
pub struct PassThroughProcessor {}

impl<R: Clone> ItemProcessor<R, R> for PassThroughProcessor {
    fn process(&self, item: &R) -> ItemProcessorResult<R> {
        Ok(item.clone())
    }
}
