use std::{
    cell::Cell,
    time::{Duration, Instant},
};

use log::debug;

use crate::GeneratorError;

use super::{
    build_name,
    item::{ItemProcessor, ItemReader, ItemWriter},
};

/// Outcome of a completed step.
pub struct StepExecution {
    pub start: Instant,
    pub end: Instant,
    pub duration: Duration,
    pub read_count: usize,
    pub write_count: usize,
}

/// An executable phase of a generation job.
///
/// Object-safe so that a job can hold steps with different item types.
pub trait Step {
    fn execute(&self) -> Result<StepExecution, GeneratorError>;
    fn name(&self) -> &str;
}

/// Chunk-oriented step: reads items one at a time, processes them, and
/// writes them in chunks of `chunk_size`.
///
/// There is no fault tolerance: the first reader, processor or writer error
/// aborts the step. The writer is still closed on the error path, so file
/// sinks get their flush/close pass regardless of how the step ends.
pub struct StepInstance<'a, R, W> {
    name: String,
    reader: &'a dyn ItemReader<R>,
    processor: &'a dyn ItemProcessor<R, W>,
    writer: &'a dyn ItemWriter<W>,
    chunk_size: usize,
    read_count: Cell<usize>,
    write_count: Cell<usize>,
}

impl<R, W> Step for StepInstance<'_, R, W> {
    fn execute(&self) -> Result<StepExecution, GeneratorError> {
        let start = Instant::now();

        debug!("start of step: {}", self.name);

        self.writer.open()?;

        let outcome = self.write_all_chunks();

        // Close whatever happened, then surface the first failure.
        let closed = self.writer.close();
        outcome?;
        closed?;

        debug!("end of step: {}", self.name);

        Ok(StepExecution {
            start,
            end: Instant::now(),
            duration: start.elapsed(),
            read_count: self.read_count.get(),
            write_count: self.write_count.get(),
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<R, W> StepInstance<'_, R, W> {
    /// Items read so far (or in total, once the step has run).
    pub fn read_count(&self) -> usize {
        self.read_count.get()
    }

    /// Items written so far (or in total, once the step has run).
    pub fn write_count(&self) -> usize {
        self.write_count.get()
    }

    fn write_all_chunks(&self) -> Result<(), GeneratorError> {
        let mut chunk: Vec<R> = Vec::with_capacity(self.chunk_size);

        loop {
            let exhausted = self.read_chunk(&mut chunk)?;

            let processed = self.process_chunk(&chunk)?;

            self.writer.write(&processed)?;
            self.writer.flush()?;
            self.write_count
                .set(self.write_count.get() + processed.len());

            if exhausted {
                return Ok(());
            }
        }
    }

    /// Fills `chunk` with up to `chunk_size` items. Returns `true` once the
    /// reader is exhausted.
    fn read_chunk(&self, chunk: &mut Vec<R>) -> Result<bool, GeneratorError> {
        debug!("start reading chunk");
        chunk.clear();

        loop {
            match self.reader.read() {
                Some(Ok(item)) => {
                    chunk.push(item);
                    self.read_count.set(self.read_count.get() + 1);

                    if chunk.len() == self.chunk_size {
                        debug!("end reading chunk: full");
                        return Ok(false);
                    }
                }
                Some(Err(error)) => return Err(error),
                None => {
                    debug!("end reading chunk: exhausted");
                    return Ok(true);
                }
            }
        }
    }

    fn process_chunk(&self, chunk: &[R]) -> Result<Vec<W>, GeneratorError> {
        let mut processed = Vec::with_capacity(chunk.len());

        for item in chunk {
            processed.push(self.processor.process(item)?);
        }

        Ok(processed)
    }
}

/// Builder for [`StepInstance`].
#[derive(Default)]
pub struct StepBuilder<'a, R, W> {
    name: Option<String>,
    reader: Option<&'a dyn ItemReader<R>>,
    processor: Option<&'a dyn ItemProcessor<R, W>>,
    writer: Option<&'a dyn ItemWriter<W>>,
    chunk_size: usize,
}

impl<'a, R, W> StepBuilder<'a, R, W> {
    pub fn new() -> StepBuilder<'a, R, W> {
        Self {
            name: None,
            reader: None,
            processor: None,
            writer: None,
            chunk_size: 1,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> StepBuilder<'a, R, W> {
        self.name = Some(name.into());
        self
    }

    pub fn reader(mut self, reader: &'a impl ItemReader<R>) -> StepBuilder<'a, R, W> {
        self.reader = Some(reader);
        self
    }

    pub fn processor(mut self, processor: &'a impl ItemProcessor<R, W>) -> StepBuilder<'a, R, W> {
        self.processor = Some(processor);
        self
    }

    pub fn writer(mut self, writer: &'a impl ItemWriter<W>) -> StepBuilder<'a, R, W> {
        self.writer = Some(writer);
        self
    }

    /// Sets the commit interval: items are written in chunks of this size.
    pub fn chunk(mut self, chunk_size: usize) -> StepBuilder<'a, R, W> {
        self.chunk_size = chunk_size;
        self
    }

    pub fn build(self) -> StepInstance<'a, R, W> {
        StepInstance {
            name: self.name.unwrap_or_else(build_name),
            reader: self.reader.unwrap(),
            processor: self.processor.unwrap(),
            writer: self.writer.unwrap(),
            chunk_size: self.chunk_size,
            read_count: Cell::new(0),
            write_count: Cell::new(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::{Step, StepBuilder};
    use crate::{
        GeneratorError,
        core::item::{
            ItemProcessor, ItemProcessorResult, ItemReader, ItemReaderResult, ItemWriter,
            ItemWriterResult, PassThroughProcessor,
        },
        item::support::VecItemReader,
    };

    struct CountdownReader {
        remaining: Cell<usize>,
    }

    impl ItemReader<usize> for CountdownReader {
        fn read(&self) -> ItemReaderResult<usize> {
            let remaining = self.remaining.get();
            if remaining == 0 {
                return None;
            }
            self.remaining.set(remaining - 1);
            Some(Ok(remaining))
        }
    }

    struct DoublingProcessor {}

    impl ItemProcessor<usize, usize> for DoublingProcessor {
        fn process(&self, item: &usize) -> ItemProcessorResult<usize> {
            Ok(item * 2)
        }
    }

    #[derive(Default)]
    struct RecordingWriter {
        items: RefCell<Vec<usize>>,
        opened: Cell<bool>,
        closed: Cell<bool>,
    }

    impl ItemWriter<usize> for RecordingWriter {
        fn write(&self, items: &[usize]) -> ItemWriterResult {
            self.items.borrow_mut().extend_from_slice(items);
            Ok(())
        }

        fn open(&self) -> ItemWriterResult {
            self.opened.set(true);
            Ok(())
        }

        fn close(&self) -> ItemWriterResult {
            self.closed.set(true);
            Ok(())
        }
    }

    struct FailingWriter {
        closed: Cell<bool>,
    }

    impl ItemWriter<usize> for FailingWriter {
        fn write(&self, _items: &[usize]) -> ItemWriterResult {
            Err(GeneratorError::ItemWriter("disk full".to_string()))
        }

        fn close(&self) -> ItemWriterResult {
            self.closed.set(true);
            Ok(())
        }
    }

    #[test]
    fn step_processes_and_writes_all_items_in_chunks() {
        let reader = CountdownReader {
            remaining: Cell::new(5),
        };
        let processor = DoublingProcessor {};
        let writer = RecordingWriter::default();

        let step = StepBuilder::new()
            .name("doubling")
            .reader(&reader)
            .processor(&processor)
            .writer(&writer)
            .chunk(2)
            .build();

        let execution = step.execute().unwrap();

        assert_eq!(execution.read_count, 5);
        assert_eq!(execution.write_count, 5);
        assert_eq!(*writer.items.borrow(), vec![10, 8, 6, 4, 2]);
        assert!(writer.opened.get());
        assert!(writer.closed.get());
    }

    #[test]
    fn pass_through_processor_leaves_items_unchanged() {
        let reader = VecItemReader::new(vec![3, 2, 1]);
        let processor = PassThroughProcessor::default();
        let writer = RecordingWriter::default();

        let step: super::StepInstance<usize, usize> = StepBuilder::new()
            .reader(&reader)
            .processor(&processor)
            .writer(&writer)
            .chunk(10)
            .build();

        step.execute().unwrap();

        assert_eq!(*writer.items.borrow(), vec![3, 2, 1]);
    }

    #[test]
    fn write_error_aborts_step_but_still_closes_writer() {
        let reader = CountdownReader {
            remaining: Cell::new(3),
        };
        let processor = PassThroughProcessor::default();
        let writer = FailingWriter {
            closed: Cell::new(false),
        };

        let step: super::StepInstance<usize, usize> = StepBuilder::new()
            .name("failing")
            .reader(&reader)
            .processor(&processor)
            .writer(&writer)
            .chunk(2)
            .build();

        let result = step.execute();

        assert!(matches!(result, Err(GeneratorError::ItemWriter(_))));
        assert!(writer.closed.get());
    }
}
