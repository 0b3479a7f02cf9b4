use std::cell::{Cell, RefCell};

use crate::{
    GeneratorError,
    core::item::{ItemReader, ItemReaderResult, ItemWriter},
};

/// Buffers written items in memory.
///
/// The details/search run uses it behind a
/// [`CompositeItemWriter`](crate::item::composite::CompositeItemWriter) to
/// keep the assembled products around for the grouping phase.
pub struct CollectingItemWriter<T> {
    items: RefCell<Vec<T>>,
}

impl<T> CollectingItemWriter<T> {
    pub fn new() -> CollectingItemWriter<T> {
        CollectingItemWriter {
            items: RefCell::new(Vec::new()),
        }
    }

    /// Drains the buffered items, leaving the writer empty.
    pub fn take(&self) -> Vec<T> {
        self.items.take()
    }
}

impl<T> Default for CollectingItemWriter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> ItemWriter<T> for CollectingItemWriter<T> {
    fn write(&self, items: &[T]) -> Result<(), GeneratorError> {
        self.items.borrow_mut().extend_from_slice(items);
        Ok(())
    }
}

/// Reads items out of an in-memory list, one at a time.
pub struct VecItemReader<T> {
    items: Vec<T>,
    position: Cell<usize>,
}

impl<T> VecItemReader<T> {
    pub fn new(items: Vec<T>) -> VecItemReader<T> {
        VecItemReader {
            items,
            position: Cell::new(0),
        }
    }
}

impl<T: Clone> ItemReader<T> for VecItemReader<T> {
    fn read(&self) -> ItemReaderResult<T> {
        let position = self.position.get();
        let item = self.items.get(position)?;
        self.position.set(position + 1);
        Some(Ok(item.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::{CollectingItemWriter, VecItemReader};
    use crate::core::item::{ItemReader, ItemWriter};

    #[test]
    fn collecting_writer_accumulates_chunks() {
        let writer = CollectingItemWriter::new();

        writer.write(&["a", "b"]).unwrap();
        writer.write(&["c"]).unwrap();

        assert_eq!(writer.take(), vec!["a", "b", "c"]);
        assert!(writer.take().is_empty());
    }

    #[test]
    fn vec_reader_yields_items_in_order_then_none() {
        let reader = VecItemReader::new(vec![10, 20]);

        assert_eq!(reader.read().unwrap().unwrap(), 10);
        assert_eq!(reader.read().unwrap().unwrap(), 20);
        assert!(reader.read().is_none());
    }
}
