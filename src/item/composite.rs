use crate::{GeneratorError, core::item::ItemWriter};

/// Fans one record stream out to several writers.
///
/// Used by the details/search run to export products to the details file
/// while buffering them for the grouping phase. Writers receive lifecycle
/// calls in registration order; the first error wins.
pub struct CompositeItemWriter<'a, W> {
    writers: Vec<&'a dyn ItemWriter<W>>,
}

impl<'a, W> CompositeItemWriter<'a, W> {
    pub fn new() -> CompositeItemWriter<'a, W> {
        CompositeItemWriter {
            writers: Vec::new(),
        }
    }

    pub fn writer(mut self, writer: &'a dyn ItemWriter<W>) -> CompositeItemWriter<'a, W> {
        self.writers.push(writer);
        self
    }
}

impl<W> Default for CompositeItemWriter<'_, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W> ItemWriter<W> for CompositeItemWriter<'_, W> {
    fn write(&self, items: &[W]) -> Result<(), GeneratorError> {
        for writer in &self.writers {
            writer.write(items)?;
        }
        Ok(())
    }

    fn flush(&self) -> Result<(), GeneratorError> {
        for writer in &self.writers {
            writer.flush()?;
        }
        Ok(())
    }

    fn open(&self) -> Result<(), GeneratorError> {
        for writer in &self.writers {
            writer.open()?;
        }
        Ok(())
    }

    fn close(&self) -> Result<(), GeneratorError> {
        for writer in &self.writers {
            writer.close()?;
        }
        Ok(())
    }
}
