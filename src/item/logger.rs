use std::fmt::Debug;

use log::debug;

use crate::{GeneratorError, core::item::ItemWriter};

/// Logs every record through the `log` facade instead of persisting it.
#[derive(Default)]
pub struct LoggerWriter {}

impl<T> ItemWriter<T> for LoggerWriter
where
    T: Debug,
{
    fn write(&self, items: &[T]) -> Result<(), GeneratorError> {
        items.iter().for_each(|item| debug!("record: {:?}", item));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::LoggerWriter;
    use crate::core::item::ItemWriter;

    #[test]
    fn logging_never_fails_the_step() {
        let writer = LoggerWriter::default();

        assert!(writer.write(&["Camiseta", "Meia"]).is_ok());
        assert!(ItemWriter::<&str>::flush(&writer).is_ok());
    }
}
