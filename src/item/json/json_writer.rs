use std::{
    cell::RefCell,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use serde::Serialize;

use crate::{GeneratorError, core::item::ItemWriter};

/// Writes records as newline-delimited JSON: one compact object per line,
/// UTF-8 with non-ASCII characters left unescaped (serde_json default).
///
/// The destination file is truncated when the writer is created, so every
/// run rewrites the output from scratch. There is no temp-file swap: an
/// aborted run may leave a partial file behind.
pub struct JsonLinesItemWriter<T: Write> {
    stream: RefCell<T>,
}

impl JsonLinesItemWriter<BufWriter<File>> {
    /// Truncate-creates `path` and returns a buffered writer over it.
    pub fn from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<JsonLinesItemWriter<BufWriter<File>>, GeneratorError> {
        let file = File::create(path).map_err(|error| {
            GeneratorError::ItemWriter(format!("unable to create output file: {error}"))
        })?;

        Ok(JsonLinesItemWriter {
            stream: RefCell::new(BufWriter::new(file)),
        })
    }
}

impl<T: Write> JsonLinesItemWriter<T> {
    /// Wraps an arbitrary writer, mostly useful for tests on in-memory
    /// buffers.
    pub fn from_writer(writer: T) -> JsonLinesItemWriter<T> {
        JsonLinesItemWriter {
            stream: RefCell::new(writer),
        }
    }

    pub fn into_inner(self) -> T {
        self.stream.into_inner()
    }
}

impl<T: Write, R: Serialize> ItemWriter<R> for JsonLinesItemWriter<T> {
    fn write(&self, items: &[R]) -> Result<(), GeneratorError> {
        let mut stream = self.stream.borrow_mut();

        for item in items {
            let json = serde_json::to_string(item)
                .map_err(|error| GeneratorError::ItemWriter(error.to_string()))?;

            stream
                .write_all(json.as_bytes())
                .and_then(|()| stream.write_all(b"\n"))
                .map_err(|error| GeneratorError::ItemWriter(error.to_string()))?;
        }

        Ok(())
    }

    fn flush(&self) -> Result<(), GeneratorError> {
        self.stream
            .borrow_mut()
            .flush()
            .map_err(|error| GeneratorError::ItemWriter(error.to_string()))
    }

    fn close(&self) -> Result<(), GeneratorError> {
        // The underlying file handle is released when the writer is dropped;
        // a final flush is all that is needed here.
        <Self as ItemWriter<R>>::flush(self)
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::JsonLinesItemWriter;
    use crate::core::item::ItemWriter;

    #[derive(Serialize)]
    struct Garment<'a> {
        name: &'a str,
        size: &'a str,
    }

    #[test]
    fn writes_one_compact_object_per_line() {
        let writer = JsonLinesItemWriter::from_writer(Vec::new());

        writer
            .write(&[
                Garment {
                    name: "Camiseta",
                    size: "M",
                },
                Garment {
                    name: "Calça",
                    size: "G",
                },
            ])
            .unwrap();
        ItemWriter::<Garment>::flush(&writer).unwrap();

        let output = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(
            output,
            "{\"name\":\"Camiseta\",\"size\":\"M\"}\n{\"name\":\"Calça\",\"size\":\"G\"}\n"
        );
    }

    #[test]
    fn non_ascii_characters_are_not_escaped() {
        let writer = JsonLinesItemWriter::from_writer(Vec::new());

        writer
            .write(&[Garment {
                name: "Verde Musgo",
                size: "Único",
            }])
            .unwrap();

        let output = String::from_utf8(writer.into_inner()).unwrap();
        assert!(output.contains("Único"));
        assert!(!output.contains("\\u"));
    }

    #[test]
    fn from_path_truncates_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garments.json");

        std::fs::write(&path, "stale content\n").unwrap();

        let writer = JsonLinesItemWriter::from_path(&path).unwrap();
        writer
            .write(&[Garment {
                name: "Meia",
                size: "P",
            }])
            .unwrap();
        ItemWriter::<Garment>::close(&writer).unwrap();
        drop(writer);

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "{\"name\":\"Meia\",\"size\":\"P\"}\n");
    }
}
