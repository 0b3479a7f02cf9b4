pub mod json_writer;
