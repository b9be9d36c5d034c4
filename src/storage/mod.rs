//! Persistence for the expense log: a single append-only text file.

pub mod text_store;

pub use text_store::{LoadReport, SkippedRow, StoreLines, TextStore};
