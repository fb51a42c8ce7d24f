//! Safe archive extraction

pub mod extractor;

pub use extractor::{ExtractError, extract_tar_gz};
