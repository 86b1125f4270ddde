//! Output module for assembling the served documentation corpus
//!
//! This module handles:
//! - Page section headers and the page/preset separators
//! - The LLM instruction wrapper and download filenames
//! - Optional per-preset content minimization

mod corpus;
mod minimize;

pub use corpus::{
    download_filename, join_pages, join_presets, page_section, with_instructions,
    PAGE_SEPARATOR, PRESET_SEPARATOR,
};
pub use minimize::minimize;
