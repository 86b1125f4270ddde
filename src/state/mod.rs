//! State module for tracking crawl progress
//!
//! # Components
//!
//! - `CrawlState`: visited set, FIFO frontier, page counter and start time of one crawl
//! - `PageResult`: the extracted text of one fetched page

mod crawl_state;
mod page_result;

// Re-export main types
pub use crawl_state::CrawlState;
pub use page_result::PageResult;
