//! Data models for kb-search

mod result;

pub use result::SearchResult;
