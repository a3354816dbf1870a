//! UI Components
//!
//! The search box and its dropdown.

mod results;
mod search;
mod search_bar;

pub use results::Results;
pub use search::Search;
pub use search_bar::SearchBar;
