//! Services for the search box

pub mod index;
pub mod navigation;

pub use index::load_index;
pub use navigation::navigate;
