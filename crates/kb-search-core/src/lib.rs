//! kb-search-core - Core library for kb-search
//!
//! This crate holds the view-independent parts of the search box: result
//! records, the combobox interaction state, the search session that ties
//! them to a query collaborator, and dropdown positioning.

pub mod combobox;
pub mod config;
pub mod error;
pub mod models;
pub mod position;
pub mod search;
pub mod session;
mod util;

pub use combobox::{ComboKey, ComboboxState};
pub use config::{LayoutConfig, SearchConfig};
pub use error::{Error, Result};
pub use models::SearchResult;
pub use position::{menu_position, MenuPlacement, MenuPosition, Rect};
pub use search::{SearchIndex, StaticIndex};
pub use session::{SearchSession, SessionEvent};
