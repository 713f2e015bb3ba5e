//! In-memory search over the per-category construct lists.

mod index;
mod output;
mod types;

pub use index::SearchIndex;
pub use output::render_search_results;
pub use types::{SearchData, SearchGroup, SearchResults, SearchableEntity};
