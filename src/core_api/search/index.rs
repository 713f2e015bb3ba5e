use super::types::{SearchData, SearchGroup, SearchResults};
use crate::model::Category;

/// Case-insensitive substring filter over the search data lists.
///
/// Lowercased identifiers are computed once at construction; each query is a
/// linear scan that keeps the backing-list order.
#[derive(Debug, Clone)]
pub struct SearchIndex {
	data: SearchData,
	/// Lowercased ids, aligned with [`Category::SEARCHABLE`] and each list.
	lowered: Vec<Vec<String>>,
}

impl SearchIndex {
	/// Build an index over the given data.
	pub fn new(data: SearchData) -> Self {
		let lowered = Category::SEARCHABLE
			.iter()
			.map(|category| {
				data.list(category)
					.iter()
					.map(|entity| entity.id.to_lowercase())
					.collect()
			})
			.collect();
		tracing::debug!(entities = data.len(), "built search index");
		Self { data, lowered }
	}

	/// Backing data.
	pub fn data(&self) -> &SearchData {
		&self.data
	}

	/// Match `query` against every category.
	///
	/// An empty query matches nothing and reports `has_query() == false`.
	pub fn search(&self, query: &str) -> SearchResults<'_> {
		let needle = query.to_lowercase();
		let groups = Category::SEARCHABLE
			.iter()
			.zip(&self.lowered)
			.map(|(category, lowered)| {
				let items = if query.is_empty() {
					Vec::new()
				} else {
					self.data
						.list(category)
						.iter()
						.zip(lowered)
						.filter(|(_, id)| id.contains(&needle))
						.map(|(entity, _)| entity)
						.collect()
				};
				SearchGroup {
					category: category.clone(),
					items,
				}
			})
			.collect();
		let results = SearchResults::new(query, groups);
		tracing::debug!(query, matches = results.total(), "search");
		results
	}
}
