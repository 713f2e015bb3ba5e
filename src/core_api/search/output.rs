use super::types::SearchResults;
use crate::render::{Fragment, Page, Style, first_line, remove_html_tags};

/// Lay out a results listing.
///
/// An empty query yields an empty page. A query without matches yields the
/// heading and a single `No results found` line.
pub fn render_search_results(results: &SearchResults<'_>) -> Page {
	let mut page = Page::new();
	if !results.has_query() {
		return page;
	}
	page.heading(1, format!("Search results for '{}'", results.query()));
	if !results.has_any_results() {
		page.line("No results found");
		return page;
	}
	for group in results.non_empty_groups() {
		page.heading(2, format!("{}: {}", group.category.label(), group.items.len()));
		for entity in &group.items {
			let link = Fragment::link(
				entity.display_text(&group.category),
				entity.href(&group.category),
				Style::Item,
			);
			let summary = remove_html_tags(Some(&first_line(entity.description.as_deref())));
			page.entry(link, summary, false);
		}
	}
	page
}
