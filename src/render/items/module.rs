use super::super::fragment::Fragment;
use super::super::state::RenderState;
use super::super::utils::first_line;
use crate::model::Category;

/// Render a module summary: title, first line of the description and one
/// section per non-empty category, in search display order.
pub fn render_module(state: &mut RenderState) {
	let module = state.module;
	state.page.heading(
		1,
		format!("{}/{}:{}", module.org_name, module.id, module.version),
	);
	if module.is_deprecated {
		state.page.line("[Deprecated]");
	}
	let summary = first_line(module.description.as_deref());
	if !summary.is_empty() {
		state.page.line(summary);
	}

	for category in Category::SEARCHABLE.iter().filter(|c| **c != Category::Modules) {
		let constructs = module.constructs(category);
		if constructs.is_empty() {
			continue;
		}
		state.page.heading(2, category.label());
		for construct in constructs {
			let link: Fragment = state.construct_link(category, &construct.name);
			state.page.entry(
				link,
				first_line(construct.description.as_deref()),
				construct.is_deprecated,
			);
		}
	}
}
