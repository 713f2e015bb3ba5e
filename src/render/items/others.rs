use super::super::fragment::{Fragment, Style, TypeLabel};
use super::super::state::RenderState;
use super::super::utils::remove_html_tags;
use crate::core_api::error::Result;
use crate::model::Construct;

/// Heading of a function or method: the name, or `accessor path` for resource methods.
pub fn function_title(function: &Construct) -> String {
	match (function.is_resource, &function.accessor, &function.resource_path) {
		(true, Some(accessor), Some(path)) => format!("{accessor} {path}"),
		_ => function.name.clone(),
	}
}

/// Render a function or method signature.
///
/// `function name(T1 p1, T2 p2) returns R`; only the first return parameter is shown.
pub fn render_function_signature(state: &RenderState, function: &Construct) -> Result<TypeLabel> {
	let mut signature = TypeLabel::new();
	signature.push(Fragment::styled("function", Style::Keyword));
	signature.push_text(format!(" {}(", function_title(function)));
	for (i, param) in function.parameters.iter().enumerate() {
		if i > 0 {
			signature.push_text(", ");
		}
		signature.append(state.label(&param.type_descriptor, None)?);
		signature.push_text(format!(" {}", param.name));
	}
	signature.push_text(")");
	if let Some(returns) = function.return_parameters.first() {
		signature.push_text(" ");
		signature.push(Fragment::styled("returns", Style::Keyword));
		signature.push_text(" ");
		signature.append(state.label(&returns.type_descriptor, None)?);
	}
	Ok(signature)
}

/// Render the full page of a function or method.
pub fn render_function_item(state: &mut RenderState, function: &Construct) -> Result<()> {
	let signature = render_function_signature(state, function)?;
	state.page.heading(1, function_title(function));
	state.page.line(signature);

	let tags: Vec<&str> = [
		(function.is_deprecated, "Deprecated"),
		(function.is_isolated, "Isolated Function"),
		(function.is_remote, "Remote Function"),
		(function.is_resource, "Resource Function"),
	]
	.into_iter()
	.filter_map(|(set, tag)| set.then_some(tag))
	.collect();
	if !tags.is_empty() {
		state.page.line(format!("[{}]", tags.join("] [")));
	}

	let description = remove_html_tags(function.description.as_deref());
	if !description.is_empty() {
		state.page.line(description);
	}

	if let Some(inclusion) = &function.inclusion_type {
		let mut line = TypeLabel::from("Method included from *");
		line.append(state.label(inclusion, None)?);
		state.page.line(line);
		return Ok(());
	}

	if !function.parameters.is_empty() {
		state.page.heading(2, "Parameters");
		for param in &function.parameters {
			let mut entry = TypeLabel::from(format!("{}  ", param.name));
			entry.append(state.label(&param.type_descriptor, param.default_value.as_deref())?);
			state.page.entry(
				entry,
				remove_html_tags(param.description.as_deref()),
				param.is_deprecated,
			);
		}
	}

	if let Some(returns) = function.return_parameters.first() {
		state.page.heading(2, "Return Type");
		let mut entry = TypeLabel::from("(");
		entry.append(state.label(&returns.type_descriptor, None)?);
		entry.push_text(")");
		state.page.entry(entry, remove_html_tags(returns.description.as_deref()), false);
	}
	Ok(())
}
