use super::super::fragment::{Fragment, Style, TypeLabel};
use super::super::state::RenderState;
use super::super::utils::{first_line, remove_html_tags};
use super::others::render_function_signature;
use crate::core_api::error::Result;
use crate::model::{Category, Construct, Field};

/// Render one field row: `name [readonly ]type (default v)`.
///
/// A field standing for a type inclusion renders as
/// `Fields included from *T` with the included member names as summary.
pub fn render_field(state: &RenderState, field: &Field) -> Result<(TypeLabel, String)> {
	let default_value = field.default_value.as_deref();
	if field.inclusion_type.is_some() {
		let mut label = TypeLabel::from("Fields included from *");
		label.append(state.label(&field.type_descriptor, default_value)?);
		let members = field
			.type_descriptor
			.member_types
			.as_deref()
			.unwrap_or_default()
			.iter()
			.map(|member| member.name_or_empty())
			.filter(|name| !name.is_empty())
			.collect::<Vec<_>>()
			.join(", ");
		return Ok((label, members));
	}

	let mut label = TypeLabel::from(format!("{} ", field.name));
	if field.is_read_only {
		label.push(Fragment::styled("readonly", Style::Keyword));
		label.push_text(" ");
	}
	label.append(state.label(&field.type_descriptor, default_value)?);
	Ok((label, remove_html_tags(field.description.as_deref())))
}

/// Append a field listing to the page.
pub fn render_fields(state: &mut RenderState, fields: &[Field]) -> Result<()> {
	for field in fields {
		let (label, summary) = render_field(state, field)?;
		state.page.entry(label, summary, field.is_deprecated);
	}
	Ok(())
}

/// Singular construct kind shown in page titles.
fn kind_title(category: &Category) -> &str {
	match category {
		Category::Records => "Record",
		Category::Classes => "Class",
		Category::Clients => "Client",
		Category::Listeners => "Listener",
		Category::ObjectTypes => "Object Type",
		Category::Enums => "Enum",
		Category::Functions => "Function",
		Category::Constants => "Constant",
		Category::Types => "Type",
		Category::Errors => "Error",
		Category::Annotations => "Annotation",
		other => other.label(),
	}
}

/// Render the page of any non-function construct.
pub fn render_construct(state: &mut RenderState, category: &Category, construct: &Construct) -> Result<()> {
	state.page.heading(1, format!("{}: {}", kind_title(category), construct.name));
	if construct.is_deprecated {
		state.page.line("[Deprecated]");
	}
	let description = remove_html_tags(construct.description.as_deref());
	if !description.is_empty() {
		state.page.line(description);
	}

	if let Some(raw) = &construct.type_descriptor {
		let mut line = TypeLabel::from(format!("{} ", construct.name));
		line.append(state.label(raw, construct.default_value.as_deref())?);
		if let Some(points) = construct.attachment_points.as_deref().filter(|p| !p.is_empty()) {
			line.push_text(format!(" on {points}"));
		}
		state.page.line(line);
	}

	if !construct.fields.is_empty() {
		state.page.heading(2, "Fields");
		render_fields(state, &construct.fields)?;
	}

	if !construct.members.is_empty() {
		state.page.heading(2, "Members");
		for member in &construct.members {
			state.page.entry(
				member.name.as_str(),
				remove_html_tags(member.description.as_deref()),
				member.is_deprecated,
			);
		}
	}

	for (title, methods) in [
		("Remote Methods", &construct.remote_methods),
		("Lifecycle Methods", &construct.life_cycle_methods),
		("Methods", &construct.other_methods),
	] {
		if methods.is_empty() {
			continue;
		}
		state.page.heading(2, title);
		for method in methods {
			let signature = render_function_signature(state, method)?;
			state.page.entry(
				signature,
				first_line(method.description.as_deref()),
				method.is_deprecated,
			);
		}
	}
	Ok(())
}
