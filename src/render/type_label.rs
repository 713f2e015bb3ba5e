//! Type label rendering with cross-reference links.
//!
//! A label is built in two steps: the base label selected by the node's
//! [`TypeKind`], then the suffixes selected by its [`Modifiers`]. The base
//! never looks at the modifiers and the suffixes never look at the kind.

use super::fragment::{Fragment, Style, TypeLabel};
use super::links::{builtin_path, type_path};
use crate::model::{
	Category, ConstructLookup, DescriptorError, Modifiers, RawTypeDescriptor, ResolveMode,
	TypeDescriptor, TypeKind,
};

/// Default value the generator emits when a parameter has none.
pub const NO_VALUE: &str = "no-value";

/// Upper bound on rendered `[ ]` pairs; larger dimension counts are clamped.
pub const MAX_ARRAY_DIMENSIONS: u32 = 32;

/// Renders type descriptors into linked labels.
#[derive(Clone, Copy, Default)]
pub struct TypeLabelResolver<'a> {
	mode: ResolveMode,
	lookup: Option<&'a dyn ConstructLookup>,
}

impl<'a> TypeLabelResolver<'a> {
	/// Lenient resolver that trusts the generator's link flags.
	pub fn new() -> Self {
		Self::default()
	}

	/// Select how malformed descriptors are handled by [`Self::try_resolve`].
	pub fn with_mode(mut self, mode: ResolveMode) -> Self {
		self.mode = mode;
		self
	}

	/// Check user-defined references against loaded documents before linking.
	pub fn with_lookup(mut self, lookup: &'a dyn ConstructLookup) -> Self {
		self.lookup = Some(lookup);
		self
	}

	/// Configured mode.
	pub fn mode(&self) -> ResolveMode {
		self.mode
	}

	/// Classify and render `raw`, failing on malformed input in strict mode.
	pub fn try_resolve(
		&self,
		raw: &RawTypeDescriptor,
		default_value: Option<&str>,
	) -> Result<TypeLabel, DescriptorError> {
		let descriptor = TypeDescriptor::classify(raw, self.mode)?;
		Ok(self.label(&descriptor, default_value))
	}

	/// Classify and render `raw`; malformed nodes render as their name.
	pub fn resolve(&self, raw: &RawTypeDescriptor, default_value: Option<&str>) -> TypeLabel {
		self.label(&TypeDescriptor::classify_lenient(raw), default_value)
	}

	/// Render an already classified descriptor.
	pub fn label(&self, descriptor: &TypeDescriptor, default_value: Option<&str>) -> TypeLabel {
		let mut label = self.base(descriptor);
		push_suffixes(&mut label, descriptor);
		if let Some(value) = default_value.filter(|value| !value.is_empty() && *value != NO_VALUE) {
			self.push_default(&mut label, descriptor, value);
		}
		label
	}

	fn base(&self, descriptor: &TypeDescriptor) -> TypeLabel {
		let origin = &descriptor.origin;
		let mut label = TypeLabel::new();
		match &descriptor.kind {
			TypeKind::Union(members) => label.append_joined(self.all(members), " | "),
			TypeKind::Intersection(members) => label.append_joined(self.all(members), " & "),
			TypeKind::Tuple(members) => {
				label.push_text("[");
				label.append_joined(self.all(members), ", ");
				label.push_text("]");
			}
			TypeKind::Lambda { params, returns } => {
				label.push_text("function(");
				label.append_joined(self.all(params), ", ");
				match returns {
					Some(returns) => {
						label.push_text(") returns (");
						label.append(self.label(returns, None));
						label.push_text(")");
					}
					None => label.push_text(") ()"),
				}
			}
			TypeKind::Array(element) | TypeKind::Rest(element) => {
				label.append(self.label(element, None));
			}
			TypeKind::Parenthesised(element) => {
				label.push_text("(");
				label.append(self.label(element, None));
				label.push_text(")");
			}
			TypeKind::Inclusion(element) => {
				label.push_text("*");
				label.append(self.label(element, None));
			}
			TypeKind::TypeDesc(element) => self.push_wrapper(&mut label, "typedesc", origin.version_or_empty(), element),
			TypeKind::Future(element) => self.push_wrapper(&mut label, "future", origin.version_or_empty(), element),
			TypeKind::InlineClosedRecord(fields) => self.push_record(&mut label, fields, "{|", "|}"),
			TypeKind::InlineRecord(fields) => self.push_record(&mut label, fields, "{", "}"),
			TypeKind::Map(constraint) => {
				label.push(Fragment::link(
					origin.name_or_empty(),
					builtin_path(origin.version_or_empty(), "map"),
					Style::BuiltinLink,
				));
				label.push_text("<");
				label.append(self.label(constraint, None));
				label.push_text(">");
			}
			TypeKind::Stream(members) => {
				label.push(Fragment::link(
					origin.name_or_empty(),
					builtin_path(origin.version_or_empty(), "stream"),
					Style::BuiltinLink,
				));
				label.push_text("<");
				label.append_joined(self.all(members), ", ");
				label.push_text(">");
			}
			TypeKind::Builtin => label.push(Fragment::link(
				origin.name_or_empty(),
				builtin_path(origin.version_or_empty(), origin.name_or_empty()),
				Style::BuiltinLink,
			)),
			TypeKind::Unlinked => label.push(Fragment::styled(origin.name_or_empty(), Style::BuiltinTypeOther)),
			TypeKind::UserDefined if self.is_resolvable(descriptor) => label.push(Fragment::link(
				origin.name_or_empty(),
				type_path(origin),
				Style::Item,
			)),
			TypeKind::UserDefined => {
				tracing::debug!(name = origin.name_or_empty(), "unresolvable type reference rendered without link");
				label.push(Fragment::styled(origin.name_or_empty(), Style::BuiltinTypeOther));
			}
		}
		label
	}

	fn all(&self, descriptors: &[TypeDescriptor]) -> impl Iterator<Item = TypeLabel> {
		descriptors.iter().map(move |descriptor| self.label(descriptor, None))
	}

	fn push_wrapper(&self, label: &mut TypeLabel, keyword: &str, version: &str, element: &TypeDescriptor) {
		label.push(Fragment::link(keyword, builtin_path(version, keyword), Style::BuiltinLink));
		label.push_text("<");
		label.append(self.label(element, None));
		label.push_text(">");
	}

	fn push_record(&self, label: &mut TypeLabel, fields: &[TypeDescriptor], open: &str, close: &str) {
		label.push_text(format!("record {open} "));
		for field in fields {
			label.append(self.label(field, None));
			label.push_text("; ");
		}
		label.push_text(close);
	}

	fn push_default(&self, label: &mut TypeLabel, descriptor: &TypeDescriptor, value: &str) {
		let object_like = matches!(
			descriptor.origin.category,
			Some(Category::Classes | Category::ObjectTypes)
		);
		let linked = descriptor.kind == TypeKind::UserDefined && self.is_resolvable(descriptor);
		label.push_text(" ");
		if object_like && linked && value != "()" {
			label.push(Fragment::styled("(default ", Style::Default));
			label.push(Fragment::link(value, type_path(&descriptor.origin), Style::Item));
			label.push(Fragment::styled(")", Style::Default));
		} else {
			label.push(Fragment::styled(format!("(default {value})"), Style::Default));
		}
	}

	fn is_resolvable(&self, descriptor: &TypeDescriptor) -> bool {
		let Some(lookup) = self.lookup else {
			return true;
		};
		let origin = &descriptor.origin;
		match (&origin.module_name, &origin.category) {
			(Some(module_name), Some(category)) => lookup.contains_construct(
				origin.org_name.as_deref(),
				module_name,
				category,
				origin.name_or_empty(),
			),
			_ => false,
		}
	}
}

/// Append array, rest and optional suffixes, in that order.
fn push_suffixes(label: &mut TypeLabel, descriptor: &TypeDescriptor) {
	let modifiers = descriptor.modifiers;
	if modifiers.contains(Modifiers::ARRAY) {
		let dimensions = descriptor.array_dimensions.min(MAX_ARRAY_DIMENSIONS) as usize;
		label.push(Fragment::styled("[ ]".repeat(dimensions), Style::ArraySuffix));
	}
	if modifiers.contains(Modifiers::REST) {
		label.push(Fragment::styled("...", Style::RestSuffix));
	}
	if modifiers.contains(Modifiers::NULLABLE) {
		label.push(Fragment::styled("?", Style::OptionalSuffix));
	}
}

/// Render a descriptor leniently without reference checks.
pub fn resolve_type_label(raw: &RawTypeDescriptor, default_value: Option<&str>) -> TypeLabel {
	TypeLabelResolver::new().resolve(raw, default_value)
}
