//! Display fragments produced by the renderers.

use std::fmt;

/// Visual role of a fragment; maps onto the viewer's CSS classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Style {
	/// Punctuation and other undecorated text.
	#[default]
	Plain,
	/// Link to a language built-in page.
	BuiltinLink,
	/// Link to a documented construct.
	Item,
	/// Type name that cannot be linked.
	BuiltinTypeOther,
	/// `(default ...)` annotation.
	Default,
	/// `[ ]` array suffix.
	ArraySuffix,
	/// `...` rest parameter suffix.
	RestSuffix,
	/// `?` optional suffix.
	OptionalSuffix,
	/// Keyword such as `function` or `returns` in a signature.
	Keyword,
	/// Failed test status in a report.
	Failure,
}

impl Style {
	/// CSS class carried by the fragment, if any.
	pub fn class(self) -> Option<&'static str> {
		match self {
			Self::BuiltinLink => Some("builtin-type-link"),
			Self::Item => Some("item"),
			Self::BuiltinTypeOther => Some("builtin-type-other"),
			Self::Default => Some("default"),
			Self::Keyword => Some("token keyword"),
			Self::Failure => Some("failure"),
			Self::Plain | Self::ArraySuffix | Self::RestSuffix | Self::OptionalSuffix => None,
		}
	}

	/// Tooltip carried by suffix fragments.
	pub fn title(self) -> Option<&'static str> {
		match self {
			Self::ArraySuffix => Some("array"),
			Self::RestSuffix => Some("rest parameter"),
			Self::OptionalSuffix => Some("optional"),
			_ => None,
		}
	}

	fn is_plain(&self) -> bool {
		*self == Self::Plain
	}
}

/// A run of text, optionally pointing at another page.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Fragment {
	/// Displayed text.
	pub text: String,
	/// In-app navigation target.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub href: Option<String>,
	/// Visual role.
	#[serde(skip_serializing_if = "Style::is_plain")]
	pub style: Style,
}

impl Fragment {
	/// Undecorated text.
	pub fn text(text: impl Into<String>) -> Self {
		Self::styled(text, Style::Plain)
	}

	/// Text with a style but no link.
	pub fn styled(text: impl Into<String>, style: Style) -> Self {
		Self {
			text: text.into(),
			href: None,
			style,
		}
	}

	/// Linked text.
	pub fn link(text: impl Into<String>, href: impl Into<String>, style: Style) -> Self {
		Self {
			text: text.into(),
			href: Some(href.into()),
			style,
		}
	}

	/// Whether the fragment navigates somewhere.
	pub fn is_link(&self) -> bool {
		self.href.is_some()
	}
}

/// Ordered sequence of fragments forming one inline label.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct TypeLabel {
	fragments: Vec<Fragment>,
}

impl TypeLabel {
	/// Empty label.
	pub fn new() -> Self {
		Self::default()
	}

	/// Append a fragment, merging adjacent plain text.
	pub fn push(&mut self, fragment: Fragment) {
		if fragment.text.is_empty() && fragment.href.is_none() {
			return;
		}
		if fragment.style == Style::Plain
			&& fragment.href.is_none()
			&& let Some(last) = self.fragments.last_mut()
			&& last.style == Style::Plain
			&& last.href.is_none()
		{
			last.text.push_str(&fragment.text);
			return;
		}
		self.fragments.push(fragment);
	}

	/// Append undecorated text.
	pub fn push_text(&mut self, text: impl Into<String>) {
		self.push(Fragment::text(text));
	}

	/// Append every fragment of another label.
	pub fn append(&mut self, other: TypeLabel) {
		for fragment in other.fragments {
			self.push(fragment);
		}
	}

	/// Append labels separated by `separator`.
	pub fn append_joined(&mut self, labels: impl IntoIterator<Item = TypeLabel>, separator: &str) {
		for (i, label) in labels.into_iter().enumerate() {
			if i > 0 {
				self.push_text(separator);
			}
			self.append(label);
		}
	}

	/// Fragments in display order.
	pub fn fragments(&self) -> &[Fragment] {
		&self.fragments
	}

	/// Fragments that carry a link.
	pub fn links(&self) -> impl Iterator<Item = &Fragment> {
		self.fragments.iter().filter(|fragment| fragment.is_link())
	}

	/// Concatenated text of all fragments.
	pub fn text(&self) -> String {
		self.fragments.iter().map(|fragment| fragment.text.as_str()).collect()
	}

	/// Whether the label has no fragments.
	pub fn is_empty(&self) -> bool {
		self.fragments.is_empty()
	}
}

impl From<Fragment> for TypeLabel {
	fn from(fragment: Fragment) -> Self {
		let mut label = Self::new();
		label.push(fragment);
		label
	}
}

impl fmt::Display for TypeLabel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for fragment in &self.fragments {
			f.write_str(&fragment.text)?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn adjacent_plain_text_is_merged() {
		let mut label = TypeLabel::new();
		label.push_text("[");
		label.push_text("");
		label.push(Fragment::link("int", "/builtin/1.0/int", Style::BuiltinLink));
		label.push_text(", ");
		label.push_text("]");
		assert_eq!(label.fragments().len(), 3);
		assert_eq!(label.fragments()[2].text, ", ]");
		assert_eq!(label.text(), "[int, ]");
	}

	#[test]
	fn joined_labels_get_separators_between_only() {
		let mut label = TypeLabel::new();
		label.append_joined(
			["a", "b", "c"].map(|name| TypeLabel::from(Fragment::styled(name, Style::BuiltinTypeOther))),
			" | ",
		);
		assert_eq!(label.to_string(), "a | b | c");
		assert_eq!(label.links().count(), 0);
	}

	#[test]
	fn serializes_links_and_styles_only_when_present() {
		let mut label = TypeLabel::new();
		label.push(Fragment::link("Client", "/ballerina/http/2.0.0/http/clients/Client", Style::Item));
		label.push(Fragment::styled("?", Style::OptionalSuffix));
		label.push_text(" ");
		let json = serde_json::to_value(&label).unwrap();
		assert_eq!(
			json,
			serde_json::json!([
				{ "text": "Client", "href": "/ballerina/http/2.0.0/http/clients/Client", "style": "item" },
				{ "text": "?", "style": "optional-suffix" },
				{ "text": " " }
			])
		);
	}
}
