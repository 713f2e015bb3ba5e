use owo_colors::OwoColorize;

use super::fragment::{Fragment, Style, TypeLabel};
use super::utils::escape_html;
use crate::core_api::error::Result;

/// Output format of a render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderFormat {
	/// Plain text, optionally with ANSI colors.
	#[default]
	Text,
	/// HTML fragments carrying the viewer's CSS classes.
	Html,
	/// The page structure as JSON.
	Json,
}

/// One structural element of a rendered page.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(tag = "block", rename_all = "kebab-case")]
pub enum Block {
	/// Section heading; level 1 is the page title.
	Heading {
		/// Nesting level, starting at 1.
		level: u8,
		/// Heading content.
		label: TypeLabel,
	},
	/// Free-standing line such as a signature.
	Line {
		/// Line content.
		label: TypeLabel,
	},
	/// Listing row with an optional one-line summary.
	Entry {
		/// Row content, usually a link.
		label: TypeLabel,
		/// Summary text.
		#[serde(skip_serializing_if = "String::is_empty")]
		summary: String,
		/// Whether the entry is deprecated.
		#[serde(skip_serializing_if = "std::ops::Not::not")]
		deprecated: bool,
	},
}

/// Ordered blocks forming one view.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct Page {
	blocks: Vec<Block>,
}

impl Page {
	/// Empty page.
	pub fn new() -> Self {
		Self::default()
	}

	/// Append a heading.
	pub fn heading(&mut self, level: u8, label: impl Into<TypeLabel>) {
		self.blocks.push(Block::Heading {
			level,
			label: label.into(),
		});
	}

	/// Append a line.
	pub fn line(&mut self, label: impl Into<TypeLabel>) {
		self.blocks.push(Block::Line { label: label.into() });
	}

	/// Append a listing row.
	pub fn entry(&mut self, label: impl Into<TypeLabel>, summary: impl Into<String>, deprecated: bool) {
		self.blocks.push(Block::Entry {
			label: label.into(),
			summary: summary.into(),
			deprecated,
		});
	}

	/// Blocks in order.
	pub fn blocks(&self) -> &[Block] {
		&self.blocks
	}

	/// Whether nothing was added.
	pub fn is_empty(&self) -> bool {
		self.blocks.is_empty()
	}
}

impl From<&str> for TypeLabel {
	fn from(text: &str) -> Self {
		Fragment::text(text).into()
	}
}

impl From<String> for TypeLabel {
	fn from(text: String) -> Self {
		Fragment::text(text).into()
	}
}

/// Turns pages and labels into output text.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
	format: RenderFormat,
	color: bool,
	highlight: Option<String>,
}

impl Renderer {
	/// Renderer for `format` without colors.
	pub fn new(format: RenderFormat) -> Self {
		Self {
			format,
			..Self::default()
		}
	}

	/// Emit ANSI colors in text output.
	pub fn with_color(mut self, color: bool) -> Self {
		self.color = color;
		self
	}

	/// Highlight case-insensitive occurrences of `query` inside link text.
	pub fn with_highlight(mut self, query: impl Into<String>) -> Self {
		let query = query.into();
		self.highlight = (!query.is_empty()).then_some(query);
		self
	}

	/// Configured format.
	pub fn format(&self) -> RenderFormat {
		self.format
	}

	/// Render a full page.
	pub fn render(&self, page: &Page) -> Result<String> {
		match self.format {
			RenderFormat::Json => Ok(serde_json::to_string_pretty(page)?),
			RenderFormat::Text => Ok(self.render_text(page)),
			RenderFormat::Html => Ok(self.render_html(page)),
		}
	}

	/// Render a single label inline.
	pub fn paint_label(&self, label: &TypeLabel) -> String {
		match self.format {
			RenderFormat::Html => label.fragments().iter().map(|f| self.html_fragment(f)).collect(),
			RenderFormat::Text | RenderFormat::Json => {
				label.fragments().iter().map(|f| self.text_fragment(f)).collect()
			}
		}
	}

	fn render_text(&self, page: &Page) -> String {
		let mut out = String::new();
		for (i, block) in page.blocks().iter().enumerate() {
			match block {
				Block::Heading { level, label } => {
					if i > 0 {
						out.push('\n');
					}
					let text = self.paint_label(label);
					if self.color {
						out.push_str(&text.bold().to_string());
					} else {
						out.push_str(&text);
					}
					if *level == 1 {
						out.push('\n');
						out.push_str(&"=".repeat(label.text().chars().count()));
					}
				}
				Block::Line { label } => out.push_str(&self.paint_label(label)),
				Block::Entry {
					label,
					summary,
					deprecated,
				} => {
					out.push_str("  ");
					out.push_str(&self.paint_label(label));
					if *deprecated {
						out.push_str(" [deprecated]");
					}
					if !summary.is_empty() {
						out.push_str("  ");
						if self.color {
							out.push_str(&summary.dimmed().to_string());
						} else {
							out.push_str(summary);
						}
					}
				}
			}
			out.push('\n');
		}
		out
	}

	fn render_html(&self, page: &Page) -> String {
		let mut out = String::new();
		let mut in_list = false;
		for block in page.blocks() {
			let is_entry = matches!(block, Block::Entry { .. });
			if in_list && !is_entry {
				out.push_str("</ul>\n");
			} else if !in_list && is_entry {
				out.push_str("<ul>\n");
			}
			in_list = is_entry;
			match block {
				Block::Heading { level, label } => {
					let level = (*level).clamp(1, 6);
					out.push_str(&format!("<h{level}>{}</h{level}>\n", self.paint_label(label)));
				}
				Block::Line { label } => {
					out.push_str(&format!("<pre><code>{}</code></pre>\n", self.paint_label(label)));
				}
				Block::Entry {
					label,
					summary,
					deprecated,
				} => {
					let label = self.paint_label(label);
					let label = if *deprecated {
						format!("<span class=\"strike\">{label}</span>")
					} else {
						label
					};
					if summary.is_empty() {
						out.push_str(&format!("<li>{label}</li>\n"));
					} else {
						out.push_str(&format!(
							"<li>{label} <span class=\"summary\">{}</span></li>\n",
							escape_html(summary)
						));
					}
				}
			}
		}
		if in_list {
			out.push_str("</ul>\n");
		}
		out
	}

	fn text_fragment(&self, fragment: &Fragment) -> String {
		let text = match (&self.highlight, fragment.is_link()) {
			(Some(query), true) => highlight_matches(&fragment.text, query, self.color),
			_ => fragment.text.clone(),
		};
		if !self.color {
			return text;
		}
		match fragment.style {
			Style::Plain | Style::BuiltinTypeOther => text,
			Style::BuiltinLink => text.cyan().to_string(),
			Style::Item => text.bright_blue().underline().to_string(),
			Style::Default => text.dimmed().to_string(),
			Style::ArraySuffix | Style::RestSuffix | Style::OptionalSuffix => text.yellow().to_string(),
			Style::Keyword => text.magenta().bold().to_string(),
			Style::Failure => text.red().bold().to_string(),
		}
	}

	fn html_fragment(&self, fragment: &Fragment) -> String {
		let text = match (&self.highlight, fragment.is_link()) {
			(Some(query), true) => highlight_html(&fragment.text, query),
			_ => escape_html(&fragment.text),
		};
		let class = fragment
			.style
			.class()
			.map(|class| format!(" class=\"{class}\""))
			.unwrap_or_default();
		if let Some(href) = &fragment.href {
			return format!("<a{class} href=\"{}\">{text}</a>", escape_html(href));
		}
		if let Some(title) = fragment.style.title() {
			return format!("<span title=\"{title}\">{text}</span>");
		}
		if class.is_empty() {
			text
		} else {
			format!("<span{class}>{text}</span>")
		}
	}
}

/// Byte ranges of case-insensitive, non-overlapping occurrences of `query`.
fn match_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
	let search_text = text.to_lowercase();
	let search_query = query.to_lowercase();
	// Lowercasing can change byte lengths outside ASCII; offsets are only valid when it does not.
	if search_query.is_empty() || search_text.len() != text.len() || search_query.len() != query.len() {
		return Vec::new();
	}
	let mut ranges = Vec::new();
	let mut search_start = 0;
	while let Some(pos) = search_text[search_start..].find(&search_query) {
		let start = search_start + pos;
		let end = start + search_query.len();
		ranges.push((start, end));
		search_start = end;
	}
	ranges
}

/// Highlight all occurrences of the query in bright green and bold.
fn highlight_matches(text: &str, query: &str, color: bool) -> String {
	if !color {
		return text.to_string();
	}
	let mut result = String::with_capacity(text.len() * 2);
	let mut last_end = 0;
	for (start, end) in match_ranges(text, query) {
		result.push_str(&text[last_end..start]);
		result.push_str(&(&text[start..end]).bright_green().bold().to_string());
		last_end = end;
	}
	result.push_str(&text[last_end..]);
	result
}

/// Wrap all occurrences of the query in `<mark>`, escaping the rest.
fn highlight_html(text: &str, query: &str) -> String {
	let mut result = String::with_capacity(text.len() * 2);
	let mut last_end = 0;
	for (start, end) in match_ranges(text, query) {
		result.push_str(&escape_html(&text[last_end..start]));
		result.push_str("<mark>");
		result.push_str(&escape_html(&text[start..end]));
		result.push_str("</mark>");
		last_end = end;
	}
	result.push_str(&escape_html(&text[last_end..]));
	result
}
