use once_cell::sync::Lazy;
use regex::Regex;

static PRE_BLOCK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<pre>.*?</pre>").unwrap());
static TABLE_BLOCK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<table>.*?</table>").unwrap());
static SENTENCE_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.\s").unwrap());
static HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"</?[^>]*>").unwrap());

/// First sentence of a description, used as the summary line in listings.
///
/// Preformatted blocks and tables are dropped first. When the text contains a
/// sentence break (`.` followed by whitespace) the result ends with that `.`.
pub fn first_line(description: Option<&str>) -> String {
	let Some(description) = description else {
		return String::new();
	};
	let without_pre = PRE_BLOCK.replace_all(description, " ");
	let text = TABLE_BLOCK.replace_all(&without_pre, " ");
	match SENTENCE_END.find(&text) {
		Some(end) => format!("{}.", &text[..end.start()]),
		None => text.into_owned(),
	}
}

/// Strip every HTML tag, keeping the text between them.
pub fn remove_html_tags(text: Option<&str>) -> String {
	text.map(|text| HTML_TAG.replace_all(text, "").into_owned())
		.unwrap_or_default()
}

/// Escape text for inclusion in HTML content or attribute values.
pub fn escape_html(text: &str) -> String {
	let mut escaped = String::with_capacity(text.len());
	for ch in text.chars() {
		match ch {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#39;"),
			_ => escaped.push(ch),
		}
	}
	escaped
}
