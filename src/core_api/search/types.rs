use crate::model::Category;
use crate::render::connector_for;

/// One documented construct as listed in the search data document.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchableEntity {
	/// Construct name, or the module identifier for modules.
	pub id: String,
	/// Declaring module.
	pub module_id: String,
	/// Organization owning the module.
	pub module_org_name: String,
	/// Version of the owning package.
	pub module_version: String,
	/// HTML description.
	pub description: Option<String>,
	/// Category the entity is listed under, when the generator records it.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub category: Option<Category>,
}

impl SearchableEntity {
	/// Navigation target of a result listed under `category`.
	///
	/// Modules link to `/<id>`; everything else to
	/// `/<moduleId>/<category><connector><id>`.
	pub fn href(&self, category: &Category) -> String {
		if *category == Category::Modules {
			format!("/{}", self.id)
		} else {
			format!(
				"/{}/{}{}{}",
				self.module_id,
				category,
				connector_for(category),
				self.id
			)
		}
	}

	/// Text shown for a result listed under `category`.
	pub fn display_text(&self, category: &Category) -> String {
		if *category == Category::Modules {
			self.id.clone()
		} else {
			format!("{}: {}", self.module_id, self.id)
		}
	}
}

/// The search data document: one flat list per category.
///
/// Categories missing from the document deserialize as empty lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchData {
	/// Modules.
	pub modules: Vec<SearchableEntity>,
	/// Classes.
	pub classes: Vec<SearchableEntity>,
	/// Object types.
	#[serde(alias = "abstractObjects")]
	pub object_types: Vec<SearchableEntity>,
	/// Clients.
	pub clients: Vec<SearchableEntity>,
	/// Listeners.
	pub listeners: Vec<SearchableEntity>,
	/// Functions.
	pub functions: Vec<SearchableEntity>,
	/// Records.
	pub records: Vec<SearchableEntity>,
	/// Constants.
	pub constants: Vec<SearchableEntity>,
	/// Type definitions.
	pub types: Vec<SearchableEntity>,
	/// Errors.
	pub errors: Vec<SearchableEntity>,
	/// Annotations.
	pub annotations: Vec<SearchableEntity>,
	/// Enumerations.
	pub enums: Vec<SearchableEntity>,
}

impl SearchData {
	/// Backing list of a category; non-searchable categories are empty.
	pub fn list(&self, category: &Category) -> &[SearchableEntity] {
		match category {
			Category::Modules => &self.modules,
			Category::Classes => &self.classes,
			Category::ObjectTypes => &self.object_types,
			Category::Clients => &self.clients,
			Category::Listeners => &self.listeners,
			Category::Functions => &self.functions,
			Category::Records => &self.records,
			Category::Constants => &self.constants,
			Category::Types => &self.types,
			Category::Errors => &self.errors,
			Category::Annotations => &self.annotations,
			Category::Enums => &self.enums,
			_ => &[],
		}
	}

	/// Number of entities across all categories.
	pub fn len(&self) -> usize {
		Category::SEARCHABLE.iter().map(|category| self.list(category).len()).sum()
	}

	/// Whether every category is empty.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

/// Matches of one category, in backing-list order.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SearchGroup<'a> {
	/// Category of the matches.
	pub category: Category,
	/// Matching entities.
	pub items: Vec<&'a SearchableEntity>,
}

/// Outcome of one query against a [`super::SearchIndex`].
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults<'a> {
	query: String,
	groups: Vec<SearchGroup<'a>>,
}

impl<'a> SearchResults<'a> {
	pub(super) fn new(query: &str, groups: Vec<SearchGroup<'a>>) -> Self {
		Self {
			query: query.to_string(),
			groups,
		}
	}

	/// The query as typed.
	pub fn query(&self) -> &str {
		&self.query
	}

	/// Whether a results view is active; false exactly when the query is empty.
	pub fn has_query(&self) -> bool {
		!self.query.is_empty()
	}

	/// Whether any category has a match.
	pub fn has_any_results(&self) -> bool {
		self.groups.iter().any(|group| !group.items.is_empty())
	}

	/// Matches of one category; empty for categories without matches.
	pub fn get(&self, category: &Category) -> &[&'a SearchableEntity] {
		self.groups
			.iter()
			.find(|group| group.category == *category)
			.map(|group| group.items.as_slice())
			.unwrap_or_default()
	}

	/// All groups in display order, including empty ones.
	pub fn groups(&self) -> &[SearchGroup<'a>] {
		&self.groups
	}

	/// Groups with at least one match, in display order.
	pub fn non_empty_groups(&self) -> impl Iterator<Item = &SearchGroup<'a>> {
		self.groups.iter().filter(|group| !group.items.is_empty())
	}

	/// Total number of matches.
	pub fn total(&self) -> usize {
		self.groups.iter().map(|group| group.items.len()).sum()
	}
}
