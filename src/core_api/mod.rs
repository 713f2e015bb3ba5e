//! Core library API for docview.
//!
//! The [`Docview`] facade loads the generated JSON documents from disk and
//! renders labels, search listings, construct pages and test reports in the
//! configured output format. It is UI-agnostic; the CLI is one frontend.

/// Error helpers for the core API.
pub mod error;
/// Resolution mode selection from the environment.
pub mod mode;
/// Search and indexing utilities.
pub mod search;

use std::path::Path;

use serde::de::DeserializeOwned;

use self::error::DocviewError;
pub use self::error::Result;
pub use self::search::{SearchData, SearchIndex, SearchResults, SearchableEntity};
use crate::model::{Category, Construct, DocumentTree, Module, Package, RawTypeDescriptor, ResolveMode};
use crate::render::items::{render_construct, render_function_item, render_module};
use crate::render::{Page, RenderFormat, RenderState, Renderer, TypeLabelResolver};
use crate::report::{self, ReportData};

/// Docview renders documentation views from pre-generated JSON documents.
///
/// Configuration follows the builder style: start from [`Docview::new`] and
/// chain `with_*` calls.
#[derive(Debug, Clone)]
pub struct Docview {
	/// How malformed type descriptors are handled.
	mode: ResolveMode,
	/// Output format of every render call.
	format: RenderFormat,
	/// Whether text output carries ANSI colors.
	color: bool,
}

impl Default for Docview {
	fn default() -> Self {
		Self::new()
	}
}

impl Docview {
	/// Creates a facade rendering plain text, with the resolution mode taken
	/// from `DOCVIEW_STRICT`.
	pub fn new() -> Self {
		Self {
			mode: mode::mode_from_env(),
			format: RenderFormat::Text,
			color: false,
		}
	}

	/// Selects strict or lenient handling of malformed type descriptors.
	pub fn with_mode(mut self, mode: ResolveMode) -> Self {
		self.mode = mode;
		self
	}

	/// Selects the output format.
	pub fn with_format(mut self, format: RenderFormat) -> Self {
		self.format = format;
		self
	}

	/// Enables or disables ANSI colors in text output.
	pub fn with_color(mut self, color: bool) -> Self {
		self.color = color;
		self
	}

	/// Returns the configured resolution mode.
	pub fn mode(&self) -> ResolveMode {
		self.mode
	}

	/// Returns the configured output format.
	pub fn format(&self) -> RenderFormat {
		self.format
	}

	fn renderer(&self) -> Renderer {
		Renderer::new(self.format).with_color(self.color)
	}

	/// Loads a documentation tree.
	pub fn load_documents(&self, path: &Path) -> Result<DocumentTree> {
		let tree: DocumentTree = load_json(path)?;
		tracing::debug!(packages = tree.packages.len(), modules = tree.modules().count(), "loaded documentation tree");
		Ok(tree)
	}

	/// Loads a search data document and indexes it.
	pub fn load_search_index(&self, path: &Path) -> Result<SearchIndex> {
		Ok(SearchIndex::new(load_json(path)?))
	}

	/// Loads a single type descriptor.
	pub fn load_descriptor(&self, path: &Path) -> Result<RawTypeDescriptor> {
		load_json(path)
	}

	/// Loads a test report in either the workspace or the single-project shape.
	pub fn load_report(&self, path: &Path) -> Result<ReportData> {
		load_json(path)
	}

	/// Renders one type label.
	///
	/// With `docs`, references to constructs missing from the documents render
	/// without a link.
	pub fn render_label(
		&self,
		descriptor: &RawTypeDescriptor,
		default_value: Option<&str>,
		docs: Option<&DocumentTree>,
	) -> Result<String> {
		let mut resolver = TypeLabelResolver::new().with_mode(self.mode);
		if let Some(docs) = docs {
			resolver = resolver.with_lookup(docs);
		}
		let label = resolver.try_resolve(descriptor, default_value)?;
		let mut page = Page::new();
		page.line(label);
		self.renderer().render(&page)
	}

	/// Runs a query and renders the results listing, highlighting matches.
	pub fn render_search(&self, index: &SearchIndex, query: &str) -> Result<String> {
		let results = index.search(query);
		let page = search::render_search_results(&results);
		self.renderer().with_highlight(query).render(&page)
	}

	/// Renders the summary page of a module.
	pub fn render_module(&self, tree: &DocumentTree, module_id: &str) -> Result<String> {
		let (package, module) = find_module(tree, module_id)?;
		let mut state = self.state(tree, package, module);
		render_module(&mut state);
		self.renderer().render(&state.into_page())
	}

	/// Renders a function page.
	///
	/// `name` is either a module-level function or `Type.method` for a method
	/// of a class, client, listener or object type.
	pub fn render_function(&self, tree: &DocumentTree, module_id: &str, name: &str) -> Result<String> {
		let (package, module) = find_module(tree, module_id)?;
		let function = find_function(module, name).ok_or_else(|| DocviewError::UnknownConstruct {
			module: module_id.to_string(),
			name: name.to_string(),
		})?;
		let mut state = self.state(tree, package, module);
		render_function_item(&mut state, function)?;
		self.renderer().render(&state.into_page())
	}

	/// Renders the page of any construct, searching categories in display order.
	pub fn render_construct(&self, tree: &DocumentTree, module_id: &str, name: &str) -> Result<String> {
		let (package, module) = find_module(tree, module_id)?;
		let (category, construct) = Category::SEARCHABLE
			.iter()
			.find_map(|category| module.construct(category, name).map(|construct| (category.clone(), construct)))
			.ok_or_else(|| DocviewError::UnknownConstruct {
				module: module_id.to_string(),
				name: name.to_string(),
			})?;
		let mut state = self.state(tree, package, module);
		if category == Category::Functions {
			render_function_item(&mut state, construct)?;
		} else {
			render_construct(&mut state, &category, construct)?;
		}
		self.renderer().render(&state.into_page())
	}

	/// Renders a test report.
	///
	/// Without `project` the workspace summary is shown; with `project` its
	/// module table, or with `module` as well that module's detail.
	pub fn render_report(&self, report: ReportData, project: Option<&str>, module: Option<&str>) -> Result<String> {
		let workspace = report.normalize();
		let page = match project {
			None => report::render_workspace(&workspace),
			Some(name) => {
				let project = workspace
					.project(name)
					.ok_or_else(|| DocviewError::UnknownProject(name.to_string()))?;
				match module {
					Some(module) => report::render_module(project, module)?,
					None => report::render_project(project),
				}
			}
		};
		self.renderer().render(&page)
	}

	fn state<'a>(&self, tree: &'a DocumentTree, package: &'a Package, module: &'a Module) -> RenderState<'a> {
		let resolver = TypeLabelResolver::new().with_mode(self.mode).with_lookup(tree);
		RenderState::new(resolver, package, module)
	}
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
	let contents = std::fs::read_to_string(path).map_err(|source| DocviewError::Io {
		path: path.to_path_buf(),
		source,
	})?;
	tracing::debug!(path = %path.display(), bytes = contents.len(), "read document");
	serde_json::from_str(&contents).map_err(|source| DocviewError::Json {
		path: path.to_path_buf(),
		source,
	})
}

fn find_module<'a>(tree: &'a DocumentTree, module_id: &str) -> Result<(&'a Package, &'a Module)> {
	tree.find_module(module_id)
		.ok_or_else(|| DocviewError::UnknownModule(module_id.to_string()))
}

fn find_function<'a>(module: &'a Module, name: &str) -> Option<&'a Construct> {
	if let Some(function) = module.construct(&Category::Functions, name) {
		return Some(function);
	}
	let (owner, method) = name.split_once('.')?;
	Category::SEARCHABLE
		.iter()
		.filter(|category| category.is_container())
		.find_map(|category| module.construct(category, owner))
		.and_then(|construct| construct.method(method))
}
