use super::core::Page;
use super::fragment::{Fragment, Style, TypeLabel};
use super::links::construct_path;
use super::type_label::TypeLabelResolver;
use crate::core_api::error::Result;
use crate::model::{Category, Module, Package, RawTypeDescriptor};

/// Rendering context for pages scoped to one module.
pub struct RenderState<'a> {
	/// Label resolver configured by the caller.
	pub resolver: TypeLabelResolver<'a>,
	/// Package owning the module.
	pub package: &'a Package,
	/// Module being rendered.
	pub module: &'a Module,
	/// Page under construction.
	pub page: Page,
}

impl<'a> RenderState<'a> {
	/// Create a new render state with an empty page.
	pub fn new(resolver: TypeLabelResolver<'a>, package: &'a Package, module: &'a Module) -> Self {
		Self {
			resolver,
			package,
			module,
			page: Page::new(),
		}
	}

	/// Resolve a type label, failing only under strict resolution.
	pub fn label(&self, raw: &RawTypeDescriptor, default_value: Option<&str>) -> Result<TypeLabel> {
		Ok(self.resolver.try_resolve(raw, default_value)?)
	}

	/// Link to a construct of the current module.
	pub fn construct_link(&self, category: &Category, name: &str) -> Fragment {
		let href = construct_path(
			&self.module.org_name,
			&self.package.name,
			&self.module.version,
			&self.module.id,
			category,
			name,
		);
		Fragment::link(name, href, Style::Item)
	}

	/// Finish rendering and hand back the page.
	pub fn into_page(self) -> Page {
		self.page
	}
}
