//! URL path construction shared by every link-producing renderer.

use crate::model::{Category, TypeOrigin};

/// Package name used when a module name is missing.
pub const UNKNOWN_PACKAGE: &str = "UNK";

/// Separator between a category segment and a construct name.
///
/// Container categories get a page per construct (`/`); everything else is an
/// anchor on the category page (`#`).
pub fn connector_for(category: &Category) -> char {
	if category.is_container() { '/' } else { '#' }
}

/// Package a module belongs to: the first `.`-separated segment of the module
/// name, except that `lang.*` modules are packages of their own.
pub fn package_name(module_name: Option<&str>) -> String {
	let Some(module_name) = module_name else {
		return UNKNOWN_PACKAGE.to_string();
	};
	match module_name.split('.').next() {
		Some("lang") => module_name.to_string(),
		Some(first) => first.to_string(),
		None => module_name.to_string(),
	}
}

/// Path of a construct page or anchor.
pub fn construct_path(
	org_name: &str,
	package: &str,
	version: &str,
	module_id: &str,
	category: &Category,
	name: &str,
) -> String {
	format!(
		"/{org_name}/{package}/{version}/{module_id}/{category}{}{name}",
		connector_for(category)
	)
}

/// Path of a module landing page.
pub fn module_path(org_name: &str, package: &str, version: &str, module_id: &str) -> String {
	format!("/{org_name}/{package}/{version}/{module_id}")
}

/// Link target of a user-defined type.
pub fn type_path(origin: &TypeOrigin) -> String {
	let module_name = origin.module_name.as_deref();
	let category = origin
		.category
		.clone()
		.unwrap_or(Category::Unknown);
	construct_path(
		origin.org_name.as_deref().unwrap_or_default(),
		&package_name(module_name),
		origin.version_or_empty(),
		module_name.unwrap_or_default(),
		&category,
		origin.name_or_empty(),
	)
}

/// Page of a language built-in type. Nil (`()`, with or without inner
/// whitespace) gets the canonical `()` page.
pub fn builtin_path(version: &str, name: &str) -> String {
	let compact: String = name.chars().filter(|c| !c.is_whitespace()).collect();
	if compact == "()" {
		format!("/builtin/{version}/()")
	} else {
		format!("/builtin/{version}/{name}")
	}
}
