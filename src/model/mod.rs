//! Data model of the pre-generated JSON documents.

/// Construct categories.
pub mod category;
/// Type descriptors and their classification.
pub mod descriptor;
/// Packages, modules and constructs.
pub mod document;

pub use category::Category;
pub use descriptor::{
	DescriptorError, Modifiers, RawTypeDescriptor, RequiredField, ResolveMode, TypeDescriptor,
	TypeKind, TypeOrigin,
};
pub use document::{Construct, DocumentTree, Field, Module, Package, Parameter};

/// Answers whether a cross-reference target exists in the loaded documents.
///
/// Injected into the label renderer so references to constructs that were not
/// documented render as plain text instead of dead links.
pub trait ConstructLookup {
	/// Whether `module_name` declares a construct `name` of `category`.
	/// `org_name` is ignored when `None`.
	fn contains_construct(
		&self,
		org_name: Option<&str>,
		module_name: &str,
		category: &Category,
		name: &str,
	) -> bool;
}
