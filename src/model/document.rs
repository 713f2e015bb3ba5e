//! Documentation tree: packages, modules and the constructs they declare.

use super::category::Category;
use super::descriptor::RawTypeDescriptor;
use super::ConstructLookup;

/// Root of a generated documentation document.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocumentTree {
	/// Documented packages.
	pub packages: Vec<Package>,
}

/// A documented package.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Package {
	/// Owning organization.
	pub org_name: String,
	/// Package name.
	pub name: String,
	/// Package version.
	pub version: String,
	/// Package-level documentation.
	pub description: Option<String>,
	/// Modules of the package; the default module shares the package name.
	pub modules: Vec<Module>,
}

/// A documented module and its constructs, one list per category.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Module {
	/// Module identifier, e.g. `http` or `http.client`.
	pub id: String,
	/// Owning organization.
	pub org_name: String,
	/// Version of the owning package.
	pub version: String,
	/// Module documentation.
	pub description: Option<String>,
	/// Whether the module is deprecated.
	pub is_deprecated: bool,
	/// Record types.
	pub records: Vec<Construct>,
	/// Classes.
	pub classes: Vec<Construct>,
	/// Object types.
	#[serde(alias = "abstractObjects")]
	pub object_types: Vec<Construct>,
	/// Clients.
	pub clients: Vec<Construct>,
	/// Listeners.
	pub listeners: Vec<Construct>,
	/// Functions.
	pub functions: Vec<Construct>,
	/// Constants.
	pub constants: Vec<Construct>,
	/// Type definitions.
	pub types: Vec<Construct>,
	/// Error types.
	pub errors: Vec<Construct>,
	/// Annotations.
	pub annotations: Vec<Construct>,
	/// Enumerations.
	pub enums: Vec<Construct>,
}

impl Module {
	/// Constructs of a category; categories a module cannot hold are empty.
	pub fn constructs(&self, category: &Category) -> &[Construct] {
		match category {
			Category::Records => &self.records,
			Category::Classes => &self.classes,
			Category::ObjectTypes => &self.object_types,
			Category::Clients => &self.clients,
			Category::Listeners => &self.listeners,
			Category::Functions => &self.functions,
			Category::Constants => &self.constants,
			Category::Types => &self.types,
			Category::Errors => &self.errors,
			Category::Annotations => &self.annotations,
			Category::Enums => &self.enums,
			_ => &[],
		}
	}

	/// Find a construct by category and name.
	pub fn construct(&self, category: &Category, name: &str) -> Option<&Construct> {
		self.constructs(category).iter().find(|construct| construct.name == name)
	}
}

/// A documented construct of any category.
///
/// Only the fields meaningful for the construct's category are populated;
/// everything else deserializes to its empty default.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Construct {
	/// Construct name.
	pub name: String,
	/// Markdown/HTML documentation.
	pub description: Option<String>,
	/// Whether the construct is deprecated.
	pub is_deprecated: bool,
	/// Whether a function is isolated.
	pub is_isolated: bool,
	/// Whether a method is a remote method.
	pub is_remote: bool,
	/// Whether a method is a resource method.
	pub is_resource: bool,
	/// HTTP-style accessor of a resource method.
	pub accessor: Option<String>,
	/// Path of a resource method.
	pub resource_path: Option<String>,
	/// Fields of records, classes, clients, listeners and object types.
	pub fields: Vec<Field>,
	/// Members of an enumeration.
	pub members: Vec<Field>,
	/// Remote methods of clients.
	pub remote_methods: Vec<Construct>,
	/// Lifecycle methods of listeners.
	pub life_cycle_methods: Vec<Construct>,
	/// Remaining methods of classes, clients, listeners and object types.
	#[serde(alias = "methods")]
	pub other_methods: Vec<Construct>,
	/// Function parameters.
	pub parameters: Vec<Parameter>,
	/// Function return parameters; only the first is rendered.
	pub return_parameters: Vec<Parameter>,
	/// Type of type definitions and constants.
	#[serde(rename = "type")]
	pub type_descriptor: Option<RawTypeDescriptor>,
	/// Value of constants and module variables, empty when none.
	pub default_value: Option<String>,
	/// Attachment points of an annotation, e.g. `function, parameter`.
	pub attachment_points: Option<String>,
	/// Type a method was included from.
	pub inclusion_type: Option<RawTypeDescriptor>,
}

/// A function parameter or return parameter.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Parameter {
	/// Parameter name.
	pub name: String,
	/// Parameter documentation.
	pub description: Option<String>,
	/// Declared type.
	#[serde(rename = "type")]
	pub type_descriptor: RawTypeDescriptor,
	/// Default value expression, empty when none.
	pub default_value: Option<String>,
	/// Whether the parameter is deprecated.
	pub is_deprecated: bool,
}

/// A field of a record, class, client, listener or object type.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Field {
	/// Field name.
	pub name: String,
	/// Field documentation.
	pub description: Option<String>,
	/// Declared type.
	#[serde(rename = "type")]
	pub type_descriptor: RawTypeDescriptor,
	/// Default value expression, empty when none.
	pub default_value: Option<String>,
	/// Whether the field is deprecated.
	pub is_deprecated: bool,
	/// Whether the field is `readonly`.
	pub is_read_only: bool,
	/// Set when the field stands for fields included from another type.
	pub inclusion_type: Option<RawTypeDescriptor>,
}

impl Construct {
	/// Every method in page order: remote, lifecycle, then the rest.
	pub fn methods(&self) -> impl Iterator<Item = &Construct> {
		self.remote_methods
			.iter()
			.chain(&self.life_cycle_methods)
			.chain(&self.other_methods)
	}

	/// Find a method by name.
	pub fn method(&self, name: &str) -> Option<&Construct> {
		self.methods().find(|method| method.name == name)
	}
}

impl DocumentTree {
	/// Find a module by identifier across all packages.
	pub fn find_module(&self, module_id: &str) -> Option<(&Package, &Module)> {
		self.packages.iter().find_map(|package| {
			package
				.modules
				.iter()
				.find(|module| module.id == module_id)
				.map(|module| (package, module))
		})
	}

	/// Iterate every module together with its package.
	pub fn modules(&self) -> impl Iterator<Item = (&Package, &Module)> {
		self.packages
			.iter()
			.flat_map(|package| package.modules.iter().map(move |module| (package, module)))
	}
}

impl ConstructLookup for DocumentTree {
	fn contains_construct(&self, org_name: Option<&str>, module_name: &str, category: &Category, name: &str) -> bool {
		self.modules().any(|(_, module)| {
			module.id == module_name
				&& org_name.is_none_or(|org| org == module.org_name)
				&& module.construct(category, name).is_some()
		})
	}
}
