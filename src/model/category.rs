//! Construct categories shared by search grouping and link construction.

use std::fmt;

/// Kind of documented construct, as named in the generated JSON.
///
/// The type-descriptor-only categories (`builtin`, `map`, `stream`, `UNKNOWN`)
/// live here too because descriptors carry them in the same `category` field.
/// Unrecognized names are kept verbatim so links still round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
	/// Modules of a package.
	Modules,
	/// Module-level functions.
	Functions,
	/// Classes.
	Classes,
	/// Record types.
	Records,
	/// Constants.
	Constants,
	/// Error types.
	Errors,
	/// Type definitions.
	Types,
	/// Client classes.
	Clients,
	/// Listeners.
	Listeners,
	/// Annotations.
	Annotations,
	/// Enumerations.
	Enums,
	/// Object types (formerly abstract objects).
	ObjectTypes,
	/// Language built-in type.
	Builtin,
	/// Built-in map type.
	Map,
	/// Built-in stream type.
	Stream,
	/// Category the generator could not determine.
	Unknown,
	/// Any other category name.
	Other(String),
}

impl Category {
	/// Categories that get their own search result list, in display order.
	pub const SEARCHABLE: [Category; 12] = [
		Category::Modules,
		Category::Classes,
		Category::ObjectTypes,
		Category::Clients,
		Category::Listeners,
		Category::Functions,
		Category::Records,
		Category::Constants,
		Category::Types,
		Category::Errors,
		Category::Annotations,
		Category::Enums,
	];

	/// Parse a category name as found in the JSON documents.
	pub fn from_name(name: &str) -> Self {
		match name {
			"modules" => Self::Modules,
			"functions" => Self::Functions,
			"classes" => Self::Classes,
			"records" => Self::Records,
			"constants" => Self::Constants,
			"errors" => Self::Errors,
			"types" => Self::Types,
			"clients" => Self::Clients,
			"listeners" => Self::Listeners,
			"annotations" => Self::Annotations,
			"enums" => Self::Enums,
			"objectTypes" | "abstractObjects" => Self::ObjectTypes,
			"builtin" => Self::Builtin,
			"map" => Self::Map,
			"stream" => Self::Stream,
			"UNKNOWN" => Self::Unknown,
			other => Self::Other(other.to_string()),
		}
	}

	/// Name used in JSON documents and URL paths.
	pub fn as_str(&self) -> &str {
		match self {
			Self::Modules => "modules",
			Self::Functions => "functions",
			Self::Classes => "classes",
			Self::Records => "records",
			Self::Constants => "constants",
			Self::Errors => "errors",
			Self::Types => "types",
			Self::Clients => "clients",
			Self::Listeners => "listeners",
			Self::Annotations => "annotations",
			Self::Enums => "enums",
			Self::ObjectTypes => "objectTypes",
			Self::Builtin => "builtin",
			Self::Map => "map",
			Self::Stream => "stream",
			Self::Unknown => "UNKNOWN",
			Self::Other(name) => name,
		}
	}

	/// Human-friendly heading used in listings.
	pub fn label(&self) -> &str {
		match self {
			Self::Modules => "Modules",
			Self::Functions => "Functions",
			Self::Classes => "Classes",
			Self::Records => "Records",
			Self::Constants => "Constants",
			Self::Errors => "Errors",
			Self::Types => "Types",
			Self::Clients => "Clients",
			Self::Listeners => "Listeners",
			Self::Annotations => "Annotations",
			Self::Enums => "Enums",
			Self::ObjectTypes => "Object Types",
			Self::Builtin => "Builtin",
			Self::Map => "Map",
			Self::Stream => "Stream",
			Self::Unknown => "Unknown",
			Self::Other(name) => name,
		}
	}

	/// Whether constructs of this category get a page of their own.
	pub fn is_container(&self) -> bool {
		matches!(
			self,
			Self::Records
				| Self::Classes
				| Self::Clients
				| Self::ObjectTypes
				| Self::Listeners
				| Self::Enums
		)
	}
}

impl From<String> for Category {
	fn from(name: String) -> Self {
		Self::from_name(&name)
	}
}

impl From<Category> for String {
	fn from(category: Category) -> Self {
		category.as_str().to_string()
	}
}

impl fmt::Display for Category {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
