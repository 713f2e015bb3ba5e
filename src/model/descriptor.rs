//! Type descriptors: the wire shape emitted by the doc generator and the
//! classified sum type the label renderer works on.
//!
//! The generator describes a type as one record with a handful of boolean
//! flags that are not mutually exclusive (a stream can also be nullable, an
//! array can also be a rest parameter). [`TypeDescriptor::classify`] walks the
//! flags once, in a fixed precedence order, and produces exactly one
//! [`TypeKind`] per node. Flags that only add a suffix (`isArrayType`,
//! `isRestParam`, `isNullable`) are kept separately as [`Modifiers`].

use std::fmt;

use bitflags::bitflags;

use super::category::Category;

/// Module whose types are rendered as language built-ins.
pub const ANNOTATIONS_MODULE: &str = "lang.annotations";

/// Type descriptor exactly as it appears in the generated JSON.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawTypeDescriptor {
	/// Type name; absent for structural kinds such as unions.
	pub name: Option<String>,
	/// Documentation attached to the type, unused by the renderer.
	pub description: Option<String>,
	/// Fully qualified module declaring the type, e.g. `http` or `lang.int`.
	pub module_name: Option<String>,
	/// Organization owning the declaring module.
	pub org_name: Option<String>,
	/// Version of the declaring package.
	pub version: Option<String>,
	/// Construct category of the type.
	pub category: Option<Category>,
	/// Members of unions, intersections, tuples, streams and inline records.
	pub member_types: Option<Vec<RawTypeDescriptor>>,
	/// Parameter types of a function type.
	pub param_types: Option<Vec<RawTypeDescriptor>>,
	/// Return type of a function type.
	pub return_type: Option<Box<RawTypeDescriptor>>,
	/// Wrapped type of arrays, parenthesised types, inclusions and rest parameters.
	pub element_type: Option<Box<RawTypeDescriptor>>,
	/// Value type of a constrained map.
	pub constraint: Option<Box<RawTypeDescriptor>>,
	/// `A|B` written inline.
	pub is_anonymous_union_type: bool,
	/// `A&B`.
	pub is_intersection_type: bool,
	/// `[A, B]`.
	pub is_tuple: bool,
	/// `function(A) returns B`.
	pub is_lambda: bool,
	/// `A[]`, see `array_dimensions`.
	pub is_array_type: bool,
	/// Number of `[]` pairs of an array type.
	pub array_dimensions: u32,
	/// `(A)`.
	pub is_parenthesised_type: bool,
	/// `*A` type inclusion.
	pub is_inclusion: bool,
	/// `typedesc<A>`.
	pub is_type_desc: bool,
	/// `future<A>`.
	pub is_future: bool,
	/// `record {| ... |}` written inline.
	pub is_inline_closed_record: bool,
	/// `record { ... }` written inline.
	pub is_inline_record: bool,
	/// `A...` rest parameter.
	pub is_rest_param: bool,
	/// `A?`.
	pub is_nullable: bool,
	/// Whether the generator could resolve the declaring construct.
	pub generate_user_defined_type_link: bool,
}

impl RawTypeDescriptor {
	/// Shorthand for a named type of the given category.
	pub fn named(name: impl Into<String>, category: Category) -> Self {
		Self {
			name: Some(name.into()),
			category: Some(category),
			..Self::default()
		}
	}

	/// Name of the type or an empty string.
	pub fn name_or_empty(&self) -> &str {
		self.name.as_deref().unwrap_or_default()
	}

	/// Suffix modifiers declared on this node.
	pub fn modifiers(&self) -> Modifiers {
		let mut modifiers = Modifiers::empty();
		modifiers.set(Modifiers::ARRAY, self.is_array_type);
		modifiers.set(Modifiers::REST, self.is_rest_param);
		modifiers.set(Modifiers::NULLABLE, self.is_nullable);
		modifiers
	}
}

bitflags! {
	/// Suffixes appended after a type's base label, independent of its kind.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
	pub struct Modifiers: u8 {
		/// `[ ]` per array dimension.
		const ARRAY = 1 << 0;
		/// `...`.
		const REST = 1 << 1;
		/// `?`.
		const NULLABLE = 1 << 2;
	}
}

/// How a malformed descriptor is handled during classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolveMode {
	/// Fail on the first malformed node.
	Strict,
	/// Render a malformed node as its bare name and keep going.
	#[default]
	Lenient,
}

/// Child field a kind requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
	/// `memberTypes`, non-empty.
	MemberTypes,
	/// `elementType`.
	ElementType,
	/// `name`.
	Name,
}

impl fmt::Display for RequiredField {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::MemberTypes => "memberTypes",
			Self::ElementType => "elementType",
			Self::Name => "name",
		})
	}
}

/// A descriptor lacks a field its matched kind needs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed {kind} type descriptor{}: missing {missing}", .name.as_deref().map(|n| format!(" `{n}`")).unwrap_or_default())]
pub struct DescriptorError {
	/// Kind selected by the precedence rules.
	pub kind: &'static str,
	/// Field that was absent or empty.
	pub missing: RequiredField,
	/// Name of the offending node when it has one.
	pub name: Option<String>,
}

/// Where a named type is declared; used to build cross-reference links.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeOrigin {
	/// Type name.
	pub name: Option<String>,
	/// Declaring module.
	pub module_name: Option<String>,
	/// Owning organization.
	pub org_name: Option<String>,
	/// Package version.
	pub version: Option<String>,
	/// Construct category.
	pub category: Option<Category>,
}

impl TypeOrigin {
	fn of(raw: &RawTypeDescriptor) -> Self {
		Self {
			name: raw.name.clone(),
			module_name: raw.module_name.clone(),
			org_name: raw.org_name.clone(),
			version: raw.version.clone(),
			category: raw.category.clone(),
		}
	}

	/// Name of the type or an empty string.
	pub fn name_or_empty(&self) -> &str {
		self.name.as_deref().unwrap_or_default()
	}

	/// Version of the declaring package or an empty string.
	pub fn version_or_empty(&self) -> &str {
		self.version.as_deref().unwrap_or_default()
	}
}

/// Structural interpretation of a descriptor node.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeKind {
	/// `A | B`.
	Union(Vec<TypeDescriptor>),
	/// `A & B`.
	Intersection(Vec<TypeDescriptor>),
	/// `[A, B]`.
	Tuple(Vec<TypeDescriptor>),
	/// `function(A) returns (B)`; `returns` is `None` for functions returning nil.
	Lambda {
		/// Parameter types in order.
		params: Vec<TypeDescriptor>,
		/// Declared return type.
		returns: Option<Box<TypeDescriptor>>,
	},
	/// Array of the element type; dimensions live on the modifiers.
	Array(Box<TypeDescriptor>),
	/// `(A)`.
	Parenthesised(Box<TypeDescriptor>),
	/// `*A`.
	Inclusion(Box<TypeDescriptor>),
	/// `typedesc<A>`.
	TypeDesc(Box<TypeDescriptor>),
	/// `future<A>`.
	Future(Box<TypeDescriptor>),
	/// `record {| ... |}`.
	InlineClosedRecord(Vec<TypeDescriptor>),
	/// `record { ... }`.
	InlineRecord(Vec<TypeDescriptor>),
	/// Rest parameter of the element type.
	Rest(Box<TypeDescriptor>),
	/// `map<A>`.
	Map(Box<TypeDescriptor>),
	/// `stream<A, B>`.
	Stream(Vec<TypeDescriptor>),
	/// Language built-in, linked to its builtin page.
	Builtin,
	/// Named type rendered without a link.
	Unlinked,
	/// Named type declared in a documented module.
	UserDefined,
}

impl TypeKind {
	/// Short name of the kind used in diagnostics.
	pub fn describe(&self) -> &'static str {
		match self {
			Self::Union(_) => "union",
			Self::Intersection(_) => "intersection",
			Self::Tuple(_) => "tuple",
			Self::Lambda { .. } => "function",
			Self::Array(_) => "array",
			Self::Parenthesised(_) => "parenthesised",
			Self::Inclusion(_) => "inclusion",
			Self::TypeDesc(_) => "typedesc",
			Self::Future(_) => "future",
			Self::InlineClosedRecord(_) => "inline closed record",
			Self::InlineRecord(_) => "inline record",
			Self::Rest(_) => "rest parameter",
			Self::Map(_) => "map",
			Self::Stream(_) => "stream",
			Self::Builtin => "builtin",
			Self::Unlinked => "unlinked",
			Self::UserDefined => "user-defined",
		}
	}
}

/// Classified, immutable type descriptor tree.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDescriptor {
	/// The single interpretation selected for this node.
	pub kind: TypeKind,
	/// Suffixes appended after the base label.
	pub modifiers: Modifiers,
	/// Number of `[ ]` suffixes when [`Modifiers::ARRAY`] is set; zero renders none.
	pub array_dimensions: u32,
	/// Declaration site of the type.
	pub origin: TypeOrigin,
}

impl TypeDescriptor {
	/// Classify a wire descriptor, applying the kind precedence order.
	///
	/// In [`ResolveMode::Strict`] the first malformed node aborts classification.
	/// In [`ResolveMode::Lenient`] a malformed node is replaced by an unlinked
	/// rendering of its name and this never fails.
	pub fn classify(raw: &RawTypeDescriptor, mode: ResolveMode) -> Result<Self, DescriptorError> {
		let kind = match classify_kind(raw, mode) {
			Ok(kind) => kind,
			Err(err) if mode == ResolveMode::Lenient => {
				tracing::warn!(error = %err, "rendering malformed type descriptor by name");
				TypeKind::Unlinked
			}
			Err(err) => return Err(err),
		};
		Ok(Self {
			kind,
			modifiers: raw.modifiers(),
			array_dimensions: raw.array_dimensions,
			origin: TypeOrigin::of(raw),
		})
	}

	/// Classify without ever failing.
	pub fn classify_lenient(raw: &RawTypeDescriptor) -> Self {
		match Self::classify(raw, ResolveMode::Lenient) {
			Ok(descriptor) => descriptor,
			// Lenient classification substitutes malformed nodes instead of failing.
			Err(_) => Self {
				kind: TypeKind::Unlinked,
				modifiers: raw.modifiers(),
				array_dimensions: raw.array_dimensions,
				origin: TypeOrigin::of(raw),
			},
		}
	}
}

fn classify_kind(raw: &RawTypeDescriptor, mode: ResolveMode) -> Result<TypeKind, DescriptorError> {
	let malformed = |kind: &'static str, missing: RequiredField| DescriptorError {
		kind,
		missing,
		name: raw.name.clone(),
	};
	let members = |kind: &'static str| -> Result<Vec<TypeDescriptor>, DescriptorError> {
		match raw.member_types.as_deref() {
			Some(members) if !members.is_empty() => classify_all(members, mode),
			_ => Err(malformed(kind, RequiredField::MemberTypes)),
		}
	};
	let element = |kind: &'static str| -> Result<Box<TypeDescriptor>, DescriptorError> {
		match raw.element_type.as_deref() {
			Some(element) => Ok(Box::new(TypeDescriptor::classify(element, mode)?)),
			None => Err(malformed(kind, RequiredField::ElementType)),
		}
	};
	let named = |kind: &'static str| -> Result<(), DescriptorError> {
		match raw.name.as_deref() {
			Some(name) if !name.is_empty() => Ok(()),
			_ => Err(malformed(kind, RequiredField::Name)),
		}
	};
	let category = raw.category.as_ref();

	if raw.is_anonymous_union_type {
		return members("union").map(TypeKind::Union);
	}
	if raw.is_intersection_type {
		return members("intersection").map(TypeKind::Intersection);
	}
	if raw.is_tuple {
		return members("tuple").map(TypeKind::Tuple);
	}
	if raw.is_lambda {
		let params = classify_all(raw.param_types.as_deref().unwrap_or_default(), mode)?;
		let returns = match raw.return_type.as_deref() {
			Some(ret) => Some(Box::new(TypeDescriptor::classify(ret, mode)?)),
			None => None,
		};
		return Ok(TypeKind::Lambda { params, returns });
	}
	if raw.is_array_type {
		return element("array").map(TypeKind::Array);
	}
	if raw.is_parenthesised_type {
		return element("parenthesised").map(TypeKind::Parenthesised);
	}
	if raw.is_inclusion {
		return element("inclusion").map(TypeKind::Inclusion);
	}
	if raw.is_type_desc {
		return element("typedesc").map(TypeKind::TypeDesc);
	}
	if raw.is_future {
		return element("future").map(TypeKind::Future);
	}
	if raw.is_inline_closed_record {
		let fields = classify_all(raw.member_types.as_deref().unwrap_or_default(), mode)?;
		return Ok(TypeKind::InlineClosedRecord(fields));
	}
	if raw.is_inline_record {
		let fields = classify_all(raw.member_types.as_deref().unwrap_or_default(), mode)?;
		return Ok(TypeKind::InlineRecord(fields));
	}
	if raw.is_rest_param {
		return element("rest parameter").map(TypeKind::Rest);
	}
	if category == Some(&Category::Map)
		&& let Some(constraint) = raw.constraint.as_deref()
	{
		named("map")?;
		return Ok(TypeKind::Map(Box::new(TypeDescriptor::classify(constraint, mode)?)));
	}
	if category == Some(&Category::Stream) {
		named("stream")?;
		return members("stream").map(TypeKind::Stream);
	}
	if category == Some(&Category::Builtin) || raw.module_name.as_deref() == Some(ANNOTATIONS_MODULE) {
		named("builtin")?;
		return Ok(TypeKind::Builtin);
	}
	if !raw.generate_user_defined_type_link || matches!(category, None | Some(Category::Unknown)) {
		return Ok(TypeKind::Unlinked);
	}
	named("user-defined")?;
	Ok(TypeKind::UserDefined)
}

fn classify_all(raws: &[RawTypeDescriptor], mode: ResolveMode) -> Result<Vec<TypeDescriptor>, DescriptorError> {
	raws.iter().map(|raw| TypeDescriptor::classify(raw, mode)).collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn builtin(name: &str) -> RawTypeDescriptor {
		RawTypeDescriptor::named(name, Category::Builtin)
	}

	#[test]
	fn union_wins_over_every_other_flag() {
		let raw = RawTypeDescriptor {
			is_anonymous_union_type: true,
			is_tuple: true,
			is_array_type: true,
			member_types: Some(vec![builtin("int"), builtin("string")]),
			element_type: Some(Box::new(builtin("int"))),
			..RawTypeDescriptor::default()
		};
		let descriptor = TypeDescriptor::classify(&raw, ResolveMode::Strict).unwrap();
		assert!(matches!(descriptor.kind, TypeKind::Union(ref members) if members.len() == 2));
		assert!(descriptor.modifiers.contains(Modifiers::ARRAY));
	}

	#[test]
	fn stream_that_is_nullable_keeps_stream_kind() {
		let raw = RawTypeDescriptor {
			is_nullable: true,
			member_types: Some(vec![builtin("int")]),
			..RawTypeDescriptor::named("stream", Category::Stream)
		};
		let descriptor = TypeDescriptor::classify(&raw, ResolveMode::Strict).unwrap();
		assert!(matches!(descriptor.kind, TypeKind::Stream(_)));
		assert_eq!(descriptor.modifiers, Modifiers::NULLABLE);
	}

	#[test]
	fn map_without_constraint_falls_through_to_plain_name() {
		let raw = RawTypeDescriptor::named("map", Category::Map);
		let descriptor = TypeDescriptor::classify(&raw, ResolveMode::Strict).unwrap();
		assert_eq!(descriptor.kind, TypeKind::Unlinked);
	}

	#[test]
	fn annotations_module_is_treated_as_builtin() {
		let raw = RawTypeDescriptor {
			module_name: Some(ANNOTATIONS_MODULE.into()),
			generate_user_defined_type_link: true,
			..RawTypeDescriptor::named("deprecated", Category::Annotations)
		};
		let descriptor = TypeDescriptor::classify(&raw, ResolveMode::Strict).unwrap();
		assert_eq!(descriptor.kind, TypeKind::Builtin);
	}

	#[test]
	fn missing_category_is_unlinked_even_with_link_flag() {
		let raw = RawTypeDescriptor {
			name: Some("Foo".into()),
			generate_user_defined_type_link: true,
			..RawTypeDescriptor::default()
		};
		let descriptor = TypeDescriptor::classify(&raw, ResolveMode::Strict).unwrap();
		assert_eq!(descriptor.kind, TypeKind::Unlinked);
	}

	#[test]
	fn strict_mode_reports_missing_members() {
		let raw = RawTypeDescriptor {
			name: Some("Broken".into()),
			is_tuple: true,
			..RawTypeDescriptor::default()
		};
		let err = TypeDescriptor::classify(&raw, ResolveMode::Strict).unwrap_err();
		assert_eq!(err.kind, "tuple");
		assert_eq!(err.missing, RequiredField::MemberTypes);
		assert_eq!(err.to_string(), "malformed tuple type descriptor `Broken`: missing memberTypes");
	}

	#[test]
	fn strict_mode_fails_on_nested_malformed_node() {
		let raw = RawTypeDescriptor {
			is_anonymous_union_type: true,
			member_types: Some(vec![
				builtin("int"),
				RawTypeDescriptor {
					is_array_type: true,
					..RawTypeDescriptor::default()
				},
			]),
			..RawTypeDescriptor::default()
		};
		let err = TypeDescriptor::classify(&raw, ResolveMode::Strict).unwrap_err();
		assert_eq!(err.kind, "array");
		assert_eq!(err.missing, RequiredField::ElementType);
	}

	#[test]
	fn lenient_mode_degrades_only_the_broken_node() {
		let raw = RawTypeDescriptor {
			is_anonymous_union_type: true,
			member_types: Some(vec![
				builtin("int"),
				RawTypeDescriptor {
					name: Some("Oops".into()),
					is_parenthesised_type: true,
					..RawTypeDescriptor::default()
				},
			]),
			..RawTypeDescriptor::default()
		};
		let descriptor = TypeDescriptor::classify_lenient(&raw);
		let TypeKind::Union(members) = descriptor.kind else {
			panic!("expected union");
		};
		assert_eq!(members[0].kind, TypeKind::Builtin);
		assert_eq!(members[1].kind, TypeKind::Unlinked);
		assert_eq!(members[1].origin.name.as_deref(), Some("Oops"));
	}

	#[test]
	fn deserializes_camel_case_flags() {
		let raw: RawTypeDescriptor = serde_json::from_str(
			r#"{
				"name": "Client",
				"category": "clients",
				"moduleName": "http",
				"orgName": "ballerina",
				"version": "2.0.0",
				"isNullable": true,
				"generateUserDefinedTypeLink": true
			}"#,
		)
		.unwrap();
		assert_eq!(raw.category, Some(Category::Clients));
		assert!(raw.is_nullable);
		assert!(raw.generate_user_defined_type_link);
		let descriptor = TypeDescriptor::classify_lenient(&raw);
		assert_eq!(descriptor.kind, TypeKind::UserDefined);
	}
}
