//! Core library for docview, rendering API documentation and test report views
//! from pre-generated JSON documents.
//!
//! The heart of the crate is the type label resolver, which turns recursive
//! type descriptors into linked display fragments, and the incremental search
//! index over the per-category construct lists. The high-level [`Docview`]
//! facade ties loading and rendering together and is used by the CLI.

/// Data model of the documentation documents.
pub mod model;

/// Rendering of type labels and construct pages.
pub mod render;

/// Test and coverage report views.
pub mod report;

/// Core API for docview operations.
pub mod core_api;

/// Diagnostic logging setup.
pub mod logging;

pub use crate::core_api::error::DocviewError;
pub use crate::core_api::{Docview, Result, SearchData, SearchIndex, SearchResults, SearchableEntity};
pub use crate::model::{Category, ConstructLookup, DocumentTree, RawTypeDescriptor, ResolveMode};
pub use crate::render::{
	Fragment, RenderFormat, Style, TypeLabel, TypeLabelResolver, connector_for, resolve_type_label,
};
pub use crate::report::ReportData;
