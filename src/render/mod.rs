//! Rendering of type labels and documentation pages.

/// Output formats, pages and the painter.
pub mod core;
/// Display fragments.
pub mod fragment;
/// Construct page consumers.
pub mod items;
/// Link path construction.
pub mod links;
/// Per-module rendering context.
pub mod state;
/// Type descriptor to label resolution.
pub mod type_label;
/// Description text helpers.
pub mod utils;

pub use self::core::{Block, Page, RenderFormat, Renderer};
pub use self::fragment::{Fragment, Style, TypeLabel};
pub use self::links::{builtin_path, connector_for, construct_path, module_path, package_name, type_path};
pub use self::state::RenderState;
pub use self::type_label::{NO_VALUE, TypeLabelResolver, resolve_type_label};
pub use self::utils::{first_line, remove_html_tags};
