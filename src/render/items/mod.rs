/// Module summary rendering.
pub mod module;
/// Function and method rendering.
pub mod others;
/// Field listings and construct pages.
pub mod structs;

pub use module::render_module;
pub use others::{function_title, render_function_item, render_function_signature};
pub use structs::{render_construct, render_field, render_fields};
