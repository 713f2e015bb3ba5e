use std::path::PathBuf;

use crate::model::DescriptorError;

/// Aggregate errors produced by the docview API.
#[derive(Debug, thiserror::Error)]
pub enum DocviewError {
	/// Failed to read an input document.
	#[error("failed to read {}: {source}", .path.display())]
	Io {
		/// Offending file.
		path: PathBuf,
		/// Underlying error.
		#[source]
		source: std::io::Error,
	},
	/// An input document is not valid JSON of the expected shape.
	#[error("failed to parse {}: {source}", .path.display())]
	Json {
		/// Offending file.
		path: PathBuf,
		/// Underlying error.
		#[source]
		source: serde_json::Error,
	},
	/// Failed to encode output as JSON.
	#[error("failed to encode output: {0}")]
	Encode(#[from] serde_json::Error),
	/// A type descriptor is malformed and strict resolution is enabled.
	#[error(transparent)]
	Resolve(#[from] DescriptorError),
	/// No module with this identifier exists in the loaded documents.
	#[error("unknown module `{0}`")]
	UnknownModule(String),
	/// The module declares no construct with this name.
	#[error("module `{module}` has no construct named `{name}`")]
	UnknownConstruct {
		/// Module that was searched.
		module: String,
		/// Requested construct.
		name: String,
	},
	/// The report has no project with this name.
	#[error("report has no project named `{0}`")]
	UnknownProject(String),
}

/// Result type returned by the docview library.
pub type Result<T> = std::result::Result<T, DocviewError>;
