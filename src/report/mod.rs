//! Test and coverage report views.

/// Report document model.
pub mod model;
/// Summary, project and module pages.
pub mod render;

pub use self::model::{
	ModuleCoverage, ModuleStatus, ReportData, SourceFile, TestCase, TestData, TestStatus, Totals,
	WorkspaceData,
};
pub use self::render::{render_module, render_project, render_workspace};
