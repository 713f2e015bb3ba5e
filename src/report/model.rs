use std::fmt;

/// Aggregate counters shared by workspaces, projects and modules.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Totals {
	/// Number of tests executed.
	pub total_tests: u64,
	/// Passing tests.
	pub passed: u64,
	/// Failing tests.
	pub failed: u64,
	/// Skipped tests.
	pub skipped: u64,
	/// Lines executed by the tests.
	pub covered_lines: u64,
	/// Lines never executed.
	pub missed_lines: u64,
	/// Covered share of lines, 0 to 100.
	pub coverage_percentage: f64,
}

/// Report of a whole workspace.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceData {
	/// Workspace name.
	pub workspace_name: String,
	/// Totals over every package.
	#[serde(flatten)]
	pub totals: Totals,
	/// Per-package reports.
	pub packages: Vec<TestData>,
}

/// Report of a single project.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestData {
	/// Project name.
	pub project_name: String,
	/// Totals over every module.
	#[serde(flatten)]
	pub totals: Totals,
	/// Test outcomes per module.
	#[serde(default)]
	pub module_status: Vec<ModuleStatus>,
	/// Coverage per module; empty when coverage was not collected.
	#[serde(default)]
	pub module_coverage: Vec<ModuleCoverage>,
}

/// Either report shape, as emitted by the test runner.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum ReportData {
	/// Multi-project workspace.
	Workspace(WorkspaceData),
	/// Single project.
	Project(TestData),
}

impl ReportData {
	/// Workspace view of the report; a single project becomes a one-package
	/// workspace named after the project with the same totals.
	pub fn normalize(self) -> WorkspaceData {
		match self {
			Self::Workspace(workspace) => workspace,
			Self::Project(project) => WorkspaceData {
				workspace_name: project.project_name.clone(),
				totals: project.totals,
				packages: vec![project],
			},
		}
	}
}

impl WorkspaceData {
	/// Whether any project carries coverage data.
	pub fn has_coverage(&self) -> bool {
		self.packages.iter().any(TestData::has_coverage)
	}

	/// Find a project by name.
	pub fn project(&self, name: &str) -> Option<&TestData> {
		self.packages.iter().find(|project| project.project_name == name)
	}
}

impl TestData {
	/// Whether coverage was collected for this project.
	pub fn has_coverage(&self) -> bool {
		!self.module_coverage.is_empty()
	}

	/// Coverage entry of a module, matched by name.
	pub fn coverage_for(&self, module_name: &str) -> Option<&ModuleCoverage> {
		self.module_coverage.iter().find(|coverage| coverage.name == module_name)
	}

	/// Test outcomes of a module.
	pub fn status_for(&self, module_name: &str) -> Option<&ModuleStatus> {
		self.module_status.iter().find(|status| status.name == module_name)
	}
}

/// Test outcomes of one module.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModuleStatus {
	/// Module name.
	pub name: String,
	/// Number of tests executed.
	pub total_tests: u64,
	/// Passing tests.
	pub passed: u64,
	/// Failing tests.
	pub failed: u64,
	/// Skipped tests.
	pub skipped: u64,
	/// Individual test results.
	pub tests: Vec<TestCase>,
}

/// Result of a single test function.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TestCase {
	/// Test function name.
	pub name: String,
	/// Outcome.
	pub status: TestStatus,
	/// Assertion or error message of a failed test.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub failure_message: Option<String>,
}

/// Outcome of a test.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TestStatus {
	/// Test passed.
	#[default]
	Passed,
	/// Test failed.
	Failed,
	/// Test was skipped.
	Skipped,
	/// Unrecognized status, kept verbatim.
	Other(String),
}

impl TestStatus {
	/// Upper-case label as written by the test runner.
	pub fn as_str(&self) -> &str {
		match self {
			Self::Passed => "PASSED",
			Self::Failed => "FAILURE",
			Self::Skipped => "SKIPPED",
			Self::Other(status) => status,
		}
	}
}

impl From<String> for TestStatus {
	fn from(status: String) -> Self {
		match status.to_ascii_uppercase().as_str() {
			"PASSED" | "PASS" => Self::Passed,
			"FAILURE" | "FAILED" | "FAIL" => Self::Failed,
			"SKIPPED" | "SKIP" => Self::Skipped,
			_ => Self::Other(status),
		}
	}
}

impl From<TestStatus> for String {
	fn from(status: TestStatus) -> Self {
		status.as_str().to_string()
	}
}

impl fmt::Display for TestStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Coverage of one module.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModuleCoverage {
	/// Module name.
	pub name: String,
	/// Lines executed.
	pub covered_lines: u64,
	/// Lines never executed.
	pub missed_lines: u64,
	/// Covered share of lines, 0 to 100.
	pub coverage_percentage: f64,
	/// Per-file coverage.
	pub source_files: Vec<SourceFile>,
}

/// Coverage of one source file.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SourceFile {
	/// File name relative to the module.
	pub name: String,
	/// 1-based numbers of executed lines.
	pub covered_lines: Vec<u32>,
	/// 1-based numbers of lines never executed.
	pub missed_lines: Vec<u32>,
	/// Covered share of lines, 0 to 100.
	pub coverage_percentage: f64,
	/// Full source text.
	pub source_code: String,
}
