use super::model::{ModuleCoverage, TestData, TestStatus, Totals, WorkspaceData};
use crate::core_api::error::{DocviewError, Result};
use crate::render::{Fragment, Page, Style, TypeLabel};

fn push_totals(page: &mut Page, totals: &Totals, coverage: bool) {
	page.line(format!("Passed: {}/{}", totals.passed, totals.total_tests));
	page.line(format!("Failed: {}/{}", totals.failed, totals.total_tests));
	page.line(format!("Skipped: {}/{}", totals.skipped, totals.total_tests));
	if coverage {
		page.line(format!("Code Coverage: {}%", totals.coverage_percentage));
	}
}

fn counts(total: u64, passed: u64, failed: u64, skipped: u64) -> String {
	format!("total {total}  passed {passed}  failed {failed}  skipped {skipped}")
}

/// Workspace summary: totals and one row per project.
pub fn render_workspace(workspace: &WorkspaceData) -> Page {
	let coverage = workspace.has_coverage();
	let mut page = Page::new();
	page.heading(1, format!("Test Report: {}", workspace.workspace_name));
	push_totals(&mut page, &workspace.totals, coverage);
	page.heading(2, "Projects");
	for project in &workspace.packages {
		let totals = &project.totals;
		let mut row = counts(totals.total_tests, totals.passed, totals.failed, totals.skipped);
		if coverage {
			row.push_str(&format!("  coverage {}%", totals.coverage_percentage));
		}
		page.entry(project.project_name.as_str(), row, false);
	}
	page
}

/// Project summary: totals and one row per module, with coverage columns
/// when the project collected coverage.
pub fn render_project(project: &TestData) -> Page {
	let coverage = project.has_coverage();
	let mut page = Page::new();
	page.heading(1, format!("Project: {}", project.project_name));
	push_totals(&mut page, &project.totals, coverage);
	page.heading(2, "Modules");
	for module in &project.module_status {
		let mut row = counts(module.total_tests, module.passed, module.failed, module.skipped);
		if coverage {
			row.push_str(&coverage_columns(project.coverage_for(&module.name)));
		}
		page.entry(module.name.as_str(), row, false);
	}
	page
}

fn coverage_columns(coverage: Option<&ModuleCoverage>) -> String {
	match coverage {
		Some(coverage) => format!(
			"  covered {}  missed {}  coverage {}%",
			coverage.covered_lines, coverage.missed_lines, coverage.coverage_percentage
		),
		None => "  covered -  missed -  coverage -".to_string(),
	}
}

/// Module detail: one line per test and one per covered source file.
pub fn render_module(project: &TestData, module_name: &str) -> Result<Page> {
	let status = project.status_for(module_name);
	let coverage = project.coverage_for(module_name);
	if status.is_none() && coverage.is_none() {
		return Err(DocviewError::UnknownModule(module_name.to_string()));
	}

	let mut page = Page::new();
	page.heading(1, format!("Module: {module_name}"));
	if let Some(status) = status {
		page.line(counts(status.total_tests, status.passed, status.failed, status.skipped));
		page.heading(2, "Tests");
		for test in &status.tests {
			let style = match test.status {
				TestStatus::Failed => Style::Failure,
				_ => Style::Plain,
			};
			let mut label = TypeLabel::from(Fragment::styled(format!("[{}]", test.status), style));
			label.push_text(format!(" {}", test.name));
			page.entry(label, test.failure_message.clone().unwrap_or_default(), false);
		}
	}
	if let Some(coverage) = coverage {
		page.heading(2, "Coverage");
		for file in &coverage.source_files {
			page.entry(
				file.name.as_str(),
				format!(
					"covered {}  missed {}  coverage {}%",
					file.covered_lines.len(),
					file.missed_lines.len(),
					file.coverage_percentage
				),
				false,
			);
		}
	}
	Ok(page)
}
