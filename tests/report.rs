//! Test report integration tests.

mod utils;

use docview::{Docview, DocviewError, ReportData};
use pretty_assertions::assert_eq;
use utils::*;

fn report() -> ReportData {
	let (_dir, path) = write_fixture("test_results.json", REPORT_JSON);
	Docview::new().load_report(&path).unwrap()
}

#[test]
fn single_project_report_renders_as_workspace() {
	let rendered = Docview::new().render_report(report(), None, None).unwrap();
	assert!(rendered.starts_with("Test Report: orders\n"));
	assert!(rendered.contains("Passed: 2/3\n"));
	assert!(rendered.contains("Failed: 1/3\n"));
	assert!(rendered.contains("Code Coverage: 80%\n"));
	assert!(rendered.contains("  orders  total 3  passed 2  failed 1  skipped 0  coverage 80%\n"));
}

#[test]
fn project_view_lists_modules() {
	let rendered = Docview::new().render_report(report(), Some("orders"), None).unwrap();
	assert!(rendered.starts_with("Project: orders\n"));
	assert!(rendered.contains("Modules\n  orders  "));
}

#[test]
fn module_view_shows_failures_and_files() {
	let rendered = Docview::new()
		.render_report(report(), Some("orders"), Some("orders"))
		.unwrap();
	assert!(rendered.contains("  [PASSED] testCreate\n"));
	assert!(rendered.contains("  [FAILURE] testCancel  expected 200, got 500\n"));
	assert!(rendered.contains("  main.bal  covered 4  missed 1  coverage 80%\n"));
}

#[test]
fn unknown_project_and_module_are_errors() {
	let err = Docview::new().render_report(report(), Some("billing"), None).unwrap_err();
	assert!(matches!(err, DocviewError::UnknownProject(ref name) if name == "billing"));

	let err = Docview::new()
		.render_report(report(), Some("orders"), Some("billing"))
		.unwrap_err();
	assert!(matches!(err, DocviewError::UnknownModule(_)));
}

#[test]
fn malformed_report_names_the_file() {
	let (_dir, path) = write_fixture("broken.json", "{ \"projectName\": ");
	let err = Docview::new().load_report(&path).unwrap_err();
	assert!(matches!(err, DocviewError::Json { .. }));
	assert_eq!(
		err.to_string().split(':').next(),
		Some(format!("failed to parse {}", path.display()).as_str())
	);
}
