//! End-to-end rendering of module, function and construct pages from a
//! documentation tree on disk.

mod utils;

use docview::{Docview, DocviewError, DocumentTree, RenderFormat, ResolveMode};
use pretty_assertions::assert_eq;
use utils::*;

fn docview() -> Docview {
	Docview::new().with_mode(ResolveMode::Lenient)
}

fn tree() -> DocumentTree {
	let (_dir, path) = write_fixture("docs.json", DOCS_JSON);
	docview().load_documents(&path).unwrap()
}

#[test]
fn module_summary_lists_categories_in_display_order() {
	let rendered = docview().render_module(&tree(), "http").unwrap();
	assert_eq!(
		rendered,
		"ballerina/http:2.0.0\n\
		 ====================\n\
		 Provides HTTP clients and listeners.\n\
		 \n\
		 Classes\n  Response  An HTTP response.\n\
		 \n\
		 Clients\n  Client  An HTTP client.\n\
		 \n\
		 Functions\n  createClient  Creates a client.\n\
		 \n\
		 Records\n  ClientConfiguration  Client settings.\n\
		 \n\
		 Types\n  Method [deprecated]  HTTP methods.\n\
		 \n\
		 Enums\n  Scheme\n"
	);
}

#[test]
fn module_links_use_container_connectors() {
	let rendered = docview()
		.with_format(RenderFormat::Html)
		.render_module(&tree(), "http")
		.unwrap();
	assert!(rendered.contains("href=\"/ballerina/http/2.0.0/http/clients/Client\""));
	assert!(rendered.contains("href=\"/ballerina/http/2.0.0/http/functions#createClient\""));
	assert!(rendered.contains("<span class=\"strike\"><a class=\"item\" href=\"/ballerina/http/2.0.0/http/types#Method\">Method</a></span>"));
}

#[test]
fn function_page() {
	let rendered = docview().render_function(&tree(), "http", "createClient").unwrap();
	assert_eq!(
		rendered,
		"createClient\n\
		 ============\n\
		 function createClient(string url, ClientConfiguration config, int[ ]? retries) returns Client\n\
		 [Isolated Function]\n\
		 Creates a client. Fails on a bad URL.\n\
		 \n\
		 Parameters\n\
		 \x20 url  string\n\
		 \x20 config  ClientConfiguration (default {})\n\
		 \x20 retries  int[ ]?\n\
		 \n\
		 Return Type\n\
		 \x20 (Client)\n"
	);
}

#[test]
fn method_is_addressed_through_its_owner() {
	let rendered = docview().render_function(&tree(), "http", "Client.get").unwrap();
	assert_eq!(
		rendered,
		"get\n\
		 ===\n\
		 function get(string path) returns Response | error\n\
		 [Remote Function]\n\
		 \n\
		 Parameters\n\
		 \x20 path  string\n\
		 \n\
		 Return Type\n\
		 \x20 (Response | error)\n"
	);
}

#[test]
fn client_page_lists_fields_and_remote_methods() {
	let rendered = docview().render_construct(&tree(), "http", "Client").unwrap();
	assert_eq!(
		rendered,
		"Client: Client\n\
		 ==============\n\
		 An HTTP client. Use it to call services.\n\
		 \n\
		 Fields\n\
		 \x20 url readonly string\n\
		 \x20 config ClientConfiguration (default {})\n\
		 \n\
		 Remote Methods\n\
		 \x20 function get(string path) returns Response | error\n"
	);
}

#[test]
fn type_definition_and_enum_pages() {
	let tree = tree();
	let rendered = docview().render_construct(&tree, "http", "Method").unwrap();
	assert!(rendered.starts_with("Type: Method\n============\n[Deprecated]\nHTTP methods.\n"));
	assert!(rendered.contains("Method \"GET\" | \"POST\"\n"));

	let rendered = docview().render_construct(&tree, "http", "Scheme").unwrap();
	assert!(rendered.ends_with("Members\n  HTTP\n  HTTPS  Secure.\n"));
}

#[test]
fn references_to_undocumented_modules_are_not_linked() {
	let rendered = docview()
		.with_format(RenderFormat::Html)
		.render_function(&tree(), "http.mock", "mockClient")
		.unwrap();
	assert!(rendered.contains("<span class=\"builtin-type-other\">MockClient</span>"));
	assert!(!rendered.contains("href=\"/ballerina/http/2.0.0/http.mock/clients/MockClient\""));
}

#[test]
fn label_command_checks_references_against_documents() {
	let tree = tree();
	let raw = serde_json::from_str(
		r#"{
			"name": "Response", "category": "classes", "moduleName": "http",
			"orgName": "ballerina", "version": "2.0.0",
			"generateUserDefinedTypeLink": true
		}"#,
	)
	.unwrap();
	let html = docview().with_format(RenderFormat::Html);
	let linked = html.render_label(&raw, None, Some(&tree)).unwrap();
	assert!(linked.contains("<a class=\"item\" href=\"/ballerina/http/2.0.0/http/classes/Response\">"));

	let empty = DocumentTree::default();
	let unlinked = html.render_label(&raw, None, Some(&empty)).unwrap();
	assert!(!unlinked.contains("<a "));
}

#[test]
fn unknown_module_and_construct() {
	let tree = tree();
	let err = docview().render_module(&tree, "grpc").unwrap_err();
	assert!(matches!(err, DocviewError::UnknownModule(ref id) if id == "grpc"));

	let err = docview().render_construct(&tree, "http", "Server").unwrap_err();
	assert_eq!(err.to_string(), "module `http` has no construct named `Server`");

	let err = docview().render_function(&tree, "http", "Client.delete").unwrap_err();
	assert!(matches!(err, DocviewError::UnknownConstruct { .. }));
}

#[test]
fn missing_file_is_an_io_error() {
	let dir = tempfile::TempDir::new().unwrap();
	let err = docview().load_documents(&dir.path().join("absent.json")).unwrap_err();
	assert!(matches!(err, DocviewError::Io { .. }));
}
