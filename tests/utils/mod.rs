//! Shared fixtures for integration tests.
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Documentation tree with one package, two modules and a spread of constructs.
pub const DOCS_JSON: &str = r#"{
	"packages": [{
		"orgName": "ballerina",
		"name": "http",
		"version": "2.0.0",
		"modules": [
			{
				"id": "http",
				"orgName": "ballerina",
				"version": "2.0.0",
				"description": "Provides HTTP clients and listeners. Supports HTTP/1.1 and HTTP/2.",
				"clients": [{
					"name": "Client",
					"description": "An HTTP client. Use it to call services.",
					"fields": [
						{
							"name": "url",
							"isReadOnly": true,
							"type": { "name": "string", "category": "builtin", "version": "2.0.0" },
							"defaultValue": ""
						},
						{
							"name": "config",
							"type": {
								"name": "ClientConfiguration", "category": "records",
								"moduleName": "http", "orgName": "ballerina", "version": "2.0.0",
								"generateUserDefinedTypeLink": true
							},
							"defaultValue": "{}"
						}
					],
					"remoteMethods": [{
						"name": "get",
						"isRemote": true,
						"parameters": [{
							"name": "path",
							"type": { "name": "string", "category": "builtin", "version": "2.0.0" },
							"defaultValue": ""
						}],
						"returnParameters": [{
							"type": {
								"isAnonymousUnionType": true,
								"memberTypes": [
									{
										"name": "Response", "category": "classes",
										"moduleName": "http", "orgName": "ballerina", "version": "2.0.0",
										"generateUserDefinedTypeLink": true
									},
									{ "name": "error", "category": "builtin", "version": "2.0.0" }
								]
							}
						}]
					}]
				}],
				"classes": [{ "name": "Response", "description": "An HTTP response." }],
				"records": [{
					"name": "ClientConfiguration",
					"description": "Client settings.",
					"fields": [{
						"name": "timeout",
						"type": { "name": "decimal", "category": "builtin", "version": "2.0.0" },
						"defaultValue": "60"
					}]
				}],
				"functions": [{
					"name": "createClient",
					"description": "Creates a client. Fails on a bad URL.",
					"isIsolated": true,
					"parameters": [
						{
							"name": "url",
							"type": { "name": "string", "category": "builtin", "version": "2.0.0" },
							"defaultValue": ""
						},
						{
							"name": "config",
							"type": {
								"name": "ClientConfiguration", "category": "records",
								"moduleName": "http", "orgName": "ballerina", "version": "2.0.0",
								"generateUserDefinedTypeLink": true
							},
							"defaultValue": "{}"
						},
						{
							"name": "retries",
							"type": {
								"isArrayType": true, "arrayDimensions": 1, "isNullable": true,
								"elementType": { "name": "int", "category": "builtin", "version": "2.0.0" }
							},
							"defaultValue": "no-value"
						}
					],
					"returnParameters": [{
						"type": {
							"name": "Client", "category": "clients",
							"moduleName": "http", "orgName": "ballerina", "version": "2.0.0",
							"generateUserDefinedTypeLink": true
						}
					}]
				}],
				"types": [{
					"name": "Method",
					"description": "HTTP methods.",
					"isDeprecated": true,
					"type": {
						"isAnonymousUnionType": true,
						"memberTypes": [
							{ "name": "\"GET\"", "category": "builtin", "version": "2.0.0" },
							{ "name": "\"POST\"", "category": "builtin", "version": "2.0.0" }
						]
					}
				}],
				"enums": [{
					"name": "Scheme",
					"members": [{ "name": "HTTP" }, { "name": "HTTPS", "description": "Secure." }]
				}]
			},
			{
				"id": "http.mock",
				"orgName": "ballerina",
				"version": "2.0.0",
				"functions": [{
					"name": "mockClient",
					"returnParameters": [{
						"type": {
							"name": "MockClient", "category": "clients",
							"moduleName": "http.mock", "orgName": "ballerina", "version": "2.0.0",
							"generateUserDefinedTypeLink": true
						}
					}]
				}]
			}
		]
	}]
}"#;

/// Search data matching [`DOCS_JSON`], using the legacy `abstractObjects` key.
pub const SEARCH_JSON: &str = r#"{
	"modules": [
		{ "id": "http", "moduleId": "http", "description": "<p>Provides HTTP clients. More.</p>" },
		{ "id": "http.mock", "moduleId": "http.mock" }
	],
	"clients": [{ "id": "Client", "moduleId": "http", "description": "An HTTP client." }],
	"classes": [{ "id": "Response", "moduleId": "http" }],
	"functions": [
		{ "id": "createClient", "moduleId": "http" },
		{ "id": "post", "moduleId": "http" },
		{ "id": "mockClient", "moduleId": "http.mock" }
	],
	"abstractObjects": [{ "id": "Service", "moduleId": "http" }]
}"#;

/// Single-project test report.
pub const REPORT_JSON: &str = r#"{
	"projectName": "orders",
	"totalTests": 3, "passed": 2, "failed": 1, "skipped": 0,
	"coveredLines": 80, "missedLines": 20, "coveragePercentage": 80,
	"moduleStatus": [{
		"name": "orders",
		"totalTests": 3, "passed": 2, "failed": 1, "skipped": 0,
		"tests": [
			{ "name": "testCreate", "status": "PASSED" },
			{ "name": "testList", "status": "PASSED" },
			{ "name": "testCancel", "status": "FAILURE", "failureMessage": "expected 200, got 500" }
		]
	}],
	"moduleCoverage": [{
		"name": "orders",
		"coveredLines": 80, "missedLines": 20, "coveragePercentage": 80,
		"sourceFiles": [{
			"name": "main.bal",
			"coveredLines": [1, 2, 3, 4], "missedLines": [5],
			"coveragePercentage": 80,
			"sourceCode": "import ballerina/http;\n"
		}]
	}]
}"#;

/// Write `contents` to `name` inside a fresh temporary directory.
///
/// The directory is removed when the returned guard drops.
pub fn write_fixture(name: &str, contents: &str) -> (TempDir, PathBuf) {
	let dir = TempDir::new().expect("create temp dir");
	let path = dir.path().join(name);
	fs::write(&path, contents).expect("write fixture");
	(dir, path)
}
