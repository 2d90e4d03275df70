//! Document output integration tests.

use std::fs;

use periplus_config::{ApiInfo, PeriplusConfig, ServerDescriptor, ServerVariable};
use periplus_docs::{DocumentGenerator, HttpMethod, OpenApi, Operation};
use serde_json::{json, Value};
use tempfile::TempDir;

fn document() -> OpenApi {
    let config = PeriplusConfig::builder()
        .info(ApiInfo::new("Blog", "Blog API", "1.0.0"))
        .server(
            ServerDescriptor::new("https://api.example.com/{version}")
                .with_variable("version", ServerVariable::new("v1").with_enum(["v1", "v2"])),
        )
        .build();

    let mut doc = DocumentGenerator::from_config(&config).generate();
    doc.add_operation(
        "/home",
        HttpMethod::Get,
        Operation::new()
            .summary("Landing page")
            .response("200", json!({"description": "OK"})),
    );
    doc.add_operation(
        "/home/posts",
        HttpMethod::Post,
        Operation::new()
            .operation_id("createPost")
            .response("201", json!({"description": "Created"})),
    );
    doc
}

#[test]
fn writes_pretty_json_with_openapi_field_names() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("openapi.json");

    document().write_to_file(&path).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    let value: Value = serde_json::from_str(&written).unwrap();

    assert_eq!(value["openapi"], "3.0.0");
    assert_eq!(value["info"]["title"], "Blog");
    assert_eq!(value["servers"][0]["variables"]["version"]["enum"], json!(["v1", "v2"]));
    assert_eq!(value["paths"]["/home/posts"]["post"]["operationId"], "createPost");
    assert_eq!(value["paths"]["/home"]["get"]["responses"]["200"]["description"], "OK");
}

#[test]
fn creates_missing_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dist").join("v1").join("openapi.json");

    document().write_to_file(&path).unwrap();
    assert!(path.exists());
}

#[test]
fn written_document_reads_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("openapi.json");
    let doc = document();

    doc.write_to_file(&path).unwrap();

    let parsed: OpenApi = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(parsed, doc);
    let paths: Vec<&str> = parsed.paths.keys().map(String::as_str).collect();
    assert_eq!(paths, vec!["/home", "/home/posts"]);
}

#[test]
fn write_into_a_file_path_fails_with_io_error() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();

    let result = document().write_to_file(blocker.join("openapi.json"));
    assert!(matches!(result, Err(periplus_docs::DocsError::IoError(_))));
}
