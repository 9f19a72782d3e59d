//! Rendering tests for complete documents

use apidoc_schemas::{DocFormat, DocGenerator, DocumentParser, GeneratorConfig, PreparedApi};
use std::io::Write;
use std::path::Path;

const PETSTORE: &str = r##"
swagger: "2.0"
info:
  title: Petstore
  version: 1.0.0
  description: A sample <pet> store
  license:
    name: MIT
host: petstore.example.com
basePath: /v1
schemes: [https]
tags:
  - name: pet
    description: Everything about pets
paths:
  /pets:
    get:
      tags: [pet]
      summary: List pets
      parameters:
        - name: limit
          in: query
          type: integer
          format: int32
          description: How many items to return
      responses:
        200:
          description: A list of pets
          schema:
            $ref: "#/definitions/Pets"
        default:
          description: Unexpected error
    post:
      tags: [pet]
      summary: Create a pet
      parameters:
        - name: pet
          in: body
          required: true
          schema:
            $ref: "#/definitions/Pet"
      responses:
        201:
          description: Created
  /ping:
    head:
      summary: Liveness probe
      responses:
        204:
          description: Alive
definitions:
  Pet:
    type: object
    required: [name]
    properties:
      name:
        type: string
        example: Rex
      status:
        type: string
        enum: [available, sold]
        example: available
  Pets:
    type: array
    items:
      $ref: "#/definitions/Pet"
"##;

fn petstore() -> PreparedApi {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    file.write_all(PETSTORE.as_bytes()).unwrap();

    DocumentParser::new().parse_file(file.path()).unwrap().prepare()
}

fn generator() -> DocGenerator {
    DocGenerator::with_config(GeneratorConfig {
        include_definitions: true,
        include_timestamp: false,
        ..Default::default()
    })
}

#[test]
fn test_markdown_document() {
    let doc = generator().generate(&petstore(), DocFormat::Markdown);

    assert!(doc.starts_with("# Petstore\n"));
    assert!(doc.contains("- **Base path:** /v1"));
    assert!(doc.contains("- **Schemes:** https"));
    assert!(doc.contains("- **License:** MIT"));
    assert!(doc.contains("Everything about pets"));

    // Operations of a path follow the fixed method order
    let get = doc.find("<a id=\"get-pets-pet\"></a>GET /pets").unwrap();
    let post = doc.find("<a id=\"post-pets-pet\"></a>POST /pets").unwrap();
    let head = doc.find("<a id=\"head-ping-other\"></a>HEAD /ping").unwrap();
    assert!(get < post);
    assert!(post < head);

    assert!(doc.contains("| limit | query | integer (int32) | No | How many items to return |"));
    assert!(doc.contains("| [].status | string | No | available, sold | available |  |"));
    assert!(doc.contains("| name | string | Yes |  | Rex |  |"));
    assert!(doc.contains("\"name\": \"Rex\""));
}

#[test]
fn test_response_statuses_are_sorted() {
    let doc = generator().generate(&petstore(), DocFormat::Markdown);

    let ok = doc.find("A list of pets").unwrap();
    let fallback = doc.find("Unexpected error").unwrap();
    assert!(ok < fallback);
}

#[test]
fn test_html_document() {
    let doc = generator().generate(&petstore(), DocFormat::Html);

    assert!(doc.starts_with("<!DOCTYPE html>"));
    assert!(doc.contains("<title>Petstore</title>"));
    assert!(doc.contains("<p>A sample &lt;pet&gt; store</p>"));
    assert!(doc.contains("<p>A list of pets</p>"));
    assert!(doc.contains("<h2 id=\"other\">Other</h2>"));
    assert!(doc.contains("<h2 id=\"definitions\">Definitions</h2>"));
    assert!(doc.contains("<td>[].name</td>"));
    assert!(doc.contains("&quot;name&quot;: &quot;Rex&quot;"));
}

#[test]
fn test_unresolved_definitions_are_marked() {
    let document = serde_json::json!({
        "info": {"title": "Loops", "version": "2"},
        "definitions": {
            "Node": {"type": "object", "properties": {"next": {"$ref": "#/definitions/Node"}}}
        }
    });
    let bytes = serde_json::to_vec(&document).unwrap();
    let prepared = DocumentParser::new()
        .parse_bytes(&bytes, Path::new("loops.json"))
        .unwrap()
        .prepare();

    let doc = generator().generate(&prepared, DocFormat::Markdown);
    assert!(doc.contains("**[Unresolved]**"));
    assert!(doc.contains("reference cycle between #/definitions/Node"));
}
