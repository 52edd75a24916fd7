//! Builder module tests
//!
//! Tests for the fluent encode builder, mirroring src/builder.

use std::io::Read;

use restwire::{Bytes, Metadata, Method, RestJson, Target, Url};

fn url(s: &str) -> Url {
    Url::parse(s).expect("test URL must parse")
}

#[test]
fn debug_encode_flow() {
    env_logger::try_init().ok(); // Ignore error if already initialized

    let (req, body) = RestJson::post(url("https://api.example.com/users"))
        .debug()
        .scalar(Target::Body, "name", &"alice")
        .assemble()
        .expect("assembly should succeed");

    assert_eq!(req.method(), &Method::POST);
    assert!(body.expect("POST body expected").is_structured());
}

#[test]
fn fluent_post_builds_path_and_document() {
    let (req, body) = RestJson::post(url("https://api.example.com/users/{id}/notes"))
        .scalar(Target::Path, "id", &"42")
        .scalar(Target::Header, "x-request-id", &"r-1")
        .scalar(Target::Body, "text", &"hello")
        .scalar(Target::Body, "pinned", &true)
        .assemble()
        .expect("assembly should succeed");

    assert_eq!(req.url().path(), "/users/42/notes");
    assert_eq!(req.headers().get("x-request-id").unwrap(), "r-1");

    let mut buf = Vec::new();
    body.expect("POST body expected")
        .into_reader()
        .read_to_end(&mut buf)
        .expect("body reader failed");
    let document: serde_json::Value = serde_json::from_slice(&buf).expect("body must be JSON");
    assert_eq!(document, serde_json::json!({"text": "hello", "pinned": true}));
}

#[test]
fn fluent_get_redirects_body_values_to_query() {
    let (req, body) = RestJson::get(url("https://api.example.com/search"))
        .scalar(Target::Query, "filter", &"active")
        .scalar(Target::Body, "name", &"alice")
        .assemble()
        .expect("assembly should succeed");

    assert_eq!(req.url().query(), Some("filter=active&name=alice"));
    assert!(body.is_none(), "redirected GET must not carry a body");
}

#[test]
fn fluent_collections_and_metadata() {
    let (req, body) = RestJson::put(url("https://api.example.com/items/{id}"))
        .scalar(Target::Path, "id", &7_i64)
        .list(Target::Query, "tag", |w| {
            w.value(&"new");
            w.value(&"sale");
        })
        .map(Target::Headers, "x-meta-", |w| {
            w.entry("owner", &"ops");
        })
        .scalar_with(Target::Body, "item_name", &"lamp", &Metadata::named("itemName"))
        .assemble()
        .expect("assembly should succeed");

    assert_eq!(req.url().path(), "/items/7");
    assert_eq!(req.url().query(), Some("tag=new&tag=sale"));
    assert_eq!(req.headers().get("x-meta-owner").unwrap(), "ops");

    let mut buf = Vec::new();
    body.expect("PUT body expected")
        .into_reader()
        .read_to_end(&mut buf)
        .expect("body reader failed");
    let document: serde_json::Value = serde_json::from_slice(&buf).expect("body must be JSON");
    assert_eq!(document, serde_json::json!({"itemName": "lamp"}));
}

#[test]
fn fluent_stream_payload() {
    let (_, body) = RestJson::post(url("https://api.example.com/upload"))
        .stream(Target::Payload, "data", &Bytes::from_static(b"payload"))
        .assemble()
        .expect("assembly should succeed");

    let mut buf = Vec::new();
    body.expect("payload expected")
        .into_reader()
        .read_to_end(&mut buf)
        .expect("payload reader failed");
    assert_eq!(buf, b"payload");
}

#[test]
fn routing_mistake_surfaces_at_assemble() {
    let builder = RestJson::post(url("https://api.example.com/x"))
        .stream(Target::Header, "data", &Bytes::from_static(b"x"));
    assert!(builder.has_error());

    let err = builder
        .scalar(Target::Query, "q", &"dropped")
        .assemble()
        .expect_err("latched error must surface");
    assert_eq!(
        err.to_string(),
        "invalid target header for set_stream, must be payload"
    );
}
