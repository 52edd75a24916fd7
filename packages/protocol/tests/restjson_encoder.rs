//! Composite encoder tests
//!
//! Routing table, GET redirection, error latching, and assembly behavior of
//! the REST+JSON composite encoder.

use bytes::Bytes;
use http::Method;
use restwire_protocol::error::Kind;
use restwire_protocol::marshal::FieldWriter;
use restwire_protocol::{
    FieldMarshaler, Metadata, Request, RequestBody, RestJsonEncoder, Target, Url,
};

fn request(method: Method, url: &str) -> Request {
    Request::new(method, Url::parse(url).expect("test URL must parse"))
}

/// Nested type used for `set_fields` calls.
struct UploadMeta {
    label: String,
    size: i64,
}

impl FieldMarshaler for UploadMeta {
    fn marshal_fields(&self, w: &mut dyn FieldWriter) {
        w.scalar("label", &self.label);
        w.scalar("size", &self.size);
    }
}

fn read_all(body: RequestBody) -> Vec<u8> {
    use std::io::Read;
    let mut buf = Vec::new();
    body.into_reader()
        .read_to_end(&mut buf)
        .expect("body reader failed");
    buf
}

#[test]
fn post_routes_body_scalar_to_document_and_path_to_url() {
    let mut enc = RestJsonEncoder::new(request(Method::POST, "https://api.example.com/users/{id}"));
    enc.set_scalar(Target::Body, "name", &"alice", &Metadata::new());
    enc.set_scalar(Target::Path, "id", &"42", &Metadata::new());

    let (req, body) = enc.assemble().expect("assembly should succeed");

    assert_eq!(req.url().path(), "/users/42");

    let body = body.expect("POST with a body field should produce a body");
    assert!(body.is_structured());
    let document: serde_json::Value =
        serde_json::from_slice(&read_all(body)).expect("structured body must be JSON");
    assert_eq!(document, serde_json::json!({"name": "alice"}));
}

#[test]
fn get_redirects_body_scalar_to_query_string() {
    let mut enc = RestJsonEncoder::new(request(Method::GET, "https://api.example.com/search"));
    enc.set_scalar(Target::Query, "filter", &"active", &Metadata::new());
    enc.set_scalar(Target::Body, "name", &"alice", &Metadata::new());

    let (req, body) = enc.assemble().expect("assembly should succeed");

    let query: Vec<(String, String)> = req
        .url()
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    assert!(query.contains(&("filter".to_string(), "active".to_string())));
    assert!(query.contains(&("name".to_string(), "alice".to_string())));
    assert!(body.is_none(), "redirected GET must not carry a body");
}

#[test]
fn get_redirects_payload_scalar_to_query_string() {
    let mut enc = RestJsonEncoder::new(request(Method::GET, "https://api.example.com/items"));
    enc.set_scalar(Target::Payload, "token", &"abc123", &Metadata::new());

    let (req, body) = enc.assemble().expect("assembly should succeed");

    assert_eq!(req.url().query(), Some("token=abc123"));
    assert!(body.is_none());
}

#[test]
fn non_get_methods_never_redirect_body_scalars() {
    for method in [Method::POST, Method::PUT, Method::PATCH, Method::DELETE] {
        let mut enc = RestJsonEncoder::new(request(method.clone(), "https://api.example.com/items"));
        enc.set_scalar(Target::Body, "name", &"alice", &Metadata::new());

        let (req, body) = enc.assemble().expect("assembly should succeed");

        assert_eq!(req.url().query(), None, "{method}: query must stay empty");
        assert!(
            body.expect("body field must reach the document").is_structured(),
            "{method}: body scalar belongs in the document"
        );
    }
}

/// Collections are deliberately exempt from GET redirection: a body-targeted
/// list stays in the structured body even on a GET.
#[test]
fn get_does_not_redirect_body_lists() {
    let mut enc = RestJsonEncoder::new(request(Method::GET, "https://api.example.com/batch"));
    enc.set_list(
        Target::Body,
        "ids",
        |w| {
            w.value(&1_i64);
            w.value(&2_i64);
        },
        &Metadata::new(),
    );

    let (req, body) = enc.assemble().expect("assembly should succeed");

    assert_eq!(req.url().query(), None);
    let body = body.expect("body list must produce a structured body");
    let document: serde_json::Value = serde_json::from_slice(&read_all(body)).unwrap();
    assert_eq!(document, serde_json::json!({"ids": [1, 2]}));
}

#[test]
fn stream_reaches_payload_regardless_of_method() {
    for method in [Method::GET, Method::POST] {
        let mut enc = RestJsonEncoder::new(request(method, "https://api.example.com/upload"));
        enc.set_stream(
            Target::Payload,
            "data",
            &Bytes::from_static(b"raw bytes"),
            &Metadata::new(),
        );

        let (_, body) = enc.assemble().expect("assembly should succeed");

        let body = body.expect("payload stream must survive assembly");
        assert!(body.is_payload());
        assert_eq!(read_all(body), b"raw bytes");
    }
}

#[test]
fn stream_with_non_payload_target_latches() {
    for target in [
        Target::Path,
        Target::Query,
        Target::Header,
        Target::Headers,
        Target::Body,
    ] {
        let mut enc = RestJsonEncoder::new(request(Method::POST, "https://api.example.com/upload"));
        enc.set_stream(target, "data", &Bytes::from_static(b"x"), &Metadata::new());

        let err = enc.assemble().expect_err("non-payload stream target must fail");
        assert!(matches!(err.kind(), Kind::Stream { .. }), "{target}: {err}");
        assert!(err.to_string().contains("must be payload"));
    }
}

#[test]
fn invalid_targets_latch_routing_errors() {
    // One representative invalid target per operation.
    let meta = Metadata::new();

    let mut enc = RestJsonEncoder::new(request(Method::POST, "https://api.example.com/x"));
    enc.set_scalar(Target::Headers, "k", &"v", &meta);
    let err = enc.assemble().expect_err("headers is invalid for set_scalar");
    assert_eq!(err.to_string(), "unknown encode target for set_scalar: headers, k");

    let mut enc = RestJsonEncoder::new(request(Method::POST, "https://api.example.com/x"));
    enc.set_list(Target::Path, "k", |w| w.value(&"v"), &meta);
    let err = enc.assemble().expect_err("path is invalid for set_list");
    assert_eq!(err.to_string(), "unknown encode target for set_list: path, k");

    let mut enc = RestJsonEncoder::new(request(Method::POST, "https://api.example.com/x"));
    enc.set_map(Target::Header, "k", |w| w.entry("a", &"v"), &meta);
    let err = enc.assemble().expect_err("header is invalid for set_map");
    assert_eq!(err.to_string(), "unknown encode target for set_map: header, k");

    let mut enc = RestJsonEncoder::new(request(Method::POST, "https://api.example.com/x"));
    let fields = UploadMeta {
        label: "l".to_string(),
        size: 1,
    };
    enc.set_fields(Target::Query, "k", &fields, &meta);
    let err = enc.assemble().expect_err("query is invalid for set_fields");
    assert_eq!(err.to_string(), "unknown encode target for set_fields: query, k");
}

#[test]
fn latched_error_suppresses_later_calls() {
    let mut enc = RestJsonEncoder::new(request(Method::GET, "https://api.example.com/x"));
    enc.set_map(Target::Header, "h", |w| w.entry("a", &"v"), &Metadata::new());
    assert!(enc.has_error());

    // Would otherwise land in the query string; must be dropped.
    enc.set_scalar(Target::Query, "q", &"v", &Metadata::new());

    let err = enc.assemble().expect_err("latched error must surface");
    assert!(matches!(
        err.kind(),
        Kind::Routing { op: "set_map", .. }
    ));
}

#[test]
fn first_error_wins() {
    let mut enc = RestJsonEncoder::new(request(Method::POST, "https://api.example.com/x"));
    enc.set_scalar(Target::Headers, "first", &"v", &Metadata::new());
    enc.set_list(Target::Path, "second", |w| w.value(&"v"), &Metadata::new());

    let err = enc.assemble().expect_err("errors must latch");
    assert!(err.to_string().contains("set_scalar"));
    assert!(err.to_string().contains("first"));
}

#[test]
fn ambiguous_body_fails_assembly() {
    let mut enc = RestJsonEncoder::new(request(Method::POST, "https://api.example.com/upload"));
    enc.set_stream(
        Target::Payload,
        "data",
        &Bytes::from_static(b"stream"),
        &Metadata::new(),
    );
    let meta_fields = UploadMeta {
        label: "photo".to_string(),
        size: 2048,
    };
    enc.set_fields(Target::Body, "meta", &meta_fields, &Metadata::new());

    let err = enc.assemble().expect_err("both bodies must be rejected");
    assert!(err.is_ambiguous_body());
    assert_eq!(
        err.to_string(),
        "ambiguous body: both structured body and raw payload produced"
    );
}

#[test]
fn pure_get_assembles_with_no_body() {
    let mut enc = RestJsonEncoder::new(request(Method::GET, "https://api.example.com/users/{id}"));
    enc.set_scalar(Target::Path, "id", &"7", &Metadata::new());
    enc.set_scalar(Target::Query, "page", &2_i32, &Metadata::new());
    enc.set_scalar(Target::Header, "x-request-id", &"r-1", &Metadata::new());

    let (req, body) = enc.assemble().expect("assembly should succeed");

    assert!(body.is_none());
    assert_eq!(req.url().path(), "/users/7");
    assert_eq!(req.url().query(), Some("page=2"));
    assert_eq!(req.headers().get("x-request-id").unwrap(), "r-1");
}

#[test]
fn set_fields_payload_embeds_at_document_root() {
    let mut enc = RestJsonEncoder::new(request(Method::POST, "https://api.example.com/upload"));
    let fields = UploadMeta {
        label: "photo".to_string(),
        size: 2048,
    };
    enc.set_fields(Target::Payload, "ignored", &fields, &Metadata::new());

    let (_, body) = enc.assemble().expect("assembly should succeed");

    let document: serde_json::Value =
        serde_json::from_slice(&read_all(body.expect("fields must produce a body"))).unwrap();
    assert_eq!(document, serde_json::json!({"label": "photo", "size": 2048}));
}

#[test]
fn delegate_errors_surface_at_assembly() {
    let mut enc = RestJsonEncoder::new(request(Method::POST, "https://api.example.com/x"));
    // Spaces are not legal in header names; the structural encoder latches.
    enc.set_scalar(Target::Header, "bad name", &"v", &Metadata::new());

    let err = enc.assemble().expect_err("invalid header name must fail");
    assert!(matches!(err.kind(), Kind::Header));
    let source = std::error::Error::source(&err).expect("header errors carry a source");
    assert!(source.to_string().contains("bad name"));
}

#[test]
fn latched_error_takes_priority_over_finalize_errors() {
    let mut enc = RestJsonEncoder::new(request(Method::POST, "https://api.example.com/x"));
    // Routing error first, then a call that would latch inside the
    // structural encoder if it ran.
    enc.set_scalar(Target::Headers, "first", &"v", &Metadata::new());
    enc.set_scalar(Target::Header, "bad name", &"v", &Metadata::new());

    let err = enc.assemble().expect_err("latched error must surface");
    assert!(matches!(err.kind(), Kind::Routing { .. }));
}

#[test]
fn from_parts_uses_the_seeded_template_method() {
    use restwire_protocol::{JsonBodyEncoder, RestEncoder};

    let structural = RestEncoder::new(request(Method::GET, "https://api.example.com/q"));
    let enc = RestJsonEncoder::from_parts(structural, JsonBodyEncoder::new());
    assert_eq!(enc.method(), &Method::GET);
}
