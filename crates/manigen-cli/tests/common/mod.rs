//! GitHub stand-in for binary tests
//!
//! Thin helpers over a `wiremock` server. Requests that match no mounted
//! route answer 404, the same as the real API for a missing file.

use base64::Engine;
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const REPO: &str = "acme/demo";

fn repo_path(tail: &str) -> String {
    format!("/repos/{}/{}", REPO, tail)
}

/// Download URL of a release asset served by `server`
pub fn download_url(server: &MockServer, tag: &str, name: &str) -> String {
    format!("{}/download/{}/{}", server.uri(), tag, name)
}

pub fn asset(server: &MockServer, tag: &str, name: &str) -> Value {
    json!({
        "name": name,
        "browser_download_url": download_url(server, tag, name),
    })
}

pub fn release(tag: &str, draft: bool, prerelease: bool, assets: Vec<Value>) -> Value {
    json!({
        "tag_name": tag,
        "draft": draft,
        "prerelease": prerelease,
        "published_at": "2024-03-01T12:00:00Z",
        "body": format!("Changes in {}", tag),
        "assets": assets,
    })
}

/// Serve `releases` from the release list endpoint
pub async fn mount_releases(server: &MockServer, releases: Value) {
    Mock::given(method("GET"))
        .and(path(repo_path("releases")))
        .respond_with(ResponseTemplate::new(200).set_body_json(releases))
        .mount(server)
        .await;
}

/// Fail the release list endpoint with `status`
pub async fn mount_releases_status(server: &MockServer, status: u16) {
    Mock::given(method("GET"))
        .and(path(repo_path("releases")))
        .respond_with(
            ResponseTemplate::new(status).set_body_json(json!({ "message": "error" })),
        )
        .mount(server)
        .await;
}

/// Serve `text` as `build.yaml` at `git_ref`, wrapped the way GitHub wraps it
pub async fn mount_build_yaml(server: &MockServer, git_ref: &str, text: &str) {
    let encoded = base64::engine::general_purpose::STANDARD.encode(text);
    let wrapped: Vec<String> = encoded
        .as_bytes()
        .chunks(60)
        .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
        .collect();
    let body = json!({
        "type": "file",
        "encoding": "base64",
        "content": format!("{}\n", wrapped.join("\n")),
    });

    Mock::given(method("GET"))
        .and(path(repo_path("contents/build.yaml")))
        .and(query_param("ref", git_ref))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Serve a release asset body at its download URL
pub async fn mount_download(server: &MockServer, tag: &str, name: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/download/{}/{}", tag, name)))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}
