//! End-to-end CRUD behaviour against an in-memory PostgREST stand-in.
//!
//! `FakeTable` answers the same filter and `Prefer` conventions the real
//! backend does for a single `categories` table, so sequences of calls
//! (create, get, update, delete, list) can be checked for consistency.

mod common;

use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use serde_json::{json, Value};
use wiremock::matchers::path;
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

/// Nullable columns the backend fills in when an insert omits them.
const NULLABLE: [&str; 3] = ["parent_id", "description", "slug"];

struct FakeTable {
    rows: Mutex<BTreeMap<i64, Value>>,
    next_id: AtomicI64,
}

impl FakeTable {
    fn starting_at(first_id: i64) -> Self {
        Self {
            rows: Mutex::new(BTreeMap::new()),
            next_id: AtomicI64::new(first_id),
        }
    }
}

fn id_filter(request: &Request) -> Option<i64> {
    request
        .url
        .query_pairs()
        .find(|(key, _)| key == "id")
        .and_then(|(_, value)| value.strip_prefix("eq.")?.parse().ok())
}

impl Respond for FakeTable {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let mut rows = self.rows.lock().unwrap();
        let id = id_filter(request);

        match request.method.as_str() {
            "GET" => {
                let matching: Vec<&Value> = match id {
                    Some(id) => rows.get(&id).into_iter().collect(),
                    None => rows.values().collect(),
                };
                ResponseTemplate::new(200).set_body_json(matching)
            }
            "POST" => {
                let mut row: Value = serde_json::from_slice(&request.body).unwrap();
                let new_id = self.next_id.fetch_add(1, Ordering::SeqCst);
                let fields = row.as_object_mut().unwrap();
                fields.insert("id".into(), json!(new_id));
                for column in NULLABLE {
                    fields.entry(column).or_insert(Value::Null);
                }
                rows.insert(new_id, row.clone());
                ResponseTemplate::new(201).set_body_json(json!([row]))
            }
            "PATCH" => {
                let patch: Value = serde_json::from_slice(&request.body).unwrap();
                let existing = match id {
                    Some(id) => rows.get_mut(&id),
                    None => None,
                };
                match existing {
                    Some(row) => {
                        for (column, value) in patch.as_object().unwrap() {
                            row[column] = value.clone();
                        }
                        ResponseTemplate::new(200).set_body_json(json!([row]))
                    }
                    None => ResponseTemplate::new(200).set_body_json(json!([])),
                }
            }
            "DELETE" => {
                if let Some(id) = id {
                    rows.remove(&id);
                }
                ResponseTemplate::new(204)
            }
            _ => ResponseTemplate::new(405),
        }
    }
}

async fn fake_backend() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(path("/rest/v1/categories"))
        .respond_with(FakeTable::starting_at(7))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn create_then_get_returns_the_created_record() {
    let upstream = fake_backend().await;
    let app = || common::build_test_app(&upstream.uri());

    let created = post_json(app(), "/api/categories", json!({ "name": "LLMs" })).await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let created = body_json(created).await;
    assert_eq!(created["id"], 7);

    let fetched = get(app(), "/api/categories/7").await;
    assert_eq!(fetched.status(), StatusCode::OK);
    assert_eq!(
        body_json(fetched).await,
        json!({ "id": 7, "name": "LLMs", "parent_id": null, "description": null, "slug": null })
    );
}

#[tokio::test]
async fn unknown_id_is_not_found() {
    let upstream = fake_backend().await;

    let response = get(common::build_test_app(&upstream.uri()), "/api/categories/12345").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleted_record_is_not_found() {
    let upstream = fake_backend().await;
    let app = || common::build_test_app(&upstream.uri());

    post_json(app(), "/api/categories", json!({ "name": "Temporary" })).await;

    let deleted = delete(app(), "/api/categories/7").await;
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let fetched = get(app(), "/api/categories/7").await;
    assert_eq!(fetched.status(), StatusCode::NOT_FOUND);

    // Deleting again matches nothing and still succeeds.
    let again = delete(app(), "/api/categories/7").await;
    assert_eq!(again.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn update_is_idempotent() {
    let upstream = fake_backend().await;
    let app = || common::build_test_app(&upstream.uri());

    post_json(app(), "/api/categories", json!({ "name": "Text" })).await;
    post_json(app(), "/api/categories", json!({ "name": "LLMs" })).await;

    let patch = json!({ "parent_id": 7, "slug": "llms" });
    let first = body_json(put_json(app(), "/api/categories/8", patch.clone()).await).await;
    let second = body_json(put_json(app(), "/api/categories/8", patch).await).await;
    assert_eq!(first, second);

    let stored = body_json(get(app(), "/api/categories/8").await).await;
    assert_eq!(stored, first);
    assert_eq!(stored["name"], "LLMs");
    assert_eq!(stored["parent_id"], 7);
}

#[tokio::test]
async fn list_returns_records_created_and_not_deleted() {
    let upstream = fake_backend().await;
    let app = || common::build_test_app(&upstream.uri());

    for name in ["Text", "Image", "Audio"] {
        let response = post_json(app(), "/api/categories", json!({ "name": name })).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }
    delete(app(), "/api/categories/8").await;

    let listed = body_json(get(app(), "/api/categories").await).await;
    let names: BTreeSet<&str> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["name"].as_str().unwrap())
        .collect();

    assert_eq!(names, BTreeSet::from(["Text", "Audio"]));
}

#[tokio::test]
async fn explicit_null_clears_nullable_columns() {
    let upstream = fake_backend().await;
    let app = || common::build_test_app(&upstream.uri());

    post_json(app(), "/api/categories", json!({ "name": "Text" })).await;
    post_json(
        app(),
        "/api/categories",
        json!({ "name": "LLMs", "parent_id": 7, "description": "old" }),
    )
    .await;

    let response = put_json(
        app(),
        "/api/categories/8",
        json!({ "parent_id": null, "description": null }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let stored = body_json(get(app(), "/api/categories/8").await).await;
    assert_eq!(
        stored,
        json!({ "id": 8, "name": "LLMs", "parent_id": null, "description": null, "slug": null })
    );
}

#[tokio::test]
async fn update_without_fields_is_rejected() {
    let upstream = fake_backend().await;
    let app = || common::build_test_app(&upstream.uri());

    post_json(app(), "/api/categories", json!({ "name": "Text" })).await;

    for body in [json!({}), json!({ "name": null })] {
        let response = put_json(app(), "/api/categories/7", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    }

    let stored = body_json(get(app(), "/api/categories/7").await).await;
    assert_eq!(stored["name"], "Text");
}
