//! HTTP-level integration tests for the pull request lifecycle.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json, reviewers, seed_core_team};
use serde_json::json;
use sqlx::PgPool;

async fn create_pr1(pool: &PgPool) -> serde_json::Value {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/pullRequest/create",
        json!({"pull_request_id": "pr1", "pull_request_name": "x", "author_id": "A"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

async fn set_active(pool: &PgPool, user_id: &str, is_active: bool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/users/setIsActive",
        json!({"user_id": user_id, "is_active": is_active}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// /pullRequest/create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_assigns_two_active_teammates(pool: PgPool) {
    seed_core_team(&pool).await;

    let json = create_pr1(&pool).await;

    assert_eq!(json["pr"]["pull_request_id"], "pr1");
    assert_eq!(json["pr"]["pull_request_name"], "x");
    assert_eq!(json["pr"]["author_id"], "A");
    assert_eq!(json["pr"]["status"], "OPEN");
    assert!(json["pr"]["createdAt"].is_string());
    assert!(json["pr"]["mergedAt"].is_null());
    assert_eq!(reviewers(&json), ["B", "C"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_with_lone_author_assigns_nobody(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/team/add",
        json!({
            "team_name": "solo",
            "members": [{"user_id": "S", "username": "Sam", "is_active": true}]
        }),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/pullRequest/create",
        json!({"pull_request_id": "pr-s", "pull_request_name": "alone", "author_id": "S"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(reviewers(&json).is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_duplicate_returns_409(pool: PgPool) {
    seed_core_team(&pool).await;
    create_pr1(&pool).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/pullRequest/create",
        json!({"pull_request_id": "pr1", "pull_request_name": "again", "author_id": "B"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "PR_EXISTS");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_with_unknown_author_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/pullRequest/create",
        json!({"pull_request_id": "pr1", "pull_request_name": "x", "author_id": "ghost"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_with_missing_field_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/pullRequest/create",
        json!({"pull_request_id": "pr1", "author_id": "A"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// /pullRequest/merge
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn merge_is_idempotent(pool: PgPool) {
    seed_core_team(&pool).await;
    create_pr1(&pool).await;

    let app = common::build_test_app(pool.clone());
    let first = body_json(
        post_json(app, "/pullRequest/merge", json!({"pull_request_id": "pr1"})).await,
    )
    .await;
    assert_eq!(first["pr"]["status"], "MERGED");
    assert!(first["pr"]["mergedAt"].is_string());

    let app = common::build_test_app(pool);
    let response = post_json(app, "/pullRequest/merge", json!({"pull_request_id": "pr1"})).await;
    assert_eq!(response.status(), StatusCode::OK);
    let second = body_json(response).await;
    assert_eq!(second["pr"]["status"], "MERGED");
    assert_eq!(second["pr"]["mergedAt"], first["pr"]["mergedAt"]);
    assert_eq!(reviewers(&second), ["B", "C"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn merge_unknown_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/pullRequest/merge", json!({"pull_request_id": "nope"})).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// /pullRequest/reassign
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn reassign_swaps_in_newly_active_teammate(pool: PgPool) {
    seed_core_team(&pool).await;
    create_pr1(&pool).await;
    set_active(&pool, "D", true).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/pullRequest/reassign",
        json!({"pull_request_id": "pr1", "old_user_id": "B"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["replaced_by"], "D");
    assert_eq!(reviewers(&json), ["C", "D"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn reassign_without_candidate_returns_no_candidate(pool: PgPool) {
    seed_core_team(&pool).await;
    create_pr1(&pool).await;
    set_active(&pool, "B", false).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/pullRequest/reassign",
        json!({"pull_request_id": "pr1", "old_user_id": "B"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "NO_CANDIDATE");

    // Nothing changed.
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/pullRequest/get?pull_request_id=pr1").await).await;
    assert_eq!(reviewers(&json), ["B", "C"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn reassign_on_merged_returns_409(pool: PgPool) {
    seed_core_team(&pool).await;
    create_pr1(&pool).await;

    let app = common::build_test_app(pool.clone());
    post_json(app, "/pullRequest/merge", json!({"pull_request_id": "pr1"})).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/pullRequest/reassign",
        json!({"pull_request_id": "pr1", "old_user_id": "C"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "PR_MERGED");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn reassign_unassigned_user_returns_not_assigned(pool: PgPool) {
    seed_core_team(&pool).await;
    create_pr1(&pool).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/pullRequest/reassign",
        json!({"pull_request_id": "pr1", "old_user_id": "A"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "NOT_ASSIGNED");
}

// ---------------------------------------------------------------------------
// /pullRequest/get
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_returns_pull_request(pool: PgPool) {
    seed_core_team(&pool).await;
    create_pr1(&pool).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/pullRequest/get?pull_request_id=pr1").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["pr"]["pull_request_id"], "pr1");
    assert_eq!(reviewers(&json), ["B", "C"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_unknown_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/pullRequest/get?pull_request_id=nope").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
