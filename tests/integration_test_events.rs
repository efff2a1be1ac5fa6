mod common;

use axum::http::StatusCode;
use common::{parse_body, TestApp};
use serde_json::json;

#[tokio::test]
async fn test_create_event_defaults_owner_to_creator() {
    let app = TestApp::new().await;
    let token = app.login_main_admin().await;

    let response = app
        .post_json(
            "/api/admin/events",
            &json!({ "slug": "Sommer Fest", "name": "Sommerfest" }),
            Some(&token),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = parse_body(response).await;
    assert_eq!(body["slug"], "sommer-fest");
    assert!(body.get("createdOwner").is_none());

    let detail = app.get("/api/admin/events/sommer-fest", Some(&token)).await;
    assert_eq!(detail.status(), StatusCode::OK);
    let detail = parse_body(detail).await;
    assert_eq!(detail["name"], "Sommerfest");
    assert_eq!(detail["guestCount"], 0);
    assert_eq!(detail["rsvpCount"], 0);
    assert_eq!(detail["comingCount"], 0);
}

#[tokio::test]
async fn test_create_event_duplicate_slug_conflicts() {
    let app = TestApp::new().await;
    let token = app.login_main_admin().await;

    let first = app
        .post_json("/api/admin/events", &json!({ "slug": "a-b", "name": "One" }), Some(&token))
        .await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = app
        .post_json("/api/admin/events", &json!({ "slug": "a-b", "name": "Two" }), Some(&token))
        .await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_create_event_requires_main_admin() {
    let app = TestApp::new().await;
    let admin = app.login_main_admin().await;

    app.post_json(
        "/api/admin/users",
        &json!({ "email": "planner@example.com", "password": "pw-planner", "role": "event_admin" }),
        Some(&admin),
    )
    .await;

    let planner = app.login("planner@example.com", "pw-planner").await;
    let response = app
        .post_json("/api/admin/events", &json!({ "slug": "their-fest", "name": "Fest" }), Some(&planner))
        .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_create_event_with_owner_credentials() {
    let app = TestApp::new().await;
    let admin = app.login_main_admin().await;

    let response = app
        .post_json(
            "/api/admin/events",
            &json!({
                "slug": "lena-jonas",
                "name": "Lena & Jonas",
                "ownerEmail": "lena@example.com",
                "ownerPassword": "pw-lena"
            }),
            Some(&admin),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = parse_body(response).await;
    let owner_id = body["ownerId"].as_str().unwrap().to_string();
    assert_eq!(body["createdOwner"]["email"], "lena@example.com");
    assert_eq!(body["createdOwner"]["id"], owner_id.as_str());

    // The created owner can log in and see their event.
    let owner = app.login("lena@example.com", "pw-lena").await;
    let detail = app.get("/api/admin/events/lena-jonas", Some(&owner)).await;
    assert_eq!(detail.status(), StatusCode::OK);

    // Owner identity is only included for the main admin.
    let detail = parse_body(detail).await;
    assert!(detail.get("ownerEmail").is_none());

    let admin_detail = parse_body(app.get("/api/admin/events/lena-jonas", Some(&admin)).await).await;
    assert_eq!(admin_detail["ownerEmail"], "lena@example.com");
    assert_eq!(admin_detail["ownerId"], owner_id.as_str());
}

#[tokio::test]
async fn test_create_event_owner_email_conflict() {
    let app = TestApp::new().await;
    let admin = app.login_main_admin().await;

    app.post_json(
        "/api/admin/events",
        &json!({ "slug": "ev-one", "name": "One", "ownerEmail": "dup@example.com", "ownerPassword": "pw" }),
        Some(&admin),
    )
    .await;

    let response = app
        .post_json(
            "/api/admin/events",
            &json!({ "slug": "ev-two", "name": "Two", "ownerEmail": "dup@example.com", "ownerPassword": "pw" }),
            Some(&admin),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_event_listing_is_scoped_to_tier() {
    let app = TestApp::new().await;
    let admin = app.login_main_admin().await;

    app.post_json(
        "/api/admin/events",
        &json!({ "slug": "mine", "name": "Mine", "ownerEmail": "owner@example.com", "ownerPassword": "pw-owner" }),
        Some(&admin),
    )
    .await;
    app.post_json("/api/admin/events", &json!({ "slug": "other", "name": "Other" }), Some(&admin))
        .await;

    let admin_list = parse_body(app.get("/api/admin/events", Some(&admin)).await).await;
    assert_eq!(admin_list.as_array().unwrap().len(), 2);

    let owner = app.login("owner@example.com", "pw-owner").await;
    let owner_list = parse_body(app.get("/api/admin/events", Some(&owner)).await).await;
    let owner_list = owner_list.as_array().unwrap();
    assert_eq!(owner_list.len(), 1);
    assert_eq!(owner_list[0]["slug"], "mine");
}

#[tokio::test]
async fn test_only_main_admin_renames_event() {
    let app = TestApp::new().await;
    let admin = app.login_main_admin().await;

    app.post_json(
        "/api/admin/events",
        &json!({ "slug": "renameable", "name": "Before", "ownerEmail": "own2@example.com", "ownerPassword": "pw" }),
        Some(&admin),
    )
    .await;

    let owner = app.login("own2@example.com", "pw").await;
    let forbidden = app
        .patch_json("/api/admin/events/renameable", &json!({ "name": "After" }), Some(&owner))
        .await;
    assert_eq!(forbidden.status(), StatusCode::FORBIDDEN);

    let allowed = app
        .patch_json("/api/admin/events/renameable", &json!({ "name": "After" }), Some(&admin))
        .await;
    assert_eq!(allowed.status(), StatusCode::OK);

    let detail = parse_body(app.get("/api/admin/events/renameable", Some(&admin)).await).await;
    assert_eq!(detail["name"], "After");
}

#[tokio::test]
async fn test_owner_may_update_config_but_not_delete() {
    let app = TestApp::new().await;
    let admin = app.login_main_admin().await;

    app.post_json(
        "/api/admin/events",
        &json!({ "slug": "config-ev", "name": "Config", "ownerEmail": "own3@example.com", "ownerPassword": "pw" }),
        Some(&admin),
    )
    .await;

    let owner = app.login("own3@example.com", "pw").await;
    let update = app
        .patch_json(
            "/api/admin/events/config-ev",
            &json!({ "config": { "theme": "gold", "sections": ["welcome"] } }),
            Some(&owner),
        )
        .await;
    assert_eq!(update.status(), StatusCode::OK);

    // Config round-trips verbatim through the public endpoint.
    let public = parse_body(app.get("/api/events/config-ev", None).await).await;
    assert_eq!(public["config"]["theme"], "gold");

    let delete = app.delete("/api/admin/events/config-ev", Some(&owner)).await;
    assert_eq!(delete.status(), StatusCode::FORBIDDEN);

    let delete = app.delete("/api/admin/events/config-ev", Some(&admin)).await;
    assert_eq!(delete.status(), StatusCode::OK);

    let gone = app.get("/api/events/config-ev", None).await;
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_owner_credentials() {
    let app = TestApp::new().await;
    let admin = app.login_main_admin().await;

    app.post_json(
        "/api/admin/events",
        &json!({ "slug": "owned-ev", "name": "Owned", "ownerEmail": "old@example.com", "ownerPassword": "old-pw" }),
        Some(&admin),
    )
    .await;

    let empty = app
        .patch_json("/api/admin/events/owned-ev/owner", &json!({}), Some(&admin))
        .await;
    assert_eq!(empty.status(), StatusCode::BAD_REQUEST);

    let response = app
        .patch_json(
            "/api/admin/events/owned-ev/owner",
            &json!({ "email": "new@example.com", "newPassword": "new-pw" }),
            Some(&admin),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    // Old credentials are gone, new ones work.
    let old_login = app
        .post_json("/api/auth/login", &json!({ "email": "old@example.com", "password": "old-pw" }), None)
        .await;
    assert_eq!(old_login.status(), StatusCode::UNAUTHORIZED);
    app.login("new@example.com", "new-pw").await;
}

#[tokio::test]
async fn test_update_owner_email_conflict() {
    let app = TestApp::new().await;
    let admin = app.login_main_admin().await;

    app.post_json(
        "/api/admin/users",
        &json!({ "email": "taken@example.com", "password": "pw", "role": "event_admin" }),
        Some(&admin),
    )
    .await;
    app.post_json(
        "/api/admin/events",
        &json!({ "slug": "conflict-ev", "name": "C", "ownerEmail": "own4@example.com", "ownerPassword": "pw" }),
        Some(&admin),
    )
    .await;

    let response = app
        .patch_json(
            "/api/admin/events/conflict-ev/owner",
            &json!({ "email": "taken@example.com" }),
            Some(&admin),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_event_deletion_cascades_to_guests_and_rsvps() {
    let app = TestApp::new().await;
    let admin = app.login_main_admin().await;

    app.post_json("/api/admin/events", &json!({ "slug": "doomed", "name": "Doomed" }), Some(&admin))
        .await;
    let guest = parse_body(
        app.post_json("/api/admin/events/doomed/guests", &json!({ "name": "Mia" }), Some(&admin))
            .await,
    )
    .await;
    app.post_json(
        "/api/events/doomed/rsvp",
        &json!({ "guestId": guest["id"], "guestName": "Mia", "attendance": "yes" }),
        None,
    )
    .await;

    let delete = app.delete("/api/admin/events/doomed", Some(&admin)).await;
    assert_eq!(delete.status(), StatusCode::OK);

    let guests: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM guests")
        .fetch_one(&app.pool)
        .await
        .unwrap();
    let rsvps: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM rsvps")
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(guests, 0);
    assert_eq!(rsvps, 0);
}
