mod common;

use axum::http::StatusCode;
use common::{parse_body, TestApp};
use serde_json::json;

async fn setup_event(app: &TestApp, admin: &str, slug: &str) {
    let response = app
        .post_json("/api/admin/events", &json!({ "slug": slug, "name": slug }), Some(admin))
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_public_rsvp_without_guest_link() {
    let app = TestApp::new().await;
    let admin = app.login_main_admin().await;
    setup_event(&app, &admin, "open-party").await;

    let response = app
        .post_json(
            "/api/events/open-party/rsvp",
            &json!({
                "guestName": "Walk-in Wanda",
                "attendance": "yes",
                "extraGuests": 1,
                "favoriteSongs": ["Dancing Queen", "Mr. Brightside"],
                "message": "See you there!"
            }),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = parse_body(response).await;
    assert_eq!(body["success"], true);

    let rows = parse_body(app.get("/api/admin/events/open-party/rsvps", Some(&admin)).await).await;
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert!(rows[0]["guestId"].is_null());
    assert_eq!(rows[0]["song1"], "Dancing Queen");
    assert_eq!(rows[0]["song2"], "Mr. Brightside");
}

#[tokio::test]
async fn test_rsvp_validation() {
    let app = TestApp::new().await;
    let admin = app.login_main_admin().await;
    setup_event(&app, &admin, "strict").await;

    let missing_attendance = app
        .post_json("/api/events/strict/rsvp", &json!({ "guestName": "Kai" }), None)
        .await;
    assert_eq!(missing_attendance.status(), StatusCode::BAD_REQUEST);

    let missing_name = app
        .post_json("/api/events/strict/rsvp", &json!({ "attendance": "yes" }), None)
        .await;
    assert_eq!(missing_name.status(), StatusCode::BAD_REQUEST);

    let bad_attendance = app
        .post_json(
            "/api/events/strict/rsvp",
            &json!({ "guestName": "Kai", "attendance": "maybe" }),
            None,
        )
        .await;
    assert_eq!(bad_attendance.status(), StatusCode::BAD_REQUEST);

    let negative_extras = app
        .post_json(
            "/api/events/strict/rsvp",
            &json!({ "guestName": "Kai", "attendance": "yes", "extraGuests": -1 }),
            None,
        )
        .await;
    assert_eq!(negative_extras.status(), StatusCode::BAD_REQUEST);

    let unknown_event = app
        .post_json(
            "/api/events/nope/rsvp",
            &json!({ "guestName": "Kai", "attendance": "yes" }),
            None,
        )
        .await;
    assert_eq!(unknown_event.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_extra_guest_cap_is_enforced_for_dedicated_links() {
    let app = TestApp::new().await;
    let admin = app.login_main_admin().await;
    setup_event(&app, &admin, "capped").await;

    let guest = parse_body(
        app.post_json(
            "/api/admin/events/capped/guests",
            &json!({ "name": "Mia", "maxExtraGuests": 1 }),
            Some(&admin),
        )
        .await,
    )
    .await;

    let over_cap = app
        .post_json(
            "/api/events/capped/rsvp",
            &json!({ "guestId": guest["id"], "guestName": "Mia", "attendance": "yes", "extraGuests": 3 }),
            None,
        )
        .await;
    assert_eq!(over_cap.status(), StatusCode::BAD_REQUEST);

    let at_cap = app
        .post_json(
            "/api/events/capped/rsvp",
            &json!({ "guestId": guest["id"], "guestName": "Mia", "attendance": "yes", "extraGuests": 1 }),
            None,
        )
        .await;
    assert_eq!(at_cap.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_rsvp_status_reflects_submission() {
    let app = TestApp::new().await;
    let admin = app.login_main_admin().await;
    setup_event(&app, &admin, "status-ev").await;

    let guest = parse_body(
        app.post_json("/api/admin/events/status-ev/guests", &json!({ "name": "Pia" }), Some(&admin))
            .await,
    )
    .await;
    let guest_id = guest["id"].as_str().unwrap();
    let token = guest["token"].as_str().unwrap();

    let before = parse_body(
        app.get(&format!("/api/events/status-ev/rsvp-status?guestId={}", guest_id), None)
            .await,
    )
    .await;
    assert_eq!(before["found"], false);

    app.post_json(
        "/api/events/status-ev/rsvp",
        &json!({ "guestId": guest_id, "guestName": "Pia", "attendance": "yes" }),
        None,
    )
    .await;

    // Both the row id and the invite token resolve the guest.
    for key in [guest_id, token] {
        let after = parse_body(
            app.get(&format!("/api/events/status-ev/rsvp-status?guestId={}", key), None)
                .await,
        )
        .await;
        assert_eq!(after["found"], true);
    }

    let no_param = parse_body(app.get("/api/events/status-ev/rsvp-status", None).await).await;
    assert_eq!(no_param["found"], false);
}

#[tokio::test]
async fn test_attending_count_includes_partner_and_extras() {
    let app = TestApp::new().await;
    let admin = app.login_main_admin().await;
    setup_event(&app, &admin, "headcount").await;

    app.post_json(
        "/api/events/headcount/rsvp",
        &json!({ "guestName": "Mia", "partnerName": "Sam", "attendance": "yes", "extraGuests": 2 }),
        None,
    )
    .await;

    let detail = parse_body(app.get("/api/admin/events/headcount", Some(&admin)).await).await;
    // 1 (self) + 1 (partner) + 2 (extras)
    assert_eq!(detail["comingCount"], 4);
    assert_eq!(detail["rsvpCount"], 1);

    // A "no" with a partner contributes nothing.
    app.post_json(
        "/api/events/headcount/rsvp",
        &json!({ "guestName": "Uwe", "partnerName": "Ada", "attendance": "no", "extraGuests": 5 }),
        None,
    )
    .await;

    let detail = parse_body(app.get("/api/admin/events/headcount", Some(&admin)).await).await;
    assert_eq!(detail["comingCount"], 4);
    assert_eq!(detail["rsvpCount"], 2);
}

#[tokio::test]
async fn test_repeat_submissions_create_separate_rows() {
    let app = TestApp::new().await;
    let admin = app.login_main_admin().await;
    setup_event(&app, &admin, "dup-ev").await;

    let guest = parse_body(
        app.post_json("/api/admin/events/dup-ev/guests", &json!({ "name": "Rene" }), Some(&admin))
            .await,
    )
    .await;

    for _ in 0..2 {
        let response = app
            .post_json(
                "/api/events/dup-ev/rsvp",
                &json!({ "guestId": guest["id"], "guestName": "Rene", "attendance": "yes" }),
                None,
            )
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let rows = parse_body(app.get("/api/admin/events/dup-ev/rsvps", Some(&admin)).await).await;
    assert_eq!(rows.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_end_to_end_dedicated_link_flow() {
    let app = TestApp::new().await;
    let admin = app.login_main_admin().await;
    setup_event(&app, &admin, "a-b").await;

    let guest = parse_body(
        app.post_json(
            "/api/admin/events/a-b/guests",
            &json!({ "name": "Mia", "maxExtraGuests": 1 }),
            Some(&admin),
        )
        .await,
    )
    .await;
    let guest_id = guest["id"].as_str().unwrap();
    let token = guest["token"].as_str().unwrap();

    let lookup = app.get(&format!("/api/events/a-b/guest/{}", token), None).await;
    assert_eq!(lookup.status(), StatusCode::OK);
    assert_eq!(parse_body(lookup).await["name"], "Mia");

    let opened_uri = format!("/api/events/a-b/guest/{}/opened", token);
    app.post_json(&opened_uri, &json!({}), None).await;
    let list = parse_body(app.get("/api/admin/events/a-b/guests", Some(&admin)).await).await;
    let opened_at = list[0]["firstOpenedAt"].as_str().unwrap().to_string();
    app.post_json(&opened_uri, &json!({}), None).await;
    let list = parse_body(app.get("/api/admin/events/a-b/guests", Some(&admin)).await).await;
    assert_eq!(list[0]["firstOpenedAt"].as_str().unwrap(), opened_at);

    let rsvp = app
        .post_json(
            "/api/events/a-b/rsvp",
            &json!({ "guestId": guest_id, "guestName": "Mia", "attendance": "yes", "extraGuests": 1 }),
            None,
        )
        .await;
    assert_eq!(rsvp.status(), StatusCode::CREATED);

    let status = parse_body(
        app.get(&format!("/api/events/a-b/rsvp-status?guestId={}", guest_id), None)
            .await,
    )
    .await;
    assert_eq!(status["found"], true);

    let list = parse_body(app.get("/api/admin/events/a-b/guests", Some(&admin)).await).await;
    assert_eq!(list[0]["hasRsvp"], true);
}
