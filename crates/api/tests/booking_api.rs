//! HTTP-level tests for bookings and inquiries.

mod common;

use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use common::{
    admin_token, body_json, build_test_app, create_tour, error_fields, get_auth,
    patch_json_auth, post_json,
};
use serde_json::{json, Value};

fn booking_body(tour_id: i64) -> Value {
    json!({
        "tourId": tour_id,
        "firstName": "Sonam",
        "lastName": "Wangmo",
        "email": "sonam@example.com",
        "travelDate": "2025-10-12",
        "groupSize": 4
    })
}

async fn create_booking(app: &axum::Router, tour_id: i64) -> i64 {
    let response = post_json(app, "/api/bookings", booking_body(tour_id)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

async fn set_status(app: &axum::Router, token: &str, id: i64, status: &str) -> axum::response::Response {
    patch_json_auth(
        app,
        &format!("/api/bookings/{id}/status"),
        json!({ "status": status }),
        token,
    )
    .await
}

// ---------------------------------------------------------------------------
// Bookings
// ---------------------------------------------------------------------------

#[tokio::test]
async fn new_booking_starts_pending_with_creation_time() {
    let app = build_test_app();
    let token = admin_token(&app).await;
    let tour_id = create_tour(&app, &token, "Druk Path Trek", "Trekking").await;

    let before = Utc::now();
    let response = post_json(&app, "/api/bookings", booking_body(tour_id)).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let booking = body_json(response).await;
    assert_eq!(booking["status"], "pending");
    assert_eq!(booking["travelDate"], "2025-10-12");
    assert_eq!(booking["groupSize"], 4);
    assert_eq!(booking["phone"], Value::Null);

    let created_at: DateTime<Utc> = booking["createdAt"].as_str().unwrap().parse().unwrap();
    assert!(created_at >= before);
}

#[tokio::test]
async fn booking_for_unknown_tour_is_rejected() {
    let app = build_test_app();
    let response = post_json(&app, "/api/bookings", booking_body(404)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_fields(&body_json(response).await), vec!["tourId"]);
}

#[tokio::test]
async fn booking_input_is_validated() {
    let app = build_test_app();
    let token = admin_token(&app).await;
    let tour_id = create_tour(&app, &token, "Druk Path Trek", "Trekking").await;

    let mut body = booking_body(tour_id);
    body["email"] = json!("not-an-email");
    body["groupSize"] = json!(0);
    let response = post_json(&app, "/api/bookings", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        error_fields(&body_json(response).await),
        vec!["email", "groupSize"]
    );

    let mut body = booking_body(tour_id);
    body["travelDate"] = json!("12/10/2025");
    let response = post_json(&app, "/api/bookings", body).await;
    assert_eq!(error_fields(&body_json(response).await), vec!["travelDate"]);
}

#[tokio::test]
async fn admin_lists_and_reads_bookings() {
    let app = build_test_app();
    let token = admin_token(&app).await;
    let tour_id = create_tour(&app, &token, "Druk Path Trek", "Trekking").await;
    let first = create_booking(&app, tour_id).await;
    let second = create_booking(&app, tour_id).await;

    let list = body_json(get_auth(&app, "/api/bookings", &token).await).await;
    let ids: Vec<i64> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![first, second]);

    let response = get_auth(&app, &format!("/api/bookings/{second}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["id"], second);
}

#[tokio::test]
async fn approving_then_completing_a_booking() {
    let app = build_test_app();
    let token = admin_token(&app).await;
    let tour_id = create_tour(&app, &token, "Druk Path Trek", "Trekking").await;
    let id = create_booking(&app, tour_id).await;

    let response = set_status(&app, &token, id, "approved").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "approved");

    let response = set_status(&app, &token, id, "completed").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "completed");
}

#[tokio::test]
async fn unknown_status_is_rejected_and_booking_unchanged() {
    let app = build_test_app();
    let token = admin_token(&app).await;
    let tour_id = create_tour(&app, &token, "Druk Path Trek", "Trekking").await;
    let id = create_booking(&app, tour_id).await;

    let response = set_status(&app, &token, id, "teleported").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_fields(&body_json(response).await), vec!["status"]);

    let booking = body_json(get_auth(&app, &format!("/api/bookings/{id}"), &token).await).await;
    assert_eq!(booking["status"], "pending");
}

#[tokio::test]
async fn terminal_booking_cannot_be_reopened() {
    let app = build_test_app();
    let token = admin_token(&app).await;
    let tour_id = create_tour(&app, &token, "Druk Path Trek", "Trekking").await;
    let id = create_booking(&app, tour_id).await;

    assert_eq!(set_status(&app, &token, id, "rejected").await.status(), StatusCode::OK);

    let response = set_status(&app, &token, id, "approved").await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "CONFLICT");

    let booking = body_json(get_auth(&app, &format!("/api/bookings/{id}"), &token).await).await;
    assert_eq!(booking["status"], "rejected");
}

#[tokio::test]
async fn status_change_on_missing_booking_is_404() {
    let app = build_test_app();
    let token = admin_token(&app).await;

    let response = set_status(&app, &token, 7, "approved").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let list = body_json(get_auth(&app, "/api/bookings", &token).await).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn status_body_must_carry_status() {
    let app = build_test_app();
    let token = admin_token(&app).await;
    let tour_id = create_tour(&app, &token, "Druk Path Trek", "Trekking").await;
    let id = create_booking(&app, tour_id).await;

    let response =
        patch_json_auth(&app, &format!("/api/bookings/{id}/status"), json!({}), &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_fields(&body_json(response).await), vec!["status"]);
}

// ---------------------------------------------------------------------------
// Inquiries
// ---------------------------------------------------------------------------

#[tokio::test]
async fn inquiry_starts_new_and_follows_up() {
    let app = build_test_app();
    let token = admin_token(&app).await;

    let response = post_json(
        &app,
        "/api/inquiries",
        json!({
            "firstName": "Tashi",
            "lastName": "Dorji",
            "email": "tashi@example.com",
            "groupSize": "4-6 people",
            "message": "Is October a good month?"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let inquiry = body_json(response).await;
    assert_eq!(inquiry["status"], "new");
    assert_eq!(inquiry["groupSize"], "4-6 people");
    let id = inquiry["id"].as_i64().unwrap();

    let response = patch_json_auth(
        &app,
        &format!("/api/inquiries/{id}/status"),
        json!({ "status": "contacted" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "contacted");

    let response = patch_json_auth(
        &app,
        &format!("/api/inquiries/{id}/status"),
        json!({ "status": "archived" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let list = body_json(get_auth(&app, "/api/inquiries", &token).await).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["status"], "contacted");
}

#[tokio::test]
async fn inquiry_requires_contact_fields() {
    let app = build_test_app();
    let response = post_json(&app, "/api/inquiries", json!({ "message": "hello" })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        error_fields(&body_json(response).await),
        vec!["firstName", "lastName", "email"]
    );
}
