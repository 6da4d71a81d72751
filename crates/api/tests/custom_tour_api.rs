//! HTTP-level tests for custom tour requests.

mod common;

use axum::http::StatusCode;
use axum::Router;
use common::{
    admin_token, body_json, build_test_app, create_tour, error_fields, get_auth, itinerary_body,
    post_json, post_json_auth, put_json_auth,
};
use serde_json::{json, Value};

fn request_body() -> Value {
    json!({
        "firstName": "Maya",
        "lastName": "Chen",
        "email": "maya@example.com",
        "duration": 10,
        "groupSize": 2,
        "budget": 6000,
        "interests": ["Photography", "Monasteries"],
        "accommodationType": "luxury",
        "transportPreference": "private"
    })
}

async fn submit(app: &Router) -> i64 {
    let response = post_json(app, "/api/custom-tours", request_body()).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

#[tokio::test]
async fn submission_starts_pending_with_empty_admin_fields() {
    let app = build_test_app();
    let response = post_json(&app, "/api/custom-tours", request_body()).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let request = body_json(response).await;
    assert_eq!(request["status"], "pending");
    assert_eq!(request["destinations"], json!([]));
    assert_eq!(request["interests"], json!(["Photography", "Monasteries"]));
    assert_eq!(request["adminNotes"], Value::Null);
    assert_eq!(request["assignedItineraryId"], Value::Null);
}

#[tokio::test]
async fn submission_is_validated() {
    let app = build_test_app();
    let mut body = request_body();
    body["duration"] = json!(0);
    body["accommodationType"] = json!("tent");
    body["transportPreference"] = json!("helicopter");

    let response = post_json(&app, "/api/custom-tours", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        error_fields(&body_json(response).await),
        vec!["duration", "accommodationType", "transportPreference"]
    );
}

#[tokio::test]
async fn admin_moves_request_through_statuses() {
    let app = build_test_app();
    let token = admin_token(&app).await;
    let id = submit(&app).await;
    let uri = format!("/api/custom-tours/{id}");

    let response = put_json_auth(
        &app,
        &uri,
        json!({ "status": "in_progress", "adminNotes": "Drafting route", "estimatedPrice": 5800 }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let request = body_json(response).await;
    assert_eq!(request["status"], "in_progress");
    assert_eq!(request["adminNotes"], "Drafting route");
    assert_eq!(request["estimatedPrice"], 5800);

    let response = put_json_auth(&app, &uri, json!({ "status": "pending" }), &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = put_json_auth(&app, &uri, json!({ "status": "lost" }), &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_fields(&body_json(response).await), vec!["status"]);

    let request = body_json(get_auth(&app, &uri, &token).await).await;
    assert_eq!(request["status"], "pending");
}

#[tokio::test]
async fn assigned_itinerary_must_exist() {
    let app = build_test_app();
    let token = admin_token(&app).await;
    let id = submit(&app).await;
    let uri = format!("/api/custom-tours/{id}");

    let response = put_json_auth(&app, &uri, json!({ "assignedItineraryId": 12 }), &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        error_fields(&body_json(response).await),
        vec!["assignedItineraryId"]
    );

    let tour_id = create_tour(&app, &token, "Bespoke", "Custom").await;
    let response = post_json_auth(&app, "/api/itineraries", itinerary_body(tour_id), &token).await;
    let itinerary = body_json(response).await["id"].as_i64().unwrap();

    let response = put_json_auth(
        &app,
        &uri,
        json!({ "assignedItineraryId": itinerary, "status": "approved" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["assignedItineraryId"], itinerary);
}

#[tokio::test]
async fn immutable_fields_are_rejected() {
    let app = build_test_app();
    let token = admin_token(&app).await;
    let id = submit(&app).await;

    let response = put_json_auth(
        &app,
        &format!("/api/custom-tours/{id}"),
        json!({ "createdAt": "2020-01-01T00:00:00Z" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_fields(&body_json(response).await), vec!["createdAt"]);
}

#[tokio::test]
async fn listing_and_missing_requests() {
    let app = build_test_app();
    let token = admin_token(&app).await;
    submit(&app).await;
    submit(&app).await;

    let list = body_json(get_auth(&app, "/api/custom-tours", &token).await).await;
    assert_eq!(list.as_array().unwrap().len(), 2);

    let response = get_auth(&app, "/api/custom-tours/99", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response =
        put_json_auth(&app, "/api/custom-tours/99", json!({ "status": "approved" }), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
