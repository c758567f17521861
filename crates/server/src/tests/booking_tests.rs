// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;

use super::{
    assert_error, create_item, create_test_app, create_user, hours_from_now, send, send_request,
};

async fn book(app: &Router, booker_id: i64, item_id: i64) -> i64 {
    let (status, body) = send(
        app,
        "POST",
        "/bookings",
        Some(booker_id),
        Some(json!({
            "itemId": item_id,
            "start": hours_from_now(24),
            "end": hours_from_now(48),
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["status"], json!("WAITING"));
    body["id"].as_i64().unwrap()
}

#[tokio::test]
async fn test_booking_decision_flow() {
    let (_, app) = create_test_app();
    let owner_id: i64 = create_user(&app, "Owner").await;
    let booker_id: i64 = create_user(&app, "Booker").await;
    let stranger_id: i64 = create_user(&app, "Stranger").await;
    let item_id: i64 = create_item(&app, owner_id, "Drill").await;
    let booking_id: i64 = book(&app, booker_id, item_id).await;
    let uri: String = format!("/bookings/{booking_id}");

    let (status, body) = send(&app, "GET", &uri, Some(booker_id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["item"], json!({"id": item_id, "name": "Drill"}));
    assert_eq!(body["booker"], json!({"id": booker_id, "name": "Booker"}));

    let (status, _) = send(&app, "GET", &uri, Some(stranger_id), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let approve: String = format!("{uri}?approved=true");
    let (status, _) = send(&app, "PATCH", &approve, Some(booker_id), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send(&app, "PATCH", &approve, Some(owner_id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("APPROVED"));

    let (status, body) = send(
        &app,
        "PATCH",
        &format!("{uri}?approved=false"),
        Some(owner_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], json!(true));
}

#[tokio::test]
async fn test_owner_cannot_book_own_item() {
    let (_, app) = create_test_app();
    let owner_id: i64 = create_user(&app, "Owner").await;
    let item_id: i64 = create_item(&app, owner_id, "Drill").await;

    let (status, body) = send(
        &app,
        "POST",
        "/bookings",
        Some(owner_id),
        Some(json!({"itemId": item_id, "start": hours_from_now(1), "end": hours_from_now(2)})),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_error(&body, "Owner can not book his item!");
}

#[tokio::test]
async fn test_booking_in_the_past_is_bad_request() {
    let (_, app) = create_test_app();
    let owner_id: i64 = create_user(&app, "Owner").await;
    let booker_id: i64 = create_user(&app, "Booker").await;
    let item_id: i64 = create_item(&app, owner_id, "Drill").await;

    let (status, body) = send(
        &app,
        "POST",
        "/bookings",
        Some(booker_id),
        Some(json!({"itemId": item_id, "start": hours_from_now(-5), "end": hours_from_now(2)})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error(&body, "Invalid start time of booking!");
}

#[tokio::test]
async fn test_booking_listings() {
    let (_, app) = create_test_app();
    let owner_id: i64 = create_user(&app, "Owner").await;
    let booker_id: i64 = create_user(&app, "Booker").await;
    let item_id: i64 = create_item(&app, owner_id, "Drill").await;

    let (status, body) = send(&app, "GET", "/bookings", Some(booker_id), None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_error(&body, "User does not have bookings!");

    let booking_id: i64 = book(&app, booker_id, item_id).await;

    let (status, body) = send(&app, "GET", "/bookings?state=FUTURE", Some(booker_id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["id"], json!(booking_id));

    let (status, body) = send(
        &app,
        "GET",
        "/bookings/owner?state=PAST",
        Some(owner_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, body) = send(
        &app,
        "GET",
        "/bookings/owner?state=UNSUPPORTED_STATUS",
        Some(owner_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error(&body, "Unknown state: UNSUPPORTED_STATUS");
}

#[tokio::test]
async fn test_non_numeric_identity_is_unauthorized() {
    let (_, app) = create_test_app();
    let request: Request<Body> = Request::builder()
        .method("GET")
        .uri("/bookings")
        .header("X-Sharer-User-Id", "abc")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send_request(&app, request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_error(&body, "Invalid X-Sharer-User-Id header: abc");
}
