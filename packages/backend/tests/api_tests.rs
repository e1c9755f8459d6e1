use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

mod common;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_root_banner() {
    let app = common::create_test_app();

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["ok"], json!(true));
    assert_eq!(body["service"], json!("tutor-backend"));
    assert!(body["uptime_seconds"].is_u64());
}

#[tokio::test]
async fn test_practice_next_for_new_user_suggests_skills() {
    let app = common::create_test_app();

    let response = app
        .oneshot(post_json(
            "/api/practice/next",
            json!({"user_id": "fresh", "context": "Restaurant", "limit": 6}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let plan = body_json(response).await;
    assert_eq!(plan["due"].as_array().unwrap().len(), 0);
    assert_eq!(plan["weak"].as_array().unwrap().len(), 0);
    assert_eq!(plan["new"].as_array().unwrap().len(), 3);
    assert_eq!(plan["new"][0], json!("phrase:table_for_two"));
    assert!(plan["scenario_prompt"]
        .as_str()
        .unwrap()
        .starts_with("You want a table for two"));
}

#[tokio::test]
async fn test_practice_next_rejects_out_of_range_limit() {
    let app = common::create_test_app();

    let response = app
        .oneshot(post_json(
            "/api/practice/next",
            json!({"user_id": "demo", "limit": 21}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["code"], json!("VALIDATION_ERROR"));
}

#[tokio::test]
async fn test_update_then_list_and_plan() {
    let app = common::create_test_app();

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/skills/update",
            json!({
                "user_id": "alice",
                "updates": [
                    {"skill_id": "phrase:check_in", "quality": 5},
                    {"skill_id": "vocab:overweight_bag", "quality": 1}
                ]
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], json!(true));
    let updated = body["data"].as_array().unwrap();
    assert_eq!(updated.len(), 2);
    assert_eq!(updated[0]["interval_days"], json!(2));
    assert_eq!(updated[1]["mistakes"], json!(1));

    // Listing orders by next_due ascending: the failed skill retries in 8h,
    // the passed one in 2 days.
    let response = app.clone().oneshot(get("/api/skills/alice")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let records = body_json(response).await;
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["skill_id"], json!("vocab:overweight_bag"));
    assert_eq!(records[1]["skill_id"], json!("phrase:check_in"));

    // Neither skill is due yet, so both land in the weak bucket and the
    // airport suggestions skip the two tracked ids.
    let response = app
        .oneshot(post_json(
            "/api/practice/next",
            json!({"user_id": "alice", "context": "Airport", "limit": 5}),
        ))
        .await
        .unwrap();
    let plan = body_json(response).await;
    assert_eq!(plan["due"].as_array().unwrap().len(), 0);
    assert_eq!(plan["weak"].as_array().unwrap().len(), 2);
    assert_eq!(plan["new"], json!(["phrase:rebook_flight"]));
}

#[tokio::test]
async fn test_quality_out_of_range_is_clamped_not_rejected() {
    let app = common::create_test_app();

    let response = app
        .oneshot(post_json(
            "/api/skills/update",
            json!({"user_id": "bob", "updates": [{"skill_id": "vocab:refund", "quality": 9}]}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    // Clamped to 5: a success with the maximal ease gain.
    assert_eq!(body["data"][0]["streak"], json!(1));
    assert_eq!(body["data"][0]["interval_days"], json!(2));
}

#[tokio::test]
async fn test_profile_defaults_then_update() {
    let app = common::create_test_app();

    let response = app.clone().oneshot(get("/api/profile/carol")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let profile = body_json(response).await;
    assert_eq!(profile["level"], json!("Beginner"));
    assert_eq!(profile["daily_minutes_goal"], json!(10));
    assert_eq!(profile["focus_contexts"], json!(["Airport", "Restaurant"]));

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::PUT)
                .uri("/api/profile/carol")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({"level": "Advanced", "daily_minutes_goal": 20}).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["level"], json!("Advanced"));
    assert_eq!(updated["daily_minutes_goal"], json!(20));
}

#[tokio::test]
async fn test_activity_log_feeds_progress() {
    let app = common::create_test_app();

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/activity/log",
            json!({"user_id": "dave", "context": "Office", "minutes": 4, "turns": 6}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get("/api/progress/dave")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let progress = body_json(response).await;
    assert_eq!(progress["today_minutes"], json!(4));
    assert_eq!(progress["week_minutes"], json!(4));
    assert_eq!(progress["daily_goal"], json!(10));
    assert!((progress["daily_pct"].as_f64().unwrap() - 0.4).abs() < 1e-9);
}

#[tokio::test]
async fn test_activity_log_rejects_out_of_range_entry() {
    let app = common::create_test_app();

    let response = app
        .oneshot(post_json(
            "/api/activity/log",
            json!({"user_id": "dave", "minutes": 1000}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
