//! Route tests for registration and email verification

#[macro_use]
mod common;

use actix_web::{http::StatusCode, test};
use serde_json::json;

use common::{body_json, TestContext};
use radar_shared::error_codes;

#[actix_web::test]
async fn test_register_send_verify_flow() {
    let ctx = TestContext::new();
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/v1/users")
        .set_json(json!({ "email": "User@X.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["email"], "user@x.com");
    assert_eq!(body["data"]["status"], "unverified");

    let req = test::TestRequest::post()
        .uri("/api/v1/verification/send?Email=user@x.com")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["data"]["email"], "user@x.com");
    assert_eq!(body["data"]["expires_in_minutes"], 10);
    assert!(body["data"].get("code").is_none());

    let code = ctx.notifier.last_code_for("user@x.com").await.unwrap();

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/verification/verify?Email=user@x.com&Code={}", code))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["data"]["user"]["status"], "verified");

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/verification/verify?email=user@x.com&code={}", code))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["error"]["code"], error_codes::VERIFICATION_CODE_INVALID);
}

#[actix_web::test]
async fn test_send_to_unknown_user_is_not_found() {
    let ctx = TestContext::new();
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/v1/verification/send?email=ghost@x.com")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(ctx.notifier.sent_count().await, 0);
}

#[actix_web::test]
async fn test_missing_email_is_validation_error() {
    let ctx = TestContext::new();
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/v1/verification/send?Email=%20")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["error"]["code"], error_codes::VALIDATION_ERROR);
    assert_eq!(body["error"]["field"], "email");
}

#[actix_web::test]
async fn test_notifier_failure_is_bad_gateway_and_leaves_no_code() {
    let ctx = TestContext::new();
    let app = init_app!(ctx);
    ctx.state.user_service.register("user@x.com").await.unwrap();
    ctx.notifier.set_should_fail(true);

    let req = test::TestRequest::post()
        .uri("/api/v1/verification/send?Email=user@x.com")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let body = body_json(resp).await;
    assert_eq!(body["error"]["code"], error_codes::NOTIFIER_FAILURE);

    let user = ctx.users.get("user@x.com").await.unwrap();
    assert!(user.verification_code.is_none());
}

#[actix_web::test]
async fn test_store_outage_is_service_unavailable() {
    let ctx = TestContext::new();
    let app = init_app!(ctx);
    ctx.users.set_unavailable(true);

    let req = test::TestRequest::post()
        .uri("/api/v1/verification/verify?Email=user@x.com&Code=123456")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = body_json(resp).await;
    assert_eq!(body["error"]["code"], error_codes::STORE_UNAVAILABLE);
}

#[actix_web::test]
async fn test_register_rejects_duplicates_and_bad_email() {
    let ctx = TestContext::new();
    let app = init_app!(ctx);

    let register = |email: &str| {
        test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(json!({ "email": email }))
            .to_request()
    };

    let resp = test::call_service(&app, register("a@x.com")).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = test::call_service(&app, register("A@x.com")).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let resp = test::call_service(&app, register("not-an-email")).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["error"]["field"], "email");
    assert_eq!(ctx.users.len().await, 1);
}
