//! Integration tests for the member routes
//!
//! Runs the real application factory against in-memory collaborators:
//! the mock repository, the mock mail service, and the actual
//! in-process code store.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{test, web};

use sn_api::app::create_app;
use sn_api::dto::member::{MemberResponse, SendCodeResponse, VerifyCodeResponse};
use sn_api::routes::member::AppState;
use sn_core::services::member::{EmailVerificationResult, MemberService};
use sn_core::services::password::PasswordService;
use sn_core::services::token::{TokenService, TokenServiceConfig};
use sn_core::repositories::MockMemberRepository;
use sn_infra::cache::InMemoryAuthCodeStore;
use sn_infra::mail::MockMailService;

const CODE_TTL_MILLIS: u64 = 300_000;

struct TestContext {
    state: web::Data<AppState<MockMemberRepository, MockMailService, InMemoryAuthCodeStore>>,
    store: Arc<InMemoryAuthCodeStore>,
    tokens: Arc<TokenService>,
}

fn test_context() -> TestContext {
    let repository = Arc::new(MockMemberRepository::new());
    let mail = Arc::new(MockMailService::with_options(false, false));
    let store = Arc::new(InMemoryAuthCodeStore::new(CODE_TTL_MILLIS));
    let tokens = Arc::new(TokenService::new(TokenServiceConfig {
        jwt_secret: "test-secret".to_string(),
        token_expiry_seconds: 3600,
    }));

    let member_service = Arc::new(MemberService::new(
        repository,
        mail,
        Arc::clone(&store),
        PasswordService::with_cost(4),
        Arc::clone(&tokens),
    ));

    TestContext {
        state: web::Data::new(AppState { member_service }),
        store,
        tokens,
    }
}

fn join_body(email: &str) -> serde_json::Value {
    serde_json::json!({
        "email": email,
        "password": "hunter2!",
        "name": "Ari",
        "birth": "1995-06-14",
        "phone": "010-1234-5678",
        "gender": "other"
    })
}

#[actix_rt::test]
async fn test_health_endpoint() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_rt::test]
async fn test_send_code_then_verify() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/members/email-verification")
        .set_json(serde_json::json!({ "email": "a@x.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: SendCodeResponse = test::read_body_json(resp).await;
    assert!(body.message_id.starts_with("mock_"));

    // The code is stored under the scoped key.
    let code = ctx
        .store
        .get_code("AuthCode a@x.com")
        .await
        .expect("code should be stored");

    let req = test::TestRequest::post()
        .uri("/api/v1/members/verify-code")
        .set_json(serde_json::json!({ "email": "a@x.com", "code": code }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: VerifyCodeResponse = test::read_body_json(resp).await;
    assert_eq!(body.result, EmailVerificationResult::Match);
}

#[actix_rt::test]
async fn test_verify_code_mismatch_and_not_found() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    // No code was ever sent for this address.
    let req = test::TestRequest::post()
        .uri("/api/v1/members/verify-code")
        .set_json(serde_json::json!({ "email": "b@x.com", "code": "000000" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: VerifyCodeResponse = test::read_body_json(resp).await;
    assert_eq!(body.result, EmailVerificationResult::CodeNotFound);

    // Send, then submit a code that cannot match.
    let req = test::TestRequest::post()
        .uri("/api/v1/members/email-verification")
        .set_json(serde_json::json!({ "email": "b@x.com" }))
        .to_request();
    test::call_service(&app, req).await;

    let stored = ctx.store.get_code("AuthCode b@x.com").await.unwrap();
    let wrong = if stored == "000000" { "000001" } else { "000000" };

    let req = test::TestRequest::post()
        .uri("/api/v1/members/verify-code")
        .set_json(serde_json::json!({ "email": "b@x.com", "code": wrong }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: VerifyCodeResponse = test::read_body_json(resp).await;
    assert_eq!(body.result, EmailVerificationResult::Mismatch);
}

#[actix_rt::test]
async fn test_send_code_conflicts_for_registered_email() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/members/join")
        .set_json(join_body("a@x.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/api/v1/members/email-verification")
        .set_json(serde_json::json!({ "email": "a@x.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    // No code was written on the reject path.
    assert_eq!(ctx.store.get_code("AuthCode a@x.com").await, None);
}

#[actix_rt::test]
async fn test_send_code_rejects_malformed_email() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/members/email-verification")
        .set_json(serde_json::json!({ "email": "not-an-email" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn test_join_me_taste_withdraw_flow() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    // Register.
    let req = test::TestRequest::post()
        .uri("/api/v1/members/join")
        .set_json(join_body("a@x.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: MemberResponse = test::read_body_json(resp).await;
    assert_eq!(body.email, "a@x.com");

    let token = ctx.tokens.generate_token("a@x.com").unwrap();
    let bearer = format!("Bearer {}", token);

    // Profile lookup.
    let req = test::TestRequest::get()
        .uri("/api/v1/members/me")
        .insert_header(("Authorization", bearer.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: MemberResponse = test::read_body_json(resp).await;
    assert_eq!(body.name, "Ari");
    assert_eq!(body.taste, None);

    // Taste update.
    let req = test::TestRequest::patch()
        .uri("/api/v1/members/me/taste")
        .insert_header(("Authorization", bearer.clone()))
        .set_json(serde_json::json!({ "taste": "sweet, citrusy" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: MemberResponse = test::read_body_json(resp).await;
    assert_eq!(body.taste.as_deref(), Some("sweet, citrusy"));

    // Withdraw, then the account is gone.
    let req = test::TestRequest::delete()
        .uri("/api/v1/members/me")
        .insert_header(("Authorization", bearer.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get()
        .uri("/api/v1/members/me")
        .insert_header(("Authorization", bearer))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn test_protected_routes_require_token() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/members/me")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::delete()
        .uri("/api/v1/members/me")
        .insert_header(("Authorization", "Bearer garbage-token"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
