//! Application factory
//!
//! Builds the Actix-web application with all routes and middleware.
//! The factory is generic over the collaborator traits so the same
//! surface runs against MySQL + Mailgun in production and in-memory
//! implementations in tests.

use actix_web::body::MessageBody;
use actix_web::{middleware::Logger, web, App, HttpResponse};

use crate::middleware::cors::create_cors;
use crate::routes::member::{
    join::join, me::me, send_code::send_code, taste::update_taste, verify_code::verify_code,
    withdraw::withdraw, AppState,
};

use sn_core::repositories::MemberRepository;
use sn_core::services::member::{CodeStoreTrait, MailServiceTrait};

/// Create and configure the application with all dependencies
pub fn create_app<M, S, C>(
    app_state: web::Data<AppState<M, S, C>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    M: MemberRepository + 'static,
    S: MailServiceTrait + 'static,
    C: CodeStoreTrait + 'static,
{
    let cors = create_cors();

    App::new()
        // Add application state
        .app_data(app_state)
        // Add middleware
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1").service(
                web::scope("/members")
                    .route("/email-verification", web::post().to(send_code::<M, S, C>))
                    .route("/verify-code", web::post().to(verify_code::<M, S, C>))
                    .route("/join", web::post().to(join::<M, S, C>))
                    .service(
                        web::resource("/me")
                            .route(web::get().to(me::<M, S, C>))
                            .route(web::delete().to(withdraw::<M, S, C>)),
                    )
                    .route("/me/taste", web::patch().to(update_taste::<M, S, C>)),
            ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "sipnote-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
