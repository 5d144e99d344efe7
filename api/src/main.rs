use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::info;
use std::sync::Arc;

use sn_api::app::create_app;
use sn_api::routes::member::AppState;
use sn_core::services::member::MemberService;
use sn_core::services::password::PasswordService;
use sn_core::services::token::{TokenService, TokenServiceConfig};
use sn_infra::cache::InMemoryAuthCodeStore;
use sn_infra::database::{create_pool, MySqlMemberRepository};
use sn_infra::mail::create_mail_service;
use sn_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting SipNote API server");

    // Load configuration
    let config = AppConfig::from_env();
    let bind_address = config.server.bind_address();

    if config.jwt.is_using_default_secret() && config.environment.is_production() {
        panic!("JWT_SECRET must be configured in production");
    }

    // Wire up infrastructure
    let pool = create_pool(&config.database)
        .await
        .unwrap_or_else(|e| panic!("Failed to connect to database: {}", e));

    let member_repository = Arc::new(MySqlMemberRepository::new(pool));
    let mail_service = Arc::new(create_mail_service(&config.mail));
    let code_store = Arc::new(InMemoryAuthCodeStore::new(
        config.mail.auth_code_expiration_millis,
    ));
    let token_service = Arc::new(TokenService::new(TokenServiceConfig::from(&config.jwt)));

    let member_service = Arc::new(MemberService::new(
        member_repository,
        mail_service,
        code_store,
        PasswordService::new(),
        token_service,
    ));

    info!("Server will bind to: {}", bind_address);

    HttpServer::new(move || {
        let app_state = web::Data::new(AppState {
            member_service: Arc::clone(&member_service),
        });
        create_app(app_state)
    })
    .bind(&bind_address)?
    .run()
    .await
}
