use actix_web::{web, HttpResponse};
use validator::Validate;

use sn_core::repositories::MemberRepository;
use sn_core::services::member::{CodeStoreTrait, MailServiceTrait};
use sn_shared::utils::validation::mask_email;

use crate::dto::member::{VerifyCodeRequest, VerifyCodeResponse};
use crate::handlers::{to_error_response, validation_error_response};

use super::AppState;

/// Handler for POST /api/v1/members/verify-code
///
/// Checks a submitted verification code. The three-way result tells
/// the client apart "wrong code" from "no code was ever sent".
pub async fn verify_code<M, S, C>(
    state: web::Data<AppState<M, S, C>>,
    request: web::Json<VerifyCodeRequest>,
) -> HttpResponse
where
    M: MemberRepository + 'static,
    S: MailServiceTrait + 'static,
    C: CodeStoreTrait + 'static,
{
    if let Err(errors) = request.0.validate() {
        return validation_error_response(&errors);
    }

    log::info!("Checking verification code for: {}", mask_email(&request.email));

    match state
        .member_service
        .verify_code(&request.email, &request.code)
        .await
    {
        Ok(result) => HttpResponse::Ok().json(VerifyCodeResponse { result }),
        Err(error) => to_error_response(&error),
    }
}
