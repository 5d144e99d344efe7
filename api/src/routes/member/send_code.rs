use actix_web::{web, HttpResponse};
use validator::Validate;

use sn_core::repositories::MemberRepository;
use sn_core::services::member::{CodeStoreTrait, MailServiceTrait};
use sn_shared::utils::validation::mask_email;

use crate::dto::member::{SendCodeRequest, SendCodeResponse};
use crate::handlers::{to_error_response, validation_error_response};

use super::AppState;

/// Handler for POST /api/v1/members/email-verification
///
/// Sends a verification code to the given email address.
///
/// # Responses
/// * `200` - Code sent
/// * `400` - Malformed email
/// * `409` - Email already belongs to a member
/// * `503` - Mail provider failure
pub async fn send_code<M, S, C>(
    state: web::Data<AppState<M, S, C>>,
    request: web::Json<SendCodeRequest>,
) -> HttpResponse
where
    M: MemberRepository + 'static,
    S: MailServiceTrait + 'static,
    C: CodeStoreTrait + 'static,
{
    if let Err(errors) = request.0.validate() {
        return validation_error_response(&errors);
    }

    log::info!(
        "Sending verification code to: {}",
        mask_email(&request.email)
    );

    match state
        .member_service
        .send_verification_email(&request.email)
        .await
    {
        Ok(result) => HttpResponse::Ok().json(SendCodeResponse {
            message: "Verification code sent successfully".to_string(),
            message_id: result.message_id,
        }),
        Err(error) => to_error_response(&error),
    }
}
