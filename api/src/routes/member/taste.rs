use actix_web::{web, HttpResponse};
use validator::Validate;

use sn_core::repositories::MemberRepository;
use sn_core::services::member::{CodeStoreTrait, MailServiceTrait};

use crate::dto::member::{MemberResponse, UpdateTasteRequest};
use crate::handlers::{to_error_response, validation_error_response};
use crate::middleware::BearerToken;

use super::AppState;

/// Handler for PATCH /api/v1/members/me/taste
///
/// Overwrites the taste preference of the member the bearer token
/// resolves to; no other attribute changes.
pub async fn update_taste<M, S, C>(
    state: web::Data<AppState<M, S, C>>,
    token: BearerToken,
    request: web::Json<UpdateTasteRequest>,
) -> HttpResponse
where
    M: MemberRepository + 'static,
    S: MailServiceTrait + 'static,
    C: CodeStoreTrait + 'static,
{
    if let Err(errors) = request.0.validate() {
        return validation_error_response(&errors);
    }

    match state
        .member_service
        .update_taste(token.as_str(), &request.taste)
        .await
    {
        Ok(member) => HttpResponse::Ok().json(MemberResponse::from(member)),
        Err(error) => to_error_response(&error),
    }
}
