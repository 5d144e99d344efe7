use actix_web::{web, HttpResponse};

use sn_core::repositories::MemberRepository;
use sn_core::services::member::{CodeStoreTrait, MailServiceTrait};

use crate::dto::member::MemberResponse;
use crate::handlers::to_error_response;
use crate::middleware::BearerToken;

use super::AppState;

/// Handler for GET /api/v1/members/me
///
/// Returns the member record the bearer token resolves to.
pub async fn me<M, S, C>(
    state: web::Data<AppState<M, S, C>>,
    token: BearerToken,
) -> HttpResponse
where
    M: MemberRepository + 'static,
    S: MailServiceTrait + 'static,
    C: CodeStoreTrait + 'static,
{
    match state.member_service.find_by_token(token.as_str()).await {
        Ok(member) => HttpResponse::Ok().json(MemberResponse::from(member)),
        Err(error) => to_error_response(&error),
    }
}
