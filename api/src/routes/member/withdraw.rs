use actix_web::{web, HttpResponse};

use sn_core::repositories::MemberRepository;
use sn_core::services::member::{CodeStoreTrait, MailServiceTrait};

use crate::handlers::to_error_response;
use crate::middleware::BearerToken;

use super::AppState;

/// Handler for DELETE /api/v1/members/me
///
/// Withdraws the account the bearer token resolves to. The member
/// record is deleted; subsequent lookups return 404.
pub async fn withdraw<M, S, C>(
    state: web::Data<AppState<M, S, C>>,
    token: BearerToken,
) -> HttpResponse
where
    M: MemberRepository + 'static,
    S: MailServiceTrait + 'static,
    C: CodeStoreTrait + 'static,
{
    match state.member_service.withdraw(token.as_str()).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(error) => to_error_response(&error),
    }
}
