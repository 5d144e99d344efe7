use actix_web::{web, HttpResponse};
use validator::Validate;

use sn_core::domain::value_objects::member_registration::MemberRegistration;
use sn_core::repositories::MemberRepository;
use sn_core::services::member::{CodeStoreTrait, MailServiceTrait};
use sn_shared::utils::validation::mask_email;

use crate::dto::member::{JoinRequest, MemberResponse};
use crate::handlers::{to_error_response, validation_error_response};

use super::AppState;

/// Handler for POST /api/v1/members/join
///
/// Registers a new member. A request with a non-empty password becomes
/// a native-login account; without one, the member is persisted in the
/// pending federated state.
pub async fn join<M, S, C>(
    state: web::Data<AppState<M, S, C>>,
    request: web::Json<JoinRequest>,
) -> HttpResponse
where
    M: MemberRepository + 'static,
    S: MailServiceTrait + 'static,
    C: CodeStoreTrait + 'static,
{
    if let Err(errors) = request.0.validate() {
        return validation_error_response(&errors);
    }

    log::info!("Registering member: {}", mask_email(&request.email));

    let request = request.into_inner();
    let registration = MemberRegistration {
        email: request.email,
        password: request.password,
        name: request.name,
        birth: request.birth,
        phone: request.phone,
        gender: request.gender,
    };

    match state.member_service.register_member(registration).await {
        Ok(member) => HttpResponse::Created().json(MemberResponse::from(member)),
        Err(error) => to_error_response(&error),
    }
}
