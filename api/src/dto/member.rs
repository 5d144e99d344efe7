use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use sn_core::domain::entities::member::{Gender, LoginType, Member, Role};
use sn_core::services::member::EmailVerificationResult;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendCodeRequest {
    /// Email address to send the verification code to
    #[validate(email)]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyCodeRequest {
    /// Email address the code was sent to
    #[validate(email)]
    pub email: String,

    /// 6-digit verification code
    #[validate(length(equal = 6))]
    pub code: String,
}

/// Registration payload
///
/// `password` is optional: signups without one land in the pending
/// federated state, so no length rule is enforced here.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct JoinRequest {
    #[validate(email)]
    pub email: String,

    pub password: Option<String>,

    #[validate(length(min = 1, max = 50))]
    pub name: String,

    /// Date of birth (YYYY-MM-DD)
    pub birth: NaiveDate,

    #[validate(length(min = 7, max = 20))]
    pub phone: String,

    pub gender: Gender,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateTasteRequest {
    /// Free-form taste preference
    #[validate(length(min = 1, max = 500))]
    pub taste: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendCodeResponse {
    pub message: String,
    pub message_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyCodeResponse {
    pub result: EmailVerificationResult,
}

/// Public view of a member record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberResponse {
    pub email: String,
    pub name: String,
    pub birth: NaiveDate,
    pub phone: String,
    pub gender: Gender,
    pub role: Option<Role>,
    pub login_type: Option<LoginType>,
    pub taste: Option<String>,
}

impl From<Member> for MemberResponse {
    fn from(member: Member) -> Self {
        Self {
            email: member.email,
            name: member.name,
            birth: member.birth,
            phone: member.phone,
            gender: member.gender,
            role: member.role,
            login_type: member.login_type,
            taste: member.taste,
        }
    }
}
