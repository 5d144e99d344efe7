//! Request and response data transfer objects.

pub mod member;

pub use member::{
    JoinRequest, MemberResponse, SendCodeRequest, SendCodeResponse,
    UpdateTasteRequest, VerifyCodeRequest, VerifyCodeResponse,
};
