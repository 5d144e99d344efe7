//! Member routes
//!
//! One handler per file, all generic over the collaborator traits so
//! tests can run the full HTTP surface against in-memory
//! implementations.

pub mod join;
pub mod me;
pub mod send_code;
pub mod taste;
pub mod verify_code;
pub mod withdraw;

use std::sync::Arc;

use sn_core::repositories::MemberRepository;
use sn_core::services::member::{CodeStoreTrait, MailServiceTrait, MemberService};

/// Application state that holds the shared member service
pub struct AppState<M, S, C>
where
    M: MemberRepository,
    S: MailServiceTrait,
    C: CodeStoreTrait,
{
    pub member_service: Arc<MemberService<M, S, C>>,
}
