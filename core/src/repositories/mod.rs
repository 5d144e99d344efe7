pub mod member;

pub use member::MemberRepository;
pub use member::mock::MockMemberRepository;
