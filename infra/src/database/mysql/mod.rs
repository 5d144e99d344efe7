//! MySQL repository implementations

pub mod member_repository_impl;

pub use member_repository_impl::MySqlMemberRepository;
