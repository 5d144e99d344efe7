//! HTTP route handlers grouped by resource.

pub mod member;
