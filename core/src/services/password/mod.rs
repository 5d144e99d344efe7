//! Password hashing service module

mod service;

pub use service::PasswordService;
