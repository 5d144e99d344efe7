//! Registration request value object.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::entities::member::Gender;

/// Fields a new member signs up with
///
/// `password` is absent for federated signups; those accounts are
/// persisted without a role or login type until the federated path
/// claims them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberRegistration {
    /// Email address, the member's unique identifier
    pub email: String,

    /// Plaintext password, absent for federated signups
    pub password: Option<String>,

    /// Display name
    pub name: String,

    /// Date of birth
    pub birth: NaiveDate,

    /// Contact phone number
    pub phone: String,

    /// Self-reported gender
    pub gender: Gender,
}

impl MemberRegistration {
    /// Whether this registration carries a usable password
    pub fn wants_native_login(&self) -> bool {
        self.password.as_deref().map(|p| !p.is_empty()).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration(password: Option<&str>) -> MemberRegistration {
        MemberRegistration {
            email: "a@x.com".to_string(),
            password: password.map(String::from),
            name: "Ari".to_string(),
            birth: NaiveDate::from_ymd_opt(1995, 6, 14).unwrap(),
            phone: "010-1234-5678".to_string(),
            gender: Gender::Other,
        }
    }

    #[test]
    fn test_wants_native_login() {
        assert!(registration(Some("hunter2!")).wants_native_login());
        assert!(!registration(Some("")).wants_native_login());
        assert!(!registration(None).wants_native_login());
    }
}
