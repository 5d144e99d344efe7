//! Member entity representing a registered member of the SipNote platform.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Authorization role assigned to a member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular member
    User,
    /// Platform administrator
    Admin,
}

/// How the member authenticates with the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoginType {
    /// Email and password managed by this platform
    Native,
    /// External identity provider
    Federated,
}

/// Self-reported gender of a member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Member entity keyed by a unique email address
///
/// `password_hash`, `role`, and `login_type` stay `None` for signups
/// without a password. That state marks an account waiting on a
/// federated identity rather than one with a default role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Unique identifier for the member
    pub id: Uuid,

    /// Email address, unique across all members
    pub email: String,

    /// Bcrypt hash of the password, absent for federated signups
    pub password_hash: Option<String>,

    /// Display name
    pub name: String,

    /// Date of birth
    pub birth: NaiveDate,

    /// Contact phone number
    pub phone: String,

    /// Self-reported gender
    pub gender: Gender,

    /// Authorization role, unset until the signup path is decided
    pub role: Option<Role>,

    /// Login type, unset until the signup path is decided
    pub login_type: Option<LoginType>,

    /// Free-form taste preference used for cocktail recommendations
    pub taste: Option<String>,

    /// Timestamp when the member was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the member was last updated
    pub updated_at: DateTime<Utc>,
}

impl Member {
    /// Creates a new Member without credentials or a role
    pub fn new(
        email: String,
        name: String,
        birth: NaiveDate,
        phone: String,
        gender: Gender,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash: None,
            name,
            birth,
            phone,
            gender,
            role: None,
            login_type: None,
            taste: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Attaches native-login credentials
    ///
    /// A member with a password of their own gets the regular user role
    /// and the native login type in the same step.
    pub fn grant_native_login(&mut self, password_hash: String) {
        self.password_hash = Some(password_hash);
        self.role = Some(Role::User);
        self.login_type = Some(LoginType::Native);
        self.updated_at = Utc::now();
    }

    /// Overwrites the taste preference
    pub fn set_taste(&mut self, taste: String) {
        self.taste = Some(taste);
        self.updated_at = Utc::now();
    }

    /// Checks whether this account is still waiting on a federated identity
    pub fn is_pending_federated(&self) -> bool {
        self.password_hash.is_none() && self.role.is_none() && self.login_type.is_none()
    }

    /// Checks whether this member can log in with a password
    pub fn has_native_login(&self) -> bool {
        matches!(self.login_type, Some(LoginType::Native)) && self.password_hash.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn birth() -> NaiveDate {
        NaiveDate::from_ymd_opt(1995, 6, 14).unwrap()
    }

    #[test]
    fn test_new_member_is_pending_federated() {
        let member = Member::new(
            "a@x.com".to_string(),
            "Ari".to_string(),
            birth(),
            "010-1234-5678".to_string(),
            Gender::Other,
        );

        assert_eq!(member.email, "a@x.com");
        assert!(member.password_hash.is_none());
        assert!(member.role.is_none());
        assert!(member.login_type.is_none());
        assert!(member.taste.is_none());
        assert!(member.is_pending_federated());
        assert!(!member.has_native_login());
    }

    #[test]
    fn test_grant_native_login() {
        let mut member = Member::new(
            "a@x.com".to_string(),
            "Ari".to_string(),
            birth(),
            "010-1234-5678".to_string(),
            Gender::Female,
        );

        member.grant_native_login("$2b$12$hash".to_string());

        assert_eq!(member.role, Some(Role::User));
        assert_eq!(member.login_type, Some(LoginType::Native));
        assert_eq!(member.password_hash.as_deref(), Some("$2b$12$hash"));
        assert!(!member.is_pending_federated());
        assert!(member.has_native_login());
    }

    #[test]
    fn test_set_taste() {
        let mut member = Member::new(
            "a@x.com".to_string(),
            "Ari".to_string(),
            birth(),
            "010-1234-5678".to_string(),
            Gender::Male,
        );

        member.set_taste("sweet, citrusy".to_string());
        assert_eq!(member.taste.as_deref(), Some("sweet, citrusy"));

        member.set_taste("bitter".to_string());
        assert_eq!(member.taste.as_deref(), Some("bitter"));
    }

    #[test]
    fn test_role_serialization() {
        let role = Role::User;
        let json = serde_json::to_string(&role).unwrap();
        assert_eq!(json, "\"user\"");

        let login_type = LoginType::Native;
        let json = serde_json::to_string(&login_type).unwrap();
        assert_eq!(json, "\"native\"");
    }
}
