//! MySQL implementation of the MemberRepository trait.
//!
//! Concrete member persistence using MySQL with SQLx. The `members`
//! table carries a unique key on `email`; multi-statement units run
//! inside a transaction so a failure leaves persisted state unchanged.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use sn_core::domain::entities::member::{Gender, LoginType, Member, Role};
use sn_core::errors::{DomainError, MemberError};
use sn_core::repositories::MemberRepository;

/// MySQL implementation of MemberRepository
pub struct MySqlMemberRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlMemberRepository {
    /// Create a new MySQL member repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn gender_to_str(gender: Gender) -> &'static str {
        match gender {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }

    fn str_to_gender(value: &str) -> Gender {
        match value {
            "male" => Gender::Male,
            "female" => Gender::Female,
            _ => Gender::Other,
        }
    }

    fn role_to_str(role: Role) -> &'static str {
        match role {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }

    fn str_to_role(value: &str) -> Option<Role> {
        match value {
            "user" => Some(Role::User),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }

    fn login_type_to_str(login_type: LoginType) -> &'static str {
        match login_type {
            LoginType::Native => "native",
            LoginType::Federated => "federated",
        }
    }

    fn str_to_login_type(value: &str) -> Option<LoginType> {
        match value {
            "native" => Some(LoginType::Native),
            "federated" => Some(LoginType::Federated),
            _ => None,
        }
    }

    /// Convert a database row to a Member entity
    fn row_to_member(row: &sqlx::mysql::MySqlRow) -> Result<Member, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to get id: {}", e),
            })?;

        let gender: String = row
            .try_get("gender")
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to get gender: {}", e),
            })?;

        let role: Option<String> = row
            .try_get("role")
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to get role: {}", e),
            })?;

        let login_type: Option<String> = row
            .try_get("login_type")
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to get login_type: {}", e),
            })?;

        Ok(Member {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Internal {
                message: format!("Invalid UUID: {}", e),
            })?,
            email: row.try_get("email").map_err(|e| DomainError::Internal {
                message: format!("Failed to get email: {}", e),
            })?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get password_hash: {}", e),
                })?,
            name: row.try_get("name").map_err(|e| DomainError::Internal {
                message: format!("Failed to get name: {}", e),
            })?,
            birth: row
                .try_get::<NaiveDate, _>("birth")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get birth: {}", e),
                })?,
            phone: row.try_get("phone").map_err(|e| DomainError::Internal {
                message: format!("Failed to get phone: {}", e),
            })?,
            gender: Self::str_to_gender(&gender),
            role: role.as_deref().and_then(Self::str_to_role),
            login_type: login_type.as_deref().and_then(Self::str_to_login_type),
            taste: row.try_get("taste").map_err(|e| DomainError::Internal {
                message: format!("Failed to get taste: {}", e),
            })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get created_at: {}", e),
                })?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get updated_at: {}", e),
                })?,
        })
    }
}

#[async_trait]
impl MemberRepository for MySqlMemberRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Member>, DomainError> {
        let query = r#"
            SELECT id, email, password_hash, name, birth, phone, gender,
                   role, login_type, taste, created_at, updated_at
            FROM members
            WHERE email = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_member(&row)?)),
            None => Ok(None),
        }
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let query = "SELECT COUNT(*) AS cnt FROM members WHERE email = ?";

        let row = sqlx::query(query)
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Database query failed: {}", e),
            })?;

        let count: i64 = row.try_get("cnt").map_err(|e| DomainError::Internal {
            message: format!("Failed to get cnt: {}", e),
        })?;

        Ok(count > 0)
    }

    async fn create(&self, member: Member) -> Result<Member, DomainError> {
        // Duplicate check and insert run in one transaction so the
        // unit applies fully or not at all.
        let mut tx = self.pool.begin().await.map_err(|e| DomainError::Internal {
            message: format!("Failed to begin transaction: {}", e),
        })?;

        let row = sqlx::query("SELECT COUNT(*) AS cnt FROM members WHERE email = ?")
            .bind(&member.email)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Database query failed: {}", e),
            })?;

        let count: i64 = row.try_get("cnt").map_err(|e| DomainError::Internal {
            message: format!("Failed to get cnt: {}", e),
        })?;

        if count > 0 {
            return Err(DomainError::Member(MemberError::MemberExists));
        }

        let query = r#"
            INSERT INTO members (
                id, email, password_hash, name, birth, phone, gender,
                role, login_type, taste, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(member.id.to_string())
            .bind(&member.email)
            .bind(&member.password_hash)
            .bind(&member.name)
            .bind(member.birth)
            .bind(&member.phone)
            .bind(Self::gender_to_str(member.gender))
            .bind(member.role.map(Self::role_to_str))
            .bind(member.login_type.map(Self::login_type_to_str))
            .bind(&member.taste)
            .bind(member.created_at)
            .bind(member.updated_at)
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to create member: {}", e),
            })?;

        tx.commit().await.map_err(|e| DomainError::Internal {
            message: format!("Failed to commit transaction: {}", e),
        })?;

        Ok(member)
    }

    async fn update(&self, member: Member) -> Result<Member, DomainError> {
        let query = r#"
            UPDATE members SET
                password_hash = ?,
                name = ?,
                birth = ?,
                phone = ?,
                gender = ?,
                role = ?,
                login_type = ?,
                taste = ?,
                updated_at = ?
            WHERE email = ?
        "#;

        let result = sqlx::query(query)
            .bind(&member.password_hash)
            .bind(&member.name)
            .bind(member.birth)
            .bind(&member.phone)
            .bind(Self::gender_to_str(member.gender))
            .bind(member.role.map(Self::role_to_str))
            .bind(member.login_type.map(Self::login_type_to_str))
            .bind(&member.taste)
            .bind(member.updated_at)
            .bind(&member.email)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to update member: {}", e),
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: "Member".to_string(),
            });
        }

        Ok(member)
    }

    async fn delete_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM members WHERE email = ?")
            .bind(email)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to delete member: {}", e),
            })?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_round_trip() {
        for gender in [Gender::Male, Gender::Female, Gender::Other] {
            let s = MySqlMemberRepository::gender_to_str(gender);
            assert_eq!(MySqlMemberRepository::str_to_gender(s), gender);
        }
        // Unknown values fall back instead of failing the row.
        assert_eq!(MySqlMemberRepository::str_to_gender("??"), Gender::Other);
    }

    #[test]
    fn test_role_round_trip() {
        for role in [Role::User, Role::Admin] {
            let s = MySqlMemberRepository::role_to_str(role);
            assert_eq!(MySqlMemberRepository::str_to_role(s), Some(role));
        }
        assert_eq!(MySqlMemberRepository::str_to_role("??"), None);
    }

    #[test]
    fn test_login_type_round_trip() {
        for login_type in [LoginType::Native, LoginType::Federated] {
            let s = MySqlMemberRepository::login_type_to_str(login_type);
            assert_eq!(
                MySqlMemberRepository::str_to_login_type(s),
                Some(login_type)
            );
        }
        assert_eq!(MySqlMemberRepository::str_to_login_type("??"), None);
    }
}
