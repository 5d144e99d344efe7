//! Main member service implementation

use rand::rngs::OsRng;
use rand::RngCore;
use std::sync::Arc;
use constant_time_eq::constant_time_eq;

use sn_shared::utils::validation::mask_email;

use crate::domain::entities::member::Member;
use crate::domain::value_objects::member_registration::MemberRegistration;
use crate::errors::{DomainError, DomainResult, MemberError, TokenError};
use crate::repositories::MemberRepository;
use crate::services::password::PasswordService;
use crate::services::token::TokenService;

use super::traits::{CodeStoreTrait, MailServiceTrait};
use super::types::{EmailVerificationResult, SendCodeResult};

/// Prefix that scopes verification-code entries to this use case
pub const AUTH_CODE_PREFIX: &str = "AuthCode ";

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// Member service orchestrating registration, verification, and
/// session-bound account operations
pub struct MemberService<M, S, C>
where
    M: MemberRepository,
    S: MailServiceTrait,
    C: CodeStoreTrait,
{
    /// Member repository for database operations
    member_repository: Arc<M>,
    /// Mail service for sending verification codes
    mail_service: Arc<S>,
    /// Process-wide verification-code store
    code_store: Arc<C>,
    /// Password hashing service
    password_service: PasswordService,
    /// Token service for session handling
    token_service: Arc<TokenService>,
}

impl<M, S, C> MemberService<M, S, C>
where
    M: MemberRepository,
    S: MailServiceTrait,
    C: CodeStoreTrait,
{
    /// Create a new member service
    ///
    /// # Arguments
    ///
    /// * `member_repository` - Repository for member persistence
    /// * `mail_service` - Outbound mail implementation
    /// * `code_store` - Verification-code store implementation
    /// * `password_service` - Password hashing service
    /// * `token_service` - JWT session token service
    pub fn new(
        member_repository: Arc<M>,
        mail_service: Arc<S>,
        code_store: Arc<C>,
        password_service: PasswordService,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            member_repository,
            mail_service,
            code_store,
            password_service,
            token_service,
        }
    }

    /// Send a verification code to an email address
    ///
    /// This method:
    /// 1. Validates the email format
    /// 2. Rejects addresses that already belong to a member
    /// 3. Generates a 6-digit code from the OS CSPRNG
    /// 4. Sends the code by email
    /// 5. Stores the code under the scoped email key
    ///
    /// # Returns
    ///
    /// * `Ok(SendCodeResult)` - The provider message id
    /// * `Err(DomainError)` - `MemberExists` for registered addresses,
    ///   `MailServiceFailure` if the provider rejects the send,
    ///   `SecureRandomUnavailable` if the platform has no CSPRNG
    pub async fn send_verification_email(&self, to_email: &str) -> DomainResult<SendCodeResult> {
        if !self.mail_service.is_valid_email(to_email) {
            return Err(DomainError::Member(MemberError::InvalidEmailFormat {
                email: mask_email(to_email),
            }));
        }

        self.check_duplicated_email(to_email).await?;

        let code = Self::generate_code()?;

        tracing::info!(
            email = %mask_email(to_email),
            event = "verification_code_generated",
            "Generated new verification code for email"
        );

        // Mail first, then store: a failed send must not leave a code
        // behind that was never delivered.
        let message_id = self
            .mail_service
            .send_verification_code(to_email, &code)
            .await
            .map_err(|e| {
                tracing::error!(
                    email = %mask_email(to_email),
                    error = %e,
                    event = "verification_mail_failed",
                    "Failed to send verification code mail"
                );
                DomainError::Member(MemberError::MailServiceFailure)
            })?;

        self.code_store
            .save(&Self::code_key(to_email), &code)
            .await
            .map_err(|e| {
                tracing::error!(
                    email = %mask_email(to_email),
                    error = %e,
                    event = "code_storage_failed",
                    "Failed to store verification code"
                );
                DomainError::Internal {
                    message: format!("Failed to store verification code: {}", e),
                }
            })?;

        Ok(SendCodeResult { message_id })
    }

    /// Check a submitted verification code against the stored one
    ///
    /// Read-only: a matching code stays in the store, so a match can be
    /// replayed until the entry expires.
    ///
    /// # Returns
    ///
    /// * `Ok(EmailVerificationResult)` - `Match`, `Mismatch`, or
    ///   `CodeNotFound` when nothing live is stored for this email
    pub async fn verify_code(
        &self,
        email: &str,
        submitted_code: &str,
    ) -> DomainResult<EmailVerificationResult> {
        let stored = self
            .code_store
            .get(&Self::code_key(email))
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to read verification code: {}", e),
            })?;

        let result = match stored {
            None => EmailVerificationResult::CodeNotFound,
            Some(code) if Self::codes_equal(&code, submitted_code) => {
                EmailVerificationResult::Match
            }
            Some(_) => EmailVerificationResult::Mismatch,
        };

        tracing::debug!(
            email = %mask_email(email),
            event = "verification_code_checked",
            result = ?result,
            "Checked submitted verification code"
        );

        Ok(result)
    }

    /// Register a new member
    ///
    /// A registration with a non-empty password becomes a native-login
    /// account with the regular user role; without one, the member is
    /// persisted in the pending federated state.
    ///
    /// Email uniqueness is guarded at the verification-mail step and by
    /// the repository's unique key, not re-checked here.
    pub async fn register_member(&self, registration: MemberRegistration) -> DomainResult<Member> {
        let mut member = Member::new(
            registration.email,
            registration.name,
            registration.birth,
            registration.phone,
            registration.gender,
        );

        if let Some(password) = registration.password.as_deref().filter(|p| !p.is_empty()) {
            let password_hash = self.password_service.hash(password)?;
            member.grant_native_login(password_hash);
        }

        let created = self.member_repository.create(member).await?;

        tracing::info!(
            email = %mask_email(&created.email),
            event = "member_registered",
            pending_federated = created.is_pending_federated(),
            "Registered new member"
        );

        Ok(created)
    }

    /// Withdraw the member identified by a session token
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Member deleted
    /// * `Err(DomainError)` - `InvalidToken` for bad tokens,
    ///   `MemberNotFound` when the email claim matches nobody
    pub async fn withdraw(&self, token: &str) -> DomainResult<()> {
        if !self.token_service.validate_token(token) {
            return Err(DomainError::Token(TokenError::InvalidToken));
        }

        let email = self.token_service.extract_email(token)?;

        let member = self
            .member_repository
            .find_by_email(&email)
            .await?
            .ok_or(DomainError::Member(MemberError::MemberNotFound))?;

        self.member_repository.delete_by_email(&member.email).await?;

        tracing::info!(
            email = %mask_email(&member.email),
            event = "member_withdrawn",
            "Member withdrew their account"
        );

        Ok(())
    }

    /// Fetch the member identified by a session token
    pub async fn find_by_token(&self, token: &str) -> DomainResult<Member> {
        let email = self.token_service.extract_email(token)?;

        self.member_repository
            .find_by_email(&email)
            .await?
            .ok_or(DomainError::Member(MemberError::MemberNotFound))
    }

    /// Overwrite the taste preference of the member identified by a token
    ///
    /// Only the taste attribute changes; everything else on the member
    /// record stays as it was.
    pub async fn update_taste(&self, token: &str, taste: &str) -> DomainResult<Member> {
        let email = self.token_service.extract_email(token)?;

        let mut member = self
            .member_repository
            .find_by_email(&email)
            .await?
            .ok_or(DomainError::Member(MemberError::MemberNotFound))?;

        member.set_taste(taste.to_string());

        let updated = self.member_repository.update(member).await?;

        tracing::info!(
            email = %mask_email(&updated.email),
            event = "taste_updated",
            "Updated member taste preference"
        );

        Ok(updated)
    }

    /// Generate a cryptographically secure random 6-digit code
    ///
    /// Reads the OS CSPRNG directly; if no such source is available the
    /// error surfaces as `SecureRandomUnavailable` instead of panicking.
    pub fn generate_code() -> DomainResult<String> {
        let mut rng = OsRng;
        let mut bytes = [0u8; 4];
        rng.try_fill_bytes(&mut bytes)
            .map_err(|_| DomainError::Member(MemberError::SecureRandomUnavailable))?;
        let num = u32::from_le_bytes(bytes);
        // Modulo has a slight bias, negligible at 6 digits.
        let code = num % 1_000_000;
        Ok(format!("{:06}", code))
    }

    /// Scoped store key for an email address
    fn code_key(email: &str) -> String {
        format!("{}{}", AUTH_CODE_PREFIX, email)
    }

    /// Constant-time comparison of two codes
    fn codes_equal(stored: &str, submitted: &str) -> bool {
        if stored.len() != submitted.len() {
            return false;
        }
        constant_time_eq(stored.as_bytes(), submitted.as_bytes())
    }

    async fn check_duplicated_email(&self, email: &str) -> DomainResult<()> {
        if self.member_repository.find_by_email(email).await?.is_some() {
            tracing::debug!(
                email = %mask_email(email),
                event = "duplicate_email",
                "Verification mail requested for an already registered email"
            );
            return Err(DomainError::Member(MemberError::MemberExists));
        }
        Ok(())
    }
}
