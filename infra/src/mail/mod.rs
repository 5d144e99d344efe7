//! Mail Service Module
//!
//! Outbound mail implementations for delivering verification codes.
//! Includes the Mailgun HTTP API provider for production and a console
//! mock for development, both behind the core `MailServiceTrait`.

pub mod mailgun;
pub mod mock_mail;

pub use mailgun::{MailgunConfig, MailgunMailService};
pub use mock_mail::MockMailService;

use async_trait::async_trait;

use sn_core::services::member::MailServiceTrait;
use sn_shared::config::MailConfig;

/// Mail service selected by configuration
pub enum MailService {
    Mailgun(MailgunMailService),
    Mock(MockMailService),
}

#[async_trait]
impl MailServiceTrait for MailService {
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<String, String> {
        match self {
            MailService::Mailgun(service) => service.send_verification_code(email, code).await,
            MailService::Mock(service) => service.send_verification_code(email, code).await,
        }
    }

    fn is_valid_email(&self, email: &str) -> bool {
        match self {
            MailService::Mailgun(service) => service.is_valid_email(email),
            MailService::Mock(service) => service.is_valid_email(email),
        }
    }
}

/// Create a mail service based on configuration
///
/// Returns the provider named in the configuration, falling back to
/// the mock when the provider cannot be initialized.
pub fn create_mail_service(config: &MailConfig) -> MailService {
    match config.provider.as_str() {
        "mock" => MailService::Mock(MockMailService::new()),
        "mailgun" => match MailgunMailService::new(MailgunConfig::from_mail_config(config)) {
            Ok(service) => MailService::Mailgun(service),
            Err(e) => {
                tracing::error!("Failed to initialize Mailgun mail service: {}", e);
                tracing::warn!("Falling back to mock mail service");
                MailService::Mock(MockMailService::new())
            }
        },
        other => {
            tracing::warn!(
                "Unknown mail provider '{}', using mock implementation",
                other
            );
            MailService::Mock(MockMailService::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_defaults_to_mock() {
        let config = MailConfig::default();
        assert!(matches!(
            create_mail_service(&config),
            MailService::Mock(_)
        ));

        let unknown = MailConfig {
            provider: "carrier-pigeon".to_string(),
            ..MailConfig::default()
        };
        assert!(matches!(
            create_mail_service(&unknown),
            MailService::Mock(_)
        ));
    }

    #[test]
    fn test_factory_builds_mailgun() {
        let config = MailConfig {
            provider: "mailgun".to_string(),
            api_key: "key-test".to_string(),
            domain: "mg.sipnote.app".to_string(),
            ..MailConfig::default()
        };
        assert!(matches!(
            create_mail_service(&config),
            MailService::Mailgun(_)
        ));
    }
}
