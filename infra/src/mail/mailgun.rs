//! Mailgun Mail Service Implementation
//!
//! Sends verification-code mail through the Mailgun HTTP API. Each
//! send is a single attempt; the calling workflow treats every failure
//! as terminal for the request, so no retry loop lives here.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{error, info};

use sn_core::services::member::MailServiceTrait;
use sn_shared::config::MailConfig;
use sn_shared::utils::validation::{is_valid_email, mask_email};

use crate::InfrastructureError;

/// Mailgun mail service configuration
#[derive(Debug, Clone)]
pub struct MailgunConfig {
    /// Mailgun API key
    pub api_key: String,
    /// Sending domain registered with Mailgun
    pub domain: String,
    /// From address for outbound mail
    pub from_address: String,
    /// Subject line for verification mail
    pub subject: String,
    /// Base URL of the Mailgun API
    pub api_base: String,
    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
}

impl MailgunConfig {
    /// Build provider settings from the application mail configuration
    pub fn from_mail_config(config: &MailConfig) -> Self {
        Self {
            api_key: config.api_key.clone(),
            domain: config.domain.clone(),
            from_address: config.from_address.clone(),
            subject: config.verification_subject.clone(),
            api_base: String::from("https://api.mailgun.net/v3"),
            request_timeout_secs: 30,
        }
    }

    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        let api_key = std::env::var("MAILGUN_API_KEY")
            .map_err(|_| InfrastructureError::Config("MAILGUN_API_KEY not set".to_string()))?;
        let domain = std::env::var("MAILGUN_DOMAIN")
            .map_err(|_| InfrastructureError::Config("MAILGUN_DOMAIN not set".to_string()))?;
        let from_address = std::env::var("MAILGUN_FROM_ADDRESS")
            .map_err(|_| InfrastructureError::Config("MAILGUN_FROM_ADDRESS not set".to_string()))?;

        if !is_valid_email(&from_address) {
            return Err(InfrastructureError::Config(
                "MAILGUN_FROM_ADDRESS must be a valid email address".to_string(),
            ));
        }

        Ok(Self {
            api_key,
            domain,
            from_address,
            subject: String::from("SipNote email verification code"),
            api_base: String::from("https://api.mailgun.net/v3"),
            request_timeout_secs: std::env::var("MAILGUN_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        })
    }
}

/// Response body Mailgun returns for accepted messages
#[derive(Debug, Deserialize)]
struct MailgunSendResponse {
    id: String,
}

/// Mailgun mail service implementation
pub struct MailgunMailService {
    client: reqwest::Client,
    config: MailgunConfig,
}

impl MailgunMailService {
    /// Create a new Mailgun mail service
    pub fn new(config: MailgunConfig) -> Result<Self, InfrastructureError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        info!(
            domain = %config.domain,
            from = %mask_email(&config.from_address),
            "Mailgun mail service initialized"
        );

        Ok(Self { client, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        let config = MailgunConfig::from_env()?;
        Self::new(config)
    }

    /// Send a mail through the Mailgun messages endpoint
    async fn send_mail(
        &self,
        to: &str,
        subject: &str,
        body: &str,
    ) -> Result<String, InfrastructureError> {
        let url = format!("{}/{}/messages", self.config.api_base, self.config.domain);

        let response = self
            .client
            .post(&url)
            .basic_auth("api", Some(&self.config.api_key))
            .form(&[
                ("from", self.config.from_address.as_str()),
                ("to", to),
                ("subject", subject),
                ("text", body),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            error!(
                email = %mask_email(to),
                status = %status,
                "Mailgun rejected the message"
            );
            return Err(InfrastructureError::Mail(format!(
                "Mailgun returned {}: {}",
                status, detail
            )));
        }

        let parsed: MailgunSendResponse = response.json().await?;

        info!(
            email = %mask_email(to),
            message_id = %parsed.id,
            "Mail accepted by Mailgun"
        );

        Ok(parsed.id)
    }
}

#[async_trait]
impl MailServiceTrait for MailgunMailService {
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<String, String> {
        if !is_valid_email(email) {
            return Err(format!("Invalid email address: {}", mask_email(email)));
        }

        let body = format!(
            "Your SipNote verification code is: {}\n\nEnter it in the app to verify your email address.",
            code
        );

        self.send_mail(email, &self.config.subject, &body)
            .await
            .map_err(|e| e.to_string())
    }

    fn is_valid_email(&self, email: &str) -> bool {
        is_valid_email(email)
    }
}
