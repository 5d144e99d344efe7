//! Mock Mail Service Implementation
//!
//! A mock implementation of the mail service for development and
//! testing. Messages are logged to the console instead of delivered.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use sn_core::services::member::MailServiceTrait;
use sn_shared::utils::validation::{is_valid_email, mask_email};

/// Mock mail service for development and testing
///
/// This implementation:
/// - Logs mail to the console
/// - Validates recipient addresses
/// - Generates mock message IDs
/// - Tracks message count for testing
#[derive(Clone)]
pub struct MockMailService {
    /// Counter for tracking number of messages sent
    message_count: Arc<AtomicU64>,
    /// Whether to simulate failures (for testing)
    simulate_failure: bool,
    /// Whether to print messages to console
    console_output: bool,
}

impl MockMailService {
    /// Create a new mock mail service
    pub fn new() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: false,
            console_output: true,
        }
    }

    /// Create a mock service with configurable options
    pub fn with_options(console_output: bool, simulate_failure: bool) -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure,
            console_output,
        }
    }

    /// Get the total number of messages sent
    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Reset the message counter
    pub fn reset_counter(&self) {
        self.message_count.store(0, Ordering::SeqCst);
    }
}

impl Default for MockMailService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MailServiceTrait for MockMailService {
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<String, String> {
        if !is_valid_email(email) {
            return Err(format!("Invalid email address: {}", mask_email(email)));
        }

        if self.simulate_failure {
            warn!(
                email = %mask_email(email),
                "Mock mail service simulating failure"
            );
            return Err("Simulated mail sending failure".to_string());
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        if self.console_output {
            println!("\n{}", "=".repeat(60));
            println!("MOCK MAIL SERVICE - MESSAGE #{}", count);
            println!("{}", "=".repeat(60));
            println!("To: {}", email);
            println!("Message ID: {}", message_id);
            println!("Verification code: {}", code);
            println!("{}\n", "=".repeat(60));
        }

        info!(
            target: "mail_service",
            provider = "mock",
            email = %mask_email(email),
            message_id = %message_id,
            "Verification mail sent (mock)"
        );

        Ok(message_id)
    }

    fn is_valid_email(&self, email: &str) -> bool {
        is_valid_email(email)
    }
}
