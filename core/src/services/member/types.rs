//! Types for member service results

use serde::{Deserialize, Serialize};

/// Outcome of checking a submitted verification code
///
/// Three-way on purpose: a caller can tell "never sent" apart from
/// "wrong code".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailVerificationResult {
    /// Submitted code equals the stored code
    Match,
    /// A code is stored for this email but the submitted one differs
    Mismatch,
    /// No live code is stored for this email
    CodeNotFound,
}

/// Result of sending a verification code
#[derive(Debug, Clone)]
pub struct SendCodeResult {
    /// The mail provider's message id
    pub message_id: String,
}
