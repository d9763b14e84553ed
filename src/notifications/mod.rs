//! Outbound report delivery
//!
//! A billing summary is pushed to an external chat before the period is
//! committed. Delivery is single-shot: a failed send is reported to the
//! caller and never retried here.

pub mod telegram;

use async_trait::async_trait;
use thiserror::Error;

pub use telegram::TelegramSender;

#[derive(Debug, Error)]
pub enum SendError {
    #[error("sender is not configured: {0}")]
    NotConfigured(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("message rejected: {0}")]
    Rejected(String),
}

/// Delivers a formatted billing summary to a chat channel.
#[async_trait]
pub trait ReportSender: Send + Sync {
    /// Channel tag recorded on the bill period, e.g. "telegram".
    fn channel(&self) -> &str;

    async fn send(&self, text: &str) -> Result<(), SendError>;
}
