//! Telegram Bot API sender

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::{info, warn};

use super::{ReportSender, SendError};
use crate::config::TelegramConfig;

const API_BASE: &str = "https://api.telegram.org";

/// Sends billing reports to a Telegram chat via the Bot API.
pub struct TelegramSender {
    http: reqwest::Client,
    bot_token: String,
    chat_id: String,
}

/// Relevant slice of the Bot API response envelope.
#[derive(Debug, Deserialize)]
struct ApiReply {
    ok: bool,
    description: Option<String>,
}

impl TelegramSender {
    pub fn new(config: &TelegramConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            bot_token: config.bot_token.clone(),
            chat_id: config.chat_id.clone(),
        }
    }

    fn send_message_url(&self) -> String {
        format!("{}/bot{}/sendMessage", API_BASE, self.bot_token)
    }
}

#[async_trait]
impl ReportSender for TelegramSender {
    fn channel(&self) -> &str {
        "telegram"
    }

    async fn send(&self, text: &str) -> Result<(), SendError> {
        if self.bot_token.is_empty() || self.chat_id.is_empty() {
            return Err(SendError::NotConfigured(
                "telegram bot_token/chat_id missing".to_string(),
            ));
        }

        let body = json!({
            "chat_id": self.chat_id,
            "text": text,
            "parse_mode": "Markdown",
        });

        let response = self
            .http
            .post(self.send_message_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| SendError::Transport(e.to_string()))?;

        let status = response.status();
        let reply: ApiReply = response
            .json()
            .await
            .map_err(|e| SendError::Transport(format!("invalid API response: {}", e)))?;

        if !reply.ok {
            let detail = reply
                .description
                .unwrap_or_else(|| format!("HTTP {}", status));
            warn!(status = %status, detail = %detail, "Telegram rejected message");
            return Err(SendError::Rejected(detail));
        }

        info!(chat_id = %self.chat_id, "Telegram report delivered");
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────
