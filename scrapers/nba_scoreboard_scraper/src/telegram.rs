use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde_json::json;
use tracing::debug;

use crate::{config::TelegramConfig, types::GameRecord};

const TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Delivers plain-text messages to one chat via the Telegram Bot API.
/// Pacing between messages is the caller's job.
pub struct TelegramClient {
    client: Client,
    api_url: String,
    token: String,
    chat_id: String,
}

impl TelegramClient {
    pub fn new(config: &TelegramConfig) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_url: TELEGRAM_API_URL.to_string(),
            token: config.bot_token.clone(),
            chat_id: config.chat_id.clone(),
        })
    }

    pub fn send_message(&self, text: &str) -> Result<()> {
        let url = format!("{}/bot{}/sendMessage", self.api_url, self.token);
        let response = self
            .client
            .post(&url)
            .json(&json!({ "chat_id": self.chat_id, "text": text }))
            .send()
            .context("Failed to reach Telegram Bot API")?;

        if !response.status().is_success() {
            anyhow::bail!("Telegram sendMessage failed: HTTP {}", response.status());
        }

        let body: serde_json::Value = response.json().context("Invalid Telegram API response")?;
        if !body.get("ok").and_then(|ok| ok.as_bool()).unwrap_or(false) {
            anyhow::bail!("Telegram API rejected message: {}", body);
        }

        debug!("Delivered message to chat {}", self.chat_id);
        Ok(())
    }

    pub fn send_game_score(&self, game: &GameRecord) -> Result<()> {
        self.send_message(&format_game_message(game))
    }
}

/// Formats one game for the chat. Finished games get the result layout,
/// anything else the "vs" layout with the raw status line.
pub fn format_game_message(game: &GameRecord) -> String {
    if game.status == "Final" {
        format!(
            "🏀 NBA Game Result\n\n{}: {}\n{}: {}\n\n📅 {}\n✅ Final",
            game.visitor_team_name,
            game.visitor_score,
            game.home_team_name,
            game.home_score,
            game.date
        )
    } else {
        format!(
            "🏀 NBA Game\n\n{} vs {}\n📅 {}\nStatus: {}",
            game.visitor_team_name, game.home_team_name, game.date, game.status
        )
    }
}
