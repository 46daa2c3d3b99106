use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub chat_id: String,
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            bot_token: String::new(),
            chat_id: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RateLimits {
    pub messages_per_second: u32,
}

impl Default for RateLimits {
    fn default() -> Self {
        Self {
            messages_per_second: 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScrapingConfig {
    pub user_agent: String,
    pub request_timeout_secs: u64,
}

impl Default for ScrapingConfig {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0 (compatible; NbaScoreboardScraper/1.0)".to_string(),
            request_timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScraperConfig {
    pub telegram: TelegramConfig,
    pub rate_limits: RateLimits,
    pub scraping: ScrapingConfig,
}

impl ScraperConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(token) = env::var("TELEGRAM_BOT_TOKEN") {
            config.telegram.bot_token = token;
        }
        if let Ok(chat_id) = env::var("TELEGRAM_CHAT_ID") {
            config.telegram.chat_id = chat_id;
        }
        if let Ok(rps) = env::var("RATE_LIMIT_RPS").map_or(Ok(None), |r| r.parse::<u32>().map(Some)) {
            if let Some(rps) = rps {
                config.rate_limits.messages_per_second = rps;
            }
        }
        if let Ok(user_agent) = env::var("SCRAPER_USER_AGENT") {
            config.scraping.user_agent = user_agent;
        }
        if let Ok(timeout) = env::var("SCRAPER_TIMEOUT_SECS").map_or(Ok(None), |t| t.parse::<u64>().map(Some)) {
            if let Some(timeout) = timeout {
                config.scraping.request_timeout_secs = timeout;
            }
        }

        config
    }
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            telegram: TelegramConfig::default(),
            rate_limits: RateLimits::default(),
            scraping: ScrapingConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScraperConfig::default();
        assert_eq!(config.rate_limits.messages_per_second, 1);
        assert_eq!(config.scraping.request_timeout_secs, 30);
        assert!(config.telegram.bot_token.is_empty());
        assert!(config.telegram.chat_id.is_empty());
    }
}
