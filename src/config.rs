use serde::Deserialize;
use std::time::Duration;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// TMDB credential, either a v3 API key or a v4 read access token
    pub tmdb_api_key: String,

    /// TMDB API base URL
    #[serde(default = "default_tmdb_api_url")]
    pub tmdb_api_url: String,

    /// Per-call timeout for provider requests, in seconds
    #[serde(default = "default_tmdb_timeout_secs")]
    pub tmdb_timeout_secs: u64,

    /// Region used when picking a certification or content rating
    #[serde(default = "default_tmdb_region")]
    pub tmdb_region: String,

    /// Items per application page when browsing by genre
    #[serde(default = "default_genre_page_size")]
    pub genre_page_size: usize,

    /// Items per application page when browsing by mood
    #[serde(default = "default_mood_page_size")]
    pub mood_page_size: usize,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_tmdb_api_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_tmdb_timeout_secs() -> u64 {
    10
}

fn default_tmdb_region() -> String {
    "US".to_string()
}

fn default_genre_page_size() -> usize {
    20
}

fn default_mood_page_size() -> usize {
    21
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let config = envy::from_env::<Config>()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.tmdb_api_key.trim().is_empty() {
            anyhow::bail!("TMDB_API_KEY must not be empty");
        }
        if self.genre_page_size == 0 || self.mood_page_size == 0 {
            anyhow::bail!("GENRE_PAGE_SIZE and MOOD_PAGE_SIZE must be at least 1");
        }
        Ok(())
    }

    pub fn tmdb_timeout(&self) -> Duration {
        Duration::from_secs(self.tmdb_timeout_secs)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
