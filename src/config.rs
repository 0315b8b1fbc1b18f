use crate::api::models::ApiKey;
use crate::error::AppError;
use std::env;
use std::time::Duration;

pub const DEFAULT_REGION: &str = "europe";

#[derive(Debug, Clone)]
pub struct Config {
    pub region: String,
    pub base_url: Option<String>,
    pub timeout: Option<Duration>,
    /// Placeholder credential picked up from the environment. The client never
    /// falls back to it; callers pass a key to every request.
    pub api_key: Option<ApiKey>,
}

impl Default for Config {
    fn default() -> Self {
        Config::new(DEFAULT_REGION)
    }
}

impl Config {
    pub fn new(region: &str) -> Self {
        Config {
            region: region.trim().to_lowercase(),
            base_url: None,
            timeout: None,
            api_key: None,
        }
    }

    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let region = lookup("RIOT_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string());
        let mut config = Config::new(&region);

        config.base_url = lookup("RIOT_BASE_URL").filter(|url| !url.trim().is_empty());

        if let Some(raw) = lookup("RIOT_TIMEOUT_SECS") {
            let secs = raw.trim().parse::<u64>().map_err(|_| {
                AppError::ConfigError(format!("RIOT_TIMEOUT_SECS must be a whole number, got {raw:?}"))
            })?;
            config.timeout = Some(Duration::from_secs(secs));
        }

        if let Some(key) = lookup("RIOT_API_KEY").filter(|key| !key.trim().is_empty()) {
            let key = ApiKey::new(key.trim());
            if !key.looks_valid() {
                tracing::warn!("RIOT_API_KEY does not start with RGAPI-, requests will likely be rejected");
            }
            config.api_key = Some(key);
        }

        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_api_key(mut self, api_key: ApiKey) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Regional routing value for account-v1 and match-v5. Platform ids are
    /// mapped to their region; anything else is used as given.
    pub fn routing(&self) -> &str {
        match self.region.as_str() {
            "na1" | "br1" | "la1" | "la2" => "americas",
            "euw1" | "eun1" | "tr1" | "ru" | "me1" => "europe",
            "kr" | "jp1" => "asia",
            "oc1" | "ph2" | "sg2" | "th2" | "tw2" | "vn2" => "sea",
            other => other,
        }
    }

    pub fn base_url(&self) -> String {
        match &self.base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("https://{}.api.riotgames.com", self.routing()),
        }
    }
}
