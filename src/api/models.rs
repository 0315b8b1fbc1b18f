use crate::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

const RIOT_KEY_PREFIX: &str = "RGAPI-";

/// Riot developer API key. Never printed in full.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        ApiKey(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Riot issues keys prefixed with `RGAPI-`.
    pub fn looks_valid(&self) -> bool {
        self.0.starts_with(RIOT_KEY_PREFIX) && self.0.len() > RIOT_KEY_PREFIX.len()
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(****)")
    }
}

impl From<&str> for ApiKey {
    fn from(value: &str) -> Self {
        ApiKey::new(value)
    }
}

impl From<String> for ApiKey {
    fn from(value: String) -> Self {
        ApiKey(value)
    }
}

/// Player UUID issued by the account service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Puuid(String);

impl Puuid {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Puuid {
    fn from(value: String) -> Self {
        Puuid(value)
    }
}

impl From<&str> for Puuid {
    fn from(value: &str) -> Self {
        Puuid(value.to_string())
    }
}

impl fmt::Display for Puuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Match identifier, e.g. `EUW1_6543210987`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchId(String);

impl MatchId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for MatchId {
    fn from(value: String) -> Self {
        MatchId(value)
    }
}

impl From<&str> for MatchId {
    fn from(value: &str) -> Self {
        MatchId(value.to_string())
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerIdentity {
    pub game_name: String,
    pub tag_line: String,
}

impl PlayerIdentity {
    pub fn new(game_name: impl Into<String>, tag_line: impl Into<String>) -> Self {
        PlayerIdentity {
            game_name: game_name.into(),
            tag_line: tag_line.into(),
        }
    }
}

impl fmt::Display for PlayerIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.game_name, self.tag_line)
    }
}

impl FromStr for PlayerIdentity {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, tag) = s
            .rsplit_once('#')
            .ok_or_else(|| AppError::InvalidRiotId(s.to_string()))?;
        let (name, tag) = (name.trim(), tag.trim());
        if name.is_empty() || tag.is_empty() {
            return Err(AppError::InvalidRiotId(s.to_string()));
        }
        Ok(PlayerIdentity::new(name, tag))
    }
}

// Account V1 response. Every field is optional so a partial body surfaces as
// NotFound rather than a decode failure.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AccountDto {
    #[serde(default)]
    pub puuid: Option<String>,
    #[serde(default)]
    pub game_name: Option<String>,
    #[serde(default)]
    pub tag_line: Option<String>,
}

/// Match V5 document, passed through without interpretation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchRecord(Value);

impl MatchRecord {
    pub fn as_json(&self) -> &Value {
        &self.0
    }

    pub fn into_json(self) -> Value {
        self.0
    }
}

impl From<Value> for MatchRecord {
    fn from(value: Value) -> Self {
        MatchRecord(value)
    }
}

/// Match V5 timeline document, passed through without interpretation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchTimeline(Value);

impl MatchTimeline {
    pub fn as_json(&self) -> &Value {
        &self.0
    }

    pub fn into_json(self) -> Value {
        self.0
    }
}

impl From<Value> for MatchTimeline {
    fn from(value: Value) -> Self {
        MatchTimeline(value)
    }
}
