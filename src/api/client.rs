use crate::config::Config;
use crate::error::AppError;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::endpoints;
use super::filters::MatchFilters;
use super::models::*;

const USER_AGENT: &str = concat!("riot_match_api/", env!("CARGO_PKG_VERSION"));

/// Blocking client for the account-v1 and match-v5 endpoints.
///
/// Holds no per-call state: every operation takes the caller's key, issues a
/// single GET and never retries.
pub struct RiotApiClient {
    config: Config,
    base_url: String,
    agent: ureq::Agent,
}

impl RiotApiClient {
    pub fn new(config: Config) -> Self {
        let mut builder = ureq::AgentBuilder::new().user_agent(USER_AGENT);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        RiotApiClient {
            base_url: config.base_url(),
            agent: builder.build(),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn execute_request<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        api_key: &ApiKey,
    ) -> Result<T, AppError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(path, "riot api request");

        let mut request = self.agent.get(&url);
        for (name, value) in query {
            request = request.query(name, value);
        }
        request = request.query("api_key", api_key.as_str());

        match request.call() {
            Ok(resp) => serde_json::from_reader(resp.into_reader()).map_err(|e| {
                if e.is_io() {
                    AppError::NetworkError(format!("reading response body failed: {}", e))
                } else {
                    AppError::UnexpectedError(format!("malformed response body: {}", e))
                }
            }),
            Err(ureq::Error::Status(status, resp)) => {
                let message = match resp.into_string() {
                    Ok(body) => api_error_message(&body),
                    Err(e) => {
                        tracing::warn!(status, error = %e, "could not read error body");
                        format!("<unreadable body: {}>", e)
                    }
                };
                Err(AppError::ApiError { status, message })
            }
            Err(ureq::Error::Transport(transport)) => {
                let message = describe_transport(&transport, api_key);
                match transport.kind() {
                    ureq::ErrorKind::InvalidUrl
                    | ureq::ErrorKind::UnknownScheme
                    | ureq::ErrorKind::BadStatus
                    | ureq::ErrorKind::BadHeader => Err(AppError::UnexpectedError(message)),
                    _ => Err(AppError::NetworkError(message)),
                }
            }
        }
    }

    pub fn resolve_id_to_puuid(
        &self,
        game_name: &str,
        tag_line: &str,
        api_key: &ApiKey,
    ) -> Result<Puuid, AppError> {
        let riot_id = format!("{}#{}", game_name, tag_line);
        let path = endpoints::account_by_riot_id(game_name, tag_line);

        self.execute_request::<AccountDto>(&path, &[], api_key)
            .and_then(|account| {
                account
                    .puuid
                    .filter(|puuid| !puuid.is_empty())
                    .map(Puuid::from)
                    .ok_or_else(|| AppError::NotFound(format!("no puuid in response for {}", riot_id)))
            })
            .inspect_err(|e| tracing::warn!(%riot_id, error = %e, "puuid lookup failed"))
    }

    pub fn resolve_puuid_to_identity(
        &self,
        puuid: &Puuid,
        api_key: &ApiKey,
    ) -> Result<PlayerIdentity, AppError> {
        let path = endpoints::account_by_puuid(puuid);

        self.execute_request::<AccountDto>(&path, &[], api_key)
            .and_then(|account| {
                match (
                    account.game_name.filter(|name| !name.is_empty()),
                    account.tag_line.filter(|tag| !tag.is_empty()),
                ) {
                    (Some(game_name), Some(tag_line)) => Ok(PlayerIdentity { game_name, tag_line }),
                    _ => Err(AppError::NotFound(format!(
                        "missing gameName or tagLine in response for puuid {}",
                        puuid
                    ))),
                }
            })
            .inspect_err(|e| tracing::warn!(%puuid, error = %e, "riot id lookup failed"))
    }

    pub fn list_match_ids(
        &self,
        puuid: &Puuid,
        api_key: &ApiKey,
        filters: Option<&MatchFilters>,
    ) -> Result<Vec<MatchId>, AppError> {
        let path = endpoints::match_ids_by_puuid(puuid);
        let query = filters.map(MatchFilters::query_pairs).unwrap_or_default();

        self.execute_request::<Vec<MatchId>>(&path, &query, api_key)
            .inspect_err(|e| tracing::warn!(%puuid, error = %e, "match id listing failed"))
    }

    pub fn get_match_record(
        &self,
        match_id: &MatchId,
        api_key: &ApiKey,
    ) -> Result<MatchRecord, AppError> {
        let path = endpoints::match_by_id(match_id);

        self.execute_request::<MatchRecord>(&path, &[], api_key)
            .inspect_err(|e| tracing::warn!(%match_id, error = %e, "match fetch failed"))
    }

    pub fn get_match_timeline(
        &self,
        match_id: &MatchId,
        api_key: &ApiKey,
    ) -> Result<MatchTimeline, AppError> {
        let path = endpoints::match_timeline(match_id);

        self.execute_request::<MatchTimeline>(&path, &[], api_key)
            .inspect_err(|e| tracing::warn!(%match_id, error = %e, "timeline fetch failed"))
    }
}

/// Transport errors render the request URL, which carries the api_key query
/// pair. Only the kind, detail and source are kept, and any leftover copy of
/// the key is masked.
fn describe_transport(transport: &ureq::Transport, api_key: &ApiKey) -> String {
    let mut message = transport.kind().to_string();
    if let Some(detail) = transport.message() {
        message.push_str(": ");
        message.push_str(detail);
    }
    if let Some(source) = std::error::Error::source(transport) {
        message.push_str(": ");
        message.push_str(&source.to_string());
    }
    if api_key.as_str().is_empty() {
        message
    } else {
        message.replace(api_key.as_str(), "****")
    }
}

/// Riot wraps errors as `{"status": {"message": ..., "status_code": ...}}`;
/// some gateways answer with a flat `{"message": ...}` or plain text.
fn api_error_message(body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<Value>(body) {
        let message = json
            .pointer("/status/message")
            .or_else(|| json.get("message"))
            .and_then(Value::as_str);
        if let Some(message) = message {
            return message.to_string();
        }
    }
    body.trim().to_string()
}
