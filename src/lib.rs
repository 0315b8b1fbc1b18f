//! Blocking client for the Riot Games account-v1 and match-v5 APIs.
//!
//! Resolve a Riot ID to a PUUID, list recent match ids and pull match or
//! timeline documents. Every call takes the caller's API key, performs one
//! GET and returns a [`Result`] classified into [`AppError`].

pub mod api;
pub mod config;
pub mod error;
pub mod logging;

pub use api::client::RiotApiClient;
pub use api::filters::{MatchFilters, MatchType};
pub use api::models::{ApiKey, MatchId, MatchRecord, MatchTimeline, PlayerIdentity, Puuid};
pub use config::Config;
pub use error::{AppError, ErrorKind};
