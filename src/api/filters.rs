use chrono::{DateTime, Utc};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchType {
    Ranked,
    Normal,
    Tourney,
    Tutorial,
}

impl MatchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchType::Ranked => "ranked",
            MatchType::Normal => "normal",
            MatchType::Tourney => "tourney",
            MatchType::Tutorial => "tutorial",
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional narrowing for the match-id listing. Only fields that are set are
/// sent; times are epoch seconds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchFilters {
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
    pub queue: Option<u16>,
    pub match_type: Option<MatchType>,
    pub start: Option<u32>,
    /// 0..=100 on the service side; larger values come back as a 400.
    pub count: Option<u32>,
}

impl MatchFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_time(mut self, epoch_secs: i64) -> Self {
        self.start_time = Some(epoch_secs);
        self
    }

    pub fn end_time(mut self, epoch_secs: i64) -> Self {
        self.end_time = Some(epoch_secs);
        self
    }

    pub fn between(self, from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        self.start_time(from.timestamp()).end_time(to.timestamp())
    }

    pub fn queue(mut self, queue_id: u16) -> Self {
        self.queue = Some(queue_id);
        self
    }

    pub fn match_type(mut self, match_type: MatchType) -> Self {
        self.match_type = Some(match_type);
        self
    }

    pub fn start(mut self, index: u32) -> Self {
        self.start = Some(index);
        self
    }

    pub fn count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.query_pairs().is_empty()
    }

    /// Query parameters in wire order, unset filters omitted. Values are raw;
    /// the HTTP layer encodes them.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(v) = self.start_time {
            pairs.push(("startTime", v.to_string()));
        }
        if let Some(v) = self.end_time {
            pairs.push(("endTime", v.to_string()));
        }
        if let Some(v) = self.queue {
            pairs.push(("queue", v.to_string()));
        }
        if let Some(v) = self.match_type {
            pairs.push(("type", v.as_str().to_string()));
        }
        if let Some(v) = self.start {
            pairs.push(("start", v.to_string()));
        }
        if let Some(v) = self.count {
            pairs.push(("count", v.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn count_only_sends_count() {
        let filters = MatchFilters::new().count(20);
        assert_eq!(filters.query_pairs(), vec![("count", "20".to_string())]);
    }

    #[test]
    fn empty_filters_send_nothing() {
        assert!(MatchFilters::default().is_empty());
    }

    #[test]
    fn all_filters_in_wire_order() {
        let from = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let to = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
        let filters = MatchFilters::new()
            .between(from, to)
            .queue(420)
            .match_type(MatchType::Ranked)
            .start(10)
            .count(5);

        let pairs = filters.query_pairs();
        let keys: Vec<&str> = pairs.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, ["startTime", "endTime", "queue", "type", "start", "count"]);
        assert_eq!(pairs[0].1, "1704067200");
        assert_eq!(pairs[1].1, "1704153600");
        assert_eq!(pairs[3].1, "ranked");
    }
}
