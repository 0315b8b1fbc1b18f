// Path builders for the account-v1 and match-v5 endpoints. Every dynamic
// segment is percent-encoded, so a space is always sent as %20.

use super::models::{MatchId, Puuid};

pub const ACCOUNT_ROUTE: &str = "/riot/account/v1/accounts";
pub const MATCH_ROUTE: &str = "/lol/match/v5/matches";

pub fn encode_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

pub fn account_by_riot_id(game_name: &str, tag_line: &str) -> String {
    format!(
        "{}/by-riot-id/{}/{}",
        ACCOUNT_ROUTE,
        encode_segment(game_name),
        encode_segment(tag_line)
    )
}

pub fn account_by_puuid(puuid: &Puuid) -> String {
    format!("{}/by-puuid/{}", ACCOUNT_ROUTE, encode_segment(puuid.as_str()))
}

pub fn match_ids_by_puuid(puuid: &Puuid) -> String {
    format!("{}/by-puuid/{}/ids", MATCH_ROUTE, encode_segment(puuid.as_str()))
}

pub fn match_by_id(match_id: &MatchId) -> String {
    format!("{}/{}", MATCH_ROUTE, encode_segment(match_id.as_str()))
}

pub fn match_timeline(match_id: &MatchId) -> String {
    format!("{}/{}/timeline", MATCH_ROUTE, encode_segment(match_id.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn riot_id_path_escapes_spaces() {
        assert_eq!(
            account_by_riot_id("Das Thug", "gyat"),
            "/riot/account/v1/accounts/by-riot-id/Das%20Thug/gyat"
        );
    }

    #[test]
    fn match_paths() {
        let id = MatchId::from("EUW1_7000000001");
        assert_eq!(match_by_id(&id), "/lol/match/v5/matches/EUW1_7000000001");
        assert_eq!(
            match_timeline(&id),
            "/lol/match/v5/matches/EUW1_7000000001/timeline"
        );
        assert_eq!(
            match_ids_by_puuid(&Puuid::from("abc-123")),
            "/lol/match/v5/matches/by-puuid/abc-123/ids"
        );
        assert_eq!(
            account_by_puuid(&Puuid::from("abc-123")),
            "/riot/account/v1/accounts/by-puuid/abc-123"
        );
    }

    #[test]
    fn reserved_characters_stay_inside_one_segment() {
        assert_eq!(encode_segment("a/b?c#d"), "a%2Fb%3Fc%23d");
    }

    proptest! {
        #[test]
        fn every_space_becomes_percent_20(
            words in prop::collection::vec("[A-Za-z0-9]{1,6}", 1..5),
            gaps in prop::collection::vec(0usize..3, 4),
        ) {
            let mut name = String::new();
            for (i, word) in words.iter().enumerate() {
                if i > 0 {
                    name.push_str(&" ".repeat(gaps[i - 1]));
                }
                name.push_str(word);
            }

            let encoded = encode_segment(&name);
            prop_assert!(!encoded.contains(' '));
            prop_assert_eq!(encoded.matches("%20").count(), name.matches(' ').count());
            prop_assert_eq!(encoded, name.replace(' ', "%20"));
        }
    }
}
