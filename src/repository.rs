use crate::error::FetchError;
use serde::Deserialize;

const PROFILE_BASE_URL: &str = "https://github.com";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Owner {
    pub login: String,
    pub avatar_url: String,
}

/// One repository as returned by the search API. Only the consumed fields are kept.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Repository {
    pub name: String,
    pub owner: Owner,
    pub html_url: String,
    pub stargazers_count: u64,
    pub forks: u64,
    pub open_issues: u64,
}

impl Repository {
    pub fn profile_url(&self) -> String {
        format!("{PROFILE_BASE_URL}/{}", self.owner.login)
    }
}

/// Body of a search response. GitHub answers errors with `message` and no `items`.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Option<Vec<Repository>>,
    #[serde(default)]
    pub message: Option<String>,
}

impl SearchResponse {
    pub fn into_items(self) -> Result<Vec<Repository>, FetchError> {
        match self.items {
            Some(items) => Ok(items),
            None => Err(FetchError::Decode(
                self.message
                    .unwrap_or_else(|| "response has no items".to_string()),
            )),
        }
    }
}

/// Error body of a non-2xx answer.
#[derive(Debug, Default, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
}

/// Turns a search answer into records or a classified failure. Non-2xx answers
/// keep the API's `message`, falling back to `status_text`.
pub fn parse_search_response(
    status: u16,
    status_text: &str,
    body: &str,
) -> Result<Vec<Repository>, FetchError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ApiMessage>(body)
            .ok()
            .and_then(|payload| payload.message)
            .unwrap_or_else(|| status_text.to_string());
        return Err(FetchError::Status { status, message });
    }

    serde_json::from_str::<SearchResponse>(body)
        .map_err(|error| FetchError::Decode(error.to_string()))?
        .into_items()
}

/// Groups digits in threes with commas, e.g. `1234567` -> `1,234,567`.
pub fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}

/// Everything a summary card displays, derived from a record and its position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepoCardModel {
    pub key: String,
    pub heading: String,
    pub avatar_url: String,
    pub html_url: String,
    pub login: String,
    pub profile_url: String,
    pub stars: String,
    pub forks: String,
    pub open_issues: String,
}

impl RepoCardModel {
    pub fn new(index: usize, repo: &Repository) -> Self {
        Self {
            key: repo.html_url.clone(),
            heading: format!("#{}", index + 1),
            avatar_url: repo.owner.avatar_url.clone(),
            html_url: repo.html_url.clone(),
            login: repo.owner.login.clone(),
            profile_url: repo.profile_url(),
            stars: format!("{} stars", group_digits(repo.stargazers_count)),
            forks: format!("{} forks", group_digits(repo.forks)),
            open_issues: format!("{} open", group_digits(repo.open_issues)),
        }
    }

    pub fn avatar_alt(&self) -> String {
        format!("Avatar for {}", self.login)
    }
}

/// Cards for a whole result list, in input order.
pub fn card_models(repos: &[Repository]) -> Vec<RepoCardModel> {
    repos
        .iter()
        .enumerate()
        .map(|(index, repo)| RepoCardModel::new(index, repo))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ruby_payload() -> &'static str {
        r#"{
            "total_count": 1,
            "items": [
                {
                    "name": "r1",
                    "owner": { "login": "a", "avatar_url": "u", "id": 7 },
                    "html_url": "h1",
                    "stargazers_count": 5,
                    "forks": 2,
                    "open_issues": 1,
                    "language": "Ruby"
                }
            ]
        }"#
    }

    #[test]
    fn parses_search_items_ignoring_extra_fields() {
        let response: SearchResponse = serde_json::from_str(ruby_payload()).unwrap();
        let items = response.into_items().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].owner.login, "a");
        assert_eq!(items[0].stargazers_count, 5);
    }

    #[test]
    fn missing_items_is_a_decode_failure_with_api_message() {
        let response: SearchResponse =
            serde_json::from_str(r#"{"message":"API rate limit exceeded"}"#).unwrap();
        assert_eq!(
            response.into_items(),
            Err(FetchError::Decode("API rate limit exceeded".to_string()))
        );
    }

    #[test]
    fn negative_counts_are_rejected() {
        let payload = r#"{"items":[{"name":"x","owner":{"login":"a","avatar_url":"u"},
            "html_url":"h","stargazers_count":-1,"forks":0,"open_issues":0}]}"#;
        assert!(serde_json::from_str::<SearchResponse>(payload).is_err());
    }

    #[test]
    fn ok_answer_with_items_yields_records() {
        let repos = parse_search_response(200, "OK", ruby_payload()).unwrap();
        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0].html_url, "h1");
    }

    #[test]
    fn ok_answer_without_items_is_decode_failure() {
        assert_eq!(
            parse_search_response(200, "OK", r#"{"total_count":0}"#),
            Err(FetchError::Decode("response has no items".to_string()))
        );
    }

    #[test]
    fn ok_answer_with_malformed_body_is_decode_failure() {
        let error = parse_search_response(200, "OK", "<html>").unwrap_err();
        assert_eq!(error.class(), "decode");
    }

    #[test]
    fn forbidden_answer_keeps_api_message() {
        let body = r#"{"message":"API rate limit exceeded for 127.0.0.1.","documentation_url":"https://docs.github.com"}"#;
        assert_eq!(
            parse_search_response(403, "Forbidden", body),
            Err(FetchError::Status {
                status: 403,
                message: "API rate limit exceeded for 127.0.0.1.".to_string(),
            })
        );
    }

    #[test]
    fn error_answer_without_message_uses_status_text() {
        assert_eq!(
            parse_search_response(502, "Bad Gateway", "upstream down"),
            Err(FetchError::Status {
                status: 502,
                message: "Bad Gateway".to_string(),
            })
        );
    }

    #[test]
    fn group_digits_inserts_commas() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(999), "999");
        assert_eq!(group_digits(1_000), "1,000");
        assert_eq!(group_digits(123_456), "123,456");
        assert_eq!(group_digits(1_234_567), "1,234,567");
    }

    #[test]
    fn card_labels_for_single_ruby_repo() {
        let response: SearchResponse = serde_json::from_str(ruby_payload()).unwrap();
        let repos = response.into_items().unwrap();
        let cards = card_models(&repos);

        assert_eq!(cards.len(), 1);
        let card = &cards[0];
        assert_eq!(card.heading, "#1");
        assert_eq!(card.key, "h1");
        assert_eq!(card.stars, "5 stars");
        assert_eq!(card.forks, "2 forks");
        assert_eq!(card.open_issues, "1 open");
        assert_eq!(card.profile_url, "https://github.com/a");
        assert_eq!(card.avatar_alt(), "Avatar for a");
    }

    #[test]
    fn card_headings_follow_input_order() {
        let repo = |url: &str, stars| Repository {
            name: url.to_string(),
            owner: Owner {
                login: "o".to_string(),
                avatar_url: "u".to_string(),
            },
            html_url: url.to_string(),
            stargazers_count: stars,
            forks: 0,
            open_issues: 0,
        };
        let cards = card_models(&[repo("h1", 12_000), repo("h2", 9)]);
        assert_eq!(cards[0].heading, "#1");
        assert_eq!(cards[0].stars, "12,000 stars");
        assert_eq!(cards[1].heading, "#2");
        assert_eq!(cards[1].key, "h2");
    }
}
