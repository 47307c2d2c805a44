use crate::wire::ListResponse;
use crate::{API_BASE, Game, Team};
use chrono::NaiveDate;
use log::debug;
use reqwest::Client;
use serde_json::json;
use std::fmt;
use std::time::Duration;

pub type ApiResult<T> = Result<T, ApiError>;

/// balldontlie API client.
#[derive(Debug, Clone)]
pub struct NbaApi {
    client: Client,
    base_url: String,
    /// None leaves reqwest's own default in place.
    timeout: Option<Duration>,
}

impl Default for NbaApi {
    fn default() -> Self {
        Self {
            client: Client::builder()
                .user_agent("courtside/0.1 (terminal schedule viewer)")
                .build()
                .unwrap_or_default(),
            base_url: API_BASE.to_owned(),
            timeout: None,
        }
    }
}

#[derive(Debug)]
pub enum ApiError {
    Network(reqwest::Error, String),
    Api(reqwest::Error, String),
    Parsing(reqwest::Error, String),
    Other(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e, url) => write!(f, "Network error for {url}: {e}"),
            ApiError::Api(e, url) => write!(f, "API error for {url}: {e}"),
            ApiError::Parsing(e, url) => write!(f, "Parse error for {url}: {e}"),
            ApiError::Other(msg) => write!(f, "Error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Network(e, _) | ApiError::Api(e, _) | ApiError::Parsing(e, _) => Some(e),
            ApiError::Other(_) => None,
        }
    }
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Network(..) => "network",
            ApiError::Api(..) => "api",
            ApiError::Parsing(..) => "parsing",
            ApiError::Other(_) => "other",
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            ApiError::Network(_, url) | ApiError::Api(_, url) | ApiError::Parsing(_, url) => {
                Some(url)
            }
            ApiError::Other(_) => None,
        }
    }

    /// Upstream HTTP status, for non-2xx responses.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api(e, _) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// JSON rendering of the error, as embedded in the proxy's failure envelope.
    pub fn to_json(&self) -> serde_json::Value {
        json!({
            "kind": self.kind(),
            "url": self.url(),
            "status": self.status(),
            "detail": self.to_string(),
        })
    }
}

impl NbaApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the client at another API root, e.g. a local proxy or a test server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn teams_url(&self) -> String {
        format!("{}/teams", self.base_url)
    }

    /// Games of one team in `season`, from `start_date` on.
    ///
    /// Built by hand: the bracketed keys are what the v1 API expects and every
    /// value is a number or a `YYYY-MM-DD` date, so nothing needs escaping.
    pub fn games_url(&self, team_id: u32, season: u16, start_date: NaiveDate) -> String {
        format!(
            "{}/games?seasons[]={season}&team_ids[]={team_id}&start_date={}",
            self.base_url,
            start_date_param(start_date)
        )
    }

    /// Fetch every team, in the order the API lists them.
    pub async fn fetch_teams(&self) -> ApiResult<Vec<Team>> {
        let url = self.teams_url();
        let raw: ListResponse<Team> = self.get(&url).await?;
        if let Some(meta) = &raw.meta {
            debug!("teams meta: {meta:?}");
        }
        Ok(raw.data)
    }

    /// Fetch the first page of upcoming games for one team.
    pub async fn fetch_games(
        &self,
        team_id: u32,
        season: u16,
        start_date: NaiveDate,
    ) -> ApiResult<Vec<Game>> {
        let url = self.games_url(team_id, season, start_date);
        let raw: ListResponse<Game> = self.get(&url).await?;
        if let Some(meta) = raw.meta.as_ref().filter(|m| m.has_more()) {
            debug!("games for team {team_id} continue past page {:?}", meta.current_page);
        }
        Ok(raw.data)
    }

    /// Fetch the team list as raw bytes, untouched, for relaying.
    pub async fn fetch_teams_raw(&self) -> ApiResult<Vec<u8>> {
        let url = self.teams_url();
        let response = self.send(&url).await?;
        response
            .bytes()
            .await
            .map(|body| body.to_vec())
            .map_err(|e| ApiError::Network(e, url))
    }

    async fn get<T: serde::de::DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        self.send(url)
            .await?
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parsing(e, url.to_owned()))
    }

    async fn send(&self, url: &str) -> ApiResult<reqwest::Response> {
        let mut request = self.client.get(url);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e, url.to_owned()))?;

        response
            .error_for_status()
            .map_err(|e| ApiError::Api(e, url.to_owned()))
    }
}

/// Query value for `start_date`: a zero-padded calendar date.
pub fn start_date_param(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    const TEAMS_BODY: &str = r#"{
        "data": [
            {"id": 1, "abbreviation": "ATL", "city": "Atlanta", "conference": "East",
             "division": "Southeast", "full_name": "Atlanta Hawks", "name": "Hawks"},
            {"id": 2, "abbreviation": "BOS", "city": "Boston", "conference": "East",
             "division": "Atlantic", "full_name": "Boston Celtics", "name": "Celtics"}
        ],
        "meta": {"total_pages": 1, "current_page": 1, "next_page": null, "per_page": 30, "total_count": 30}
    }"#;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn start_date_is_zero_padded() {
        assert_eq!(start_date_param(day(2023, 3, 7)), "2023-03-07");
        assert_eq!(start_date_param(day(2023, 11, 25)), "2023-11-25");
    }

    #[test]
    fn games_url_carries_season_team_and_start_date() {
        let api = NbaApi::new().with_base_url("http://localhost:3000/");
        assert_eq!(
            api.games_url(14, 2023, day(2023, 10, 5)),
            "http://localhost:3000/games?seasons[]=2023&team_ids[]=14&start_date=2023-10-05"
        );
    }

    #[test]
    fn error_json_names_kind_and_url() {
        let err = ApiError::Other("boom".into());
        let value = err.to_json();
        assert_eq!(value["kind"], "other");
        assert!(value["url"].is_null());
        assert_eq!(value["detail"], "Error: boom");
    }

    #[tokio::test]
    async fn fetch_teams_keeps_response_order() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/teams")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(TEAMS_BODY)
            .create_async()
            .await;

        let api = NbaApi::new().with_base_url(server.url());
        let teams = api.fetch_teams().await.expect("teams should load");

        mock.assert_async().await;
        let names: Vec<&str> = teams.iter().map(|t| t.full_name.as_str()).collect();
        assert_eq!(names, vec!["Atlanta Hawks", "Boston Celtics"]);
        assert_eq!(teams[1].abbreviation, "BOS");
    }

    #[tokio::test]
    async fn fetch_games_sends_expected_query() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/games")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("seasons[]".into(), "2023".into()),
                Matcher::UrlEncoded("team_ids[]".into(), "1".into()),
                Matcher::UrlEncoded("start_date".into(), "2023-10-24".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"data": [{"id": 10, "date": "2023-10-25T00:00:00.000Z", "period": 0,
                    "status": "2023-10-25T23:30:00Z", "season": 2023,
                    "home_team": {"id": 1, "abbreviation": "BOS"},
                    "visitor_team": {"id": 20, "abbreviation": "NYK"}}]}"#,
            )
            .create_async()
            .await;

        let api = NbaApi::new().with_base_url(server.url());
        let games = api
            .fetch_games(1, crate::SEASON, day(2023, 10, 24))
            .await
            .expect("games should load");

        mock.assert_async().await;
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].visitor_team.abbreviation, "NYK");
        assert!(games[0].tip_off().is_some());
    }

    #[tokio::test]
    async fn non_success_status_is_api_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/teams")
            .with_status(503)
            .create_async()
            .await;

        let api = NbaApi::new().with_base_url(server.url());
        let err = api.fetch_teams().await.expect_err("503 must fail");
        assert!(matches!(err, ApiError::Api(..)), "got {err}");
        assert_eq!(err.status(), Some(503));
        assert_eq!(err.kind(), "api");
    }

    #[tokio::test]
    async fn malformed_body_is_parsing_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/teams")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let api = NbaApi::new().with_base_url(server.url());
        let err = api.fetch_teams().await.expect_err("garbage must fail");
        assert!(matches!(err, ApiError::Parsing(..)), "got {err}");
    }

    #[tokio::test]
    async fn raw_teams_body_is_untouched() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/teams")
            .with_status(200)
            .with_body(TEAMS_BODY)
            .create_async()
            .await;

        let api = NbaApi::new().with_base_url(server.url());
        let body = api.fetch_teams_raw().await.expect("raw body");
        assert_eq!(body, TEAMS_BODY.as_bytes());
    }

    #[tokio::test]
    async fn unreachable_host_is_network_error() {
        let api = NbaApi::new()
            .with_base_url("http://127.0.0.1:9")
            .with_timeout(Duration::from_secs(2));
        let err = api.fetch_teams().await.expect_err("nothing listens on port 9");
        assert!(matches!(err, ApiError::Network(..)), "got {err}");
        assert_eq!(err.url(), Some("http://127.0.0.1:9/teams"));
    }
}
