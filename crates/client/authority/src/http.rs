//! HTTP/JSON authority client.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use game_core::{Difficulty, Direction, Dungeon, GameState, HeroRoster, Theme};
use reqwest::{RequestBuilder, Url};
use serde::de::DeserializeOwned;

use crate::config::AuthorityConfig;
use crate::traits::{AuthorityError, GameAuthority};
use crate::types::{
    CombatAction, CombatOutcome, CombatRequest, ErrorBody, GenerateRequest, Greeting,
    HeroSelection, MoveOutcome, MoveRequest,
};

/// Authority reached over its `/api` HTTP endpoints.
pub struct HttpAuthority {
    /// `<base>/api`
    api_url: Url,

    /// HTTP client
    http_client: reqwest::Client,

    timeout: Duration,
}

impl HttpAuthority {
    pub fn new(config: &AuthorityConfig) -> Result<Self, AuthorityError> {
        let base = config.normalized_url()?;
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AuthorityError::Config(format!("failed to build HTTP client: {e}")))?;

        let api_url = Url::parse(&format!("{base}/api"))
            .map_err(|e| AuthorityError::Config(format!("invalid authority URL {base:?}: {e}")))?;

        Ok(Self {
            api_url,
            http_client,
            timeout: config.timeout,
        })
    }

    pub fn api_url(&self) -> &str {
        self.api_url.as_str()
    }

    /// Appends percent-encoded path segments to the API root, so ids can
    /// never introduce extra segments or a query.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, AuthorityError> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                AuthorityError::Config(format!("{} cannot be a base URL", self.api_url))
            })?
            .extend(segments);
        Ok(url)
    }

    /// Sends a request and decodes its JSON body.
    ///
    /// Non-success statuses become [`AuthorityError::Status`] (or `NotFound`)
    /// carrying the body's `detail`; undecodable bodies become `Decode`.
    async fn send<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        request: RequestBuilder,
    ) -> Result<T, AuthorityError> {
        let started = Instant::now();

        let response = request.send().await.map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.transport_error(e))?;

        tracing::debug!(
            operation,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "authority responded"
        );

        if !status.is_success() {
            return Err(AuthorityError::from_status(
                status.as_u16(),
                ErrorBody::message(&body),
            ));
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::debug!(operation, body = %body, "undecodable authority response");
            AuthorityError::Decode(format!("{operation}: {e}"))
        })
    }

    fn transport_error(&self, error: reqwest::Error) -> AuthorityError {
        if error.is_timeout() {
            AuthorityError::Timeout(self.timeout)
        } else {
            AuthorityError::Network(error.to_string())
        }
    }
}

#[async_trait]
impl GameAuthority for HttpAuthority {
    fn name(&self) -> &str {
        "http"
    }

    async fn generate_dungeon(
        &self,
        difficulty: Difficulty,
        theme: Option<Theme>,
    ) -> Result<Dungeon, AuthorityError> {
        let request = self
            .http_client
            .post(self.endpoint(&["generate-dungeon"])?)
            .json(&GenerateRequest { difficulty, theme });
        self.send("generate_dungeon", request).await
    }

    async fn start_session(
        &self,
        dungeon_id: &str,
        hero: HeroSelection,
    ) -> Result<GameState, AuthorityError> {
        let request = self
            .http_client
            .post(self.endpoint(&["start-game"])?)
            .query(&[("dungeon_id", dungeon_id)])
            .json(&hero);
        self.send("start_session", request).await
    }

    async fn fetch_session(&self, session_id: &str) -> Result<GameState, AuthorityError> {
        let request = self.http_client.get(self.endpoint(&["game", session_id])?);
        self.send("fetch_session", request).await
    }

    async fn move_player(
        &self,
        session_id: &str,
        direction: Direction,
    ) -> Result<MoveOutcome, AuthorityError> {
        let request = self
            .http_client
            .post(self.endpoint(&["game", session_id, "move"])?)
            .json(&MoveRequest { direction });
        self.send("move_player", request).await
    }

    async fn combat_action(
        &self,
        session_id: &str,
        action: CombatAction,
    ) -> Result<CombatOutcome, AuthorityError> {
        let request = self
            .http_client
            .post(self.endpoint(&["game", session_id, "combat"])?)
            .json(&CombatRequest {
                action_type: action,
            });
        self.send("combat_action", request).await
    }

    async fn fetch_heroes(&self) -> Result<HeroRoster, AuthorityError> {
        let request = self.http_client.get(self.endpoint(&["heroes"])?);
        self.send("fetch_heroes", request).await
    }

    async fn ping(&self) -> Result<String, AuthorityError> {
        let request = self.http_client.get(self.endpoint(&[""])?);
        let greeting: Greeting = self.send("ping", request).await?;
        Ok(greeting.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_live_under_api_prefix() {
        let authority =
            HttpAuthority::new(&AuthorityConfig::new("http://example.test:8001/")).unwrap();
        assert_eq!(authority.api_url(), "http://example.test:8001/api");
        assert_eq!(
            authority.endpoint(&["game", "abc", "move"]).unwrap().as_str(),
            "http://example.test:8001/api/game/abc/move"
        );
        assert_eq!(
            authority.endpoint(&[""]).unwrap().as_str(),
            "http://example.test:8001/api/"
        );
    }

    #[test]
    fn session_ids_stay_inside_one_segment() {
        let authority =
            HttpAuthority::new(&AuthorityConfig::new("http://example.test:8001")).unwrap();
        let url = authority.endpoint(&["game", "../admin?x=1", "move"]).unwrap();

        assert_eq!(url.path(), "/api/game/..%2Fadmin%3Fx=1/move");
        assert_eq!(url.query(), None);
    }

    #[tokio::test]
    async fn unreachable_authority_is_a_transport_error() {
        let config =
            AuthorityConfig::new("http://127.0.0.1:9").with_timeout(Duration::from_millis(500));
        let authority = HttpAuthority::new(&config).unwrap();

        let err = authority.ping().await.unwrap_err();
        assert!(matches!(
            err,
            AuthorityError::Network(_) | AuthorityError::Timeout(_)
        ));
    }
}
