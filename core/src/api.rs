//! Async network client for the game API.
//!
//! `GameApiClient` pairs a `GameClient` with a `reqwest::Client`. Every method
//! builds one request, awaits one round-trip and parses the body. There is no
//! retry, caching or timeout, and failures go straight back to the caller.

use std::fmt::Display;

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::client::GameClient;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::NewGame;

/// Async client for the game API.
///
/// Cheap to clone; clones share reqwest's connection pool. Each method maps
/// to one endpoint and returns the decoded JSON body as the server sent it.
#[derive(Debug, Clone)]
pub struct GameApiClient {
    http: Client,
    core: GameClient,
}

impl GameApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let http = Client::builder()
            .user_agent(concat!("chess-api-core/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_http_client(config, http))
    }

    /// Reuse an existing reqwest client (connection pool, proxy settings).
    pub fn with_http_client(config: &ClientConfig, http: Client) -> Self {
        Self {
            http,
            core: GameClient::new(&config.base_url),
        }
    }

    pub fn base_url(&self) -> &str {
        self.core.base_url()
    }

    pub async fn create_game(&self, input: &NewGame) -> Result<Value, ApiError> {
        let request = self.core.build_create_game(input)?;
        self.execute(request).await
    }

    pub async fn get_game(&self, game_id: impl Display) -> Result<Value, ApiError> {
        self.execute(self.core.build_get_game(game_id)).await
    }

    pub async fn make_move<M>(&self, game_id: impl Display, mv: &M) -> Result<Value, ApiError>
    where
        M: Serialize + ?Sized,
    {
        let request = self.core.build_make_move(game_id, mv)?;
        self.execute(request).await
    }

    pub async fn list_games(&self) -> Result<Value, ApiError> {
        self.execute(self.core.build_list_games()).await
    }

    pub async fn list_player_games(&self, player_name: impl Display) -> Result<Value, ApiError> {
        self.execute(self.core.build_list_player_games(player_name)).await
    }

    pub async fn valid_moves(
        &self,
        game_id: impl Display,
        row: i32,
        col: i32,
    ) -> Result<Value, ApiError> {
        self.execute(self.core.build_valid_moves(game_id, row, col)).await
    }

    pub async fn board_at_move(
        &self,
        game_id: impl Display,
        move_index: i32,
    ) -> Result<Value, ApiError> {
        self.execute(self.core.build_board_at_move(game_id, move_index)).await
    }

    async fn execute(&self, request: HttpRequest) -> Result<Value, ApiError> {
        tracing::debug!(method = %request.method, url = %request.url(), "dispatching request");

        let mut builder = match request.method {
            HttpMethod::Get => self.http.get(&request.path),
            HttpMethod::Post => self.http.post(&request.path),
        };
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response.text().await?;

        self.core.parse(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
