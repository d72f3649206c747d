//! Stateless HTTP request builder and response parser for the game API.
//!
//! # Design
//! `GameClient` holds only a `base_url` and carries no mutable state between
//! calls. Each endpoint gets a `build_*` method that produces an `HttpRequest`;
//! a single generic `parse` consumes any `HttpResponse`, since every endpoint
//! shares the same success rule and the bodies are opaque to the client.
//!
//! Game ids and player names are interpolated into the path as given. No
//! validation happens here; the server is the authority.

use std::fmt::Display;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::NewGame;

/// Synchronous, stateless client for the game API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network.
#[derive(Debug, Clone)]
pub struct GameClient {
    base_url: String,
}

impl GameClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_create_game(&self, input: &NewGame) -> Result<HttpRequest, ApiError> {
        self.post("/games".to_string(), input)
    }

    pub fn build_get_game(&self, game_id: impl Display) -> HttpRequest {
        self.get(format!("/games/{game_id}"), Vec::new())
    }

    /// The move is sent as the exact body, whatever its shape.
    pub fn build_make_move<M>(&self, game_id: impl Display, mv: &M) -> Result<HttpRequest, ApiError>
    where
        M: Serialize + ?Sized,
    {
        self.post(format!("/games/{game_id}/move"), mv)
    }

    pub fn build_list_games(&self) -> HttpRequest {
        self.get("/games".to_string(), Vec::new())
    }

    pub fn build_list_player_games(&self, player_name: impl Display) -> HttpRequest {
        self.get(format!("/games/player/{player_name}"), Vec::new())
    }

    pub fn build_valid_moves(&self, game_id: impl Display, row: i32, col: i32) -> HttpRequest {
        self.get(
            format!("/games/{game_id}/valid-moves"),
            vec![
                ("row".to_string(), row.to_string()),
                ("col".to_string(), col.to_string()),
            ],
        )
    }

    pub fn build_board_at_move(&self, game_id: impl Display, move_index: i32) -> HttpRequest {
        self.get(
            format!("/games/{game_id}/board"),
            vec![("move".to_string(), move_index.to_string())],
        )
    }

    /// Decode a response body. Any non-2xx status is an error carrying the raw
    /// body; use `T = serde_json::Value` to get the body back untouched.
    ///
    /// A 2xx with an empty body decodes as JSON `null`.
    pub fn parse<T: DeserializeOwned>(&self, response: HttpResponse) -> Result<T, ApiError> {
        if !response.is_success() {
            return Err(ApiError::Status {
                status: response.status,
                body: response.body,
            });
        }
        let body = match response.body.trim() {
            "" => "null",
            body => body,
        };
        serde_json::from_str(body).map_err(ApiError::Decode)
    }

    fn get(&self, route: String, query: Vec<(String, String)>) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}{route}", self.base_url),
            query,
            headers: Vec::new(),
            body: None,
        }
    }

    fn post<B>(&self, route: String, body: &B) -> Result<HttpRequest, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_string(body).map_err(ApiError::Encode)?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}{route}", self.base_url),
            query: Vec::new(),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }
}
