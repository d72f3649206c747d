//! API client for the chess game server.
//!
//! # Overview
//! One operation per backend endpoint: create a game, fetch it, submit a move,
//! list games (all or per player), query valid moves from a cell, and fetch
//! the board at a point in the move history. Each operation is a single HTTP
//! round-trip whose decoded JSON body is returned unchanged.
//!
//! # Design
//! - `GameClient` is the sans-IO core: `build_*` produces an `HttpRequest`
//!   and `parse` consumes an `HttpResponse`. It holds only `base_url`.
//! - `GameApiClient` is the async host that runs those requests through
//!   reqwest.
//! - `ClientConfig` is resolved once by the caller (`from_env` falls back to
//!   `DEFAULT_BASE_URL`) and passed in at construction.
//! - Response shapes belong to the server and stay `serde_json::Value`.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod types;

pub use api::GameApiClient;
pub use client::GameClient;
pub use config::{ClientConfig, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{MovePayload, NewGame, PieceType, Position};
