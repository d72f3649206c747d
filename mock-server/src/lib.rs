//! In-memory stand-in for the chess game backend.
//!
//! Serves the same routes under `/api` as the real server, with games held in
//! a map. It records moves but does not play chess: no legality check, and
//! `valid-moves` answers with every on-board king step from the cell.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Color {
    White,
    Black,
}

impl Color {
    fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    Waiting,
    InProgress,
    Checkmate,
    Stalemate,
    Draw,
    Resigned,
    VictoryByTime,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Move {
    pub from: Position,
    pub to: Position,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion_piece: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: u64,
    pub white_player: String,
    pub black_player: String,
    pub is_online_mode: bool,
    pub time_limit: Option<u32>,
    pub white_time_remaining: Option<u32>,
    pub black_time_remaining: Option<u32>,
    pub current_turn: Color,
    pub status: GameStatus,
    pub move_history: Vec<Move>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGame {
    pub white_player: String,
    pub black_player: String,
    #[serde(default)]
    pub is_online_mode: bool,
    #[serde(default)]
    pub time_limit: Option<u32>,
}

#[derive(Deserialize)]
pub struct CellQuery {
    pub row: i32,
    pub col: i32,
}

#[derive(Deserialize)]
pub struct BoardQuery {
    #[serde(rename = "move")]
    pub index: i64,
}

#[derive(Default)]
pub struct Store {
    next_id: u64,
    games: BTreeMap<u64, Game>,
}

pub type Db = Arc<RwLock<Store>>;

type ErrorResponse = (StatusCode, Json<Value>);

fn bad_request(message: &str) -> ErrorResponse {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message })))
}

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    let games = Router::new()
        .route("/games", get(list_games).post(create_game))
        .route("/games/{id}", get(get_game))
        .route("/games/{id}/move", post(make_move))
        .route("/games/{id}/valid-moves", get(valid_moves))
        .route("/games/{id}/board", get(board_at_move))
        .route("/games/player/{name}", get(player_games));
    Router::new().nest("/api", games).with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!("mock game server listening on {addr}");
    }
    axum::serve(listener, app()).await
}

async fn list_games(State(db): State<Db>) -> Json<Vec<Game>> {
    let store = db.read().await;
    Json(store.games.values().cloned().collect())
}

async fn create_game(State(db): State<Db>, Json(input): Json<CreateGame>) -> Json<Game> {
    let mut store = db.write().await;
    store.next_id += 1;
    let clock = input.time_limit.filter(|&limit| limit > 0);
    let game = Game {
        id: store.next_id,
        white_player: input.white_player,
        black_player: input.black_player,
        is_online_mode: input.is_online_mode,
        time_limit: input.time_limit,
        white_time_remaining: clock,
        black_time_remaining: clock,
        current_turn: Color::White,
        status: GameStatus::InProgress,
        move_history: Vec::new(),
    };
    tracing::debug!(id = game.id, "created game");
    store.games.insert(game.id, game.clone());
    Json(game)
}

async fn get_game(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<Game>, StatusCode> {
    let store = db.read().await;
    store.games.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn player_games(State(db): State<Db>, Path(name): Path<String>) -> Json<Vec<Game>> {
    let store = db.read().await;
    Json(
        store
            .games
            .values()
            .filter(|g| g.white_player == name || g.black_player == name)
            .cloned()
            .collect(),
    )
}

async fn make_move(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(mv): Json<Move>,
) -> Result<Json<Game>, ErrorResponse> {
    let mut store = db.write().await;
    let game = store
        .games
        .get_mut(&id)
        .ok_or_else(|| bad_request("Game not found"))?;
    if game.status != GameStatus::InProgress {
        return Err(bad_request("Game is over"));
    }
    tracing::debug!(id, ?mv, "recording move");
    game.move_history.push(mv);
    game.current_turn = game.current_turn.opponent();
    Ok(Json(game.clone()))
}

async fn valid_moves(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Query(cell): Query<CellQuery>,
) -> Json<Vec<Move>> {
    let store = db.read().await;
    if !store.games.contains_key(&id) {
        return Json(Vec::new());
    }
    Json(king_steps(Position {
        row: cell.row,
        col: cell.col,
    }))
}

async fn board_at_move(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Query(query): Query<BoardQuery>,
) -> Result<Json<Value>, ErrorResponse> {
    let store = db.read().await;
    let game = store
        .games
        .get(&id)
        .ok_or_else(|| bad_request("Game not found"))?;
    let history = &game.move_history;
    let index = usize::try_from(query.index)
        .ok()
        .filter(|&i| i <= history.len())
        .ok_or_else(|| bad_request("Invalid move index"))?;
    let last_move = index.checked_sub(1).map(|i| &history[i]);
    Ok(Json(json!({
        "moveIndex": index,
        "lastMove": last_move,
        "moves": &history[..index],
    })))
}

/// Every on-board square one king step away from `from`.
fn king_steps(from: Position) -> Vec<Move> {
    let mut moves = Vec::new();
    for dr in -1..=1 {
        for dc in -1..=1 {
            if dr == 0 && dc == 0 {
                continue;
            }
            let (Some(row), Some(col)) = (from.row.checked_add(dr), from.col.checked_add(dc))
            else {
                continue;
            };
            let to = Position { row, col };
            if (0..8).contains(&to.row) && (0..8).contains(&to.col) {
                moves.push(Move {
                    from,
                    to,
                    promotion_piece: None,
                });
            }
        }
    }
    moves
}
