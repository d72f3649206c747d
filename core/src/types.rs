//! Request payloads for the game API.
//!
//! # Design
//! Response bodies stay opaque (`serde_json::Value`) because the backend owns
//! their shape. The request side is small enough to type: `NewGame` is the
//! only body the client itself assembles. `MovePayload` mirrors the backend's
//! move contract for callers who want it, but `make_move` accepts any
//! serializable value.
//!
//! These types are defined independently of the mock-server crate; the
//! integration tests catch schema drift.

use serde::{Deserialize, Serialize};

/// Body of `POST /games`.
///
/// All four keys are always serialized. `timeLimit` goes out as `null` when
/// unset rather than being omitted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewGame {
    pub white_player: String,
    pub black_player: String,
    #[serde(default)]
    pub is_online_mode: bool,
    #[serde(default)]
    pub time_limit: Option<u32>,
}

impl NewGame {
    /// Local game without a clock.
    pub fn new(white_player: impl Into<String>, black_player: impl Into<String>) -> Self {
        Self {
            white_player: white_player.into(),
            black_player: black_player.into(),
            is_online_mode: false,
            time_limit: None,
        }
    }

    pub fn online(mut self, is_online_mode: bool) -> Self {
        self.is_online_mode = is_online_mode;
        self
    }

    /// Time limit per player in seconds.
    pub fn time_limit(mut self, seconds: u32) -> Self {
        self.time_limit = Some(seconds);
        self
    }
}

/// A board cell as zero-based row and column. Row 0 is rank 1 and column 0 is
/// file `a`.
///
/// No range check is applied; the server decides what is on the board.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Parse algebraic notation such as `"e4"`.
    ///
    /// Returns `None` unless the input is exactly one ASCII letter followed by
    /// one ASCII digit.
    pub fn from_notation(notation: &str) -> Option<Self> {
        let &[file, rank] = notation.as_bytes() else {
            return None;
        };
        if !file.is_ascii_alphabetic() || !rank.is_ascii_digit() {
            return None;
        }
        Some(Self {
            row: i32::from(rank) - i32::from(b'1'),
            col: i32::from(file.to_ascii_lowercase()) - i32::from(b'a'),
        })
    }

    /// Algebraic notation, or `None` when the cell is off the 8x8 board.
    pub fn notation(&self) -> Option<String> {
        if !(0..8).contains(&self.row) || !(0..8).contains(&self.col) {
            return None;
        }
        let file = char::from(b'a' + self.col as u8);
        Some(format!("{file}{}", self.row + 1))
    }
}

/// Piece kinds as the backend spells them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PieceType {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

/// A move as the backend accepts it on `POST /games/{id}/move`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MovePayload {
    pub from: Position,
    pub to: Position,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion_piece: Option<PieceType>,
}

impl MovePayload {
    pub fn new(from: Position, to: Position) -> Self {
        Self {
            from,
            to,
            promotion_piece: None,
        }
    }

    pub fn promote_to(mut self, piece: PieceType) -> Self {
        self.promotion_piece = Some(piece);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_game_defaults_serialize_explicitly() {
        let body = serde_json::to_value(NewGame::new("alice", "bob")).unwrap();
        assert_eq!(
            body,
            json!({
                "whitePlayer": "alice",
                "blackPlayer": "bob",
                "isOnlineMode": false,
                "timeLimit": null
            })
        );
    }

    #[test]
    fn new_game_builder_sets_mode_and_clock() {
        let game = NewGame::new("alice", "bob").online(true).time_limit(300);
        let body = serde_json::to_value(&game).unwrap();
        assert_eq!(body["isOnlineMode"], true);
        assert_eq!(body["timeLimit"], 300);
    }

    #[test]
    fn new_game_accepts_missing_optional_fields() {
        let game: NewGame =
            serde_json::from_str(r#"{"whitePlayer":"a","blackPlayer":"b"}"#).unwrap();
        assert_eq!(game, NewGame::new("a", "b"));
    }

    #[test]
    fn position_parses_notation() {
        assert_eq!(Position::from_notation("e2"), Some(Position::new(1, 4)));
        assert_eq!(Position::from_notation("a1"), Some(Position::new(0, 0)));
        assert_eq!(Position::from_notation("H8"), Some(Position::new(7, 7)));
    }

    #[test]
    fn position_rejects_malformed_notation() {
        assert_eq!(Position::from_notation(""), None);
        assert_eq!(Position::from_notation("e"), None);
        assert_eq!(Position::from_notation("e10"), None);
        assert_eq!(Position::from_notation("4e"), None);
    }

    #[test]
    fn position_notation_is_none_off_board() {
        assert_eq!(Position::new(3, 4).notation().as_deref(), Some("e4"));
        assert_eq!(Position::new(8, 0).notation(), None);
        assert_eq!(Position::new(0, -1).notation(), None);
    }

    #[test]
    fn move_payload_omits_promotion_when_unset() {
        let mv = MovePayload::new(Position::new(1, 4), Position::new(3, 4));
        let body = serde_json::to_value(&mv).unwrap();
        assert_eq!(
            body,
            json!({"from": {"row": 1, "col": 4}, "to": {"row": 3, "col": 4}})
        );

        let promoted = MovePayload::new(Position::new(6, 0), Position::new(7, 0))
            .promote_to(PieceType::Queen);
        let body = serde_json::to_value(&promoted).unwrap();
        assert_eq!(body["promotionPiece"], "QUEEN");
    }
}
