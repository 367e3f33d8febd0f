//! Text notation for positions, in the spirit of FEN.
//!
//! `l5t/1d3c1/r1j1w1e/7/7/7/E1W1J1R/1C3D1/T5L 1`
//!
//! - nine `/`-separated rows, top (row 0, player two's edge) first
//! - digits are runs of empty squares, letters are pieces: `r c d w j t l e`
//!   (rat cat dog wolf leopard tiger lion elephant), uppercase for player one
//! - side to move, `1` or `2`
//! - optional winner, `-`, `1` or `2`
//!
//! Positions are placed on the standard geography.

use std::sync::Arc;

use crate::{geography::Geography, position::Position, types::*};

pub const START_NOTATION: &str = "l5t/1d3c1/r1j1w1e/7/7/7/E1W1J1R/1C3D1/T5L 1";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    #[error("expected 2 or 3 fields, found {0}")]
    FieldCount(usize),
    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },
    #[error("row {row} has {found} squares, expected {expected}")]
    RowWidth {
        row: usize,
        found: usize,
        expected: usize,
    },
    #[error("invalid piece character '{0}'")]
    InvalidPiece(char),
    #[error("invalid player field '{0}'")]
    InvalidPlayer(String),
}

fn parse_player(field: &str) -> Result<Player, NotationError> {
    match field {
        "1" => Ok(Player::One),
        "2" => Ok(Player::Two),
        _ => Err(NotationError::InvalidPlayer(field.to_string())),
    }
}

impl Position {
    pub fn from_notation(text: &str) -> Result<Self, NotationError> {
        let parts: Vec<&str> = text.split_whitespace().collect();
        if !(2..=3).contains(&parts.len()) {
            return Err(NotationError::FieldCount(parts.len()));
        }

        let rows: Vec<&str> = parts[0].split('/').collect();
        if rows.len() != ROWS as usize {
            return Err(NotationError::RowCount {
                expected: ROWS as usize,
                found: rows.len(),
            });
        }

        let mut pos = Position::empty(Arc::new(Geography::standard()), parse_player(parts[1])?);
        for (row, row_str) in rows.iter().enumerate() {
            let mut col: usize = 0;
            for ch in row_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    col += d as usize;
                    continue;
                }
                let species = Species::from_letter(ch).ok_or(NotationError::InvalidPiece(ch))?;
                let owner = if ch.is_ascii_uppercase() {
                    Player::One
                } else {
                    Player::Two
                };
                let s = sq(col as i8, row as i8).ok_or(NotationError::RowWidth {
                    row,
                    found: col + 1,
                    expected: COLS as usize,
                })?;
                pos.set_piece(s, Some(Piece::new(species, owner)));
                col += 1;
            }
            if col != COLS as usize {
                return Err(NotationError::RowWidth {
                    row,
                    found: col,
                    expected: COLS as usize,
                });
            }
        }

        pos.winner = match parts.get(2) {
            None | Some(&"-") => None,
            Some(w) => Some(parse_player(w)?),
        };
        Ok(pos)
    }

    pub fn to_notation(&self) -> String {
        let mut rows = Vec::with_capacity(ROWS as usize);
        for row in 0..ROWS {
            let mut s = String::new();
            let mut empty = 0;
            for col in 0..COLS {
                let piece = sq(col, row).and_then(|q| self.piece_at(q));
                match piece {
                    None => empty += 1,
                    Some(p) => {
                        if empty > 0 {
                            s.push_str(&empty.to_string());
                            empty = 0;
                        }
                        let ch = p.species.letter();
                        s.push(match p.owner {
                            Player::One => ch.to_ascii_uppercase(),
                            Player::Two => ch,
                        });
                    }
                }
            }
            if empty > 0 {
                s.push_str(&empty.to_string());
            }
            rows.push(s);
        }
        let mut out = format!("{} {}", rows.join("/"), self.side_to_move.number());
        if let Some(w) = self.winner {
            out.push_str(&format!(" {}", w.number()));
        }
        out
    }
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
