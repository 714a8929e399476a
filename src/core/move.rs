// Copyright 2017-2026 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::{fmt, str::FromStr};

use serde::Serialize;
use thiserror::Error;

use crate::core::*;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveParseError {
    #[error("move must be four characters long, got {0:?}")]
    InvalidLength(String),
    #[error("invalid square in move: {0}")]
    InvalidSquare(#[from] SquareParseError),
}

/// A move, as produced by the move generator: the square a piece leaves and the square it lands on.
///
/// A move carries no information about what kind of piece is moving or whether it captures; both are
/// properties of the board the move is applied to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Move {
    from: Square,
    to: Square,
}

impl Move {
    pub const fn new(from: Square, to: Square) -> Move {
        Move { from, to }
    }

    /// Returns the source square of this move.
    pub const fn source(self) -> Square {
        self.from
    }

    /// Returns the destination square of this move.
    pub const fn destination(self) -> Square {
        self.to
    }

    /// Renders this move in coordinate notation, e.g. `e2e4`.
    pub fn as_uci(self) -> String {
        format!("{}{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 4 || !s.is_ascii() {
            return Err(MoveParseError::InvalidLength(s.to_owned()));
        }

        let from = s[0..2].parse::<Square>()?;
        let to = s[2..4].parse::<Square>()?;
        Ok(Move::new(from, to))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}
