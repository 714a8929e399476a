// Copyright 2017-2026 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The board model: a square-indexed array of 64 squares, each of which either holds a piece or is empty.

use std::{
    convert::TryFrom,
    fmt::{self, Write},
    iter::Peekable,
    str::Chars,
};

use thiserror::Error;
use tracing::trace;

use crate::core::{self, *};

/// Errors that describe a board that is not a well-formed chess position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("no {0} king on the board")]
    MissingKing(Color),
}

/// Possible errors that can arise when parsing FEN text into a `Board`.
#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum FenParseError {
    #[error("unexpected char: {0}")]
    UnexpectedChar(char),
    #[error("unexpected EOF while reading")]
    UnexpectedEnd,
    #[error("invalid digit")]
    InvalidDigit,
    #[error("file does not sum to 8")]
    FileDoesNotSumToEight,
    #[error("unknown piece: {0}")]
    UnknownPiece(char),
    #[error("invalid side to move")]
    InvalidSideToMove,
}

const fn white(kind: PieceKind) -> Option<Piece> {
    Some(Piece::new(Color::White, kind))
}

const fn black(kind: PieceKind) -> Option<Piece> {
    Some(Piece::new(Color::Black, kind))
}

const WK: Option<Piece> = white(PieceKind::King);
const WQ: Option<Piece> = white(PieceKind::Queen);
const WB: Option<Piece> = white(PieceKind::Bishop);
const WN: Option<Piece> = white(PieceKind::Knight);
const WR: Option<Piece> = white(PieceKind::Rook);
const WP: Option<Piece> = white(PieceKind::Pawn);
const BK: Option<Piece> = black(PieceKind::King);
const BQ: Option<Piece> = black(PieceKind::Queen);
const BB: Option<Piece> = black(PieceKind::Bishop);
const BN: Option<Piece> = black(PieceKind::Knight);
const BR: Option<Piece> = black(PieceKind::Rook);
const BP: Option<Piece> = black(PieceKind::Pawn);
const EMPTY: Option<Piece> = None;

/// A chess board: the piece (if any) standing on each of the 64 squares, indexed by [`Square`].
///
/// A `Board` holds piece placement only. Whose turn it is, castling rights, and the move clocks belong to
/// whatever game record owns the board.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Board {
    /// The standard starting position. Index 0 is a1, so White's back rank comes first.
    #[rustfmt::skip]
    pub const INITIAL: Board = Board {
        squares: [
            WR,    WN,    WB,    WQ,    WK,    WB,    WN,    WR,
            WP,    WP,    WP,    WP,    WP,    WP,    WP,    WP,
            EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY,
            EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY,
            EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY,
            EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY,
            BP,    BP,    BP,    BP,    BP,    BP,    BP,    BP,
            BR,    BN,    BB,    BQ,    BK,    BB,    BN,    BR,
        ],
    };

    /// A board with no pieces on it.
    pub const fn empty() -> Board {
        Board {
            squares: [EMPTY; 64],
        }
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.index()]
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.squares[square.index()].is_none()
    }

    /// Places a piece on a square, replacing whatever was there.
    pub fn put(&mut self, square: Square, piece: Piece) {
        self.squares[square.index()] = Some(piece);
    }

    pub fn clear(&mut self, square: Square) {
        self.squares[square.index()] = None;
    }

    /// Iterates over every occupied square in square order, a1 through h8.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        core::squares().filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Moves whatever stands on the move's source square to its destination and empties the source.
    ///
    /// No validation is done: the move is assumed to have come from the move generator (and from whatever
    /// legality filter sits on top of it). A piece on the destination square is overwritten, which is how
    /// captures happen.
    pub fn relocate(&mut self, mov: Move) {
        let moving = self.squares[mov.source().index()];
        if let Some(captured) = self.squares[mov.destination().index()] {
            trace!(%mov, %captured, "relocate captures");
        } else {
            trace!(%mov, "relocate");
        }

        self.squares[mov.destination().index()] = moving;
        self.squares[mov.source().index()] = None;
    }

    /// Finds the square of the given side's king. The first king found in square order wins.
    ///
    /// A board without that king is not a chess position; the error is meant to be reported, not papered over.
    pub fn king(&self, color: Color) -> Result<Square, BoardError> {
        let king = Piece::new(color, PieceKind::King);
        self.pieces()
            .find(|&(_, piece)| piece == king)
            .map(|(sq, _)| sq)
            .ok_or(BoardError::MissingKing(color))
    }
}

//
// FEN piece placement reading and writing.
//

type Stream<'a> = Peekable<Chars<'a>>;

fn eat(iter: &mut Stream<'_>, expected: char) -> Result<(), FenParseError> {
    match iter.next() {
        Some(c) if c == expected => Ok(()),
        Some(c) => Err(FenParseError::UnexpectedChar(c)),
        None => Err(FenParseError::UnexpectedEnd),
    }
}

fn peek(iter: &mut Stream<'_>) -> Result<char, FenParseError> {
    iter.peek().copied().ok_or(FenParseError::UnexpectedEnd)
}

fn eat_placement(iter: &mut Stream<'_>) -> Result<Board, FenParseError> {
    let mut board = Board::empty();
    for rank in core::ranks().rev() {
        let mut file = 0u8;
        while file <= 7 {
            let c = peek(iter)?;
            // digits 1 through 8 indicate empty squares.
            if c.is_ascii_digit() {
                if !('1'..='8').contains(&c) {
                    return Err(FenParseError::InvalidDigit);
                }

                file += c as u8 - b'0';
                if file > 8 {
                    return Err(FenParseError::FileDoesNotSumToEight);
                }

                iter.next();
                continue;
            }

            if c == '/' {
                return Err(FenParseError::FileDoesNotSumToEight);
            }

            let piece = Piece::try_from(c).map_err(|_| FenParseError::UnknownPiece(c))?;
            let file_of = File::try_from(file).map_err(|_| FenParseError::FileDoesNotSumToEight)?;
            board.put(Square::of(rank, file_of), piece);
            iter.next();
            file += 1;
        }

        if rank != RANK_1 {
            eat(iter, '/')?;
        }
    }

    Ok(board)
}

fn eat_side_to_move(iter: &mut Stream<'_>) -> Result<Color, FenParseError> {
    let side = match peek(iter)? {
        'w' => Color::White,
        'b' => Color::Black,
        _ => return Err(FenParseError::InvalidSideToMove),
    };

    iter.next();
    Ok(side)
}

/// Reads the first two fields of a FEN string: the piece placement and the side to move.
///
/// The remaining fields (castling, en passant, clocks) describe state a [`Board`] does not track. They are
/// permitted but ignored.
pub fn parse_fen(fen: impl AsRef<str>) -> Result<(Board, Color), FenParseError> {
    let iter = &mut fen.as_ref().chars().peekable();
    let board = eat_placement(iter)?;
    eat(iter, ' ')?;
    let side = eat_side_to_move(iter)?;
    match iter.next() {
        None | Some(' ') => Ok((board, side)),
        Some(c) => Err(FenParseError::UnexpectedChar(c)),
    }
}

impl Board {
    /// Constructs a board from the piece placement field of a FEN string, e.g.
    /// `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR`.
    pub fn from_placement(placement: impl AsRef<str>) -> Result<Board, FenParseError> {
        let iter = &mut placement.as_ref().chars().peekable();
        let board = eat_placement(iter)?;
        match iter.next() {
            None => Ok(board),
            Some(c) => Err(FenParseError::UnexpectedChar(c)),
        }
    }

    /// Writes this board as the piece placement field of a FEN string.
    pub fn as_placement(&self) -> String {
        let mut buf = String::new();
        for rank in core::ranks().rev() {
            let mut empty_squares = 0;
            for file in core::files() {
                if let Some(piece) = self.piece_at(Square::of(rank, file)) {
                    if empty_squares != 0 {
                        let _ = write!(&mut buf, "{}", empty_squares);
                    }
                    let _ = write!(&mut buf, "{}", piece);
                    empty_squares = 0;
                } else {
                    empty_squares += 1;
                }
            }

            if empty_squares != 0 {
                let _ = write!(&mut buf, "{}", empty_squares);
            }

            if rank != RANK_1 {
                buf.push('/');
            }
        }

        buf
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for rank in core::ranks().rev() {
            for file in core::files() {
                let sq = Square::of(rank, file);
                if let Some(piece) = self.piece_at(sq) {
                    write!(f, " {} ", piece)?;
                } else {
                    write!(f, " . ")?;
                }
            }

            writeln!(f, "| {}", rank)?;
        }

        for _ in core::files() {
            write!(f, "---")?;
        }

        writeln!(f)?;
        for file in core::files() {
            write!(f, " {} ", file)?;
        }

        writeln!(f)?;
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Board({})", self.as_placement())
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::INITIAL
    }
}
