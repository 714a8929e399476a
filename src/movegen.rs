// Copyright 2021-2026 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Pseudo-legal move generation.
//!
//! The moves produced here obey the movement rules of each piece but are not checked for king safety: a move
//! that leaves the mover's own king attacked is still generated. Filtering those out is the caller's job, using
//! [`Board::king`] to find the square that must not be attacked after the move.
//!
//! All square arithmetic goes through [`Square::towards`] and [`Square::offset`], which refuse to produce a
//! square off the board or one that wrapped around from one edge file to the other.

use tracing::trace;

use crate::board::Board;
use crate::core::*;

const ROOK_DIRECTIONS: [Direction; 4] = [
    Direction::North,
    Direction::South,
    Direction::East,
    Direction::West,
];

const BISHOP_DIRECTIONS: [Direction; 4] = [
    Direction::NorthEast,
    Direction::SouthWest,
    Direction::NorthWest,
    Direction::SouthEast,
];

/// Knight jumps, bucketed by how far they move sideways. Each bucket is the file delta of the jump and the
/// two index offsets (one up the board, one down) that share it; a jump is only taken if the source square has
/// room for that file delta before the edge.
const KNIGHT_JUMPS: [(i32, [i32; 2]); 4] = [
    (1, [17, -15]),
    (2, [10, -6]),
    (-1, [15, -17]),
    (-2, [6, -10]),
];

/// Adds a move to `target` if the target is empty or holds one of the opponent's pieces. Returns whether a
/// sliding piece may keep going past `target`, which is only the case when `target` is empty.
fn add_if_accepted(
    us: Color,
    board: &Board,
    source: Square,
    target: Square,
    moves: &mut Vec<Move>,
) -> bool {
    match board.piece_at(target) {
        None => {
            moves.push(Move::new(source, target));
            true
        }
        Some(piece) => {
            if piece.color() != us {
                moves.push(Move::new(source, target));
            }
            false
        }
    }
}

/// Casts a ray from `source` in direction `dir`, adding a move for every square the slider can reach. The ray
/// stops at the board edge, before a friendly piece, or on an enemy piece (which is captured).
fn slide(us: Color, board: &Board, source: Square, dir: Direction, moves: &mut Vec<Move>) {
    let mut cursor = source;
    while let Some(target) = cursor.towards(dir) {
        if !add_if_accepted(us, board, source, target, moves) {
            break;
        }

        cursor = target;
    }
}

pub fn generate_king_moves(us: Color, board: &Board, source: Square, moves: &mut Vec<Move>) {
    for dir in ALL_DIRECTIONS {
        if let Some(target) = source.towards(dir) {
            add_if_accepted(us, board, source, target, moves);
        }
    }
}

pub fn generate_rook_moves(us: Color, board: &Board, source: Square, moves: &mut Vec<Move>) {
    for dir in ROOK_DIRECTIONS {
        slide(us, board, source, dir, moves);
    }
}

pub fn generate_bishop_moves(us: Color, board: &Board, source: Square, moves: &mut Vec<Move>) {
    for dir in BISHOP_DIRECTIONS {
        slide(us, board, source, dir, moves);
    }
}

pub fn generate_queen_moves(us: Color, board: &Board, source: Square, moves: &mut Vec<Move>) {
    generate_rook_moves(us, board, source, moves);
    generate_bishop_moves(us, board, source, moves);
}

pub fn generate_knight_moves(us: Color, board: &Board, source: Square, moves: &mut Vec<Move>) {
    let file = source.file().as_u8() as i32;
    for (file_delta, offsets) in KNIGHT_JUMPS {
        if !(0..8).contains(&(file + file_delta)) {
            continue;
        }

        for offset in offsets {
            if let Some(target) = source.offset(offset) {
                add_if_accepted(us, board, source, target, moves);
            }
        }
    }
}

pub fn generate_pawn_moves(us: Color, board: &Board, source: Square, moves: &mut Vec<Move>) {
    let (up, up_left, up_right, start_rank) = match us {
        Color::White => (
            Direction::North,
            Direction::NorthWest,
            Direction::NorthEast,
            RANK_2,
        ),
        Color::Black => (
            Direction::South,
            Direction::SouthWest,
            Direction::SouthEast,
            RANK_7,
        ),
    };

    // Pushes only ever land on empty squares. The double push is gated on the single push, so the square
    // it jumps over is already known to be empty.
    if let Some(single) = source.towards(up).filter(|&sq| board.is_empty(sq)) {
        moves.push(Move::new(source, single));
        if source.rank() == start_rank {
            if let Some(double) = single.towards(up).filter(|&sq| board.is_empty(sq)) {
                moves.push(Move::new(source, double));
            }
        }
    }

    // Captures only ever land on enemy pieces.
    for dir in [up_left, up_right] {
        if let Some(target) = source.towards(dir) {
            if matches!(board.piece_at(target), Some(piece) if piece.color() != us) {
                moves.push(Move::new(source, target));
            }
        }
    }
}

/// Generates all pseudo-legal moves for the piece standing on `source`, if it belongs to `us`.
pub fn generate_moves_from(us: Color, board: &Board, source: Square, moves: &mut Vec<Move>) {
    let piece = match board.piece_at(source) {
        Some(piece) if piece.color() == us => piece,
        _ => return,
    };

    match piece.kind() {
        PieceKind::King => generate_king_moves(us, board, source, moves),
        PieceKind::Queen => generate_queen_moves(us, board, source, moves),
        PieceKind::Bishop => generate_bishop_moves(us, board, source, moves),
        PieceKind::Knight => generate_knight_moves(us, board, source, moves),
        PieceKind::Rook => generate_rook_moves(us, board, source, moves),
        PieceKind::Pawn => generate_pawn_moves(us, board, source, moves),
    }
}

/// Generates every pseudo-legal move for the side `us`, in board order: all moves from a1 come first, then b1,
/// and so on up to h8.
///
/// An empty list means `us` has no piece that can move at all. Whether that is checkmate or stalemate depends
/// on whether the king is currently attacked, which is not decided here.
pub fn generate_moves(us: Color, board: &Board) -> Vec<Move> {
    let mut moves = Vec::new();
    for source in squares() {
        generate_moves_from(us, board, source, &mut moves);
    }

    trace!(side = %us, count = moves.len(), "generated pseudo-legal moves");
    moves
}
