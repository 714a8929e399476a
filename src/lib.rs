// Copyright 2017-2026 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! `mailbox` is a chess board and pseudo-legal move generator built on plain square-index arithmetic.
//!
//! The board is a 64-entry array ("mailbox") indexed by square, with a1 at index 0 and h8 at index 63. Move
//! generation walks that array and produces, for one side, every move its pieces could make under the movement
//! rules alone. Checking those moves for king safety, and everything beyond that (castling, en passant,
//! promotion, game adjudication), is left to callers.

pub mod board;
pub mod core;
pub mod log;
pub mod movegen;

pub use crate::board::Board;
