// Copyright 2021-2026 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use anyhow::Context;
use structopt::StructOpt;
use tracing::{debug, Level};

use mailbox::core::Color;
use mailbox::{board, log, movegen, Board};

/// Counts the leaves of the pseudo-legal move tree. No move is ever rejected for leaving a king in check, so
/// the numbers only match real perft counts at shallow depths in quiet positions.
#[derive(Debug, StructOpt)]
struct Options {
    /// The depth to search to.
    #[structopt(short, long)]
    depth: u32,

    /// FEN representation of the position to analyze.
    #[structopt(name = "FEN")]
    fen: String,

    /// Print the leaf count under each root move.
    #[structopt(long)]
    divide: bool,
}

fn perft(board: &Board, side: Color, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    movegen::generate_moves(side, board)
        .into_iter()
        .map(|mov| {
            let mut next = *board;
            next.relocate(mov);
            perft(&next, side.toggle(), depth - 1)
        })
        .sum()
}

fn main() -> anyhow::Result<()> {
    log::init(Level::WARN)?;
    let ops = Options::from_args();
    let (board, side) = board::parse_fen(&ops.fen).context("invalid FEN")?;
    debug!(depth = ops.depth, %side, "starting perft");

    if ops.divide && ops.depth > 0 {
        let mut total = 0;
        for mov in movegen::generate_moves(side, &board) {
            let mut next = board;
            next.relocate(mov);
            let count = perft(&next, side.toggle(), ops.depth - 1);
            println!("{}: {}", mov, count);
            total += count;
        }

        println!();
        println!("{}", total);
    } else {
        println!("{}", perft(&board, side, ops.depth));
    }

    Ok(())
}
