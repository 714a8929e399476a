// Copyright 2021-2026 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use anyhow::Context;
use structopt::StructOpt;
use tracing::Level;

use mailbox::{board, log, movegen};

/// Lists the pseudo-legal moves for the side to move. Moves are not checked for king safety.
#[derive(Debug, StructOpt)]
struct Options {
    /// FEN representation of the position to analyze. Only the placement and side-to-move fields are read.
    #[structopt(name = "FEN")]
    fen: String,

    /// Print the moves as a JSON array instead of one per line.
    #[structopt(long)]
    json: bool,

    /// Print a diagram of the board before the moves.
    #[structopt(long)]
    show_board: bool,
}

fn main() -> anyhow::Result<()> {
    log::init(Level::WARN)?;
    let ops = Options::from_args();
    let (board, side) = board::parse_fen(&ops.fen).context("invalid FEN")?;
    if ops.show_board {
        eprint!("{}", board);
    }

    let moves = movegen::generate_moves(side, &board);
    if moves.is_empty() {
        eprintln!("no pseudo-legal moves for {}", side);
    }

    if ops.json {
        println!("{}", serde_json::to_string(&moves)?);
    } else {
        for mov in moves {
            println!("{}", mov.as_uci());
        }
    }

    Ok(())
}
