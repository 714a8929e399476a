// Copyright 2021-2026 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mailbox::board;
use mailbox::core::{self, Color, Move, PieceKind};
use mailbox::movegen;
use mailbox::Board;

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("quiet-move-relocate", |b| {
        let board = Board::from_placement("8/8/4b3/8/2B5/8/8/8").unwrap();
        let mov = Move::new(core::C4, core::D5);
        b.iter(|| {
            let mut board = *black_box(&board);
            board.relocate(black_box(mov));
        });
    });

    c.bench_function("initial-movegen", |b| {
        b.iter(|| movegen::generate_moves(black_box(Color::White), black_box(&Board::INITIAL)));
    });

    c.bench_function("pawn-movegen", |b| {
        let (board, _) =
            board::parse_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R b - - 0 1")
                .unwrap();
        b.iter(|| {
            let mut moves = Vec::new();
            for (sq, piece) in board.pieces() {
                if piece.color() == Color::Black && piece.kind() == PieceKind::Pawn {
                    movegen::generate_pawn_moves(Color::Black, black_box(&board), sq, &mut moves);
                }
            }
            moves
        });
    });

    c.bench_function("kiwipete-movegen-all", |b| {
        let (board, side) =
            board::parse_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R b - - 0 1")
                .unwrap();
        b.iter(|| movegen::generate_moves(black_box(side), black_box(&board)));
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
