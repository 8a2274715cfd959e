//! Move generation benchmark for profiling with cargo-flamegraph.
//!
//! Runs many iterations of legal-move enumeration on positions covering
//! different game phases.
//!
//! Usage:
//!   cargo flamegraph --example movegen_bench -p checkers_core

use checkers_core::{legal_moves, name_to_index, Color, Piece, Position};
use std::time::Instant;

const ITERATIONS: usize = 100_000;

fn at(name: &str) -> u8 {
    name_to_index(name).expect("valid cell name")
}

fn positions() -> Vec<(&'static str, Position)> {
    let start = Position::startpos();

    // Early middlegame: both sides have pushed a front-row pawn
    let (opened, _) = start.apply_move(at("C3"), at("D4")).expect("legal opening move");
    let opened = opened.pass_turn();
    let (opened, _) = opened
        .apply_move(at("F6"), at("G5"))
        .expect("legal reply");
    let opened = opened.pass_turn();

    // Late game with flying kings on open diagonals
    let kings = Position::empty()
        .set_piece(at("A1"), Some(Piece::king(Color::White)))
        .set_piece(at("D8"), Some(Piece::king(Color::White)))
        .set_piece(at("H4"), Some(Piece::king(Color::Black)))
        .set_piece(at("E5"), Some(Piece::pawn(Color::Black)));

    vec![
        ("Start", start),
        ("Opened", opened),
        ("Kings endgame", kings),
    ]
}

fn main() {
    println!("=== Move Generation Benchmark ===");
    println!("Iterations per position: {ITERATIONS}");
    println!();

    let mut total_moves = 0usize;
    let mut total_time = std::time::Duration::ZERO;

    for (name, pos) in positions() {
        print!("{name:.<20}");

        let start = Instant::now();
        let mut moves_generated = 0usize;
        for _ in 0..ITERATIONS {
            moves_generated += legal_moves(&pos).len();
        }
        let elapsed = start.elapsed();

        total_moves += moves_generated;
        total_time += elapsed;

        let moves_per_pos = moves_generated as f64 / ITERATIONS as f64;
        let pps = if elapsed.as_secs_f64() > 0.0 {
            ITERATIONS as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };
        println!(" {moves_per_pos:>5.1} moves/pos, {pps:>10.0} pos/sec ({elapsed:>8.3?})");
    }

    println!();
    let avg_pps = if total_time.as_secs_f64() > 0.0 {
        (ITERATIONS * positions().len()) as f64 / total_time.as_secs_f64()
    } else {
        0.0
    };
    println!("TOTAL: {total_moves} moves in {total_time:.3?} ({avg_pps:.0} positions/sec)");
}
