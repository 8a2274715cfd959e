//! Terminal board rendering
//!
//! Produces the whole frame as a string; the caller prints it. Selection
//! and target highlights belong to the game state passed in, never to
//! this module.

use crate::game::GameState;
use crate::settings::Settings;
use crate::styles;
use crate::terminal::style;
use checkers_core::{col_of, material_score, row_of, Color};

pub fn render(game: &GameState, opts: &Settings) -> String {
    let pos = &game.position;
    let mut out = String::new();

    out.push_str(&format!("[Turn]: {}\n", side_name(pos.current_player())));
    let (white, black) = material_score(pos);
    out.push_str(&format!("[Score]: White {white}, Black {black}\n\n"));

    column_header(&mut out, opts);
    for row in 0..8u8 {
        // Row labels count 1..8 from the bottom
        let label = 8 - row;
        row_label(&mut out, label, opts);
        for col in 0..8u8 {
            square(&mut out, game, col + row * 8, opts);
        }
        row_label(&mut out, label, opts);
        if opts.color {
            out.push_str(&style(&[styles::RESET]));
        }
        out.push('\n');
    }
    column_header(&mut out, opts);

    out
}

fn side_name(c: Color) -> &'static str {
    match c {
        Color::White => "White",
        Color::Black => "Black",
    }
}

fn column_header(out: &mut String, opts: &Settings) {
    if opts.color {
        out.push_str(&style(&[styles::HEADER, styles::FG_GRAY]));
    }
    out.push_str("   ");
    for col in 0..8u8 {
        out.push(' ');
        out.push((b'A' + col) as char);
        out.push(' ');
    }
    out.push_str("   ");
    if opts.color {
        out.push_str(&style(&[styles::RESET]));
    }
    out.push('\n');
}

fn row_label(out: &mut String, label: u8, opts: &Settings) {
    if opts.color {
        out.push_str(&style(&[styles::HEADER, styles::FG_GRAY]));
    }
    out.push_str(&format!(" {label} "));
}

fn square(out: &mut String, game: &GameState, idx: u8, opts: &Settings) {
    let piece = game.position.piece_at(idx);
    let dark = (col_of(idx) + row_of(idx)) % 2 == 1;

    // Unicode glyphs need color to tell the sides apart
    let unicode = opts.unicode_pieces && opts.color;
    let glyph = match piece {
        Some(pc) => styles::piece_glyph(pc, unicode),
        None if !opts.color && dark => '.',
        None => ' ',
    };

    if opts.color {
        let bg = if game.selected == Some(idx) {
            styles::SELECTED_SQUARE
        } else if game.targets.contains(&idx) {
            styles::TARGET_SQUARE
        } else if dark {
            styles::DARK_SQUARE
        } else {
            styles::LIGHT_SQUARE
        };
        let fg = match piece.map(|pc| pc.color) {
            Some(Color::Black) => styles::FG_BLACK,
            _ => styles::FG_BRIGHT_WHITE,
        };
        out.push_str(&style(&[bg, fg]));
    }
    out.push(' ');
    out.push(glyph);
    out.push(' ');
}

/// Banner for the end of the game.
pub fn result_line(result: crate::game::GameResult) -> &'static str {
    match result {
        crate::game::GameResult::WhiteWins => "White wins!",
        crate::game::GameResult::BlackWins => "Black wins!",
        crate::game::GameResult::InProgress => "Game in progress",
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
