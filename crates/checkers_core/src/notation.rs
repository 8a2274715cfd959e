use crate::types::{row_of, sq};

/// Convert a cell name such as "A8" to a board index.
///
/// Columns are the letters A..H (either case), rows count 1..8 from the
/// BOTTOM of the board, so "A1" is the bottom-left corner. Malformed or
/// off-board names return `None`; the UI re-prompts on that instead of
/// handing the engine a bad index.
pub fn name_to_index(name: &str) -> Option<u8> {
    let name = name.trim();
    let col = match name.chars().next()?.to_ascii_uppercase() {
        c @ 'A'..='H' => c as i8 - 'A' as i8,
        _ => return None,
    };
    let row_number: i8 = name.get(1..)?.parse().ok()?;
    sq(col, 8 - row_number)
}

/// Human-readable name for a board index, e.g. index 0 is "A8".
pub fn index_to_name(index: u8) -> String {
    let col = (b'A' + index % 8) as char;
    format!("{}{}", col, 8 - row_of(index))
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
