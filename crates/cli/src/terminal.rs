//! Minimal ANSI plumbing
//!
//! Escape sequences are assembled on demand; there is no cached style
//! registry and no shelling out to `clear`.

/// Build an SGR escape sequence from parameter fragments.
pub fn style(params: &[&str]) -> String {
    format!("\x1b[{}m", params.join(";"))
}

/// Clear the screen and home the cursor.
pub fn clear_screen() {
    print!("\x1b[2J\x1b[H");
}
