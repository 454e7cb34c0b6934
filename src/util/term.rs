// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Terminal background control via OSC escape sequences.
//!
//! Most modern terminals (XTerm, iTerm2, Alacritty, Kitty) honour these; the
//! rest ignore them, which only costs the themed margin around the UI.

use std::io::{self, Write};

/// Sets the terminal background (OSC 11) to a hex colour such as `"#000000"`.
pub(crate) fn set_terminal_bg(hex_color: &str) {
    let mut stdout = io::stdout();
    let _ = write!(stdout, "\x1b]11;{}\x07", hex_color);
    let _ = stdout.flush();
}

/// Reverts the background to the user's own configuration (OSC 111).
pub(crate) fn reset_terminal_bg() {
    let mut stdout = io::stdout();
    let _ = write!(stdout, "\x1b]111\x07");
    let _ = stdout.flush();
}
