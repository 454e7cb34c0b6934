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

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the application's color palette and provides utilities
//! for converting colors between Ratatui's internal representation and external
//! formats (such as hexadecimal strings) used for terminal emulator styling.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) gauge_track_colour: Color,
    pub(crate) highlight_bg: Color,
    pub(crate) muted_fg: Color,
    pub(crate) error_fg: Color,

    pub(crate) card_title_fg: Color,
    pub(crate) card_singer_fg: Color,
    pub(crate) card_genre_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Black with blue accents.
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(0, 0, 0),
            accent_colour: Color::Rgb(96, 165, 250),
            border_colour: Color::Rgb(30, 58, 138),
            gauge_track_colour: Color::Rgb(23, 37, 84),
            highlight_bg: Color::Rgb(30, 58, 138),
            muted_fg: Color::Rgb(147, 197, 253),
            error_fg: Color::Rgb(248, 113, 113),

            card_title_fg: Color::Rgb(255, 255, 255),
            card_singer_fg: Color::Rgb(147, 197, 253),
            card_genre_fg: Color::Rgb(96, 165, 250),
        }
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string, used to paint the terminal emulator's background.
    ///
    /// Non-RGB colours have no hex form and yield `None`.
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_converts_to_hex() {
        assert_eq!(Theme::to_hex(Color::Rgb(96, 165, 250)).as_deref(), Some("#60a5fa"));
        assert_eq!(Theme::to_hex(Color::Blue), None);
    }
}
