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

//! Unicode symbols for the TUI.
//!
//! This module contains standardized icons used across the interface to
//! represent media controls and track status. These are selected for
//! compatibility with most modern terminal emulators and fonts.

// Standard Media Controls (Unicode)
pub(crate) const ICON_PLAY: &str = "\u{25B6}";
pub(crate) const ICON_PAUSE: &str = "\u{23F8}";
pub(crate) const ICON_NEXT: &str = "\u{23ED}";
pub(crate) const ICON_PREV: &str = "\u{23EE}";

// Text-style variants (using Variation Selector-15 [\u{FE0E}]), this forces
// terminals to render the icons as monochrome text rather than colorful
// emojis, ensuring they respect the TUI's color styling.
pub(crate) const ICON_SHUFFLE: &str = "\u{1F500}\u{FE0E}";
pub(crate) const ICON_REPEAT: &str = "\u{1F501}\u{FE0E}";
pub(crate) const ICON_VOLUME: &str = "\u{1F50A}\u{FE0E}";

pub(crate) const ICON_REPEAT_ONE_DOT: &str = "\u{2022}";

pub(crate) const FAVOURITE: &str = "\u{2665}";
pub(crate) const NOT_FAVOURITE: &str = "\u{2661}";

// Stand-in for artwork, which the terminal cannot draw
pub(crate) const ARTWORK: &str = "\u{266A}";
pub(crate) const NOW_PLAYING: &str = "\u{266B}";
