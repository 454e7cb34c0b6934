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

//! Free-text search box.
//!
//! Wraps a `tui-input` text field. While active it swallows every key event,
//! so typing never triggers the player's single-key shortcuts.

mod event;
mod render;

use ratatui::layout::Rect;
use tui_input::Input;

pub(crate) struct SearchBox {
    input: Input,
    is_active: bool,
    area: Rect,
}

impl SearchBox {
    pub(crate) fn new() -> Self {
        Self {
            input: Input::default(),
            is_active: false,
            area: Rect::default(),
        }
    }

    pub(crate) fn value(&self) -> &str {
        self.input.value()
    }

    pub(crate) fn is_active(&self) -> bool {
        self.is_active
    }
}
