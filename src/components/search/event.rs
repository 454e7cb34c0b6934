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

//! Event routing for the search box.

use crossterm::event::{Event, KeyCode, MouseButton, MouseEventKind};
use ratatui::layout::Position;
use tui_input::backend::crossterm::EventHandler;

use crate::components::SearchBox;

impl SearchBox {
    /// Returns `true` if the event was consumed by the search box.
    pub(crate) fn handle_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Key(key_event) if self.is_active => {
                match key_event.code {
                    KeyCode::Esc | KeyCode::Enter | KeyCode::Tab => self.is_active = false,
                    _ => {
                        // Delegate all other key events to the managed input component.
                        self.input.handle_event(event);
                    }
                }
                true
            }

            Event::Key(key_event) => {
                if key_event.code == KeyCode::Char('/') {
                    self.is_active = true;
                    return true;
                }
                false
            }

            Event::Mouse(mouse_event) => match mouse_event.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    let inside = self.area.contains(Position::new(mouse_event.column, mouse_event.row));
                    self.is_active = inside;
                    inside
                }
                _ => false,
            },

            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(search: &mut SearchBox, text: &str) {
        for c in text.chars() {
            assert!(search.handle_event(&key(KeyCode::Char(c))));
        }
    }

    #[test]
    fn inactive_box_ignores_keys_other_than_slash() {
        let mut search = SearchBox::new();

        assert!(!search.handle_event(&key(KeyCode::Char('n'))));
        assert_eq!(search.value(), "");
        assert!(!search.is_active());
    }

    #[test]
    fn slash_focuses_and_typing_updates_the_term() {
        let mut search = SearchBox::new();

        assert!(search.handle_event(&key(KeyCode::Char('/'))));
        type_text(&mut search, "jazz");
        assert_eq!(search.value(), "jazz");

        assert!(search.handle_event(&key(KeyCode::Backspace)));
        assert_eq!(search.value(), "jaz");

        assert!(search.handle_event(&key(KeyCode::Esc)));
        assert!(!search.is_active());
        assert_eq!(search.value(), "jaz");
    }
}
