/* Copyright © 2024-2025 Adam Train <adam@trainrelay.net>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <https://www.gnu.org/licenses/>.
 */
use crate::rates::currency::TableType;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Dashboard keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
	Quit,
	NextCurrency,
	PrevCurrency,
	MoreDays(i64),
	FewerDays(i64),
	NextTable,
	SelectTable(TableType),
	ToggleDataTable,
	Refresh,
	None,
}

/// Map a key event to an action.
pub fn map_key(key: KeyEvent) -> KeyAction {
	match key.code {
		KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
			KeyAction::Quit
		},
		KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
		KeyCode::Down | KeyCode::Char('j') => KeyAction::NextCurrency,
		KeyCode::Up | KeyCode::Char('k') => KeyAction::PrevCurrency,
		KeyCode::Right | KeyCode::Char('l') => KeyAction::MoreDays(1),
		KeyCode::Left | KeyCode::Char('h') => KeyAction::FewerDays(1),
		KeyCode::PageUp => KeyAction::MoreDays(10),
		KeyCode::PageDown => KeyAction::FewerDays(10),
		KeyCode::Tab => KeyAction::NextTable,
		KeyCode::Char('a') => KeyAction::SelectTable(TableType::A),
		KeyCode::Char('b') => KeyAction::SelectTable(TableType::B),
		KeyCode::Char('c') => KeyAction::SelectTable(TableType::C),
		KeyCode::Enter | KeyCode::Char('t') => KeyAction::ToggleDataTable,
		KeyCode::Char('r') => KeyAction::Refresh,
		_ => KeyAction::None,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	#[test]
	fn test_quit_keys() {
		assert_eq!(map_key(key(KeyCode::Char('q'))), KeyAction::Quit);
		assert_eq!(map_key(key(KeyCode::Esc)), KeyAction::Quit);
		assert_eq!(
			map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
			KeyAction::Quit
		);
	}

	#[test]
	fn test_plain_c_selects_table() {
		assert_eq!(
			map_key(key(KeyCode::Char('c'))),
			KeyAction::SelectTable(TableType::C)
		);
		assert_eq!(
			map_key(key(KeyCode::Char('a'))),
			KeyAction::SelectTable(TableType::A)
		);
		assert_eq!(map_key(key(KeyCode::Tab)), KeyAction::NextTable);
	}

	#[test]
	fn test_selector_and_slider_keys() {
		assert_eq!(map_key(key(KeyCode::Down)), KeyAction::NextCurrency);
		assert_eq!(map_key(key(KeyCode::Char('k'))), KeyAction::PrevCurrency);
		assert_eq!(map_key(key(KeyCode::Right)), KeyAction::MoreDays(1));
		assert_eq!(map_key(key(KeyCode::Char('h'))), KeyAction::FewerDays(1));
		assert_eq!(map_key(key(KeyCode::PageUp)), KeyAction::MoreDays(10));
		assert_eq!(map_key(key(KeyCode::PageDown)), KeyAction::FewerDays(10));
	}

	#[test]
	fn test_misc_keys() {
		assert_eq!(map_key(key(KeyCode::Enter)), KeyAction::ToggleDataTable);
		assert_eq!(map_key(key(KeyCode::Char('r'))), KeyAction::Refresh);
		assert_eq!(map_key(key(KeyCode::Char('z'))), KeyAction::None);
	}
}
