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
use crate::rates::dashboard::{RateDashboard, Snapshot};
use crate::rates::selection::DashboardSelection;
use crate::source::rate_source::RateSource;
use crate::ui::keymap::{map_key, KeyAction};
use crate::ui::view;
use anyhow::Error;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
	self, EnterAlternateScreen, LeaveAlternateScreen,
};
use log::debug;
use ratatui::backend::CrosstermBackend;
use ratatui::{Frame, Terminal};
use std::io;
use std::time::Duration;

/// State of the interactive dashboard. Every change to the selection runs
/// the whole fetch pipeline again; the previous snapshot is replaced, never
/// merged.
pub struct App<S: RateSource> {
	dashboard: RateDashboard<S>,
	selection: DashboardSelection,
	snapshot: Snapshot,

	/// Whether the data table is expanded
	pub show_table: bool,
	pub should_quit: bool,
}

impl<S: RateSource> App<S> {
	pub fn new(
		mut dashboard: RateDashboard<S>,
		selection: DashboardSelection,
	) -> Self {
		let snapshot = dashboard.recompute(selection);
		Self {
			dashboard,
			selection,
			snapshot,
			show_table: false,
			should_quit: false,
		}
	}

	pub fn selection(&self) -> DashboardSelection {
		self.selection
	}

	pub fn snapshot(&self) -> &Snapshot {
		&self.snapshot
	}

	pub fn handle_key_action(&mut self, action: KeyAction) {
		let s = self.selection;
		let next = match action {
			KeyAction::Quit => {
				self.should_quit = true;
				return;
			},
			KeyAction::ToggleDataTable => {
				self.show_table = !self.show_table;
				return;
			},
			KeyAction::Refresh => {
				self.dashboard.refresh();
				self.snapshot = self.dashboard.recompute(s);
				return;
			},
			KeyAction::None => return,
			KeyAction::NextCurrency => s.with_currency(s.currency.next()),
			KeyAction::PrevCurrency => s.with_currency(s.currency.prev()),
			KeyAction::MoreDays(n) => s.step_days(n),
			KeyAction::FewerDays(n) => s.step_days(-n),
			KeyAction::NextTable => s.with_table(s.table.next()),
			KeyAction::SelectTable(t) => s.with_table(t),
		};

		if next != self.selection {
			debug!(
				"selection changed to {} / {} / {} days",
				next.currency.code(),
				next.table,
				next.history_days()
			);
			self.selection = next;
			self.snapshot = self.dashboard.recompute(next);
		}
	}

	pub fn render(&self, frame: &mut Frame) {
		view::render(frame, &self.snapshot, self.show_table);
	}

	/// Takes over the terminal and runs until the user quits. The terminal is
	/// restored even if drawing fails.
	pub fn run(&mut self) -> Result<(), Error> {
		let mut terminal = setup_terminal()?;
		let result = self.event_loop(&mut terminal);
		teardown_terminal(&mut terminal)?;
		result
	}

	fn event_loop(
		&mut self,
		terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
	) -> Result<(), Error> {
		let tick_rate = Duration::from_millis(250);

		while !self.should_quit {
			terminal.draw(|frame| self.render(frame))?;

			if event::poll(tick_rate)? {
				if let Event::Key(key) = event::read()? {
					// Windows reports releases as well
					if key.kind == KeyEventKind::Press {
						self.handle_key_action(map_key(key));
					}
				}
			}
		}

		Ok(())
	}
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
	terminal::enable_raw_mode()?;

	let mut stdout = io::stdout();
	let entered = execute!(stdout, EnterAlternateScreen)
		.and_then(|_| Terminal::new(CrosstermBackend::new(stdout)));

	or_restore(entered, || {
		execute!(io::stdout(), LeaveAlternateScreen)?;
		terminal::disable_raw_mode()
	})
}

/// Runs `restore` if `result` is an error. The original error is kept.
fn or_restore<T>(
	result: io::Result<T>,
	restore: impl FnOnce() -> io::Result<()>,
) -> io::Result<T> {
	if result.is_err() {
		let _ = restore();
	}
	result
}

fn teardown_terminal(
	terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> io::Result<()> {
	terminal::disable_raw_mode()?;
	execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
	terminal.show_cursor()
}
