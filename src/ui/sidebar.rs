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
//! Input controls: currency selector, day-count slider and table radio group.

use crate::rates::currency::{Currency, TableType};
use crate::rates::selection::DashboardSelection;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};
use ratatui::Frame;

pub const SIDEBAR_WIDTH: u16 = 30;

/// Render the settings sidebar for the given selection.
pub fn render_sidebar(
	frame: &mut Frame,
	area: Rect,
	selection: &DashboardSelection,
) {
	let chunks = Layout::default()
		.direction(Direction::Vertical)
		.constraints([
			Constraint::Length(Currency::ALL.len() as u16 + 2), // selector
			Constraint::Length(3), // slider
			Constraint::Length(3), // radio
			Constraint::Min(0),
		])
		.split(area);

	render_currency_selector(frame, chunks[0], selection.currency);
	render_days_slider(frame, chunks[1], selection.history_days());
	render_table_radio(frame, chunks[2], selection.table);
}

fn control_block(title: &str) -> Block<'_> {
	Block::default()
		.title(title)
		.borders(Borders::ALL)
		.border_type(BorderType::Rounded)
		.border_style(Style::default().fg(Color::Gray))
}

fn render_currency_selector(frame: &mut Frame, area: Rect, selected: Currency) {
	let lines: Vec<Line> = Currency::ALL
		.iter()
		.map(|c| {
			if *c == selected {
				Line::from(Span::styled(
					format!("› {}", c),
					Style::default()
						.fg(Color::Cyan)
						.add_modifier(Modifier::BOLD),
				))
			} else {
				Line::from(Span::raw(format!("  {}", c)))
			}
		})
		.collect();

	frame.render_widget(
		Paragraph::new(lines).block(control_block("Currency ↑↓")),
		area,
	);
}

fn render_days_slider(frame: &mut Frame, area: Rect, days: u32) {
	let span =
		(DashboardSelection::MAX_DAYS - DashboardSelection::MIN_DAYS) as f64;
	let ratio = (days - DashboardSelection::MIN_DAYS) as f64 / span;

	let gauge = Gauge::default()
		.block(control_block("History ←→"))
		.gauge_style(Style::default().fg(Color::Cyan))
		.ratio(ratio.clamp(0.0, 1.0))
		.label(format!("{} days", days));

	frame.render_widget(gauge, area);
}

fn render_table_radio(frame: &mut Frame, area: Rect, selected: TableType) {
	let mut spans = Vec::new();
	for t in TableType::ALL {
		let (mark, style) = if t == selected {
			(
				"(•)",
				Style::default()
					.fg(Color::Cyan)
					.add_modifier(Modifier::BOLD),
			)
		} else {
			("( )", Style::default())
		};
		spans.push(Span::styled(format!("{} {}  ", mark, t), style));
	}

	frame.render_widget(
		Paragraph::new(Line::from(spans)).block(control_block("NBP table")),
		area,
	);
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::ui::view::buffer_text;
	use ratatui::backend::TestBackend;
	use ratatui::Terminal;

	fn render(selection: DashboardSelection) -> String {
		let backend = TestBackend::new(SIDEBAR_WIDTH, 20);
		let mut terminal = Terminal::new(backend).unwrap();
		terminal
			.draw(|frame| {
				let area = frame.area();
				render_sidebar(frame, area, &selection);
			})
			.unwrap();
		buffer_text(terminal.backend().buffer())
	}

	#[test]
	fn test_marks_selected_currency_and_table() {
		let text = render(DashboardSelection::new(
			Currency::Chf,
			TableType::B,
			45,
		));

		assert!(text.contains("› CHF - Swiss franc"));
		assert!(text.contains("  USD - US dollar"));
		assert!(text.contains("NOK - Norwegian krone"));
		assert!(text.contains("( ) A"));
		assert!(text.contains("(•) B"));
		assert!(text.contains("45 days"));
	}

	#[test]
	fn test_slider_bounds_render() {
		assert!(render(DashboardSelection::new(
			Currency::Usd,
			TableType::A,
			7
		))
		.contains("7 days"));
		assert!(render(DashboardSelection::new(
			Currency::Usd,
			TableType::A,
			90
		))
		.contains("90 days"));
	}
}
