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
//! Top-level dashboard layout.

use crate::rates::dashboard::Snapshot;
use crate::ui::panels::{
	render_chart, render_current, render_data_table, render_statistics,
};
use crate::ui::sidebar::{render_sidebar, SIDEBAR_WIDTH};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Render the whole dashboard for one snapshot.
pub fn render(frame: &mut Frame, snapshot: &Snapshot, show_table: bool) {
	let outer = Layout::default()
		.direction(Direction::Vertical)
		.constraints([
			Constraint::Length(3), // header
			Constraint::Min(10),
			Constraint::Length(3), // footer
		])
		.split(frame.area());

	render_header(frame, outer[0]);

	let body = Layout::default()
		.direction(Direction::Horizontal)
		.constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
		.split(outer[1]);

	render_sidebar(frame, body[0], &snapshot.selection);
	render_main(frame, body[1], snapshot, show_table);

	render_footer(frame, outer[2]);
}

fn render_main(
	frame: &mut Frame,
	area: Rect,
	snapshot: &Snapshot,
	show_table: bool,
) {
	let table_height = if show_table {
		Constraint::Percentage(40)
	} else {
		Constraint::Length(1)
	};

	let rows = Layout::default()
		.direction(Direction::Vertical)
		.constraints([
			Constraint::Min(8), // metric and chart
			Constraint::Length(3), // statistics
			table_height,
			Constraint::Length(snapshot.notices.len() as u16),
		])
		.split(area);

	let top = Layout::default()
		.direction(Direction::Horizontal)
		.constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
		.split(rows[0]);

	render_current(frame, top[0], snapshot);
	render_chart(frame, top[1], snapshot);
	render_statistics(frame, rows[1], snapshot);
	render_data_table(frame, rows[2], snapshot, show_table);
	render_notices(frame, rows[3], &snapshot.notices);
}

fn render_header(frame: &mut Frame, area: Rect) {
	let text = vec![
		Line::from(Span::styled(
			"NBP exchange rates",
			Style::default()
				.fg(Color::Cyan)
				.add_modifier(Modifier::BOLD),
		)),
		Line::from(Span::styled(
			"Official rates from the Narodowy Bank Polski API",
			Style::default().fg(Color::DarkGray),
		)),
	];

	let block = Block::default().borders(Borders::BOTTOM);
	frame.render_widget(Paragraph::new(text).block(block), area);
}

fn render_notices(frame: &mut Frame, area: Rect, notices: &[String]) {
	let lines: Vec<Line> = notices
		.iter()
		.map(|n| {
			Line::from(Span::styled(
				format!("! {}", n),
				Style::default().fg(Color::Red),
			))
		})
		.collect();
	frame.render_widget(Paragraph::new(lines), area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
	let key =
		|k: &'static str| Span::styled(k, Style::default().fg(Color::Yellow));

	let text = vec![
		Line::from(vec![
			key("↑↓"),
			Span::raw(": currency | "),
			key("←→"),
			Span::raw(": days | "),
			key("Tab/a/b/c"),
			Span::raw(": table | "),
			key("Enter"),
			Span::raw(": data | "),
			key("r"),
			Span::raw(": refresh | "),
			key("q"),
			Span::raw(": quit"),
		]),
		Line::from(Span::styled(
			concat!(
				"Data source: NBP API (https://api.nbp.pl) | ",
				"rates are published daily by NBP"
			),
			Style::default().fg(Color::DarkGray),
		)),
	];

	let block = Block::default().borders(Borders::TOP);
	frame.render_widget(Paragraph::new(text).block(block), area);
}

/// Flattens a rendered buffer into lines of text.
#[cfg(test)]
pub fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
	let width = buffer.area.width as usize;
	buffer
		.content
		.chunks(width)
		.map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
		.collect::<Vec<_>>()
		.join("\n")
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::rates::currency::{Currency, TableType};
	use crate::rates::record::{CurrentRate, RateRecord, RateSeries};
	use crate::rates::selection::DashboardSelection;
	use crate::rates::statistics::compute_statistics;
	use chrono::NaiveDate;
	use ratatui::backend::TestBackend;
	use ratatui::Terminal;

	fn draw(snapshot: &Snapshot, show_table: bool) -> String {
		let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
		terminal
			.draw(|frame| render(frame, snapshot, show_table))
			.unwrap();
		buffer_text(terminal.backend().buffer())
	}

	fn full_snapshot() -> Snapshot {
		let day = |d| NaiveDate::from_ymd_opt(2025, 10, d).unwrap();
		let series = RateSeries::new(
			(1..=7)
				.map(|d| RateRecord::new(day(d), 4.2 + d as f64 / 100.0))
				.collect(),
		);

		Snapshot {
			selection: DashboardSelection::new(Currency::Eur, TableType::A, 7),
			current: Some(CurrentRate {
				record: RateRecord::new(day(7), 4.27),
				table: TableType::A,
			}),
			stats: compute_statistics(&series),
			series: Some(series),
			notices: vec![],
		}
	}

	#[test]
	fn test_full_dashboard() {
		let text = draw(&full_snapshot(), false);

		assert!(text.contains("NBP exchange rates"));
		assert!(text.contains("› EUR - Euro"));
		assert!(text.contains("4.2700 PLN"));
		assert!(text.contains("EUR/PLN - last 7 days"));
		assert!(text.contains("Average"));
		assert!(text.contains("Show data table"));
		assert!(text.contains("Data source: NBP API"));
	}

	#[test]
	fn test_expanded_table() {
		let text = draw(&full_snapshot(), true);
		assert!(text.contains("Data table (7 rows)"));
	}

	#[test]
	fn test_failed_fetches_leave_controls_and_notice() {
		let snapshot = Snapshot {
			selection: DashboardSelection::default(),
			current: None,
			series: None,
			stats: None,
			notices: vec!["Connection error: refused".into()],
		};
		let text = draw(&snapshot, true);

		assert!(text.contains("› USD - US dollar"));
		assert!(text.contains("30 days"));
		assert!(text.contains("! Connection error: refused"));
		assert!(!text.contains("Average"));
		assert!(!text.contains("Data table"));
	}
}
