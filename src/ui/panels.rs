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
//! Result panels: current-rate metric, history chart, statistics row and the
//! expandable data table. A panel without data renders as an empty frame.

use crate::rates::dashboard::Snapshot;
use crate::rates::record::RateSeries;
use crate::rates::statistics::Statistics;
use crate::util::format::{format_percent, format_rate};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
	Axis, Block, BorderType, Borders, Chart, Dataset, GraphType, Paragraph,
	Row, Table,
};
use ratatui::Frame;

fn panel(title: String) -> Block<'static> {
	Block::default()
		.title(title)
		.borders(Borders::ALL)
		.border_type(BorderType::Rounded)
}

fn no_data() -> Paragraph<'static> {
	Paragraph::new(Span::styled(
		"No data available",
		Style::default().fg(Color::DarkGray),
	))
}

/// Render the current-rate metric.
pub fn render_current(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
	let block = panel(" Current rate ".to_string());

	let Some(current) = &snapshot.current else {
		frame.render_widget(no_data().block(block), area);
		return;
	};

	let lines = vec![
		Line::from(Span::styled(
			snapshot.selection.currency.to_string(),
			Style::default().fg(Color::Gray),
		)),
		Line::from(Span::styled(
			format_rate(current.record.mid_rate),
			Style::default()
				.fg(Color::LightYellow)
				.add_modifier(Modifier::BOLD),
		)),
		Line::from(""),
		Line::from(vec![
			Span::styled("Date: ", Style::default().fg(Color::Gray)),
			Span::raw(current.record.date.to_string()),
		]),
		Line::from(vec![
			Span::styled("Table: ", Style::default().fg(Color::Gray)),
			Span::raw(current.table_label()),
		]),
	];

	frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Chart points: x is the position in source order, y the mid rate.
pub fn chart_points(series: &RateSeries) -> Vec<(f64, f64)> {
	series
		.mid_rates()
		.enumerate()
		.map(|(i, r)| (i as f64, r))
		.collect()
}

/// Y-axis range with a little headroom, never zero-height.
pub fn y_bounds(stats: &Statistics) -> [f64; 2] {
	let span = stats.max - stats.min;
	let pad = if span > 0.0 { span * 0.1 } else { stats.max * 0.01 };
	[stats.min - pad, stats.max + pad]
}

/// Render the historical line chart.
pub fn render_chart(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
	let selection = &snapshot.selection;
	let title = format!(
		" {}/PLN - last {} days ",
		selection.currency.code(),
		selection.history_days()
	);

	let (Some(series), Some(stats)) = (&snapshot.series, &snapshot.stats)
	else {
		frame.render_widget(no_data().block(panel(title)), area);
		return;
	};

	let points = chart_points(series);
	let datasets = vec![
		Dataset::default()
			.name(selection.currency.code())
			.marker(Marker::Braille)
			.graph_type(GraphType::Line)
			.style(Style::default().fg(Color::Cyan))
			.data(&points),
		Dataset::default()
			.marker(Marker::Dot)
			.graph_type(GraphType::Scatter)
			.style(Style::default().fg(Color::LightCyan))
			.data(&points),
	];

	let x_max = (points.len().saturating_sub(1) as f64).max(1.0);
	let x_labels: Vec<String> = [series.first(), series.last()]
		.iter()
		.flatten()
		.map(|r| r.date.to_string())
		.collect();

	let [y_min, y_max] = y_bounds(stats);
	let y_labels: Vec<String> = [y_min, (y_min + y_max) / 2.0, y_max]
		.iter()
		.map(|v| format!("{:.4}", v))
		.collect();

	let chart = Chart::new(datasets)
		.block(panel(title))
		.x_axis(
			Axis::default()
				.title("Date")
				.style(Style::default().fg(Color::Gray))
				.bounds([0.0, x_max])
				.labels(x_labels),
		)
		.y_axis(
			Axis::default()
				.title("Rate (PLN)")
				.style(Style::default().fg(Color::Gray))
				.bounds([y_min, y_max])
				.labels(y_labels),
		);

	frame.render_widget(chart, area);
}

/// Render minimum, maximum, average and change side by side.
pub fn render_statistics(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
	let Some(stats) = &snapshot.stats else {
		return;
	};

	let cells = Layout::default()
		.direction(Direction::Horizontal)
		.constraints([Constraint::Ratio(1, 4); 4])
		.split(area);

	let change_color = if stats.percent_change > 0.0 {
		Color::Green
	} else if stats.percent_change < 0.0 {
		Color::Red
	} else {
		Color::White
	};

	let metrics = [
		("Minimum", format_rate(stats.min), Color::White),
		("Maximum", format_rate(stats.max), Color::White),
		("Average", format_rate(stats.mean), Color::White),
		("Change", format_percent(stats.percent_change), change_color),
	];

	for ((label, value, color), cell) in metrics.into_iter().zip(cells.iter()) {
		let metric = Paragraph::new(Span::styled(
			value,
			Style::default().fg(color).add_modifier(Modifier::BOLD),
		))
		.block(panel(format!(" {} ", label)));
		frame.render_widget(metric, *cell);
	}
}

/// Rows of the data table, newest first. Display only.
pub fn table_rows(series: &RateSeries) -> Vec<[String; 2]> {
	series
		.newest_first()
		.into_iter()
		.map(|r| [r.date.to_string(), format_rate(r.mid_rate)])
		.collect()
}

/// Render the data table, or a one-line hint when it is collapsed.
pub fn render_data_table(
	frame: &mut Frame,
	area: Rect,
	snapshot: &Snapshot,
	expanded: bool,
) {
	let Some(series) = &snapshot.series else {
		return;
	};

	if !expanded {
		let hint = Line::from(vec![
			Span::styled("▸ ", Style::default().fg(Color::Yellow)),
			Span::raw("Show data table "),
			Span::styled("(Enter)", Style::default().fg(Color::DarkGray)),
		]);
		frame.render_widget(Paragraph::new(hint), area);
		return;
	}

	let rows = table_rows(series)
		.into_iter()
		.map(|[date, rate]| Row::new(vec![date, rate]));

	let widths = [Constraint::Length(12), Constraint::Length(14)];
	let table = Table::new(rows, widths)
		.header(
			Row::new(vec!["Date", "Rate (PLN)"]).style(
				Style::default()
					.fg(Color::Cyan)
					.add_modifier(Modifier::BOLD),
			),
		)
		.block(panel(format!(" ▾ Data table ({} rows) ", series.len())));

	frame.render_widget(table, area);
}
