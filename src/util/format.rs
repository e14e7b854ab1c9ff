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
/// Rates are quoted against PLN with four decimal places.
pub fn format_rate(rate: f64) -> String {
	format!("{:.4} PLN", rate)
}

pub fn format_percent(percent: f64) -> String {
	format!("{:.2}%", percent)
}

const SPARK_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// One block character per value, scaled between the smallest and largest.
pub fn sparkline(values: &[f64]) -> String {
	let (min, max) = values
		.iter()
		.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
			(lo.min(v), hi.max(v))
		});
	let span = max - min;

	values
		.iter()
		.map(|&v| {
			if span <= 0.0 {
				return SPARK_LEVELS[SPARK_LEVELS.len() / 2];
			}
			let level = ((v - min) / span * (SPARK_LEVELS.len() - 1) as f64)
				.round() as usize;
			SPARK_LEVELS[level.min(SPARK_LEVELS.len() - 1)]
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_format_rate() {
		assert_eq!(format_rate(4.0), "4.0000 PLN");
		assert_eq!(format_rate(3.65121), "3.6512 PLN");
		assert_eq!(format_rate(0.026617), "0.0266 PLN");
	}

	#[test]
	fn test_format_percent() {
		assert_eq!(format_percent(97.5), "97.50%");
		assert_eq!(format_percent(-0.123), "-0.12%");
		assert_eq!(format_percent(0.0), "0.00%");
	}

	#[test]
	fn test_sparkline() {
		assert_eq!(sparkline(&[1.0, 2.0, 3.0]), "▁▅█");
		assert_eq!(sparkline(&[4.0, 4.0]), "▅▅");
		assert_eq!(sparkline(&[]), "");
	}
}
