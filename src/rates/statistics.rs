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
use crate::rates::record::RateSeries;

/// Summary figures over one historical series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Statistics {
	pub min: f64,
	pub max: f64,
	pub mean: f64,

	/// Change from the first to the last record, in percent
	pub percent_change: f64,
}

/// Computes the summary of a series, or None if it is empty.
///
/// First and last are taken in source order, never re-sorted. A series with
/// a single record has nothing to compare against and reports no change.
pub fn compute_statistics(series: &RateSeries) -> Option<Statistics> {
	if series.is_empty() {
		return None;
	}

	let first = series.first()?.mid_rate;
	let last = series.last()?.mid_rate;

	let (min, max, sum) = series.mid_rates().fold(
		(f64::INFINITY, f64::NEG_INFINITY, 0.0),
		|(min, max, sum), rate| (min.min(rate), max.max(rate), sum + rate),
	);

	let percent_change = if series.len() < 2 {
		0.0
	} else {
		(last - first) / first * 100.0
	};

	Some(Statistics {
		min,
		max,
		mean: sum / series.len() as f64,
		percent_change,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::rates::record::RateRecord;
	use chrono::{Days, NaiveDate};

	const EPSILON: f64 = 1e-9;

	fn series_of(rates: &[f64]) -> RateSeries {
		let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
		RateSeries::new(
			rates
				.iter()
				.enumerate()
				.map(|(i, &r)| {
					RateRecord::new(
						start.checked_add_days(Days::new(i as u64)).unwrap(),
						r,
					)
				})
				.collect(),
		)
	}

	#[test]
	fn test_empty_series_has_no_statistics() {
		assert!(compute_statistics(&RateSeries::default()).is_none());
	}

	#[test]
	fn test_single_record_reports_no_change() {
		let stats = compute_statistics(&series_of(&[4.2])).unwrap();
		assert_eq!(stats.min, 4.2);
		assert_eq!(stats.max, 4.2);
		assert_eq!(stats.mean, 4.2);
		assert_eq!(stats.percent_change, 0.0);
	}

	#[test]
	fn test_thirty_day_ascending_series() {
		let rates: Vec<f64> = (0..30).map(|i| 4.00 + 0.10 * i as f64).collect();
		let stats = compute_statistics(&series_of(&rates)).unwrap();

		let sum: f64 = rates.iter().sum();
		assert!((stats.min - 4.00).abs() < EPSILON);
		assert!((stats.max - 6.90).abs() < EPSILON);
		assert!((stats.mean - sum / 30.0).abs() < EPSILON);
		assert!((stats.mean - 5.45).abs() < EPSILON);
		assert!((stats.percent_change - 72.5).abs() < EPSILON);
	}

	#[test]
	fn test_change_from_four_to_seven_ninety() {
		let stats =
			compute_statistics(&series_of(&[4.00, 5.10, 7.90])).unwrap();
		assert_eq!(format!("{:.2}", stats.percent_change), "97.50");
		assert!((stats.max - 7.90).abs() < EPSILON);
	}

	#[test]
	fn test_change_sign_follows_endpoints() {
		let flat = compute_statistics(&series_of(&[4.0, 4.5, 4.0])).unwrap();
		assert_eq!(flat.percent_change, 0.0);

		let up = compute_statistics(&series_of(&[4.0, 3.5, 4.1])).unwrap();
		assert!(up.percent_change > 0.0);

		let down = compute_statistics(&series_of(&[4.0, 4.5, 3.9])).unwrap();
		assert!(down.percent_change < 0.0);
	}

	#[test]
	fn test_change_uses_source_order_not_dates() {
		// Source order is authoritative even if dates were out of order
		let start = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
		let series = RateSeries::new(vec![
			RateRecord::new(start, 5.0),
			RateRecord::new(start.pred_opt().unwrap(), 4.0),
		]);

		let stats = compute_statistics(&series).unwrap();
		assert!((stats.percent_change - -20.0).abs() < EPSILON);
	}

	#[test]
	fn test_bounds_hold_for_irregular_series() {
		let rates = [4.3121, 4.2987, 4.3550, 4.1002, 4.4019, 4.3333, 4.2222];
		let stats = compute_statistics(&series_of(&rates)).unwrap();

		for r in rates {
			assert!(stats.min <= r && r <= stats.max);
		}
		assert!(stats.min <= stats.mean && stats.mean <= stats.max);
		assert_eq!(stats.min, 4.1002);
		assert_eq!(stats.max, 4.4019);
	}
}
