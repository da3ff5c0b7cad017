use std::fmt;

use serde::{Deserialize, Serialize};


/// One observed character and its statistics within a window's distribution.
///
/// `count` is accumulated during training. `p` (probability) and `cp`
/// (cumulative probability) are left at 0.0 until the distribution is
/// finalized; reading them before finalization is meaningless.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CharData {
	/// The observed character.
	pub(crate) chr: char,
	/// Number of times `chr` followed this distribution's window.
	pub(crate) count: usize,
	/// Probability: `count / total`, set by `finalize`.
	pub(crate) p: f64,
	/// Cumulative probability: running sum of `p` in record order, set by `finalize`.
	pub(crate) cp: f64,
}

impl CharData {
	/// Creates a record for the first observation of `chr`.
	fn new(chr: char) -> Self {
		Self { chr, count: 1, p: 0.0, cp: 0.0 }
	}
}

impl fmt::Display for CharData {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({} {} {:.4} {:.4})", self.chr, self.count, self.p, self.cp)
	}
}

/// Represents the empirical distribution of characters observed after one
/// specific window.
///
/// Conceptually, this is a node in a Markov chain where outgoing edges
/// are weighted by their number of observations.
///
/// ## Responsibilities:
/// - Accumulate character occurrences during training
/// - Finalize per-record probabilities once training is complete
/// - Sample the next character from a uniform draw against `cp` buckets
///
/// ## Invariants
/// - At most one record per distinct character
/// - Records keep first-seen order; never sorted by character or frequency
/// - Each record's count is strictly positive
/// - After `finalize`, `cp` is non-decreasing and the last record's `cp`
///   equals 1.0 within floating-point tolerance
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Distribution {
	/// The window this distribution conditions on.
	key: String,
	/// Observed characters in first-seen order.
	records: Vec<CharData>,
}

impl Distribution {
	/// Creates a new empty distribution for the given window.
	pub(crate) fn new(key: &str) -> Self {
		Self {
			key: key.to_owned(),
			records: Vec::new(),
		}
	}

	/// Records an occurrence of `chr` after this distribution's window.
	///
	/// - If a record for `chr` already exists, its count is increased.
	/// - Otherwise, a new record is appended with an initial count of 1.
	pub(crate) fn update(&mut self, chr: char) {
		match self.records.iter_mut().find(|record| record.chr == chr) {
			Some(record) => record.count += 1,
			None => self.records.push(CharData::new(chr)),
		}
	}

	/// Computes `p` and `cp` for every record in place.
	///
	/// Must be called exactly once, after all training updates to this
	/// distribution. The total is strictly positive because a distribution
	/// is only created when at least one observation occurs.
	pub(crate) fn finalize(&mut self) {
		let total: usize = self.records.iter().map(|record| record.count).sum();

		let mut cumulative = 0.0;
		for record in &mut self.records {
			record.p = record.count as f64 / total as f64;
			cumulative += record.p;
			record.cp = cumulative;
		}
	}

	/// Returns the character whose cumulative-probability bucket contains `r`.
	///
	/// `r` must be a uniform draw in [0, 1) and the distribution must be
	/// finalized. Records are scanned in stored order and the first one
	/// whose `cp` is strictly greater than `r` wins. If floating-point
	/// rounding lets the scan run off the end, the last record is returned
	/// so the result stays deterministic.
	///
	/// Returns `None` only for an empty distribution, which training never
	/// produces.
	pub(crate) fn sample(&self, r: f64) -> Option<char> {
		for record in &self.records {
			if r < record.cp {
				return Some(record.chr);
			}
		}
		self.records.last().map(|record| record.chr)
	}

	/// Read-only view of the records, in first-seen order.
	pub(crate) fn records(&self) -> &[CharData] {
		&self.records
	}
}

impl fmt::Display for Distribution {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (i, record) in self.records().iter().enumerate() {
			if i > 0 {
				write!(f, " ")?;
			}
			write!(f, "{}", record)?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn distribution_from(observations: &str) -> Distribution {
		let mut distribution = Distribution::new("ab");
		for chr in observations.chars() {
			distribution.update(chr);
		}
		distribution
	}

	#[test]
	fn update_counts_and_keeps_first_seen_order() {
		let distribution = distribution_from("cdcdc");

		let records = distribution.records();
		assert_eq!(records.len(), 2);
		assert_eq!(records[0].chr, 'c');
		assert_eq!(records[0].count, 3);
		assert_eq!(records[1].chr, 'd');
		assert_eq!(records[1].count, 2);
	}

	#[test]
	fn finalize_probabilities_sum_to_one() {
		let mut distribution = distribution_from("xxyz");
		distribution.finalize();

		let sum: f64 = distribution.records().iter().map(|record| record.p).sum();
		assert!((sum - 1.0).abs() < 1e-9);
	}

	#[test]
	fn finalize_cumulative_is_non_decreasing_and_ends_at_one() {
		let mut distribution = distribution_from("aabbbc");
		distribution.finalize();

		let mut previous = 0.0;
		for record in distribution.records() {
			assert!(record.cp >= previous);
			previous = record.cp;
		}
		assert!((previous - 1.0).abs() < 1e-9);
	}

	#[test]
	fn sample_picks_the_bucket_containing_r() {
		let mut distribution = distribution_from("xxyz");
		distribution.finalize();
		// Buckets: x -> [0, 0.5), y -> [0.5, 0.75), z -> [0.75, 1)

		assert_eq!(distribution.sample(0.0), Some('x'));
		assert_eq!(distribution.sample(0.49), Some('x'));
		assert_eq!(distribution.sample(0.5), Some('y'));
		assert_eq!(distribution.sample(0.74), Some('y'));
		assert_eq!(distribution.sample(0.75), Some('z'));
		assert_eq!(distribution.sample(0.99), Some('z'));
	}

	#[test]
	fn sample_falls_back_to_the_last_record() {
		let mut distribution = distribution_from("xy");
		distribution.finalize();

		// A draw at or beyond the last cp (rounding edge) must still
		// return a character.
		assert_eq!(distribution.sample(1.0), Some('y'));
	}

	#[test]
	fn sample_on_empty_distribution_is_none() {
		let distribution = Distribution::new("ab");
		assert_eq!(distribution.sample(0.5), None);
	}
}
